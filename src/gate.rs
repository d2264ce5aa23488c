/// Phrase the operator must type before a destructive action unlocks.
/// Case-sensitive, exact match.
pub const UNLOCK_PHRASE: &str = "delete";

/// State behind the delete-confirmation dialog: the action stays locked
/// until the typed value equals [`UNLOCK_PHRASE`].
///
/// Every hidden-to-visible transition clears the typed value, so text left
/// over from a previous confirmation session never leaks into a new one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteGate {
    visible: bool,
    typed: String,
}

impl DeleteGate {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn set_visible(&mut self, visible: bool) {
        if visible && !self.visible {
            self.typed.clear();
        }
        self.visible = visible;
    }

    pub fn set_typed(&mut self, value: impl Into<String>) {
        self.typed = value.into();
    }

    pub fn is_unlocked(&self) -> bool {
        self.typed == UNLOCK_PHRASE
    }
}
