/// Dirty and invalid counts reported by the calling form on every render.
/// The bottom bar only reads these; it never owns or mutates them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnsavedSummary {
    pub unsaved_count: usize,
    pub form_error_count: usize,
}

/// Badge shown in the bar's status slot. Form errors suppress the unsaved
/// count entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeBadge {
    Errors(usize),
    Unsaved(usize),
}

impl UnsavedSummary {
    pub fn new(unsaved_count: usize, form_error_count: usize) -> Self {
        Self {
            unsaved_count,
            form_error_count,
        }
    }

    pub fn has_changes(&self) -> bool {
        self.unsaved_count > 0 || self.form_error_count > 0
    }

    pub fn badge(&self) -> Option<ChangeBadge> {
        if self.form_error_count > 0 {
            Some(ChangeBadge::Errors(self.form_error_count))
        } else if self.unsaved_count > 0 {
            Some(ChangeBadge::Unsaved(self.unsaved_count))
        } else {
            None
        }
    }
}

impl ChangeBadge {
    pub fn text(&self) -> String {
        match self {
            ChangeBadge::Errors(count) => format!("{} form errors.", count),
            ChangeBadge::Unsaved(count) => format!("{} unsaved changes.", count),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ChangeBadge::Errors(_) => "danger",
            ChangeBadge::Unsaved(_) => "warning",
        }
    }
}
