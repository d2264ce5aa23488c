use crate::job::{JobConfig, JobStore, job_name_error};
use crate::unsaved::UnsavedSummary;

#[derive(Clone, Debug)]
pub struct ConsoleState {
    pub store: JobStore,
    pub saved: JobConfig,
    pub draft: JobConfig,
    pub is_edit: bool,
    pub delete_visible: bool,
    pub message: Option<Message>,
}

#[derive(Clone, Debug)]
pub struct Message {
    pub text: String,
    pub is_error: bool,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl ConsoleState {
    pub fn new() -> Self {
        Self {
            store: JobStore::new(),
            saved: JobConfig::new(),
            draft: JobConfig::new(),
            is_edit: false,
            delete_visible: false,
            message: None,
        }
    }

    /// Loads a store read from disk and opens its first job for editing,
    /// or starts a blank create form when the store is empty.
    pub fn adopt_store(&mut self, store: JobStore) {
        if let Some(first) = store.jobs.first() {
            self.saved = first.clone();
            self.is_edit = true;
        } else {
            self.saved = JobConfig::new();
            self.is_edit = false;
        }
        self.draft = self.saved.clone();
        self.store = store;
    }

    pub fn unsaved_count(&self) -> usize {
        let mut count = 0;
        if self.draft.name != self.saved.name {
            count += 1;
        }
        if self.draft.description != self.saved.description {
            count += 1;
        }
        count
    }

    /// The name field's validation error. The name is locked while editing
    /// an existing job, and a pristine blank create form is not flagged.
    pub fn name_error(&self) -> Option<String> {
        if self.is_edit {
            return None;
        }
        if self.draft.name.is_empty() && self.saved.name.is_empty() {
            return None;
        }
        job_name_error(&self.draft.name).map(str::to_string)
    }

    pub fn form_error_count(&self) -> usize {
        usize::from(self.name_error().is_some())
    }

    pub fn summary(&self) -> UnsavedSummary {
        UnsavedSummary::new(self.unsaved_count(), self.form_error_count())
    }

    pub fn revert_draft(&mut self) {
        self.draft = self.saved.clone();
    }

    /// Promotes the draft to the saved snapshot after a successful commit.
    pub fn apply_draft(&mut self) {
        self.saved = self.draft.clone();
        self.is_edit = true;
    }

    pub fn reset_after_delete(&mut self) {
        self.saved = JobConfig::new();
        self.draft = JobConfig::new();
        self.is_edit = false;
        self.delete_visible = false;
    }

    pub fn set_message(&mut self, message: Message) {
        self.message = Some(message);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsaved_count_tracks_changed_fields() {
        let mut state = ConsoleState::new();
        assert_eq!(state.unsaved_count(), 0);

        state.draft.name = "rollup-1".to_string();
        assert_eq!(state.unsaved_count(), 1);

        state.draft.description = "hourly".to_string();
        assert_eq!(state.unsaved_count(), 2);

        state.revert_draft();
        assert_eq!(state.unsaved_count(), 0);
    }

    #[test]
    fn test_pristine_blank_form_has_no_errors() {
        let state = ConsoleState::new();
        assert_eq!(state.form_error_count(), 0);
    }

    #[test]
    fn test_invalid_draft_name_is_counted() {
        let mut state = ConsoleState::new();
        state.draft.name = "Bad Name".to_string();
        assert_eq!(state.form_error_count(), 1);

        state.draft.name = "good-name".to_string();
        assert_eq!(state.form_error_count(), 0);
    }

    #[test]
    fn test_name_errors_ignored_in_edit_mode() {
        let mut state = ConsoleState::new();
        let mut store = JobStore::new();
        store.upsert_job(JobConfig {
            name: "rollup-1".to_string(),
            description: String::new(),
        });
        state.adopt_store(store);

        assert!(state.is_edit);
        state.draft.description = "changed".to_string();
        assert_eq!(state.summary().unsaved_count, 1);
        assert_eq!(state.summary().form_error_count, 0);
    }

    #[test]
    fn test_apply_draft_promotes_snapshot() {
        let mut state = ConsoleState::new();
        state.draft.name = "rollup-1".to_string();
        state.apply_draft();

        assert_eq!(state.saved.name, "rollup-1");
        assert!(state.is_edit);
        assert_eq!(state.unsaved_count(), 0);
    }
}
