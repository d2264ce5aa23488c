mod bottom_bar;
mod content_panel;
mod delete_modal;
mod job_config;
mod message_bar;
mod unsaved_bar;

pub use bottom_bar::{BottomBarHost, BottomBarOutlet};
pub use content_panel::ContentPanel;
pub use delete_modal::DeleteModal;
pub use job_config::JobConfigPanel;
pub use message_bar::MessageBar;
pub use unsaved_bar::{BarSlots, SubmitFuture, UnsavedChangesBar};
