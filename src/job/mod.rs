pub mod config;
pub mod types;
pub mod validation;

pub use config::{load_store, save_store};
pub use types::{JobConfig, JobStore};
pub use validation::job_name_error;
