pub mod auth_store;
pub mod report_store;

pub use auth_store::{AuthStore, SessionStatus};
pub use report_store::ReportStore;
