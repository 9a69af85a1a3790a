pub mod auth;
pub mod category;
pub mod filters;
pub mod report;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, User};
pub use category::{default_categories, CategoryInfo};
pub use filters::{ReportFilters, SortBy};
pub use report::{Categoria, Comment, Estado, NewReport, Prioridad, Report, ReportPatch, VoteTipo};
