//! Infrastructure services

mod dashboard_service;
mod user_service;

pub use dashboard_service::{DashboardReport, DashboardService};
pub use user_service::{CreateUserRequest, UpdateUserRequest, UserService};
