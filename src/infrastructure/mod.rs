//! Infrastructure layer - External service implementations

pub mod auth;
pub mod logging;
pub mod services;
pub mod storage;
pub mod user;
