//! Core building blocks shared by every FoodShare crate: the unified
//! error type, the `AppResult` alias, and the configuration schema.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
