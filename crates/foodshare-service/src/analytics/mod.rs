//! The fixed analytics catalog.

pub mod catalog;
pub mod service;

pub use catalog::{Report, CATALOG};
pub use service::{AnalyticsService, ReportResult, ReportSummary};
