//! End-to-end HTTP tests against the full router over an in-memory
//! database.

mod helpers;

mod admin_test;
mod analytics_test;
mod browse_test;
mod console_test;
mod directory_test;
mod listing_test;
