//! The read-only ad-hoc SQL console.

pub mod service;

pub use service::ConsoleService;
