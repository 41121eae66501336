//! Provider, receiver, and claim directory.

pub mod service;

pub use service::DirectoryService;
