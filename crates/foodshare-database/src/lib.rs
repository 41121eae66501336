//! Persistence layer for FoodShare: SQLite pool management, embedded
//! migrations, CSV seeding, dynamic tabular queries, and per-entity
//! repositories.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod seed;
pub mod table;
