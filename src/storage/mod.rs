//! Storage layer for the cricviz statistics tracker
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Cricketer CRUD and scope queries
//! - `students`: Student registry queries
//! - `store`: The `PlayerStore` trait and an in-memory implementation

pub mod models;
pub mod queries;
pub mod schema;
pub mod store;
pub mod students;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::CricketDatabase;
pub use store::{MemoryStore, PlayerStore};
