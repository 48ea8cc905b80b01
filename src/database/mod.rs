pub mod models;
pub mod pool;
pub mod repository;

pub use pool::{connect, migrate, DatabaseError};
