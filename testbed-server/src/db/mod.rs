//! Database layer - descriptor handling, connection pool, repositories
//!
//! # Design Principles
//!
//! - Connection descriptor normalized once at startup, immutable afterwards
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - One statement per operation, values always bound - no SQL assembly

pub mod descriptor;
pub mod pool;
pub mod repos;

pub use descriptor::{connect_options, normalize, DescriptorError};
pub use pool::create_pool;
pub use repos::*;
