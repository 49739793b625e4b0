//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod timestamp;
pub mod user;

pub use timestamp::TimestampFormat;
pub use user::{CreateUser, NewUser, User};
