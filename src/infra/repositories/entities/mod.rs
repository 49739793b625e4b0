//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod user;

// Re-exports for public API convenience
pub use user::{Entity as UserEntity, Model as UserModel};
