//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Create DTOs consumed by the repository layer
//!
//! Wire field names follow the public API contract (camelCase, `desc` for
//! the brand description), so every entity carries serde renames.

pub mod account;
pub mod brand;
