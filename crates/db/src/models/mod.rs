//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Serialize` response type exposing only the public fields
//! - `Deserialize` create/update DTOs where the API accepts input

pub mod game;
pub mod room;
pub mod user;
