//! Domain types and pure logic for the agot website API.
//!
//! Nothing in here touches the database or the network; the `db`, `mail`
//! and `api` crates build on these types.

pub mod error;
pub mod game;
pub mod notification;
pub mod room;
pub mod types;
