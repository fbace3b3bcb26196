//! Request handlers, one module per resource.

pub mod game;
pub mod notify;
pub mod room;
pub mod user;
