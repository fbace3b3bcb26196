//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod game_repo;
pub mod room_repo;
pub mod user_repo;

pub use game_repo::GameRepo;
pub use room_repo::RoomRepo;
pub use user_repo::UserRepo;
