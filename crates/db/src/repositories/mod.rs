//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod favorite_repo;
pub mod notification_repo;
pub mod trip_repo;
pub mod user_repo;

pub use favorite_repo::FavoriteRepo;
pub use notification_repo::NotificationRepo;
pub use trip_repo::TripRepo;
pub use user_repo::UserRepo;
