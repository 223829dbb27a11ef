//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let entry = factory::create_waitlist_entry(&db).await?;
//!
//!     // Create an entry that is old enough to be swept
//!     let stale = factory::waitlist::WaitlistEntryFactory::new(&db)
//!         .created_at(Utc::now() - Duration::hours(2))
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `admin_user` - Create admin user entities
//! - `schedule` - Create schedules with nested games
//! - `user` - Create verified user entities
//! - `waitlist` - Create waitlist entries
//! - `helpers` - Shared ID generation

pub mod admin_user;
pub mod helpers;
pub mod schedule;
pub mod user;
pub mod waitlist;

pub use admin_user::create_admin_user;
pub use schedule::create_schedule;
pub use user::create_user;
pub use waitlist::create_waitlist_entry;
