//! Waitlist factory for creating test waitlist entries.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating waitlist entries with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::waitlist::WaitlistEntryFactory;
///
/// let entry = WaitlistEntryFactory::new(&db)
///     .phone("555-0100")
///     .checked_in(true)
///     .created_at(Utc::now() - Duration::hours(2))
///     .build()
///     .await?;
/// ```
pub struct WaitlistEntryFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_initial: String,
    phone: String,
    game_type: String,
    sms_updates: bool,
    checked_in: bool,
    created_at: DateTime<Utc>,
}

impl<'a> WaitlistEntryFactory<'a> {
    /// Creates a new WaitlistEntryFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Player {id}"`
    /// - last_initial: `"P"`
    /// - phone: `"555-{id:04}"`
    /// - game_type: `"1/2 NLH"`
    /// - sms_updates / checked_in: `false`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("Player {}", id),
            last_initial: "P".to_string(),
            phone: format!("555-{:04}", id),
            game_type: "1/2 NLH".to_string(),
            sms_updates: false,
            checked_in: false,
            created_at: Utc::now(),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_initial(mut self, last_initial: impl Into<String>) -> Self {
        self.last_initial = last_initial.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn game_type(mut self, game_type: impl Into<String>) -> Self {
        self.game_type = game_type.into();
        self
    }

    pub fn sms_updates(mut self, sms_updates: bool) -> Self {
        self.sms_updates = sms_updates;
        self
    }

    pub fn checked_in(mut self, checked_in: bool) -> Self {
        self.checked_in = checked_in;
        self
    }

    /// Overrides the creation timestamp, used to age entries for sweep tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the waitlist entry into the database.
    ///
    /// # Returns
    /// - `Ok(entity::waitlist::Model)` - Created entry
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate phone)
    pub async fn build(self) -> Result<entity::waitlist::Model, DbErr> {
        entity::waitlist::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            first_name: ActiveValue::Set(self.first_name),
            last_initial: ActiveValue::Set(self.last_initial),
            phone: ActiveValue::Set(self.phone),
            game_type: ActiveValue::Set(self.game_type),
            sms_updates: ActiveValue::Set(self.sms_updates),
            checked_in: ActiveValue::Set(self.checked_in),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a waitlist entry with default values.
pub async fn create_waitlist_entry(
    db: &DatabaseConnection,
) -> Result<entity::waitlist::Model, DbErr> {
    WaitlistEntryFactory::new(db).build().await
}
