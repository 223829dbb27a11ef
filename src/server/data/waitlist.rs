//! Waitlist data repository for database operations.
//!
//! Provides the `WaitlistRepository` for the waitlist table: inserts, the check-in and
//! flag transitions, deletes, and the bulk delete used by the expiry sweep. Entity
//! models are converted to `WaitlistEntry` domain models at this boundary.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::{
    model::waitlist::{CreateWaitlistEntryParam, UpdateWaitlistEntryParam, WaitlistEntry},
    util::db::updated_or_none,
};

/// Repository providing database operations for the waitlist.
pub struct WaitlistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WaitlistRepository<'a> {
    /// Creates a new WaitlistRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new, not yet checked-in entry.
    ///
    /// The phone column carries a unique index, so inserting a phone that is already on
    /// the waitlist fails with a unique constraint violation rather than creating a
    /// second row.
    ///
    /// # Arguments
    /// - `param` - Normalized entry fields
    /// - `created_at` - Creation timestamp to store
    ///
    /// # Returns
    /// - `Ok(WaitlistEntry)` - The created entry
    /// - `Err(DbErr)` - Database error, including the unique violation on `phone`
    pub async fn create(
        &self,
        param: CreateWaitlistEntryParam,
        created_at: DateTime<Utc>,
    ) -> Result<WaitlistEntry, DbErr> {
        let entity = entity::waitlist::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            first_name: ActiveValue::Set(param.first_name),
            last_initial: ActiveValue::Set(param.last_initial),
            phone: ActiveValue::Set(param.phone),
            game_type: ActiveValue::Set(param.game_type),
            sms_updates: ActiveValue::Set(param.sms_updates),
            checked_in: ActiveValue::Set(false),
            created_at: ActiveValue::Set(created_at),
        }
        .insert(self.db)
        .await?;

        Ok(WaitlistEntry::from_entity(entity))
    }

    /// Gets every entry on the waitlist, in no particular order.
    pub async fn get_all(&self) -> Result<Vec<WaitlistEntry>, DbErr> {
        let entities = entity::prelude::Waitlist::find().all(self.db).await?;

        Ok(entities.into_iter().map(WaitlistEntry::from_entity).collect())
    }

    /// Marks an entry as checked in.
    ///
    /// # Returns
    /// - `Ok(Some(WaitlistEntry))` - The updated entry
    /// - `Ok(None)` - No entry with that ID (nothing was modified)
    /// - `Err(DbErr)` - Database error during update
    pub async fn check_in(&self, id: &str) -> Result<Option<WaitlistEntry>, DbErr> {
        let Some(entity) = entity::prelude::Waitlist::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::waitlist::ActiveModel = entity.into();
        active_model.checked_in = ActiveValue::Set(true);

        let updated = updated_or_none(active_model.update(self.db).await)?;

        Ok(updated.map(WaitlistEntry::from_entity))
    }

    /// Replaces an entry's identifying fields and clears both flags.
    ///
    /// `sms_updates` and `checked_in` are reset to `false` in the same statement.
    ///
    /// # Returns
    /// - `Ok(Some(WaitlistEntry))` - The updated entry
    /// - `Ok(None)` - No entry with that ID
    /// - `Err(DbErr)` - Database error, including a unique violation if the new phone
    ///   belongs to another entry
    pub async fn update(
        &self,
        param: UpdateWaitlistEntryParam,
    ) -> Result<Option<WaitlistEntry>, DbErr> {
        let Some(entity) = entity::prelude::Waitlist::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::waitlist::ActiveModel = entity.into();
        active_model.first_name = ActiveValue::Set(param.first_name);
        active_model.last_initial = ActiveValue::Set(param.last_initial);
        active_model.phone = ActiveValue::Set(param.phone);
        active_model.game_type = ActiveValue::Set(param.game_type);
        active_model.sms_updates = ActiveValue::Set(false);
        active_model.checked_in = ActiveValue::Set(false);

        let updated = updated_or_none(active_model.update(self.db).await)?;

        Ok(updated.map(WaitlistEntry::from_entity))
    }

    /// Clears the SMS opt-in and check-in flags without touching any other field.
    ///
    /// # Returns
    /// - `Ok(Some(WaitlistEntry))` - The updated entry
    /// - `Ok(None)` - No entry with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn reset_flags(&self, id: &str) -> Result<Option<WaitlistEntry>, DbErr> {
        let Some(entity) = entity::prelude::Waitlist::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::waitlist::ActiveModel = entity.into();
        active_model.sms_updates = ActiveValue::Set(false);
        active_model.checked_in = ActiveValue::Set(false);

        let updated = updated_or_none(active_model.update(self.db).await)?;

        Ok(updated.map(WaitlistEntry::from_entity))
    }

    /// Deletes the entry with the given ID.
    ///
    /// # Returns
    /// - `Ok(true)` - Entry deleted
    /// - `Ok(false)` - No entry with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Waitlist::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every entry created at or before `cutoff` that has not checked in.
    ///
    /// Runs as a single bulk statement. Checked-in entries are never matched.
    ///
    /// # Arguments
    /// - `cutoff` - Entries with `created_at <= cutoff` are eligible
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted entries (zero is normal)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_unconfirmed_created_before(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Waitlist::delete_many()
            .filter(entity::waitlist::Column::CreatedAt.lte(cutoff))
            .filter(entity::waitlist::Column::CheckedIn.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
