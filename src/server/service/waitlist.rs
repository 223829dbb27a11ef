//! Waitlist lifecycle: enqueue, check-in, update, flag reset, removal and expiry.
//!
//! Uniqueness by phone is enforced by the datastore's unique index; this service only
//! translates a violation into a `Conflict`. Entries that have not checked in within
//! the retention window are purged by `sweep_expired`, which the scheduler calls once
//! per minute.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::waitlist::WaitlistRepository,
    error::AppError,
    model::waitlist::{CreateWaitlistEntryParam, UpdateWaitlistEntryParam, WaitlistEntry},
    util::db::is_unique_violation,
};

/// Minutes an entry may stay on the waitlist without checking in.
pub const RETENTION_WINDOW_MINUTES: i64 = 60;

const DUPLICATE_PHONE_MESSAGE: &str = "Phone number already exists in the waitlist";
const REQUIRED_FIELDS_MESSAGE: &str = "First name, last initial, phone and game type are required";

pub struct WaitlistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WaitlistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every entry on the waitlist, unordered.
    pub async fn list(&self) -> Result<Vec<WaitlistEntry>, AppError> {
        let repo = WaitlistRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Adds a patron to the waitlist.
    ///
    /// Names are normalized before insert: the first name is trimmed and the last
    /// initial trimmed and upper-cased. The entry starts not checked in.
    ///
    /// # Arguments
    /// - `param` - Entry fields as submitted
    ///
    /// # Returns
    /// - `Ok(WaitlistEntry)` - The created entry
    /// - `Err(AppError::BadRequest)` - A required field is empty
    /// - `Err(AppError::Conflict)` - The phone is already on the waitlist
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn enqueue(
        &self,
        param: CreateWaitlistEntryParam,
    ) -> Result<WaitlistEntry, AppError> {
        let fields = normalize(
            &param.first_name,
            &param.last_initial,
            &param.phone,
            &param.game_type,
        )?;

        let repo = WaitlistRepository::new(self.db);
        let result = repo
            .create(
                CreateWaitlistEntryParam {
                    first_name: fields.first_name,
                    last_initial: fields.last_initial,
                    phone: fields.phone,
                    game_type: fields.game_type,
                    sms_updates: param.sms_updates,
                },
                Utc::now(),
            )
            .await;

        result.map_err(map_duplicate_phone)
    }

    /// Marks an entry as checked in, exempting it from expiry.
    ///
    /// # Returns
    /// - `Ok(WaitlistEntry)` - The checked-in entry
    /// - `Err(AppError::NotFound)` - No entry with that ID, including one removed by
    ///   the sweep while this request was in flight
    pub async fn check_in(&self, id: &str) -> Result<WaitlistEntry, AppError> {
        let repo = WaitlistRepository::new(self.db);

        repo.check_in(id).await?.ok_or_else(not_found)
    }

    /// Replaces an entry's identifying fields.
    ///
    /// Fields are normalized like `enqueue`. Both `sms_updates` and `checked_in` are
    /// reset to `false` by every update.
    ///
    /// # Returns
    /// - `Ok(WaitlistEntry)` - The updated entry
    /// - `Err(AppError::BadRequest)` - A required field is empty
    /// - `Err(AppError::NotFound)` - No entry with that ID
    /// - `Err(AppError::Conflict)` - The new phone belongs to another entry
    pub async fn update(&self, param: UpdateWaitlistEntryParam) -> Result<WaitlistEntry, AppError> {
        let fields = normalize(
            &param.first_name,
            &param.last_initial,
            &param.phone,
            &param.game_type,
        )?;

        let repo = WaitlistRepository::new(self.db);
        let result = repo
            .update(UpdateWaitlistEntryParam {
                id: param.id,
                first_name: fields.first_name,
                last_initial: fields.last_initial,
                phone: fields.phone,
                game_type: fields.game_type,
            })
            .await;

        result.map_err(map_duplicate_phone)?.ok_or_else(not_found)
    }

    /// Clears the SMS opt-in and check-in flags of an entry.
    pub async fn reset_flags(&self, id: &str) -> Result<WaitlistEntry, AppError> {
        let repo = WaitlistRepository::new(self.db);

        repo.reset_flags(id).await?.ok_or_else(not_found)
    }

    /// Removes exactly the entry with the given ID.
    pub async fn remove(&self, id: &str) -> Result<(), AppError> {
        let repo = WaitlistRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }

    /// Deletes every entry that was created at least one retention window before
    /// `now` and has not checked in.
    ///
    /// # Arguments
    /// - `now` - Reference time of the sweep
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of entries removed
    /// - `Err(AppError::DbErr)` - The bulk delete failed
    pub async fn sweep_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let cutoff = now - Duration::minutes(RETENTION_WINDOW_MINUTES);
        let repo = WaitlistRepository::new(self.db);

        Ok(repo.delete_unconfirmed_created_before(cutoff).await?)
    }
}

struct NormalizedFields {
    first_name: String,
    last_initial: String,
    phone: String,
    game_type: String,
}

fn normalize(
    first_name: &str,
    last_initial: &str,
    phone: &str,
    game_type: &str,
) -> Result<NormalizedFields, AppError> {
    let first_name = first_name.trim();
    let last_initial = last_initial.trim();

    if first_name.is_empty()
        || last_initial.is_empty()
        || phone.trim().is_empty()
        || game_type.trim().is_empty()
    {
        return Err(AppError::BadRequest(REQUIRED_FIELDS_MESSAGE.to_string()));
    }

    Ok(NormalizedFields {
        first_name: first_name.to_string(),
        last_initial: last_initial.to_uppercase(),
        phone: phone.to_string(),
        game_type: game_type.to_string(),
    })
}

fn map_duplicate_phone(err: DbErr) -> AppError {
    if is_unique_violation(&err) {
        AppError::Conflict(DUPLICATE_PHONE_MESSAGE.to_string())
    } else {
        AppError::DbErr(err)
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Waitlist entry not found".to_string())
}
