//! Helpers for interpreting SeaORM results at the repository and service boundary.

use sea_orm::{DbErr, SqlErr};

/// Returns true when the error is a unique constraint violation reported by the
/// datastore (duplicate phone, duplicate email).
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Maps the "row vanished before the update ran" outcome to `None`.
///
/// An update is issued after a successful lookup; if a concurrent delete (for example
/// the waitlist sweep) wins in between, SeaORM reports `RecordNotUpdated`. Callers treat
/// that exactly like a missing row.
///
/// # Arguments
/// - `result` - Result of an `ActiveModel::update` call
///
/// # Returns
/// - `Ok(Some(model))` - Row was updated
/// - `Ok(None)` - Row no longer exists
/// - `Err(DbErr)` - Any other database error
pub fn updated_or_none<T>(result: Result<T, DbErr>) -> Result<Option<T>, DbErr> {
    match result {
        Ok(model) => Ok(Some(model)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e),
    }
}
