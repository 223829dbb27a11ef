//! Waitlist domain models and parameters.
//!
//! A waitlist entry is a patron's place in the queue for a game. Entries are unique
//! per phone number, become exempt from expiry once checked in, and are otherwise
//! removed by the sweep after the retention window.

use chrono::{DateTime, Utc};

use crate::model::waitlist::{CreateWaitlistEntryDto, UpdateWaitlistEntryDto, WaitlistEntryDto};

/// A single patron's place on the waitlist.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitlistEntry {
    pub id: String,
    /// First name, stored trimmed.
    pub first_name: String,
    /// Last initial, stored trimmed and upper-cased.
    pub last_initial: String,
    /// Phone number, unique across all entries.
    pub phone: String,
    pub game_type: String,
    /// Whether the patron opted in to SMS updates.
    pub sms_updates: bool,
    /// Whether the patron has arrived. Checked-in entries are never swept.
    pub checked_in: bool,
    /// Assigned at insert, never modified.
    pub created_at: DateTime<Utc>,
}

impl WaitlistEntry {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::waitlist::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_initial: entity.last_initial,
            phone: entity.phone,
            game_type: entity.game_type,
            sms_updates: entity.sms_updates,
            checked_in: entity.checked_in,
            created_at: entity.created_at,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> WaitlistEntryDto {
        WaitlistEntryDto {
            id: self.id,
            first_name: self.first_name,
            last_initial: self.last_initial,
            phone: self.phone,
            game_type: self.game_type,
            sms_updates: self.sms_updates,
            checked_in: self.checked_in,
            created_at: self.created_at,
        }
    }
}

/// Parameters for adding a patron to the waitlist.
#[derive(Debug, Clone)]
pub struct CreateWaitlistEntryParam {
    pub first_name: String,
    pub last_initial: String,
    pub phone: String,
    pub game_type: String,
    pub sms_updates: bool,
}

impl CreateWaitlistEntryParam {
    /// Converts the request DTO, defaulting a missing SMS opt-in to `false`.
    pub fn from_dto(dto: CreateWaitlistEntryDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_initial: dto.last_initial,
            phone: dto.phone,
            game_type: dto.game_type,
            sms_updates: dto.sms_updates.unwrap_or(false),
        }
    }
}

/// Parameters for replacing an entry's identifying fields.
#[derive(Debug, Clone)]
pub struct UpdateWaitlistEntryParam {
    pub id: String,
    pub first_name: String,
    pub last_initial: String,
    pub phone: String,
    pub game_type: String,
}

impl UpdateWaitlistEntryParam {
    pub fn from_dto(id: String, dto: UpdateWaitlistEntryDto) -> Self {
        Self {
            id,
            first_name: dto.first_name,
            last_initial: dto.last_initial,
            phone: dto.phone,
            game_type: dto.game_type,
        }
    }
}
