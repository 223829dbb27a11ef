//! Phone-verified user domain models and parameters.

use crate::model::user::CreateUserDto;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_initial: String,
    pub phone: String,
    pub sms_updates: bool,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_initial: entity.last_initial,
            phone: entity.phone,
            sms_updates: entity.sms_updates,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub first_name: String,
    pub last_initial: String,
    pub phone: String,
    pub sms_updates: bool,
}

impl From<CreateUserDto> for CreateUserParam {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_initial: dto.last_initial,
            phone: dto.phone,
            sms_updates: dto.sms_updates.unwrap_or(false),
        }
    }
}
