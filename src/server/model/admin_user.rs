//! Admin user domain models and parameters.
//!
//! Admins manage the gallery, schedule and waitlist from the back office. The stored
//! password hash never leaves the data and service layers.

use serde::{Deserialize, Serialize};

use crate::model::auth::{AdminUserDto, RegisterDto};

#[derive(Debug, Clone, PartialEq)]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Bcrypt hash of the admin's password.
    pub password_hash: String,
}

impl AdminUser {
    pub fn from_entity(entity: entity::admin_user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password,
        }
    }

    /// Converts to the public DTO, dropping the password hash.
    pub fn into_dto(self) -> AdminUserDto {
        AdminUserDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Parameters for inserting an admin whose password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateAdminUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// JWT claims issued to an authenticated admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Admin user ID.
    pub id: String,
    pub email: String,
    /// Expiry as seconds since the Unix epoch.
    pub exp: usize,
}

/// A freshly issued token together with the admin it identifies.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: AdminUser,
}

/// Registration details as submitted, password in plain text.
#[derive(Debug, Clone)]
pub struct RegisterAdminParam {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<RegisterDto> for RegisterAdminParam {
    fn from(dto: RegisterDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
        }
    }
}
