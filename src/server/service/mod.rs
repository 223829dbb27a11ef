//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, normalization and domain rules such as the
//!   waitlist retention window
//! - **Orchestration**: Coordinating repository calls, upload storage and the SMS
//!   verification provider
//! - **Error Mapping**: Turning missing rows and constraint violations into `AppError`

pub mod auth;
pub mod gallery;
pub mod game;
pub mod otp;
pub mod review;
pub mod schedule;
pub mod user;
pub mod waitlist;
