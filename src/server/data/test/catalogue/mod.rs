//! Repository tests for the simple catalogue tables: gallery, games and reviews.

use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod gallery;
mod game;
mod review;
