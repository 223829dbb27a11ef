//! Review domain model and parameters.

use chrono::{DateTime, Utc};

use crate::model::review::{ReviewDto, ReviewRequestDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub name: String,
    pub review: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            review: entity.review,
            rating: entity.rating,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            name: self.name,
            review: self.review,
            rating: self.rating,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveReviewParam {
    pub name: String,
    pub review: String,
    pub rating: i32,
}

impl From<ReviewRequestDto> for SaveReviewParam {
    fn from(dto: ReviewRequestDto) -> Self {
        Self {
            name: dto.name,
            review: dto.review,
            rating: dto.rating,
        }
    }
}
