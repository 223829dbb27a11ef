use sea_orm::DatabaseConnection;

use crate::server::{
    data::review::ReviewRepository,
    error::AppError,
    model::review::{Review, SaveReviewParam},
};

const MIN_RATING: i32 = 1;
const MAX_RATING: i32 = 5;

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Review>, AppError> {
        let repo = ReviewRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Creates a review after checking the rating is within range
    pub async fn create(&self, param: SaveReviewParam) -> Result<Review, AppError> {
        validate_rating(param.rating)?;

        let repo = ReviewRepository::new(self.db);

        Ok(repo.create(param).await?)
    }

    /// Updates a review after checking the rating is within range
    pub async fn update(&self, id: &str, param: SaveReviewParam) -> Result<Review, AppError> {
        validate_rating(param.rating)?;

        let repo = ReviewRepository::new(self.db);

        repo.update(id, param).await?.ok_or_else(not_found)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let repo = ReviewRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }
}

fn validate_rating(rating: i32) -> Result<(), AppError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::BadRequest(format!(
            "Rating must be between {} and {}",
            MIN_RATING, MAX_RATING
        )));
    }

    Ok(())
}

fn not_found() -> AppError {
    AppError::NotFound("Review not found".to_string())
}
