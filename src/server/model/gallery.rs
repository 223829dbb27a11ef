//! Gallery domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::gallery::GalleryItemDto;

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Public URL of the stored image.
    pub image: String,
    pub created_at: DateTime<Utc>,
}

impl GalleryItem {
    pub fn from_entity(entity: entity::gallery::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            image: entity.image,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> GalleryItemDto {
        GalleryItemDto {
            id: self.id,
            title: self.title,
            description: self.description,
            image: self.image,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating or updating a gallery item once the image is resolved
/// to a URL.
#[derive(Debug, Clone)]
pub struct SaveGalleryItemParam {
    pub title: String,
    pub description: Option<String>,
    pub image: String,
}

/// Image source supplied with a gallery upload form.
#[derive(Debug, Clone)]
pub enum GalleryImage {
    /// A freshly uploaded file.
    Upload {
        /// Original client-side filename, used only for its extension.
        file_name: String,
        bytes: Vec<u8>,
    },
    /// An already hosted image referenced by URL.
    Url(String),
}

/// Parsed multipart gallery form.
#[derive(Debug, Clone, Default)]
pub struct GalleryForm {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<GalleryImage>,
}
