use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItemDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Public URL of the stored image.
    pub image: String,
    pub created_at: DateTime<Utc>,
}

/// Multipart form accepted by gallery create and update.
///
/// Documentation only; the controller reads the fields directly from the stream.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct GalleryUploadForm {
    pub title: String,
    pub description: Option<String>,
    /// Image file. On update a plain-text URL may be sent in this field instead.
    #[schema(format = Binary, value_type = String)]
    pub image: Vec<u8>,
}
