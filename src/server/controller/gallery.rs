use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        gallery::{GalleryItemDto, GalleryUploadForm},
    },
    server::{
        error::AppError,
        model::gallery::{GalleryForm, GalleryImage},
        service::gallery::GalleryService,
        state::AppState,
    },
};

/// Tag for grouping gallery endpoints in OpenAPI documentation
pub static GALLERY_TAG: &str = "gallery";

/// List every gallery item.
#[utoipa::path(
    get,
    path = "/api/gallery",
    tag = GALLERY_TAG,
    responses(
        (status = 200, description = "All gallery items", body = Vec<GalleryItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gallery(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = GalleryService::new(&state.db, &state.uploads);

    let items = service.list().await?;
    let items_dto: Vec<GalleryItemDto> = items.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(items_dto)))
}

/// Upload an image and create a gallery item for it.
///
/// # Returns
/// - `201 Created` - The created item with the public image URL
/// - `400 Bad Request` - Malformed form or no image file
/// - `500 Internal Server Error` - Storage or database error
#[utoipa::path(
    post,
    path = "/api/gallery",
    tag = GALLERY_TAG,
    request_body(content = GalleryUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Gallery item created", body = GalleryItemDto),
        (status = 400, description = "No image uploaded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_gallery_item(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let form = read_gallery_form(multipart).await?;
    let service = GalleryService::new(&state.db, &state.uploads);

    let item = service.create(form).await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// Update a gallery item.
///
/// The image may be a new file upload or the URL of an existing image sent as a text
/// field. A file wins when both are present.
///
/// # Returns
/// - `200 OK` - The updated item
/// - `400 Bad Request` - Malformed form or no image of either kind
/// - `404 Not Found` - No item with that ID
/// - `500 Internal Server Error` - Storage or database error
#[utoipa::path(
    put,
    path = "/api/gallery/{id}",
    tag = GALLERY_TAG,
    params(
        ("id" = String, Path, description = "Gallery item ID")
    ),
    request_body(content = GalleryUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Gallery item updated", body = GalleryItemDto),
        (status = 400, description = "No image provided", body = ErrorDto),
        (status = 404, description = "Gallery item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_gallery_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let form = read_gallery_form(multipart).await?;
    let service = GalleryService::new(&state.db, &state.uploads);

    let item = service.update(&id, form).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Delete a gallery item.
#[utoipa::path(
    delete,
    path = "/api/gallery/{id}",
    tag = GALLERY_TAG,
    params(
        ("id" = String, Path, description = "Gallery item ID")
    ),
    responses(
        (status = 204, description = "Gallery item deleted"),
        (status = 404, description = "Gallery item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_gallery_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = GalleryService::new(&state.db, &state.uploads);

    service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Reads the `title`, `description` and `image` fields of a gallery form.
///
/// An `image` part carrying a filename is an upload; one without is an image URL.
/// File parts with an empty filename and unknown fields are skipped.
async fn read_gallery_form(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<GalleryForm, AppError> {
    let mut multipart = multipart.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let mut form = GalleryForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "title" => form.title = field.text().await?,
            "description" => {
                let text = field.text().await?;
                form.description = (!text.is_empty()).then_some(text);
            }
            "image" => match field.file_name().map(str::to_string) {
                // A file input left blank arrives as a part with an empty filename.
                Some(file_name) if file_name.is_empty() => {}
                Some(file_name) => {
                    let bytes = field.bytes().await?;
                    form.image = Some(GalleryImage::Upload {
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
                None => {
                    let url = field.text().await?;
                    let has_upload = matches!(form.image, Some(GalleryImage::Upload { .. }));
                    if !url.trim().is_empty() && !has_upload {
                        form.image = Some(GalleryImage::Url(url));
                    }
                }
            },
            _ => {}
        }
    }

    Ok(form)
}
