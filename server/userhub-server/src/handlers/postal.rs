use axum::extract::{Path, State};
use axum::Json;
use postal_directory::DirectoryEntry;

use crate::error::{api_success, ApiError, ApiResponse};
use crate::server::UserHubServer;

/// Normalize a postal code and look it up in the external directory
#[utoipa::path(
    get,
    path = "/api/v1/postal/{code}",
    tag = "postal",
    params(
        ("code" = String, Path, description = "Postal code, hyphens and spaces allowed", example = "01001-000")
    ),
    responses(
        (status = 200, description = "Directory entry for the code"),
        (status = 400, description = "Malformed postal code"),
        (status = 404, description = "Code unknown to the directory")
    )
)]
pub async fn lookup_postal_code(
    State(server): State<UserHubServer>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<DirectoryEntry>>, ApiError> {
    let entry = server.postal.normalize_and_lookup(&code).await?;
    Ok(Json(api_success(entry)))
}
