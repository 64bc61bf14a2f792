//! Directory page handlers.
//!
//! ```text
//! GET /
//! GET /pets/{id}
//! GET /owner/{id}
//! ```
//!
//! Ids must be decimal integers that fit an `i32`. Anything else never
//! reaches these handlers: the route pattern or the path extractor answers
//! with actix-web's default 404.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};
use tracing::debug;

use crate::domain::{Error, OwnerId, PetId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::pages::{
    render_index, render_owner, render_owner_not_found, render_pet, render_pet_not_found,
};
use crate::inbound::http::state::HttpState;

fn html(status: StatusCode, body: String) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body))
}

/// Welcome page.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome banner", body = String, content_type = "text/html")
    ),
    tags = ["directory"],
    operation_id = "index"
)]
#[get("/")]
pub async fn index() -> ApiResult<HttpResponse> {
    html(StatusCode::OK, render_index()?)
}

/// Pet page showing species and owner.
#[utoipa::path(
    get,
    path = "/pets/{id}",
    params(("id" = i32, Path, description = "Pet id")),
    responses(
        (status = 200, description = "Pet details", body = String, content_type = "text/html"),
        (status = 404, description = "No pet with this id", body = String, content_type = "text/html"),
        (status = 503, description = "Record store unavailable", body = Error)
    ),
    tags = ["directory"],
    operation_id = "getPet"
)]
#[get("/pets/{id:\\d+}")]
pub async fn pet_by_id(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = PetId::new(path.into_inner());
    match state.directory.find_pet_by_id(id).await {
        Ok(profile) => html(StatusCode::OK, render_pet(&profile)?),
        Err(err) if err.is_not_found() => {
            debug!(pet_id = %id, "pet not found");
            html(StatusCode::NOT_FOUND, render_pet_not_found()?)
        }
        Err(err) => Err(err),
    }
}

/// Owner page listing every pet the owner has.
#[utoipa::path(
    get,
    path = "/owner/{id}",
    params(("id" = i32, Path, description = "Owner id")),
    responses(
        (status = 200, description = "Owner details", body = String, content_type = "text/html"),
        (status = 404, description = "No owner with this id", body = String, content_type = "text/html"),
        (status = 503, description = "Record store unavailable", body = Error)
    ),
    tags = ["directory"],
    operation_id = "getOwner"
)]
#[get("/owner/{id:\\d+}")]
pub async fn owner_by_id(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = OwnerId::new(path.into_inner());
    match state.directory.find_owner_by_id(id).await {
        Ok(profile) => html(StatusCode::OK, render_owner(&profile)?),
        Err(err) if err.is_not_found() => {
            debug!(owner_id = %id, "owner not found");
            html(StatusCode::NOT_FOUND, render_owner_not_found()?)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
