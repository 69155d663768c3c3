pub mod meetings;
pub mod members;
pub mod transfers;

use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    web,
};

use crate::errors::AppError;
use crate::templates_structs::ApiErrorResponse;

/// CSRF protection for REST API mutation endpoints.
///
/// Rejects POST/PUT/DELETE requests that don't have Content-Type: application/json.
/// Browsers cannot send cross-origin JSON with cookies via simple form POST,
/// so the Content-Type check stands in for a token. GET requests are exempt.
async fn require_json_content_type(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let method = req.method().clone();

    if method == actix_web::http::Method::POST
        || method == actix_web::http::Method::PUT
        || method == actix_web::http::Method::DELETE
    {
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("application/json") {
            let body = ApiErrorResponse {
                error: "Content-Type must be application/json for mutation requests".to_string(),
                details: Vec::new(),
            };
            let response = HttpResponse::BadRequest().json(body);
            return Ok(req.into_response(response).map_into_right_body());
        }
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

/// JSON body for the errors a client can act on; anything else propagates to
/// the generic handler.
pub(crate) fn json_error(e: AppError) -> Result<HttpResponse, AppError> {
    let (mut builder, error, details) = match e {
        AppError::Validation(details) => (HttpResponse::BadRequest(), "Validation failed".to_string(), details),
        AppError::PermissionDenied(what) => (HttpResponse::Forbidden(), what, Vec::new()),
        AppError::NotFound => (HttpResponse::NotFound(), "Not found".to_string(), Vec::new()),
        AppError::Store(e) => {
            log::error!("API store failure: {e}");
            (HttpResponse::ServiceUnavailable(), "Backend call failed; nothing was changed".to_string(), Vec::new())
        }
        other => return Err(other),
    };
    Ok(builder.json(ApiErrorResponse { error, details }))
}

/// Configure API v1 routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/members")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route("", web::get().to(members::list))
            .route("/{id}/transfer-options", web::get().to(members::transfer_options)),
    );
    cfg.service(
        web::scope("/meetings")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route("", web::get().to(meetings::list))
            .route("/{id}/attendance/{member_id}", web::post().to(meetings::advance_attendance)),
    );
    cfg.service(
        web::scope("/transfers")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route("", web::get().to(transfers::list))
            .route("", web::post().to(transfers::request))
            .route("/complete", web::post().to(transfers::complete)),
    );
}
