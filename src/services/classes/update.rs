use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::classes::requests::UpdateClassRequest;
use crate::models::{ErrorCode, ErrorResponse};

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    update_data: UpdateClassRequest,
) -> ActixResult<HttpResponse> {
    // 路径与请求体中的 ID 必须一致
    if update_data.id != class_id {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
            ErrorCode::ClassIdMismatch,
            "Path id does not match payload id",
        )));
    }

    let storage = service.get_storage(request);

    match storage.replace_class(class_id, update_data).await {
        Ok(Some(_)) => Ok(HttpResponse::NoContent().finish()),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorResponse::new(
            ErrorCode::ClassNotFound,
            "Class not found",
        ))),
        Err(e) => {
            error!("Class update failed for {}: {}", class_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    ErrorCode::InternalServerError,
                    format!("Class update failed: {e}"),
                )),
            )
        }
    }
}
