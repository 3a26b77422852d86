use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::sessions::requests::NewSession;
use crate::models::{ErrorCode, ErrorResponse};
use crate::utils::schedule::session_dates;

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let class = match storage.create_class(class_data).await {
        Ok(class) => class,
        Err(e) => {
            error!("Class creation failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    ErrorCode::InternalServerError,
                    format!("Class creation failed: {e}"),
                )),
            );
        }
    };

    // 派生课次：窗口内每个命中目标星期的日期一条，逐条落库。
    // 中途失败不回滚已提交的课次。
    let dates = session_dates(class.start_time, class.end_time, &class.day_of_week);
    info!(
        "Class {} created, deriving {} session(s) in room {}",
        class.id,
        dates.len(),
        class.location
    );

    for date_time in dates {
        let session = NewSession {
            class_id: class.id,
            date_time,
            room_number: class.location.clone(),
        };
        if let Err(e) = storage.create_session(session).await {
            error!(
                "Failed to create session for class {} at {}: {}",
                class.id, date_time, e
            );
            return Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    ErrorCode::InternalServerError,
                    format!("Session creation failed: {e}"),
                )),
            );
        }
    }

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/classes/{}", class.id)))
        .json(class))
}
