use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EnrolmentService;
use crate::models::enrolments::requests::EnrolRequest;
use crate::models::{ErrorCode, ErrorResponse};

pub async fn enrol_student(
    service: &EnrolmentService,
    request: &HttpRequest,
    class_id: i64,
    enrol_data: EnrolRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 请求体中的 class_id 一律以路径参数为准
    let user_id = enrol_data.user_id;

    match storage.create_enrolment(class_id, user_id).await {
        Ok(enrolment) => {
            info!("User {} enrolled in class {}", user_id, class_id);
            Ok(HttpResponse::Created()
                .insert_header((header::LOCATION, format!("/api/classes/{class_id}")))
                .json(enrolment))
        }
        Err(e) => {
            // 插入失败后复查：记录已存在则为重复选课，否则为意外的持久化故障
            match storage.enrolment_exists(class_id, user_id).await {
                Ok(true) => Ok(HttpResponse::Conflict().json(ErrorResponse::new(
                    ErrorCode::EnrolmentConflict,
                    "Student is already enrolled in this class",
                ))),
                Ok(false) => {
                    error!(
                        "Enrolment failed for class {} user {}: {}",
                        class_id, user_id, e
                    );
                    Ok(
                        HttpResponse::InternalServerError().json(ErrorResponse::new(
                            ErrorCode::InternalServerError,
                            format!("Enrolment failed: {e}"),
                        )),
                    )
                }
                Err(check_err) => {
                    error!(
                        "Enrolment re-check failed for class {} user {}: {}",
                        class_id, user_id, check_err
                    );
                    Ok(
                        HttpResponse::InternalServerError().json(ErrorResponse::new(
                            ErrorCode::InternalServerError,
                            format!("Enrolment failed: {e}"),
                        )),
                    )
                }
            }
        }
    }
}
