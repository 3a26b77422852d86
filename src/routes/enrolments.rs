use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::enrolments::requests::EnrolRequest;
use crate::services::EnrolmentService;
use crate::utils::SafeClassIdI64;

// 懒加载的全局 ENROLMENT_SERVICE 实例
static ENROLMENT_SERVICE: Lazy<EnrolmentService> = Lazy::new(EnrolmentService::new_lazy);

// HTTP处理程序
pub async fn enrol_student(
    req: HttpRequest,
    path: SafeClassIdI64,
    enrol_data: web::Json<EnrolRequest>,
) -> ActixResult<HttpResponse> {
    let class_id = path.0;
    ENROLMENT_SERVICE
        .enrol_student(&req, class_id, enrol_data.into_inner())
        .await
}

// 配置路由
//
// 必须在班级主路由之前注册，否则前缀会被 /api/classes 作用域吃掉。
pub fn configure_enrolments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/classes/{class_id}/enrol")
            .service(web::resource("").route(web::post().to(enrol_student))),
    );
}
