pub mod enrol;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::enrolments::requests::EnrolRequest;
use crate::storage::Storage;

pub struct EnrolmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl EnrolmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 学生选课
    pub async fn enrol_student(
        &self,
        req: &HttpRequest,
        class_id: i64,
        enrol_data: EnrolRequest,
    ) -> ActixResult<HttpResponse> {
        enrol::enrol_student(self, req, class_id, enrol_data).await
    }
}
