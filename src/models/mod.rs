pub mod attendances;
pub mod classes;
pub mod common;
pub mod enrolments;
pub mod sessions;
pub mod users;

pub use common::response::{ErrorCode, ErrorResponse};

// 程序启动时间，用于统计预处理耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
