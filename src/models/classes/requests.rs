use serde::Deserialize;

// 创建班级请求
//
// start_time < end_time 由调用方保证，服务端只校验字段存在与类型。
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClassRequest {
    pub location: String,
    pub day_of_week: String,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
}

// 更新班级请求（整行替换）
//
// id 必须与路径参数一致，否则请求被拒绝。
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateClassRequest {
    pub id: i64,
    pub location: String,
    pub day_of_week: String,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
}
