use serde::Deserialize;

// 新课次（由班级创建流程派生，无对外端点）
#[derive(Debug, Clone, Deserialize)]
pub struct NewSession {
    pub class_id: i64,
    pub date_time: chrono::DateTime<chrono::Utc>,
    pub room_number: String,
}
