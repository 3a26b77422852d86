use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 上课地点（教室）
    pub location: String,
    // 每周上课的星期名（如 "Monday"）
    pub day_of_week: String,
    // 排课窗口起点
    pub start_time: chrono::DateTime<chrono::Utc>,
    // 排课窗口终点（不含）
    pub end_time: chrono::DateTime<chrono::Utc>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
