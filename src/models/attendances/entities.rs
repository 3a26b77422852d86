use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: i64,
    // 所属课次：班级ID + 课次时刻
    pub class_id: i64,
    pub session_date_time: chrono::DateTime<chrono::Utc>,
    // 签到用户
    pub user_id: i64,
    pub recorded_at: chrono::DateTime<chrono::Utc>,
}
