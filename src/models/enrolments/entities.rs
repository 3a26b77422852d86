use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrolment {
    // 班级ID
    pub class_id: i64,
    // 学生用户ID
    pub user_id: i64,
    // 选课时间
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}
