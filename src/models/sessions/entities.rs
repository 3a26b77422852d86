use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    // 所属班级ID
    pub class_id: i64,
    // 上课时刻，与 class_id 一起构成课次标识
    pub date_time: chrono::DateTime<chrono::Utc>,
    // 教室号，派生自班级的 location
    pub room_number: String,
}
