use serde::Deserialize;

// 选课请求
//
// class_id 允许出现在请求体中，但总是被路径参数覆盖。
#[derive(Debug, Clone, Deserialize)]
pub struct EnrolRequest {
    pub user_id: i64,
    #[serde(default)]
    pub class_id: Option<i64>,
}
