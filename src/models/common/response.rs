use serde::{Deserialize, Serialize};

// 业务错误码，失败响应统一携带
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,
    InvalidInput = 40001,
    ClassIdMismatch = 40002,
    ClassNotFound = 40401,
    EnrolmentConflict = 40901,
    InternalServerError = 50000,
}

// 统一的错误响应结构
//
// 成功响应直接返回实体 JSON，错误响应返回本结构。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: i32,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        assert_ne!(
            ErrorCode::InvalidInput as i32,
            ErrorCode::ClassIdMismatch as i32
        );
        assert_eq!(ErrorCode::EnrolmentConflict as i32, 40901);
    }

    #[test]
    fn test_error_response_carries_code() {
        let resp = ErrorResponse::new(ErrorCode::ClassNotFound, "Class not found");
        assert_eq!(resp.code, 40401);
        assert_eq!(resp.message, "Class not found");
    }
}
