//! 请求参数反序列化错误处理
//!
//! 请求体或查询参数解析失败时返回统一的 400 错误响应。

use actix_web::error::{Error, InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ErrorCode, ErrorResponse};

/// JSON 请求体解析失败 -> 400
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    debug!("JSON payload rejected: {}", err);

    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        ErrorCode::InvalidInput,
        format!("Invalid request body: {err}"),
    ));

    InternalError::from_response(err, response).into()
}

/// 查询参数解析失败 -> 400
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    debug!("Query string rejected: {}", err);

    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        ErrorCode::InvalidInput,
        format!("Invalid query parameters: {err}"),
    ));

    InternalError::from_response(err, response).into()
}
