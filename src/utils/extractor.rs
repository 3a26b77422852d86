//! 路径参数提取器
//!
//! 路径中的 ID 必须是正整数，否则直接以 400 拒绝，不进入业务逻辑。

/// 定义从请求路径安全提取正整数 ID 的提取器
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = std::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                std::future::ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => {
                        let response = actix_web::HttpResponse::BadRequest().json(
                            $crate::models::ErrorResponse::new(
                                $crate::models::ErrorCode::InvalidInput,
                                concat!("Invalid path parameter: ", $param),
                            ),
                        );
                        Err(actix_web::error::InternalError::from_response(
                            concat!("invalid ", $param),
                            response,
                        )
                        .into())
                    }
                })
            }
        }
    };
}

define_safe_i64_extractor!(SafeClassIdI64, "class_id");

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::FromRequest;
    use actix_web::dev::Payload;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_accepts_positive_id() {
        let req = TestRequest::default()
            .param("class_id", "5")
            .to_http_request();
        let extracted = SafeClassIdI64::from_request(&req, &mut Payload::None)
            .await
            .expect("positive id accepted");
        assert_eq!(extracted.0, 5);
    }

    #[actix_web::test]
    async fn test_rejects_non_numeric_id() {
        let req = TestRequest::default()
            .param("class_id", "abc")
            .to_http_request();
        assert!(
            SafeClassIdI64::from_request(&req, &mut Payload::None)
                .await
                .is_err()
        );
    }

    #[actix_web::test]
    async fn test_rejects_non_positive_id() {
        for raw in ["0", "-3"] {
            let req = TestRequest::default()
                .param("class_id", raw)
                .to_http_request();
            assert!(
                SafeClassIdI64::from_request(&req, &mut Payload::None)
                    .await
                    .is_err()
            );
        }
    }
}
