//! 课次存储操作

use super::SeaOrmStorage;
use crate::entity::sessions::ActiveModel;
use crate::errors::{ClassSchedError, Result};
use crate::models::sessions::{entities::Session, requests::NewSession};
use sea_orm::{ActiveModelTrait, Set};

impl SeaOrmStorage {
    /// 创建单个课次
    pub async fn create_session_impl(&self, session: NewSession) -> Result<Session> {
        let model = ActiveModel {
            class_id: Set(session.class_id),
            date_time: Set(session.date_time.timestamp()),
            room_number: Set(session.room_number),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassSchedError::database_operation(format!("创建课次失败: {e}")))?;

        Ok(result.into_session())
    }
}
