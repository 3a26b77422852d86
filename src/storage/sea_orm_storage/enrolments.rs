//! 选课记录存储操作

use super::SeaOrmStorage;
use crate::entity::enrolments::{ActiveModel, Entity as Enrolments};
use crate::errors::{ClassSchedError, Result};
use crate::models::enrolments::entities::Enrolment;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl SeaOrmStorage {
    /// 创建选课记录
    ///
    /// 重复的 (class_id, user_id) 由复合主键拒绝，错误原样返回，
    /// 由服务层复查后翻译为冲突响应。
    pub async fn create_enrolment_impl(&self, class_id: i64, user_id: i64) -> Result<Enrolment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(class_id),
            user_id: Set(user_id),
            enrolled_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassSchedError::database_operation(format!("创建选课记录失败: {e}")))?;

        Ok(result.into_enrolment())
    }

    /// 选课记录是否已存在
    pub async fn enrolment_exists_impl(&self, class_id: i64, user_id: i64) -> Result<bool> {
        let existing = Enrolments::find_by_id((class_id, user_id))
            .one(&self.db)
            .await
            .map_err(|e| ClassSchedError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(existing.is_some())
    }
}
