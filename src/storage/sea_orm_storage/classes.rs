//! 班级存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::attendances::{Column as AttendanceColumn, Entity as Attendances};
use crate::entity::cards::{Column as CardColumn, Entity as Cards};
use crate::entity::classes::{ActiveModel, Entity as Classes};
use crate::entity::enrolments::{Column as EnrolmentColumn, Entity as Enrolments};
use crate::entity::sessions::{Column as SessionColumn, Entity as Sessions};
use crate::entity::users::Entity as Users;
use crate::errors::{ClassSchedError, Result};
use crate::models::{
    attendances::entities::Attendance,
    classes::{
        entities::Class,
        requests::{CreateClassRequest, UpdateClassRequest},
        responses::{ClassDetail, EnrolmentWithUser, SessionWithAttendances, UserWithCards},
    },
    users::entities::Card,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            location: Set(req.location),
            day_of_week: Set(req.day_of_week),
            start_time: Set(req.start_time.timestamp()),
            end_time: Set(req.end_time.timestamp()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassSchedError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassSchedError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 列出全部班级
    pub async fn list_classes_impl(&self) -> Result<Vec<Class>> {
        let rows = Classes::find()
            .all(&self.db)
            .await
            .map_err(|e| ClassSchedError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_class()).collect())
    }

    /// 班级是否存在
    pub async fn class_exists_impl(&self, class_id: i64) -> Result<bool> {
        let count = Classes::find_by_id(class_id)
            .count(&self.db)
            .await
            .map_err(|e| ClassSchedError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(count > 0)
    }

    /// 整行替换班级信息
    ///
    /// 提交时发现行已不存在则返回 None，由服务层翻译为 NotFound；
    /// 行仍存在却未被更新属于意外的持久化冲突，原样向上传播。
    pub async fn replace_class_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(class_id),
            location: Set(update.location),
            day_of_week: Set(update.day_of_week),
            start_time: Set(update.start_time.timestamp()),
            end_time: Set(update.end_time.timestamp()),
            updated_at: Set(now),
            ..Default::default()
        };

        match model.update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into_class())),
            Err(DbErr::RecordNotUpdated) => {
                if self.class_exists_impl(class_id).await? {
                    Err(ClassSchedError::database_operation(format!(
                        "更新班级 {class_id} 失败: 行存在但未被更新"
                    )))
                } else {
                    Ok(None)
                }
            }
            Err(e) => Err(ClassSchedError::database_operation(format!(
                "更新班级失败: {e}"
            ))),
        }
    }

    /// 删除班级，返回删除前的表示
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let existing = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassSchedError::database_operation(format!("查询班级失败: {e}")))?;

        let Some(model) = existing else {
            return Ok(None);
        };
        let class = model.into_class();

        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassSchedError::database_operation(format!("删除班级失败: {e}")))?;

        Ok((result.rows_affected > 0).then_some(class))
    }

    /// 班级详情读投影：课次（含考勤）与选课记录（含用户及其门卡）
    pub async fn get_class_detail_impl(&self, class_id: i64) -> Result<Option<ClassDetail>> {
        let Some(class_row) = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassSchedError::database_operation(format!("查询班级失败: {e}")))?
        else {
            return Ok(None);
        };

        let session_rows = Sessions::find()
            .filter(SessionColumn::ClassId.eq(class_id))
            .order_by_asc(SessionColumn::DateTime)
            .all(&self.db)
            .await
            .map_err(|e| ClassSchedError::database_operation(format!("查询课次失败: {e}")))?;

        let attendance_rows = Attendances::find()
            .filter(AttendanceColumn::ClassId.eq(class_id))
            .all(&self.db)
            .await
            .map_err(|e| ClassSchedError::database_operation(format!("查询考勤失败: {e}")))?;

        // 按课次时刻分组考勤
        let mut attendances_by_session: HashMap<i64, Vec<Attendance>> = HashMap::new();
        for row in attendance_rows {
            attendances_by_session
                .entry(row.session_date_time)
                .or_default()
                .push(row.into_attendance());
        }

        let sessions = session_rows
            .into_iter()
            .map(|row| SessionWithAttendances {
                attendances: attendances_by_session
                    .remove(&row.date_time)
                    .unwrap_or_default(),
                session: row.into_session(),
            })
            .collect();

        let enrolment_rows = Enrolments::find()
            .filter(EnrolmentColumn::ClassId.eq(class_id))
            .find_also_related(Users)
            .all(&self.db)
            .await
            .map_err(|e| ClassSchedError::database_operation(format!("查询选课记录失败: {e}")))?;

        let user_ids: Vec<i64> = enrolment_rows
            .iter()
            .filter_map(|(_, user)| user.as_ref().map(|u| u.id))
            .collect();

        let mut cards_by_user: HashMap<i64, Vec<Card>> = HashMap::new();
        if !user_ids.is_empty() {
            let card_rows = Cards::find()
                .filter(CardColumn::UserId.is_in(user_ids))
                .all(&self.db)
                .await
                .map_err(|e| ClassSchedError::database_operation(format!("查询门卡失败: {e}")))?;
            for row in card_rows {
                cards_by_user
                    .entry(row.user_id)
                    .or_default()
                    .push(row.into_card());
            }
        }

        let enrolments = enrolment_rows
            .into_iter()
            .map(|(enrolment, user)| EnrolmentWithUser {
                enrolment: enrolment.into_enrolment(),
                user: user.map(|u| {
                    let cards = cards_by_user.remove(&u.id).unwrap_or_default();
                    UserWithCards {
                        user: u.into_user(),
                        cards,
                    }
                }),
            })
            .collect();

        Ok(Some(ClassDetail {
            class: class_row.into_class(),
            sessions,
            enrolments,
        }))
    }
}
