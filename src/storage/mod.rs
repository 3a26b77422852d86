use std::sync::Arc;

use crate::models::{
    classes::{
        entities::Class,
        requests::{CreateClassRequest, UpdateClassRequest},
        responses::ClassDetail,
    },
    enrolments::entities::Enrolment,
    sessions::{entities::Session, requests::NewSession},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 班级管理方法
    // 列出全部班级（不过滤、不分页）
    async fn list_classes(&self) -> Result<Vec<Class>>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 通过ID获取班级详情（含课次、考勤、选课、用户、门卡）
    async fn get_class_detail(&self, class_id: i64) -> Result<Option<ClassDetail>>;
    // 创建班级
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 整行替换班级；提交时行已不存在则返回 None
    async fn replace_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    // 删除班级，返回删除前的表示
    async fn delete_class(&self, class_id: i64) -> Result<Option<Class>>;
    // 班级是否存在
    async fn class_exists(&self, class_id: i64) -> Result<bool>;

    /// 课次管理方法
    // 创建单个课次（班级创建时逐条派生，不批量）
    async fn create_session(&self, session: NewSession) -> Result<Session>;

    /// 选课管理方法
    // 创建选课记录
    async fn create_enrolment(&self, class_id: i64, user_id: i64) -> Result<Enrolment>;
    // 选课记录是否已存在
    async fn enrolment_exists(&self, class_id: i64, user_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
