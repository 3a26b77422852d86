//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod classes;
mod enrolments;
mod sessions;

use crate::config::AppConfig;
use crate::errors::{ClassSchedError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ClassSchedError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ClassSchedError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ClassSchedError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ClassSchedError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ClassSchedError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    classes::{
        entities::Class,
        requests::{CreateClassRequest, UpdateClassRequest},
        responses::ClassDetail,
    },
    enrolments::entities::Enrolment,
    sessions::{entities::Session, requests::NewSession},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 班级模块
    async fn list_classes(&self) -> Result<Vec<Class>> {
        self.list_classes_impl().await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn get_class_detail(&self, class_id: i64) -> Result<Option<ClassDetail>> {
        self.get_class_detail_impl(class_id).await
    }

    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn replace_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        self.replace_class_impl(class_id, update).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<Option<Class>> {
        self.delete_class_impl(class_id).await
    }

    async fn class_exists(&self, class_id: i64) -> Result<bool> {
        self.class_exists_impl(class_id).await
    }

    // 课次模块
    async fn create_session(&self, session: NewSession) -> Result<Session> {
        self.create_session_impl(session).await
    }

    // 选课模块
    async fn create_enrolment(&self, class_id: i64, user_id: i64) -> Result<Enrolment> {
        self.create_enrolment_impl(class_id, user_id).await
    }

    async fn enrolment_exists(&self, class_id: i64, user_id: i64) -> Result<bool> {
        self.enrolment_exists_impl(class_id, user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::prelude::*;
    use crate::utils::schedule::session_dates;
    use chrono::{TimeZone, Utc};
    use sea_orm::{ActiveModelTrait, Set};

    async fn setup_storage() -> SeaOrmStorage {
        // 内存库限制为单连接，保证所有操作落在同一个数据库上
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = Database::connect(opt)
            .await
            .expect("connect in-memory sqlite");
        Migrator::up(&db, None).await.expect("run migrations");
        SeaOrmStorage { db }
    }

    fn monday_class_request() -> CreateClassRequest {
        CreateClassRequest {
            location: "A-101".to_string(),
            day_of_week: "Monday".to_string(),
            start_time: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
        }
    }

    async fn seed_user(storage: &SeaOrmStorage, id: i64) {
        UserActiveModel {
            id: Set(id),
            name: Set(format!("student-{id}")),
            email: Set(format!("student-{id}@example.com")),
            created_at: Set(0),
            updated_at: Set(0),
        }
        .insert(&storage.db)
        .await
        .expect("seed user");
    }

    #[tokio::test]
    async fn test_create_and_fetch_class() {
        let storage = setup_storage().await;

        let created = storage.create_class_impl(monday_class_request()).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.location, "A-101");
        assert_eq!(created.day_of_week, "Monday");

        let fetched = storage.get_class_by_id_impl(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_get_missing_class_returns_none() {
        let storage = setup_storage().await;
        assert_eq!(storage.get_class_by_id_impl(42).await.unwrap(), None);
        assert!(!storage.class_exists_impl(42).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_classes_returns_all() {
        let storage = setup_storage().await;
        storage.create_class_impl(monday_class_request()).await.unwrap();

        let mut second = monday_class_request();
        second.location = "B-202".to_string();
        storage.create_class_impl(second).await.unwrap();

        let classes = storage.list_classes_impl().await.unwrap();
        assert_eq!(classes.len(), 2);
    }

    #[tokio::test]
    async fn test_replace_class_updates_all_fields() {
        let storage = setup_storage().await;
        let created = storage.create_class_impl(monday_class_request()).await.unwrap();

        let update = UpdateClassRequest {
            id: created.id,
            location: "C-303".to_string(),
            day_of_week: "Friday".to_string(),
            start_time: Utc.with_ymd_and_hms(2024, 2, 2, 14, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 3, 1, 14, 0, 0).unwrap(),
        };
        let replaced = storage
            .replace_class_impl(created.id, update)
            .await
            .unwrap()
            .expect("class still present");

        assert_eq!(replaced.location, "C-303");
        assert_eq!(replaced.day_of_week, "Friday");
        assert_eq!(
            replaced.start_time,
            Utc.with_ymd_and_hms(2024, 2, 2, 14, 0, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn test_replace_missing_class_returns_none() {
        let storage = setup_storage().await;
        let update = UpdateClassRequest {
            id: 999,
            location: "C-303".to_string(),
            day_of_week: "Friday".to_string(),
            start_time: Utc.with_ymd_and_hms(2024, 2, 2, 14, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 3, 1, 14, 0, 0).unwrap(),
        };
        assert!(storage.replace_class_impl(999, update).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_returns_removed_representation() {
        let storage = setup_storage().await;
        let created = storage.create_class_impl(monday_class_request()).await.unwrap();

        let removed = storage.delete_class_impl(created.id).await.unwrap();
        assert_eq!(removed, Some(created.clone()));

        // 再次删除或查询都应落空
        assert_eq!(storage.delete_class_impl(created.id).await.unwrap(), None);
        assert_eq!(storage.get_class_by_id_impl(created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_enrolment_rejected_by_primary_key() {
        let storage = setup_storage().await;
        let class = storage.create_class_impl(monday_class_request()).await.unwrap();
        seed_user(&storage, 7).await;

        let enrolment = storage.create_enrolment_impl(class.id, 7).await.unwrap();
        assert_eq!(enrolment.class_id, class.id);
        assert_eq!(enrolment.user_id, 7);

        // 第二次插入违反复合主键约束
        assert!(storage.create_enrolment_impl(class.id, 7).await.is_err());
        assert!(storage.enrolment_exists_impl(class.id, 7).await.unwrap());
        assert!(!storage.enrolment_exists_impl(class.id, 8).await.unwrap());
    }

    #[tokio::test]
    async fn test_session_generation_one_row_per_matching_day() {
        let storage = setup_storage().await;
        let class = storage.create_class_impl(monday_class_request()).await.unwrap();

        // 2024-01-01（周一）到 2024-01-15，每周一 => 01-01 与 01-08，恰好两次
        let dates = session_dates(class.start_time, class.end_time, &class.day_of_week);
        for date_time in &dates {
            storage
                .create_session_impl(NewSession {
                    class_id: class.id,
                    date_time: *date_time,
                    room_number: class.location.clone(),
                })
                .await
                .unwrap();
        }

        let detail = storage
            .get_class_detail_impl(class.id)
            .await
            .unwrap()
            .expect("class present");
        assert_eq!(detail.sessions.len(), 2);
        assert_eq!(
            detail.sessions[0].session.date_time,
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
        );
        assert_eq!(
            detail.sessions[1].session.date_time,
            Utc.with_ymd_and_hms(2024, 1, 8, 9, 0, 0).unwrap()
        );
        assert!(detail.sessions.iter().all(|s| s.session.room_number == "A-101"));
    }

    #[tokio::test]
    async fn test_class_detail_hydrates_related_rows() {
        let storage = setup_storage().await;
        let class = storage.create_class_impl(monday_class_request()).await.unwrap();
        seed_user(&storage, 1).await;

        CardActiveModel {
            user_id: Set(1),
            card_number: Set("CARD-0001".to_string()),
            issued_at: Set(0),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .expect("seed card");

        storage.create_enrolment_impl(class.id, 1).await.unwrap();

        let session_time = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        storage
            .create_session_impl(NewSession {
                class_id: class.id,
                date_time: session_time,
                room_number: class.location.clone(),
            })
            .await
            .unwrap();

        AttendanceActiveModel {
            class_id: Set(class.id),
            session_date_time: Set(session_time.timestamp()),
            user_id: Set(1),
            recorded_at: Set(session_time.timestamp()),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .expect("seed attendance");

        let detail = storage
            .get_class_detail_impl(class.id)
            .await
            .unwrap()
            .expect("class present");

        assert_eq!(detail.class.id, class.id);
        assert_eq!(detail.sessions.len(), 1);
        assert_eq!(detail.sessions[0].attendances.len(), 1);
        assert_eq!(detail.sessions[0].attendances[0].user_id, 1);

        assert_eq!(detail.enrolments.len(), 1);
        let user = detail.enrolments[0].user.as_ref().expect("user hydrated");
        assert_eq!(user.user.id, 1);
        assert_eq!(user.cards.len(), 1);
        assert_eq!(user.cards[0].card_number, "CARD-0001");
    }
}
