use serde::Serialize;

use super::entities::Class;
use crate::models::attendances::entities::Attendance;
use crate::models::enrolments::entities::Enrolment;
use crate::models::sessions::entities::Session;
use crate::models::users::entities::{Card, User};

// 班级详情：班级本身加上课次（含考勤）与选课记录（含用户及其门卡）
//
// 读投影在存储层显式组装，避免隐式懒加载。
#[derive(Debug, Serialize)]
pub struct ClassDetail {
    #[serde(flatten)]
    pub class: Class,
    pub sessions: Vec<SessionWithAttendances>,
    pub enrolments: Vec<EnrolmentWithUser>,
}

// 课次及其考勤记录
#[derive(Debug, Serialize)]
pub struct SessionWithAttendances {
    #[serde(flatten)]
    pub session: Session,
    pub attendances: Vec<Attendance>,
}

// 选课记录及其用户
//
// user 为 None 表示用户行已不存在（外键目标被外部系统删除）。
#[derive(Debug, Serialize)]
pub struct EnrolmentWithUser {
    #[serde(flatten)]
    pub enrolment: Enrolment,
    pub user: Option<UserWithCards>,
}

// 用户及其门卡
#[derive(Debug, Serialize)]
pub struct UserWithCards {
    #[serde(flatten)]
    pub user: User,
    pub cards: Vec<Card>,
}
