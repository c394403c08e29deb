pub mod config;
pub mod db;
pub mod errors;
pub mod repository;
pub mod util;

pub use repository::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
pub type UserId = String;

/// 当前操作用户，所有按过滤条件鉴权的查询都以它的 user_id 为准
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub user_id: UserId,
}

impl CurrentUser {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self { user_id: user_id.into() }
    }
}
