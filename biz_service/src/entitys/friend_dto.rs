use crate::biz_const::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::entitys::friendship::{Friendship, FriendshipType};
use common::{CurrentUser, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 分页查询参数，page 从 1 开始；缺省 page=1、limit=10
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct FriendPageQuery {
    pub id: UserId,
    pub page: u64,
    pub limit: u64,
}

impl Default for FriendPageQuery {
    fn default() -> Self {
        Self { id: UserId::new(), page: DEFAULT_PAGE, limit: DEFAULT_LIMIT }
    }
}

impl FriendPageQuery {
    pub fn new(id: impl Into<UserId>) -> Self {
        Self { id: id.into(), ..Default::default() }
    }

    pub fn with_page(mut self, page: u64, limit: u64) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFriendDto {
    pub current_user: CurrentUser,
    pub receiver_id: UserId,
    pub friendship_type: Option<FriendshipType>,
}

/// 针对单条好友请求的操作：接受、拒绝、查看
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FriendshipOpDto {
    pub id: String,
    pub current_user: CurrentUser,
}

impl FriendshipOpDto {
    pub fn new(id: impl Into<String>, current_user: CurrentUser) -> Self {
        Self { id: id.into(), current_user }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequestPage {
    pub page: u64,
    pub limit: u64,
    pub total_requests: u64,
    pub total_pages: u64,
    pub friend_requests: Vec<Friendship>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FriendListPage {
    pub page: u64,
    pub limit: u64,
    pub total_friends: u64,
    pub total_pages: u64,
    pub friend_list: Vec<Friendship>,
}
