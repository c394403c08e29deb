use common::UserId;
use mongo_macro::MongoIndexModelProvider;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// 好友关系类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, ToSchema, AsRefStr, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FriendshipType {
    #[default]
    Friend,
    CloseFriend,
    Family,
}

/// 好友关系记录
///
/// 一条记录表示 sender 向 receiver 发出的一次好友请求及其接受状态。
/// `accepted_at` 仅在 `is_accepted` 为 true 时存在。
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq, ToSchema, MongoIndexModelProvider)]
#[mongo_index(fields["receiver", "is_accepted", "created_at:desc"], name("idx_receiver_accepted_created"))]
#[mongo_index(fields["sender", "is_accepted", "created_at:desc"], name("idx_sender_accepted_created"))]
#[mongo_index(fields["sender", "receiver"], name("idx_sender_receiver"))]
pub struct Friendship {
    #[serde(rename = "_id")]
    pub id: String,                         // 记录 ID，由存储层生成
    pub sender: UserId,                     // 请求发起方
    pub receiver: UserId,                   // 请求接收方
    #[serde(default)]
    pub friendship_type: FriendshipType,    // 关系类型
    #[serde(default)]
    pub is_accepted: bool,                  // 是否已接受
    pub created_at: i64,                    // 创建时间（毫秒）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<i64>,           // 接受时间（毫秒）
}

impl Friendship {
    /// 新建一条待处理的好友请求，id 留空交给存储层填充
    pub fn pending(sender: impl Into<UserId>, receiver: impl Into<UserId>, friendship_type: FriendshipType, created_at: i64) -> Self {
        Self {
            id: String::new(),
            sender: sender.into(),
            receiver: receiver.into(),
            friendship_type,
            is_accepted: false,
            created_at,
            accepted_at: None,
        }
    }

    pub fn accept(&mut self, accepted_at: i64) {
        self.is_accepted = true;
        self.accepted_at = Some(accepted_at);
    }

    pub fn involves(&self, user_id: &str) -> bool {
        self.sender == user_id || self.receiver == user_id
    }
}
