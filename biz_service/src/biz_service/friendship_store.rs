use crate::entitys::friendship::Friendship;
use async_trait::async_trait;
use common::errors::AppError;
use common::UserId;
use mongodb::bson::{doc, Document};

/// FriendService 发出的全部查询条件
///
/// 同一个条件既能转成 mongo 过滤文档，也能直接在内存中匹配记录，
/// 两种存储实现因此共享一套语义。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FriendshipQuery {
    /// receiver 收到的、尚未处理的请求
    PendingReceived { receiver: UserId },
    /// user 作为任意一方的已接受关系
    AcceptedOf { user: UserId },
    /// 两个用户之间任意方向的关系
    Between { a: UserId, b: UserId },
    /// 指定 id、receiver 为当前用户且未接受
    PendingById { id: String, receiver: UserId },
    /// 指定 id、receiver 为当前用户
    ReceivedById { id: String, receiver: UserId },
}

impl FriendshipQuery {
    pub fn to_document(&self) -> Document {
        match self {
            FriendshipQuery::PendingReceived { receiver } => doc! {
                "receiver": receiver.as_str(),
                "is_accepted": false
            },
            FriendshipQuery::AcceptedOf { user } => doc! {
                "$or": [
                    { "sender": user.as_str() },
                    { "receiver": user.as_str() }
                ],
                "is_accepted": true
            },
            FriendshipQuery::Between { a, b } => doc! {
                "$or": [
                    { "sender": a.as_str(), "receiver": b.as_str() },
                    { "sender": b.as_str(), "receiver": a.as_str() }
                ]
            },
            FriendshipQuery::PendingById { id, receiver } => doc! {
                "_id": id.as_str(),
                "receiver": receiver.as_str(),
                "is_accepted": false
            },
            FriendshipQuery::ReceivedById { id, receiver } => doc! {
                "_id": id.as_str(),
                "receiver": receiver.as_str()
            },
        }
    }

    pub fn matches(&self, f: &Friendship) -> bool {
        match self {
            FriendshipQuery::PendingReceived { receiver } => f.receiver == *receiver && !f.is_accepted,
            FriendshipQuery::AcceptedOf { user } => f.involves(user) && f.is_accepted,
            FriendshipQuery::Between { a, b } => (f.sender == *a && f.receiver == *b) || (f.sender == *b && f.receiver == *a),
            FriendshipQuery::PendingById { id, receiver } => f.id == *id && f.receiver == *receiver && !f.is_accepted,
            FriendshipQuery::ReceivedById { id, receiver } => f.id == *id && f.receiver == *receiver,
        }
    }
}

/// 好友关系的存储接口
#[async_trait]
pub trait FriendshipStore: Send + Sync {
    /// 写入新记录并返回带 id 的记录
    async fn create(&self, friendship: Friendship) -> Result<Friendship, AppError>;
    async fn find_one(&self, query: &FriendshipQuery) -> Result<Option<Friendship>, AppError>;
    async fn find_one_and_delete(&self, query: &FriendshipQuery) -> Result<Option<Friendship>, AppError>;
    /// 按 created_at 倒序取一页
    async fn find_page(&self, query: &FriendshipQuery, skip: u64, limit: u64) -> Result<Vec<Friendship>, AppError>;
    async fn count(&self, query: &FriendshipQuery) -> Result<u64, AppError>;
    /// 按 id 整体覆盖，记录已不存在时返回 false
    async fn save(&self, friendship: &Friendship) -> Result<bool, AppError>;
}
