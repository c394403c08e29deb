use crate::biz_service::friendship_store::{FriendshipQuery, FriendshipStore};
use crate::entitys::friendship::Friendship;
use async_trait::async_trait;
use common::errors::AppError;
use common::util::common_utils::build_id;
use tokio::sync::RwLock;

/// 内存版存储，语义与 mongo 实现一致，用于测试或替换外部存储
#[derive(Debug, Default)]
pub struct MemoryFriendshipStore {
    records: RwLock<Vec<Friendship>>,
}

impl MemoryFriendshipStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl FriendshipStore for MemoryFriendshipStore {
    async fn create(&self, mut friendship: Friendship) -> Result<Friendship, AppError> {
        if friendship.id.is_empty() {
            friendship.id = build_id();
        }
        let mut records = self.records.write().await;
        if records.iter().any(|f| f.id == friendship.id) {
            return Err(AppError::Internal(format!("duplicate key: {}", friendship.id)));
        }
        records.push(friendship.clone());
        Ok(friendship)
    }

    async fn find_one(&self, query: &FriendshipQuery) -> Result<Option<Friendship>, AppError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|f| query.matches(f)).cloned())
    }

    async fn find_one_and_delete(&self, query: &FriendshipQuery) -> Result<Option<Friendship>, AppError> {
        let mut records = self.records.write().await;
        let removed = records.iter().position(|f| query.matches(f)).map(|index| records.remove(index));
        Ok(removed)
    }

    async fn find_page(&self, query: &FriendshipQuery, skip: u64, limit: u64) -> Result<Vec<Friendship>, AppError> {
        let records = self.records.read().await;
        // 倒序遍历后稳定排序：同一毫秒内后写入的排在前面
        let mut list: Vec<Friendship> = records.iter().rev().filter(|f| query.matches(f)).cloned().collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(list.into_iter().skip(skip).take(limit).collect())
    }

    async fn count(&self, query: &FriendshipQuery) -> Result<u64, AppError> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|f| query.matches(f)).count() as u64)
    }

    async fn save(&self, friendship: &Friendship) -> Result<bool, AppError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|f| f.id == friendship.id) {
            Some(slot) => {
                *slot = friendship.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
