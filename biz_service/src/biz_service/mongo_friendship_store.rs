use crate::biz_const::FRIENDSHIP_COLLECTION;
use crate::biz_service::friendship_store::{FriendshipQuery, FriendshipStore};
use crate::entitys::friendship::Friendship;
use async_trait::async_trait;
use common::errors::AppError;
use common::index_util::ensure_indexes;
use common::repository_util::{BaseRepository, OrderType, Repository};
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::Database;

pub struct MongoFriendshipStore {
    pub dao: BaseRepository<Friendship>,
}

impl MongoFriendshipStore {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection(FRIENDSHIP_COLLECTION);
        Self { dao: BaseRepository::new(collection) }
    }

    /// 创建 Friendship 声明的索引，返回新建数量
    pub async fn ensure_indexes(&self) -> Result<usize, AppError> {
        let created = ensure_indexes::<Friendship, _>(&self.dao.collection).await?;
        Ok(created)
    }
}

#[async_trait]
impl FriendshipStore for MongoFriendshipStore {
    async fn create(&self, mut friendship: Friendship) -> Result<Friendship, AppError> {
        friendship.id = ObjectId::new().to_hex();
        self.dao.insert(&friendship).await?;
        Ok(friendship)
    }

    async fn find_one(&self, query: &FriendshipQuery) -> Result<Option<Friendship>, AppError> {
        Ok(self.dao.find_one(query.to_document()).await?)
    }

    async fn find_one_and_delete(&self, query: &FriendshipQuery) -> Result<Option<Friendship>, AppError> {
        Ok(self.dao.find_one_and_delete(query.to_document()).await?)
    }

    async fn find_page(&self, query: &FriendshipQuery, skip: u64, limit: u64) -> Result<Vec<Friendship>, AppError> {
        let list = self.dao.find_page(query.to_document(), "created_at", OrderType::Desc, skip, limit).await?;
        Ok(list)
    }

    async fn count(&self, query: &FriendshipQuery) -> Result<u64, AppError> {
        Ok(self.dao.count(query.to_document()).await?)
    }

    async fn save(&self, friendship: &Friendship) -> Result<bool, AppError> {
        let matched = self.dao.replace_one(doc! { "_id": friendship.id.as_str() }, friendship).await?;
        Ok(matched > 0)
    }
}
