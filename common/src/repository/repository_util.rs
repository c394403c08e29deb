use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{bson::Document, error::Result, Collection};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::marker::PhantomData;

/// 分页查询结果
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_documents: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum OrderType {
    #[default]
    Asc,
    Desc,
}

impl OrderType {
    pub fn direction(&self) -> i32 {
        match self {
            OrderType::Asc => 1,
            OrderType::Desc => -1,
        }
    }
}

/// 第 page 页（从 1 开始）需要跳过的条数，page 为 0 时按第 1 页处理
pub fn page_skip(page: u64, limit: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(limit)
}

/// ceil(total / limit)，limit 为 0 时没有可用的页
pub fn total_pages(total: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

#[async_trait]
pub trait Repository<T> {
    async fn insert(&self, entity: &T) -> Result<()>;
    async fn find_one(&self, filter: Document) -> Result<Option<T>>;
    async fn find_one_and_delete(&self, filter: Document) -> Result<Option<T>>;
    async fn replace_one(&self, filter: Document, entity: &T) -> Result<u64>;
    async fn count(&self, filter: Document) -> Result<u64>;
    async fn find_page(&self, filter: Document, sort_field: &str, order_type: OrderType, skip: u64, limit: u64) -> Result<Vec<T>>;
}

pub struct BaseRepository<T: Send + Sync> {
    pub collection: Collection<T>,
    _marker: PhantomData<T>,
}

impl<T: Send + Sync> BaseRepository<T> {
    pub fn new(collection: Collection<T>) -> Self {
        Self { collection, _marker: Default::default() }
    }
}

#[async_trait]
impl<T: Send + Sync> Repository<T> for BaseRepository<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    async fn insert(&self, entity: &T) -> Result<()> {
        self.collection.insert_one(entity).await?;
        Ok(())
    }

    async fn find_one(&self, filter: Document) -> Result<Option<T>> {
        let result = self.collection.find_one(filter).await?;
        Ok(result)
    }

    async fn find_one_and_delete(&self, filter: Document) -> Result<Option<T>> {
        let result = self.collection.find_one_and_delete(filter).await?;
        Ok(result)
    }

    async fn replace_one(&self, filter: Document, entity: &T) -> Result<u64> {
        let result = self.collection.replace_one(filter, entity).await?;
        Ok(result.matched_count)
    }

    async fn count(&self, filter: Document) -> Result<u64> {
        self.collection.count_documents(filter).await
    }

    async fn find_page(&self, filter: Document, sort_field: &str, order_type: OrderType, skip: u64, limit: u64) -> Result<Vec<T>> {
        // mongo 的 limit 为 0 表示不限制，调用方需自行处理空页
        let real_limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { sort_field: order_type.direction() })
            .skip(skip)
            .limit(real_limit)
            .await?;
        let results: Vec<T> = cursor.try_collect().await?;
        Ok(results)
    }
}
