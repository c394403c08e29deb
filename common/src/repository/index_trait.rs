use mongodb::IndexModel;

/// 由 `#[derive(MongoIndexModelProvider)]` 实现，描述实体所在集合需要的索引
pub trait MongoIndexModelProvider {
    fn index_models() -> Vec<IndexModel>;
}
