use crate::index_trait::MongoIndexModelProvider;
use mongodb::{Collection, IndexModel};

/// 取索引名，未显式命名的索引没有可比较的名字
fn index_name(model: &IndexModel) -> Option<String> {
    model.options.as_ref().and_then(|o| o.name.clone())
}

/// 按名字比对已存在的索引，只创建缺失的部分，返回新建数量
pub async fn ensure_indexes<E, T>(coll: &Collection<T>) -> mongodb::error::Result<usize>
where
    E: MongoIndexModelProvider,
    T: Send + Sync,
{
    let existing = coll.list_index_names().await.unwrap_or_default();
    let missing = missing_indexes(E::index_models(), &existing);

    let mut created = 0;
    for target in missing {
        let keys = target.keys.to_string();
        match coll.create_index(target).await {
            Ok(_) => {
                created += 1;
                log::info!("✅ 创建索引成功: {}", keys);
            }
            Err(e) => {
                log::error!("❌ 创建索引失败: {} {:?}", keys, e);
                return Err(e);
            }
        }
    }
    Ok(created)
}

pub fn missing_indexes(targets: Vec<IndexModel>, existing: &[String]) -> Vec<IndexModel> {
    targets
        .into_iter()
        .filter(|target| match index_name(target) {
            Some(name) => !existing.contains(&name),
            None => true,
        })
        .collect()
}
