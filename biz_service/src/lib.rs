use common::config::AppConfig;
use std::sync::Arc;

pub mod biz_const;
pub mod biz_service;
pub mod entitys;

pub use biz_service::friend_service::FriendService;
pub use biz_service::friendship_store::{FriendshipQuery, FriendshipStore};
pub use biz_service::notification_sender::NotificationSender;

/// 按配置装配 FriendService：MongoDB 及索引、Kafka 通知。
///
/// 不安装全局 logger，由调用方在此之前执行 `common::util::log_util::init_log(&config.get_sys())`。
pub async fn init_service(config: &AppConfig) -> anyhow::Result<FriendService> {
    let db = common::db::connect(&config.get_database()).await?;
    let store = biz_service::mongo_friendship_store::MongoFriendshipStore::new(&db);
    let created = store.ensure_indexes().await?;
    log::info!("friendship indexes ready, created = {}", created);

    let kafka = biz_service::kafka_service::KafkaService::init(&config.get_kafka()).await?;
    log::info!("notification topic = {}", kafka.topic_notification());

    Ok(FriendService::new(Arc::new(store), Arc::new(kafka)))
}
