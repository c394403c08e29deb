/// 好友关系集合
pub const FRIENDSHIP_COLLECTION: &str = "friendship";

/// 分页默认值
pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Kafka 单条消息入队超时（毫秒）
pub const KAFKA_QUEUE_TIMEOUT_MS: u64 = 50;
