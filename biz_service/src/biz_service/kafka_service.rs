use crate::biz_const::KAFKA_QUEUE_TIMEOUT_MS;
use crate::biz_service::notification_sender::NotificationSender;
use crate::entitys::notification::NotificationMessage;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use common::config::KafkaConfig;
use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::error::RDKafkaErrorCode;
use rdkafka::ClientConfig;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

#[derive(Clone)]
pub struct KafkaService {
    producer: FutureProducer,
    config: KafkaConfig,
}

impl fmt::Debug for KafkaService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KafkaService").field("config", &self.config).finish()
    }
}

impl KafkaService {
    pub fn new(cfg: KafkaConfig) -> Result<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &cfg.brokers)
            .set("message.timeout.ms", "5000")
            .create()
            .map_err(|e| anyhow!("Kafka producer create failed for {}: {}", cfg.brokers, e))?;

        Ok(KafkaService { producer, config: cfg })
    }

    /// 初始化：先确保通知 topic 存在，再创建 producer
    pub async fn init(cfg: &KafkaConfig) -> Result<Self> {
        Self::create_topics(&cfg.brokers, &[(cfg.topic_notification.as_str(), cfg.partitions, cfg.replicas)]).await?;
        Self::new(cfg.clone())
    }

    /// 创建 topic，已存在的跳过
    pub async fn create_topics(brokers: &str, topics: &[(&str, i32, i32)]) -> Result<()> {
        let admin: AdminClient<DefaultClientContext> = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .create()
            .map_err(|e| anyhow!("Failed to create Kafka AdminClient: {}", e))?;

        let topic_defs: Vec<_> = topics.iter().map(|(name, part, rep)| NewTopic::new(name, *part, TopicReplication::Fixed(*rep))).collect();

        let results = admin.create_topics(&topic_defs, &AdminOptions::new()).await?;

        for result in results {
            match result {
                Ok(name) => log::info!("✅ Created topic: {}", name),
                Err((name, RDKafkaErrorCode::TopicAlreadyExists)) => {
                    log::info!("🔁 Topic [{}] already exists, skipping", name);
                }
                Err((name, err)) => {
                    log::error!("❌ Failed to create topic [{}]: {}", name, err);
                    return Err(anyhow!("Failed to create topic [{}]: {}", name, err));
                }
            }
        }
        Ok(())
    }

    pub fn topic_notification(&self) -> &str {
        &self.config.topic_notification
    }

    /// 发送消息(json)
    pub async fn send_json<T: Serialize>(&self, value: &T, key: &str, topic: &str) -> Result<()> {
        let payload = serde_json::to_string(value)?;
        let record = FutureRecord::to(topic).payload(&payload).key(key);

        let timeout = Duration::from_millis(KAFKA_QUEUE_TIMEOUT_MS);

        match self.producer.send(record, timeout).await {
            Ok(delivery) => {
                log::debug!("Kafka OK => topic={}, delivery={:?}", topic, delivery);
                Ok(())
            }
            Err((err, _)) => {
                log::error!("Kafka 发送失败: {:?}", err);
                Err(anyhow!(err))
            }
        }
    }
}

#[async_trait]
impl NotificationSender for KafkaService {
    async fn send(&self, message: &NotificationMessage) -> Result<()> {
        self.send_json(message, &message.target, self.topic_notification()).await
    }
}
