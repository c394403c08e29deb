use crate::entitys::notification::NotificationMessage;
use async_trait::async_trait;

/// 通知投递接口，单向发送，不关心下游是否消费
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, message: &NotificationMessage) -> anyhow::Result<()>;
}
