use crate::biz_service::client_route::friend_request_list_route;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, AsRefStr, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    FriendRequest,
}

/// 发往通知服务的消息体，内容中的 `<user>` 标签由下游渲染
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct NotificationMessage {
    pub target: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub content: String,
    pub href: String,
}

impl NotificationMessage {
    /// 新好友请求
    pub fn friend_request(sender: &str) -> Self {
        Self {
            target: sender.to_string(),
            notification_type: NotificationType::FriendRequest,
            content: format!("New friend request <user>{}</user>", sender),
            href: friend_request_list_route(sender),
        }
    }

    /// 好友请求已被接受
    pub fn friend_accepted(receiver: &str) -> Self {
        Self {
            target: receiver.to_string(),
            notification_type: NotificationType::FriendRequest,
            content: format!("<user>{}</user> accepted your friend request", receiver),
            href: friend_request_list_route(receiver),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friend_request_message() {
        let msg = NotificationMessage::friend_request("u1");
        assert_eq!(msg.target, "u1");
        assert_eq!(msg.content, "New friend request <user>u1</user>");
        assert_eq!(msg.href, friend_request_list_route("u1"));

        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "FRIEND_REQUEST");
    }

    #[test]
    fn test_friend_accepted_message() {
        let msg = NotificationMessage::friend_accepted("u2");
        assert_eq!(msg.target, "u2");
        assert_eq!(msg.notification_type, NotificationType::FriendRequest);
        assert_eq!(msg.content, "<user>u2</user> accepted your friend request");
    }
}
