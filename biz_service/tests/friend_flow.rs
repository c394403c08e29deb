use async_trait::async_trait;
use biz_service::biz_service::memory_friendship_store::MemoryFriendshipStore;
use biz_service::entitys::friend_dto::{AddFriendDto, FriendPageQuery, FriendshipOpDto};
use biz_service::entitys::notification::NotificationMessage;
use biz_service::{FriendService, FriendshipStore, NotificationSender};
use common::errors::AppError;
use common::CurrentUser;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// 永远投递失败的通知通道
#[derive(Default)]
struct BrokenSender {
    attempts: AtomicUsize,
}

#[async_trait]
impl NotificationSender for BrokenSender {
    async fn send(&self, _message: &NotificationMessage) -> anyhow::Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(anyhow::anyhow!("broker unreachable"))
    }
}

fn build() -> (FriendService, Arc<MemoryFriendshipStore>, Arc<BrokenSender>) {
    let store = Arc::new(MemoryFriendshipStore::new());
    let sender = Arc::new(BrokenSender::default());
    let service = FriendService::new(store.clone(), sender.clone());
    (service, store, sender)
}

fn add(sender: &str, receiver: &str) -> AddFriendDto {
    AddFriendDto { current_user: CurrentUser::new(sender), receiver_id: receiver.to_string(), friendship_type: None }
}

#[tokio::test]
async fn add_accept_then_listed_for_both_sides() {
    let (service, _store, _sender) = build();

    let created = service.add_friend(add("u1", "u2")).await.unwrap();
    assert_eq!((created.sender.as_str(), created.receiver.as_str(), created.is_accepted), ("u1", "u2", false));

    let requests = service.get_friend_requests_with_pagination(FriendPageQuery::new("u2")).await.unwrap();
    assert_eq!(requests.total_requests, 1);
    assert_eq!(requests.friend_requests[0].id, created.id);

    let accepted = service.accept_request(FriendshipOpDto::new(&created.id, CurrentUser::new("u2"))).await.unwrap();
    assert!(accepted.is_accepted);
    assert!(accepted.accepted_at.is_some());

    for user in ["u1", "u2"] {
        let list = service.get_friend_list_with_pagination(FriendPageQuery::new(user)).await.unwrap();
        assert_eq!(list.total_friends, 1);
        assert_eq!(list.friend_list, vec![accepted.clone()]);
        assert_eq!((list.page, list.limit, list.total_pages), (1, 10, 1));
    }

    // 接受后不再出现在待处理列表
    let requests = service.get_friend_requests_with_pagination(FriendPageQuery::new("u2")).await.unwrap();
    assert_eq!(requests.total_requests, 0);
    assert!(requests.friend_requests.is_empty());
}

#[tokio::test]
async fn friend_list_excludes_pending() {
    let (service, _store, _sender) = build();
    let a = service.add_friend(add("u1", "u2")).await.unwrap();
    service.add_friend(add("u3", "u1")).await.unwrap();
    service.add_friend(add("u1", "u4")).await.unwrap();
    service.accept_request(FriendshipOpDto::new(&a.id, CurrentUser::new("u2"))).await.unwrap();

    let list = service.get_friend_list_with_pagination(FriendPageQuery::new("u1")).await.unwrap();
    assert_eq!(list.total_friends, 1);
    assert_eq!(list.friend_list[0].id, a.id);

    let pending_for_u1 = service.get_friend_requests_with_pagination(FriendPageQuery::new("u1")).await.unwrap();
    assert_eq!(pending_for_u1.total_requests, 1);
    assert_eq!(pending_for_u1.friend_requests[0].sender, "u3");
}

#[tokio::test]
async fn pagination_counts_follow_page_math() {
    let (service, _store, _sender) = build();
    let total: u64 = 23;
    for i in 0..total {
        service.add_friend(add(&format!("s{}", i), "target")).await.unwrap();
    }

    for limit in [1u64, 5, 7, 10, 23, 50] {
        for page in 1u64..=6 {
            let result = service
                .get_friend_requests_with_pagination(FriendPageQuery::new("target").with_page(page, limit))
                .await
                .unwrap();
            let expected = limit.min(total.saturating_sub((page - 1) * limit));
            assert_eq!(result.friend_requests.len() as u64, expected, "page={} limit={}", page, limit);
            assert_eq!(result.total_requests, total);
            assert_eq!(result.total_pages, total.div_ceil(limit));
        }
    }
}

#[tokio::test]
async fn pages_do_not_overlap_and_newest_first() {
    let (service, _store, _sender) = build();
    for i in 0..12 {
        service.add_friend(add(&format!("s{:02}", i), "target")).await.unwrap();
    }

    let mut seen = Vec::new();
    for page in 1..=3 {
        let result = service.get_friend_requests_with_pagination(FriendPageQuery::new("target").with_page(page, 5)).await.unwrap();
        seen.extend(result.friend_requests);
    }
    assert_eq!(seen.len(), 12);
    let mut ids: Vec<&str> = seen.iter().map(|f| f.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 12);
    assert!(seen.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[tokio::test]
async fn notification_failure_is_not_surfaced() {
    let (service, store, sender) = build();

    let created = service.add_friend(add("u1", "u2")).await.unwrap();
    service.accept_request(FriendshipOpDto::new(&created.id, CurrentUser::new("u2"))).await.unwrap();

    // 等待后台投递任务执行完
    for _ in 0..50 {
        if sender.attempts.load(Ordering::SeqCst) == 2 {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    assert_eq!(sender.attempts.load(Ordering::SeqCst), 2);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn refused_request_can_be_sent_again() {
    let (service, store, _sender) = build();
    let first = service.add_friend(add("u1", "u2")).await.unwrap();
    service.refuse_request(FriendshipOpDto::new(&first.id, CurrentUser::new("u2"))).await.unwrap();

    let again = service.add_friend(add("u2", "u1")).await.unwrap();
    assert_ne!(again.id, first.id);
    assert_eq!(store.count(&biz_service::FriendshipQuery::Between { a: "u1".into(), b: "u2".into() }).await.unwrap(), 1);

    let err = service.get_friendship_info(FriendshipOpDto::new(&first.id, CurrentUser::new("u2"))).await.unwrap_err();
    assert!(matches!(err, AppError::TargetNotExist(_)));
}

#[tokio::test]
async fn embedder_installs_logger_then_builds_service() {
    // 全局 logger 由调用方安装，服务装配本身不触碰
    let sys = common::config::SysConfig { log_level: "debug".to_string() };
    assert_eq!(common::util::log_util::init_log(&sys), log::LevelFilter::Debug);

    let (service, _store, _sender) = build();
    let created = service.add_friend(add("u1", "u2")).await.unwrap();
    assert_eq!(service.get_friendship_info(FriendshipOpDto::new(&created.id, CurrentUser::new("u2"))).await.unwrap().id, created.id);
}
