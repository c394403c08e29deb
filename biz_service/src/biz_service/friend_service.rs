use crate::biz_service::friendship_store::{FriendshipQuery, FriendshipStore};
use crate::biz_service::notification_sender::NotificationSender;
use crate::entitys::friend_dto::{AddFriendDto, FriendListPage, FriendPageQuery, FriendRequestPage, FriendshipOpDto};
use crate::entitys::friendship::Friendship;
use crate::entitys::notification::NotificationMessage;
use common::errors::AppError;
use common::repository_util::{page_skip, total_pages, PageResult};
use common::util::date_util;
use std::sync::Arc;

/// 好友请求与好友关系服务
///
/// 存储与通知均通过构造注入，服务本身不持有全局状态。
pub struct FriendService {
    store: Arc<dyn FriendshipStore>,
    notifier: Arc<dyn NotificationSender>,
}

impl FriendService {
    pub fn new(store: Arc<dyn FriendshipStore>, notifier: Arc<dyn NotificationSender>) -> Self {
        Self { store, notifier }
    }

    /// 同时发出分页查询与计数
    async fn get_paginated_results(&self, query: &FriendshipQuery, page: u64, limit: u64) -> Result<PageResult<Friendship>, AppError> {
        let skip = page_skip(page, limit);
        let fetch = async {
            if limit == 0 {
                return Ok(Vec::new());
            }
            self.store.find_page(query, skip, limit).await
        };
        let (items, total_documents) = tokio::try_join!(fetch, self.store.count(query))?;

        Ok(PageResult { items, total_documents, total_pages: total_pages(total_documents, limit) })
    }

    /// 收到的待处理好友请求
    pub async fn get_friend_requests_with_pagination(&self, params: FriendPageQuery) -> Result<FriendRequestPage, AppError> {
        let FriendPageQuery { id, page, limit } = params;
        let query = FriendshipQuery::PendingReceived { receiver: id };

        let result = self.get_paginated_results(&query, page, limit).await?;
        Ok(FriendRequestPage {
            page,
            limit,
            total_requests: result.total_documents,
            total_pages: result.total_pages,
            friend_requests: result.items,
        })
    }

    /// 已建立的好友关系，id 作为发起方或接收方均计入
    pub async fn get_friend_list_with_pagination(&self, params: FriendPageQuery) -> Result<FriendListPage, AppError> {
        let FriendPageQuery { id, page, limit } = params;
        let query = FriendshipQuery::AcceptedOf { user: id };

        let result = self.get_paginated_results(&query, page, limit).await?;
        Ok(FriendListPage {
            page,
            limit,
            total_friends: result.total_documents,
            total_pages: result.total_pages,
            friend_list: result.items,
        })
    }

    /// 发起好友请求
    pub async fn add_friend(&self, dto: AddFriendDto) -> Result<Friendship, AppError> {
        let sender_id = dto.current_user.user_id;
        let receiver_id = dto.receiver_id;

        if sender_id == receiver_id {
            return Err(AppError::BadRequest("Sender and receiver cannot be the same person.".to_string()));
        }

        let existing = self.store.find_one(&FriendshipQuery::Between { a: sender_id.clone(), b: receiver_id.clone() }).await?;
        if existing.is_some() {
            return Err(AppError::TargetAlreadyExists("A Friend already exists between these users.".to_string()));
        }

        let friendship = Friendship::pending(sender_id, receiver_id, dto.friendship_type.unwrap_or_default(), date_util::now_millis());
        let friendship = self.store.create(friendship).await?;
        log::info!("friend request created: id={}, sender={}, receiver={}", friendship.id, friendship.sender, friendship.receiver);

        self.notify(NotificationMessage::friend_request(&friendship.sender));
        Ok(friendship)
    }

    /// 接受好友请求，只有接收方可以操作
    pub async fn accept_request(&self, dto: FriendshipOpDto) -> Result<Friendship, AppError> {
        let query = FriendshipQuery::PendingById { id: dto.id, receiver: dto.current_user.user_id };

        let Some(mut friend_request) = self.store.find_one(&query).await? else {
            return Err(request_not_found());
        };

        friend_request.accept(date_util::now_millis());
        // 查询与写回之间记录被拒绝删除
        if !self.store.save(&friend_request).await? {
            return Err(request_not_found());
        }
        log::info!("friend request accepted: id={}, receiver={}", friend_request.id, friend_request.receiver);

        self.notify(NotificationMessage::friend_accepted(&friend_request.receiver));
        Ok(friend_request)
    }

    /// 拒绝好友请求，直接删除待处理记录
    pub async fn refuse_request(&self, dto: FriendshipOpDto) -> Result<(), AppError> {
        let query = FriendshipQuery::PendingById { id: dto.id, receiver: dto.current_user.user_id };

        match self.store.find_one_and_delete(&query).await? {
            Some(removed) => {
                log::info!("friend request refused: id={}, receiver={}", removed.id, removed.receiver);
                Ok(())
            }
            None => Err(request_not_found()),
        }
    }

    /// 查看一条好友关系；仅接收方可见
    pub async fn get_friendship_info(&self, dto: FriendshipOpDto) -> Result<Friendship, AppError> {
        let query = FriendshipQuery::ReceivedById { id: dto.id, receiver: dto.current_user.user_id };

        self.store.find_one(&query).await?.ok_or_else(|| AppError::TargetNotExist("Friendship not found.".to_string()))
    }

    /// 异步投递通知，失败只记日志
    fn notify(&self, message: NotificationMessage) {
        let notifier = self.notifier.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.send(&message).await {
                log::warn!("notification dropped: target={}, type={}, err={:?}", message.target, message.notification_type, e);
            }
        });
    }
}

fn request_not_found() -> AppError {
    AppError::TargetNotExist("Friend request not found or already accepted.".to_string())
}
