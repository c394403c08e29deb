/// 客户端好友请求列表页
pub fn friend_request_list_route(user_id: &str) -> String {
    format!("/user/{}/friend-requests", user_id)
}
