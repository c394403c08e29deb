/// 当前时间（Unix 毫秒时间戳）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
