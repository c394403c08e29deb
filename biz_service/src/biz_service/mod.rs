pub mod client_route;
pub mod friend_service;
pub mod friendship_store;
pub mod kafka_service;
pub mod memory_friendship_store;
pub mod mongo_friendship_store;
pub mod notification_sender;
