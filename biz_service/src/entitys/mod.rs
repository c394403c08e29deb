pub mod friend_dto;
pub mod friendship;
pub mod notification;
