// src/handlers/mod.rs

pub mod authentications;
pub mod comments;
pub mod likes;
pub mod replies;
pub mod root;
pub mod threads;
pub mod users;
