pub mod health;
pub mod pages;
pub mod request_id;
pub mod users;
