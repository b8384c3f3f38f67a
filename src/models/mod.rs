pub mod args;
pub mod config;
pub mod payload;
pub mod request_option;
pub mod response;
pub mod traffic;
