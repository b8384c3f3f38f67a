pub mod checks;
pub mod endpoint;
pub mod headers;
pub mod request;
pub mod scenario;
pub mod show_response_with_table;
