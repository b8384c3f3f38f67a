pub mod core;
pub mod models;

pub use crate::core::checks;
pub use crate::core::endpoint;
pub use crate::core::headers;
pub use crate::core::request;
pub use crate::core::scenario;
pub use crate::models::config::ApiConfig;
pub use crate::models::payload::{build_info_payload, default_info_payload, merge_payload};
pub use crate::models::request_option::RequestOption;
pub use crate::models::response::ApiResponse;
pub use crate::models::traffic::{Stage, TrafficData, TrafficPattern};
