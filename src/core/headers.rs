use std::collections::HashMap;
use crate::models::config::ApiConfig;

/// 默认请求头，api_key来自配置，不硬编码
pub fn default_api_headers(cfg: &ApiConfig) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers.insert("api_key".to_string(), cfg.api_key.clone());
    headers
}

/// json请求用的默认请求头
pub fn default_json_headers() -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers
}

// user_agent格式：名称 版本 (系统; 系统版本)
pub fn default_user_agent() -> String {
    let info = os_info::get();
    let os_type = info.os_type();
    let os_version = info.version().to_string();
    let app_name = env!("CARGO_PKG_NAME");
    let app_version = env!("CARGO_PKG_VERSION");
    format!("{} {} ({}; {})", app_name, app_version, os_type, os_version)
}

// 合并请求头，overrides中的同名键覆盖defaults
pub(crate) fn merge_headers(
    defaults: HashMap<String, String>,
    overrides: Option<&HashMap<String, String>>,
) -> HashMap<String, String> {
    let mut merged = defaults;
    if let Some(overrides) = overrides {
        for (k, v) in overrides {
            merged.insert(k.clone(), v.clone());
        }
    }
    merged
}
