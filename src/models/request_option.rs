use std::collections::HashMap;

/// 单次请求的可选项，headers会覆盖默认请求头
#[derive(Clone, Debug, Default)]
pub struct RequestOption {
    // 0表示不设置单请求超时
    pub timeout_secs: u64,
    pub headers: Option<HashMap<String, String>>,
}

impl RequestOption {
    pub fn with_timeout(timeout_secs: u64) -> Self {
        RequestOption {
            timeout_secs,
            headers: None,
        }
    }
}
