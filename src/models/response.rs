use std::collections::HashMap;
use serde_json::Value;

/// 统一的响应对象，所有断言都基于它，不各自重复解析
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
    // 耗时（毫秒）
    pub duration_ms: f64,
}

impl ApiResponse {
    // 解析响应体为json，解析失败返回None而不是报错
    pub fn json(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_parse_failure_is_none() {
        let resp = ApiResponse {
            status: 200,
            headers: HashMap::new(),
            body: b"not json{".to_vec(),
            duration_ms: 1.0,
        };
        assert!(resp.json().is_none());
    }

    #[test]
    fn test_is_success() {
        let mut resp = ApiResponse {
            status: 204,
            headers: HashMap::new(),
            body: Vec::new(),
            duration_ms: 1.0,
        };
        assert!(resp.is_success());
        resp.status = 404;
        assert!(!resp.is_success());
    }
}
