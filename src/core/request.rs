use std::collections::HashMap;
use std::str::FromStr;
use std::time::{Duration, Instant};
use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Client, Method};
use serde_json::Value;

use crate::core::headers::{default_api_headers, default_json_headers, default_user_agent, merge_headers};
use crate::models::config::ApiConfig;
use crate::models::request_option::RequestOption;
use crate::models::response::ApiResponse;

// 把HashMap转成reqwest的HeaderMap，无效的键值对跳过
fn build_header_map(headers: &HashMap<String, String>) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (k, v) in headers {
        if let (Ok(name), Ok(value)) = (HeaderName::from_str(k), HeaderValue::from_str(v)) {
            map.insert(name, value);
        }
    }
    // 统一打上user_agent
    if let Ok(ua) = HeaderValue::from_str(&default_user_agent()) {
        map.insert(USER_AGENT, ua);
    }
    map
}

// 单次请求，只发一次，不重试。传输层失败才返回Err，非2xx照常返回响应
async fn send(
    client: &Client,
    method: Method,
    url: &str,
    headers: HashMap<String, String>,
    body: Option<String>,
    opt: &RequestOption,
) -> anyhow::Result<ApiResponse> {
    let mut request = client
        .request(method, url)
        .headers(build_header_map(&headers));
    // 超时只透传给客户端，本层不做自己的超时循环
    if opt.timeout_secs > 0 {
        request = request.timeout(Duration::from_secs(opt.timeout_secs));
    }
    if let Some(body) = body {
        request = request.body(body);
    }
    // 计时从发出到响应体读完
    let start = Instant::now();
    let response = request.send().await.context("请求发送失败")?;
    let status = response.status().as_u16();
    let mut response_headers = HashMap::new();
    for (name, value) in response.headers() {
        if let Ok(v) = value.to_str() {
            response_headers.insert(name.to_string(), v.to_string());
        }
    }
    let body = response.bytes().await.context("读取响应体失败")?.to_vec();
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
    Ok(ApiResponse {
        status,
        headers: response_headers,
        body,
        duration_ms,
    })
}

pub async fn api_get(
    client: &Client,
    cfg: &ApiConfig,
    url: &str,
    opt: &RequestOption,
) -> anyhow::Result<ApiResponse> {
    let headers = merge_headers(default_api_headers(cfg), opt.headers.as_ref());
    send(client, Method::GET, url, headers, None, opt).await
}

pub async fn api_post(
    client: &Client,
    cfg: &ApiConfig,
    url: &str,
    body: &Value,
    opt: &RequestOption,
) -> anyhow::Result<ApiResponse> {
    // json头 + api_key头，调用方的覆盖优先
    let mut headers = default_json_headers();
    headers.extend(default_api_headers(cfg));
    let headers = merge_headers(headers, opt.headers.as_ref());
    let body = serde_json::to_string(body).context("序列化json请求体失败")?;
    send(client, Method::POST, url, headers, Some(body), opt).await
}

pub async fn api_put(
    client: &Client,
    cfg: &ApiConfig,
    url: &str,
    body: &Value,
    opt: &RequestOption,
) -> anyhow::Result<ApiResponse> {
    let mut headers = default_json_headers();
    headers.extend(default_api_headers(cfg));
    let headers = merge_headers(headers, opt.headers.as_ref());
    let body = serde_json::to_string(body).context("序列化json请求体失败")?;
    send(client, Method::PUT, url, headers, Some(body), opt).await
}

pub async fn api_delete(
    client: &Client,
    cfg: &ApiConfig,
    url: &str,
    opt: &RequestOption,
) -> anyhow::Result<ApiResponse> {
    let headers = merge_headers(default_api_headers(cfg), opt.headers.as_ref());
    send(client, Method::DELETE, url, headers, None, opt).await
}

// 任意方法的入口，CLI用
pub async fn api_request(
    client: &Client,
    cfg: &ApiConfig,
    method: &str,
    url: &str,
    body: Option<&Value>,
    opt: &RequestOption,
) -> anyhow::Result<ApiResponse> {
    let method = Method::from_str(&method.to_uppercase()).context("无效的请求方法")?;
    let headers = if body.is_some() {
        let mut h = default_json_headers();
        h.extend(default_api_headers(cfg));
        merge_headers(h, opt.headers.as_ref())
    } else {
        merge_headers(default_api_headers(cfg), opt.headers.as_ref())
    };
    let body = match body {
        Some(b) => Some(serde_json::to_string(b).context("序列化json请求体失败")?),
        None => None,
    };
    send(client, method, url, headers, body, opt).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_header_map_skips_invalid() {
        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("无效键".to_string(), "x".to_string());
        let map = build_header_map(&headers);
        assert_eq!(map.get("Accept").unwrap(), "application/json");
        assert!(map.get(USER_AGENT).is_some());
        // 非ascii的键被跳过而不是报错
        assert_eq!(map.len(), 2);
    }
}
