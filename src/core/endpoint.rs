use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use crate::models::config::ApiConfig;

// 与encodeURIComponent一致的保留字符集
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// 对url片段做百分号编码，空格编码成%20
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/* ─────────────────────────────
   dummyjson 商品接口
───────────────────────────── */

// 分页查询商品列表
pub fn products_endpoint(cfg: &ApiConfig, limit: u64, skip: u64) -> anyhow::Result<String> {
    cfg.resolve("dummyjson", &format!("/products?limit={}&skip={}", limit, skip))
}

pub fn product_by_id_endpoint(cfg: &ApiConfig, id: u64) -> anyhow::Result<String> {
    cfg.resolve("dummyjson", &format!("/products/{}", id))
}

// 自由文本搜索，搜索词要编码
pub fn search_products_endpoint(cfg: &ApiConfig, term: &str) -> anyhow::Result<String> {
    cfg.resolve("dummyjson", &format!("/products/search?q={}", encode_component(term)))
}

pub fn products_by_category_endpoint(cfg: &ApiConfig, category: &str) -> anyhow::Result<String> {
    cfg.resolve("dummyjson", &format!("/products/category/{}", encode_component(category)))
}

pub fn all_categories_endpoint(cfg: &ApiConfig) -> anyhow::Result<String> {
    cfg.resolve("dummyjson", "/products/categories")
}

pub fn add_product_endpoint(cfg: &ApiConfig) -> anyhow::Result<String> {
    cfg.resolve("dummyjson", "/products/add")
}

pub fn update_product_endpoint(cfg: &ApiConfig, id: u64) -> anyhow::Result<String> {
    cfg.resolve("dummyjson", &format!("/products/{}", id))
}

// 商品列表加任意查询参数（limit、skip、select、sort等）
pub fn products_with_params_endpoint(
    cfg: &ApiConfig,
    params: &[(&str, &str)],
) -> anyhow::Result<String> {
    let base = cfg.resolve("dummyjson", "/products")?;
    Ok(endpoint_with_params(&base, params))
}

/* ─────────────────────────────
   petstore 接口
───────────────────────────── */

// 按状态查询宠物，默认available
pub fn find_by_status_endpoint(cfg: &ApiConfig, status: &str) -> anyhow::Result<String> {
    cfg.resolve("pet", &format!("/pet/findByStatus?status={}", encode_component(status)))
}

pub fn store_inventory_endpoint(cfg: &ApiConfig) -> anyhow::Result<String> {
    cfg.resolve("pet", "/store/inventory")
}

/* ─────────────────────────────
   postman echo 接口
───────────────────────────── */

pub fn postman_info_endpoint(cfg: &ApiConfig) -> anyhow::Result<String> {
    cfg.resolve("postman", "/info")
}

pub fn postman_info_put_endpoint(cfg: &ApiConfig, id: u64) -> anyhow::Result<String> {
    cfg.resolve("postman", &format!("/info?id={}", id))
}

pub fn postman_info_delete_endpoint(cfg: &ApiConfig, id: u64) -> anyhow::Result<String> {
    cfg.resolve("postman", &format!("/info?id={}", id))
}

/* ─────────────────────────────
   通用拼装
───────────────────────────── */

// 拼接query string，值为空的参数跳过
pub fn build_query_string(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&")
}

// 在已有endpoint上追加参数
pub fn endpoint_with_params(endpoint: &str, params: &[(&str, &str)]) -> String {
    let query = build_query_string(params);
    if query.is_empty() {
        return endpoint.to_string();
    }
    // 已经带参数就用&续接
    let separator = if endpoint.contains('?') { "&" } else { "?" };
    format!("{}{}{}", endpoint, separator, query)
}

// 页码转skip/limit，页码从1开始
pub fn paginated_endpoint(endpoint: &str, page: u64, per_page: u64) -> String {
    let skip = (page.saturating_sub(1)) * per_page;
    let separator = if endpoint.contains('?') { "&" } else { "?" };
    format!("{}{}skip={}&limit={}", endpoint, separator, skip, per_page)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use super::*;

    fn test_config() -> ApiConfig {
        let mut services = HashMap::new();
        services.insert("dummyjson".to_string(), "https://dummyjson.com".to_string());
        services.insert("pet".to_string(), "https://petstore.swagger.io/v2".to_string());
        services.insert("postman".to_string(), "https://template.postman-echo.com".to_string());
        ApiConfig::with_services(services, "test-key")
    }

    #[test]
    fn test_products_endpoint() {
        let cfg = test_config();
        assert_eq!(
            products_endpoint(&cfg, 5, 10).unwrap(),
            "https://dummyjson.com/products?limit=5&skip=10"
        );
    }

    #[test]
    fn test_search_encodes_term() {
        let cfg = test_config();
        assert_eq!(
            search_products_endpoint(&cfg, "red shirt & tie").unwrap(),
            "https://dummyjson.com/products/search?q=red%20shirt%20%26%20tie"
        );
    }

    #[test]
    fn test_category_encodes_segment() {
        let cfg = test_config();
        assert_eq!(
            products_by_category_endpoint(&cfg, "home decoration").unwrap(),
            "https://dummyjson.com/products/category/home%20decoration"
        );
    }

    #[test]
    fn test_find_by_status() {
        let cfg = test_config();
        assert_eq!(
            find_by_status_endpoint(&cfg, "sold").unwrap(),
            "https://petstore.swagger.io/v2/pet/findByStatus?status=sold"
        );
    }

    #[test]
    fn test_postman_endpoints() {
        let cfg = test_config();
        assert_eq!(
            postman_info_endpoint(&cfg).unwrap(),
            "https://template.postman-echo.com/info"
        );
        assert_eq!(
            postman_info_put_endpoint(&cfg, 1).unwrap(),
            "https://template.postman-echo.com/info?id=1"
        );
        assert_eq!(
            postman_info_delete_endpoint(&cfg, 12345).unwrap(),
            "https://template.postman-echo.com/info?id=12345"
        );
    }

    #[test]
    fn test_build_query_string_skips_empty() {
        let q = build_query_string(&[("limit", "5"), ("select", ""), ("q", "a b")]);
        assert_eq!(q, "limit=5&q=a%20b");
    }

    #[test]
    fn test_endpoint_with_params_separator() {
        assert_eq!(
            endpoint_with_params("https://dummyjson.com/products", &[("limit", "3")]),
            "https://dummyjson.com/products?limit=3"
        );
        assert_eq!(
            endpoint_with_params("https://dummyjson.com/products?limit=3", &[("skip", "6")]),
            "https://dummyjson.com/products?limit=3&skip=6"
        );
        assert_eq!(
            endpoint_with_params("https://dummyjson.com/products", &[]),
            "https://dummyjson.com/products"
        );
    }

    #[test]
    fn test_products_with_params() {
        let cfg = test_config();
        assert_eq!(
            products_with_params_endpoint(&cfg, &[("limit", "10"), ("select", "title")]).unwrap(),
            "https://dummyjson.com/products?limit=10&select=title"
        );
    }

    #[test]
    fn test_paginated_endpoint() {
        assert_eq!(
            paginated_endpoint("https://dummyjson.com/products", 3, 10),
            "https://dummyjson.com/products?skip=20&limit=10"
        );
        // 页码1从0开始skip
        assert_eq!(
            paginated_endpoint("https://dummyjson.com/products?select=title", 1, 10),
            "https://dummyjson.com/products?select=title&skip=0&limit=10"
        );
    }
}
