use jsonpath_lib::select;
use serde_json::Value;
use crate::models::response::ApiResponse;

/// 布尔断言，无状态，可以对同一个响应做逻辑与组合
pub type Check = Box<dyn Fn(&ApiResponse) -> bool + Send + Sync>;

// 状态码等于期望值
pub fn has_status(code: u16) -> Check {
    Box::new(move |resp| resp.status == code)
}

// 响应体是合法的json
pub fn has_valid_json_body() -> Check {
    Box::new(move |resp| resp.json().is_some())
}

// 响应体包含该属性
pub fn has_property(property: &str) -> Check {
    let property = property.to_string();
    Box::new(move |resp| match resp.json() {
        Some(body) => body.get(&property).is_some(),
        None => false,
    })
}

// 响应体包含该字段且是数组，允许为空数组
pub fn has_array(field: &str) -> Check {
    let field = field.to_string();
    Box::new(move |resp| match resp.json() {
        Some(body) => body.get(&field).map(|v| v.is_array()).unwrap_or(false),
        // 解析失败降级为false，不向调用方抛异常
        None => false,
    })
}

// 响应体包含该字段且是非空数组
pub fn has_array_with_items(field: &str) -> Check {
    let field = field.to_string();
    Box::new(move |resp| match resp.json() {
        Some(body) => body
            .get(&field)
            .and_then(|v| v.as_array())
            .map(|arr| !arr.is_empty())
            .unwrap_or(false),
        None => false,
    })
}

// 每个字段都存在，值为null也算存在
pub fn has_required_fields(fields: &[&str]) -> Check {
    let fields: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
    Box::new(move |resp| match resp.json() {
        Some(body) => fields.iter().all(|f| body.get(f).is_some()),
        None => false,
    })
}

// 耗时严格小于上限（毫秒）
pub fn response_under(max_ms: f64) -> Check {
    Box::new(move |resp| resp.duration_ms < max_ms)
}

// jsonpath取出的唯一值等于参照值
// 没匹配到、匹配到多个、解析失败都算断言失败
pub fn json_equals(jsonpath: &str, reference_object: Value) -> Check {
    let jsonpath = jsonpath.to_string();
    Box::new(move |resp| {
        let body = match resp.json() {
            Some(body) => body,
            None => return false,
        };
        match select(&body, &jsonpath) {
            Ok(results) => results.len() == 1 && *results[0] == reference_object,
            Err(_) => false,
        }
    })
}

// 逻辑与组合
pub fn all_of(checks: Vec<Check>) -> Check {
    Box::new(move |resp| checks.iter().all(|check| check(resp)))
}

/// 命名断言表，全部通过返回true，verbose时打印失败项
pub fn check(resp: &ApiResponse, checks: &[(&str, Check)], verbose: bool) -> bool {
    let mut passed = true;
    for (name, check) in checks {
        if !check(resp) {
            if verbose {
                eprintln!("断言失败: {}", name);
            }
            passed = false;
        }
    }
    passed
}
