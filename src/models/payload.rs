use serde_json::{json, Map, Value};
use time::OffsetDateTime;

// 允许直接覆盖的顶层字段
const TOP_LEVEL_KEYS: [&str; 4] = ["name", "name2", "active", "timestamp"];
// 允许浅合并的嵌套对象
const NESTED_KEYS: [&str; 2] = ["user", "contact"];

/// 默认的info报文模板，每次调用都新建，模板本身不会被修改
pub fn default_info_payload() -> Value {
    json!({
        "name": "info name",
        "name2": "info name2",
        "active": true,
        "timestamp": OffsetDateTime::now_utc().unix_timestamp(),
        "user": {
            "id": 1,
            "name": "default user",
            "permissions": ["read"]
        },
        "contact": {
            "email": "default@example.com",
            "phone": "000-0000"
        }
    })
}

/// 基于默认模板构建info报文
/// 白名单之外的键静默忽略，防止报文结构漂移
pub fn build_info_payload(overrides: &Value) -> Value {
    merge_payload(
        &default_info_payload(),
        overrides,
        &TOP_LEVEL_KEYS,
        &NESTED_KEYS,
    )
}

/// 通用合并：顶层白名单字段整体替换，嵌套对象浅合并
/// defaults不会被修改，每次返回独立的对象
pub fn merge_payload(
    defaults: &Value,
    overrides: &Value,
    top_level: &[&str],
    nested: &[&str],
) -> Value {
    let mut result = defaults.clone();
    let result_map = match result.as_object_mut() {
        Some(m) => m,
        // 模板不是对象就原样返回
        None => return result,
    };
    let override_map = match overrides.as_object() {
        Some(m) => m,
        None => return result,
    };
    // 顶层字段整体替换
    for key in top_level {
        if let Some(val) = override_map.get(*key) {
            result_map.insert(key.to_string(), val.clone());
        }
    }
    // 嵌套对象浅合并，覆盖对象里的键替换同名默认键，其余默认键保留
    for key in nested {
        if let Some(override_obj) = override_map.get(*key).and_then(|v| v.as_object()) {
            let merged = match result_map.get(*key).and_then(|v| v.as_object()) {
                Some(default_obj) => {
                    let mut m: Map<String, Value> = default_obj.clone();
                    for (k, v) in override_obj {
                        m.insert(k.clone(), v.clone());
                    }
                    m
                }
                None => override_obj.clone(),
            };
            result_map.insert(key.to_string(), Value::Object(merged));
        }
    }
    result
}
