use std::collections::HashMap;
use std::env;
use anyhow::anyhow;
use lazy_static::lazy_static;

// 默认服务表，每个服务都可以被环境变量覆盖
lazy_static! {
    static ref DEFAULT_SERVICES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("pet", "https://petstore.swagger.io/v2");
        m.insert("user", "https://user.service/v1");
        m.insert("postman", "https://template.postman-echo.com");
        m.insert("dummyjson", "https://dummyjson.com");
        m
    };
}

// 默认api_key，避免硬编码密钥
const DEFAULT_API_KEY: &str = "your-default-api-key";

/// 服务注册表，进程启动时构建一次，之后只读
#[derive(Clone, Debug)]
pub struct ApiConfig {
    services: HashMap<String, String>,
    pub api_key: String,
}

impl ApiConfig {
    // 从环境变量初始化，环境变量只在这里读取
    pub fn from_env() -> Self {
        let mut services = HashMap::new();
        for (name, default_base) in DEFAULT_SERVICES.iter() {
            // 覆盖变量格式：API_PET_BASE、API_DUMMYJSON_BASE
            let var = format!("API_{}_BASE", name.to_uppercase());
            let base = env::var(&var).unwrap_or_else(|_| default_base.to_string());
            services.insert(name.to_string(), base);
        }
        let api_key = env::var("API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());
        ApiConfig { services, api_key }
    }

    // 使用自定义服务表构建，测试和内网环境用
    pub fn with_services(services: HashMap<String, String>, api_key: &str) -> Self {
        ApiConfig {
            services,
            api_key: api_key.to_string(),
        }
    }

    // 查找服务的base url，未知的服务直接报错，不做静默回退
    pub fn base_url(&self, service: &str) -> anyhow::Result<&str> {
        match self.services.get(service) {
            Some(base) => Ok(base),
            None => Err(anyhow!("未知的服务: {}", service)),
        }
    }

    // 拼接完整url，path统一成以/开头
    pub fn resolve(&self, service: &str, path: &str) -> anyhow::Result<String> {
        let base = self.base_url(service)?;
        if path.starts_with('/') {
            Ok(format!("{}{}", base, path))
        } else {
            Ok(format!("{}/{}", base, path))
        }
    }

    // 注册的服务名列表
    pub fn service_names(&self) -> Vec<&str> {
        self.services.keys().map(|k| k.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ApiConfig {
        let mut services = HashMap::new();
        services.insert("dummyjson".to_string(), "https://dummyjson.com".to_string());
        services.insert("pet".to_string(), "https://petstore.swagger.io/v2".to_string());
        ApiConfig::with_services(services, "test-key")
    }

    #[test]
    fn test_resolve() {
        let cfg = test_config();
        let url = cfg.resolve("dummyjson", "/products?limit=5&skip=10").unwrap();
        assert_eq!(url, "https://dummyjson.com/products?limit=5&skip=10");
    }

    #[test]
    fn test_resolve_normalizes_leading_slash() {
        let cfg = test_config();
        let url = cfg.resolve("pet", "store/inventory").unwrap();
        assert_eq!(url, "https://petstore.swagger.io/v2/store/inventory");
    }

    #[test]
    fn test_unknown_service_fails() {
        let cfg = test_config();
        let err = cfg.resolve("github", "/users/foo").unwrap_err();
        assert!(err.to_string().contains("github"));
    }

    #[test]
    fn test_from_env_has_defaults() {
        let cfg = ApiConfig::from_env();
        for name in ["pet", "user", "postman", "dummyjson"] {
            assert!(cfg.base_url(name).is_ok());
        }
    }
}
