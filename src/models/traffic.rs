use std::collections::HashMap;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// 压力爬坡的一个阶段：持续时间 + 目标并发
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Stage {
    pub duration: String,
    pub target: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrafficPattern {
    pub stages: Vec<Stage>,
}

// 阈值表达式按原样透传给外部压测引擎，例如 p(95)<500、rate<0.01
pub type ThresholdGroup = HashMap<String, Vec<String>>;

/// 声明式流量配置文档：命名的阶段表 + 命名的阈值组
/// 每个变体是独立的命名配置，不做合并
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrafficData {
    pub patterns: HashMap<String, TrafficPattern>,
    pub thresholds: HashMap<String, ThresholdGroup>,
}

impl TrafficData {
    // 从json文档解析
    pub fn from_json(doc: &str) -> anyhow::Result<Self> {
        let data: TrafficData = serde_json::from_str(doc)?;
        Ok(data)
    }

    // 按名字取阶段表，未知的名字直接报错
    pub fn pattern(&self, name: &str) -> anyhow::Result<&TrafficPattern> {
        self.patterns
            .get(name)
            .ok_or_else(|| anyhow!("未知的流量模式: {}", name))
    }

    // 按名字取阈值组
    pub fn thresholds(&self, name: &str) -> anyhow::Result<&ThresholdGroup> {
        self.thresholds
            .get(name)
            .ok_or_else(|| anyhow!("未知的阈值组: {}", name))
    }

    /// 内置的四套配置：冒烟、负载、尖峰、极限
    pub fn builtin() -> Self {
        let doc = serde_json::json!({
            "patterns": {
                "smoke": {
                    "stages": [
                        {"duration": "15s", "target": 1},
                        {"duration": "30s", "target": 3},
                        {"duration": "45s", "target": 5},
                        {"duration": "20s", "target": 0}
                    ]
                },
                "load_test_normal": {
                    "stages": [
                        {"duration": "2m", "target": 10},
                        {"duration": "2m", "target": 30},
                        {"duration": "4m", "target": 80},
                        {"duration": "3m", "target": 120},
                        {"duration": "2m", "target": 60},
                        {"duration": "2m", "target": 20}
                    ]
                },
                "spike": {
                    "stages": [
                        {"duration": "30s", "target": 10},
                        {"duration": "1m", "target": 200},
                        {"duration": "30s", "target": 200},
                        {"duration": "1m", "target": 50},
                        {"duration": "30s", "target": 10}
                    ]
                },
                "stress_test_ramp": {
                    "stages": [
                        {"duration": "2m", "target": 1000},
                        {"duration": "5m", "target": 3000},
                        {"duration": "2m", "target": 100},
                        {"duration": "1m", "target": 0}
                    ]
                }
            },
            "thresholds": {
                "smoke": {
                    "http_req_duration": ["p(95)<800", "p(99)<1500"],
                    "http_req_failed": ["rate<0.02"],
                    "checks": ["rate>0.95"]
                },
                "load": {
                    "http_req_duration": ["p(95)<500", "p(99)<1000"],
                    "http_req_failed": ["rate<0.01"],
                    "checks": ["rate>0.98"],
                    "http_reqs": ["rate>50"]
                },
                "spike": {
                    "http_req_duration": ["p(95)<1000"],
                    "http_req_failed": ["rate<0.05"],
                    "http_reqs": ["rate>200"]
                },
                "stress": {
                    "http_req_duration": ["p(95)<10000"],
                    "http_req_failed": ["rate<0.1"],
                    "checks": ["rate>0.7"],
                    "stress_failure_rate": ["rate<0.05"]
                }
            }
        });
        // 内置文档是静态合法的json
        serde_json::from_value(doc).expect("内置流量配置解析失败")
    }
}
