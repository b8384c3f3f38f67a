use rand::Rng;

/// 按权重随机选择场景，权重按切片顺序累加，调用方应保证总和为100
/// 总和不足100时，剩余概率落回第一个场景（定义行为，不是bug）
pub fn select_scenario<'a>(weights: &[(&'a str, f64)]) -> Option<&'a str> {
    let draw = rand::thread_rng().gen_range(0.0..100.0);
    select_with_draw(weights, draw)
}

// 抽样值固定时的选择逻辑，方便测试边界
fn select_with_draw<'a>(weights: &[(&'a str, f64)], draw: f64) -> Option<&'a str> {
    let mut cumulative = 0.0;
    for (scenario, weight) in weights {
        cumulative += weight;
        if draw < cumulative {
            return Some(scenario);
        }
    }
    // 落到尾部的概率回退到第一个场景
    weights.first().map(|(scenario, _)| *scenario)
}

// 从切片里随机取一个
pub fn random_from<'a, T>(items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = rand::thread_rng().gen_range(0..items.len());
    Some(&items[index])
}

// [min, max]闭区间的随机整数
pub fn random_int(min: i64, max: i64) -> i64 {
    rand::thread_rng().gen_range(min..=max)
}
