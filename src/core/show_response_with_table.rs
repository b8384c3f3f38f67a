use prettytable::{format, row, Table};
use crate::models::response::ApiResponse;

// 用表格打印单次请求的结果
pub fn show_response_with_table(resp: &ApiResponse, checks_passed: bool) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

    table.add_row(row!["指标", "值"]);
    table.add_row(row!["状态码", format!("{}", resp.status)]);
    table.add_row(row!["耗时", format!("{:.2}ms", resp.duration_ms)]);
    table.add_row(row!["响应大小", format!("{:.2}kb", resp.body.len() as f64 / 1024f64)]);
    let content_type = resp
        .headers
        .get("content-type")
        .cloned()
        .unwrap_or_else(|| "-".to_string());
    table.add_row(row!["content-type", content_type]);
    table.add_row(row!["断言", if checks_passed { "通过" } else { "失败" }]);
    println!("请求结果:");
    table.printstd();
}
