use clap::Parser;
use serde_json::Value;

use bomb_sight::core::checks::{has_status, Check};
use bomb_sight::core::request::api_request;
use bomb_sight::core::show_response_with_table::show_response_with_table;
use bomb_sight::models::args::Args;
use bomb_sight::models::config::ApiConfig;
use bomb_sight::models::request_option::RequestOption;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    // 配置只在启动时读一次环境变量
    let cfg = ApiConfig::from_env();
    let mut json: Option<Value> = None;
    if !args.json.is_empty() {
        match serde_json::from_str(&args.json) {
            Ok(val) => json = Some(val),
            Err(e) => panic!("{}", e),
        }
    }
    let url = match cfg.resolve(&args.service, &args.path) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if args.verbose {
        println!("请求: {} {}", args.method.to_uppercase(), url);
    }
    let client = reqwest::Client::new();
    let opt = RequestOption::with_timeout(args.timeout);
    match api_request(&client, &cfg, &args.method, &url, json.as_ref(), &opt).await {
        Ok(resp) => {
            if args.verbose {
                println!("{}", resp.body_text());
            }
            let named: Vec<(&str, Check)> =
                vec![("status", has_status(args.expect_status))];
            let passed = bomb_sight::core::checks::check(&resp, &named, args.verbose);
            show_response_with_table(&resp, passed);
            if !passed {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
