use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// 服务名（pet、user、postman、dummyjson）
    #[arg(short, long, default_value = "dummyjson")]
    pub service: String,

    /// 资源路径，例如 /products?limit=5
    #[arg(short, long)]
    pub path: String,

    /// 请求方法
    #[arg(short, long, default_value = "GET")]
    pub method: String,

    /// json请求体
    #[arg(short, long, default_value = "")]
    pub json: String,

    /// 超时时间（秒），0表示不限制
    #[arg(long, default_value_t = 0)]
    pub timeout: u64,

    /// 期望的状态码
    #[arg(long, default_value_t = 200)]
    pub expect_status: u16,

    /// 打印详情
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
