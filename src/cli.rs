use clap::Parser;
use std::path::PathBuf;

/// resembed - 把任意二进制文件嵌入为 C++ 头文件中的常量字节数组
#[derive(Parser, Debug)]
#[command(name = "resembed", version, about = "把二进制文件嵌入为 C++ 头文件", long_about = None)]
pub struct Cli {
    /// 输入文件（按原样写入溯源注释）
    pub file: String,

    /// 生成数组的符号名（原样使用，不做校验）
    pub id: String,

    /// 输出文件，默认写到 stdout
    #[arg(short, long, value_name = "OUT")]
    pub output: Option<PathBuf>,

    /// 模板配置文件（YAML，只读）
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// 在 stderr 输出 debug 日志
    #[arg(short, long)]
    pub verbose: bool,
}
