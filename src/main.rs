use clap::Parser;
use resembed::cli::Cli;
use resembed::constants::EXIT_FAILURE;
use resembed::util::log::init_color;
use resembed::{command, error};

fn main() {
    init_color();

    // 参数缺失时 clap 打印用法到 stderr 并以 2 退出，不会继续执行
    let cli = Cli::parse();

    if let Err(e) = command::dispatch(&cli) {
        error!("❌ {}", e);
        std::process::exit(EXIT_FAILURE);
    }
}
