pub mod embed;

use crate::cli::Cli;
use crate::config::YamlConfig;
use crate::error::Result;

/// 命令执行入口：加载配置后交给嵌入处理
pub fn dispatch(cli: &Cli) -> Result<()> {
    let mut config = YamlConfig::load(cli.config.as_deref())?;
    if cli.verbose {
        config.set_verbose();
    }

    embed::handle_embed(&cli.file, &cli.id, cli.output.as_deref(), &config)
}
