use crate::config::YamlConfig;
use crate::debug_log;
use crate::embed;
use crate::error::{EmbedError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// 处理嵌入命令: resembed <file> <id> [-o out]
///
/// 先完整读入文件并渲染到内存，成功后才写出，保证读取失败时不会有半截头文件
pub fn handle_embed(
    file: &str,
    identifier: &str,
    output: Option<&Path>,
    config: &YamlConfig,
) -> Result<()> {
    let start = Instant::now();
    let source = fs::read(file).map_err(|source| EmbedError::Read {
        path: PathBuf::from(file),
        source,
    })?;

    let template = &config.template;
    debug_log!(
        config,
        "读取 {} 字节，生成 {} 行，每行 {} 字节",
        source.len(),
        embed::chunk_count(source.len(), template),
        template.chunk_size
    );

    let header = embed::generate(&source, file, identifier, template);

    match output {
        Some(path) => {
            fs::write(path, header.as_bytes()).map_err(|source| EmbedError::Write {
                target: path.display().to_string(),
                source,
            })?;
            debug_log!(config, "已写入 {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(header.as_bytes())
                .and_then(|_| lock.flush())
                .map_err(|source| EmbedError::Write {
                    target: "stdout".to_string(),
                    source,
                })?;
        }
    }

    debug_log!(config, "duration: {} ms", start.elapsed().as_millis());
    Ok(())
}
