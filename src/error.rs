use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 嵌入流程中可能出现的错误
///
/// usage 错误由 clap 在解析阶段直接处理（打印用法并以 2 退出），不在此枚举中
#[derive(Debug, Error)]
pub enum EmbedError {
    /// 输入文件无法打开或读取
    #[error("读取文件失败: {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 输出无法写入（stdout 或 --output 指定的文件）
    #[error("写入输出失败: {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: io::Error,
    },

    /// 模板配置文件无法读取、解析或取值非法
    #[error("配置文件无效: {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}

/// 配置文件本身的错误，由 [`EmbedError::Config`] 补上文件路径
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Parse(#[from] serde_yaml::Error),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// 模板取值非法
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("chunk_size 必须大于 0")]
    ZeroChunkSize,

    /// 字段为空或只含空白
    #[error("{0} 不能为空")]
    Blank(&'static str),
}

pub type Result<T> = std::result::Result<T, EmbedError>;
