//! resembed 库模块
//!
//! 导出公开模块供集成测试和外部使用（例如在 build.rs 中直接调用 [`embed::generate`]）

pub mod cli;
pub mod command;
pub mod config;
pub mod constants;
pub mod embed;
pub mod error;
pub mod util;

pub use config::HeaderTemplate;
pub use error::EmbedError;
