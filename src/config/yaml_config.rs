use super::HeaderTemplate;
use crate::constants::config_key;
use crate::error::{ConfigError, EmbedError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// YAML 配置文件的完整结构
///
/// 配置文件只读，不会被本工具创建或改写
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct YamlConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub template: HeaderTemplate,

    #[serde(default, deserialize_with = "null_as_default")]
    pub log: BTreeMap<String, String>,

    /// 捕获未知的顶级键，保证不丢失任何配置
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl YamlConfig {
    /// 从配置文件加载；未指定路径时使用默认配置
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        fs::read_to_string(path)
            .map_err(ConfigError::from)
            .and_then(|content| Self::parse(&content))
            .map_err(|source| EmbedError::Config {
                path: path.to_path_buf(),
                source,
            })
    }

    /// 解析 YAML 文本并校验模板
    fn parse(content: &str) -> std::result::Result<Self, ConfigError> {
        // 空文件等价于默认配置
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.template.validate()?;
        Ok(config)
    }

    /// 是否是 verbose 模式
    pub fn is_verbose(&self) -> bool {
        self.log
            .get(config_key::MODE)
            .is_some_and(|m| m == config_key::VERBOSE)
    }

    /// 打开 verbose 模式（命令行 -v 覆盖配置）
    pub fn set_verbose(&mut self) {
        self.log
            .insert(config_key::MODE.into(), config_key::VERBOSE.into());
    }
}

/// `template: ~` 这类显式置空的 section 按默认值处理
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
