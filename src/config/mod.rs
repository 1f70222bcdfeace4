pub mod template;
pub mod yaml_config;

pub use template::HeaderTemplate;
pub use yaml_config::YamlConfig;
