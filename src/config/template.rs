use crate::constants::{CHUNK_INDENT, CHUNK_SIZE, DECL_INDENT, ELEMENT_TYPE, INCLUDE};
use crate::error::TemplateError;
use serde::{Deserialize, Serialize};

/// 生成头文件所用的模板参数
///
/// 生成器只读取该结构，不持有任何全局模板状态。
/// 默认值即标准输出格式；YAML 配置中缺省的字段保留默认值
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HeaderTemplate {
    /// 每行字节数，必须大于 0
    pub chunk_size: usize,

    /// 字节行缩进
    pub chunk_indent: String,

    /// 数组声明行与结束行的缩进
    pub decl_indent: String,

    /// 数组元素类型
    pub element_type: String,

    /// `#include` 的目标
    pub include: String,
}

impl Default for HeaderTemplate {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
            chunk_indent: CHUNK_INDENT.to_string(),
            decl_indent: DECL_INDENT.to_string(),
            element_type: ELEMENT_TYPE.to_string(),
            include: INCLUDE.to_string(),
        }
    }
}

impl HeaderTemplate {
    /// 校验模板取值；空的类型或 include 会生成无法编译的头文件
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.chunk_size == 0 {
            return Err(TemplateError::ZeroChunkSize);
        }
        if self.element_type.trim().is_empty() {
            return Err(TemplateError::Blank("element_type"));
        }
        if self.include.trim().is_empty() {
            return Err(TemplateError::Blank("include"));
        }
        Ok(())
    }
}
