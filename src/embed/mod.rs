//! 二进制资源嵌入
//!
//! 将任意文件的字节序列渲染为 C++ 头文件中的常量数组，分三个阶段：
//!
//! 1. [`render_preamble`]：溯源注释、include guard、`<cstdint>`、匿名命名空间、数组声明
//! 2. [`render_body`]：按 `chunk_size` 分组，每组一行 `0x..` 字面量
//! 3. [`render_footer`]：数组结束、命名空间结束
//!
//! 每个阶段都是只依赖入参的纯函数，相同输入总是得到逐字节相同的输出。

use crate::config::HeaderTemplate;
use crate::constants::{INCLUDE_GUARD, NAMESPACE_END, PROVENANCE_PREFIX};
use std::io;

/// 生成完整头文件文本
///
/// `source_path` 与 `identifier` 原样写入，不做任何转义或校验
pub fn generate(
    source: &[u8],
    source_path: &str,
    identifier: &str,
    template: &HeaderTemplate,
) -> String {
    let mut out = render_preamble(source_path, identifier, template);
    out.push_str(&render_body(source, template));
    out.push_str(&render_footer(template));
    out
}

/// 将完整头文件写入任意 writer
pub fn write_header<W: io::Write>(
    out: &mut W,
    source: &[u8],
    source_path: &str,
    identifier: &str,
    template: &HeaderTemplate,
) -> io::Result<()> {
    out.write_all(render_preamble(source_path, identifier, template).as_bytes())?;
    for chunk in source.chunks(template.chunk_size.max(1)) {
        out.write_all(render_chunk_line(chunk, template).as_bytes())?;
    }
    out.write_all(render_footer(template).as_bytes())?;
    out.flush()
}

/// 阶段一：前导部分，以数组声明行结尾
pub fn render_preamble(source_path: &str, identifier: &str, template: &HeaderTemplate) -> String {
    format!(
        "{PROVENANCE_PREFIX}{source_path}\n\
         {INCLUDE_GUARD}\n\
         \n\
         #include {include}\n\
         \n\
         namespace\n\
         {{\n\
         {indent}const {ty} {identifier}[] = {{\n",
        include = template.include,
        indent = template.decl_indent,
        ty = template.element_type,
    )
}

/// 阶段二：全部字节行；空输入返回空串
pub fn render_body(source: &[u8], template: &HeaderTemplate) -> String {
    // validate() 保证 chunk_size > 0，这里兜底避免 chunks(0) panic
    source
        .chunks(template.chunk_size.max(1))
        .map(|chunk| render_chunk_line(chunk, template))
        .collect()
}

/// 渲染一行字节：缩进 + `0x..,` 以单个空格分隔，行尾保留逗号并换行
pub fn render_chunk_line(chunk: &[u8], template: &HeaderTemplate) -> String {
    let mut line = String::with_capacity(template.chunk_indent.len() + chunk.len() * 6);
    line.push_str(&template.chunk_indent);
    for (i, byte) in chunk.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&format!("0x{byte:02x},"));
    }
    line.push('\n');
    line
}

/// 阶段三：数组与命名空间的结束部分
pub fn render_footer(template: &HeaderTemplate) -> String {
    format!("{}}};\n{NAMESPACE_END}\n", template.decl_indent)
}

/// 生成结果的行数统计，用于 verbose 日志
pub fn chunk_count(len: usize, template: &HeaderTemplate) -> usize {
    len.div_ceil(template.chunk_size.max(1))
}

#[cfg(test)]
mod tests;
