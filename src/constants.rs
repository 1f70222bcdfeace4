// 项目全局常量定义
// 模板文本与可复用常量统一在此维护

// ========== 生成格式 ==========

/// 每行输出的字节数
pub const CHUNK_SIZE: usize = 12;

/// 字节行的缩进（8 个空格）
pub const CHUNK_INDENT: &str = "        ";

/// 数组声明行的缩进（4 个空格）
pub const DECL_INDENT: &str = "    ";

/// 数组元素类型
pub const ELEMENT_TYPE: &str = "std::uint8_t";

/// 定宽整数头文件
pub const INCLUDE: &str = "<cstdint>";

/// 溯源注释前缀
pub const PROVENANCE_PREFIX: &str = "// GENERATED FROM ";

/// include guard
pub const INCLUDE_GUARD: &str = "#pragma once";

/// 匿名命名空间结束注释
pub const NAMESPACE_END: &str = "} /* namespace */";

// ========== 配置 key ==========

/// 配置文件中的 key 常量
pub mod config_key {
    pub const MODE: &str = "mode";
    pub const VERBOSE: &str = "verbose";
}

// ========== 退出码 ==========

/// 读写或配置错误时的退出码（usage 错误由 clap 以 2 退出）
pub const EXIT_FAILURE: i32 = 1;
