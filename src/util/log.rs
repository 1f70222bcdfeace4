// 标准输出只承载生成的头文件，所有诊断信息一律写到 stderr

/// 打印错误信息
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        eprint!("{}", "[ERROR] ".red());
        eprintln!($($arg)*)
    }};
}

/// 打印 debug 日志（仅 verbose 模式下输出）
#[macro_export]
macro_rules! debug_log {
    ($config:expr, $($arg:tt)*) => {{
        if $config.is_verbose() {
            use colored::Colorize;
            eprint!("{}", "[DEBUG] ".dimmed());
            eprintln!($($arg)*)
        }
    }};
}

/// 影响 colored 着色判断的环境变量；设置了任意一个时交给 colored 自行处理
const COLOR_ENV_VARS: &[&str] = &["NO_COLOR", "CLICOLOR", "CLICOLOR_FORCE"];

/// 按 stderr 是否为终端决定是否着色
///
/// colored 默认只看 stdout，而 stdout 常被重定向到头文件
pub fn init_color() {
    use std::io::IsTerminal;

    let env_set = COLOR_ENV_VARS
        .iter()
        .any(|key| std::env::var_os(key).is_some());
    if let Some(enable) = color_override(std::io::stderr().is_terminal(), env_set) {
        colored::control::set_override(enable);
    }
}

fn color_override(stderr_is_tty: bool, env_set: bool) -> Option<bool> {
    if env_set { None } else { Some(stderr_is_tty) }
}
