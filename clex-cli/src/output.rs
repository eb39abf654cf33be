//! Colored status lines for the CLI.
//! CLI 的彩色状态输出。

/// Print a success message in green.
/// 以绿色打印成功消息。
pub fn success(msg: &str) {
    println!("\x1b[32m{msg}\x1b[0m");
}

/// Print an error message in red.
/// 以红色打印错误消息。
pub fn error(msg: &str) {
    eprintln!("\x1b[31merror:\x1b[0m {msg}");
}

/// Print an info message in blue, on stderr so token output stays clean.
/// 以蓝色向标准错误输出打印提示消息。
pub fn info(msg: &str) {
    eprintln!("\x1b[34minfo:\x1b[0m {msg}");
}
