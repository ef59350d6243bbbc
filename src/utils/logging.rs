//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则为 info（详细模式为 debug）。重复调用无副作用
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(csv_path: &str, db_path: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 问卷题库加载");
    info!("📄 源文件: {}", csv_path);
    info!("🗄️ 数据库: {}", db_path);
    info!("{}", "=".repeat(60));
}

/// 记录数据行读取信息
pub fn log_rows_loaded(total: usize) {
    info!("✓ 找到 {} 道题目", total);
}

/// 记录处理进度
pub fn log_progress(processed: usize, total: usize) {
    info!("  已处理 {}/{} 道题目...", processed, total);
}

/// 打印最终统计信息
///
/// # 参数
/// - `questions`: 写入的题目数
/// - `options`: 写入的选项数
/// - `dates_missing`: 调研日期为空的题目数
/// - `db_path`: 数据库路径
pub fn print_final_stats(questions: usize, options: usize, dates_missing: usize, db_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 加载完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 题目: {}", questions);
    info!("✅ 选项: {}", options);
    info!("⚠️ 无调研日期: {}", dates_missing);
    info!("{}", "=".repeat(60));
    info!("\n题库已生成: {}", db_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（字符）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
