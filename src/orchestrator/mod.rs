//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 一次完整运行
//! - 读取源文件、准备数据库（全新加载写入暂存文件）
//! - 委托 bank_loader 加载，成功后替换正式题库
//! - 加载成功后输出汇总报告
//!
//! ### `bank_loader` - 题库加载
//! - 遍历全部数据行（Vec<RawRow>）
//! - 持有选项 ID 序列和事务
//! - 输出加载统计
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (一次运行)
//!     ↓
//! bank_loader (处理 Vec<RawRow>)
//!     ↓
//! workflow::RowFlow (处理单行)
//!     ↓
//! services (能力层：题型 / 话题 / 选项 / 日期)
//!     ↓
//! infrastructure (基础设施：Connection)
//! ```

pub mod bank_loader;
pub mod batch_processor;

// 重新导出主要类型
pub use bank_loader::{BankLoader, LoadSummary, OptionIdSequence};
pub use batch_processor::{staging_path_for, App, RunOutcome};
