//! # Survey Question Bank
//!
//! 把问卷题目 CSV 加载进规范化的 SQLite 题库，并根据题干和选项推断题型与话题
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Connection），只暴露读写能力
//! - `BankWriter` - 写入题目和选项
//! - `bank_queries` - 只读统计查询
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 纯函数，只处理单道题
//! - `type_classifier` / `topic_classifier` - 关键词规则分类
//! - `option_parser` - 拆分选项串
//! - `field_date` - 解析调研日期
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一行"的完整处理流程
//! - `RowCtx` - 上下文封装（行号 + question_id）
//! - `RowFlow` - 流程编排（校验 → 分类 → 日期 → 选项）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/bank_loader` - 事务、选项 ID 分配、逐行写入
//! - `orchestrator/batch_processor` - 一次运行：源文件 → 加载 → 报告
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod reporting;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{QuestionType, RawRow, Topic};
pub use orchestrator::{App, BankLoader, LoadSummary, RunOutcome};
pub use reporting::BankReport;
pub use services::{classify_topic, classify_type, parse_options};
