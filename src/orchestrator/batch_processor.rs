//! 批量加载处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次完整的加载运行。
//!
//! ## 核心流程
//!
//! 1. **读取源文件**：先读 CSV，源文件有问题时不触碰数据库
//! 2. **准备数据库**：全新加载时写入旁边的暂存文件，否则直接打开已有库
//! 3. **加载**：委托 `BankLoader` 在一个事务中写入全部数据
//! 4. **替换**：加载成功后把暂存文件改名为正式题库，失败则删除暂存文件，旧库不受影响
//! 5. **报告**：先写 JSON 报告，最后打印汇总
//!
//! 任何一步失败都直接返回错误，不会打印成功信息

use crate::config::Config;
use crate::error::FileError;
use crate::infrastructure::sqlite;
use crate::models::{self, RawRow};
use crate::orchestrator::bank_loader::{BankLoader, LoadSummary};
use crate::reporting::BankReport;
use crate::utils::logging;
use anyhow::{Context, Result};
use rusqlite::Connection;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 一次运行的结果
#[derive(Debug, Serialize)]
pub struct RunOutcome {
    pub summary: LoadSummary,
    pub report: BankReport,
}

/// 应用主结构
pub struct App {
    config: Config,
    rows: Vec<RawRow>,
    conn: Connection,
    /// 全新加载时的暂存文件，成功后改名为 `db_path`
    staging_path: Option<PathBuf>,
}

impl App {
    /// 初始化应用：读取源文件并准备数据库
    pub fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(&config.csv_path, &config.db_path);

        info!("\n📁 正在读取题目: {}", config.csv_path);
        let rows = models::load_csv_rows(Path::new(&config.csv_path))
            .with_context(|| format!("无法读取题目源文件: {}", config.csv_path))?;
        logging::log_rows_loaded(rows.len());

        let (conn, staging_path) = prepare_database(&config)?;

        Ok(Self {
            config,
            rows,
            conn,
            staging_path,
        })
    }

    /// 运行应用主逻辑
    pub fn run(mut self) -> Result<RunOutcome> {
        if self.rows.is_empty() {
            warn!("⚠️ 源文件中没有题目");
        }

        let mut loader = BankLoader::new(&self.config);
        let loaded = loader
            .load(&mut self.conn, &self.rows)
            .context("题库加载失败，未提交任何数据")
            .and_then(|summary| {
                let report =
                    BankReport::build(&self.conn, &self.config).context("生成汇总报告失败")?;
                Ok((summary, report))
            });

        let Self {
            config,
            conn,
            staging_path,
            ..
        } = self;
        drop(conn);

        let (summary, report) = match (loaded, staging_path) {
            (Ok(loaded), Some(staging)) => {
                publish_database(&staging, Path::new(&config.db_path))?;
                loaded
            }
            (Ok(loaded), None) => loaded,
            (Err(err), Some(staging)) => {
                discard_staging(&staging);
                return Err(err);
            }
            (Err(err), None) => return Err(err),
        };

        logging::print_final_stats(
            summary.questions_loaded,
            summary.options_loaded,
            summary.dates_missing,
            &config.db_path,
        );

        let outcome = RunOutcome { summary, report };
        if let Some(path) = &config.report_json_path {
            write_json_report(Path::new(path), &outcome)
                .with_context(|| format!("无法写入JSON报告: {}", path))?;
            info!("📝 JSON 报告已保存至: {}", path);
        }

        println!("\n{}", outcome.report.render());
        Ok(outcome)
    }
}

/// 暂存文件路径：与正式题库同目录，扩展名为 `loading`
pub fn staging_path_for(db_path: &Path) -> PathBuf {
    db_path.with_extension("loading")
}

/// 准备数据库：创建目录，打开并执行 schema
///
/// `fresh_database` 为真时打开的是暂存文件，旧库保持不动
fn prepare_database(config: &Config) -> Result<(Connection, Option<PathBuf>)> {
    let db_path = Path::new(&config.db_path);

    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| FileError::WriteFailed {
            path: parent.display().to_string(),
            source,
        })?;
    }

    let (open_path, staging_path) = if config.fresh_database {
        let staging = staging_path_for(db_path);
        if sqlite::remove_database_file(&staging)? {
            warn!("🗑️ 已删除残留的暂存文件: {}", staging.display());
        }
        (staging.clone(), Some(staging))
    } else {
        (db_path.to_path_buf(), None)
    };

    let schema_path = config.schema_path.as_deref().map(Path::new);
    let conn = match sqlite::open_database(&open_path, schema_path) {
        Ok(conn) => conn,
        Err(err) => {
            if let Some(staging) = &staging_path {
                discard_staging(staging);
            }
            return Err(err).with_context(|| format!("无法初始化题库: {}", config.db_path));
        }
    };
    Ok((conn, staging_path))
}

/// 用暂存文件替换正式题库
fn publish_database(staging: &Path, db_path: &Path) -> Result<(), FileError> {
    std::fs::rename(staging, db_path).map_err(|source| FileError::WriteFailed {
        path: db_path.display().to_string(),
        source,
    })?;
    info!("📦 题库已替换: {}", db_path.display());
    Ok(())
}

/// 删除失败运行留下的暂存文件，旧库不受影响
fn discard_staging(staging: &Path) {
    if let Err(err) = sqlite::remove_database_file(staging) {
        warn!("⚠️ 无法删除暂存文件 {}: {}", staging.display(), err);
    }
}

fn write_json_report(path: &Path, outcome: &RunOutcome) -> Result<(), FileError> {
    let json = serde_json::to_string_pretty(outcome)?;
    std::fs::write(path, json).map_err(|source| FileError::WriteFailed {
        path: path.display().to_string(),
        source,
    })
}
