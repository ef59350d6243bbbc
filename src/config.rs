use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// 指定 TOML 配置文件路径的环境变量
pub const CONFIG_FILE_ENV: &str = "QUESTION_BANK_CONFIG";

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 题目 CSV 源文件
    pub csv_path: String,
    /// 输出的 SQLite 题库文件
    pub db_path: String,
    /// 外部 schema 脚本，为空时使用内置脚本
    pub schema_path: Option<String>,
    /// 选项 ID 起始值，避开预置数据的 ID 空间
    pub option_id_floor: i64,
    /// 每处理多少行输出一次进度，0 表示不输出
    pub progress_interval: usize,
    /// 加载前删除已存在的数据库文件
    pub fresh_database: bool,
    /// 按话题预览的题目数量
    pub topic_preview_limit: usize,
    /// 按题型预览的题目数量
    pub type_preview_limit: usize,
    /// 预览时题干截断长度（字符）
    pub preview_width: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// JSON 报告输出路径
    pub report_json_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_path: "tavern_files/questions.csv".to_string(),
            db_path: "tavern_files/question_bank.db".to_string(),
            schema_path: None,
            option_id_floor: 1000,
            progress_interval: 10,
            fresh_database: true,
            topic_preview_limit: 5,
            type_preview_limit: 3,
            preview_width: 80,
            verbose_logging: false,
            report_json_path: None,
        }
    }
}

impl Config {
    /// 加载配置：默认值 → TOML 文件（可选）→ 环境变量
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) if !path.is_empty() => Self::from_toml_file(Path::new(&path))?,
            _ => Self::default(),
        };
        Ok(base.with_env_overrides())
    }

    /// 从 TOML 文件读取配置，未写出的字段使用默认值
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 用环境变量覆盖配置；无法解析的值保持原样
    pub fn with_env_overrides(self) -> Self {
        Self {
            csv_path: std::env::var("QB_CSV_PATH").unwrap_or(self.csv_path),
            db_path: std::env::var("QB_DB_PATH").unwrap_or(self.db_path),
            schema_path: std::env::var("QB_SCHEMA_PATH").ok().or(self.schema_path),
            option_id_floor: std::env::var("QB_OPTION_ID_FLOOR").ok().and_then(|v| v.parse().ok()).unwrap_or(self.option_id_floor),
            progress_interval: std::env::var("QB_PROGRESS_INTERVAL").ok().and_then(|v| v.parse().ok()).unwrap_or(self.progress_interval),
            fresh_database: std::env::var("QB_FRESH_DATABASE").ok().and_then(|v| v.parse().ok()).unwrap_or(self.fresh_database),
            verbose_logging: std::env::var("QB_VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
            report_json_path: std::env::var("QB_REPORT_JSON_PATH").ok().or(self.report_json_path),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.option_id_floor, 1000);
        assert_eq!(config.progress_interval, 10);
        assert!(config.fresh_database);
        assert!(config.schema_path.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            csv_path = "data/q.csv"
            option_id_floor = 5000
            "#,
        )
        .unwrap();

        assert_eq!(config.csv_path, "data/q.csv");
        assert_eq!(config.option_id_floor, 5000);
        // 未写出的字段保持默认
        assert_eq!(config.db_path, Config::default().db_path);
        assert_eq!(config.preview_width, 80);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(Config::from_toml_str("option_id_floor = \"abc\"").is_err());
    }

    #[test]
    fn test_missing_toml_file_is_error() {
        let result = Config::from_toml_file(Path::new("/nonexistent/question_bank.toml"));
        assert!(matches!(result, Err(ConfigError::ReadFailed { .. })));
    }
}
