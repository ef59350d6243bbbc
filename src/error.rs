use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误（CSV 源文件、schema 脚本、报告输出）
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 数据库错误
    #[error("数据库错误: {0}")]
    Database(#[from] DatabaseError),
    /// 数据行结构错误（缺少必填字段）
    #[error("数据行错误: {0}")]
    Row(#[from] RowError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 删除文件失败
    #[error("删除文件失败 ({path}): {source}")]
    DeleteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// CSV 解析失败
    #[error("CSV解析失败 ({path}): {source}")]
    CsvParseFailed {
        path: String,
        #[source]
        source: csv::Error,
    },
    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    JsonFailed(#[from] serde_json::Error),
}

/// 数据库错误
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("SQLite错误: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// 打开数据库失败
    #[error("无法打开数据库 ({path}): {source}")]
    OpenFailed {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    /// schema 脚本执行失败
    #[error("schema脚本执行失败 ({script}): {source}")]
    SchemaFailed {
        script: String,
        #[source]
        source: rusqlite::Error,
    },

    /// 选项 ID 超出 i64 范围
    #[error("选项ID已用尽 (起始值 {floor})")]
    OptionIdExhausted { floor: i64 },
}

/// 数据行结构错误
///
/// 缺少必填字段会破坏 schema 完整性，整个加载中止
#[derive(Debug, Error)]
pub enum RowError {
    #[error("第 {row_index} 行缺少必填字段 `{field}`")]
    MissingField {
        row_index: usize,
        field: &'static str,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("无法读取配置文件 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 从常见错误类型转换 ==========

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        AppError::Database(DatabaseError::Sqlite(err))
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建缺少必填字段错误
    pub fn missing_field(row_index: usize, field: &'static str) -> Self {
        AppError::Row(RowError::MissingField { row_index, field })
    }

    /// 是否为缺少必填字段错误
    pub fn is_missing_field(&self) -> bool {
        matches!(self, AppError::Row(RowError::MissingField { .. }))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
