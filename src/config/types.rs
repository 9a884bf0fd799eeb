/*!
 * 运行配置数据类型定义
 *
 * 偏好存储自身的运行配置（存储介质、存储键、默认重载延迟、日志级别），
 * 结构与 TOML 配置文件格式保持一致，缺失字段取默认值。
 */

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 主配置结构
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    /// 配置版本
    pub version: String,

    /// 存储配置 (对应 TOML 中的 [storage])
    pub storage: StorageConfig,

    /// 页面重载配置 (对应 TOML 中的 [reload])
    pub reload: ReloadConfig,

    /// 日志配置 (对应 TOML 中的 [logging])
    pub logging: LoggingConfig,
}

/// 存储介质
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    File,
    Memory,
}

/// 存储配置 (对应 TOML 中的 [storage] 节)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// 存储介质
    pub backend: StorageBackend,

    /// 自定义存储目录，未设置时使用应用数据目录下的 storage/
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// 偏好快照的存储键
    pub state_key: String,

    /// 配色方案偏好的存储键
    pub color_scheme_key: String,

    /// 文件存储覆盖写入时是否保留备份
    pub backup_enabled: bool,
}

/// 页面重载配置 (对应 TOML 中的 [reload] 节)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReloadConfig {
    /// 默认重载延迟（毫秒）
    pub default_delay_ms: u64,
}

/// 日志配置 (对应 TOML 中的 [logging] 节)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// 默认日志级别，RUST_LOG 优先
    pub level: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        crate::config::defaults::create_default_config()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        crate::config::defaults::create_default_storage_config()
    }
}

impl Default for ReloadConfig {
    fn default() -> Self {
        crate::config::defaults::create_default_reload_config()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        crate::config::defaults::create_default_logging_config()
    }
}
