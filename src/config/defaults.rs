/*!
 * 配置系统默认值
 *
 * 提供所有配置项的默认值和默认配置创建函数。
 */

use crate::config::types::*;

/// 偏好快照默认存储键
pub const DEFAULT_STATE_KEY: &str = "app-store";

/// 配色方案偏好默认存储键
pub const DEFAULT_COLOR_SCHEME_KEY: &str = "color-scheme";

/// 默认页面重载延迟（毫秒）
pub const DEFAULT_RELOAD_DELAY_MS: u64 = 600;

/// 创建默认配置
pub fn create_default_config() -> StoreConfig {
    StoreConfig {
        version: crate::config::CONFIG_VERSION.to_string(),
        storage: create_default_storage_config(),
        reload: create_default_reload_config(),
        logging: create_default_logging_config(),
    }
}

/// 创建默认存储配置
pub fn create_default_storage_config() -> StorageConfig {
    StorageConfig {
        backend: StorageBackend::File,
        directory: None,
        state_key: DEFAULT_STATE_KEY.to_string(),
        color_scheme_key: DEFAULT_COLOR_SCHEME_KEY.to_string(),
        backup_enabled: true,
    }
}

/// 创建默认重载配置
pub fn create_default_reload_config() -> ReloadConfig {
    ReloadConfig {
        default_delay_ms: DEFAULT_RELOAD_DELAY_MS,
    }
}

/// 创建默认日志配置
pub fn create_default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: "info".to_string(),
    }
}
