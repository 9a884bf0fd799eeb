/*!
 * TOML配置验证器
 *
 * 负责验证运行配置的有效性和完整性
 */

use crate::{
    config::types::{LoggingConfig, ReloadConfig, StorageConfig, StoreConfig},
    storage::validate_key,
    utils::error::AppResult,
};
use tracing::debug;

/// 重载延迟上限（毫秒）
pub const MAX_RELOAD_DELAY_MS: u64 = 60_000;

/// 支持的日志级别
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// TOML配置验证器
#[derive(Debug, Default)]
pub struct StoreConfigValidator;

impl StoreConfigValidator {
    pub fn new() -> Self {
        Self
    }

    /// 验证完整配置
    pub fn validate_config(&self, config: &StoreConfig) -> AppResult<()> {
        debug!("开始验证配置");

        let mut errors = Vec::new();

        if config.version.is_empty() {
            errors.push("配置版本不能为空".to_string());
        }

        if let Err(e) = self.validate_storage_config(&config.storage) {
            errors.push(format!("存储配置验证失败: {}", e));
        }

        if let Err(e) = self.validate_reload_config(&config.reload) {
            errors.push(format!("重载配置验证失败: {}", e));
        }

        if let Err(e) = self.validate_logging_config(&config.logging) {
            errors.push(format!("日志配置验证失败: {}", e));
        }

        if !errors.is_empty() {
            crate::app_bail!("配置验证失败: {}", errors.join(", "));
        }

        debug!("配置验证通过");
        Ok(())
    }

    fn validate_storage_config(&self, storage: &StorageConfig) -> AppResult<()> {
        validate_key(&storage.state_key)?;
        validate_key(&storage.color_scheme_key)?;

        if storage.state_key == storage.color_scheme_key {
            crate::app_bail!("偏好快照与配色方案不能使用相同的存储键: {}", storage.state_key);
        }

        Ok(())
    }

    fn validate_reload_config(&self, reload: &ReloadConfig) -> AppResult<()> {
        if reload.default_delay_ms > MAX_RELOAD_DELAY_MS {
            crate::app_bail!(
                "重载延迟必须在0-{}毫秒之间，当前值: {}",
                MAX_RELOAD_DELAY_MS,
                reload.default_delay_ms
            );
        }
        Ok(())
    }

    fn validate_logging_config(&self, logging: &LoggingConfig) -> AppResult<()> {
        if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            crate::app_bail!("不支持的日志级别: {}", logging.level);
        }
        Ok(())
    }
}
