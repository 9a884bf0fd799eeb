/*!
 * TOML配置读取器
 *
 * 负责从文件系统读取和解析运行配置，文件不存在时返回默认配置
 */

use crate::{
    config::{defaults::create_default_config, paths::ConfigPaths, types::StoreConfig},
    utils::error::AppResult,
};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// TOML配置读取器
#[derive(Debug, Clone)]
pub struct StoreConfigReader {
    config_path: PathBuf,
}

impl StoreConfigReader {
    /// 使用默认路径创建配置读取器
    pub fn new(paths: &ConfigPaths) -> Self {
        Self {
            config_path: paths.config_file(),
        }
    }

    /// 创建指定配置路径的配置读取器
    pub fn with_config_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// 从文件系统加载TOML配置
    pub async fn load_config(&self) -> AppResult<StoreConfig> {
        debug!("开始加载TOML配置: {:?}", self.config_path);

        if !fs::try_exists(&self.config_path).await.unwrap_or(false) {
            info!("配置文件不存在，使用默认配置");
            return Ok(create_default_config());
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .with_context(|| format!("无法读取配置文件: {}", self.config_path.display()))?;

        match self.parse_toml_content(&content) {
            Ok(config) => {
                info!("配置文件解析成功");
                Ok(config)
            }
            Err(e) => {
                warn!("配置文件解析失败: {}", e);
                Err(e)
            }
        }
    }

    /// 解析TOML内容为配置结构
    pub fn parse_toml_content(&self, content: &str) -> AppResult<StoreConfig> {
        toml::from_str::<StoreConfig>(content)
            .with_context(|| format!("TOML配置解析失败 (文件: {})", self.config_path.display()))
    }

    /// 获取配置文件路径
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}
