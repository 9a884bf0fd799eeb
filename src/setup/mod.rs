//! 偏好存储初始化
//!
//! 加载运行配置、初始化日志、创建存储介质并完成偏好恢复。

pub mod error;

pub use error::{SetupError, SetupResult};

use crate::config::{
    ConfigPaths, StorageBackend, StorageConfig, StoreConfig, StoreConfigReader,
    StoreConfigValidator,
};
use crate::document::DocumentRoot;
use crate::signals::{FullscreenController, SystemColorScheme};
use crate::storage::{FileStorage, FileStorageOptions, MemoryStorage, PersistStorage};
use crate::store::{AppStore, StoreOptions};
use crate::utils::init_logging;

use std::sync::Arc;
use tracing::{debug, info};

/// 宿主提供的根节点与全屏控制器
pub struct HostBindings {
    pub document: Arc<dyn DocumentRoot>,
    pub fullscreen: Arc<dyn FullscreenController>,
}

/// 解析平台默认的应用数据目录
pub fn default_paths() -> SetupResult<ConfigPaths> {
    ConfigPaths::new().map_err(|e| SetupError::ConfigPaths(format!("{e:#}")))
}

/// 读取并验证运行配置
pub async fn load_config(paths: &ConfigPaths) -> SetupResult<StoreConfig> {
    let reader = StoreConfigReader::new(paths);
    let config = reader
        .load_config()
        .await
        .map_err(|e| SetupError::Config(format!("{e:#}")))?;

    StoreConfigValidator::new()
        .validate_config(&config)
        .map_err(|e| SetupError::Validation(e.to_string()))?;

    Ok(config)
}

/// 按配置创建存储介质，未指定目录时使用应用数据目录下的存储目录
pub fn create_storage(
    config: &StorageConfig,
    paths: &ConfigPaths,
) -> SetupResult<Arc<dyn PersistStorage>> {
    match config.backend {
        StorageBackend::Memory => {
            debug!("使用内存存储");
            Ok(Arc::new(MemoryStorage::new()))
        }
        StorageBackend::File => Ok(Arc::new(create_file_storage(config, paths)?)),
    }
}

/// 创建文件存储
pub fn create_file_storage(config: &StorageConfig, paths: &ConfigPaths) -> SetupResult<FileStorage> {
    let directory = config
        .directory
        .clone()
        .unwrap_or_else(|| paths.storage_dir().to_path_buf());
    debug!(
        "使用文件存储: {}, 备份: {}",
        directory.display(),
        config.backup_enabled
    );

    let options = FileStorageOptions {
        backup_enabled: config.backup_enabled,
        ..FileStorageOptions::default()
    };
    Ok(FileStorage::with_options(directory, options)?)
}

/// 按已加载的配置构建偏好存储
pub fn build_store(
    config: &StoreConfig,
    paths: &ConfigPaths,
    host: HostBindings,
) -> SetupResult<AppStore> {
    let storage = create_storage(&config.storage, paths)?;

    let store = AppStore::builder()
        .storage(storage)
        .document(host.document)
        .fullscreen(host.fullscreen)
        .color_scheme(Arc::new(SystemColorScheme))
        .options(StoreOptions::from(config))
        .build();

    Ok(store)
}

/// 完整初始化流程：配置、日志、存储、偏好恢复
pub async fn initialize(paths: &ConfigPaths, host: HostBindings) -> SetupResult<AppStore> {
    let config = load_config(paths).await?;
    init_logging(&config.logging.level).map_err(SetupError::Logging)?;

    let store = build_store(&config, paths, host)?;
    info!(
        "偏好存储已就绪, 存储键: {}, 默认重载延迟: {}ms",
        config.storage.state_key, config.reload.default_delay_ms
    );
    Ok(store)
}
