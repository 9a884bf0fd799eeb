//! 偏好存储构建器

use super::app_store::{AppStore, StoreDependencies, StoreOptions};
use crate::document::DocumentRoot;
use crate::signals::{ColorSchemeSignal, FullscreenController};
use crate::storage::PersistStorage;
use std::sync::Arc;
use std::time::Duration;

/// 偏好存储构建器，未指定的依赖使用内存实现
#[derive(Default)]
pub struct AppStoreBuilder {
    storage: Option<Arc<dyn PersistStorage>>,
    document: Option<Arc<dyn DocumentRoot>>,
    color_scheme: Option<Arc<dyn ColorSchemeSignal>>,
    fullscreen: Option<Arc<dyn FullscreenController>>,
    options: StoreOptions,
}

impl AppStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn storage(mut self, storage: Arc<dyn PersistStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn document(mut self, document: Arc<dyn DocumentRoot>) -> Self {
        self.document = Some(document);
        self
    }

    pub fn color_scheme(mut self, color_scheme: Arc<dyn ColorSchemeSignal>) -> Self {
        self.color_scheme = Some(color_scheme);
        self
    }

    pub fn fullscreen(mut self, fullscreen: Arc<dyn FullscreenController>) -> Self {
        self.fullscreen = Some(fullscreen);
        self
    }

    pub fn options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    pub fn state_key(mut self, key: impl Into<String>) -> Self {
        self.options.state_key = key.into();
        self
    }

    pub fn color_scheme_key(mut self, key: impl Into<String>) -> Self {
        self.options.color_scheme_key = key.into();
        self
    }

    pub fn default_reload_delay(mut self, delay: Duration) -> Self {
        self.options.default_reload_delay = delay;
        self
    }

    /// 构建并从存储恢复
    pub fn build(self) -> AppStore {
        let defaults = StoreDependencies::in_memory();
        let deps = StoreDependencies {
            storage: self.storage.unwrap_or(defaults.storage),
            document: self.document.unwrap_or(defaults.document),
            color_scheme: self.color_scheme.unwrap_or(defaults.color_scheme),
            fullscreen: self.fullscreen.unwrap_or(defaults.fullscreen),
        };
        AppStore::new(deps, self.options)
    }
}

impl std::fmt::Debug for AppStoreBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStoreBuilder")
            .field("storage", &self.storage.is_some())
            .field("document", &self.document.is_some())
            .field("color_scheme", &self.color_scheme.is_some())
            .field("fullscreen", &self.fullscreen.is_some())
            .field("options", &self.options)
            .finish()
    }
}
