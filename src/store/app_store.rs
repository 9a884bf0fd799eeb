/*!
 * 界面偏好存储
 *
 * 显式构造、按需克隆传递的偏好存储句柄。所有修改都经过命名动作完成：
 * 动作先在锁内完成状态变更，释放锁后再写根节点、写回存储并广播事件，
 * 因此 `DocumentRoot` 的实现可以在回调中读取存储。
 */

use super::builder::AppStoreBuilder;
use super::error::{StoreError, StoreResult};
use super::events::{StoreEvent, StoreEventSender};
use super::persist::{load_color_mode, load_preferences, save_color_mode, save_preferences};
use super::state::{
    resolve_color_mode, AppPreferences, ColorMode, LayoutToggle, TransitionAnimation,
};
use crate::config::{
    StorageConfig, StoreConfig, DEFAULT_COLOR_SCHEME_KEY, DEFAULT_RELOAD_DELAY_MS,
    DEFAULT_STATE_KEY,
};
use crate::document::{
    DocumentRoot, VirtualDocument, COLOR_WEAK_CLASS, GRAY_MODE_CLASS, PRIMARY_COLOR_VAR,
};
use crate::signals::{
    ColorScheme, ColorSchemeSignal, FullscreenController, StaticColorScheme, VirtualFullscreen,
};
use crate::storage::{MemoryStorage, PersistStorage};
use crate::theme::{is_primary_slot, PrimaryPalette, ThemeOverrides, DEFAULT_PRIMARY_COLOR};
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// 偏好存储依赖的外部协作者
#[derive(Clone)]
pub struct StoreDependencies {
    pub storage: Arc<dyn PersistStorage>,
    pub document: Arc<dyn DocumentRoot>,
    pub color_scheme: Arc<dyn ColorSchemeSignal>,
    pub fullscreen: Arc<dyn FullscreenController>,
}

impl StoreDependencies {
    /// 全部使用内存实现，适合测试和无界面场景
    pub fn in_memory() -> Self {
        Self {
            storage: Arc::new(MemoryStorage::new()),
            document: Arc::new(VirtualDocument::new()),
            color_scheme: Arc::new(StaticColorScheme::default()),
            fullscreen: Arc::new(VirtualFullscreen::new()),
        }
    }
}

impl std::fmt::Debug for StoreDependencies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreDependencies").finish_non_exhaustive()
    }
}

/// 偏好存储选项
#[derive(Debug, Clone, PartialEq)]
pub struct StoreOptions {
    /// 偏好快照的存储键
    pub state_key: String,
    /// 配色方案偏好的存储键
    pub color_scheme_key: String,
    /// `reload_page_default` 使用的延迟
    pub default_reload_delay: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            state_key: DEFAULT_STATE_KEY.to_string(),
            color_scheme_key: DEFAULT_COLOR_SCHEME_KEY.to_string(),
            default_reload_delay: Duration::from_millis(DEFAULT_RELOAD_DELAY_MS),
        }
    }
}

impl From<&StoreConfig> for StoreOptions {
    fn from(config: &StoreConfig) -> Self {
        let StorageConfig {
            state_key,
            color_scheme_key,
            ..
        } = &config.storage;

        Self {
            state_key: state_key.clone(),
            color_scheme_key: color_scheme_key.clone(),
            default_reload_delay: Duration::from_millis(config.reload.default_delay_ms),
        }
    }
}

struct StoreInner {
    state: RwLock<AppPreferences>,
    color_mode: RwLock<ColorMode>,
    deps: StoreDependencies,
    options: StoreOptions,
    events: StoreEventSender,
}

/// 界面偏好存储
#[derive(Clone)]
pub struct AppStore {
    inner: Arc<StoreInner>,
}

impl std::fmt::Debug for AppStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStore")
            .field("state", &*self.inner.state.read())
            .field("color_mode", &*self.inner.color_mode.read())
            .field("options", &self.inner.options)
            .finish()
    }
}

impl AppStore {
    /// 创建偏好存储：以默认值为基础，从存储恢复快照，并同步根节点状态
    pub fn new(deps: StoreDependencies, options: StoreOptions) -> Self {
        let mut state = load_preferences(deps.storage.as_ref(), &options.state_key);
        // 渲染开关是瞬时状态，恢复时总是处于已加载
        state.load_flag = true;
        let color_mode = load_color_mode(deps.storage.as_ref(), &options.color_scheme_key);

        let store = Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(state),
                color_mode: RwLock::new(color_mode),
                deps,
                options,
                events: StoreEventSender::default(),
            }),
        };

        store.sync_document();
        info!(
            "偏好存储初始化完成, 主题色: {}, 配色方案: {}",
            store.primary_color(),
            color_mode
        );
        store.inner.events.send_hydrated();
        store
    }

    pub fn builder() -> AppStoreBuilder {
        AppStoreBuilder::new()
    }

    /// 使用内存依赖和默认选项创建
    pub fn in_memory() -> Self {
        Self::new(StoreDependencies::in_memory(), StoreOptions::default())
    }

    pub fn options(&self) -> &StoreOptions {
        &self.inner.options
    }

    pub fn dependencies(&self) -> &StoreDependencies {
        &self.inner.deps
    }

    /// 订阅偏好变更事件
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.inner.events.subscribe()
    }

    // ========================================================================
    // 读取
    // ========================================================================

    /// 当前偏好快照
    pub fn snapshot(&self) -> AppPreferences {
        self.inner.state.read().clone()
    }

    /// 用户选择的配色方案
    pub fn store_color_mode(&self) -> ColorMode {
        *self.inner.color_mode.read()
    }

    /// 实际生效的配色方案
    pub fn color_mode(&self) -> ColorScheme {
        resolve_color_mode(
            self.store_color_mode(),
            self.inner.deps.color_scheme.system_scheme(),
        )
    }

    /// 当前是否全屏，每次读取外部信号
    pub fn full_screen(&self) -> bool {
        self.inner.deps.fullscreen.is_fullscreen()
    }

    pub fn primary_color(&self) -> String {
        self.inner.state.read().primary_color.clone()
    }

    pub fn theme(&self) -> ThemeOverrides {
        self.inner.state.read().theme.clone()
    }

    pub fn footer_text(&self) -> String {
        self.inner.state.read().footer_text.clone()
    }

    pub fn collapsed(&self) -> bool {
        self.inner.state.read().collapsed
    }

    pub fn gray_mode(&self) -> bool {
        self.inner.state.read().gray_mode
    }

    pub fn color_weak(&self) -> bool {
        self.inner.state.read().color_weak
    }

    pub fn load_flag(&self) -> bool {
        self.inner.state.read().load_flag
    }

    pub fn transition_animation(&self) -> TransitionAnimation {
        self.inner.state.read().transition_animation
    }

    pub fn layout_toggle(&self, toggle: LayoutToggle) -> bool {
        self.inner.state.read().layout_toggle(toggle)
    }

    // ========================================================================
    // 动作
    // ========================================================================

    /// 重置所有偏好为默认值，并由默认主题色重新派生主题色槽位
    pub fn reset_all_theme(&self) -> StoreResult<()> {
        let palette = PrimaryPalette::derive(DEFAULT_PRIMARY_COLOR)?;
        let mut next = AppPreferences::default();
        palette.apply_to(&mut next.theme)?;

        let primary_color = next.primary_color.clone();
        *self.inner.state.write() = next;

        let document = &self.inner.deps.document;
        document.set_style_property(PRIMARY_COLOR_VAR, &primary_color);
        document.remove_class(GRAY_MODE_CLASS);
        document.remove_class(COLOR_WEAK_CLASS);

        info!("已重置所有界面偏好");
        self.persist_state();
        self.inner.events.send_reset();
        Ok(())
    }

    /// 设置主题色
    ///
    /// 颜色无法解析时返回错误，此时 CSS 变量与主题令牌都保持不变。
    pub fn set_primary_color(&self, color: &str) -> StoreResult<()> {
        let palette = PrimaryPalette::derive(color)?;

        {
            let mut state = self.inner.state.write();
            let mut theme = state.theme.clone();
            palette.apply_to(&mut theme)?;
            state.theme = theme;
            state.primary_color = palette.primary.clone();
        }

        self.inner
            .deps
            .document
            .set_style_property(PRIMARY_COLOR_VAR, &palette.primary);

        debug!(
            "主题色已更新: {} (hover: {}, pressed: {})",
            palette.primary, palette.hover, palette.pressed
        );
        self.commit("primaryColor");
        Ok(())
    }

    /// 设置配色方案偏好
    pub fn set_color_mode(&self, mode: ColorMode) {
        *self.inner.color_mode.write() = mode;

        if let Err(e) = save_color_mode(
            self.inner.deps.storage.as_ref(),
            &self.inner.options.color_scheme_key,
            mode,
        ) {
            warn!("保存配色方案偏好失败: {}", e);
            self.inner.events.send_persist_failed(e.to_string());
        }
        self.inner.events.send_updated("colorMode");
    }

    /// 切换侧边栏折叠
    pub fn toggle_collapse(&self) {
        {
            let mut state = self.inner.state.write();
            state.collapsed = !state.collapsed;
        }
        self.commit("collapsed");
    }

    /// 请求切换全屏，宿主拒绝时返回错误
    pub async fn toggle_full_screen(&self) -> StoreResult<()> {
        self.inner.deps.fullscreen.toggle().await?;
        self.inner.events.send_updated("fullScreen");
        Ok(())
    }

    /// 重载页面内容
    ///
    /// 先将 `load_flag` 置为 false 并让出一次执行权；延迟为 0 时立即恢复，
    /// 否则启动一个定时任务在延迟后恢复并返回其句柄。重复调用不会取消之前的定时任务。
    pub async fn reload_page(&self, delay: Duration) -> Option<JoinHandle<()>> {
        self.set_load_flag(false);
        tokio::task::yield_now().await;

        if delay.is_zero() {
            self.set_load_flag(true);
            return None;
        }

        let store = self.clone();
        Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            store.set_load_flag(true);
        }))
    }

    /// 使用配置中的默认延迟重载页面内容
    pub async fn reload_page_default(&self) -> Option<JoinHandle<()>> {
        self.reload_page(self.inner.options.default_reload_delay)
            .await
    }

    /// 切换色弱模式，以根节点 class 为准
    pub fn toggle_color_weak(&self) {
        let document = &self.inner.deps.document;
        document.toggle_class(COLOR_WEAK_CLASS);
        let present = document.contains_class(COLOR_WEAK_CLASS);
        self.inner.state.write().color_weak = present;
        self.commit("colorWeak");
    }

    /// 切换灰色模式，以根节点 class 为准
    pub fn toggle_gray_mode(&self) {
        let document = &self.inner.deps.document;
        document.toggle_class(GRAY_MODE_CLASS);
        let present = document.contains_class(GRAY_MODE_CLASS);
        self.inner.state.write().gray_mode = present;
        self.commit("grayMode");
    }

    /// 设置页面切换动画
    pub fn set_transition_animation(&self, animation: TransitionAnimation) {
        self.inner.state.write().transition_animation = animation;
        self.commit("transitionAnimation");
    }

    /// 设置布局区域显示开关
    pub fn set_layout_toggle(&self, toggle: LayoutToggle, visible: bool) {
        *self.inner.state.write().layout_toggle_mut(toggle) = visible;
        self.commit(toggle.field_name());
    }

    /// 切换布局区域显示开关
    pub fn toggle_layout(&self, toggle: LayoutToggle) {
        {
            let mut state = self.inner.state.write();
            let flag = state.layout_toggle_mut(toggle);
            *flag = !*flag;
        }
        self.commit(toggle.field_name());
    }

    /// 设置非主题色的主题令牌，如 `common.borderRadius`
    pub fn set_theme_token(&self, path: &str, value: Value) -> StoreResult<()> {
        if path == "common" || is_primary_slot(path) {
            return Err(StoreError::DerivedThemeToken(path.to_string()));
        }

        {
            let mut state = self.inner.state.write();
            let mut theme = state.theme.clone();
            theme.set(path, value)?;
            state.theme = theme;
        }

        self.commit("theme");
        Ok(())
    }

    /// 将当前状态同步到根节点：主题色 CSS 变量与无障碍 class
    pub fn sync_document(&self) {
        let (primary_color, gray_mode, color_weak) = {
            let state = self.inner.state.read();
            (state.primary_color.clone(), state.gray_mode, state.color_weak)
        };

        let document = &self.inner.deps.document;
        document.set_style_property(PRIMARY_COLOR_VAR, &primary_color);
        document.set_class(GRAY_MODE_CLASS, gray_mode);
        document.set_class(COLOR_WEAK_CLASS, color_weak);
    }

    /// 立即写回存储，失败时返回错误
    pub fn flush(&self) -> StoreResult<()> {
        let snapshot = self.snapshot();
        let storage = self.inner.deps.storage.as_ref();
        save_preferences(storage, &self.inner.options.state_key, &snapshot)?;
        save_color_mode(
            storage,
            &self.inner.options.color_scheme_key,
            self.store_color_mode(),
        )?;
        self.inner.events.send_persisted();
        Ok(())
    }

    // ========================================================================
    // 内部
    // ========================================================================

    fn set_load_flag(&self, loaded: bool) {
        self.inner.state.write().load_flag = loaded;
        self.commit("loadFlag");
    }

    /// 提交：持久化快照并广播更新事件
    fn commit(&self, field: &str) {
        self.persist_state();
        self.inner.events.send_updated(field);
    }

    fn persist_state(&self) {
        let snapshot = self.snapshot();
        if let Err(e) = save_preferences(
            self.inner.deps.storage.as_ref(),
            &self.inner.options.state_key,
            &snapshot,
        ) {
            warn!("保存界面偏好失败: {}", e);
            self.inner.events.send_persist_failed(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::{
        PRIMARY_COLOR_HOVER_PATH, PRIMARY_COLOR_PATH, PRIMARY_COLOR_PRESSED_PATH,
        PRIMARY_COLOR_SUPPL_PATH,
    };
    use serde_json::json;

    fn store_with_document() -> (AppStore, Arc<VirtualDocument>) {
        let document = Arc::new(VirtualDocument::new());
        let deps = StoreDependencies {
            document: document.clone(),
            ..StoreDependencies::in_memory()
        };
        (AppStore::new(deps, StoreOptions::default()), document)
    }

    /// 在回调中回读存储的根节点
    #[derive(Default)]
    struct ReadBackDocument {
        inner: VirtualDocument,
        store: parking_lot::Mutex<Option<AppStore>>,
        seen_primary: parking_lot::Mutex<Vec<String>>,
    }

    impl ReadBackDocument {
        fn read_back(&self) {
            let store = self.store.lock().clone();
            if let Some(store) = store {
                self.seen_primary.lock().push(store.primary_color());
            }
        }
    }

    impl DocumentRoot for ReadBackDocument {
        fn set_style_property(&self, name: &str, value: &str) {
            self.read_back();
            self.inner.set_style_property(name, value);
        }

        fn style_property(&self, name: &str) -> Option<String> {
            self.inner.style_property(name)
        }

        fn toggle_class(&self, class: &str) {
            self.read_back();
            self.inner.toggle_class(class);
        }

        fn remove_class(&self, class: &str) {
            self.read_back();
            self.inner.remove_class(class);
        }

        fn contains_class(&self, class: &str) -> bool {
            self.inner.contains_class(class)
        }
    }

    #[test]
    fn test_document_may_read_store_during_effects() {
        let document = Arc::new(ReadBackDocument::default());
        let deps = StoreDependencies {
            document: document.clone(),
            ..StoreDependencies::in_memory()
        };
        let store = AppStore::new(deps, StoreOptions::default());
        *document.store.lock() = Some(store.clone());

        store.set_primary_color("#2080f0").unwrap();
        // 写 CSS 变量时状态已提交
        assert_eq!(
            document.seen_primary.lock().last().map(String::as_str),
            Some("#2080f0")
        );

        store.toggle_gray_mode();
        store.toggle_color_weak();
        store.sync_document();
        store.reset_all_theme().unwrap();

        assert_eq!(
            document.seen_primary.lock().last().map(String::as_str),
            Some("#18a058")
        );
        assert!(!store.gray_mode());
        assert!(!document.contains_class(GRAY_MODE_CLASS));

        *document.store.lock() = None;
    }

    #[test]
    fn test_set_primary_color_derives_slots() {
        let (store, document) = store_with_document();
        store.set_primary_color("#2080f0").unwrap();

        let theme = store.theme();
        assert_eq!(store.primary_color(), "#2080f0");
        assert_eq!(theme.get_str(PRIMARY_COLOR_PATH), Some("#2080f0"));
        assert_eq!(theme.get_str(PRIMARY_COLOR_HOVER_PATH), Some("#6dafff"));
        assert_eq!(theme.get_str(PRIMARY_COLOR_SUPPL_PATH), Some("#6dafff"));
        assert_eq!(theme.get_str(PRIMARY_COLOR_PRESSED_PATH), Some("#0055bd"));
        assert_eq!(
            document.style_property(PRIMARY_COLOR_VAR).as_deref(),
            Some("#2080f0")
        );
    }

    #[test]
    fn test_invalid_primary_color_changes_nothing() {
        let (store, document) = store_with_document();
        let before = store.snapshot();

        let result = store.set_primary_color("not-a-color");

        assert!(matches!(result, Err(StoreError::Color(_))));
        assert_eq!(store.snapshot(), before);
        assert_eq!(
            document.style_property(PRIMARY_COLOR_VAR).as_deref(),
            Some("#18a058")
        );
    }

    #[test]
    fn test_toggle_collapse_is_involution() {
        let store = AppStore::in_memory();
        assert!(!store.collapsed());
        store.toggle_collapse();
        assert!(store.collapsed());
        store.toggle_collapse();
        assert!(!store.collapsed());
    }

    #[test]
    fn test_accessibility_modes_follow_document() {
        let (store, document) = store_with_document();

        store.toggle_gray_mode();
        assert!(store.gray_mode());
        assert!(document.contains_class(GRAY_MODE_CLASS));

        // 外部修改 class 后，切换结果以 class 为准
        document.toggle_class(COLOR_WEAK_CLASS);
        store.toggle_color_weak();
        assert!(!store.color_weak());
        assert!(!document.contains_class(COLOR_WEAK_CLASS));

        store.toggle_gray_mode();
        assert!(!store.gray_mode());
        assert!(!document.contains_class(GRAY_MODE_CLASS));
    }

    #[test]
    fn test_reset_all_theme() {
        let (store, document) = store_with_document();
        store.set_primary_color("#d03050").unwrap();
        store.toggle_collapse();
        store.toggle_gray_mode();
        store.set_layout_toggle(LayoutToggle::Progress, false);
        store.set_transition_animation(TransitionAnimation::ZoomOut);
        store.set_theme_token("common.borderRadius", json!("2px")).unwrap();

        store.reset_all_theme().unwrap();

        let prefs = store.snapshot();
        let mut expected = AppPreferences::default();
        PrimaryPalette::derive(DEFAULT_PRIMARY_COLOR)
            .unwrap()
            .apply_to(&mut expected.theme)
            .unwrap();
        assert_eq!(prefs, expected);
        assert_eq!(prefs.primary_color, "#18a058");
        assert_eq!(
            prefs.theme.get_str(PRIMARY_COLOR_HOVER_PATH),
            Some("#59d286")
        );
        assert!(document.class_list().is_empty());
    }

    #[test]
    fn test_color_mode_resolution() {
        let scheme = Arc::new(StaticColorScheme::new(ColorScheme::Light));
        let deps = StoreDependencies {
            color_scheme: scheme.clone(),
            ..StoreDependencies::in_memory()
        };
        let store = AppStore::new(deps, StoreOptions::default());

        assert_eq!(store.store_color_mode(), ColorMode::Auto);
        assert_eq!(store.color_mode(), ColorScheme::Light);
        scheme.set(ColorScheme::Dark);
        assert_eq!(store.color_mode(), ColorScheme::Dark);

        store.set_color_mode(ColorMode::Light);
        assert_eq!(store.store_color_mode(), ColorMode::Light);
        assert_eq!(store.color_mode(), ColorScheme::Light);
    }

    #[test]
    fn test_derived_theme_tokens_are_protected() {
        let store = AppStore::in_memory();
        assert!(matches!(
            store.set_theme_token(PRIMARY_COLOR_PRESSED_PATH, json!("#000000")),
            Err(StoreError::DerivedThemeToken(_))
        ));
        assert!(matches!(
            store.set_theme_token("common", json!({})),
            Err(StoreError::DerivedThemeToken(_))
        ));
        assert!(matches!(
            store.set_theme_token("common..x", json!(1)),
            Err(StoreError::ThemeToken(_))
        ));

        store
            .set_theme_token("Button.textColor", json!("#ffffff"))
            .unwrap();
        assert_eq!(store.theme().get_str("Button.textColor"), Some("#ffffff"));
    }

    #[test]
    fn test_layout_toggles() {
        let store = AppStore::in_memory();
        for toggle in LayoutToggle::ALL {
            let before = store.layout_toggle(toggle);
            store.toggle_layout(toggle);
            assert_eq!(store.layout_toggle(toggle), !before);
        }
        store.set_layout_toggle(LayoutToggle::Watermark, true);
        assert!(store.snapshot().show_watermark);
    }

    #[tokio::test]
    async fn test_reload_page_without_delay() {
        let store = AppStore::in_memory();
        let mut events = store.subscribe();

        let handle = store.reload_page(Duration::ZERO).await;

        assert!(handle.is_none());
        assert!(store.load_flag());
        // 依次观察到 false 与 true 两次更新
        assert_eq!(events.recv().await.unwrap().field(), Some("loadFlag"));
        assert_eq!(events.recv().await.unwrap().field(), Some("loadFlag"));
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_toggle_full_screen() {
        let fullscreen = Arc::new(VirtualFullscreen::new());
        let deps = StoreDependencies {
            fullscreen: fullscreen.clone(),
            ..StoreDependencies::in_memory()
        };
        let store = AppStore::new(deps, StoreOptions::default());

        assert!(!store.full_screen());
        store.toggle_full_screen().await.unwrap();
        assert!(store.full_screen());

        fullscreen.set_allow_requests(false);
        assert!(matches!(
            store.toggle_full_screen().await,
            Err(StoreError::Fullscreen(_))
        ));
        assert!(store.full_screen());
    }
}
