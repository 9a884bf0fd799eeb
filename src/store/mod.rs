/*!
 * 界面偏好存储模块
 *
 * 主题色派生、布局开关、无障碍模式、配色方案与页面重载状态的
 * 持久化存储。
 */

pub mod app_store;
pub mod builder;
pub mod error;
pub mod events;
pub mod persist;
pub mod state;

pub use app_store::{AppStore, StoreDependencies, StoreOptions};
pub use builder::AppStoreBuilder;
pub use error::{StoreError, StoreResult};
pub use events::{StoreEvent, StoreEventSender};
pub use state::{
    resolve_color_mode, AppPreferences, ColorMode, LayoutToggle, TransitionAnimation,
    DEFAULT_FOOTER_TEXT,
};
