//! 界面偏好存储
//!
//! 为前端应用提供持久化的界面显示偏好，主要功能包括：
//! - 主题色设置与悬停/按下色派生
//! - 布局区域显示开关与页面切换动画
//! - 灰色模式与色弱模式（与根节点 class 同步）
//! - 配色方案偏好与全屏切换
//! - 页面内容重载

// 模块声明
pub mod color; // 颜色解析与明暗调整
pub mod config; // 运行配置模块
pub mod document; // 根节点副作用边界
pub mod setup; // 初始化流程
pub mod signals; // 系统配色与全屏信号
pub mod storage; // 持久化存储介质
pub mod store; // 偏好存储核心模块
pub mod theme; // 主题令牌与主题色派生
pub mod utils; // 工具和错误处理模块

pub use store::{
    AppPreferences, AppStore, AppStoreBuilder, ColorMode, LayoutToggle, StoreDependencies,
    StoreError, StoreEvent, StoreOptions, StoreResult, TransitionAnimation,
};
