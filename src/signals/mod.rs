/*!
 * 外部信号
 *
 * 偏好存储依赖的两个外部实时信号：系统配色方案与全屏状态。
 * 均以 trait 注入，读取时取当前值，存储本身不缓存。
 */

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::debug;

/// 实际生效的配色方案
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorScheme::Light => write!(f, "light"),
            ColorScheme::Dark => write!(f, "dark"),
        }
    }
}

/// 系统配色方案信号
pub trait ColorSchemeSignal: Send + Sync {
    fn system_scheme(&self) -> ColorScheme;
}

/// 可手动设置的配色方案信号
#[derive(Debug, Default)]
pub struct StaticColorScheme {
    scheme: RwLock<ColorScheme>,
}

impl StaticColorScheme {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme: RwLock::new(scheme),
        }
    }

    /// 模拟系统配色变化
    pub fn set(&self, scheme: ColorScheme) {
        *self.scheme.write() = scheme;
    }
}

impl ColorSchemeSignal for StaticColorScheme {
    fn system_scheme(&self) -> ColorScheme {
        *self.scheme.read()
    }
}

/// 基于桌面环境变量的系统配色检测，无法检测时视为浅色
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemColorScheme;

impl SystemColorScheme {
    /// 检测系统是否为深色模式，None 表示无法检测
    pub fn is_dark_mode() -> Option<bool> {
        #[cfg(target_os = "linux")]
        {
            if let Ok(theme) = std::env::var("GTK_THEME") {
                Some(theme.to_lowercase().contains("dark"))
            } else if let Ok(theme) = std::env::var("QT_STYLE_OVERRIDE") {
                Some(theme.to_lowercase().contains("dark"))
            } else {
                None
            }
        }

        #[cfg(not(target_os = "linux"))]
        {
            None
        }
    }
}

impl ColorSchemeSignal for SystemColorScheme {
    fn system_scheme(&self) -> ColorScheme {
        match Self::is_dark_mode() {
            Some(true) => ColorScheme::Dark,
            _ => ColorScheme::Light,
        }
    }
}

/// 全屏切换错误
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FullscreenError {
    #[error("全屏请求被拒绝: {0}")]
    Rejected(String),
    #[error("当前环境不支持全屏")]
    Unsupported,
}

/// 全屏控制器
#[async_trait]
pub trait FullscreenController: Send + Sync {
    /// 当前是否处于全屏
    fn is_fullscreen(&self) -> bool;

    /// 请求切换全屏，宿主可能拒绝
    async fn toggle(&self) -> Result<(), FullscreenError>;
}

/// 内存中的全屏控制器
#[derive(Debug)]
pub struct VirtualFullscreen {
    active: AtomicBool,
    allow_requests: AtomicBool,
}

impl VirtualFullscreen {
    pub fn new() -> Self {
        Self {
            active: AtomicBool::new(false),
            allow_requests: AtomicBool::new(true),
        }
    }

    /// 设置是否允许全屏请求（模拟缺少用户手势时的拒绝）
    pub fn set_allow_requests(&self, allow: bool) {
        self.allow_requests.store(allow, Ordering::SeqCst);
    }

    /// 模拟用户通过 Esc 等方式退出全屏
    pub fn exit(&self) {
        self.active.store(false, Ordering::SeqCst);
    }
}

impl Default for VirtualFullscreen {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FullscreenController for VirtualFullscreen {
    fn is_fullscreen(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    async fn toggle(&self) -> Result<(), FullscreenError> {
        if !self.allow_requests.load(Ordering::SeqCst) {
            return Err(FullscreenError::Rejected("缺少用户手势".to_string()));
        }
        let previous = self.active.fetch_xor(true, Ordering::SeqCst);
        debug!("全屏状态切换: {} -> {}", previous, !previous);
        Ok(())
    }
}
