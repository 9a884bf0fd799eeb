/*!
 * 偏好状态定义
 *
 * `AppPreferences` 是唯一被持久化的记录，字段名以 camelCase 序列化，
 * 与前端历史存储格式保持一致。
 */

use crate::signals::ColorScheme;
use crate::theme::{create_default_theme, ThemeOverrides, DEFAULT_PRIMARY_COLOR};
use serde::{Deserialize, Serialize};

/// 默认页脚文本
pub const DEFAULT_FOOTER_TEXT: &str = "Copyright © 2024 chansee97";

/// 页面切换动画
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TransitionAnimation {
    /// 无动画
    #[serde(rename = "")]
    None,
    #[default]
    #[serde(rename = "fade-slide")]
    FadeSlide,
    #[serde(rename = "fade-bottom")]
    FadeBottom,
    #[serde(rename = "fade-scale")]
    FadeScale,
    #[serde(rename = "zoom-fade")]
    ZoomFade,
    #[serde(rename = "zoom-out")]
    ZoomOut,
}

impl TransitionAnimation {
    pub const ALL: [TransitionAnimation; 6] = [
        TransitionAnimation::None,
        TransitionAnimation::FadeSlide,
        TransitionAnimation::FadeBottom,
        TransitionAnimation::FadeScale,
        TransitionAnimation::ZoomFade,
        TransitionAnimation::ZoomOut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionAnimation::None => "",
            TransitionAnimation::FadeSlide => "fade-slide",
            TransitionAnimation::FadeBottom => "fade-bottom",
            TransitionAnimation::FadeScale => "fade-scale",
            TransitionAnimation::ZoomFade => "zoom-fade",
            TransitionAnimation::ZoomOut => "zoom-out",
        }
    }
}

/// 用户选择的配色方案
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
            ColorMode::Auto => "auto",
        }
    }

    /// 解析存储中的原始字符串，兼容带引号的 JSON 字符串
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().trim_matches('"') {
            "light" => Some(ColorMode::Light),
            "dark" => Some(ColorMode::Dark),
            "auto" => Some(ColorMode::Auto),
            _ => None,
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 计算实际生效的配色方案：`auto` 跟随系统，否则使用用户选择
pub fn resolve_color_mode(preference: ColorMode, system: ColorScheme) -> ColorScheme {
    match preference {
        ColorMode::Auto => system,
        ColorMode::Light => ColorScheme::Light,
        ColorMode::Dark => ColorScheme::Dark,
    }
}

/// 布局区域显示开关
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum LayoutToggle {
    Logo,
    Tabs,
    Footer,
    Progress,
    Breadcrumb,
    BreadcrumbIcon,
    Watermark,
}

impl LayoutToggle {
    pub const ALL: [LayoutToggle; 7] = [
        LayoutToggle::Logo,
        LayoutToggle::Tabs,
        LayoutToggle::Footer,
        LayoutToggle::Progress,
        LayoutToggle::Breadcrumb,
        LayoutToggle::BreadcrumbIcon,
        LayoutToggle::Watermark,
    ];

    /// 对应的持久化字段名
    pub fn field_name(&self) -> &'static str {
        match self {
            LayoutToggle::Logo => "showLogo",
            LayoutToggle::Tabs => "showTabs",
            LayoutToggle::Footer => "showFooter",
            LayoutToggle::Progress => "showProgress",
            LayoutToggle::Breadcrumb => "showBreadcrumb",
            LayoutToggle::BreadcrumbIcon => "showBreadcrumbIcon",
            LayoutToggle::Watermark => "showWatermark",
        }
    }
}

/// 界面偏好记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppPreferences {
    /// 页脚文本
    pub footer_text: String,

    /// 主题覆盖表
    pub theme: ThemeOverrides,

    /// 主题色，派生主题色槽位的唯一来源
    pub primary_color: String,

    /// 侧边栏折叠
    pub collapsed: bool,

    /// 灰色模式，与根节点 `gray-mode` class 同步
    pub gray_mode: bool,

    /// 色弱模式，与根节点 `color-weak` class 同步
    pub color_weak: bool,

    /// 页面内容渲染开关，重载时短暂置为 false
    pub load_flag: bool,

    pub show_logo: bool,
    pub show_tabs: bool,
    pub show_footer: bool,
    pub show_progress: bool,
    pub show_breadcrumb: bool,
    pub show_breadcrumb_icon: bool,
    pub show_watermark: bool,

    /// 页面切换动画
    pub transition_animation: TransitionAnimation,
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            footer_text: DEFAULT_FOOTER_TEXT.to_string(),
            theme: create_default_theme(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            collapsed: false,
            gray_mode: false,
            color_weak: false,
            load_flag: true,
            show_logo: true,
            show_tabs: true,
            show_footer: true,
            show_progress: true,
            show_breadcrumb: true,
            show_breadcrumb_icon: true,
            show_watermark: false,
            transition_animation: TransitionAnimation::default(),
        }
    }
}

impl AppPreferences {
    /// 读取布局开关
    pub fn layout_toggle(&self, toggle: LayoutToggle) -> bool {
        match toggle {
            LayoutToggle::Logo => self.show_logo,
            LayoutToggle::Tabs => self.show_tabs,
            LayoutToggle::Footer => self.show_footer,
            LayoutToggle::Progress => self.show_progress,
            LayoutToggle::Breadcrumb => self.show_breadcrumb,
            LayoutToggle::BreadcrumbIcon => self.show_breadcrumb_icon,
            LayoutToggle::Watermark => self.show_watermark,
        }
    }

    pub fn layout_toggle_mut(&mut self, toggle: LayoutToggle) -> &mut bool {
        match toggle {
            LayoutToggle::Logo => &mut self.show_logo,
            LayoutToggle::Tabs => &mut self.show_tabs,
            LayoutToggle::Footer => &mut self.show_footer,
            LayoutToggle::Progress => &mut self.show_progress,
            LayoutToggle::Breadcrumb => &mut self.show_breadcrumb,
            LayoutToggle::BreadcrumbIcon => &mut self.show_breadcrumb_icon,
            LayoutToggle::Watermark => &mut self.show_watermark,
        }
    }
}
