/*!
 * 主题默认配置
 *
 * 默认主题令牌与组件库的内置配色保持一致，主色为 `#18a058`。
 */

use super::types::ThemeOverrides;
use serde_json::json;

/// 默认主题色
pub const DEFAULT_PRIMARY_COLOR: &str = "#18a058";

/// 创建默认主题覆盖表
pub fn create_default_theme() -> ThemeOverrides {
    ThemeOverrides::from_value(json!({
        "common": {
            "primaryColor": DEFAULT_PRIMARY_COLOR,
            "primaryColorHover": "#36ad6a",
            "primaryColorPressed": "#0c7a43",
            "primaryColorSuppl": "#36ad6a",
            "infoColor": "#2080f0",
            "infoColorHover": "#4098fc",
            "infoColorPressed": "#1060c9",
            "infoColorSuppl": "#4098fc",
            "successColor": "#18a058",
            "successColorHover": "#36ad6a",
            "successColorPressed": "#0c7a43",
            "successColorSuppl": "#36ad6a",
            "warningColor": "#f0a020",
            "warningColorHover": "#fcb040",
            "warningColorPressed": "#c97c10",
            "warningColorSuppl": "#fcb040",
            "errorColor": "#d03050",
            "errorColorHover": "#de576d",
            "errorColorPressed": "#ab1f3f",
            "errorColorSuppl": "#de576d",
            "borderRadius": "6px"
        }
    }))
}
