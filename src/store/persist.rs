/*!
 * 偏好快照的持久化与恢复
 *
 * 写入时保存完整快照；恢复时按字段浅合并：存储中的字段覆盖默认值，
 * 缺失或无法解析的字段保留默认值。存储读取失败只记录警告，不影响启动。
 */

use super::error::StoreResult;
use super::state::{AppPreferences, ColorMode};
use crate::storage::PersistStorage;
use crate::theme::palette::PRIMARY_COLOR_PATH;
use crate::theme::{create_default_theme, PrimaryPalette, DEFAULT_PRIMARY_COLOR, PRIMARY_SLOTS};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// 从存储恢复偏好记录
pub fn load_preferences(storage: &dyn PersistStorage, key: &str) -> AppPreferences {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("未找到持久化偏好，使用默认值: {}", key);
            return AppPreferences::default();
        }
        Err(e) => {
            warn!("读取持久化偏好失败，使用默认值: {}", e);
            return AppPreferences::default();
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(persisted) => {
            let mut prefs = merge_snapshot(AppPreferences::default(), &persisted);
            restore_primary_palette(&mut prefs);
            prefs
        }
        Err(e) => {
            warn!("持久化偏好不是有效的 JSON，已忽略: {}", e);
            AppPreferences::default()
        }
    }
}

/// 将持久化快照浅合并到基础记录上
///
/// 逐字段尝试覆盖，单个字段类型不符时跳过该字段，未知字段直接忽略。
pub fn merge_snapshot(base: AppPreferences, persisted: &Value) -> AppPreferences {
    let Value::Object(persisted) = persisted else {
        warn!("持久化偏好不是对象，已忽略");
        return base;
    };

    let mut merged = match serde_json::to_value(&base) {
        Ok(Value::Object(map)) => map,
        _ => return base,
    };
    let mut current = base;

    for (field, value) in persisted {
        if !merged.contains_key(field) {
            debug!("忽略未知的偏好字段: {}", field);
            continue;
        }

        let mut candidate: Map<String, Value> = merged.clone();
        candidate.insert(field.clone(), value.clone());

        match serde_json::from_value::<AppPreferences>(Value::Object(candidate.clone())) {
            Ok(prefs) => {
                merged = candidate;
                current = prefs;
            }
            Err(e) => warn!("偏好字段 {} 无法解析，保留默认值: {}", field, e),
        }
    }

    current
}

/// 恢复后校正主题色槽位
///
/// 主题中的主题色与 `primaryColor` 不一致，或缺少任一派生槽位时，由 `primaryColor`
/// 重新派生；`primaryColor` 无法解析时回退到默认主题色。
pub fn restore_primary_palette(prefs: &mut AppPreferences) {
    let consistent = prefs.theme.get_str(PRIMARY_COLOR_PATH) == Some(prefs.primary_color.as_str())
        && PRIMARY_SLOTS
            .iter()
            .all(|slot| prefs.theme.get_str(slot).is_some());
    if consistent {
        return;
    }

    let palette = match PrimaryPalette::derive(&prefs.primary_color) {
        Ok(palette) => palette,
        Err(e) => {
            warn!("持久化主题色无效，使用默认主题色: {}", e);
            prefs.primary_color = DEFAULT_PRIMARY_COLOR.to_string();
            match PrimaryPalette::derive(DEFAULT_PRIMARY_COLOR) {
                Ok(palette) => palette,
                Err(e) => {
                    warn!("默认主题色派生失败: {}", e);
                    return;
                }
            }
        }
    };

    if let Err(e) = palette.apply_to(&mut prefs.theme) {
        warn!("持久化主题结构无效，使用默认主题: {}", e);
        prefs.theme = create_default_theme();
        if let Err(e) = palette.apply_to(&mut prefs.theme) {
            warn!("写入主题色槽位失败: {}", e);
        }
    }
    debug!("已由主题色 {} 重新派生主题色槽位", prefs.primary_color);
}

/// 保存完整快照
pub fn save_preferences(
    storage: &dyn PersistStorage,
    key: &str,
    prefs: &AppPreferences,
) -> StoreResult<()> {
    let serialized = serde_json::to_string(prefs)?;
    storage.set_item(key, &serialized)?;
    Ok(())
}

/// 读取配色方案偏好，缺失或无效时为 `auto`
pub fn load_color_mode(storage: &dyn PersistStorage, key: &str) -> ColorMode {
    match storage.get_item(key) {
        Ok(Some(raw)) => ColorMode::parse(&raw).unwrap_or_else(|| {
            warn!("无效的配色方案偏好: {}", raw);
            ColorMode::default()
        }),
        Ok(None) => ColorMode::default(),
        Err(e) => {
            warn!("读取配色方案偏好失败: {}", e);
            ColorMode::default()
        }
    }
}

/// 保存配色方案偏好（原始字符串）
pub fn save_color_mode(storage: &dyn PersistStorage, key: &str, mode: ColorMode) -> StoreResult<()> {
    storage.set_item(key, mode.as_str())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::store::state::TransitionAnimation;
    use serde_json::json;

    #[test]
    fn test_partial_snapshot_keeps_defaults() {
        let merged = merge_snapshot(
            AppPreferences::default(),
            &json!({ "collapsed": true, "transitionAnimation": "zoom-out" }),
        );
        assert!(merged.collapsed);
        assert_eq!(merged.transition_animation, TransitionAnimation::ZoomOut);
        assert!(merged.show_logo);
        assert_eq!(merged.primary_color, "#18a058");
    }

    #[test]
    fn test_invalid_fields_fall_back() {
        let merged = merge_snapshot(
            AppPreferences::default(),
            &json!({
                "collapsed": "yes",
                "transitionAnimation": "spin",
                "showWatermark": true,
                "unknownField": 1
            }),
        );
        assert!(!merged.collapsed);
        assert_eq!(merged.transition_animation, TransitionAnimation::FadeSlide);
        assert!(merged.show_watermark);
    }

    #[test]
    fn test_theme_is_replaced_not_merged() {
        let merged = merge_snapshot(
            AppPreferences::default(),
            &json!({ "theme": { "common": { "primaryColor": "#2080f0" } } }),
        );
        assert_eq!(merged.theme.get_str("common.primaryColor"), Some("#2080f0"));
        assert_eq!(merged.theme.get_str("common.infoColor"), None);
    }

    #[test]
    fn test_primary_color_without_theme_is_rederived() {
        let storage = MemoryStorage::new();
        storage
            .set_item("app-store", r##"{"primaryColor":"#2080f0"}"##)
            .unwrap();

        let prefs = load_preferences(&storage, "app-store");

        assert_eq!(prefs.primary_color, "#2080f0");
        assert_eq!(prefs.theme.get_str(PRIMARY_COLOR_PATH), Some("#2080f0"));
        assert_eq!(prefs.theme.get_str("common.primaryColorHover"), Some("#6dafff"));
        assert_eq!(prefs.theme.get_str("common.primaryColorSuppl"), Some("#6dafff"));
        assert_eq!(prefs.theme.get_str("common.primaryColorPressed"), Some("#0055bd"));
        // 其它令牌保留默认值
        assert_eq!(prefs.theme.get_str("common.borderRadius"), Some("6px"));
    }

    #[test]
    fn test_theme_missing_slots_is_completed() {
        let mut prefs = merge_snapshot(
            AppPreferences::default(),
            &json!({ "theme": { "common": { "primaryColor": "#18a058" } } }),
        );
        restore_primary_palette(&mut prefs);

        assert_eq!(prefs.theme.get_str("common.primaryColorHover"), Some("#59d286"));
        assert_eq!(prefs.theme.get_str("common.primaryColorPressed"), Some("#00702d"));
    }

    #[test]
    fn test_invalid_primary_color_falls_back_to_default() {
        let mut prefs = merge_snapshot(
            AppPreferences::default(),
            &json!({ "primaryColor": "not-a-color", "theme": { "common": "flat" } }),
        );
        restore_primary_palette(&mut prefs);

        assert_eq!(prefs.primary_color, DEFAULT_PRIMARY_COLOR);
        assert_eq!(prefs.theme.get_str(PRIMARY_COLOR_PATH), Some(DEFAULT_PRIMARY_COLOR));
        assert_eq!(prefs.theme.get_str("common.infoColor"), Some("#2080f0"));
    }

    #[test]
    fn test_consistent_defaults_are_untouched() {
        let mut prefs = AppPreferences::default();
        restore_primary_palette(&mut prefs);
        assert_eq!(prefs, AppPreferences::default());
    }

    #[test]
    fn test_load_and_save_round_trip() {
        let storage = MemoryStorage::new();
        let mut prefs = AppPreferences::default();
        prefs.show_tabs = false;

        save_preferences(&storage, "app-store", &prefs).unwrap();
        assert_eq!(load_preferences(&storage, "app-store"), prefs);

        storage.set_item("app-store", "not json").unwrap();
        assert_eq!(load_preferences(&storage, "app-store"), AppPreferences::default());
    }

    #[test]
    fn test_color_mode_persistence() {
        let storage = MemoryStorage::new();
        assert_eq!(load_color_mode(&storage, "color-scheme"), ColorMode::Auto);

        save_color_mode(&storage, "color-scheme", ColorMode::Dark).unwrap();
        assert_eq!(
            storage.get_item("color-scheme").unwrap().as_deref(),
            Some("dark")
        );
        assert_eq!(load_color_mode(&storage, "color-scheme"), ColorMode::Dark);

        storage.set_item("color-scheme", "sepia").unwrap();
        assert_eq!(load_color_mode(&storage, "color-scheme"), ColorMode::Auto);
    }
}
