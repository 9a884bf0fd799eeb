/*!
 * 主题令牌类型定义
 *
 * 主题覆盖表是组件库消费的嵌套键值结构（`common.primaryColor`、`Button.textColor` 等），
 * 这里不对具体字段建模，只保证按点路径读写时不会覆盖同级键。
 */

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// 主题路径错误
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ThemePathError {
    #[error("主题路径不能为空")]
    EmptyPath,
    #[error("主题路径包含空段: {0}")]
    EmptySegment(String),
    #[error("主题路径 {path} 的中间节点 {segment} 不是对象")]
    NotAnObject { path: String, segment: String },
}

/// 主题覆盖表
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ThemeOverrides(Map<String, Value>);

impl ThemeOverrides {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// 从 JSON 值创建，非对象值视为空表
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::new(),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// 按点路径写入值，缺失的中间节点会被创建为对象，同级键保持不变
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<(), ThemePathError> {
        let segments = split_path(path)?;
        let (last, parents) = match segments.split_last() {
            Some(split) => split,
            None => return Err(ThemePathError::EmptyPath),
        };

        let mut current = &mut self.0;
        for segment in parents {
            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            current = match entry {
                Value::Object(map) => map,
                _ => {
                    return Err(ThemePathError::NotAnObject {
                        path: path.to_string(),
                        segment: segment.to_string(),
                    })
                }
            };
        }

        current.insert(last.to_string(), value.into());
        Ok(())
    }

    /// 按点路径读取值
    pub fn get(&self, path: &str) -> Option<&Value> {
        let segments = split_path(path).ok()?;
        let (first, rest) = segments.split_first()?;
        rest.iter()
            .try_fold(self.0.get(*first)?, |value, segment| value.get(*segment))
    }

    /// 按点路径读取字符串值
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }
}

fn split_path(path: &str) -> Result<Vec<&str>, ThemePathError> {
    if path.trim().is_empty() {
        return Err(ThemePathError::EmptyPath);
    }
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(ThemePathError::EmptySegment(path.to_string()));
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_keeps_siblings() {
        let mut theme = ThemeOverrides::from_value(json!({
            "common": { "primaryColor": "#000000", "borderRadius": "6px" }
        }));

        theme.set("common.primaryColor", "#18a058").unwrap();

        assert_eq!(theme.get_str("common.primaryColor"), Some("#18a058"));
        assert_eq!(theme.get_str("common.borderRadius"), Some("6px"));
    }

    #[test]
    fn test_set_creates_missing_parents() {
        let mut theme = ThemeOverrides::new();
        theme.set("Button.textColor", "#ffffff").unwrap();
        assert_eq!(
            theme.into_value(),
            json!({ "Button": { "textColor": "#ffffff" } })
        );
    }

    #[test]
    fn test_invalid_paths() {
        let mut theme = ThemeOverrides::from_value(json!({ "common": "flat" }));
        assert_eq!(theme.set("", 1), Err(ThemePathError::EmptyPath));
        assert!(matches!(
            theme.set("common..x", 1),
            Err(ThemePathError::EmptySegment(_))
        ));
        assert!(matches!(
            theme.set("common.primaryColor", "#fff"),
            Err(ThemePathError::NotAnObject { .. })
        ));
        assert_eq!(theme.get("missing.path"), None);
    }
}
