use crate::color::ColorParseError;
use crate::signals::FullscreenError;
use crate::storage::StorageError;
use crate::theme::ThemePathError;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Color(#[from] ColorParseError),
    #[error(transparent)]
    Fullscreen(#[from] FullscreenError),
    #[error(transparent)]
    ThemeToken(#[from] ThemePathError),
    #[error("主题令牌 {0} 由主题色派生，请使用 set_primary_color")]
    DerivedThemeToken(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("偏好序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),
}
