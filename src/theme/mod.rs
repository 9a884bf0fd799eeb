/*!
 * 主题系统模块
 *
 * 主题令牌覆盖表、默认令牌以及由主色派生悬停/按下色的逻辑。
 */

pub mod defaults;
pub mod palette;
pub mod types;

// 重新导出核心类型和函数
pub use defaults::{create_default_theme, DEFAULT_PRIMARY_COLOR};
pub use palette::{is_primary_slot, PrimaryPalette, PRIMARY_SLOTS};
pub use types::{ThemeOverrides, ThemePathError};
