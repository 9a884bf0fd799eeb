//! 主色派生
//!
//! 悬停色与补充色取主色提亮一级，按下色取主色压暗一级。

use super::types::{ThemeOverrides, ThemePathError};
use crate::color::{self, ColorParseError};

pub const PRIMARY_COLOR_PATH: &str = "common.primaryColor";
pub const PRIMARY_COLOR_HOVER_PATH: &str = "common.primaryColorHover";
pub const PRIMARY_COLOR_PRESSED_PATH: &str = "common.primaryColorPressed";
pub const PRIMARY_COLOR_SUPPL_PATH: &str = "common.primaryColorSuppl";

/// 由主色派生的四个主题色槽位
pub const PRIMARY_SLOTS: [&str; 4] = [
    PRIMARY_COLOR_PATH,
    PRIMARY_COLOR_HOVER_PATH,
    PRIMARY_COLOR_PRESSED_PATH,
    PRIMARY_COLOR_SUPPL_PATH,
];

/// 派生亮度步长
const DERIVE_AMOUNT: f64 = 1.0;

/// 主色调色板
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryPalette {
    pub primary: String,
    pub hover: String,
    pub pressed: String,
    pub suppl: String,
}

impl PrimaryPalette {
    /// 根据主色计算调色板，主色本身原样保留
    pub fn derive(color: &str) -> Result<Self, ColorParseError> {
        let hover = color::brighten(color, DERIVE_AMOUNT)?;
        let pressed = color::darken(color, DERIVE_AMOUNT)?;

        Ok(Self {
            primary: color.to_string(),
            suppl: hover.clone(),
            hover,
            pressed,
        })
    }

    /// 写入主题覆盖表
    pub fn apply_to(&self, theme: &mut ThemeOverrides) -> Result<(), ThemePathError> {
        theme.set(PRIMARY_COLOR_PATH, self.primary.as_str())?;
        theme.set(PRIMARY_COLOR_HOVER_PATH, self.hover.as_str())?;
        theme.set(PRIMARY_COLOR_PRESSED_PATH, self.pressed.as_str())?;
        theme.set(PRIMARY_COLOR_SUPPL_PATH, self.suppl.as_str())?;
        Ok(())
    }
}

/// 判断路径是否属于派生主色槽位
pub fn is_primary_slot(path: &str) -> bool {
    PRIMARY_SLOTS.contains(&path)
}
