/*!
 * 颜色处理模块
 *
 * 提供主题色派生所需的最小颜色运算：解析颜色字符串、在 Lab 空间中调整亮度、
 * 输出十六进制字符串。算法与 chroma-js 的 `brighten` / `darken` 保持一致。
 */

pub mod lab;
pub mod parser;

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use lab::{lab_to_rgb, rgb_to_lab, Lab, KN};
pub use parser::parse_color;

/// 颜色解析错误
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("颜色值不能为空")]
    Empty,
    #[error("无效的十六进制颜色: {0}")]
    InvalidHex(String),
    #[error("无效的颜色函数: {0}")]
    InvalidFunction(String),
    #[error("无法识别的颜色: {0}")]
    Unknown(String),
}

/// RGBA 颜色，通道范围 0-255，alpha 范围 0-1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Color {
    /// 创建颜色，超出范围的通道会被截断
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0.0, 255.0),
            g: g.clamp(0.0, 255.0),
            b: b.clamp(0.0, 255.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// 从 0xRRGGBB 创建不透明颜色
    pub fn from_u32(rgb: u32) -> Self {
        Self::new(
            f64::from((rgb >> 16) & 0xff),
            f64::from((rgb >> 8) & 0xff),
            f64::from(rgb & 0xff),
            1.0,
        )
    }

    pub fn alpha(&self) -> f64 {
        self.a
    }

    /// 转换为 Lab
    pub fn to_lab(&self) -> Lab {
        rgb_to_lab(self.r, self.g, self.b)
    }

    /// 降低亮度，`amount` 为负时等价于提高亮度
    pub fn darken(&self, amount: f64) -> Self {
        let mut lab = self.to_lab();
        lab.l -= KN * amount;
        let (r, g, b) = lab_to_rgb(lab);
        Self::new(r, g, b, self.a)
    }

    /// 提高亮度
    pub fn brighten(&self, amount: f64) -> Self {
        self.darken(-amount)
    }

    /// 输出小写十六进制；alpha 小于 1 时附带两位 alpha
    pub fn to_hex(&self) -> String {
        let [r, g, b] = [self.r, self.g, self.b].map(|c| c.round() as u8);
        if self.a < 1.0 {
            let a = (self.a * 255.0).round() as u8;
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        } else {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// 提高颜色亮度并返回十六进制字符串
pub fn brighten(color: &str, amount: f64) -> Result<String, ColorParseError> {
    Ok(color.parse::<Color>()?.brighten(amount).to_hex())
}

/// 降低颜色亮度并返回十六进制字符串
pub fn darken(color: &str, amount: f64) -> Result<String, ColorParseError> {
    Ok(color.parse::<Color>()?.darken(amount).to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chroma_compatible_values() {
        assert_eq!(brighten("#ff69b4", 1.0).unwrap(), "#ff9ce6");
        assert_eq!(darken("#ff69b4", 1.0).unwrap(), "#c93384");
        assert_eq!(darken("#ff69b4", 2.0).unwrap(), "#930058");
    }

    #[test]
    fn test_default_primary_variants() {
        assert_eq!(brighten("#18a058", 1.0).unwrap(), "#59d286");
        assert_eq!(darken("#18a058", 1.0).unwrap(), "#00702d");
        assert_eq!(brighten("#2080f0", 1.0).unwrap(), "#6dafff");
        assert_eq!(darken("#2080f0", 1.0).unwrap(), "#0055bd");
    }

    #[test]
    fn test_extremes_are_clamped() {
        assert_eq!(brighten("#ffffff", 1.0).unwrap(), "#ffffff");
        assert_eq!(darken("#000000", 1.0).unwrap(), "#000000");
        assert_eq!(darken("#ffffff", 1.0).unwrap(), "#cccccc");
    }

    #[test]
    fn test_alpha_is_preserved() {
        let color: Color = "#ff000080".parse().unwrap();
        assert!(color.darken(1.0).to_hex().ends_with("80"));
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            brighten("not-a-color", 1.0),
            Err(ColorParseError::Unknown(_))
        ));
        assert!(darken("", 1.0).is_err());
    }
}
