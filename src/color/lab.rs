//! sRGB 与 CIE-Lab 之间的转换
//!
//! 常量与 chroma-js 保持一致（D65 白点），保证派生出的悬停/按下颜色与前端
//! 历史数据完全相同。

/// 亮度调整步长，`darken(1)` 即 Lab 亮度减少 18
pub const KN: f64 = 18.0;

const XN: f64 = 0.950_470;
const YN: f64 = 1.0;
const ZN: f64 = 1.088_830;

const T0: f64 = 0.137_931_034; // 4 / 29
const T1: f64 = 0.206_896_552; // 6 / 29
const T2: f64 = 0.128_418_55; // 3 * t1 * t1
const T3: f64 = 0.008_856_452; // t1 ^ 3

/// Lab 颜色（l, a, b）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

fn rgb_xyz(channel: f64) -> f64 {
    let c = channel / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn xyz_lab(t: f64) -> f64 {
    if t > T3 {
        t.powf(1.0 / 3.0)
    } else {
        t / T2 + T0
    }
}

fn lab_xyz(t: f64) -> f64 {
    if t > T1 {
        t * t * t
    } else {
        T2 * (t - T0)
    }
}

fn xyz_rgb(r: f64) -> f64 {
    255.0
        * if r <= 0.00304 {
            12.92 * r
        } else {
            1.055 * r.powf(1.0 / 2.4) - 0.055
        }
}

/// sRGB（0-255）转换为 Lab
pub fn rgb_to_lab(r: f64, g: f64, b: f64) -> Lab {
    let (r, g, b) = (rgb_xyz(r), rgb_xyz(g), rgb_xyz(b));
    let x = xyz_lab((0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b) / XN);
    let y = xyz_lab((0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b) / YN);
    let z = xyz_lab((0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b) / ZN);

    let l = 116.0 * y - 16.0;
    Lab {
        l: l.max(0.0),
        a: 500.0 * (x - y),
        b: 200.0 * (y - z),
    }
}

/// Lab 转换为 sRGB，结果未截断，可能超出 0-255
pub fn lab_to_rgb(lab: Lab) -> (f64, f64, f64) {
    let y = (lab.l + 16.0) / 116.0;
    let x = y + lab.a / 500.0;
    let z = y - lab.b / 200.0;

    let y = YN * lab_xyz(y);
    let x = XN * lab_xyz(x);
    let z = ZN * lab_xyz(z);

    (
        xyz_rgb(3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z),
        xyz_rgb(-0.969_266_0 * x + 1.876_010_8 * y + 0.041_556_0 * z),
        xyz_rgb(0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z),
    )
}
