/*!
 * 颜色字符串解析
 *
 * 支持的格式：
 * - 十六进制：`#rgb`、`#rgba`、`#rrggbb`、`#rrggbbaa`（`#` 可省略）
 * - 函数式：`rgb()`、`rgba()`、`hsl()`、`hsla()`，逗号或空格分隔
 * - CSS 颜色名称（含 `rebeccapurple`）
 */

use super::{Color, ColorParseError};

/// CSS 颜色名称，按名称排序
const NAMED_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

/// 解析颜色字符串
pub fn parse_color(input: &str) -> Result<Color, ColorParseError> {
    let value = input.trim().to_ascii_lowercase();
    if value.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if let Ok(index) = NAMED_COLORS.binary_search_by(|(name, _)| (*name).cmp(value.as_str())) {
        return Ok(Color::from_u32(NAMED_COLORS[index].1));
    }

    if let Some(args) = function_args(&value, "rgba").or_else(|| function_args(&value, "rgb")) {
        return parse_rgb_function(input, args);
    }

    if let Some(args) = function_args(&value, "hsla").or_else(|| function_args(&value, "hsl")) {
        return parse_hsl_function(input, args);
    }

    parse_hex(input, &value)
}

/// 提取 `name(...)` 中的参数部分
fn function_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    value
        .strip_prefix(name)
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
}

fn parse_hex(input: &str, value: &str) -> Result<Color, ColorParseError> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    let invalid = || ColorParseError::InvalidHex(input.to_string());

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(if value.starts_with('#') {
            invalid()
        } else {
            ColorParseError::Unknown(input.to_string())
        });
    }

    let expanded: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_string(),
        _ => return Err(invalid()),
    };

    let channel = |index: usize| -> Result<f64, ColorParseError> {
        u8::from_str_radix(&expanded[index..index + 2], 16)
            .map(f64::from)
            .map_err(|_| invalid())
    };

    let alpha = if expanded.len() == 8 {
        // 与 chroma-js 一致，alpha 保留两位小数
        ((channel(6)? / 255.0) * 100.0).round() / 100.0
    } else {
        1.0
    };

    Ok(Color::new(channel(0)?, channel(2)?, channel(4)?, alpha))
}

/// 拆分函数参数，兼容 `1, 2, 3`、`1 2 3 / 0.5` 两种写法
fn split_args(args: &str) -> Vec<&str> {
    args.split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect()
}

fn parse_number(part: &str) -> Option<f64> {
    part.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 解析 rgb 通道值：数字（0-255）或百分比
fn parse_channel(part: &str) -> Option<f64> {
    match part.strip_suffix('%') {
        Some(percent) => parse_number(percent).map(|p| p * 2.55),
        None => parse_number(part),
    }
}

/// 解析 alpha 值：数字（0-1）或百分比
fn parse_alpha(part: &str) -> Option<f64> {
    let alpha = match part.strip_suffix('%') {
        Some(percent) => parse_number(percent).map(|p| p / 100.0),
        None => parse_number(part),
    }?;
    Some(alpha.clamp(0.0, 1.0))
}

fn parse_rgb_function(input: &str, args: &str) -> Result<Color, ColorParseError> {
    let invalid = || ColorParseError::InvalidFunction(input.to_string());
    let parts = split_args(args);
    if !(3..=4).contains(&parts.len()) {
        return Err(invalid());
    }

    let r = parse_channel(parts[0]).ok_or_else(invalid)?;
    let g = parse_channel(parts[1]).ok_or_else(invalid)?;
    let b = parse_channel(parts[2]).ok_or_else(invalid)?;
    let a = match parts.get(3) {
        Some(part) => parse_alpha(part).ok_or_else(invalid)?,
        None => 1.0,
    };

    Ok(Color::new(r, g, b, a))
}

fn parse_hsl_function(input: &str, args: &str) -> Result<Color, ColorParseError> {
    let invalid = || ColorParseError::InvalidFunction(input.to_string());
    let parts = split_args(args);
    if !(3..=4).contains(&parts.len()) {
        return Err(invalid());
    }

    let hue = parse_number(parts[0].trim_end_matches("deg")).ok_or_else(invalid)?;
    let saturation = parts[1]
        .strip_suffix('%')
        .and_then(parse_number)
        .ok_or_else(invalid)?
        / 100.0;
    let lightness = parts[2]
        .strip_suffix('%')
        .and_then(parse_number)
        .ok_or_else(invalid)?
        / 100.0;
    let alpha = match parts.get(3) {
        Some(part) => parse_alpha(part).ok_or_else(invalid)?,
        None => 1.0,
    };

    let (r, g, b) = hsl_to_rgb(hue, saturation.clamp(0.0, 1.0), lightness.clamp(0.0, 1.0));
    Ok(Color::new(r, g, b, alpha))
}

fn hsl_to_rgb(hue: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        let v = l * 255.0;
        return (v, v, v);
    }

    let h = hue.rem_euclid(360.0) / 360.0;
    let t2 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let t1 = 2.0 * l - t2;

    let component = |offset: f64| {
        let t3 = (h + offset).rem_euclid(1.0);
        let v = if 6.0 * t3 < 1.0 {
            t1 + (t2 - t1) * 6.0 * t3
        } else if 2.0 * t3 < 1.0 {
            t2
        } else if 3.0 * t3 < 2.0 {
            t1 + (t2 - t1) * (2.0 / 3.0 - t3) * 6.0
        } else {
            t1
        };
        v * 255.0
    };

    (component(1.0 / 3.0), component(0.0), component(-1.0 / 3.0))
}
