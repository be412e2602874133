//! Color values and descriptor parsing for camera backgrounds and overlays.
//!
//! Descriptors accepted by [`Color::parse`]:
//! - named colors (`"black"`, `"white"`, `"red"`, ...)
//! - hex strings (`"#fff"`, `"#1e90ff"`)
//! - functional strings (`"rgb(30, 144, 255)"`, `"rgba(0, 0, 0, 0.5)"`)
//! - packed integers (`"0x1e90ff"`, alpha in the high byte when 8 digits)

/// RGBA color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Build from a packed integer: `0xRRGGBB` (opaque) or `0xAARRGGBB`.
    pub fn from_packed(value: u32) -> Self {
        let a = if value > 0x00ff_ffff {
            (value >> 24) as u8
        } else {
            255
        };
        Color {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
            a,
        }
    }

    /// Alpha channel normalized to [0.0, 1.0].
    pub fn alpha_f32(&self) -> f32 {
        self.a as f32 / 255.0
    }

    /// CSS-style display string, e.g. `rgba(30,144,255,1)`.
    pub fn rgba(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.alpha_f32())
    }

    /// Parse a color descriptor string.
    ///
    /// Returns an error message for unknown names or malformed input;
    /// callers decide whether that is fatal.
    pub fn parse(descriptor: &str) -> Result<Color, String> {
        let desc = descriptor.trim();
        if let Some(hex) = desc.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(hex) = desc.strip_prefix("0x").or_else(|| desc.strip_prefix("0X")) {
            return u32::from_str_radix(hex, 16)
                .map(Color::from_packed)
                .map_err(|e| format!("Invalid packed color '{}': {}", descriptor, e));
        }
        let lower = desc.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .and_then(|s| s.strip_suffix(')'))
        {
            return parse_channels(args, true);
        }
        if let Some(args) = lower.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
            return parse_channels(args, false);
        }
        parse_named(&lower).ok_or_else(|| format!("Unknown color name '{}'", descriptor))
    }
}

fn parse_named(name: &str) -> Option<Color> {
    let c = match name {
        "transparent" => Color::TRANSPARENT,
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "red" => Color::new(255, 0, 0, 255),
        "green" => Color::new(0, 128, 0, 255),
        "lime" => Color::new(0, 255, 0, 255),
        "blue" => Color::new(0, 0, 255, 255),
        "yellow" => Color::new(255, 255, 0, 255),
        "cyan" | "aqua" => Color::new(0, 255, 255, 255),
        "magenta" | "fuchsia" => Color::new(255, 0, 255, 255),
        "gray" | "grey" => Color::new(128, 128, 128, 255),
        "orange" => Color::new(255, 165, 0, 255),
        "purple" => Color::new(128, 0, 128, 255),
        _ => return None,
    };
    Some(c)
}

fn parse_hex(hex: &str) -> Result<Color, String> {
    let value = u32::from_str_radix(hex, 16)
        .map_err(|e| format!("Invalid hex color '#{}': {}", hex, e))?;
    match hex.len() {
        // #rgb expands each nibble, e.g. #f0a -> #ff00aa
        3 => {
            let r = ((value >> 8) & 0xf) as u8;
            let g = ((value >> 4) & 0xf) as u8;
            let b = (value & 0xf) as u8;
            Ok(Color::new(r * 17, g * 17, b * 17, 255))
        }
        6 => Ok(Color::from_packed(value | 0xff00_0000)),
        8 => Ok(Color::from_packed(value)),
        n => Err(format!("Invalid hex color length {} in '#{}'", n, hex)),
    }
}

fn parse_channels(args: &str, with_alpha: bool) -> Result<Color, String> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(format!(
            "Expected {} channels, got {} in '{}'",
            expected,
            parts.len(),
            args
        ));
    }
    let channel = |s: &str| -> Result<u8, String> {
        s.parse::<f32>()
            .map(|v| v.clamp(0.0, 255.0).round() as u8)
            .map_err(|e| format!("Invalid channel '{}': {}", s, e))
    };
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = if with_alpha {
        // alpha is a 0..1 fraction, CSS-style
        parts[3]
            .parse::<f32>()
            .map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .map_err(|e| format!("Invalid alpha '{}': {}", parts[3], e))?
    } else {
        255
    };
    Ok(Color::new(r, g, b, a))
}
