//! Setting value validation.

use std::sync::LazyLock;

use collage_engine::FilterResampler;
use image::Rgba;
use regex::Regex;

static RE_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$").unwrap());

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "COLLAGER_WIDTH" | "COLLAGER_HEIGHT" => validate_int_range(value, 1, 65535)?,
        "COLLAGER_OUTPUT" => {
            if value.trim().is_empty() {
                return Err("must not be empty".into());
            }
        }
        "COLLAGER_BACKGROUND" => {
            if !RE_COLOR.is_match(value) {
                return Err("must be #RRGGBB or #RRGGBBAA".into());
            }
        }
        "COLLAGER_FILTER" => {
            if FilterResampler::from_name(value).is_none() {
                return Err(
                    "must be lanczos3, catmullrom, gaussian, triangle, or nearest".into(),
                );
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: u32, max: u32) -> Result<(), String> {
    let v: u32 = value.parse().map_err(|_| "must be a positive integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

/// Parse `#RRGGBB` (opaque) or `#RRGGBBAA`.
pub fn parse_color(value: &str) -> Option<Rgba<u8>> {
    if !RE_COLOR.is_match(value) {
        return None;
    }
    let hex = &value[1..];
    let channel = |i: usize| u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok();
    let alpha = if hex.len() == 8 { channel(3)? } else { 255 };
    Some(Rgba([channel(0)?, channel(1)?, channel(2)?, alpha]))
}
