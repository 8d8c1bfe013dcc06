//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    ("COLLAGER_WIDTH", "800", "Desired canvas width in pixels"),
    (
        "COLLAGER_HEIGHT",
        "800",
        "Desired canvas height in pixels (informational)",
    ),
    ("COLLAGER_OUTPUT", "collage.png", "Output file path"),
    (
        "COLLAGER_BACKGROUND",
        "#00000000",
        "Canvas background, #RRGGBB or #RRGGBBAA",
    ),
    ("COLLAGER_FILTER", "lanczos3", "Resize filter name"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Human-readable description of a setting key, or `None` if not defined.
pub fn describe(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.description)
}

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}
