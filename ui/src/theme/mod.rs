//! Theme Factory
//!
//! Builds the styling configuration shared by every component: a warm
//! beige background, a blue primary palette, a system font stack and a set
//! of component style rules. Hosts override any of these per top-level key.
//!
//! ```rust,ignore
//! let theme = create_theme(ThemeOverrides::default());
//! let pink = create_theme(ThemeOverrides {
//!     palette: Some(json_map(json!({ "primary": { "main": "#e91e63" } }))),
//!     ..Default::default()
//! });
//! ```

mod provider;

pub use provider::{use_theme, ThemeProvider};

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub const DEFAULT_BORDER_RADIUS: u32 = 12;

const SYSTEM_FONT_STACK: &str = r#"-apple-system, BlinkMacSystemFont, "SF Pro Display", "SF Pro Text", "Segoe UI", "Helvetica Neue", sans-serif"#;

pub type StyleMap = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub start: String,
    pub end: String,
}

impl Gradient {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "linear-gradient(135deg, {} 0%, {} 100%)",
            self.start, self.end
        )
    }
}

fn into_map(value: Value) -> StyleMap {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Converts a `json!` object literal into a [`StyleMap`]. Non-objects yield
/// an empty map.
pub fn json_map(value: Value) -> StyleMap {
    into_map(value)
}

pub fn default_palette() -> StyleMap {
    into_map(json!({
        "primary": {
            "main": "#1e40af",
            "50": "#eff6ff",
            "100": "#dbeafe",
            "500": "#3b82f6",
            "600": "#2563eb",
            "700": "#1d4ed8",
            "900": "#1e3a8a"
        },
        "secondary": { "main": "#6b7280" },
        "success": { "main": "#10b981" },
        "warning": { "main": "#f59e0b" },
        "error": { "main": "#ef4444" },
        "info": { "main": "#0288d1" },
        "background": {
            "default": "hsl(33.3, 60%, 97.1%)",
            "paper": "#FCFAF7"
        },
        "text": {
            "primary": "#111827",
            "secondary": "#6b7280"
        }
    }))
}

pub fn default_typography() -> StyleMap {
    into_map(json!({
        "fontFamily": SYSTEM_FONT_STACK,
        "h1": { "fontWeight": 700, "letterSpacing": "-0.5px" },
        "h2": { "fontWeight": 700, "letterSpacing": "-0.4px" },
        "h3": { "fontWeight": 600, "letterSpacing": "-0.3px" },
        "h4": { "fontWeight": 700, "letterSpacing": "-0.2px" },
        "h5": { "fontWeight": 600, "letterSpacing": "-0.1px" },
        "h6": { "fontWeight": 600, "letterSpacing": "-0.08px" }
    }))
}

/// Style rules keyed by component class (`fb-button`, `fb-card`, ...).
pub fn default_components() -> StyleMap {
    into_map(json!({
        "button": {
            "textTransform": "none",
            "fontWeight": 600,
            "borderRadius": "8px"
        },
        "card": {
            "boxShadow": "0 4px 20px rgba(0, 0, 0, 0.05)",
            "border": "1px solid #f3f4f6"
        },
        "chip": { "fontWeight": 600 },
        "select": { "fontFamily": SYSTEM_FONT_STACK },
        "text-field": { "fontFamily": SYSTEM_FONT_STACK },
        "input": { "fontFamily": SYSTEM_FONT_STACK },
        "menu-item": { "fontFamily": SYSTEM_FONT_STACK }
    }))
}

pub fn default_navbar_gradient() -> Gradient {
    Gradient::new("#1800ad", "#0d0067")
}

/// Partial overrides. Every key present replaces the default at that key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    pub palette: Option<StyleMap>,
    pub typography: Option<StyleMap>,
    pub components: Option<StyleMap>,
    pub border_radius: Option<u32>,
}

/// Fully resolved theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub palette: StyleMap,
    pub typography: StyleMap,
    pub components: StyleMap,
    pub border_radius: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        create_theme(ThemeOverrides::default())
    }
}

fn shallow_merge(mut defaults: StyleMap, overrides: Option<StyleMap>) -> StyleMap {
    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            defaults.insert(key, value);
        }
    }
    defaults
}

pub fn create_theme(overrides: ThemeOverrides) -> ThemeConfig {
    ThemeConfig {
        palette: shallow_merge(default_palette(), overrides.palette),
        typography: shallow_merge(default_typography(), overrides.typography),
        components: shallow_merge(default_components(), overrides.components),
        border_radius: overrides.border_radius.unwrap_or(DEFAULT_BORDER_RADIUS),
    }
}

/// `fontWeight` -> `font-weight`
fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn css_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Flattens nested maps into `--{prefix}-{path}` custom properties.
fn push_variables(out: &mut Vec<(String, String)>, prefix: &str, map: &StyleMap) {
    for (key, value) in map {
        let name = format!("{}-{}", prefix, kebab_case(key));
        match value {
            Value::Object(inner) => push_variables(out, &name, inner),
            other => {
                if let Some(v) = css_value(other) {
                    out.push((name, v));
                }
            }
        }
    }
}

impl ThemeConfig {
    /// Palette lookup by dotted path, e.g. `"error.main"`.
    pub fn color(&self, path: &str) -> Option<&str> {
        let mut parts = path.split('.');
        let mut current = self.palette.get(parts.next()?)?;
        for part in parts {
            current = current.get(part)?;
        }
        current.as_str()
    }

    pub fn font_family(&self) -> &str {
        self.typography
            .get("fontFamily")
            .and_then(Value::as_str)
            .unwrap_or(SYSTEM_FONT_STACK)
    }

    pub fn css_variables(&self) -> Vec<(String, String)> {
        let mut vars = Vec::new();
        push_variables(&mut vars, "--fb-palette", &self.palette);
        push_variables(&mut vars, "--fb-typography", &self.typography);
        vars.push(("--fb-radius".to_string(), format!("{}px", self.border_radius)));
        vars
    }

    /// Stylesheet: custom properties on `:root`, then one rule per
    /// component entry targeting `.fb-{component}`.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.css_variables() {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push_str("}\n");
        css.push_str(&format!(
            "body {{ font-family: {}; background: var(--fb-palette-background-default); }}\n",
            self.font_family()
        ));

        for (component, rules) in &self.components {
            let Value::Object(rules) = rules else {
                continue;
            };
            css.push_str(&format!(".fb-{} {{", kebab_case(component)));
            for (property, value) in rules {
                if let Some(v) = css_value(value) {
                    css.push_str(&format!(" {}: {};", kebab_case(property), v));
                }
            }
            css.push_str(" }\n");
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        let theme = create_theme(ThemeOverrides::default());
        assert_eq!(theme.border_radius, 12);
        assert_eq!(theme.color("primary.main"), Some("#1e40af"));
        assert_eq!(theme.color("background.paper"), Some("#FCFAF7"));
        assert_eq!(theme.palette, default_palette());
    }

    #[test]
    fn test_override_keys_win_and_absent_keys_keep_defaults() {
        let overrides = ThemeOverrides {
            palette: Some(json_map(json!({
                "primary": { "main": "#e91e63" },
                "accent": { "main": "#00bcd4" }
            }))),
            components: Some(json_map(json!({ "card": { "border": "none" } }))),
            border_radius: Some(4),
            ..Default::default()
        };
        let theme = create_theme(overrides.clone());

        let palette = overrides.palette.unwrap();
        for (key, value) in &palette {
            assert_eq!(theme.palette.get(key), Some(value));
        }
        for (key, value) in default_palette() {
            if !palette.contains_key(&key) {
                assert_eq!(theme.palette.get(&key), Some(&value));
            }
        }
        assert_eq!(theme.typography, default_typography());
        assert_eq!(theme.border_radius, 4);
    }

    #[test]
    fn test_merge_is_shallow() {
        let theme = create_theme(ThemeOverrides {
            palette: Some(json_map(json!({ "primary": { "main": "#e91e63" } }))),
            ..Default::default()
        });

        // The override object replaces the default object wholesale.
        assert_eq!(theme.color("primary.main"), Some("#e91e63"));
        assert_eq!(theme.color("primary.500"), None);
    }

    #[test]
    fn test_css_output() {
        let css = create_theme(ThemeOverrides::default()).to_css();
        assert!(css.contains("--fb-palette-primary-main: #1e40af;"));
        assert!(css.contains("--fb-radius: 12px;"));
        assert!(css.contains("--fb-typography-h1-font-weight: 700;"));
        assert!(css.contains(".fb-button { text-transform: none;"));
        assert!(css.contains(".fb-menu-item {"));
    }

    #[test]
    fn test_gradient_css() {
        assert_eq!(
            default_navbar_gradient().to_css(),
            "linear-gradient(135deg, #1800ad 0%, #0d0067 100%)"
        );
    }
}
