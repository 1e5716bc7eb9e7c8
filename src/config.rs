//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file sits in
//! the content root next to `catalog.toml`; every key is optional and
//! overrides the stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! artist = "Artist Name"        # Navbar brand and footer
//! title = "Artist Name — Drawings"
//! lang = "en"
//!
//! [hero]
//! headline = "Graphite, paper and patience."
//! tagline = "Portraits, still lifes and studies drawn by hand."
//! cta_gallery = "View the gallery"
//! cta_contact = "Get in touch"
//!
//! [about]
//! heading = "About"
//! file = "about.md"             # Markdown, relative to the content root
//!
//! [contact]
//! heading = "Contact"
//! intro = "Commissions and enquiries are welcome."
//! # email = "hello@example.com"
//! # whatsapp = "+55 47 9999 9999"
//! # instagram = "https://www.instagram.com/artist/"
//!
//! [labels]
//! all = "All"
//! portrait = "Portrait"
//! still_life = "Still Life"
//! landscape = "Landscape"
//! study = "Study"
//! home = "Home"                 # Navbar and lightbox controls
//! menu = "Menu"
//! email = "Email"
//! zoom = "Zoom"
//! close = "Close"
//! previous = "Previous"
//! next = "Next"
//!
//! [gallery]
//! heading = "Gallery"
//! subtitle = "A selection of original works and technical studies."
//! aspect_ratio = [3, 4]         # Card width:height
//! columns = 3                   # Cards per row on wide screens
//! gap = "3rem"
//! empty = "No works in this category yet."
//!
//! [colors.light]
//! background = "#f4f1ea"
//! surface = "#fbfaf6"
//! text = "#2b2b2b"
//! text_muted = "#6b6b6b"
//! border = "#d8d3c8"
//! accent = "#2b2b2b"
//!
//! [colors.dark]
//! background = "#161616"
//! surface = "#1f1f1f"
//! text = "#ece9e2"
//! text_muted = "#9a978f"
//! border = "#333333"
//! accent = "#ece9e2"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::catalog::{Category, CategoryFilter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Identity of the site: artist name, document title, language.
    pub site: SiteInfo,
    /// Opening section copy.
    pub hero: HeroConfig,
    /// About section heading and markdown source.
    pub about: AboutConfig,
    /// Contact section copy and channels.
    pub contact: ContactConfig,
    /// Display labels for the gallery filter tabs.
    pub labels: LabelsConfig,
    /// Gallery grid settings.
    pub gallery: GalleryConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.artist.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.artist must not be empty".into(),
            ));
        }
        if self.gallery.aspect_ratio[0] == 0 || self.gallery.aspect_ratio[1] == 0 {
            return Err(ConfigError::Validation(
                "gallery.aspect_ratio values must be non-zero".into(),
            ));
        }
        if !(1..=6).contains(&self.gallery.columns) {
            return Err(ConfigError::Validation(
                "gallery.columns must be 1-6".into(),
            ));
        }
        if let Some(number) = &self.contact.whatsapp {
            if whatsapp_digits(number).is_none() {
                return Err(ConfigError::Validation(format!(
                    "contact.whatsapp must be a phone number, got '{number}'"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Artist name, shown as the navbar brand and in the footer.
    pub artist: String,
    /// Document `<title>` of the main page.
    pub title: String,
    /// `lang` attribute of the generated HTML.
    pub lang: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            artist: "Artist Name".to_string(),
            title: "Artist Name — Drawings".to_string(),
            lang: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    pub headline: String,
    pub tagline: String,
    /// Label of the button scrolling to the gallery.
    pub cta_gallery: String,
    /// Label of the button scrolling to the contact section.
    pub cta_contact: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            headline: "Graphite, paper and patience.".to_string(),
            tagline: "Portraits, still lifes and studies drawn by hand.".to_string(),
            cta_gallery: "View the gallery".to_string(),
            cta_contact: "Get in touch".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AboutConfig {
    pub heading: String,
    /// Markdown file relative to the content root. A missing file omits the section.
    pub file: String,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            heading: "About".to_string(),
            file: "about.md".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub heading: String,
    pub intro: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number in any human format; reduced to digits for the `wa.me` link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            heading: "Contact".to_string(),
            intro: "Commissions and enquiries are welcome.".to_string(),
            email: None,
            whatsapp: None,
            instagram: None,
        }
    }
}

impl ContactConfig {
    /// `https://wa.me/<digits>` link for the configured number, if any.
    pub fn whatsapp_url(&self) -> Option<String> {
        self.whatsapp
            .as_deref()
            .and_then(whatsapp_digits)
            .map(|digits| format!("https://wa.me/{digits}"))
    }
}

/// Reduce a phone number to its digits. Only `+`, spaces, dashes, dots and
/// parentheses may separate them.
fn whatsapp_digits(number: &str) -> Option<String> {
    let mut digits = String::new();
    for c in number.chars() {
        match c {
            '0'..='9' => digits.push(c),
            '+' | ' ' | '-' | '.' | '(' | ')' => {}
            _ => return None,
        }
    }
    (!digits.is_empty()).then_some(digits)
}

/// Visible interface text: filter tabs, navbar and lightbox controls.
///
/// The catalog uses fixed category keys; labels are display only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelsConfig {
    pub all: String,
    pub portrait: String,
    pub still_life: String,
    pub landscape: String,
    pub study: String,
    pub home: String,
    pub menu: String,
    pub email: String,
    pub zoom: String,
    pub close: String,
    pub previous: String,
    pub next: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            all: "All".to_string(),
            portrait: Category::Portrait.default_label().to_string(),
            still_life: Category::StillLife.default_label().to_string(),
            landscape: Category::Landscape.default_label().to_string(),
            study: Category::Study.default_label().to_string(),
            home: "Home".to_string(),
            menu: "Menu".to_string(),
            email: "Email".to_string(),
            zoom: "Zoom".to_string(),
            close: "Close".to_string(),
            previous: "Previous".to_string(),
            next: "Next".to_string(),
        }
    }
}

impl LabelsConfig {
    pub fn category(&self, category: Category) -> &str {
        match category {
            Category::Portrait => &self.portrait,
            Category::StillLife => &self.still_life,
            Category::Landscape => &self.landscape,
            Category::Study => &self.study,
        }
    }

    pub fn filter(&self, filter: &CategoryFilter) -> String {
        match filter {
            CategoryFilter::All => self.all.clone(),
            CategoryFilter::Only(category) => self.category(*category).to_string(),
            CategoryFilter::Unknown(name) => name.clone(),
        }
    }

    /// Resolve a configured label back to its filter, so a site can be
    /// browsed in its own language (`filter Retrato`).
    pub fn parse_filter(&self, name: &str) -> CategoryFilter {
        let needle = name.trim();
        if needle.eq_ignore_ascii_case(&self.all) {
            return CategoryFilter::All;
        }
        Category::ALL
            .into_iter()
            .find(|c| self.category(*c).eq_ignore_ascii_case(needle))
            .map(CategoryFilter::Only)
            .unwrap_or_else(|| CategoryFilter::parse(needle))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    pub heading: String,
    pub subtitle: String,
    /// Card aspect ratio as `[width, height]`.
    pub aspect_ratio: [u32; 2],
    /// Cards per row on wide screens.
    pub columns: u32,
    /// Gap between cards (CSS value).
    pub gap: String,
    /// Shown when the selected category has no artworks.
    pub empty: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            heading: "Gallery".to_string(),
            subtitle: "A selection of original works and technical studies.".to_string(),
            aspect_ratio: [3, 4],
            columns: 3,
            gap: "3rem".to_string(),
            empty: "No works in this category yet.".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background (paper).
    pub background: String,
    /// Card and panel background.
    pub surface: String,
    /// Primary text color (graphite).
    pub text: String,
    /// Secondary text: subtitles, years, inactive tabs.
    pub text_muted: String,
    pub border: String,
    /// Active tab, buttons, contact section background.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#f4f1ea".to_string(),
            surface: "#fbfaf6".to_string(),
            text: "#2b2b2b".to_string(),
            text_muted: "#6b6b6b".to_string(),
            border: "#d8d3c8".to_string(),
            accent: "#2b2b2b".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#161616".to_string(),
            surface: "#1f1f1f".to_string(),
            text: "#ece9e2".to_string(),
            text_muted: "#9a978f".to_string(),
            border: "#333333".to_string(),
            accent: "#ece9e2".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    if overlay.is_none() {
        tracing::debug!(root = %root.display(), "no config.toml, using stock defaults");
    }
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Atelier Configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
# Shown as the navbar brand and in the footer.
artist = "Artist Name"
# Document title of the main page.
title = "Artist Name — Drawings"
# HTML lang attribute.
lang = "en"

# ---------------------------------------------------------------------------
# Hero (opening section)
# ---------------------------------------------------------------------------
[hero]
headline = "Graphite, paper and patience."
tagline = "Portraits, still lifes and studies drawn by hand."
cta_gallery = "View the gallery"
cta_contact = "Get in touch"

# ---------------------------------------------------------------------------
# About section
# ---------------------------------------------------------------------------
[about]
heading = "About"
# Markdown file relative to the content root. If missing, the section is omitted.
file = "about.md"

# ---------------------------------------------------------------------------
# Contact section
# ---------------------------------------------------------------------------
[contact]
heading = "Contact"
intro = "Commissions and enquiries are welcome."
# Each channel is shown only when set.
# email = "hello@example.com"
# whatsapp = "+55 47 9999 9999"
# instagram = "https://www.instagram.com/artist/"

# ---------------------------------------------------------------------------
# Interface labels
# ---------------------------------------------------------------------------
# catalog.toml always uses the fixed category keys; these are display labels.
[labels]
all = "All"
portrait = "Portrait"
still_life = "Still Life"
landscape = "Landscape"
study = "Study"
# Navbar, contact card and lightbox controls.
home = "Home"
menu = "Menu"
email = "Email"
zoom = "Zoom"
close = "Close"
previous = "Previous"
next = "Next"

# ---------------------------------------------------------------------------
# Gallery grid
# ---------------------------------------------------------------------------
[gallery]
heading = "Gallery"
subtitle = "A selection of original works and technical studies."
# Card aspect ratio as [width, height].
aspect_ratio = [3, 4]
# Cards per row on wide screens (1-6).
columns = 3
# Gap between cards (CSS value).
gap = "3rem"
# Shown when the selected category has no works.
empty = "No works in this category yet."

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#f4f1ea"
surface = "#fbfaf6"
text = "#2b2b2b"
text_muted = "#6b6b6b"
border = "#d8d3c8"
accent = "#2b2b2b"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#161616"
surface = "#1f1f1f"
text = "#ece9e2"
text_muted = "#9a978f"
border = "#333333"
accent = "#ece9e2"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-surface: {light_surface};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-accent: {light_accent};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-surface: {dark_surface};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-accent: {dark_accent};
    }}
}}"#,
        light_bg = colors.light.background,
        light_surface = colors.light.surface,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_accent = colors.light.accent,
        dark_bg = colors.dark.background,
        dark_surface = colors.dark.surface,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_accent = colors.dark.accent,
    )
}

/// Generate CSS custom properties from gallery config.
pub fn generate_theme_css(gallery: &GalleryConfig) -> String {
    format!(
        r#":root {{
    --card-aspect: {w} / {h};
    --gallery-columns: {columns};
    --gallery-gap: {gap};
}}"#,
        w = gallery.aspect_ratio[0],
        h = gallery.aspect_ratio[1],
        columns = gallery.columns,
        gap = gallery.gap,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_colors() {
        let config = SiteConfig::default();
        assert_eq!(config.colors.light.background, "#f4f1ea");
        assert_eq!(config.colors.dark.background, "#161616");
    }

    #[test]
    fn default_config_has_gallery_settings() {
        let config = SiteConfig::default();
        assert_eq!(config.gallery.aspect_ratio, [3, 4]);
        assert_eq!(config.gallery.columns, 3);
        assert_eq!(config.about.file, "about.md");
        assert_eq!(config.contact.email, None);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors.light]
background = "#fafafa"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        // Overridden value
        assert_eq!(config.colors.light.background, "#fafafa");
        // Default values preserved
        assert_eq!(config.colors.light.text, "#2b2b2b");
        assert_eq!(config.colors.dark.background, "#161616");
        assert_eq!(config.gallery.columns, 3);
    }

    #[test]
    fn parse_contact_channels() {
        let toml = r#"
[contact]
email = "gelci@example.com"
whatsapp = "+55 (47) 9719-4402"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.contact.email.as_deref(), Some("gelci@example.com"));
        assert_eq!(
            config.contact.whatsapp_url().as_deref(),
            Some("https://wa.me/554797194402")
        );
        assert_eq!(config.contact.heading, "Contact");
    }

    #[test]
    fn whatsapp_url_absent_without_number() {
        assert_eq!(ContactConfig::default().whatsapp_url(), None);
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.light.background = "#f0f0f0".to_string();
        colors.dark.background = "#1a1a1a".to_string();

        let css = generate_color_css(&colors);
        assert!(css.contains("--color-bg: #f0f0f0"));
        assert!(css.contains("--color-bg: #1a1a1a"));
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
    }

    #[test]
    fn generate_css_includes_all_variables() {
        let css = generate_color_css(&ColorConfig::default());
        for var in [
            "--color-bg:",
            "--color-surface:",
            "--color-text:",
            "--color-text-muted:",
            "--color-border:",
            "--color-accent:",
        ] {
            assert!(css.contains(var), "missing {var}");
        }
    }

    #[test]
    fn generate_theme_css_includes_gallery_variables() {
        let css = generate_theme_css(&GalleryConfig::default());
        assert!(css.contains("--card-aspect: 3 / 4"));
        assert!(css.contains("--gallery-columns: 3"));
        assert!(css.contains("--gallery-gap: 3rem"));
    }

    // =========================================================================
    // Labels
    // =========================================================================

    #[test]
    fn labels_default_to_category_labels() {
        let labels = LabelsConfig::default();
        assert_eq!(labels.category(Category::StillLife), "Still Life");
        assert_eq!(labels.filter(&CategoryFilter::All), "All");
    }

    #[test]
    fn labels_parse_localized_filter() {
        let labels = LabelsConfig {
            all: "Todos".to_string(),
            portrait: "Retrato".to_string(),
            still_life: "Natureza Morta".to_string(),
            landscape: "Paisagem".to_string(),
            study: "Estudo".to_string(),
            ..LabelsConfig::default()
        };
        assert_eq!(labels.parse_filter("todos"), CategoryFilter::All);
        assert_eq!(
            labels.parse_filter("Natureza Morta"),
            CategoryFilter::Only(Category::StillLife)
        );
        // Stock names still work
        assert_eq!(
            labels.parse_filter("study"),
            CategoryFilter::Only(Category::Study)
        );
        assert_eq!(
            labels.parse_filter("Escultura"),
            CategoryFilter::Unknown("Escultura".to_string())
        );
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.artist, "Artist Name");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[site]
artist = "Gelci"

[labels]
all = "Todos"
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.artist, "Gelci");
        assert_eq!(config.labels.all, "Todos");
        // Unspecified values should be defaults
        assert_eq!(config.labels.portrait, "Portrait");
        assert_eq!(config.site.lang, "en");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[gallery]
columns = 12
"#,
        )
        .unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str(r#"columns = 3"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"columns = 4"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("columns").unwrap().as_integer(), Some(4));
    }

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r##"
[colors.light]
background = "#fff"
text = "#000"
"##,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r##"
[colors.light]
background = "#fafafa"
"##,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let light = merged.get("colors").unwrap().get("light").unwrap();
        assert_eq!(light.get("background").unwrap().as_str(), Some("#fafafa"));
        assert_eq!(light.get("text").unwrap().as_str(), Some("#000"));
    }

    #[test]
    fn merge_toml_array_replaces() {
        let base: toml::Value = toml::from_str(r#"aspect_ratio = [3, 4]"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"aspect_ratio = [1, 1]"#).unwrap();
        let merged = merge_toml(base, overlay);
        let ratio = merged.get("aspect_ratio").unwrap().as_array().unwrap();
        assert_eq!(ratio[0].as_integer(), Some(1));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[gallery]
colums = 3
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[imagez]\nquality = 90\n");
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_aspect_ratio_zero() {
        let mut config = SiteConfig::default();
        config.gallery.aspect_ratio = [0, 4];
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_columns_range() {
        let mut config = SiteConfig::default();
        config.gallery.columns = 0;
        assert!(config.validate().is_err());
        config.gallery.columns = 6;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_blank_artist() {
        let mut config = SiteConfig::default();
        config.site.artist = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("artist"));
    }

    #[test]
    fn validate_whatsapp_must_be_phone_number() {
        let mut config = SiteConfig::default();
        config.contact.whatsapp = Some("call me".to_string());
        assert!(config.validate().is_err());
        config.contact.whatsapp = Some("+55 47 97194402".to_string());
        assert!(config.validate().is_ok());
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.site.title, defaults.site.title);
        assert_eq!(config.gallery.aspect_ratio, defaults.gallery.aspect_ratio);
        assert_eq!(config.colors.dark.accent, defaults.colors.dark.accent);
        assert_eq!(config.labels.still_life, defaults.labels.still_life);
        assert_eq!(config.labels.previous, defaults.labels.previous);
        assert_eq!(config.contact.email, None);
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        for section in ["site", "hero", "about", "contact", "labels", "gallery", "colors"] {
            assert!(val.get(section).is_some(), "missing [{section}]");
        }
    }
}
