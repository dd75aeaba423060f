//! Brand name, accent colour and logo caption.

use ratatui::style::Color;
use std::path::PathBuf;

/// Brand shown when none is configured.
pub const DEFAULT_BRAND: &str = "BizConvert";

/// Accent colour used when none is configured or the value is invalid.
pub const DEFAULT_ACCENT: &str = "#E11D48";

/// Parse `#RRGGBB` (the `#` is optional) into an RGB colour.
///
/// # Examples
///
/// ```
/// use copydesk_tui::parse_accent;
/// use ratatui::style::Color;
///
/// assert_eq!(parse_accent("#E11D48"), Some(Color::Rgb(0xE1, 0x1D, 0x48)));
/// assert_eq!(parse_accent("0f0f0f"), Some(Color::Rgb(15, 15, 15)));
/// assert_eq!(parse_accent("red"), None);
/// ```
pub fn parse_accent(hex: &str) -> Option<Color> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Visual identity of the studio.
#[derive(Debug, Clone, PartialEq)]
pub struct Branding {
    /// Brand name
    pub brand_name: String,
    /// Accent colour for titles and focus
    pub accent: Color,
    /// Logo file, shown as a caption only
    pub logo_path: Option<PathBuf>,
}

impl Default for Branding {
    fn default() -> Self {
        Self::new(DEFAULT_BRAND, DEFAULT_ACCENT, None)
    }
}

impl Branding {
    /// Build branding from raw settings; an invalid accent falls back to the default.
    pub fn new(brand_name: &str, accent_hex: &str, logo_path: Option<PathBuf>) -> Self {
        let brand_name = match brand_name.trim() {
            "" => DEFAULT_BRAND.to_string(),
            name => name.to_string(),
        };
        let accent = parse_accent(accent_hex)
            .or_else(|| parse_accent(DEFAULT_ACCENT))
            .unwrap_or(Color::Red);
        Self {
            brand_name,
            accent,
            logo_path,
        }
    }

    /// Page title.
    pub fn title(&self) -> String {
        format!("{} — Content Studio", self.brand_name)
    }

    /// Copyright line for a given year.
    pub fn footer(&self, year: i32) -> String {
        format!("© {} {}. All rights reserved.", year, self.brand_name)
    }
}
