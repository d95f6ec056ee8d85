//! CSS synthesis for a theme plus style options.


use crate::errors::{RebrandError, RebrandResult};

use super::catalog::Theme;
use super::{BackgroundStyle, ColorMode, NavPosition, StyleOptions};

/// `id` of the injected `<style>` element
pub const STYLE_ELEMENT_ID: &str = "rebrand-theme";

/// Channel shift used to derive a gradient end from a custom primary
const GRADIENT_SHIFT: u8 = 50;

/// Parse `#rrggbb` (leading `#` optional) into channels
///
/// # Errors
///
/// Returns `RebrandError::InvalidColor` for anything else.
pub fn parse_hex(color: &str) -> RebrandResult<(u8, u8, u8)> {
    let trimmed = color.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(RebrandError::InvalidColor(color.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| RebrandError::InvalidColor(color.to_string()))
    };
    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Derive a distinct companion color by brightening the two non-dominant
/// channels. Not an HSL rotation; good enough for a gradient end stop.
///
/// # Errors
///
/// Returns `RebrandError::InvalidColor` if `color` is not `#rrggbb`.
pub fn adjust_hue(color: &str, shift: u8) -> RebrandResult<String> {
    let (mut r, mut g, mut b) = parse_hex(color)?;
    if r > g && r > b {
        g = g.saturating_add(shift);
        b = b.saturating_add(shift);
    } else if g > r && g > b {
        r = r.saturating_add(shift);
        b = b.saturating_add(shift);
    } else {
        r = r.saturating_add(shift);
        g = g.saturating_add(shift);
    }
    Ok(format!("#{r:02x}{g:02x}{b:02x}"))
}

/// Drop characters that would end a declaration or the style element
fn css_value(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '<' | '>'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Resolved color roles after applying a primary-color override
struct Palette<'a> {
    theme: &'a Theme,
    primary: String,
    gradient_start: String,
    gradient_end: String,
    font_family: String,
}

impl<'a> Palette<'a> {
    fn new(theme: &'a Theme, options: &StyleOptions) -> RebrandResult<Self> {
        let (primary, gradient_start, gradient_end) = match options.primary_color.as_deref() {
            Some(custom) if !custom.trim().is_empty() => {
                let (r, g, b) = parse_hex(custom)?;
                let primary = format!("#{r:02x}{g:02x}{b:02x}");
                let end = adjust_hue(&primary, GRADIENT_SHIFT)?;
                (primary.clone(), primary, end)
            }
            _ => (
                theme.primary.to_string(),
                theme.gradient_start.to_string(),
                theme.gradient_end.to_string(),
            ),
        };

        let font_family = options
            .font_family
            .as_deref()
            .map(css_value)
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| theme.font_family.to_string());

        Ok(Self {
            theme,
            primary,
            gradient_start,
            gradient_end,
            font_family,
        })
    }
}

fn write_root(css: &mut String, p: &Palette<'_>) {
    let t = p.theme;
    css.push_str(":root {\n");
    for (name, value) in [
        ("primary", p.primary.as_str()),
        ("primary-hover", t.primary_hover),
        ("secondary", t.secondary),
        ("gradient-start", p.gradient_start.as_str()),
        ("gradient-end", p.gradient_end.as_str()),
        ("sidebar", t.sidebar),
        ("bg", t.background),
        ("surface", t.surface),
        ("text-main", t.text_main),
        ("text-muted", t.text_muted),
        ("border", t.border),
        ("soft-bg", t.soft_background),
        ("font", p.font_family.as_str()),
    ] {
        css.push_str(&format!("  --rb-{name}: {value};\n"));
    }
    css.push_str("  --primary: var(--rb-primary);\n");
    css.push_str(
        "  --primary-gradient: linear-gradient(135deg, var(--rb-gradient-start) 0%, var(--rb-gradient-end) 100%);\n",
    );
    css.push_str("}\n");
}

const SELECTOR_BATTERY: &str = "\
.sidebar, aside, #sidebar, .side-nav { background: linear-gradient(180deg, var(--rb-sidebar) 0%, var(--rb-gradient-end) 100%) !important; }
header, .header, .navbar, .topbar { background: linear-gradient(135deg, var(--rb-gradient-start) 0%, var(--rb-gradient-end) 100%) !important; }
header *, .header *, .navbar *, .topbar *, .sidebar *, aside *, #sidebar * { color: #ffffff !important; }
body { background-color: var(--rb-bg); color: var(--rb-text-main); }
.card, .panel, .box, .widget, .modal-content { background: var(--rb-surface) !important; border-color: var(--rb-border) !important; color: var(--rb-text-main); }
.text-muted, small { color: var(--rb-text-muted); }
a { color: var(--rb-primary); }
a:hover { color: var(--rb-primary-hover); }
.alert, .info-box, .notice, .callout { background: var(--rb-soft-bg) !important; border-color: var(--rb-border) !important; color: var(--rb-text-main) !important; }
";

fn write_color_mode(css: &mut String, mode: ColorMode) {
    match mode {
        ColorMode::Gradient => css.push_str(
            ".btn-primary, .primary-btn, button.primary, .active { background: var(--primary-gradient) !important; border-color: transparent !important; color: #ffffff !important; }\n\
             .text-gradient, h1 span, .brand { background: var(--primary-gradient) !important; -webkit-background-clip: text !important; -webkit-text-fill-color: transparent !important; }\n",
        ),
        ColorMode::Solid => css.push_str(
            ".btn-primary, .primary-btn, button.primary { background: var(--rb-primary) !important; border-color: var(--rb-primary) !important; color: #ffffff !important; }\n\
             .btn-primary:hover, .primary-btn:hover { background: var(--rb-primary-hover) !important; }\n",
        ),
    }
}

fn write_background(css: &mut String, background: BackgroundStyle) {
    match background {
        BackgroundStyle::Default => {}
        BackgroundStyle::Gradient => css.push_str(
            "body { background: linear-gradient(120deg, #fdfbfb 0%, #ebedee 100%) !important; }\n",
        ),
        BackgroundStyle::Dark => css.push_str(
            "body { background: #0f172a !important; color: #f1f5f9 !important; }\n\
             .card, .panel, .sidebar { background: #1e293b !important; color: #ffffff; }\n\
             a { color: #ffffff !important; }\n",
        ),
    }
}

fn write_nav_position(css: &mut String, position: NavPosition) {
    let side = |direction: &str, border: &str| {
        format!(
            "body {{ display: flex !important; flex-direction: {direction} !important; }}\n\
             nav, header, .sidebar {{ width: 260px !important; height: 100vh !important; position: sticky !important; top: 0 !important; flex-direction: column !important; {border}: 1px solid rgba(0,0,0,0.1); }}\n\
             main, .content {{ flex: 1 !important; }}\n"
        )
    };
    match position {
        NavPosition::Default => {}
        NavPosition::Top => css.push_str(
            "body { display: block !important; }\n\
             nav, header, .sidebar { width: 100% !important; height: auto !important; position: sticky !important; top: 0 !important; display: flex !important; flex-direction: row !important; z-index: 100; }\n",
        ),
        NavPosition::Left => css.push_str(&side("row", "border-right")),
        NavPosition::Right => css.push_str(&side("row-reverse", "border-left")),
    }
}

/// Full stylesheet text for `theme` with `options` applied.
///
/// # Errors
///
/// Returns `RebrandError::InvalidColor` if `options.primary_color` is not a
/// `#rrggbb` color.
pub fn build_stylesheet(theme: &Theme, options: &StyleOptions) -> RebrandResult<String> {
    let palette = Palette::new(theme, options)?;
    let mut css = String::with_capacity(4096);

    write_root(&mut css, &palette);
    css.push_str(SELECTOR_BATTERY);
    write_color_mode(&mut css, options.color_mode);
    write_background(&mut css, options.background);
    write_nav_position(&mut css, options.nav_position);
    css.push_str(
        "body, button, input, select, textarea, h1, h2, h3, h4, a, span { font-family: var(--rb-font) !important; }\n",
    );

    Ok(css)
}
