//! Theme colors for the desktop app

use jot_core::Theme;

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#f8f9fa",
    bg_secondary: "#ffffff",
    text_primary: "#1a1a1a",
    text_secondary: "#5f6368",
    text_muted: "#9aa0a6",
    border: "#dadce0",
    accent: "#4f46e5",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#1a1a1a",
    bg_secondary: "#242424",
    text_primary: "#e8eaed",
    text_secondary: "#9aa0a6",
    text_muted: "#5f6368",
    border: "#3c4043",
    accent: "#818cf8",
};

/// Get the color palette for a theme
#[must_use]
pub const fn palette(theme: Theme) -> &'static ColorPalette {
    match theme {
        Theme::Light => &LIGHT_PALETTE,
        Theme::Dark => &DARK_PALETTE,
    }
}

/// Shared styles for buttons and inputs, keyed off `data-theme`.
pub const UI_STYLES: &str = r#"
.ui-button {
    border-radius: 10px;
    padding: 10px 16px;
    font-size: 14px;
    font-weight: 600;
    border: 1px solid transparent;
    cursor: pointer;
    transition: background-color 120ms ease, color 120ms ease, border-color 120ms ease;
}

.ui-button:disabled {
    opacity: 0.55;
    cursor: not-allowed;
}

.ui-button--small {
    padding: 5px 10px;
    font-size: 12px;
}

.ui-button--primary {
    background: #4f46e5;
    color: #ffffff;
    border-color: #4f46e5;
}

.ui-button--ghost {
    background: transparent;
    color: #374151;
    border-color: #d1d5db;
}

.ui-button--danger {
    background: #dc2626;
    color: #ffffff;
    border-color: #dc2626;
}

.ui-input {
    flex: 1;
    border: 1px solid #d1d5db;
    border-radius: 10px;
    padding: 10px 12px;
    font-size: 14px;
    background: #ffffff;
    color: #111827;
    outline: none;
}

[data-theme="dark"] .ui-button--primary {
    background: #818cf8;
    color: #1a1a1a;
    border-color: #818cf8;
}

[data-theme="dark"] .ui-button--ghost {
    color: #e8eaed;
    border-color: #3c4043;
}

[data-theme="dark"] .ui-button--danger {
    background: #f87171;
    color: #1a1a1a;
    border-color: #f87171;
}

[data-theme="dark"] .ui-input {
    background: #2d2d2d;
    color: #e8eaed;
    border-color: #3c4043;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_follow_theme() {
        assert_eq!(palette(Theme::Light).bg_primary, LIGHT_PALETTE.bg_primary);
        assert_eq!(palette(Theme::Dark).bg_primary, DARK_PALETTE.bg_primary);
        assert_ne!(
            palette(Theme::Light).text_primary,
            palette(Theme::Dark).text_primary
        );
    }

    #[test]
    fn styles_cover_dark_mode() {
        assert!(UI_STYLES.contains("[data-theme=\"dark\"]"));
    }
}
