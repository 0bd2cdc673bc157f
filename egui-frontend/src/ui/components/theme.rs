//! # Theme Configuration
//!
//! Centralized color configuration for the roster app. All visual styling
//! should use these constants to keep the form and cards consistent.
//!
//! ## Usage
//! ```rust,ignore
//! use crate::ui::components::theme::CURRENT_THEME;
//!
//! let fill = CURRENT_THEME.buttons.primary;
//! ```

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Action button fills
    pub buttons: ButtonColors,
    /// Background and container colors
    pub layout: LayoutColors,
    /// Text colors
    pub typography: TypographyColors,
}

/// Fills for the three kinds of action buttons
#[derive(Debug, Clone)]
pub struct ButtonColors {
    /// Submit button
    pub primary: Color32,
    /// Edit button
    pub warning: Color32,
    /// Delete button
    pub danger: Color32,
    /// Text on primary/danger buttons
    pub light_text: Color32,
    /// Text on warning buttons
    pub dark_text: Color32,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub window_background: Color32,
    pub form_background: Color32,
    pub card_background: Color32,
    pub card_border: Color32,
    pub card_shadow: Color32,
    /// Dims the window behind an open alert
    pub modal_backdrop: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub heading: Color32,
    pub label: Color32,
}

/// The current active theme - light cards on a neutral background
pub const CURRENT_THEME: Theme = Theme {
    buttons: ButtonColors {
        primary: Color32::from_rgb(13, 110, 253),
        warning: Color32::from_rgb(255, 193, 7),
        danger: Color32::from_rgb(220, 53, 69),
        light_text: Color32::WHITE,
        dark_text: Color32::from_rgb(33, 37, 41),
    },
    layout: LayoutColors {
        window_background: Color32::WHITE,
        form_background: Color32::from_rgb(248, 249, 250),
        card_background: Color32::WHITE,
        card_border: Color32::from_rgb(222, 226, 230),
        card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 20),
        modal_backdrop: Color32::from_rgba_premultiplied(0, 0, 0, 110),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(33, 37, 41),
        secondary: Color32::from_rgb(108, 117, 125),
        heading: Color32::from_rgb(33, 37, 41),
        label: Color32::from_rgb(60, 60, 60),
    },
};

/// Shorthand aliases for the colors used most often
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const PRIMARY: Color32 = CURRENT_THEME.buttons.primary;
    pub const WARNING: Color32 = CURRENT_THEME.buttons.warning;
    pub const DANGER: Color32 = CURRENT_THEME.buttons.danger;
    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
}
