use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Background of completed rows
    pub surface_variant: ColorSpec,

    // Status colors
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_normal: ColorSpec,
    pub footer_add: ColorSpec,
    pub footer_delete: ColorSpec,
    pub footer_debug: ColorSpec,
}

/// Plain RGB color specification.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::material_light()
    }
}

impl Theme {
    /// Material light theme, the palette of the original mobile app.
    ///
    pub fn material_light() -> Self {
        Theme {
            name: "material-light".to_string(),
            primary: ColorSpec::rgb(98, 0, 238),       // Purple 500
            secondary: ColorSpec::rgb(3, 218, 198),    // Teal 200
            text: ColorSpec::rgb(28, 27, 31),          // On surface
            text_muted: ColorSpec::rgb(73, 69, 79),    // On surface variant
            surface_variant: ColorSpec::rgb(231, 224, 236),
            error: ColorSpec::rgb(179, 38, 30),        // Error
            border_active: ColorSpec::rgb(98, 0, 238),
            border_normal: ColorSpec::rgb(121, 116, 126), // Outline
            highlight_bg: ColorSpec::rgb(98, 0, 238),
            highlight_fg: ColorSpec::rgb(255, 255, 255),
            footer_normal: ColorSpec::rgb(231, 224, 236),
            footer_add: ColorSpec::rgb(98, 0, 238),
            footer_delete: ColorSpec::rgb(179, 38, 30),
            footer_debug: ColorSpec::rgb(3, 218, 198),
        }
    }

    /// Material dark theme.
    ///
    pub fn material_dark() -> Self {
        Theme {
            name: "material-dark".to_string(),
            primary: ColorSpec::rgb(187, 134, 252),    // Purple 200
            secondary: ColorSpec::rgb(3, 218, 198),    // Teal 200
            text: ColorSpec::rgb(230, 225, 229),
            text_muted: ColorSpec::rgb(202, 196, 208),
            surface_variant: ColorSpec::rgb(73, 69, 79),
            error: ColorSpec::rgb(207, 102, 121),
            border_active: ColorSpec::rgb(187, 134, 252),
            border_normal: ColorSpec::rgb(147, 143, 153),
            highlight_bg: ColorSpec::rgb(187, 134, 252),
            highlight_fg: ColorSpec::rgb(28, 27, 31),
            footer_normal: ColorSpec::rgb(73, 69, 79),
            footer_add: ColorSpec::rgb(187, 134, 252),
            footer_delete: ColorSpec::rgb(207, 102, 121),
            footer_debug: ColorSpec::rgb(3, 218, 198),
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(125, 207, 255),    // Blue
            secondary: ColorSpec::rgb(158, 206, 106),  // Green
            text: ColorSpec::rgb(169, 177, 214),       // Foreground
            text_muted: ColorSpec::rgb(117, 121, 148), // Comment
            surface_variant: ColorSpec::rgb(36, 40, 59), // Selection
            error: ColorSpec::rgb(247, 118, 142),      // Red
            border_active: ColorSpec::rgb(125, 207, 255),
            border_normal: ColorSpec::rgb(117, 121, 148),
            highlight_bg: ColorSpec::rgb(125, 207, 255),
            highlight_fg: ColorSpec::rgb(26, 27, 38),
            footer_normal: ColorSpec::rgb(36, 40, 59),
            footer_add: ColorSpec::rgb(255, 202, 40),
            footer_delete: ColorSpec::rgb(247, 118, 142),
            footer_debug: ColorSpec::rgb(158, 206, 106),
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "material-light" => Some(Self::material_light()),
            "material-dark" => Some(Self::material_dark()),
            "tokyo-night" => Some(Self::tokyo_night()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "material-light".to_string(),
            "material-dark".to_string(),
            "tokyo-night".to_string(),
        ]
    }
}
