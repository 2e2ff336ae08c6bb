use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub accent: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_search: ColorSpec,
    pub footer_upload: ColorSpec,
    pub footer_modal: ColorSpec,
    pub footer_normal: ColorSpec,
}

/// An RGB color triple resolved to a terminal color at render time.
///
#[derive(Clone, Debug)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Theme {
    /// Select the palette for the boolean theme preference.
    ///
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Light palette: indigo accents on a near-white ground.
    ///
    pub fn light() -> Self {
        Theme {
            name: "light".to_string(),
            primary: ColorSpec {
                r: 79,
                g: 70,
                b: 229,
            }, // Indigo
            accent: ColorSpec {
                r: 147,
                g: 51,
                b: 234,
            }, // Purple
            text: ColorSpec {
                r: 31,
                g: 41,
                b: 55,
            }, // Gray 800
            text_secondary: ColorSpec {
                r: 75,
                g: 85,
                b: 99,
            }, // Gray 600
            text_muted: ColorSpec {
                r: 156,
                g: 163,
                b: 175,
            }, // Gray 400
            background: ColorSpec {
                r: 249,
                g: 250,
                b: 251,
            }, // Gray 50
            surface: ColorSpec {
                r: 255,
                g: 255,
                b: 255,
            }, // White
            success: ColorSpec {
                r: 22,
                g: 163,
                b: 74,
            }, // Green 600
            warning: ColorSpec {
                r: 217,
                g: 119,
                b: 6,
            }, // Amber 600
            error: ColorSpec {
                r: 220,
                g: 38,
                b: 38,
            }, // Red 600
            info: ColorSpec {
                r: 37,
                g: 99,
                b: 235,
            }, // Blue 600
            border_active: ColorSpec {
                r: 79,
                g: 70,
                b: 229,
            }, // Indigo
            border_normal: ColorSpec {
                r: 209,
                g: 213,
                b: 219,
            }, // Gray 300
            highlight_bg: ColorSpec {
                r: 79,
                g: 70,
                b: 229,
            }, // Indigo
            highlight_fg: ColorSpec {
                r: 255,
                g: 255,
                b: 255,
            }, // White
            footer_search: ColorSpec {
                r: 37,
                g: 99,
                b: 235,
            }, // Blue 600
            footer_upload: ColorSpec {
                r: 217,
                g: 119,
                b: 6,
            }, // Amber 600
            footer_modal: ColorSpec {
                r: 147,
                g: 51,
                b: 234,
            }, // Purple
            footer_normal: ColorSpec {
                r: 209,
                g: 213,
                b: 219,
            }, // Gray 300
        }
    }

    /// Dark palette: the same hues shifted onto slate.
    ///
    pub fn dark() -> Self {
        Theme {
            name: "dark".to_string(),
            primary: ColorSpec {
                r: 129,
                g: 140,
                b: 248,
            }, // Indigo 400
            accent: ColorSpec {
                r: 192,
                g: 132,
                b: 252,
            }, // Purple 400
            text: ColorSpec {
                r: 241,
                g: 245,
                b: 249,
            }, // Slate 100
            text_secondary: ColorSpec {
                r: 203,
                g: 213,
                b: 225,
            }, // Slate 300
            text_muted: ColorSpec {
                r: 100,
                g: 116,
                b: 139,
            }, // Slate 500
            background: ColorSpec {
                r: 2,
                g: 6,
                b: 23,
            }, // Slate 950
            surface: ColorSpec {
                r: 15,
                g: 23,
                b: 42,
            }, // Slate 900
            success: ColorSpec {
                r: 74,
                g: 222,
                b: 128,
            }, // Green 400
            warning: ColorSpec {
                r: 251,
                g: 191,
                b: 36,
            }, // Amber 400
            error: ColorSpec {
                r: 248,
                g: 113,
                b: 113,
            }, // Red 400
            info: ColorSpec {
                r: 96,
                g: 165,
                b: 250,
            }, // Blue 400
            border_active: ColorSpec {
                r: 129,
                g: 140,
                b: 248,
            }, // Indigo 400
            border_normal: ColorSpec {
                r: 51,
                g: 65,
                b: 85,
            }, // Slate 700
            highlight_bg: ColorSpec {
                r: 129,
                g: 140,
                b: 248,
            }, // Indigo 400
            highlight_fg: ColorSpec {
                r: 2,
                g: 6,
                b: 23,
            }, // Slate 950
            footer_search: ColorSpec {
                r: 96,
                g: 165,
                b: 250,
            }, // Blue 400
            footer_upload: ColorSpec {
                r: 251,
                g: 191,
                b: 36,
            }, // Amber 400
            footer_modal: ColorSpec {
                r: 192,
                g: 132,
                b: 252,
            }, // Purple 400
            footer_normal: ColorSpec {
                r: 51,
                g: 65,
                b: 85,
            }, // Slate 700
        }
    }
}
