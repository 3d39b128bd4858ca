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
    pub text_muted: ColorSpec,

    // Status colors
    pub error: ColorSpec,
    pub success: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification as RGB components.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
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

impl Default for Theme {
    fn default() -> Self {
        Self::sunset()
    }
}

impl Theme {
    /// Sunset theme, built around the network's orange.
    ///
    pub fn sunset() -> Self {
        Theme {
            name: "sunset".to_string(),
            primary: ColorSpec {
                r: 249,
                g: 115,
                b: 22,
            }, // Orange
            accent: ColorSpec {
                r: 194,
                g: 65,
                b: 12,
            }, // Deep orange
            text: ColorSpec {
                r: 229,
                g: 231,
                b: 235,
            },
            text_muted: ColorSpec {
                r: 156,
                g: 163,
                b: 175,
            },
            error: ColorSpec {
                r: 239,
                g: 68,
                b: 68,
            },
            success: ColorSpec {
                r: 34,
                g: 197,
                b: 94,
            },
            border_active: ColorSpec {
                r: 249,
                g: 115,
                b: 22,
            },
            border_normal: ColorSpec {
                r: 75,
                g: 85,
                b: 99,
            },
            highlight_fg: ColorSpec {
                r: 255,
                g: 255,
                b: 255,
            },
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            }, // Blue
            accent: ColorSpec {
                r: 187,
                g: 154,
                b: 247,
            }, // Purple
            text: ColorSpec {
                r: 192,
                g: 202,
                b: 245,
            },
            text_muted: ColorSpec {
                r: 86,
                g: 95,
                b: 137,
            },
            error: ColorSpec {
                r: 247,
                g: 118,
                b: 142,
            },
            success: ColorSpec {
                r: 158,
                g: 206,
                b: 106,
            },
            border_active: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            },
            border_normal: ColorSpec {
                r: 59,
                g: 66,
                b: 97,
            },
            highlight_fg: ColorSpec {
                r: 255,
                g: 255,
                b: 255,
            },
        }
    }

    /// Get theme by name, falling back to the default for unknown names.
    ///
    pub fn from_name(name: &str) -> Self {
        match name {
            "sunset" => Self::sunset(),
            "tokyo-night" => Self::tokyo_night(),
            _ => {
                log::warn!("Unknown theme '{}', using default.", name);
                Self::default()
            }
        }
    }
}
