//! Colour themes for the calculator surface.
//!
//! Each theme is a fixed palette covering the page, the display and the
//! four button variants.

use abacus_core::keypad::ButtonVariant;
use iced::Color;

// ════════════════════════════════════════════════════════════════════
// Theme System
// ════════════════════════════════════════════════════════════════════

/// A named colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    #[default]
    Default,
    Cyberpunk,
    Solarized,
    Monokai,
}

impl ThemeName {
    pub fn all() -> &'static [ThemeName] {
        &[ThemeName::Default, ThemeName::Cyberpunk, ThemeName::Solarized, ThemeName::Monokai]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeName::Default => "Default",
            ThemeName::Cyberpunk => "Cyberpunk",
            ThemeName::Solarized => "Solarized",
            ThemeName::Monokai => "Monokai",
        }
    }

    pub fn from_str(s: &str) -> Option<ThemeName> {
        match s.to_lowercase().as_str() {
            "default" => Some(ThemeName::Default),
            "cyberpunk" | "cyber" => Some(ThemeName::Cyberpunk),
            "solarized" | "solar" => Some(ThemeName::Solarized),
            "monokai" | "mono" => Some(ThemeName::Monokai),
            _ => None,
        }
    }

    /// The theme after this one, wrapping around.
    pub fn next(&self) -> ThemeName {
        let all = Self::all();
        let idx = all.iter().position(|t| t == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

/// Surface colours for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub card: Color,
    pub display_bg: Color,
    pub display_fg: Color,
    pub muted_fg: Color,
    pub secondary: (Color, Color),
    pub number: (Color, Color),
    pub operation: (Color, Color),
    pub equals: (Color, Color),
}

pub fn palette_for(theme: ThemeName) -> Palette {
    match theme {
        ThemeName::Default => Palette {
            background: Color::from_rgb(0.09, 0.10, 0.12),
            card:       Color::from_rgb(0.13, 0.14, 0.18),
            display_bg: Color::from_rgb(0.07, 0.08, 0.10),
            display_fg: Color::from_rgb(0.95, 0.95, 0.95),
            muted_fg:   Color::from_rgb(0.50, 0.55, 0.60),
            secondary:  (Color::from_rgb(0.30, 0.32, 0.38), Color::from_rgb(0.95, 0.95, 0.95)),
            number:     (Color::from_rgb(0.20, 0.22, 0.27), Color::from_rgb(0.95, 0.95, 0.95)),
            operation:  (Color::from_rgb(0.95, 0.60, 0.15), Color::from_rgb(1.0, 1.0, 1.0)),
            equals:     (Color::from_rgb(0.40, 0.55, 0.95), Color::from_rgb(1.0, 1.0, 1.0)),
        },
        ThemeName::Cyberpunk => Palette {
            background: Color::from_rgb(0.05, 0.02, 0.10),
            card:       Color::from_rgb(0.10, 0.05, 0.18),
            display_bg: Color::from_rgb(0.02, 0.01, 0.05),
            display_fg: Color::from_rgb(0.0, 1.0, 0.85),      // neon cyan
            muted_fg:   Color::from_rgb(0.35, 0.30, 0.45),
            secondary:  (Color::from_rgb(0.20, 0.40, 1.0), Color::from_rgb(0.90, 0.90, 0.95)),
            number:     (Color::from_rgb(0.15, 0.08, 0.25), Color::from_rgb(0.0, 1.0, 0.85)),
            operation:  (Color::from_rgb(1.0, 0.0, 0.80), Color::from_rgb(1.0, 1.0, 1.0)),
            equals:     (Color::from_rgb(1.0, 0.85, 0.0), Color::from_rgb(0.05, 0.02, 0.10)),
        },
        ThemeName::Solarized => Palette {
            background: Color::from_rgb(0.0, 0.17, 0.21),      // base03
            card:       Color::from_rgb(0.0, 0.26, 0.33),      // base02
            display_bg: Color::from_rgb(0.0, 0.17, 0.21),
            display_fg: Color::from_rgb(0.93, 0.91, 0.84),     // base3
            muted_fg:   Color::from_rgb(0.51, 0.58, 0.59),     // base0
            secondary:  (Color::from_rgb(0.35, 0.43, 0.46), Color::from_rgb(0.99, 0.96, 0.89)),
            number:     (Color::from_rgb(0.03, 0.21, 0.26), Color::from_rgb(0.93, 0.91, 0.84)),
            operation:  (Color::from_rgb(0.80, 0.29, 0.09), Color::from_rgb(0.99, 0.96, 0.89)),
            equals:     (Color::from_rgb(0.15, 0.55, 0.82), Color::from_rgb(0.99, 0.96, 0.89)),
        },
        ThemeName::Monokai => Palette {
            background: Color::from_rgb(0.15, 0.16, 0.13),     // #272822
            card:       Color::from_rgb(0.20, 0.21, 0.18),
            display_bg: Color::from_rgb(0.12, 0.12, 0.10),
            display_fg: Color::from_rgb(0.97, 0.97, 0.95),     // #f8f8f2
            muted_fg:   Color::from_rgb(0.46, 0.44, 0.37),     // #75715e
            secondary:  (Color::from_rgb(0.46, 0.44, 0.37), Color::from_rgb(0.97, 0.97, 0.95)),
            number:     (Color::from_rgb(0.25, 0.26, 0.22), Color::from_rgb(0.97, 0.97, 0.95)),
            operation:  (Color::from_rgb(0.98, 0.15, 0.45), Color::from_rgb(0.97, 0.97, 0.95)),
            equals:     (Color::from_rgb(0.65, 0.89, 0.18), Color::from_rgb(0.15, 0.16, 0.13)),
        },
    }
}

/// Background and text colour for a button variant.
pub fn variant_colors(theme: ThemeName, variant: ButtonVariant) -> (Color, Color) {
    let p = palette_for(theme);
    match variant {
        ButtonVariant::Secondary => p.secondary,
        ButtonVariant::Number => p.number,
        ButtonVariant::Operation => p.operation,
        ButtonVariant::Equals => p.equals,
    }
}

/// Mix `c` towards white (positive `amount`) or black (negative).
pub fn shade(c: Color, amount: f32) -> Color {
    let target = if amount >= 0.0 { 1.0 } else { 0.0 };
    let t = amount.abs().min(1.0);
    Color {
        r: c.r + (target - c.r) * t,
        g: c.g + (target - c.g) * t,
        b: c.b + (target - c.b) * t,
        a: c.a,
    }
}
