//! Color theme and glyphs for the Keepsake TUI.
//!
//! A midnight-sky palette for the intro and a warm paper palette for the
//! card pages, with an ASCII-only glyph fallback.

use ratatui::style::{Color, Modifier, Style};

use keepsake_types::ui::UiOptions;

/// Palette constants.
mod colors {
    use super::Color;

    // === Intro sky ===
    pub const SKY: Color = Color::Rgb(2, 6, 23);
    pub const SKY_TEXT: Color = Color::Rgb(226, 232, 240);
    pub const SKY_MUTED: Color = Color::Rgb(148, 163, 184);

    // === Card pages ===
    pub const PAPER: Color = Color::Rgb(255, 243, 224);
    pub const PAPER_CARD: Color = Color::Rgb(245, 245, 220);
    pub const INK: Color = Color::Rgb(74, 67, 65);
    pub const INK_SOFT: Color = Color::Rgb(90, 82, 80);
    pub const MUTED: Color = Color::Rgb(130, 122, 110);

    // === Accents ===
    pub const GOLD: Color = Color::Rgb(212, 175, 55);
    pub const GOLD_BRIGHT: Color = Color::Rgb(255, 215, 0);
    pub const RED: Color = Color::Rgb(211, 47, 47);
    pub const RED_DEEP: Color = Color::Rgb(146, 43, 33);
    pub const SILVER: Color = Color::Rgb(192, 192, 192);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const LED_GREEN: Color = Color::Rgb(0, 255, 65);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub sky: Color,
    pub sky_text: Color,
    pub sky_muted: Color,
    pub paper: Color,
    pub paper_card: Color,
    pub ink: Color,
    pub ink_soft: Color,
    pub muted: Color,
    pub gold: Color,
    pub gold_bright: Color,
    pub red: Color,
    pub red_deep: Color,
    pub silver: Color,
    pub white: Color,
    pub led_green: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            sky: colors::SKY,
            sky_text: colors::SKY_TEXT,
            sky_muted: colors::SKY_MUTED,
            paper: colors::PAPER,
            paper_card: colors::PAPER_CARD,
            ink: colors::INK,
            ink_soft: colors::INK_SOFT,
            muted: colors::MUTED,
            gold: colors::GOLD,
            gold_bright: colors::GOLD_BRIGHT,
            red: colors::RED,
            red_deep: colors::RED_DEEP,
            silver: colors::SILVER,
            white: colors::WHITE,
            led_green: colors::LED_GREEN,
        }
    }
}

/// Resolve the palette for the given options.
#[must_use]
pub fn palette(_options: UiOptions) -> Palette {
    Palette::standard()
}

/// Glyph set, with an ASCII fallback for terminals without wide glyphs.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub flakes: [char; 3],
    pub star: char,
    pub spark: char,
    pub reel: char,
    pub diamond: char,
    pub checkbox: &'static str,
    pub bullet_active: char,
    pub bullet_inactive: char,
    pub envelope: char,
    pub note: char,
}

impl Glyphs {
    #[must_use]
    pub fn unicode() -> Self {
        Self {
            flakes: ['❄', '❅', '❆'],
            star: '✦',
            spark: '✸',
            reel: '◉',
            diamond: '◆',
            checkbox: "☐",
            bullet_active: '●',
            bullet_inactive: '○',
            envelope: '✉',
            note: '♪',
        }
    }

    #[must_use]
    pub fn ascii() -> Self {
        Self {
            flakes: ['*', '+', '.'],
            star: '+',
            spark: '*',
            reel: 'o',
            diamond: '*',
            checkbox: "[ ]",
            bullet_active: '*',
            bullet_inactive: '.',
            envelope: '@',
            note: '#',
        }
    }
}

/// Resolve the glyph set for the given options.
#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs::ascii()
    } else {
        Glyphs::unicode()
    }
}

/// Shared style helpers.
pub mod styles {
    use super::{Color, Modifier, Palette, Style};

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.ink)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn subheading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.red)
            .add_modifier(Modifier::ITALIC)
    }

    #[must_use]
    pub fn hint(palette: &Palette) -> Style {
        Style::default().fg(palette.muted)
    }

    #[must_use]
    pub fn button(palette: &Palette, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(palette.white)
                .bg(palette.red)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        }
    }

    #[must_use]
    pub fn gold_text(palette: &Palette) -> Style {
        Style::default().fg(palette.gold)
    }

    /// Dim a foreground towards invisibility for fade-in beats.
    #[must_use]
    pub fn faded(color: Color, progress: f32) -> Style {
        let style = Style::default().fg(color);
        if progress < 0.35 {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }
}
