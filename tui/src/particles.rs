//! Buffer-level rendering for the ambient particle fields.
//!
//! Fields report fractional coordinates; these helpers scale them into an
//! area and paint individual cells, underneath whatever the page renders
//! on top.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier};

use keepsake_engine::{FireworkBurst, SnowField, SparkColor, StarField};

use crate::theme::{Glyphs, Palette};

fn cell_at(area: Rect, fx: f32, fy: f32) -> Option<(u16, u16)> {
    if !(0.0..=1.0).contains(&fx) || !(0.0..=1.0).contains(&fy) || area.width == 0 || area.height == 0
    {
        return None;
    }
    let x = area.x + ((fx * f32::from(area.width - 1)).round() as u16).min(area.width - 1);
    let y = area.y + ((fy * f32::from(area.height - 1)).round() as u16).min(area.height - 1);
    Some((x, y))
}

/// Approximate HSL-to-RGB for the pastel flake tints.
fn pastel(hue: u16) -> Color {
    let (saturation, lightness) = (0.65_f32, 0.92_f32);
    let h = f32::from(hue % 360) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    Color::Rgb(
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}

/// Paint a snow field into `area`.
pub(crate) fn draw_snow(buf: &mut Buffer, area: Rect, field: &SnowField, glyphs: &Glyphs) {
    for flake in field.flakes() {
        let Some((x, y)) = cell_at(area, flake.x, flake.y) else {
            continue;
        };
        let glyph = glyphs.flakes[(flake.size * 2.99) as usize % glyphs.flakes.len()];
        let cell = &mut buf[(x, y)];
        cell.set_char(glyph);
        cell.set_fg(pastel(flake.hue));
        if flake.size < 0.4 {
            cell.set_style(ratatui::style::Style::default().add_modifier(Modifier::DIM));
        }
    }
}

/// Paint the blinking intro star field.
pub(crate) fn draw_stars(buf: &mut Buffer, area: Rect, field: &StarField, glyphs: &Glyphs) {
    for (fx, fy, brightness) in field.stars() {
        let Some((x, y)) = cell_at(area, fx, fy) else {
            continue;
        };
        let level = (brightness * 255.0) as u8;
        let cell = &mut buf[(x, y)];
        cell.set_char(if brightness > 0.8 { glyphs.star } else { '.' });
        cell.set_fg(Color::Rgb(level, level, level));
    }
}

/// Paint a firework burst centered in `area`.
pub(crate) fn draw_burst(
    buf: &mut Buffer,
    area: Rect,
    burst: &FireworkBurst,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    for spark in burst.sparks() {
        // Spark offsets are in burst-radius units; half the area is the radius.
        let fx = 0.5 + spark.dx * 0.5;
        let fy = 0.5 + spark.dy * 0.5;
        let Some((x, y)) = cell_at(area, fx, fy) else {
            continue;
        };
        let color = match spark.color {
            SparkColor::Gold => palette.gold_bright,
            SparkColor::White => palette.white,
            SparkColor::Silver => palette.silver,
        };
        let cell = &mut buf[(x, y)];
        cell.set_char(if spark.intensity > 0.5 {
            glyphs.spark
        } else {
            '.'
        });
        cell.set_fg(color);
        if spark.intensity < 0.25 {
            cell.set_style(ratatui::style::Style::default().add_modifier(Modifier::DIM));
        }
    }
}
