//! Color mapping functions for images and line series.

use crate::app::ColorPalette;
use ratatui::style::Color;

type Stop = (f64, [u8; 3]);

const VIRIDIS: &[Stop] = &[
    (0.0, [68, 1, 84]),
    (0.25, [59, 82, 139]),
    (0.5, [33, 145, 140]),
    (0.75, [94, 201, 98]),
    (1.0, [253, 231, 37]),
];

const PLASMA: &[Stop] = &[
    (0.0, [13, 8, 135]),
    (0.25, [126, 3, 168]),
    (0.5, [204, 71, 120]),
    (0.75, [248, 149, 64]),
    (1.0, [240, 249, 33]),
];

const BLUE_RED: &[Stop] = &[
    (0.0, [0, 0, 255]),
    (0.5, [255, 255, 255]),
    (1.0, [255, 0, 0]),
];

impl ColorPalette {
    /// Map a normalized value (0.0 to 1.0) to an RGB color.
    pub fn color(self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Viridis => interpolate(VIRIDIS, t),
            Self::Plasma => interpolate(PLASMA, t),
            Self::Rainbow => rainbow_color(t),
            Self::BlueRed => interpolate(BLUE_RED, t),
        }
    }

    /// Color for the i-th of `n` line series.
    pub fn series_color(self, i: usize, n: usize) -> Color {
        if n <= 1 {
            return self.color(0.6);
        }
        self.color(0.1 + 0.8 * i as f64 / (n - 1) as f64)
    }
}

/// Piecewise linear interpolation between color stops.
fn interpolate(stops: &[Stop], t: f64) -> Color {
    let upper = stops
        .iter()
        .position(|(pos, _)| *pos >= t)
        .unwrap_or(stops.len() - 1)
        .max(1);
    let (p0, c0) = stops[upper - 1];
    let (p1, c1) = stops[upper];
    let w = if p1 > p0 { (t - p0) / (p1 - p0) } else { 0.0 };

    let channel = |i: usize| (c0[i] as f64 + w * (c1[i] as f64 - c0[i] as f64)).round() as u8;
    Color::Rgb(channel(0), channel(1), channel(2))
}

/// Hue sweep from blue (0.0) to red (1.0) at full saturation.
fn rainbow_color(t: f64) -> Color {
    let h = (1.0 - t) * 240.0;
    let x = 1.0 - ((h / 60.0) % 2.0 - 1.0).abs();

    let (r, g, b) = match (h / 60.0) as u8 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        _ => (x, 0.0, 1.0),
    };

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}
