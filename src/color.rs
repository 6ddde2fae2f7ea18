use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::pitch_mix::PitchType;

// ---------------------------------------------------------------------------
// Fixed pitch-type colours
// ---------------------------------------------------------------------------

/// Colour of a pitch type, identical in every chart.
pub fn pitch_color(pitch: PitchType) -> Color32 {
    match pitch {
        PitchType::FourSeam => Color32::from_rgb(255, 0, 0),
        PitchType::TwoSeam => Color32::from_rgb(255, 255, 0),
        PitchType::Changeup => Color32::from_rgb(128, 0, 128),
        PitchType::Slider => Color32::from_rgb(0, 128, 0),
        PitchType::Curveball => Color32::from_rgb(0, 0, 255),
        PitchType::Cutter => Color32::from_rgb(255, 165, 0),
        PitchType::Splitter => Color32::from_rgb(255, 192, 203),
        PitchType::KnuckleCurve => Color32::from_rgb(165, 42, 42),
        PitchType::Unknown => Color32::from_rgb(128, 128, 128),
    }
}

// ---------------------------------------------------------------------------
// Hover highlight
// ---------------------------------------------------------------------------

/// Lighter variant of `color` for the hovered slice.
pub fn highlight(color: Color32, amount: f32) -> Color32 {
    let rgb = Srgb::new(
        f32::from(color.r()) / 255.0,
        f32::from(color.g()) / 255.0,
        f32::from(color.b()) / 255.0,
    );
    let mut hsl: Hsl = rgb.into_color();
    hsl.lightness = (hsl.lightness + amount).clamp(0.0, 1.0);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_pitch_has_a_distinct_color() {
        let colors: HashSet<Color32> = PitchType::ALL.into_iter().map(pitch_color).collect();
        assert_eq!(colors.len(), PitchType::ALL.len());
    }

    #[test]
    fn test_highlight_lightens() {
        let base = pitch_color(PitchType::Slider);
        let lit = highlight(base, 0.2);
        assert!(lit.g() > base.g());
        assert_eq!(highlight(Color32::WHITE, 0.2), Color32::WHITE);
    }
}
