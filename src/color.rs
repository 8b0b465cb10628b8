use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Observation;

// ---------------------------------------------------------------------------
// Sequential color ramp: emission value → Color32
// ---------------------------------------------------------------------------

/// Maps a numeric range onto a light-to-deep red ramp for the ranking bars.
#[derive(Debug, Clone, Copy)]
pub struct ValueRamp {
    min: f64,
    max: f64,
}

impl ValueRamp {
    // Hue and saturation are fixed; only lightness varies with the value.
    const HUE: f32 = 8.0;
    const SATURATION: f32 = 0.85;
    const LIGHT_END: f32 = 0.78;
    const DARK_END: f32 = 0.32;

    pub fn new(min: f64, max: f64) -> Self {
        ValueRamp { min, max }
    }

    /// Build a ramp spanning the `co2` values of the given rows.
    pub fn fit(rows: &[Observation]) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for obs in rows {
            min = min.min(obs.co2);
            max = max.max(obs.co2);
        }
        if !min.is_finite() || !max.is_finite() {
            return ValueRamp::new(0.0, 0.0);
        }
        ValueRamp::new(min, max)
    }

    /// Look up the color for a value; a degenerate range maps to the deep end.
    pub fn color_for(&self, value: f64) -> Color32 {
        let range = self.max - self.min;
        let t = if range.abs() < f64::EPSILON {
            1.0
        } else {
            ((value - self.min) / range).clamp(0.0, 1.0) as f32
        };
        let lightness = Self::LIGHT_END + (Self::DARK_END - Self::LIGHT_END) * t;
        let hsl = Hsl::new(Self::HUE, Self::SATURATION, lightness);
        let rgb: Srgb = hsl.into_color();
        Color32::from_rgb(
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn larger_values_map_darker() {
        let ramp = ValueRamp::new(0.0, 100.0);
        let low = ramp.color_for(0.0);
        let high = ramp.color_for(100.0);
        // The deep end of the red ramp has a dimmer red channel.
        assert!(high.r() < low.r());
    }

    #[test]
    fn degenerate_range_still_yields_a_color() {
        let ramp = ValueRamp::new(42.0, 42.0);
        assert_eq!(ramp.color_for(42.0), ramp.color_for(7.0));
    }
}
