use crate::foundation::core::Rgb8;

/// Partitions the hue circle into evenly spaced, visually distinct colors.
///
/// Saturation and value are fixed per wheel; only hue varies across the
/// generated palette. Assignment order is the caller's concern (the dataset
/// builder walks entities in sorted-id order), so color `i` of `n` is a pure
/// function of this wheel's parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ColorWheel {
    /// HSV saturation applied to every generated color, in `[0, 1]`.
    pub saturation: f64,
    /// HSV value (brightness) applied to every generated color, in `[0, 1]`.
    pub value: f64,
}

impl Default for ColorWheel {
    fn default() -> Self {
        Self {
            saturation: 1.0,
            value: 0.8,
        }
    }
}

impl ColorWheel {
    /// `n` colors at hues `i * 360 / n` degrees. `n = 0` yields an empty
    /// palette.
    pub fn generate(&self, n: usize) -> Vec<Rgb8> {
        if n == 0 {
            return Vec::new();
        }
        let step = 360.0 / n as f64;
        (0..n)
            .map(|i| hsv_to_rgb(i as f64 * step, self.saturation, self.value))
            .collect()
    }
}

/// Six-sector HSV to RGB conversion.
///
/// Hue is in degrees (wrapped into `[0, 360)`), saturation and value in
/// `[0, 1]`. Channels round to the nearest 8-bit value.
pub fn hsv_to_rgb(hue_deg: f64, saturation: f64, value: f64) -> Rgb8 {
    let h = hue_deg.rem_euclid(360.0) / 60.0;
    let c = value * saturation;
    let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
    let (r, g, b) = if h < 1.0 {
        (c, x, 0.0)
    } else if h < 2.0 {
        (x, c, 0.0)
    } else if h < 3.0 {
        (0.0, c, x)
    } else if h < 4.0 {
        (0.0, x, c)
    } else if h < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };
    let m = value - c;
    Rgb8 {
        r: channel(r + m),
        g: channel(g + m),
        b: channel(b + m),
    }
}

fn channel(v: f64) -> u8 {
    (255.0 * v).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/color/wheel.rs"]
mod tests;
