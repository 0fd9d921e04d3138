//! Color math for the duration ramp.
//!
//! Small HSV/RGB helpers; enough for mapping durations onto a green-to-red
//! ramp and formatting the result as a 6-hex-digit code.

/// An RGB color with f32 channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Format as an uppercase 6-hex-digit code, e.g. `BFCCFF`.
    ///
    /// Channels are clamped to [0, 1] and rounded to the nearest byte.
    pub fn to_hex(self) -> String {
        format!(
            "{:02X}{:02X}{:02X}",
            channel_byte(self.r),
            channel_byte(self.g),
            channel_byte(self.b)
        )
    }
}

fn channel_byte(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Linear interpolation with `t` clamped to [0, 1].
///
/// Durations past the ramp's reference point saturate at the hot end
/// instead of extrapolating outside the HSV domain.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Convert hue/saturation/value (all in [0, 1]) to RGB
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let h = h.clamp(0.0, 1.0);
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);

    if s == 0.0 {
        return Rgb::new(v, v, v);
    }

    // Sector 0..6 around the hue wheel
    let h6 = (h * 6.0).min(5.999_999_5);
    let sector = h6 as u32;
    let f = h6 - sector as f32;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector {
        0 => Rgb::new(v, t, p),
        1 => Rgb::new(q, v, p),
        2 => Rgb::new(p, v, t),
        3 => Rgb::new(p, q, v),
        4 => Rgb::new(t, p, v),
        _ => Rgb::new(v, p, q),
    }
}
