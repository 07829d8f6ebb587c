use serde::{Deserialize, Serialize};

fn default_one() -> f64 {
    1.0
}

fn is_one(num: &f64) -> bool {
    *num == 1.0
}

/// A color as the design tool reports it: every channel in `0.0..=1.0`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(skip_serializing_if = "is_one", default = "default_one")]
    pub a: f64,
}

impl Default for Rgba {
    fn default() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn gray(value: f64) -> Self {
        Self { r: value, g: value, b: value, a: 1.0 }
    }

    /// The 8-bit red, green, and blue channels, rounded and clamped.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Multiplies alpha by a paint or layer opacity.
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { a: (self.a * opacity).clamp(0.0, 1.0), ..self }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0 - 1e-4
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 1e-4
    }
}
