use crate::geo_utils::adjusted_anti_aliasing;

/// Width of the alpha-faded edge ring, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AntiAliasingProperties {
    pub anti_aliasing: f32,
}

impl Default for AntiAliasingProperties {
    fn default() -> Self {
        Self {
            anti_aliasing: 1.25,
        }
    }
}

impl AntiAliasingProperties {
    pub fn new(anti_aliasing: f32) -> Self {
        Self {
            anti_aliasing: anti_aliasing.max(0.0),
        }
    }

    pub fn disabled() -> Self {
        Self { anti_aliasing: 0.0 }
    }

    /// Fade width in canvas units. `None` means no canvas scaling.
    pub fn adjusted(&self, scale_factor: Option<f32>) -> f32 {
        match scale_factor {
            Some(scale) => adjusted_anti_aliasing(self.anti_aliasing, scale),
            None => self.anti_aliasing,
        }
    }
}
