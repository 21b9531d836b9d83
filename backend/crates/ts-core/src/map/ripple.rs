use std::time::Duration;

use serde::{Serialize, Serializer, ser::SerializeStruct};

pub const RIPPLE_INTERVAL: Duration = Duration::from_millis(200);
pub const INITIAL_RADIUS: f64 = 30.0;
pub const RADIUS_STEP: f64 = 25.0;
pub const OPACITY_STEP: f64 = 0.03;
pub const MAX_RADIUS: f64 = 2000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub radius: f64,
    pub opacity: f64,
}

impl Ripple {
    pub fn fill_opacity(&self) -> f64 {
        self.opacity * 0.15
    }

    pub fn stroke_weight(&self) -> u8 {
        if self.opacity > 0.4 { 4 } else { 3 }
    }

    pub fn dash_pattern(&self) -> &'static str {
        if self.opacity > 0.5 { "10, 10" } else { "5, 15" }
    }

    fn visible(&self) -> bool {
        self.opacity > 0.0 && self.radius < MAX_RADIUS
    }
}

/// Geometry plus the drawing style derived from it, so clients render a ripple
/// without recomputing the style thresholds.
impl Serialize for Ripple {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Ripple", 5)?;
        state.serialize_field("radius", &self.radius)?;
        state.serialize_field("opacity", &self.opacity)?;
        state.serialize_field("fill_opacity", &self.fill_opacity())?;
        state.serialize_field("stroke_weight", &self.stroke_weight())?;
        state.serialize_field("dash_pattern", self.dash_pattern())?;
        state.end()
    }
}

/// Expanding, fading circles around a non-normal tourist.
///
/// Call [`RippleField::tick`] every [`RIPPLE_INTERVAL`].
#[derive(Debug, Clone, Default)]
pub struct RippleField {
    ripples: Vec<Ripple>,
}

impl RippleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.ripples.push(Ripple {
            radius: INITIAL_RADIUS,
            opacity: 1.0,
        });

        for ripple in &mut self.ripples {
            ripple.radius += RADIUS_STEP;
            ripple.opacity -= OPACITY_STEP;
        }

        self.ripples.retain(Ripple::visible);
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }
}
