//! Animatable inline-style properties.
//!
//! A `Style` is a sparse property map: unset fields are left alone when the
//! style is merged or tweened, so from/to states name only what they animate.

use serde::{Deserialize, Serialize};

use crate::interp::lerp_f32;

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Prop {
    Opacity,
    X,
    Y,
    Scale,
    ScaleX,
}

impl Prop {
    pub const ALL: [Prop; 5] = [Prop::Opacity, Prop::X, Prop::Y, Prop::Scale, Prop::ScaleX];

    /// Value a property has when no inline style overrides it.
    pub const fn rest_value(self) -> f32 {
        match self {
            Prop::Opacity | Prop::Scale | Prop::ScaleX => 1.0,
            Prop::X | Prop::Y => 0.0,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f32>,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            opacity: None,
            x: None,
            y: None,
            scale: None,
            scale_x: None,
        }
    }

    pub const fn opacity(mut self, v: f32) -> Self {
        self.opacity = Some(v);
        self
    }

    pub const fn x(mut self, v: f32) -> Self {
        self.x = Some(v);
        self
    }

    pub const fn y(mut self, v: f32) -> Self {
        self.y = Some(v);
        self
    }

    pub const fn scale(mut self, v: f32) -> Self {
        self.scale = Some(v);
        self
    }

    pub const fn scale_x(mut self, v: f32) -> Self {
        self.scale_x = Some(v);
        self
    }

    #[inline]
    pub fn get(&self, prop: Prop) -> Option<f32> {
        match prop {
            Prop::Opacity => self.opacity,
            Prop::X => self.x,
            Prop::Y => self.y,
            Prop::Scale => self.scale,
            Prop::ScaleX => self.scale_x,
        }
    }

    #[inline]
    pub fn set(&mut self, prop: Prop, v: f32) {
        let slot = match prop {
            Prop::Opacity => &mut self.opacity,
            Prop::X => &mut self.x,
            Prop::Y => &mut self.y,
            Prop::Scale => &mut self.scale,
            Prop::ScaleX => &mut self.scale_x,
        };
        *slot = Some(v);
    }

    /// Value of `prop`, falling back to its rest value.
    #[inline]
    pub fn resolved(&self, prop: Prop) -> f32 {
        self.get(prop).unwrap_or(prop.rest_value())
    }

    /// Properties set on this style, in declaration order.
    pub fn props(&self) -> impl Iterator<Item = (Prop, f32)> + '_ {
        Prop::ALL
            .into_iter()
            .filter_map(move |p| self.get(p).map(|v| (p, v)))
    }

    /// Overlay every property set on `other` onto `self`.
    pub fn merge(&mut self, other: &Style) {
        for (p, v) in other.props() {
            self.set(p, v);
        }
    }

    /// For each property in `to`, interpolate from `self` (or the rest value).
    pub fn lerp_toward(&self, to: &Style, t: f32) -> Style {
        let mut out = Style::new();
        for (p, end) in to.props() {
            out.set(p, lerp_f32(self.resolved(p), end, t));
        }
        out
    }

    /// Snapshot of the properties `to` touches, read from `self`.
    pub fn capture(&self, to: &Style) -> Style {
        let mut out = Style::new();
        for (p, _) in to.props() {
            out.set(p, self.resolved(p));
        }
        out
    }
}
