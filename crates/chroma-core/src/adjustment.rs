//! Per-channel adjustment model
//!
//! Every factor is a percentage of the original channel: 100 leaves the channel
//! untouched, 0 replaces it with the channel's neutral value. Values above 100
//! are not part of the model; the builder methods clamp into [0, 100], while the
//! public fields are taken as-is.

use crate::consts::{MAX_FACTOR, MIN_FACTOR, UNCHANGED_FACTOR};
use crate::Channel;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

fn clamp_factor(factor: f64) -> f64 {
    factor.clamp(MIN_FACTOR, MAX_FACTOR)
}

/// Scale factors for the Y, Cb and Cr channels
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct YcbcrAdjustment {
    pub y: f64,
    pub cb: f64,
    pub cr: f64,
}

impl Default for YcbcrAdjustment {
    fn default() -> Self {
        Self {
            y: UNCHANGED_FACTOR,
            cb: UNCHANGED_FACTOR,
            cr: UNCHANGED_FACTOR,
        }
    }
}

impl YcbcrAdjustment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn y(mut self, factor: f64) -> Self {
        self.y = clamp_factor(factor);
        self
    }

    pub fn cb(mut self, factor: f64) -> Self {
        self.cb = clamp_factor(factor);
        self
    }

    pub fn cr(mut self, factor: f64) -> Self {
        self.cr = clamp_factor(factor);
        self
    }
}

/// Scale factors for the H, S and V channels
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct HsvAdjustment {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Default for HsvAdjustment {
    fn default() -> Self {
        Self {
            h: UNCHANGED_FACTOR,
            s: UNCHANGED_FACTOR,
            v: UNCHANGED_FACTOR,
        }
    }
}

impl HsvAdjustment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn h(mut self, factor: f64) -> Self {
        self.h = clamp_factor(factor);
        self
    }

    pub fn s(mut self, factor: f64) -> Self {
        self.s = clamp_factor(factor);
        self
    }

    pub fn v(mut self, factor: f64) -> Self {
        self.v = clamp_factor(factor);
        self
    }
}

/// Adjustments for both color models, as supplied by a control surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Adjustments {
    pub ycbcr: YcbcrAdjustment,
    pub hsv: HsvAdjustment,
}

impl Adjustments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factor currently set for a channel
    pub fn factor(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Y => self.ycbcr.y,
            Channel::Cb => self.ycbcr.cb,
            Channel::Cr => self.ycbcr.cr,
            Channel::H => self.hsv.h,
            Channel::S => self.hsv.s,
            Channel::V => self.hsv.v,
        }
    }

    /// Set one channel's factor, clamped to [0, 100]
    pub fn with_factor(mut self, channel: Channel, factor: f64) -> Self {
        let factor = clamp_factor(factor);
        match channel {
            Channel::Y => self.ycbcr.y = factor,
            Channel::Cb => self.ycbcr.cb = factor,
            Channel::Cr => self.ycbcr.cr = factor,
            Channel::H => self.hsv.h = factor,
            Channel::S => self.hsv.s = factor,
            Channel::V => self.hsv.v = factor,
        }
        self
    }
}
