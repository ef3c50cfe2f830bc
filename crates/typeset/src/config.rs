//! Configuration for the text pipeline.
//!
//! Configuration can be loaded from environment variables or constructed
//! programmatically. Unparseable values fall back to their defaults.

use log::warn;
use serde::{Deserialize, Serialize};
use std::env;
use typeset_boxes::BreakMode;
use typeset_breaks::{BreakParams, OverflowPolicy};
use typeset_core::{Length, Style};

/// Settings for laying a block of text out as one paragraph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypesetConfig {
    /// Target width of every line, in points.
    pub line_width: Length,
    /// Distance between consecutive baselines.
    pub line_pitch: Length,
    /// Extra space after each box in wrap mode.
    pub hspacing: Length,
    /// Use the breakpoint search instead of greedy wrapping.
    pub optimal: bool,
    /// Search parameters, used when `optimal` is set.
    pub break_params: BreakParams,
    pub font_size: f32,
}

impl Default for TypesetConfig {
    #[inline]
    fn default() -> Self {
        Self {
            line_width: 300.0,
            line_pitch: 14.0,
            hspacing: 0.0,
            optimal: true,
            break_params: BreakParams::default(),
            font_size: 12.0,
        }
    }
}

impl TypesetConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `TYPESET_LINE_WIDTH`: line width in points (default: 300)
    /// - `TYPESET_LINE_PITCH`: baseline distance (default: 14)
    /// - `TYPESET_HSPACING`: extra space after each box when wrapping (default: 0)
    /// - `TYPESET_MODE`: `wrap` or `optimal` (default: optimal)
    /// - `TYPESET_TOLERANCE`: largest adjustment ratio (default: 1)
    /// - `TYPESET_FITNESS_DEMERIT`: demerits for fitness jumps (default: 100)
    /// - `TYPESET_FLAGGED_DEMERIT`: demerits for consecutive flagged breaks (default: 100)
    /// - `TYPESET_OVERFLOW`: `rescue` or `fail` (default: rescue)
    /// - `TYPESET_FONT_SIZE`: font size in points (default: 12)
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key/value source using the `TYPESET_*` names.
    #[must_use]
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let defaults = Self::default();
        let number = |key: &str, default: f64| {
            lookup(key)
                .and_then(|val| val.trim().parse::<f64>().ok())
                .filter(|val| val.is_finite())
                .unwrap_or(default)
        };

        let optimal = match lookup("TYPESET_MODE").as_deref().map(str::trim) {
            None | Some("optimal") => true,
            Some("wrap") => false,
            Some(other) => {
                warn!(target: "typeset", "unknown TYPESET_MODE {other:?}; using optimal");
                true
            }
        };
        let overflow = match lookup("TYPESET_OVERFLOW").as_deref().map(str::trim) {
            None | Some("rescue") => OverflowPolicy::Rescue,
            Some("fail") => OverflowPolicy::Fail,
            Some(other) => {
                warn!(target: "typeset", "unknown TYPESET_OVERFLOW {other:?}; using rescue");
                OverflowPolicy::Rescue
            }
        };
        let font_size = lookup("TYPESET_FONT_SIZE")
            .and_then(|val| val.trim().parse::<f32>().ok())
            .filter(|size| size.is_finite() && *size > 0.0)
            .unwrap_or(defaults.font_size);

        Self {
            line_width: number("TYPESET_LINE_WIDTH", defaults.line_width),
            line_pitch: number("TYPESET_LINE_PITCH", defaults.line_pitch),
            hspacing: number("TYPESET_HSPACING", defaults.hspacing),
            optimal,
            break_params: BreakParams {
                tolerance: number("TYPESET_TOLERANCE", defaults.break_params.tolerance),
                fitness_demerit: number(
                    "TYPESET_FITNESS_DEMERIT",
                    defaults.break_params.fitness_demerit,
                ),
                flagged_demerit: number(
                    "TYPESET_FLAGGED_DEMERIT",
                    defaults.break_params.flagged_demerit,
                ),
                overflow,
            },
            font_size,
        }
    }

    /// Break mode a paragraph should be built with.
    #[inline]
    pub const fn break_mode(&self) -> BreakMode {
        if self.optimal {
            BreakMode::Optimal(self.break_params)
        } else {
            BreakMode::Wrap
        }
    }

    /// Style for body text.
    #[inline]
    pub fn style(&self) -> Style {
        Style::with_font_size(self.font_size)
    }
}
