//! Immutable segment layout
//!
//! A wheel is divided into `count` equal wedges. Index 0 starts at angle 0
//! and indices advance in the rendering's sweep direction; the indicator
//! sits fixed at 12 o'clock. Regenerating the wheel means constructing a
//! new layout - nothing here mutates after `new`.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{consts::ONE_TURN, normalize_degrees, polar_to_screen};

/// Layout construction failures (configuration errors, caught up front)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("a wheel needs at least 2 segments, got {count}")]
    TooFewSegments { count: usize },
    #[error("label count {labels} does not match segment count {count}")]
    LabelCountMismatch { count: usize, labels: usize },
}

/// Fixed segment layout for one wheel instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentLayout {
    count: usize,
    /// Angular width of one segment (degrees)
    segment_angle: f64,
    /// Half a segment - the indicator points at wedge midpoints, not edges
    angle_offset: f64,
    labels: Vec<String>,
}

impl SegmentLayout {
    /// Build a layout with an explicit segment count
    pub fn new(count: usize, labels: Vec<String>) -> Result<Self, LayoutError> {
        if count < 2 {
            return Err(LayoutError::TooFewSegments { count });
        }
        if labels.len() != count {
            return Err(LayoutError::LabelCountMismatch {
                count,
                labels: labels.len(),
            });
        }
        let segment_angle = ONE_TURN / count as f64;
        Ok(Self {
            count,
            segment_angle,
            angle_offset: segment_angle / 2.0,
            labels,
        })
    }

    /// Build a layout sized by its label list
    pub fn from_labels(labels: Vec<String>) -> Result<Self, LayoutError> {
        Self::new(labels.len(), labels)
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn segment_angle(&self) -> f64 {
        self.segment_angle
    }

    #[inline]
    pub fn angle_offset(&self) -> f64 {
        self.angle_offset
    }

    /// Raw label for a segment (source of truth for results)
    pub fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    /// Label flattened to a single line for display surfaces that can't
    /// render embedded newlines (result banner, congratulations dialog)
    pub fn display_label(&self, index: usize) -> String {
        self.labels[index].replace('\n', " ")
    }

    /// A wheel rotation that parks segment `index`'s midpoint under the
    /// indicator. Inverse of `spin::resolve` for snapped angles.
    pub fn segment_center_angle(&self, index: usize) -> f64 {
        debug_assert!(index < self.count);
        let steps = (1 - index as i64).rem_euclid(self.count as i64);
        normalize_degrees(steps as f64 * self.segment_angle)
    }

    /// Label anchor point for wedge `index` at the given radius, in screen
    /// coordinates relative to the wheel center (wheel at rotation 0)
    pub fn centroid(&self, index: usize, radius: f32) -> Vec2 {
        debug_assert!(index < self.count);
        let mid = index as f64 * self.segment_angle + self.angle_offset;
        polar_to_screen(radius, mid as f32)
    }
}
