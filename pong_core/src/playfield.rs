use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Axis-aligned rectangle. Y grows downward, so `top() <= bottom()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Build from two corners; negative extents collapse to zero size
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min,
            max: max.max(min),
        }
    }

    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin, origin + size.max(Vec2::ZERO))
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size.max(Vec2::ZERO) * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Playfield anchored at the origin with the given viewport size
    pub fn playfield(size: Vec2) -> Result<Self> {
        if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
            return Err(CoreError::DegeneratePlayfield {
                width: size.x,
                height: size.y,
            });
        }
        Ok(Self::from_origin_size(Vec2::ZERO, size))
    }

    pub fn origin(&self) -> Vec2 {
        self.min
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }

    /// Check if circle intersects the rect (touching counts)
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = self.closest_point(center);
        (center - closest).length_squared() <= radius * radius
    }

    /// Clamp the center of a vertical extent so the extent stays inside.
    /// An extent taller than the rect is pinned to the vertical center.
    pub fn clamp_center_y(&self, y: f32, half_extent: f32) -> f32 {
        let lo = self.top() + half_extent;
        let hi = self.bottom() - half_extent;
        if lo > hi || lo.is_nan() || hi.is_nan() || y.is_nan() {
            self.center().y
        } else {
            y.clamp(lo, hi)
        }
    }
}
