use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(&self, other: &Point) -> Point {
        (*self + *other) * 0.5
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

/// A face's landmark points as produced by a landmark detector.
///
/// Points are addressed by position; the indexing scheme is the detector's
/// (468-point FaceMesh layout for the reference indices in
/// [`crate::landmarks`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmarks {
    pub points: Vec<Point>,
}

/// Accepted on-disk layouts for a landmark set.
#[derive(Deserialize)]
#[serde(untagged)]
enum LandmarksRepr {
    Object { points: Vec<Point> },
    Pairs(Vec<[f64; 2]>),
}

impl Landmarks {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn num_landmarks(&self) -> usize {
        self.points.len()
    }

    pub fn get(&self, idx: usize) -> Option<&Point> {
        self.points.get(idx)
    }

    /// Scale points given in normalized [0,1] coordinates to pixel
    /// coordinates of a `width` x `height` image.
    pub fn denormalize(&self, width: f64, height: f64) -> Landmarks {
        let points = self
            .points
            .iter()
            .map(|p| Point::new(p.x * width, p.y * height))
            .collect();
        Landmarks { points }
    }

    /// Parse a landmark set from JSON.
    ///
    /// Accepts either `{"points": [{"x": .., "y": ..}, ...]}` or a bare
    /// array of `[x, y]` pairs.
    pub fn from_json(json: &str) -> Result<Self> {
        let repr: LandmarksRepr = serde_json::from_str(json)
            .map_err(|e| Error::InvalidLandmarks(e.to_string()))?;

        let points = match repr {
            LandmarksRepr::Object { points } => points,
            LandmarksRepr::Pairs(pairs) => {
                pairs.into_iter().map(|[x, y]| Point::new(x, y)).collect()
            }
        };

        if points.is_empty() {
            return Err(Error::InvalidLandmarks("no points".to_string()));
        }

        Ok(Self { points })
    }

    /// Read a landmark set from a JSON file. See [`Landmarks::from_json`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl std::ops::Index<usize> for Landmarks {
    type Output = Point;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.points[idx]
    }
}

impl std::ops::IndexMut<usize> for Landmarks {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.points[idx]
    }
}

impl FromIterator<Point> for Landmarks {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
