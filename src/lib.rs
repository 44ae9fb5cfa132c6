//! # face-shape
//!
//! Face shape classification from 2-D facial landmarks.
//!
//! This crate provides:
//! - **Measurements**: forehead, cheekbone and jaw widths, face heights and
//!   their ratios, computed from a fixed set of reference landmarks
//! - **Classification**: weighted geometric rules scoring seven shapes
//!   (oval, round, square, heart, diamond, oblong, triangle), a fixed
//!   tie-break order and a confidence in `[0.55, 1.0]`
//! - **Catalog**: a description and styling recommendations per shape
//!
//! Landmark detection itself is left to an external detector producing the
//! 468-point FaceMesh layout; plug it in through [`LandmarkProvider`].
//!
//! ## Algorithm Overview
//!
//! 1. Measure distances between the reference landmarks (see [`landmarks`])
//! 2. Derive the width/height, forehead/jaw and cheekbone/jaw ratios
//! 3. Score every shape with its own rule set; rules add 1, 2 or 3 points
//! 4. Pick the highest score, breaking ties as
//!    oval > heart > diamond > round > square > oblong > triangle
//! 5. Report `confidence = 0.55 + score / 6 * 0.45`
//!
//! ## Quick Start
//!
//! ```rust
//! use face_shape::{classify, measure, FaceShape, Landmarks, Point};
//! use face_shape::landmarks::{CHEEKBONES, CHIN, FOREHEAD, FOREHEAD_TOP, JAW};
//!
//! let mut face = Landmarks::new(vec![Point::zero(); 468]);
//! face[FOREHEAD_TOP] = Point::new(100.0, 0.0);
//! face[CHIN] = Point::new(100.0, 145.0);
//! face[FOREHEAD[0]] = Point::new(50.0, 30.0);
//! face[FOREHEAD[1]] = Point::new(150.0, 30.0);
//! face[CHEEKBONES[0]] = Point::new(50.0, 65.0);
//! face[CHEEKBONES[1]] = Point::new(150.0, 65.0);
//! face[JAW[0]] = Point::new(50.0, 125.0);
//! face[JAW[1]] = Point::new(150.0, 125.0);
//!
//! let measurements = measure(&face).unwrap();
//! let result = classify(&measurements);
//! assert_eq!(result.shape, FaceShape::Square);
//! println!("{} ({:.0}%)", result.shape, result.confidence * 100.0);
//! ```

mod analyzer;
mod catalog;
mod classifier;
mod error;
pub mod landmarks;
mod measurements;
mod types;

pub use analyzer::{analyze_landmarks, Analysis, FaceShapeAnalyzer, LandmarkProvider};
pub use catalog::Recommendations;
pub use classifier::{
    classify, confidence, Classification, FaceShape, ShapeScores, CONFIDENCE_FLOOR,
    CONFIDENCE_SPAN, MAX_SCORE,
};
pub use error::{Error, Result};
pub use measurements::{distance, measure, Measurements};
pub use types::{Landmarks, Point};
