//! End-to-end face shape analysis on top of an external landmark detector.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::Recommendations;
use crate::classifier::{classify, Classification, FaceShape, ShapeScores};
use crate::error::{Error, Result};
use crate::measurements::{measure, Measurements};
use crate::types::Landmarks;

/// Source of facial landmarks, typically a face mesh detector.
///
/// Returns `Ok(None)` when the input contains no face. Closures of the form
/// `Fn(&I) -> Result<Option<Landmarks>>` implement this trait.
pub trait LandmarkProvider<I: ?Sized> {
    fn detect(&self, input: &I) -> Result<Option<Landmarks>>;
}

impl<I: ?Sized, F> LandmarkProvider<I> for F
where
    F: Fn(&I) -> Result<Option<Landmarks>>,
{
    fn detect(&self, input: &I) -> Result<Option<Landmarks>> {
        self(input)
    }
}

/// Full report for one analyzed face.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub shape: FaceShape,
    pub confidence: f64,
    pub description: &'static str,
    pub recommendations: &'static Recommendations,
    pub measurements: Measurements,
    pub scores: ShapeScores,
}

impl Analysis {
    pub fn from_classification(c: Classification) -> Self {
        Self {
            shape: c.shape,
            confidence: c.confidence,
            description: c.shape.description(),
            recommendations: c.shape.recommendations(),
            measurements: c.measurements,
            scores: c.scores,
        }
    }

    /// Confidence as a whole percentage, truncated.
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0) as u32
    }
}

/// Runs detection, measurement and classification for one input at a time.
#[derive(Debug, Clone)]
pub struct FaceShapeAnalyzer<P> {
    provider: P,
}

impl<P> FaceShapeAnalyzer<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Detect landmarks in `input` and analyze the face.
    ///
    /// Fails with [`Error::NoFaceDetected`] when the provider finds no face.
    pub fn analyze<I: ?Sized>(&self, input: &I) -> Result<Analysis>
    where
        P: LandmarkProvider<I>,
    {
        match self.provider.detect(input)? {
            Some(landmarks) => analyze_landmarks(&landmarks),
            None => {
                warn!("no face detected");
                Err(Error::NoFaceDetected)
            }
        }
    }
}

/// Analyze an already detected landmark set.
pub fn analyze_landmarks(landmarks: &Landmarks) -> Result<Analysis> {
    let measurements = measure(landmarks).map_err(|e| {
        warn!(points = landmarks.num_landmarks(), "{}", e);
        e
    })?;
    debug!(?measurements, "measured face");

    let classification = classify(&measurements);
    debug!(scores = ?classification.scores, "scored shapes");
    info!(
        shape = %classification.shape,
        confidence = classification.confidence,
        "classified face"
    );

    Ok(Analysis::from_classification(classification))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::{CHEEKBONES, CHIN, FACE_MESH_LANDMARKS, FOREHEAD, FOREHEAD_TOP, JAW};
    use crate::types::Point;

    fn square_face() -> Landmarks {
        let mut lm = Landmarks::new(vec![Point::zero(); FACE_MESH_LANDMARKS]);
        lm[FOREHEAD_TOP] = Point::new(100.0, 0.0);
        lm[CHIN] = Point::new(100.0, 145.0);
        lm[FOREHEAD[0]] = Point::new(50.0, 30.0);
        lm[FOREHEAD[1]] = Point::new(150.0, 30.0);
        lm[CHEEKBONES[0]] = Point::new(50.0, 65.0);
        lm[CHEEKBONES[1]] = Point::new(150.0, 65.0);
        lm[JAW[0]] = Point::new(50.0, 125.0);
        lm[JAW[1]] = Point::new(150.0, 125.0);
        lm
    }

    #[test]
    fn analyzes_detected_face() {
        let analyzer = FaceShapeAnalyzer::new(|_: &str| -> Result<Option<Landmarks>> {
            Ok(Some(square_face()))
        });
        let analysis = analyzer.analyze("photo.jpg").unwrap();

        assert_eq!(analysis.shape, FaceShape::Square);
        assert_eq!(analysis.description, FaceShape::Square.description());
        assert_eq!(analysis.confidence_percent(), 92);
    }

    #[test]
    fn missing_face_is_reported() {
        let analyzer =
            FaceShapeAnalyzer::new(|_: &[u8]| -> Result<Option<Landmarks>> { Ok(None) });
        assert!(matches!(
            analyzer.analyze(&[0u8; 4][..]),
            Err(Error::NoFaceDetected)
        ));
    }

    #[test]
    fn provider_errors_propagate() {
        let analyzer = FaceShapeAnalyzer::new(|_: &str| -> Result<Option<Landmarks>> {
            Err(Error::InvalidLandmarks("corrupt".into()))
        });
        assert!(matches!(
            analyzer.analyze("x"),
            Err(Error::InvalidLandmarks(_))
        ));
    }

    #[test]
    fn degenerate_landmarks_are_not_masked() {
        let mut lm = square_face();
        lm[JAW[1]] = lm[JAW[0]];
        assert!(matches!(
            analyze_landmarks(&lm),
            Err(Error::DegenerateMeasurement { .. })
        ));
    }

    #[test]
    fn analysis_serializes_report() {
        let analysis = analyze_landmarks(&square_face()).unwrap();
        let json = serde_json::to_value(&analysis).unwrap();

        assert_eq!(json["shape"], "square");
        assert!(json["recommendations"]["haircuts"].is_array());
        assert_eq!(json["measurements"]["face_height"], 145.0);
    }
}
