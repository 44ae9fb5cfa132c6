//! Facial measurements derived from reference landmarks.
//!
//! This module turns a landmark set into the widths, heights and ratios the
//! shape classifier reasons about.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::landmarks::{CHEEKBONES, CHIN, FOREHEAD, FOREHEAD_TOP, JAW, MIN_LANDMARKS};
use crate::types::{Landmarks, Point};

/// Linear measurements and ratios of a face.
///
/// All widths and heights are Euclidean distances in the landmark
/// coordinate space (pixels for denormalized detector output).
///
/// Deserialization goes through [`Measurements::from_lengths`]: ratios are
/// recomputed from the lengths and degenerate records are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Lengths")]
pub struct Measurements {
    /// Distance between the two forehead edge points
    pub forehead_width: f64,

    /// Distance between the two cheekbone points
    pub cheekbone_width: f64,

    /// Distance between the two jaw corners
    pub jaw_width: f64,

    /// Distance from the top of the forehead to the chin
    pub face_height: f64,

    /// Distance from the cheekbone midpoint to the chin
    pub lower_face_height: f64,

    /// Distance from the chin to the jaw corner midpoint
    pub chin_to_jaw_length: f64,

    /// cheekbone_width / face_height
    pub face_width_to_height_ratio: f64,

    /// forehead_width / jaw_width
    pub forehead_to_jaw_ratio: f64,

    /// cheekbone_width / jaw_width
    pub cheekbone_to_jaw_ratio: f64,
}

impl Measurements {
    /// Build a record from the six linear measurements, deriving the ratios.
    ///
    /// Fails when `face_height` or `jaw_width` is zero, or when any input is
    /// not a finite non-negative number.
    pub fn from_lengths(
        forehead_width: f64,
        cheekbone_width: f64,
        jaw_width: f64,
        face_height: f64,
        lower_face_height: f64,
        chin_to_jaw_length: f64,
    ) -> Result<Self> {
        let lengths = [
            ("forehead_width", forehead_width),
            ("cheekbone_width", cheekbone_width),
            ("jaw_width", jaw_width),
            ("face_height", face_height),
            ("lower_face_height", lower_face_height),
            ("chin_to_jaw_length", chin_to_jaw_length),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::degenerate(format!("{name} is {value}")));
            }
        }

        Ok(Self {
            forehead_width,
            cheekbone_width,
            jaw_width,
            face_height,
            lower_face_height,
            chin_to_jaw_length,
            face_width_to_height_ratio: ratio(cheekbone_width, face_height, "face_height")?,
            forehead_to_jaw_ratio: ratio(forehead_width, jaw_width, "jaw_width")?,
            cheekbone_to_jaw_ratio: ratio(cheekbone_width, jaw_width, "jaw_width")?,
        })
    }

    /// Measure a face from its landmark set. See [`measure`].
    pub fn from_landmarks(landmarks: &Landmarks) -> Result<Self> {
        if landmarks.num_landmarks() < MIN_LANDMARKS {
            return Err(Error::degenerate(format!(
                "landmark set has {} points, at least {} required",
                landmarks.num_landmarks(),
                MIN_LANDMARKS
            )));
        }

        let forehead = pair(landmarks, FOREHEAD)?;
        let cheekbones = pair(landmarks, CHEEKBONES)?;
        let jaw = pair(landmarks, JAW)?;
        let chin = point(landmarks, CHIN)?;
        let forehead_top = point(landmarks, FOREHEAD_TOP)?;

        Self::from_lengths(
            distance(&forehead[0], &forehead[1]),
            distance(&cheekbones[0], &cheekbones[1]),
            distance(&jaw[0], &jaw[1]),
            distance(&forehead_top, &chin),
            distance(&cheekbones[0].midpoint(&cheekbones[1]), &chin),
            distance(&chin, &jaw[0].midpoint(&jaw[1])),
        )
    }
}

/// The linear measurements of a record, as stored on disk.
#[derive(Deserialize)]
struct Lengths {
    forehead_width: f64,
    cheekbone_width: f64,
    jaw_width: f64,
    face_height: f64,
    lower_face_height: f64,
    chin_to_jaw_length: f64,
}

impl TryFrom<Lengths> for Measurements {
    type Error = Error;

    fn try_from(l: Lengths) -> Result<Self> {
        Measurements::from_lengths(
            l.forehead_width,
            l.cheekbone_width,
            l.jaw_width,
            l.face_height,
            l.lower_face_height,
            l.chin_to_jaw_length,
        )
    }
}

/// Euclidean distance between two points.
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    p1.distance(p2)
}

/// Compute the measurement record of a landmark set.
///
/// Fails with [`Error::DegenerateMeasurement`] when the set is missing a
/// reference index, a reference point is not finite, or a ratio denominator
/// (face height, jaw width) is zero.
pub fn measure(landmarks: &Landmarks) -> Result<Measurements> {
    Measurements::from_landmarks(landmarks)
}

/// Quotient of two distances, refusing a zero denominator.
fn ratio(numerator: f64, denominator: f64, denominator_name: &str) -> Result<f64> {
    if denominator > 0.0 {
        Ok(numerator / denominator)
    } else {
        Err(Error::degenerate(format!("{denominator_name} is zero")))
    }
}

fn point(landmarks: &Landmarks, idx: usize) -> Result<Point> {
    let p = landmarks
        .get(idx)
        .copied()
        .ok_or_else(|| Error::degenerate(format!("missing landmark {idx}")))?;
    if !p.is_finite() {
        return Err(Error::degenerate(format!(
            "landmark {idx} is not finite: ({}, {})",
            p.x, p.y
        )));
    }
    Ok(p)
}

fn pair(landmarks: &Landmarks, indices: [usize; 2]) -> Result<[Point; 2]> {
    Ok([point(landmarks, indices[0])?, point(landmarks, indices[1])?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::{FACE_MESH_LANDMARKS, FACE_OVAL};

    /// Landmarks with every reference point placed for a symmetric face.
    fn face(forehead: f64, cheekbone: f64, jaw: f64, height: f64) -> Landmarks {
        let mut lm = Landmarks::new(vec![Point::zero(); FACE_MESH_LANDMARKS]);
        let cx = 200.0;
        lm[FOREHEAD_TOP] = Point::new(cx, 0.0);
        lm[CHIN] = Point::new(cx, height);
        lm[FOREHEAD[0]] = Point::new(cx - forehead / 2.0, 0.2 * height);
        lm[FOREHEAD[1]] = Point::new(cx + forehead / 2.0, 0.2 * height);
        lm[CHEEKBONES[0]] = Point::new(cx - cheekbone / 2.0, 0.5 * height);
        lm[CHEEKBONES[1]] = Point::new(cx + cheekbone / 2.0, 0.5 * height);
        lm[JAW[0]] = Point::new(cx - jaw / 2.0, 0.8 * height);
        lm[JAW[1]] = Point::new(cx + jaw / 2.0, 0.8 * height);
        lm[FACE_OVAL[1]] = Point::new(cx - cheekbone / 2.0, 0.5 * height);
        lm[FACE_OVAL[3]] = Point::new(cx + cheekbone / 2.0, 0.5 * height);
        lm
    }

    #[test]
    fn test_distance() {
        assert!((distance(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0)) - 5.0).abs() < 1e-12);
        assert_eq!(distance(&Point::new(7.0, 7.0), &Point::new(7.0, 7.0)), 0.0);
    }

    #[test]
    fn measures_symmetric_face() {
        let m = measure(&face(120.0, 130.0, 100.0, 200.0)).unwrap();

        assert!((m.forehead_width - 120.0).abs() < 1e-9);
        assert!((m.cheekbone_width - 130.0).abs() < 1e-9);
        assert!((m.jaw_width - 100.0).abs() < 1e-9);
        assert!((m.face_height - 200.0).abs() < 1e-9);
        assert!((m.lower_face_height - 100.0).abs() < 1e-9);
        assert!((m.chin_to_jaw_length - 40.0).abs() < 1e-9);
        assert!((m.face_width_to_height_ratio - 0.65).abs() < 1e-9);
        assert!((m.forehead_to_jaw_ratio - 1.2).abs() < 1e-9);
        assert!((m.cheekbone_to_jaw_ratio - 1.3).abs() < 1e-9);
    }

    #[test]
    fn coincident_jaw_points_are_degenerate() {
        let mut lm = face(120.0, 130.0, 100.0, 200.0);
        lm[JAW[1]] = lm[JAW[0]];

        assert!(matches!(
            measure(&lm),
            Err(Error::DegenerateMeasurement { .. })
        ));
    }

    #[test]
    fn zero_face_height_is_degenerate() {
        let mut lm = face(120.0, 130.0, 100.0, 200.0);
        lm[CHIN] = lm[FOREHEAD_TOP];

        assert!(matches!(
            measure(&lm),
            Err(Error::DegenerateMeasurement { .. })
        ));
    }

    #[test]
    fn short_landmark_set_is_degenerate() {
        let lm = Landmarks::new(vec![Point::zero(); MIN_LANDMARKS - 1]);
        let err = measure(&lm).unwrap_err();
        assert!(matches!(err, Error::DegenerateMeasurement { .. }));
        assert!(err.to_string().contains("454"));
    }

    #[test]
    fn non_finite_reference_point_is_degenerate() {
        let mut lm = face(120.0, 130.0, 100.0, 200.0);
        lm[CHEEKBONES[1]] = Point::new(f64::NAN, 10.0);

        assert!(matches!(
            measure(&lm),
            Err(Error::DegenerateMeasurement { .. })
        ));
    }

    #[test]
    fn unreferenced_points_are_ignored() {
        let mut lm = face(120.0, 130.0, 100.0, 200.0);
        let before = measure(&lm).unwrap();
        lm[0] = Point::new(f64::INFINITY, -1e9);
        lm[467] = Point::new(5.0, 5.0);
        assert_eq!(measure(&lm).unwrap(), before);
    }

    #[test]
    fn from_lengths_rejects_zero_denominators() {
        assert!(Measurements::from_lengths(1.0, 1.0, 0.0, 1.0, 1.0, 1.0).is_err());
        assert!(Measurements::from_lengths(1.0, 1.0, 1.0, 0.0, 1.0, 1.0).is_err());
        assert!(Measurements::from_lengths(1.0, -1.0, 1.0, 1.0, 1.0, 1.0).is_err());
        assert!(Measurements::from_lengths(1.0, 1.0, 1.0, 1.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn serializes_with_snake_case_names() {
        let m = Measurements::from_lengths(100.0, 100.0, 100.0, 145.0, 60.0, 10.0).unwrap();
        let json = serde_json::to_value(m).unwrap();
        assert_eq!(json["forehead_width"], 100.0);
        assert_eq!(json["face_height"], 145.0);
        assert_eq!(json["chin_to_jaw_length"], 10.0);
        assert_eq!(json["face_width_to_height_ratio"], 100.0 / 145.0);
        assert_eq!(json.as_object().unwrap().len(), 9);

        let back: Measurements = serde_json::from_value(json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn deserializing_degenerate_record_fails() {
        let json = r#"{
            "forehead_width": 100.0, "cheekbone_width": 100.0, "jaw_width": 0.0,
            "face_height": 0.0, "lower_face_height": -5.0, "chin_to_jaw_length": 10.0,
            "face_width_to_height_ratio": 0.7, "forehead_to_jaw_ratio": 1.0,
            "cheekbone_to_jaw_ratio": 1.0
        }"#;
        let err = serde_json::from_str::<Measurements>(json).unwrap_err();
        assert!(err.to_string().contains("Degenerate measurement"), "{err}");

        let zero_jaw = r#"{
            "forehead_width": 100.0, "cheekbone_width": 100.0, "jaw_width": 0.0,
            "face_height": 145.0, "lower_face_height": 80.0, "chin_to_jaw_length": 20.0
        }"#;
        let err = serde_json::from_str::<Measurements>(zero_jaw).unwrap_err();
        assert!(err.to_string().contains("jaw_width is zero"), "{err}");
    }

    #[test]
    fn deserializing_recomputes_ratios() {
        let json = r#"{
            "forehead_width": 120.0, "cheekbone_width": 118.0, "jaw_width": 90.0,
            "face_height": 170.0, "lower_face_height": 85.0, "chin_to_jaw_length": 42.5,
            "face_width_to_height_ratio": 9.0, "forehead_to_jaw_ratio": 9.0,
            "cheekbone_to_jaw_ratio": 9.0
        }"#;
        let m: Measurements = serde_json::from_str(json).unwrap();
        assert_eq!(m.face_width_to_height_ratio, 118.0 / 170.0);
        assert_eq!(m.forehead_to_jaw_ratio, 120.0 / 90.0);
        assert_eq!(m.cheekbone_to_jaw_ratio, 118.0 / 90.0);
    }
}
