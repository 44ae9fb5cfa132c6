//! Rule-based face shape classification.
//!
//! Every shape has an independent set of weighted rules over the
//! [`Measurements`]. A rule that holds adds its weight to the shape's score;
//! several shapes can score on the same face. The highest score wins, ties
//! are broken by [`FaceShape::PRIORITY`], and the winning score is mapped
//! onto a confidence in `[0.55, 1.0]`.

use serde::ser::{Serialize, Serializer};
use serde::Deserialize;

use crate::catalog::{self, Recommendations};
use crate::error::Error;
use crate::measurements::Measurements;

/// The seven face shape categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceShape {
    Oval,
    Round,
    Square,
    Heart,
    Diamond,
    Oblong,
    Triangle,
}

impl FaceShape {
    /// All shapes in declaration order.
    pub const ALL: [FaceShape; 7] = [
        FaceShape::Oval,
        FaceShape::Round,
        FaceShape::Square,
        FaceShape::Heart,
        FaceShape::Diamond,
        FaceShape::Oblong,
        FaceShape::Triangle,
    ];

    /// Tie-break order, most preferred first.
    pub const PRIORITY: [FaceShape; 7] = [
        FaceShape::Oval,
        FaceShape::Heart,
        FaceShape::Diamond,
        FaceShape::Round,
        FaceShape::Square,
        FaceShape::Oblong,
        FaceShape::Triangle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FaceShape::Oval => "oval",
            FaceShape::Round => "round",
            FaceShape::Square => "square",
            FaceShape::Heart => "heart",
            FaceShape::Diamond => "diamond",
            FaceShape::Oblong => "oblong",
            FaceShape::Triangle => "triangle",
        }
    }

    /// Human-readable description of the shape.
    pub fn description(&self) -> &'static str {
        catalog::description(*self)
    }

    /// Styling recommendations for the shape.
    pub fn recommendations(&self) -> &'static Recommendations {
        catalog::recommendations(*self)
    }

    /// Highest score the rule set can award this shape.
    pub fn max_score(&self) -> u8 {
        match self {
            FaceShape::Oval => 4,
            FaceShape::Round | FaceShape::Heart => 6,
            FaceShape::Square | FaceShape::Diamond | FaceShape::Oblong | FaceShape::Triangle => 5,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for FaceShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FaceShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_ascii_lowercase();
        FaceShape::ALL
            .into_iter()
            .find(|shape| shape.as_str() == label)
            .ok_or_else(|| Error::UnknownShape(s.to_string()))
    }
}

/// Largest score any shape can reach; confidence is normalized against it.
pub const MAX_SCORE: u8 = 6;

/// Confidence reported for a zero score.
pub const CONFIDENCE_FLOOR: f64 = 0.55;

/// Confidence gained between a zero score and [`MAX_SCORE`].
pub const CONFIDENCE_SPAN: f64 = 0.45;

/// Accumulated rule score per shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapeScores {
    scores: [u8; 7],
}

impl ShapeScores {
    /// Evaluate every shape's rules against the measurements.
    pub fn evaluate(m: &Measurements) -> Self {
        let mut scores = [0u8; 7];
        for (shape, rules) in RULES {
            scores[shape.index()] = rules(m);
        }
        Self { scores }
    }

    pub fn get(&self, shape: FaceShape) -> u8 {
        self.scores[shape.index()]
    }

    /// `(shape, score)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (FaceShape, u8)> + '_ {
        FaceShape::ALL.into_iter().map(|shape| (shape, self.get(shape)))
    }

    pub fn max_score(&self) -> u8 {
        self.scores.iter().copied().max().unwrap_or(0)
    }

    /// Shapes sharing the top score, in declaration order.
    pub fn leaders(&self) -> Vec<FaceShape> {
        let max = self.max_score();
        self.iter()
            .filter(|&(_, score)| score == max)
            .map(|(shape, _)| shape)
            .collect()
    }

    /// The top-scoring shape, ties broken by [`FaceShape::PRIORITY`].
    pub fn winner(&self) -> FaceShape {
        let leaders = self.leaders();
        FaceShape::PRIORITY
            .into_iter()
            .find(|shape| leaders.contains(shape))
            .unwrap_or(FaceShape::Oval)
    }
}

impl Serialize for ShapeScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Outcome of classifying one face.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Classification {
    pub shape: FaceShape,
    pub confidence: f64,
    pub measurements: Measurements,
    pub scores: ShapeScores,
}

/// Classify a face from its measurements.
///
/// Total and deterministic: equal measurements always give an equal result.
pub fn classify(measurements: &Measurements) -> Classification {
    let scores = ShapeScores::evaluate(measurements);
    Classification {
        shape: scores.winner(),
        confidence: confidence(scores.max_score()),
        measurements: *measurements,
        scores,
    }
}

/// Map a winning score onto `[0.55, 1.0]`.
///
/// Scores above [`MAX_SCORE`] are treated as [`MAX_SCORE`].
pub fn confidence(max_score: u8) -> f64 {
    let score = max_score.min(MAX_SCORE);
    CONFIDENCE_FLOOR + (score as f64 / MAX_SCORE as f64) * CONFIDENCE_SPAN
}

type Rules = fn(&Measurements) -> u8;

const RULES: [(FaceShape, Rules); 7] = [
    (FaceShape::Oval, oval),
    (FaceShape::Round, round),
    (FaceShape::Square, square),
    (FaceShape::Heart, heart),
    (FaceShape::Diamond, diamond),
    (FaceShape::Oblong, oblong),
    (FaceShape::Triangle, triangle),
];

fn weight(cond: bool, points: u8) -> u8 {
    if cond {
        points
    } else {
        0
    }
}

fn within(value: f64, lo: f64, hi: f64) -> bool {
    (lo..=hi).contains(&value)
}

/// `a` exceeds both `b` and `c` by more than `factor`.
fn exceeds_both(a: f64, b: f64, c: f64, factor: f64) -> bool {
    a > b * factor && a > c * factor
}

// Balanced proportions, width about two thirds of height.
fn oval(m: &Measurements) -> u8 {
    weight(within(m.face_width_to_height_ratio, 0.63, 0.77), 2)
        + weight(within(m.forehead_to_jaw_ratio, 0.87, 1.13), 1)
        + weight(within(m.cheekbone_to_jaw_ratio, 0.9, 1.15), 1)
}

// Width close to height, cheekbones widest, short chin.
fn round(m: &Measurements) -> u8 {
    let proportion = if m.face_width_to_height_ratio >= 0.78 {
        3
    } else if m.face_width_to_height_ratio >= 0.73 {
        1
    } else {
        0
    };

    proportion
        + weight(
            exceeds_both(m.cheekbone_width, m.forehead_width, m.jaw_width, 1.05),
            2,
        )
        + weight(m.chin_to_jaw_length < m.lower_face_height * 0.35, 1)
}

// Forehead, cheekbones and jaw about equal, flat chin.
fn square(m: &Measurements) -> u8 {
    weight(
        within(m.forehead_to_jaw_ratio, 0.9, 1.1) && within(m.cheekbone_to_jaw_ratio, 0.9, 1.1),
        3,
    ) + weight(m.chin_to_jaw_length < m.lower_face_height * 0.28, 2)
}

// Wide forehead narrowing to a pointed chin.
fn heart(m: &Measurements) -> u8 {
    let taper = if m.forehead_width > m.jaw_width * 1.15 {
        3
    } else if m.forehead_width > m.jaw_width * 1.08 {
        1
    } else {
        0
    };

    taper
        + weight(m.forehead_width > m.cheekbone_width * 1.05, 2)
        + weight(m.chin_to_jaw_length > m.lower_face_height * 0.38, 1)
}

// Cheekbones clearly wider than forehead and jaw.
fn diamond(m: &Measurements) -> u8 {
    let (c, f, j) = (m.cheekbone_width, m.forehead_width, m.jaw_width);
    let prominence = if exceeds_both(c, f, j, 1.13) {
        3
    } else if exceeds_both(c, f, j, 1.05) {
        1
    } else {
        0
    };

    prominence + weight(c - f > 0.0 && c - j > 0.0, 2)
}

// Long face with even widths.
fn oblong(m: &Measurements) -> u8 {
    let elongation = if m.face_width_to_height_ratio < 0.62 {
        3
    } else if m.face_width_to_height_ratio < 0.67 {
        1
    } else {
        0
    };

    elongation
        + weight(
            within(m.forehead_to_jaw_ratio, 0.85, 1.15)
                && within(m.cheekbone_to_jaw_ratio, 0.85, 1.15),
            2,
        )
}

// Narrow forehead, wide jaw.
fn triangle(m: &Measurements) -> u8 {
    let base = if m.jaw_width > m.forehead_width * 1.15 {
        3
    } else if m.jaw_width > m.forehead_width * 1.05 {
        1
    } else {
        0
    };

    base + weight(m.jaw_width > m.cheekbone_width * 1.05, 2)
}
