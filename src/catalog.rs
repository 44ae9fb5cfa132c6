//! Per-shape descriptions and styling recommendations.

use serde::Serialize;

use crate::classifier::FaceShape;

/// Styling advice for one face shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    pub haircuts: &'static [&'static str],
    pub accessories: &'static [&'static str],
    pub makeup: &'static [&'static str],
}

struct Entry {
    shape: FaceShape,
    description: &'static str,
    recommendations: Recommendations,
}

// Kept in `FaceShape::ALL` order.
static CATALOG: [Entry; 7] = [
    Entry {
        shape: FaceShape::Oval,
        description: "An oval face has balanced proportions and soft contours that taper \
            gently towards the chin. Cheekbones are slightly pronounced and the chin is \
            softly rounded. No single feature dominates, which makes this the most \
            versatile shape for hairstyles and accessories.",
        recommendations: Recommendations {
            haircuts: &[
                "Almost any cut and length",
                "Long hair with light waves",
                "Short pixie cuts",
                "Medium length with layers",
            ],
            accessories: &[
                "Almost any frame shape",
                "Round, square or cat-eye glasses",
                "Earrings of any shape and size",
            ],
            makeup: &[
                "Little correction needed, use light contouring",
                "Emphasize either eyes or lips",
                "Blush on the apples of the cheeks",
            ],
        },
    },
    Entry {
        shape: FaceShape::Round,
        description: "A round face has soft lines and no sharp angles. Width and height \
            are roughly equal. The cheekbones are the widest part of the face, the chin \
            is short and rounded and the jawline is soft.",
        recommendations: Recommendations {
            haircuts: &[
                "Asymmetric cuts that lengthen the face",
                "Long layered cuts",
                "Straight or wavy hair falling below the chin",
                "Avoid very short, voluminous styles",
            ],
            accessories: &[
                "Rectangular or square frames",
                "Avoid round frames, they emphasize roundness",
                "Long earrings that elongate the face",
            ],
            makeup: &[
                "Contour the cheekbones to define them",
                "Lengthening contour along the hairline and under the cheekbones",
                "Blush below the cheekbones rather than on the apples",
            ],
        },
    },
    Entry {
        shape: FaceShape::Square,
        description: "A square face has a wide jawline with clearly defined angles. \
            Forehead, cheekbones and jaw are about the same width, and the chin is broad \
            and flat rather than pointed.",
        recommendations: Recommendations {
            haircuts: &[
                "Soft waves and curls to soften the angles",
                "Long side-swept bangs",
                "Volume around the temples",
                "Medium-length layered cuts",
            ],
            accessories: &[
                "Round or oval frames to soften the angles",
                "Avoid square and rectangular frames",
                "Round earrings or earrings with soft curves",
            ],
            makeup: &[
                "Soften the jaw corners with contour",
                "Blush on the apples of the cheeks",
                "Rounded brow shapes",
            ],
        },
    },
    Entry {
        shape: FaceShape::Heart,
        description: "A heart-shaped face has a wide forehead and pronounced cheekbones \
            that narrow elegantly towards a pointed chin, the narrowest part of the face. \
            The hairline often forms a V or a widow's peak.",
        recommendations: Recommendations {
            haircuts: &[
                "Volume from mid-ear down",
                "Center parting",
                "Long bob or chin-length cuts",
                "Layers that add weight to the lower face",
            ],
            accessories: &[
                "Bottom-heavy or rimless frames",
                "Cat-eye frames to balance upper and lower face",
                "Statement earrings that draw attention to the lower face",
            ],
            makeup: &[
                "Contour temples and forehead to narrow them",
                "Highlight the chin to widen it",
                "Blush across the middle of the cheeks",
            ],
        },
    },
    Entry {
        shape: FaceShape::Diamond,
        description: "A diamond face has prominent cheekbones as its widest part. The \
            forehead and jawline are noticeably narrower and the chin may be pointed or \
            narrow.",
        recommendations: Recommendations {
            haircuts: &[
                "Styles with volume at the chin",
                "Long layered cuts",
                "Bangs to shorten the forehead",
                "Bob that lengthens towards the chin",
            ],
            accessories: &[
                "Oval frames or frames with rounded edges",
                "Top-heavy or rimless frames",
                "Statement earrings that draw attention to the lower face",
            ],
            makeup: &[
                "Contour the cheekbones to soften them",
                "Blush on the apples of the cheeks",
                "Emphasize eyes and lips",
            ],
        },
    },
    Entry {
        shape: FaceShape::Oblong,
        description: "An oblong face is noticeably longer than it is wide. Forehead, \
            cheekbones and jaw are about the same width, giving straight vertical sides, \
            and the chin is rounded.",
        recommendations: Recommendations {
            haircuts: &[
                "Volume at the sides",
                "Medium-length layered cuts",
                "Straight or side bangs to shorten the face",
                "Avoid very long, straight styles",
            ],
            accessories: &[
                "Wide frames with horizontal accents",
                "Round frames to soften the length",
                "Short, voluminous earrings",
            ],
            makeup: &[
                "Contour forehead and chin to shorten the face",
                "Blush applied horizontally across the cheekbones",
                "Wide brow shapes",
            ],
        },
    },
    Entry {
        shape: FaceShape::Triangle,
        description: "A triangular face has a narrow forehead and a wide jawline, often \
            the widest part of the face. Cheekbones may be wide but usually not wider \
            than the jaw, widening gradually from the temples down.",
        recommendations: Recommendations {
            haircuts: &[
                "Volume at the crown and temples",
                "Short or medium-length cuts",
                "Layers with volume on top",
                "Bangs to balance proportions",
            ],
            accessories: &[
                "Frames with an accented upper rim",
                "Cat-eye or aviator frames",
                "Statement earrings that emphasize the upper face",
            ],
            makeup: &[
                "Emphasize eyes and brows",
                "Contour the jawline to narrow it",
                "Blush on and slightly above the cheekbones",
            ],
        },
    },
];

fn entry(shape: FaceShape) -> &'static Entry {
    let entry = &CATALOG[shape as usize];
    debug_assert_eq!(entry.shape, shape);
    entry
}

/// Description text for a face shape.
pub fn description(shape: FaceShape) -> &'static str {
    entry(shape).description
}

/// Styling recommendations for a face shape.
pub fn recommendations(shape: FaceShape) -> &'static Recommendations {
    &entry(shape).recommendations
}
