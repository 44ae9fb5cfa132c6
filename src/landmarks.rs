//! Reference landmark indices used for face shape measurements.
//!
//! Indices follow the 468-point MediaPipe FaceMesh layout.

/// Face oval reference points: chin, right face edge, top of forehead,
/// left face edge.
pub const FACE_OVAL: [usize; 4] = [10, 152, 234, 454];

/// Right and left cheekbone.
pub const CHEEKBONES: [usize; 2] = [117, 346];

/// Right and left jaw corner.
pub const JAW: [usize; 2] = [172, 397];

/// Right and left forehead edge.
pub const FOREHEAD: [usize; 2] = [67, 296];

/// Position of the chin inside [`FACE_OVAL`].
pub const CHIN: usize = FACE_OVAL[0];

/// Position of the top of the forehead inside [`FACE_OVAL`].
pub const FOREHEAD_TOP: usize = FACE_OVAL[2];

/// Minimum number of points a landmark set needs for measurement.
pub const MIN_LANDMARKS: usize = max_index() + 1;

/// Number of points produced by the FaceMesh detector.
pub const FACE_MESH_LANDMARKS: usize = 468;

const fn max_index() -> usize {
    let groups: [&[usize]; 4] = [&FACE_OVAL, &CHEEKBONES, &JAW, &FOREHEAD];
    let mut max = 0;
    let mut g = 0;
    while g < groups.len() {
        let mut i = 0;
        while i < groups[g].len() {
            if groups[g][i] > max {
                max = groups[g][i];
            }
            i += 1;
        }
        g += 1;
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_landmarks_covers_every_index() {
        assert_eq!(MIN_LANDMARKS, 455);
        let all = FACE_OVAL.iter().chain(&CHEEKBONES).chain(&JAW).chain(&FOREHEAD);
        assert!(all.clone().all(|&i| i < MIN_LANDMARKS));
        assert_eq!(all.count(), 10);
        assert!(MIN_LANDMARKS <= FACE_MESH_LANDMARKS);
    }

    #[test]
    fn named_positions() {
        assert_eq!(CHIN, 10);
        assert_eq!(FOREHEAD_TOP, 234);
    }
}
