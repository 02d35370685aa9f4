//! Per-frame pattern computation, kept free of any drawing backend.

use crate::color::{ColorConfig, Rgb};
use crate::geometry::{spaced_dots, Circle, Dot};

/// One colored line of the pattern, between two dots on the circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: Dot,
    pub to: Dot,
    pub color: Rgb,
}

/// Index of the dot that dot `i` connects to: floor(multiplier * i) mod dots.
///
/// The modulo is floored so a negative product still lands in `0..dots`.
pub fn target_index(multiplier: f64, i: u32, dots: u32) -> usize {
    debug_assert!(dots > 0, "dot count must be positive");
    ((multiplier * i as f64).floor() as i64).rem_euclid(dots as i64) as usize
}

/// Compute the full segment list for one frame of the pattern.
pub fn compute_frame(
    width: u32,
    height: u32,
    dots: u32,
    multiplier: f64,
    colors: &ColorConfig,
) -> Vec<Segment> {
    let circle = Circle::inscribe(width, height);
    let anchors = spaced_dots(dots, &circle);

    (0..dots)
        .map(|i| Segment {
            from: anchors[i as usize],
            to: anchors[target_index(multiplier, i, dots)],
            color: colors.line_color(i, dots),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const COLORS: ColorConfig = ColorConfig {
        saturation: 1.0,
        lightness: 0.5,
        rainbow: false,
    };

    #[rstest]
    #[case(2.5, 10, 200, 25)]
    #[case(0.0, 7, 200, 0)]
    #[case(2.0, 100, 200, 0)]
    #[case(3.0, 67, 200, 1)]
    #[case(1.0, 0, 1, 0)]
    fn connects_to_the_times_table_target(
        #[case] multiplier: f64,
        #[case] i: u32,
        #[case] dots: u32,
        #[case] expected: usize,
    ) {
        assert_eq!(target_index(multiplier, i, dots), expected);
    }

    #[test]
    fn negative_products_stay_in_range() {
        assert_eq!(target_index(-0.5, 3, 10), 8);
        for i in 0..10 {
            assert!(target_index(-1.75, i, 10) < 10);
        }
    }

    #[test]
    fn frame_is_a_pure_function_of_its_inputs() {
        let first = compute_frame(640, 480, 200, 17.25, &COLORS);
        let second = compute_frame(640, 480, 200, 17.25, &COLORS);
        assert_eq!(first, second);
    }

    #[test]
    fn every_dot_gets_one_segment() {
        let frame = compute_frame(640, 480, 200, 2.0, &COLORS);
        assert_eq!(frame.len(), 200);
    }

    #[test]
    fn single_dot_degenerates_to_a_self_segment() {
        let frame = compute_frame(640, 480, 1, 5.0, &COLORS);
        assert_eq!(frame.len(), 1);
        assert_eq!(frame[0].from, frame[0].to);
    }

    #[test]
    fn zero_multiplier_fans_into_dot_zero() {
        let frame = compute_frame(640, 480, 16, 0.0, &COLORS);
        let east = frame[0].from;
        assert!(frame.iter().all(|segment| segment.to == east));
    }
}
