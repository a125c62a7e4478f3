//! 快速近似数学函数

use std::f32::consts::FRAC_PI_4;

const COEFF_1: f32 = FRAC_PI_4;
const COEFF_2: f32 = 3.0 * FRAC_PI_4;

/// `atan2(y, x)` 的分段有理近似
///
/// 最大误差约 0.071 弧度（约 4°）。原点处返回 0.0，不产生 NaN。
#[inline]
pub fn atan2(y: f32, x: f32) -> f32 {
    let abs_y = y.abs();

    let angle = if x >= 0.0 {
        let denom = x + abs_y;
        if denom == 0.0 {
            return 0.0;
        }
        let r = (x - abs_y) / denom;
        COEFF_1 - COEFF_1 * r
    } else {
        // x < 0 时 |y| - x > 0
        let r = (x + abs_y) / (abs_y - x);
        COEFF_2 - COEFF_1 * r
    };

    if y < 0.0 {
        -angle
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    const TOLERANCE: f32 = 0.075;

    #[test]
    fn test_axis_directions() {
        assert!((atan2(0.0, 1.0) - 0.0).abs() < 1e-6);
        assert!((atan2(1.0, 0.0) - PI / 2.0).abs() < 1e-6);
        assert!((atan2(0.0, -1.0) - PI).abs() < 1e-6);
        assert!((atan2(-1.0, 0.0) + PI / 2.0).abs() < 1e-6);
        assert!((atan2(1.0, 1.0) - PI / 4.0).abs() < 1e-6);
        assert!((atan2(-1.0, -1.0) + 3.0 * PI / 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_origin_is_finite() {
        assert_eq!(atan2(0.0, 0.0), 0.0);
        assert_eq!(atan2(-0.0, -0.0), 0.0);
        assert!(atan2(0.0, -0.0).is_finite());
    }

    #[test]
    fn test_grid_accuracy() {
        for i in -20..=20 {
            for j in -20..=20 {
                if i == 0 && j == 0 {
                    continue;
                }
                let x = i as f32 / 20.0;
                let y = j as f32 / 20.0;
                let error = (atan2(y, x) - y.atan2(x)).abs();
                assert!(
                    error <= TOLERANCE,
                    "atan2({}, {}) error {} exceeds tolerance",
                    y,
                    x,
                    error
                );
            }
        }
    }

    proptest! {
        #[test]
        fn test_atan2_accuracy(x in -1.0f32..1.0, y in -1.0f32..1.0) {
            prop_assume!(x.abs() > 1e-3 || y.abs() > 1e-3);
            let error = (atan2(y, x) - y.atan2(x)).abs();
            prop_assert!(error <= TOLERANCE);
        }
    }
}
