//! Angle wrapping.
//!
//! | Function | Output Range |
//! |----------|--------------|
//! | [`normalize_angle_rad`] | (-π, π] |
//! | [`normalize_angle_to_positive`] | [0, 2π) |
//!
//! Every coordinate converter in the companion coordinates crate reports
//! longitude-like angles through `atan2`, which already lies in (-π, π];
//! these helpers bring user-supplied or accumulated angles into the same
//! ranges.

use crate::constants::{PI, TWOPI};

/// Wraps an angle in radians into (-π, π].
#[inline]
pub fn normalize_angle_rad(angle: f64) -> f64 {
    let mut normalized = angle % TWOPI;
    if normalized > PI {
        normalized -= TWOPI;
    } else if normalized <= -PI {
        normalized += TWOPI;
    }
    normalized
}

/// Wraps an angle in radians into [0, 2π).
#[inline]
pub fn normalize_angle_to_positive(angle: f64) -> f64 {
    let mut a = angle % TWOPI;
    if a < 0.0 {
        a += TWOPI;
    }
    // -tiny % 2π + 2π rounds up to exactly 2π
    if a >= TWOPI {
        a = 0.0;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_angle_rad() {
        assert_eq!(normalize_angle_rad(0.0), 0.0);
        assert_eq!(normalize_angle_rad(PI), PI);
        assert_eq!(normalize_angle_rad(-PI), PI);
        assert!(normalize_angle_rad(TWOPI).abs() < 1e-15);
        assert!((normalize_angle_rad(3.0 * PI) - PI).abs() < 1e-15);
        assert!((normalize_angle_rad(-0.5 * PI - TWOPI) + 0.5 * PI).abs() < 1e-15);
    }

    #[test]
    fn test_normalize_angle_to_positive() {
        assert_eq!(normalize_angle_to_positive(0.0), 0.0);
        assert_eq!(normalize_angle_to_positive(-PI), PI);
        assert!((normalize_angle_to_positive(-0.5 * PI) - 1.5 * PI).abs() < 1e-15);
        assert!((normalize_angle_to_positive(TWOPI + 1.0) - 1.0).abs() < 1e-15);

        let wrapped = normalize_angle_to_positive(-1e-20);
        assert!((0.0..TWOPI).contains(&wrapped));
    }
}
