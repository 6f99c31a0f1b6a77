//! Small numeric helpers shared by motion, pen and operator blocks.

use rand::Rng;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}

/// Clamp `n` into `[min, max]`. A NaN in any argument gives NaN.
pub fn clamp(n: f64, min: f64, max: f64) -> f64 {
    if n.is_nan() || min.is_nan() || max.is_nan() {
        return f64::NAN;
    }
    n.max(min).min(max)
}

/// Keep a number between two limits, wrapping the excess around.
///
/// `wrap_clamp(7.0, 1.0, 5.0) == 2.0`, `wrap_clamp(0.0, 1.0, 5.0) == 5.0`.
pub fn wrap_clamp(n: f64, min: f64, max: f64) -> f64 {
    let range = (max - min) + 1.0;
    n - ((n - min) / range).floor() * range
}

/// Tangent of an angle in degrees, exact infinities at the asymptotes and
/// rounded to 10 decimal places elsewhere.
pub fn tan(angle: f64) -> f64 {
    let angle = angle % 360.0;
    if angle == 90.0 || angle == -270.0 {
        f64::INFINITY
    } else if angle == -90.0 || angle == 270.0 {
        f64::NEG_INFINITY
    } else {
        (deg_to_rad(angle).tan() * 1e10).round() / 1e10
    }
}

/// For each element, its position in the ascending sort of `elts`.
/// E.g. `[5, 19, 13, 1]` gives `[1, 3, 2, 0]`.
pub fn reduced_sort_ordering(elts: &[f64]) -> Vec<usize> {
    let mut sorted = elts.to_vec();
    sorted.sort_by(f64::total_cmp);
    elts.iter()
        .map(|e| sorted.iter().position(|s| s.total_cmp(e).is_eq()).unwrap_or_default())
        .collect()
}

/// Random integer in `[lower, upper]` that is never `excluded`.
/// `excluded` must lie inside the range.
pub fn inclusive_rand_int_without<R: Rng + ?Sized>(lower: i64, upper: i64, excluded: i64, rng: &mut R) -> i64 {
    // upper - lower is already the option count minus one
    let possible_options = upper - lower;
    let rand_int = if possible_options > 0 {
        lower + rng.gen_range(0..possible_options)
    } else {
        lower
    };
    if rand_int >= excluded { rand_int + 1 } else { rand_int }
}

/// Map `i` from `[i_min, i_max]` onto `[o_min, o_max]`.
pub fn scale(i: f64, i_min: f64, i_max: f64, o_min: f64, o_max: f64) -> f64 {
    let p = (i - i_min) / (i_max - i_min);
    p * (o_max - o_min) + o_min
}
