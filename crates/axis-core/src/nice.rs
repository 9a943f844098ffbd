// File: crates/axis-core/src/nice.rs
// Summary: "Nice number" rounding and fixed-precision float helpers.

/// Round `x` to a nice value: one of {1, 2, 5, 10} scaled by a power of ten.
///
/// With `round = true` the nearest nice value is chosen (used for step
/// sizes); with `round = false` the smallest nice value covering `x` is
/// chosen (used for the overall range so the axis never under-covers).
/// `x` must be positive.
pub fn nice_number(x: f64, round: bool) -> f64 {
    let exp = x.log10().floor();
    // 10^exp drifts for negative exponents (e.g. 10^-2 != 0.01 exactly),
    // so snap it back to |exp| decimal places.
    let p = if exp < 0.0 {
        round_to_precision(10f64.powf(exp), -exp as i32)
    } else {
        10f64.powf(exp)
    };
    let f = x / p;

    let nf = if round {
        if f < 1.5 {
            1.0
        } else if f < 3.0 {
            2.0
        } else if f < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if f <= 1.0 {
        1.0
    } else if f <= 2.0 {
        2.0
    } else if f <= 5.0 {
        5.0
    } else {
        10.0
    };

    nf * p
}

/// Round `x` to `precision` decimal places. Halves round toward positive
/// infinity, so -2.5 becomes -2 at precision 0.
#[inline]
pub fn round_to_precision(x: f64, precision: i32) -> f64 {
    let exp = 10f64.powi(precision);
    round_half_up(x * exp) / exp
}

/// Round to the nearest integer, halves toward positive infinity.
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Floor `x` at `precision` decimal places.
#[inline]
pub fn floor_to_precision(x: f64, precision: i32) -> f64 {
    let exp = 10f64.powi(precision);
    (x * exp).floor() / exp
}

/// Ceil `x` at `precision` decimal places.
#[inline]
pub fn ceil_to_precision(x: f64, precision: i32) -> f64 {
    let exp = 10f64.powi(precision);
    (x * exp).ceil() / exp
}
