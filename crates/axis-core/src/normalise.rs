// File: crates/axis-core/src/normalise.rs
// Summary: Loose-label axis normalisation (nice axis origin, step and range).

use crate::error::NormaliseError;
use crate::nice::{
    ceil_to_precision, floor_to_precision, nice_number, round_half_up, round_to_precision,
};

/// Tuning knobs for [`normalise`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormaliserOptions {
    /// Force the axis to start at this value instead of the computed origin.
    pub start_value: Option<f64>,
    /// Number of axis labels to aim for.
    pub tick_count: usize,
}

impl Default for NormaliserOptions {
    fn default() -> Self {
        Self { start_value: None, tick_count: 10 }
    }
}

/// Axis geometry derived from a sample set; all fields are in data units.
///
/// Immutable once computed. A new render recomputes from scratch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalisation {
    /// Axis minimum (bottom of the graph).
    pub start_value: f64,
    /// Offset of the zero line, in label-step units.
    pub zero_value: f64,
    /// Span covered by the axis.
    pub range: f64,
    /// Distance between labels.
    pub step: f64,
}

impl Normalisation {
    /// Number of labels needed to cover `range` at `step` spacing.
    pub fn label_count(&self) -> usize {
        (self.range / self.step).round() as usize
    }

    /// The label values above `start_value`: one per step, each cumulative
    /// value rounded to three decimal places the way labels are printed.
    pub fn value_labels(&self) -> Vec<f64> {
        let count = self.label_count();
        let mut labels = Vec::with_capacity(count);
        let mut label = self.start_value;
        for _ in 0..count {
            label = round_to_precision(label + self.step, 3);
            labels.push(label);
        }
        labels
    }

    /// The value of the topmost label.
    pub fn top_value(&self) -> f64 {
        self.value_labels().last().copied().unwrap_or(self.start_value)
    }
}

/// Compute loose-label axis geometry for a sample set.
///
/// Picks a human-friendly axis minimum, step size and range covering the
/// data, with half-step headroom on both ends. Headroom never pushes an
/// all-negative axis above zero, and never drags an all-positive axis
/// below zero. A forced `start_value` always wins as the final
/// `start_value`/`zero_value`; only `range` and `step` come from the fit.
pub fn normalise(
    samples: &[f64],
    options: &NormaliserOptions,
) -> Result<Normalisation, NormaliseError> {
    if samples.is_empty() {
        return Err(NormaliseError::EmptyInput);
    }
    if let Some((index, &value)) = samples.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(NormaliseError::NonFiniteInput { index, value });
    }
    if options.tick_count < 2 {
        return Err(NormaliseError::BadTickCount(options.tick_count));
    }

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // All-zero data: a unit axis, nothing to fit.
    if min == 0.0 && max == 0.0 {
        let origin = options.start_value.unwrap_or(0.0);
        return Ok(Normalisation { start_value: origin, zero_value: origin, range: 1.0, step: 1.0 });
    }

    // A non-negative data minimum lets the forced start stand in as the
    // base of the range computation.
    let base = match options.start_value {
        Some(forced) if min >= 0.0 => forced,
        _ => min,
    };

    let mut out = loose_labels(base, max, min, options.tick_count)?;
    if let Some(forced) = options.start_value {
        out.start_value = forced;
        out.zero_value = forced;
    }
    Ok(out)
}

// Loose-label fit after Heckbert's "nice numbers for graph labels".
// `min` is the range base (possibly a forced start value); `data_min` is
// the true data minimum, which drives the headroom clamp and the origin
// walk-down. `max` is always the true data maximum.
fn loose_labels(
    min: f64,
    max: f64,
    data_min: f64,
    tick_count: usize,
) -> Result<Normalisation, NormaliseError> {
    let raw_range = if min == max {
        nice_number(max.abs(), false)
    } else {
        nice_number(max - min, false)
    };
    let d = nice_number(raw_range / (tick_count - 1) as f64, true);
    if !d.is_finite() || d <= 0.0 {
        return Err(NormaliseError::StepInvariant { step: d });
    }

    // Decimal places needed to represent the step without rounding it away.
    let precision = (-d.log10().floor()).max(0.0) as i32;

    let mut graphmin = floor_to_precision(min / d, precision) * d;
    let mut graphmax = ceil_to_precision(max / d, precision) * d;
    let margin = round_to_precision(nice_number(0.5 * d, true), precision);
    let step = round_to_precision(d, precision);
    if step <= 0.0 {
        return Err(NormaliseError::StepInvariant { step });
    }

    // Headroom on top; an all-negative axis must not cross zero.
    if max <= 0.0 {
        graphmax = (graphmax + margin).min(0.0);
    } else {
        graphmax += margin;
    }

    // Headroom at the bottom; an all-positive axis must not dip below zero.
    if data_min < 0.0 {
        graphmin -= margin;
    } else {
        graphmin = (graphmin - margin).max(0.0);
    }

    // Align the origin with a label boundary.
    if min != max {
        graphmin = round_to_origin(graphmin, data_min, step, 1);
    }

    let range = round_to_precision(
        (ceil_to_precision(graphmax, precision) - floor_to_precision(graphmin, precision)).abs(),
        precision,
    );
    let start_value = floor_to_precision(graphmin, precision);
    let zero_value = round_to_precision(graphmin.abs() / step, precision);

    Ok(Normalisation { start_value, zero_value, range, step })
}

// Walk `value` down in whole steps until rounding at 10^offset lands at or
// below the data minimum. Terminates because each pass subtracts a fixed
// positive step while `min_bound` is constant.
fn round_to_origin(value: f64, min_bound: f64, step: f64, offset: i32) -> f64 {
    let multiplier = 10f64.powi(-offset);
    let mut value = value;
    loop {
        let rounded = round_half_up(value * multiplier) / multiplier;
        if rounded <= min_bound {
            return rounded;
        }
        value -= step;
    }
}
