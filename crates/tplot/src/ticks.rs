//! Tick selection
//!
//! Chooses "nice" axis tick values: evenly spaced by a step from
//! `{1, 2, 5} x 10^k`, starting at or below the domain minimum and ending at
//! or above the domain maximum.

use crate::error::{PlotError, PlotResult};

/// Step mantissas, in increasing order
const MANTISSAS: [i64; 3] = [1, 2, 5];

/// Domains narrower than this fraction of their magnitude cannot be ticked
const MIN_RELATIVE_SPAN: f64 = 1e-12;

/// Quotients this close to an integer are treated as that integer
const SNAP_EPSILON: f64 = 1e-9;

/// Largest tick index magnitude; every index up to it is exact in an `f64`
const MAX_INDEX: f64 = (1u64 << 53) as f64;

/// A tick step `mantissa x 10^exponent`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickStep {
    pub mantissa: i64,
    pub exponent: i32,
}

impl TickStep {
    /// The step as a float
    pub fn value(self) -> f64 {
        self.scaled(1)
    }

    /// `index` steps from zero, computed with a single rounding
    fn scaled(self, index: i64) -> f64 {
        let units = (index * self.mantissa) as f64;
        if self.exponent >= 0 {
            units * 10f64.powi(self.exponent)
        } else {
            units / 10f64.powi(-self.exponent)
        }
    }

    /// Index range `[first, last]` of the multiples bracketing `[min, max]`.
    ///
    /// `None` when the step is not representable at this domain's magnitude.
    fn bracket(self, min: f64, max: f64) -> Option<(i64, i64)> {
        let step = self.value();
        if !step.is_finite() || step <= 0.0 {
            return None;
        }
        let first = snap(min / step).floor();
        let last = snap(max / step).ceil();
        if !(first.abs() <= MAX_INDEX && last.abs() <= MAX_INDEX) {
            return None;
        }
        Some((first as i64, last as i64))
    }

    /// Number of ticks bracketing `[min, max]`
    fn count(self, min: f64, max: f64) -> Option<i64> {
        let (first, last) = self.bracket(min, max)?;
        last.checked_sub(first)?.checked_add(1)
    }
}

fn snap(q: f64) -> f64 {
    let nearest = q.round();
    if (q - nearest).abs() < SNAP_EPSILON {
        nearest
    } else {
        q
    }
}

/// Pick ascending tick values covering `[min, max]` with at most `most`
/// ticks.
///
/// The step is the smallest `{1, 2, 5} x 10^k` whose bracketing multiples
/// number no more than `most`. A budget below two is raised to two. Only a
/// budget of two over a domain straddling zero cannot be met; the fewest
/// possible ticks (three) are returned then.
///
/// `min == max` yields the single tick `[min]`.
pub fn best_ticks(min: f64, max: f64, most: usize) -> PlotResult<Vec<f64>> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(PlotError::DegenerateDomain { min, max });
    }
    if min == max {
        return Ok(vec![min]);
    }

    let span = max - min;
    if !span.is_finite() {
        return Err(PlotError::DegenerateDomain { min, max });
    }
    let magnitude = min.abs().max(max.abs());
    if span <= magnitude * MIN_RELATIVE_SPAN {
        return Err(PlotError::DegenerateDomain { min, max });
    }

    let budget = i64::try_from(most.max(2)).unwrap_or(i64::MAX);
    let Some(step) = choose_step(min, max, span, budget) else {
        return Err(PlotError::DegenerateDomain { min, max });
    };
    let Some((first, last)) = step.bracket(min, max) else {
        return Err(PlotError::DegenerateDomain { min, max });
    };

    tracing::trace!(
        target: "tplot::ticks",
        min,
        max,
        most,
        step = step.value(),
        count = last - first + 1,
        "ticks chosen"
    );

    let ticks: Vec<f64> = (first..=last).map(|i| step.scaled(i)).collect();
    if ticks.iter().any(|t| !t.is_finite()) {
        return Err(PlotError::DegenerateDomain { min, max });
    }
    Ok(ticks)
}

/// Smallest step meeting `budget`, or the step giving the fewest ticks.
///
/// `None` when no candidate step is representable.
fn choose_step(min: f64, max: f64, span: f64, budget: i64) -> Option<TickStep> {
    // Steps below span / budget always overflow the budget; a step of at
    // least `span` always brackets the domain in three ticks or fewer.
    let low = (span / budget as f64).log10().floor() as i32 - 1;
    let high = span.log10().ceil() as i32 + 1;

    let mut fewest: Option<(i64, TickStep)> = None;
    for exponent in low..=high {
        for mantissa in MANTISSAS {
            let step = TickStep { mantissa, exponent };
            let Some(count) = step.count(min, max) else {
                continue;
            };
            if count <= budget {
                return Some(step);
            }
            if fewest.map_or(true, |(best, _)| count < best) {
                fewest = Some((count, step));
            }
        }
    }

    fewest.map(|(_, step)| step)
}
