//! Axis scales
//!
//! A [`Scale`] maps an axis [`Domain`] onto a range of grid positions.
//! Numeric domains map affinely; categorical domains spread their labels
//! evenly across the range in domain order.

use crate::error::{PlotError, PlotResult};
use crate::model::{Domain, Value};

/// A fitted mapping
#[derive(Debug, Clone, PartialEq)]
enum Mapping {
    Linear {
        domain_min: f64,
        domain_max: f64,
        target_min: f64,
        target_max: f64,
    },
    Nominal {
        labels: Vec<String>,
        target_min: f64,
        target_max: f64,
    },
}

/// Mapping from an axis domain to grid positions.
///
/// A scale must be fit before use. Fitting again replaces the mapping
/// wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scale {
    mapping: Option<Mapping>,
}

impl Scale {
    /// Create an unfitted scale
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scale fit to `domain` over `[target_min, target_max]`
    pub fn fitted(domain: &Domain, target_min: f64, target_max: f64) -> Self {
        let mut scale = Self::new();
        scale.fit(domain, target_min, target_max);
        scale
    }

    /// Fit the scale to `domain` over `[target_min, target_max]`
    pub fn fit(&mut self, domain: &Domain, target_min: f64, target_max: f64) {
        let mapping = match domain {
            Domain::Numeric { min, max } => Mapping::Linear {
                domain_min: *min,
                domain_max: *max,
                target_min,
                target_max,
            },
            Domain::Categorical(labels) => Mapping::Nominal {
                labels: labels.clone(),
                target_min,
                target_max,
            },
        };
        self.mapping = Some(mapping);
    }

    /// Classify `values` and fit to their domain
    pub fn fit_values(
        &mut self,
        values: &[Value],
        target_min: f64,
        target_max: f64,
    ) -> PlotResult<()> {
        let domain = Domain::from_values(values)?;
        self.fit(&domain, target_min, target_max);
        Ok(())
    }

    /// Whether `fit` has been called
    pub fn is_fitted(&self) -> bool {
        self.mapping.is_some()
    }

    /// The fitted target range
    pub fn target(&self) -> PlotResult<(f64, f64)> {
        match self.mapping.as_ref().ok_or(PlotError::NotFitted)? {
            Mapping::Linear {
                target_min,
                target_max,
                ..
            }
            | Mapping::Nominal {
                target_min,
                target_max,
                ..
            } => Ok((*target_min, *target_max)),
        }
    }

    /// Map a single value to its position
    pub fn transform(&self, value: &Value) -> PlotResult<f64> {
        match self.mapping.as_ref().ok_or(PlotError::NotFitted)? {
            Mapping::Linear {
                domain_min,
                domain_max,
                target_min,
                target_max,
            } => {
                let v = value
                    .as_number()
                    .ok_or_else(|| PlotError::UnknownCategory(value.to_label()))?;
                if domain_max == domain_min {
                    return Ok((target_min + target_max) / 2.0);
                }
                Ok(target_min
                    + (v - domain_min) / (domain_max - domain_min) * (target_max - target_min))
            }
            Mapping::Nominal {
                labels,
                target_min,
                target_max,
            } => {
                let label = value.to_label();
                let index = labels
                    .iter()
                    .position(|l| *l == label)
                    .ok_or(PlotError::UnknownCategory(label))?;
                if labels.len() == 1 {
                    return Ok(*target_min);
                }
                Ok(target_min
                    + index as f64 * (target_max - target_min) / (labels.len() - 1) as f64)
            }
        }
    }

    /// Map every value to its position
    pub fn transform_all(&self, values: &[Value]) -> PlotResult<Vec<f64>> {
        values.iter().map(|v| self.transform(v)).collect()
    }
}
