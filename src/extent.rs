use crate::error::{GridError, GridResult};
use serde::{Deserialize, Serialize};

/// A length that is either shared by every axis or given per axis.
///
/// Used for voxel side lengths and for the side lengths of a fixed grid box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Extent {
    Uniform(f64),
    PerAxis(Vec<f64>),
}

impl Extent {
    /// Expands to one entry per axis.
    ///
    /// Accepts exactly 1 or `dim` entries, anything else is a shape mismatch on `argument`.
    pub fn broadcast(&self, dim: usize, argument: &'static str) -> GridResult<Vec<f64>> {
        match self {
            Extent::Uniform(v) => Ok(vec![*v; dim]),
            Extent::PerAxis(v) if v.len() == 1 => Ok(vec![v[0]; dim]),
            Extent::PerAxis(v) if v.len() == dim => Ok(v.clone()),
            Extent::PerAxis(v) => Err(GridError::shape(
                argument,
                format!("1 or {} entries", dim),
                v.len(),
            )),
        }
    }
}

impl Default for Extent {
    fn default() -> Self {
        Extent::Uniform(1.0)
    }
}

impl From<f64> for Extent {
    fn from(v: f64) -> Self {
        Extent::Uniform(v)
    }
}

impl From<Vec<f64>> for Extent {
    fn from(v: Vec<f64>) -> Self {
        Extent::PerAxis(v)
    }
}

impl From<&[f64]> for Extent {
    fn from(v: &[f64]) -> Self {
        Extent::PerAxis(v.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Extent {
    fn from(v: [f64; N]) -> Self {
        Extent::PerAxis(v.to_vec())
    }
}

/// Rejects lengths that are zero, negative, or not finite.
pub(crate) fn require_positive(lengths: &[f64], argument: &'static str) -> GridResult<()> {
    match lengths.iter().find(|v| !(v.is_finite() && **v > 0.0)) {
        Some(v) => Err(GridError::config(
            argument,
            format!("every entry must be finite and strictly positive, got {}", v),
        )),
        None => Ok(()),
    }
}
