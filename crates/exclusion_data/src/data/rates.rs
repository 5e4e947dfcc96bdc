use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RateError {
    #[error("hop rate {name} = {value} must be finite and non-negative")]
    Invalid { name: &'static str, value: f64 },
    #[error("at least one of p and q must be positive")]
    AllZero,
    #[error("combined rate p + q = {p} + {q} overflows")]
    Overflow { p: f64, q: f64 },
}

/// Exclusion process family, distinguished by the right/left rate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Symmetric: p = q.
    Sep,
    /// Totally asymmetric: only one direction is allowed.
    Tasep,
    /// Asymmetric: biased diffusion with both directions allowed.
    #[default]
    Asep,
}

impl ModelKind {
    /// Rate pair used for the model's preset runs.
    pub fn preset(self) -> RateParameters {
        let (p, q) = match self {
            Self::Sep => (0.5, 0.5),
            Self::Tasep => (1.0, 0.0),
            Self::Asep => (0.8, 0.2),
        };
        RateParameters { p, q }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sep => "SEP",
            Self::Tasep => "TASEP",
            Self::Asep => "ASEP",
        }
    }
}

/// Right-hop rate `p` and left-hop rate `q`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRates")]
pub struct RateParameters {
    p: f64,
    q: f64,
}

/// Unchecked wire form of [`RateParameters`].
#[derive(Deserialize)]
struct RawRates {
    p: f64,
    q: f64,
}

impl TryFrom<RawRates> for RateParameters {
    type Error = RateError;

    fn try_from(raw: RawRates) -> Result<Self, Self::Error> {
        Self::new(raw.p, raw.q)
    }
}

impl RateParameters {
    pub fn new(p: f64, q: f64) -> Result<Self, RateError> {
        for (name, value) in [("p", p), ("q", q)] {
            if !value.is_finite() || value < 0.0 {
                return Err(RateError::Invalid { name, value });
            }
        }
        if p == 0.0 && q == 0.0 {
            return Err(RateError::AllZero);
        }
        if !(p + q).is_finite() {
            return Err(RateError::Overflow { p, q });
        }
        Ok(Self { p, q })
    }

    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }

    #[inline]
    pub fn q(&self) -> f64 {
        self.q
    }

    /// A one-directional pair (either rate zero) is totally asymmetric.
    pub fn kind(&self) -> ModelKind {
        if self.p == 0.0 || self.q == 0.0 {
            ModelKind::Tasep
        } else if self.p == self.q {
            ModelKind::Sep
        } else {
            ModelKind::Asep
        }
    }
}
