// src/option.rs
//! European option contract inputs
//!
//! [`OptionInputs`] bundles the five Black-Scholes scalars so callers can
//! pass one value around instead of five positional floats. The greek
//! methods on it forward to [`crate::analytics::bs_greeks`] and are just as
//! total: no validation happens unless [`OptionInputs::validate`] is called.

use crate::analytics::bs_greeks;
use crate::error::{validation::*, GreeksError, GreeksResult};
use std::fmt;
use std::str::FromStr;

/// Side of a European option
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionSide {
    Call,
    Put,
}

impl OptionSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionSide::Call => "call",
            OptionSide::Put => "put",
        }
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Parses `"call"` or `"put"`, ignoring case and surrounding whitespace.
///
/// Anything else is rejected rather than treated as a put.
impl FromStr for OptionSide {
    type Err = GreeksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("call") {
            Ok(OptionSide::Call)
        } else if trimmed.eq_ignore_ascii_case("put") {
            Ok(OptionSide::Put)
        } else {
            Err(GreeksError::UnrecognizedSide {
                value: s.to_string(),
            })
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptionInputs {
    pub s: f64, // Underlying price
    pub k: f64, // Strike
    pub t: f64, // Time to expiry in years
    pub v: f64, // Annualized volatility
    pub r: f64, // Annual risk-free rate
}

impl OptionInputs {
    pub fn new(s: f64, k: f64, t: f64, v: f64, r: f64) -> Self {
        OptionInputs { s, k, t, v, r }
    }

    /// Strict domain check for callers that want bad inputs rejected
    /// instead of flowing through the arithmetic.
    pub fn validate(&self) -> GreeksResult<()> {
        validate_positive("s", self.s)?;
        validate_finite("s", self.s)?;
        validate_positive("k", self.k)?;
        validate_finite("k", self.k)?;
        validate_non_negative("t", self.t)?;
        validate_finite("t", self.t)?;
        validate_non_negative("v", self.v)?;
        validate_finite("v", self.v)?;
        validate_finite("r", self.r)?;
        Ok(())
    }

    pub fn delta(&self, side: OptionSide) -> f64 {
        bs_greeks::delta(self.s, self.k, self.t, self.v, self.r, side)
    }

    pub fn gamma(&self) -> f64 {
        bs_greeks::gamma(self.s, self.k, self.t, self.v, self.r)
    }

    pub fn vega(&self) -> f64 {
        bs_greeks::vega(self.s, self.k, self.t, self.v, self.r)
    }

    pub fn theta(&self, side: OptionSide, scale: f64) -> f64 {
        bs_greeks::theta(self.s, self.k, self.t, self.v, self.r, side, scale)
    }

    pub fn rho(&self, side: OptionSide, scale: f64) -> f64 {
        bs_greeks::rho(self.s, self.k, self.t, self.v, self.r, side, scale)
    }
}
