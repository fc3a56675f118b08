// src/analytics/moneyness.rs
//! Black-Scholes moneyness term and degeneracy classification
//!
//! # Mathematical Foundation
//!
//! Every greek is a function of the standardized moneyness term
//! ```text
//! w = d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! ```
//!
//! When `σ√T = 0` the term is `±∞` (or `NaN` when the numerator is also
//! zero) and the closed-form greeks stop being evaluable. Instead of letting
//! those values leak through the formulas, inputs are classified into a
//! [`Regime`] up front and each greek picks its limit explicitly.

use tracing::trace;

/// Black-Scholes `w` (d₁) term
///
/// May be `+∞`, `-∞` or `NaN` when `t = 0` or `v = 0`.
pub fn bs_w(s: f64, k: f64, t: f64, v: f64, r: f64) -> f64 {
    ((s / k).ln() + (r + 0.5 * v * v) * t) / (v * t.sqrt())
}

/// Position of the underlying relative to the strike, from the call's side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moneyness {
    InTheMoney,
    AtTheMoney,
    OutOfTheMoney,
}

impl Moneyness {
    /// Spot moneyness: `s > k` is in the money, `s == k` at the money.
    pub fn of_spot(s: f64, k: f64) -> Self {
        if s > k {
            Moneyness::InTheMoney
        } else if s == k {
            Moneyness::AtTheMoney
        } else {
            Moneyness::OutOfTheMoney
        }
    }
}

/// Evaluation regime of a set of option inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Regime {
    /// `w` is finite; closed-form formulas apply
    Normal(f64),
    /// Time or volatility collapsed with spot above strike
    ZeroTimeOrVolItm,
    /// Time or volatility collapsed with spot at strike
    ZeroTimeOrVolAtm,
    /// Time or volatility collapsed with spot below strike
    ZeroTimeOrVolOtm,
}

impl Regime {
    pub fn is_collapsed(&self) -> bool {
        !matches!(self, Regime::Normal(_))
    }
}

/// Classify option inputs before any greek formula is selected
///
/// Collapses when `v√t` is zero, and also whenever `w` comes out
/// non-finite for any other reason (inputs outside the documented domain),
/// so the greeks stay total.
pub fn classify(s: f64, k: f64, t: f64, v: f64, r: f64) -> Regime {
    let vol_sqrt_t = v * t.sqrt();
    if vol_sqrt_t != 0.0 {
        let w = bs_w(s, k, t, v, r);
        if w.is_finite() {
            return Regime::Normal(w);
        }
    }

    let regime = match Moneyness::of_spot(s, k) {
        Moneyness::InTheMoney => Regime::ZeroTimeOrVolItm,
        Moneyness::AtTheMoney => Regime::ZeroTimeOrVolAtm,
        Moneyness::OutOfTheMoney => Regime::ZeroTimeOrVolOtm,
    };
    trace!(s, k, t, v, r, ?regime, "inputs collapsed to a degenerate regime");
    regime
}

/// Forward moneyness: sign of `ln(S/K) + rT`
///
/// This is the sign `w` takes once the volatility term vanishes, so it
/// decides which side keeps a non-zero rho at zero volatility. Negative or
/// undefined time, and an exactly zero numerator, count as at the money.
pub fn forward_moneyness(s: f64, k: f64, t: f64, r: f64) -> Moneyness {
    if !(t >= 0.0) {
        return Moneyness::AtTheMoney;
    }
    let drift_adjusted = (s / k).ln() + r * t;
    if drift_adjusted > 0.0 {
        Moneyness::InTheMoney
    } else if drift_adjusted < 0.0 {
        Moneyness::OutOfTheMoney
    } else {
        Moneyness::AtTheMoney
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bs_w_matches_d1() {
        let w = bs_w(100.0, 100.0, 1.0, 0.2, 0.05);
        // (0.05 + 0.02) / 0.2
        assert!((w - 0.35).abs() < 1e-12);
    }

    #[test]
    fn test_bs_w_non_finite_at_boundary() {
        assert_eq!(bs_w(101.0, 100.0, 0.0, 0.2, 0.01), f64::INFINITY);
        assert_eq!(bs_w(99.0, 100.0, 0.0, 0.2, 0.01), f64::NEG_INFINITY);
        assert!(bs_w(100.0, 100.0, 0.0, 0.2, 0.01).is_nan());
        assert!(bs_w(100.0, 100.0, 0.5, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_classify_normal() {
        match classify(100.0, 100.0, 0.086, 0.1, 0.0015) {
            Regime::Normal(w) => assert!(w.is_finite()),
            other => panic!("expected Normal, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_collapsed_by_spot() {
        for &(t, v) in &[(0.0, 0.1), (0.1, 0.0), (0.0, 0.0)] {
            assert_eq!(classify(100.01, 100.0, t, v, 0.0015), Regime::ZeroTimeOrVolItm);
            assert_eq!(classify(100.0, 100.0, t, v, 0.0015), Regime::ZeroTimeOrVolAtm);
            assert_eq!(classify(99.99, 100.0, t, v, 0.0015), Regime::ZeroTimeOrVolOtm);
        }
    }

    #[test]
    fn test_classify_agrees_with_non_finite_w() {
        let cases = [
            (100.0, 100.0, 0.0, 0.2, 0.01),
            (120.0, 100.0, 0.5, 0.0, 0.01),
            (80.0, 100.0, 0.5, 0.0, 0.01),
            (100.0, 100.0, 0.25, 0.3, 0.02),
            (50.0, 100.0, 2.0, 0.6, -0.01),
        ];
        for &(s, k, t, v, r) in &cases {
            let w = bs_w(s, k, t, v, r);
            assert_eq!(classify(s, k, t, v, r).is_collapsed(), !w.is_finite());
        }
    }

    #[test]
    fn test_classify_negative_time_collapses() {
        assert!(classify(100.0, 90.0, -0.1, 0.2, 0.01).is_collapsed());
    }

    #[test]
    fn test_forward_moneyness_uses_rate_drift() {
        // Spot just below strike, but the rate drift lifts the forward above it.
        assert_eq!(forward_moneyness(99.99, 100.0, 0.1, 0.0015), Moneyness::InTheMoney);
        assert_eq!(forward_moneyness(90.0, 100.0, 0.1, 0.0015), Moneyness::OutOfTheMoney);
        assert_eq!(forward_moneyness(100.0, 100.0, 0.1, 0.0), Moneyness::AtTheMoney);
        assert_eq!(forward_moneyness(110.0, 100.0, -0.1, 0.0), Moneyness::AtTheMoney);
    }
}
