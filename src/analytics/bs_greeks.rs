// src/analytics/bs_greeks.rs
//! Closed-form Black-Scholes greeks for European options
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! The greeks are the partial derivatives of the closed-form price. They
//! are written in terms of
//! ```text
//! w  = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! w₂ = w - σ√T
//! ```
//! with Φ the standard normal CDF and φ its density.
//!
//! # Degenerate inputs
//!
//! Every function is total. Inputs are classified with
//! [`classify`](crate::analytics::moneyness::classify) first; when time or
//! volatility has collapsed to zero each greek returns its limiting value
//! instead of evaluating the formula.
//!
//! Argument order is `(s, k, t, v, r)`: spot, strike, years to expiry,
//! annualized volatility and annual risk-free rate.

use crate::analytics::moneyness::{classify, forward_moneyness, Moneyness, Regime};
use crate::math_utils::{norm_cdf, norm_pdf};
use crate::option::OptionSide;

/// Rho per 1% move in the risk-free rate
pub const RHO_SCALE_PERCENT: f64 = 100.0;
/// Rho per 0.01% (one basis point) move in the risk-free rate
pub const RHO_SCALE_BASIS_POINT: f64 = 10_000.0;
/// Theta per calendar day
pub const THETA_SCALE_CALENDAR_DAYS: f64 = 365.0;
/// Theta per trading day
pub const THETA_SCALE_TRADING_DAYS: f64 = 252.0;

pub const DEFAULT_RHO_SCALE: f64 = RHO_SCALE_PERCENT;
pub const DEFAULT_THETA_SCALE: f64 = THETA_SCALE_CALENDAR_DAYS;

/// Vega is always quoted per 1% move in volatility
const VEGA_SCALE: f64 = 100.0;

/// Black-Scholes Delta (∂V/∂S)
///
/// # Formula
/// ```text
/// Δ_call = Φ(w)
/// Δ_put  = Φ(w) - 1
/// ```
///
/// # Degenerate inputs
/// With `t = 0` or `v = 0` delta is the payoff slope: 1 for an in-the-money
/// call, -1 for an in-the-money put, 0 otherwise. At the money both sides
/// collapse to 0.
///
/// Range: `[0, 1]` for calls, `[-1, 0]` for puts.
pub fn delta(s: f64, k: f64, t: f64, v: f64, r: f64, side: OptionSide) -> f64 {
    match (classify(s, k, t, v, r), side) {
        (Regime::Normal(w), OptionSide::Call) => norm_cdf(w),
        (Regime::Normal(w), OptionSide::Put) => {
            let put_delta = norm_cdf(w) - 1.0;
            // Φ(w) rounding to exactly 0 at the money is not a full short exposure
            if put_delta == -1.0 && s == k {
                0.0
            } else {
                put_delta
            }
        }
        (Regime::ZeroTimeOrVolItm, OptionSide::Call) => 1.0,
        (Regime::ZeroTimeOrVolOtm, OptionSide::Put) => -1.0,
        _ => 0.0,
    }
}

/// Black-Scholes Gamma (∂²V/∂S²)
///
/// # Formula
/// ```text
/// Γ = φ(w) / (S * σ * √T)
/// ```
///
/// Identical for calls and puts. Zero once time or volatility collapses.
pub fn gamma(s: f64, k: f64, t: f64, v: f64, r: f64) -> f64 {
    match classify(s, k, t, v, r) {
        Regime::Normal(w) => norm_pdf(w) / (s * v * t.sqrt()),
        _ => 0.0,
    }
}

/// Black-Scholes Vega (∂V/∂σ)
///
/// # Formula
/// ```text
/// ν = S * √T * φ(w) / 100
/// ```
///
/// Identical for calls and puts and quoted per 1% volatility move.
/// Zero once time or volatility collapses.
pub fn vega(s: f64, k: f64, t: f64, v: f64, r: f64) -> f64 {
    match classify(s, k, t, v, r) {
        Regime::Normal(w) => s * t.sqrt() * norm_pdf(w) / VEGA_SCALE,
        _ => 0.0,
    }
}

/// Black-Scholes Theta (∂V/∂t)
///
/// # Formula
/// ```text
/// Θ_call = [-σ*S*φ(w)/(2√T) - r*K*e^(-rT)*Φ(w - σ√T)] / scale
/// Θ_put  = [-σ*S*φ(w)/(2√T) + r*K*e^(-rT)*Φ(σ√T - w)] / scale
/// ```
///
/// `scale` converts the annual decay rate into a per-period one:
/// [`THETA_SCALE_CALENDAR_DAYS`] (the default) or
/// [`THETA_SCALE_TRADING_DAYS`]. The sign is not clamped, so a deep
/// in-the-money put with a high rate can show positive theta.
pub fn theta(s: f64, k: f64, t: f64, v: f64, r: f64, side: OptionSide, scale: f64) -> f64 {
    let w = match classify(s, k, t, v, r) {
        Regime::Normal(w) => w,
        _ => return 0.0,
    };

    let sqrt_t = t.sqrt();
    let vol_sqrt_t = v * sqrt_t;
    let decay = -v * s * norm_pdf(w) / (2.0 * sqrt_t);
    let carry = k * r * (-r * t).exp();

    let annual = match side {
        OptionSide::Call => decay - carry * norm_cdf(w - vol_sqrt_t),
        OptionSide::Put => decay + carry * norm_cdf(vol_sqrt_t - w),
    };
    annual / scale
}

/// Black-Scholes Rho (∂V/∂r)
///
/// # Formula
/// ```text
/// ρ_call =  K*T*e^(-rT)*Φ(w - σ√T) / scale
/// ρ_put  = -K*T*e^(-rT)*Φ(σ√T - w) / scale
/// ```
///
/// `scale` is [`RHO_SCALE_PERCENT`] (the default) or
/// [`RHO_SCALE_BASIS_POINT`].
///
/// # Degenerate inputs
/// Unlike the other greeks, rho is not zeroed just because volatility is
/// zero. With `v = 0, t > 0` the normal CDF saturates and exactly one side
/// keeps the full `K*T*e^(-rT)`: the call when the forward `S*e^(rT)` is
/// above the strike, the put when it is below. When the forward sits exactly
/// on the strike, or `t = 0`, both sides are zero.
pub fn rho(s: f64, k: f64, t: f64, v: f64, r: f64, side: OptionSide, scale: f64) -> f64 {
    let discounted = k * t * (-r * t).exp();

    let exercise_probability = match classify(s, k, t, v, r) {
        Regime::Normal(w) => {
            let vol_sqrt_t = v * t.sqrt();
            match side {
                OptionSide::Call => norm_cdf(w - vol_sqrt_t),
                OptionSide::Put => norm_cdf(vol_sqrt_t - w),
            }
        }
        _ => match (forward_moneyness(s, k, t, r), side) {
            (Moneyness::InTheMoney, OptionSide::Call) => 1.0,
            (Moneyness::OutOfTheMoney, OptionSide::Put) => 1.0,
            _ => return 0.0,
        },
    };

    match side {
        OptionSide::Call => discounted * exercise_probability / scale,
        OptionSide::Put => -discounted * exercise_probability / scale,
    }
}
