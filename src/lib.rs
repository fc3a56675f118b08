//! # bs-greeks: Closed-Form Black-Scholes Greeks
//!
//! A Rust library computing the sensitivities of a European option's
//! Black-Scholes price: delta, gamma, vega, theta and rho.
//!
//! ## Key Features
//!
//! - **Total functions**: every greek returns a number for every input,
//!   including expiry (`t = 0`) and zero volatility (`v = 0`)
//! - **Explicit degeneracy handling**: inputs are classified into a regime
//!   before any formula runs, rather than relying on `NaN`/`∞` propagation
//! - **Configurable scaling**: theta per calendar or trading day, rho per
//!   percent or basis point
//! - **Batch evaluation**: parallel evaluation of many contracts with Rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_greeks::analytics::bs_greeks::{delta, theta, DEFAULT_THETA_SCALE};
//! use bs_greeks::OptionSide;
//!
//! // s, k, t (years), v, r
//! let call_delta = delta(100.0, 100.0, 0.086, 0.1, 0.0015, OptionSide::Call);
//! assert!((call_delta - 0.5076040742445566).abs() < 1e-9);
//!
//! // Expiry: delta is the payoff slope
//! assert_eq!(delta(101.0, 100.0, 0.0, 0.1, 0.0015, OptionSide::Call), 1.0);
//!
//! let per_day = theta(206.35, 206.0, 0.086, 0.1, 0.0015, OptionSide::Call, DEFAULT_THETA_SCALE);
//! assert!(per_day < 0.0);
//! ```
//!
//! ## Engine
//!
//! ```rust
//! use bs_greeks::{EngineConfig, GreeksConfig, GreeksEngine, OptionInputs, OptionSide};
//!
//! let engine = GreeksEngine::new(EngineConfig {
//!     theta_scale: 252.0, // per trading day
//!     greeks: GreeksConfig::DELTA | GreeksConfig::THETA,
//!     ..Default::default()
//! })
//! .expect("Valid configuration");
//!
//! let greeks = engine.evaluate(&OptionInputs::new(206.35, 206.0, 0.086, 0.1, 0.0015), OptionSide::Put);
//! assert!(greeks.delta < 0.0);
//! assert_eq!(greeks.vega, 0.0); // not selected
//! ```

// Module declarations
pub mod error;
pub mod math_utils;
pub mod analytics;
pub mod option;
pub mod engine;

// Re-export commonly used types for convenience
pub use error::{GreeksError, GreeksResult};
pub use option::{OptionInputs, OptionSide};
pub use engine::{EngineConfig, Greeks, GreeksConfig, GreeksEngine};
