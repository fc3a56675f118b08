// src/engine.rs
use crate::analytics::bs_greeks::{self, DEFAULT_RHO_SCALE, DEFAULT_THETA_SCALE};
use crate::error::{validation::*, GreeksResult};
use crate::option::{OptionInputs, OptionSide};
use bitflags::bitflags;
use rayon::prelude::*;
use tracing::debug;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GreeksConfig: u32 {
        const NONE  = 0;
        const DELTA = 1 << 0;
        const VEGA  = 1 << 1;
        const RHO   = 1 << 2;
        const GAMMA = 1 << 3;
        const THETA = 1 << 4;
        const ALL   = Self::DELTA.bits()
            | Self::VEGA.bits()
            | Self::RHO.bits()
            | Self::GAMMA.bits()
            | Self::THETA.bits();
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    pub theta_scale: f64, // 365 calendar days, 252 trading days
    pub rho_scale: f64,   // 100 per 1%, 10_000 per basis point
    pub greeks: GreeksConfig,
}

impl EngineConfig {
    /// Validate the engine configuration
    pub fn validate(&self) -> GreeksResult<()> {
        validate_scale("theta_scale", self.theta_scale)?;
        validate_scale("rho_scale", self.rho_scale)?;
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            theta_scale: DEFAULT_THETA_SCALE,
            rho_scale: DEFAULT_RHO_SCALE,
            greeks: GreeksConfig::ALL,
        }
    }
}

/// Full greek report for one contract; greeks not selected are left at 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Greeks {
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
}

/// Evaluates a configurable set of greeks with fixed scale conventions.
///
/// Holds nothing but its configuration, so one engine can be shared across
/// threads freely.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreeksEngine {
    config: EngineConfig,
}

impl GreeksEngine {
    pub fn new(config: EngineConfig) -> GreeksResult<Self> {
        config.validate()?;
        debug!(
            theta_scale = config.theta_scale,
            rho_scale = config.rho_scale,
            greeks = ?config.greeks,
            "greeks engine configured"
        );
        Ok(GreeksEngine { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate the selected greeks. Total: degenerate inputs resolve to
    /// their limits and out-of-domain inputs are not rejected.
    pub fn evaluate(&self, inputs: &OptionInputs, side: OptionSide) -> Greeks {
        let OptionInputs { s, k, t, v, r } = *inputs;
        let selected = self.config.greeks;
        let mut greeks = Greeks::default();

        if selected.contains(GreeksConfig::DELTA) {
            greeks.delta = bs_greeks::delta(s, k, t, v, r, side);
        }
        if selected.contains(GreeksConfig::GAMMA) {
            greeks.gamma = bs_greeks::gamma(s, k, t, v, r);
        }
        if selected.contains(GreeksConfig::VEGA) {
            greeks.vega = bs_greeks::vega(s, k, t, v, r);
        }
        if selected.contains(GreeksConfig::THETA) {
            greeks.theta = bs_greeks::theta(s, k, t, v, r, side, self.config.theta_scale);
        }
        if selected.contains(GreeksConfig::RHO) {
            greeks.rho = bs_greeks::rho(s, k, t, v, r, side, self.config.rho_scale);
        }
        greeks
    }

    /// Validate the inputs before evaluating.
    pub fn evaluate_checked(&self, inputs: &OptionInputs, side: OptionSide) -> GreeksResult<Greeks> {
        inputs.validate()?;
        Ok(self.evaluate(inputs, side))
    }

    /// Evaluate with the side given as text (`"call"` / `"put"`).
    pub fn evaluate_side_str(&self, inputs: &OptionInputs, side: &str) -> GreeksResult<Greeks> {
        let side: OptionSide = side.parse()?;
        Ok(self.evaluate(inputs, side))
    }

    /// Evaluate many contracts in parallel; output order matches input order.
    pub fn evaluate_batch(&self, contracts: &[(OptionInputs, OptionSide)]) -> Vec<Greeks> {
        debug!(contracts = contracts.len(), "evaluating greeks batch");
        contracts
            .par_iter()
            .map(|(inputs, side)| self.evaluate(inputs, *side))
            .collect()
    }
}
