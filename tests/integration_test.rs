// tests/integration_test.rs
use bs_greeks::math_utils::norm_cdf;
use bs_greeks::{EngineConfig, GreeksConfig, GreeksEngine, OptionInputs, OptionSide};

/// Black-Scholes premium, only used here to check the greeks against
/// finite differences.
fn bs_price(s: f64, k: f64, t: f64, v: f64, r: f64, side: OptionSide) -> f64 {
    let d1 = ((s / k).ln() + (r + 0.5 * v * v) * t) / (v * t.sqrt());
    let d2 = d1 - v * t.sqrt();
    match side {
        OptionSide::Call => s * norm_cdf(d1) - k * (-r * t).exp() * norm_cdf(d2),
        OptionSide::Put => k * (-r * t).exp() * norm_cdf(-d2) - s * norm_cdf(-d1),
    }
}

fn rel_error(actual: f64, expected: f64) -> f64 {
    (actual - expected).abs() / expected.abs()
}

#[test]
fn test_engine_vs_finite_differences() {
    let engine = GreeksEngine::new(EngineConfig {
        theta_scale: 1.0,
        rho_scale: 1.0,
        ..Default::default()
    })
    .expect("Valid configuration");

    let (s, k, t, v, r) = (105.0, 100.0, 0.75, 0.25, 0.03);
    let inputs = OptionInputs::new(s, k, t, v, r);

    for side in [OptionSide::Call, OptionSide::Put] {
        let greeks = engine.evaluate(&inputs, side);
        let price = |s: f64, t: f64, v: f64, r: f64| bs_price(s, k, t, v, r, side);

        let hs = 1e-3 * s;
        let fd_delta = (price(s + hs, t, v, r) - price(s - hs, t, v, r)) / (2.0 * hs);
        let fd_gamma =
            (price(s + hs, t, v, r) - 2.0 * price(s, t, v, r) + price(s - hs, t, v, r)) / (hs * hs);
        let hv = 1e-5;
        let fd_vega = (price(s, t, v + hv, r) - price(s, t, v - hv, r)) / (2.0 * hv) / 100.0;
        let ht = 1e-5;
        // Theta is the decay as calendar time passes, i.e. as T shrinks
        let fd_theta = -(price(s, t + ht, v, r) - price(s, t - ht, v, r)) / (2.0 * ht);
        let hr = 1e-5;
        let fd_rho = (price(s, t, v, r + hr) - price(s, t, v, r - hr)) / (2.0 * hr);

        println!("\n=== {} greeks vs finite differences ===", side);
        println!("Delta: {} (fd {})", greeks.delta, fd_delta);
        println!("Gamma: {} (fd {})", greeks.gamma, fd_gamma);
        println!("Vega:  {} (fd {})", greeks.vega, fd_vega);
        println!("Theta: {} (fd {})", greeks.theta, fd_theta);
        println!("Rho:   {} (fd {})", greeks.rho, fd_rho);

        assert!(rel_error(greeks.delta, fd_delta) < 1e-5, "Delta mismatch for {}", side);
        assert!(rel_error(greeks.gamma, fd_gamma) < 1e-3, "Gamma mismatch for {}", side);
        assert!(rel_error(greeks.vega, fd_vega) < 1e-5, "Vega mismatch for {}", side);
        assert!(rel_error(greeks.theta, fd_theta) < 1e-4, "Theta mismatch for {}", side);
        assert!(rel_error(greeks.rho, fd_rho) < 1e-5, "Rho mismatch for {}", side);
    }
}

#[test]
fn test_engine_at_expiry_is_total() {
    let engine = GreeksEngine::default();

    for &s in &[90.0, 100.0, 110.0] {
        for side in [OptionSide::Call, OptionSide::Put] {
            let greeks = engine.evaluate(&OptionInputs::new(s, 100.0, 0.0, 0.2, 0.05), side);
            assert!(greeks.delta.is_finite());
            assert_eq!(greeks.gamma, 0.0);
            assert_eq!(greeks.vega, 0.0);
            assert_eq!(greeks.theta, 0.0);
            assert_eq!(greeks.rho, 0.0);
        }
    }
}

#[test]
fn test_engine_gamma_vega_ignore_side() {
    let engine = GreeksEngine::default();
    let inputs = OptionInputs::new(95.0, 100.0, 0.4, 0.35, 0.01);

    let call = engine.evaluate(&inputs, OptionSide::Call);
    let put = engine.evaluate(&inputs, OptionSide::Put);
    assert_eq!(call.gamma, put.gamma);
    assert_eq!(call.vega, put.vega);
}

#[test]
fn test_batch_over_strike_ladder() {
    let engine = GreeksEngine::new(EngineConfig {
        greeks: GreeksConfig::DELTA | GreeksConfig::GAMMA,
        ..Default::default()
    })
    .expect("Valid configuration");

    let ladder: Vec<(OptionInputs, OptionSide)> = (0..=40)
        .map(|i| {
            let strike = 80.0 + i as f64;
            (OptionInputs::new(100.0, strike, 0.25, 0.2, 0.01), OptionSide::Call)
        })
        .collect();

    let results = engine.evaluate_batch(&ladder);
    assert_eq!(results.len(), ladder.len());

    // Call delta falls as the strike rises
    for pair in results.windows(2) {
        assert!(pair[1].delta < pair[0].delta);
    }

    // Gamma peaks near the money
    let (peak, _) = results
        .iter()
        .enumerate()
        .fold((0, f64::MIN), |best, (i, g)| if g.gamma > best.1 { (i, g.gamma) } else { best });
    let peak_strike = ladder[peak].0.k;
    println!("\nGamma peaks at strike {}", peak_strike);
    assert!((peak_strike - 100.0).abs() <= 2.0);
}

#[test]
fn test_checked_and_text_entry_points() {
    let engine = GreeksEngine::default();
    let inputs = OptionInputs::new(206.35, 206.0, 0.086, 0.1, 0.0015);

    let checked = engine
        .evaluate_checked(&inputs, OptionSide::Call)
        .expect("Valid inputs");
    let by_text = engine.evaluate_side_str(&inputs, "call").expect("Known side");
    assert_eq!(checked, by_text);

    let err = engine
        .evaluate_side_str(&inputs, "collar")
        .expect_err("Unknown side must be rejected");
    println!("\nRejected side: {}", err);
    assert!(err.to_string().contains("collar"));
}
