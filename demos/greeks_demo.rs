// demos/greeks_demo.rs
use bs_greeks::analytics::bs_greeks::{rho, RHO_SCALE_BASIS_POINT};
use bs_greeks::analytics::moneyness::classify;
use bs_greeks::{EngineConfig, GreeksEngine, OptionInputs, OptionSide};
use tracing_subscriber::EnvFilter;

fn print_row(label: &str, inputs: &OptionInputs, engine: &GreeksEngine) {
    for side in [OptionSide::Call, OptionSide::Put] {
        let g = engine.evaluate(inputs, side);
        println!(
            "{:<22} {:<5} {:>9.5} {:>9.5} {:>9.5} {:>10.6} {:>9.5}",
            label, side, g.delta, g.gamma, g.vega, g.theta, g.rho
        );
    }
}

fn main() {
    // RUST_LOG=bs_greeks=trace shows which inputs collapse
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Black-Scholes Greeks Demo");
    println!("=========================\n");

    let engine = match GreeksEngine::new(EngineConfig::default()) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        }
    };

    let scenarios = [
        ("Near the money", OptionInputs::new(206.35, 206.0, 0.086, 0.1, 0.0015)),
        ("At expiry, ITM call", OptionInputs::new(100.01, 100.0, 0.0, 0.1, 0.0015)),
        ("At expiry, ATM", OptionInputs::new(100.0, 100.0, 0.0, 0.1, 0.0015)),
        ("Zero vol, spot > K", OptionInputs::new(110.0, 100.0, 0.5, 0.0, 0.02)),
        ("Zero vol, spot < K", OptionInputs::new(90.0, 100.0, 0.5, 0.0, 0.02)),
    ];

    let config = engine.config();
    println!(
        "Theta per 1/{} year, rho per 1/{} rate move\n",
        config.theta_scale, config.rho_scale
    );
    println!(
        "{:<22} {:<5} {:>9} {:>9} {:>9} {:>10} {:>9}",
        "Scenario", "Side", "Delta", "Gamma", "Vega", "Theta/day", "Rho/1%"
    );
    println!("{:-<80}", "");
    for (label, inputs) in &scenarios {
        print_row(label, inputs, &engine);
    }

    println!("\nRegimes:");
    for (label, o) in &scenarios {
        let regime = classify(o.s, o.k, o.t, o.v, o.r);
        let note = if regime.is_collapsed() { "limiting values" } else { "closed form" };
        println!("  {:<22} {:<28} {}", label, format!("{:?}", regime), note);
    }

    let o = scenarios[0].1;
    println!(
        "\nCall rho per basis point: {:.8}",
        rho(o.s, o.k, o.t, o.v, o.r, OptionSide::Call, RHO_SCALE_BASIS_POINT)
    );

    println!("\nParsing sides from text:");
    for text in ["call", "PUT", "straddle"] {
        match engine.evaluate_side_str(&o, text) {
            Ok(g) => println!("  {:<9} delta = {:.6}", text, g.delta),
            Err(e) => println!("  {:<9} ✗ {}", text, e),
        }
    }
}
