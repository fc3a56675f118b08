pub mod bs_greeks;
pub mod moneyness;
