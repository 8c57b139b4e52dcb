use clap::Parser;

use crate::{
    prelude::*,
    sources::{ConsumptionRecord, PriceRecord, load_consumption, load_prices},
};

const CONSUMPTION_URL: &str =
    "https://raw.githubusercontent.com/lauriansa/School/refs/heads/main/Electricity_20-09-2024.csv";
const PRICES_URL: &str =
    "https://raw.githubusercontent.com/lauriansa/School/refs/heads/main/sahkon-hinta-010121-240924.csv";

#[derive(Parser)]
pub struct SourceArgs {
    /// Consumption CSV location: an `http(s)` URL or a file path.
    #[clap(long = "consumption-url", env = "CONSUMPTION_URL", default_value = CONSUMPTION_URL)]
    consumption_url: String,

    /// Spot price and temperature CSV location.
    #[clap(long = "prices-url", env = "PRICES_URL", default_value = PRICES_URL)]
    prices_url: String,
}

impl SourceArgs {
    pub fn load(&self) -> Result<(Vec<ConsumptionRecord>, Vec<PriceRecord>)> {
        let consumption = load_consumption(&self.consumption_url)?;
        let prices = load_prices(&self.prices_url)?;
        Ok((consumption, prices))
    }
}
