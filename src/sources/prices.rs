//! Spot price CSV: `,`-separated, decimal period, dash-separated timestamps.

use chrono::NaiveDateTime;
use csv::ReaderBuilder;
use serde::{Deserialize, Deserializer, de};

use crate::{
    prelude::*,
    quantity::{Celsius, CentsPerKilowattHour},
    sources::{LoadError, collect_unique, fetch::fetch},
};

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct PriceRecord {
    #[serde(rename = "Time", deserialize_with = "deserialize_time")]
    pub time: NaiveDateTime,

    #[serde(rename = "Price (cent/kWh)")]
    pub price: CentsPerKilowattHour,

    /// Missing in some rows; excluded from the averages rather than zeroed.
    #[serde(rename = "Temperature")]
    pub temperature: Option<Celsius>,
}

/// Load the hourly price records, sorted by time.
#[instrument(skip_all, fields(location = location))]
pub fn load_prices(location: &str) -> Result<Vec<PriceRecord>, LoadError> {
    let records = parse(location, &fetch(location)?)?;
    info!(len = records.len(), "loaded");
    Ok(records)
}

fn parse(location: &str, text: &str) -> Result<Vec<PriceRecord>, LoadError> {
    let mut reader = ReaderBuilder::new().from_reader(text.as_bytes());
    collect_unique(location, reader.deserialize(), |record: &PriceRecord| record.time)
}

fn deserialize_time<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let text = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&text, "%d-%m-%Y %H:%M:%S").map_err(|_| {
        de::Error::invalid_value(de::Unexpected::Str(&text), &"a `DD-MM-YYYY HH:MM:SS` timestamp")
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn parse_ok() -> Result {
        let text = "Time,Price (cent/kWh),Temperature\n\
            01-01-2024 00:00:00,5.0,-2.0\n\
            01-01-2024 01:00:00,4.25,\n";
        let records = parse("test", text)?;
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].time,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
        assert_abs_diff_eq!(records[0].price.0, 5.0);
        assert_abs_diff_eq!(records[0].temperature.unwrap().0, -2.0);
        assert_eq!(records[1].temperature, None);
        Ok(())
    }

    #[test]
    fn malformed_price_drops_the_row() -> Result {
        let text = "Time,Price (cent/kWh),Temperature\n\
            01-01-2024 00:00:00,n/a,-2.0\n\
            01-01-2024 01:00:00,4.25,-3.0\n";
        let records = parse("test", text)?;
        assert_eq!(records.len(), 1);
        assert_abs_diff_eq!(records[0].price.0, 4.25);
        Ok(())
    }
}
