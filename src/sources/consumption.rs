//! Consumption CSV: `;`-separated, decimal comma, day-leading timestamps.

use chrono::NaiveDateTime;
use csv::ReaderBuilder;
use serde::{Deserialize, Deserializer, de};

use crate::{
    prelude::*,
    quantity::KilowattHours,
    sources::{LoadError, collect_unique, fetch::fetch},
};

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct ConsumptionRecord {
    #[serde(rename = "Time", deserialize_with = "deserialize_time")]
    pub time: NaiveDateTime,

    #[serde(rename = "Energy (kWh)", deserialize_with = "deserialize_comma_decimal")]
    pub energy: KilowattHours,
}

/// Load the hourly consumption records, sorted by time.
#[instrument(skip_all, fields(location = location))]
pub fn load_consumption(location: &str) -> Result<Vec<ConsumptionRecord>, LoadError> {
    let records = parse(location, &fetch(location)?)?;
    info!(len = records.len(), "loaded");
    Ok(records)
}

fn parse(location: &str, text: &str) -> Result<Vec<ConsumptionRecord>, LoadError> {
    let mut reader = ReaderBuilder::new().delimiter(b';').from_reader(text.as_bytes());
    collect_unique(location, reader.deserialize(), |record: &ConsumptionRecord| record.time)
}

/// The export writes ` 1.1.2024 00:00` with a leading space.
fn deserialize_time<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let text = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&text, " %d.%m.%Y %H:%M").map_err(|_| {
        de::Error::invalid_value(de::Unexpected::Str(&text), &"a `DD.MM.YYYY HH:MM` timestamp")
    })
}

fn deserialize_comma_decimal<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<KilowattHours, D::Error> {
    let text = String::deserialize(deserializer)?;
    text.replace(',', ".").parse().map_err(|_| {
        de::Error::invalid_value(de::Unexpected::Str(&text), &"a comma-decimal number")
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    use super::*;

    fn time(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn parse_ok() -> Result {
        let text = "Time;Energy (kWh)\n 1.1.2024 00:00;0,65\n 1.1.2024 01:00;1,2\n";
        let records = parse("test", text)?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].time, time(2024, 1, 1, 0));
        assert_abs_diff_eq!(records[0].energy.0, 0.65);
        assert_abs_diff_eq!(records[1].energy.0, 1.2);
        Ok(())
    }

    #[test]
    fn malformed_rows_are_dropped() -> Result {
        let text = "Time;Energy (kWh)\nnot a time;0,65\n 1.1.2024 01:00;oops\n 1.1.2024 02:00;2,0\n";
        let records = parse("test", text)?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].time, time(2024, 1, 1, 2));
        Ok(())
    }

    #[test]
    fn all_rows_malformed_is_an_empty_dataset() {
        let text = "Time;Energy (kWh)\nnot a time;0,65\n";
        assert!(matches!(parse("test", text), Err(LoadError::EmptyDataset { .. })));
    }

    #[test]
    fn duplicate_timestamp_is_rejected() {
        let text = "Time;Energy (kWh)\n 1.1.2024 00:00;0,65\n 1.1.2024 00:00;0,66\n";
        assert!(matches!(parse("test", text), Err(LoadError::DuplicateTimestamp { .. })));
    }
}
