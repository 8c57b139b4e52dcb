use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::{
    core::record::HourlyRecord,
    sources::{ConsumptionRecord, PriceRecord},
};

/// Inner join on exact timestamp equality, ascending by time.
///
/// An hour present on only one side carries no billable information, so it
/// is filtered out rather than reported as an error.
#[must_use]
pub fn merge(consumption: Vec<ConsumptionRecord>, prices: Vec<PriceRecord>) -> Vec<HourlyRecord> {
    let mut prices: BTreeMap<NaiveDateTime, PriceRecord> =
        prices.into_iter().map(|price| (price.time, price)).collect();
    let mut records: Vec<HourlyRecord> = consumption
        .into_iter()
        .filter_map(|consumption| {
            prices.remove(&consumption.time).map(|price| HourlyRecord::join(consumption, price))
        })
        .collect();
    records.sort_unstable_by_key(|record| record.time);
    records
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::quantity::{Celsius, CentsPerKilowattHour, KilowattHours};

    fn time(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    fn consumption(at: NaiveDateTime, energy: f64) -> ConsumptionRecord {
        ConsumptionRecord { time: at, energy: KilowattHours(energy) }
    }

    fn price(at: NaiveDateTime, price: f64) -> PriceRecord {
        PriceRecord {
            time: at,
            price: CentsPerKilowattHour(price),
            temperature: Some(Celsius(-2.0)),
        }
    }

    #[test]
    fn matching_hours_join_verbatim() {
        let records =
            merge(vec![consumption(time(1, 0), 10.0)], vec![price(time(1, 0), 5.0)]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].time, time(1, 0));
        assert_abs_diff_eq!(records[0].energy.0, 10.0);
        assert_abs_diff_eq!(records[0].price.0, 5.0);
        assert_abs_diff_eq!(records[0].temperature.unwrap().0, -2.0);
    }

    #[test]
    fn bill_is_derived_from_cents() {
        let records =
            merge(vec![consumption(time(1, 0), 10.0)], vec![price(time(1, 0), 5.0)]);
        assert_abs_diff_eq!(records[0].bill.0, 0.5);
    }

    #[test]
    fn unmatched_hours_are_dropped() {
        let records = merge(
            vec![consumption(time(1, 0), 10.0), consumption(time(1, 1), 20.0)],
            vec![price(time(1, 1), 5.0), price(time(1, 2), 6.0)],
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].time, time(1, 1));
    }

    #[test]
    fn output_is_ascending_by_time() {
        let records = merge(
            vec![consumption(time(2, 0), 1.0), consumption(time(1, 0), 2.0)],
            vec![price(time(1, 0), 5.0), price(time(2, 0), 6.0)],
        );
        assert_eq!(records.len(), 2);
        assert!(records[0].time < records[1].time);
    }
}
