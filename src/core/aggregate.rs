use chrono::{NaiveDate, NaiveDateTime};
use itertools::Itertools;

use crate::{
    core::{granularity::Granularity, record::HourlyRecord},
    quantity::{Celsius, CentsPerKilowattHour, Euros, KilowattHours},
};

/// Inclusive calendar-date range; the whole end day belongs to the range.
#[derive(Copy, Clone, Debug)]
#[must_use]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn contains(self, time: NaiveDateTime) -> bool {
        (self.start..=self.end).contains(&time.date())
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Bucket {
    pub start: NaiveDateTime,
    pub total_energy: KilowattHours,
    pub total_bill: Euros,
    pub average_price: CentsPerKilowattHour,
    pub average_temperature: Option<Celsius>,
}

impl Bucket {
    #[allow(clippy::cast_precision_loss)]
    fn reduce(start: NaiveDateTime, records: &[&HourlyRecord]) -> Self {
        let average_price = records.iter().map(|record| record.price).sum::<CentsPerKilowattHour>()
            / records.len() as f64;
        let temperatures = records.iter().filter_map(|record| record.temperature).collect_vec();
        let average_temperature = (!temperatures.is_empty()).then(|| {
            temperatures.iter().copied().sum::<Celsius>() / temperatures.len() as f64
        });
        Self {
            start,
            total_energy: records.iter().map(|record| record.energy).sum(),
            total_bill: records.iter().map(|record| record.bill).sum(),
            average_price,
            average_temperature,
        }
    }
}

/// Partition the records within the range into fixed-width buckets and
/// reduce each one. Empty buckets are omitted rather than emitted as zero
/// rows, so they cannot skew the period summary.
#[must_use]
pub fn aggregate(
    records: &[HourlyRecord],
    range: DateRange,
    granularity: Granularity,
) -> Vec<Bucket> {
    records
        .iter()
        .filter(|record| range.contains(record.time))
        .into_group_map_by(|record| granularity.bucket_start(record.time))
        .into_iter()
        .map(|(start, group)| Bucket::reduce(start, &group))
        .sorted_by_key(|bucket| bucket.start)
        .collect()
}
