use itertools::Itertools;

use crate::{
    core::aggregate::Bucket,
    quantity::{Celsius, CentsPerKilowattHour, Euros, KilowattHours},
};

/// Period totals and averages over the aggregated buckets.
///
/// Every field is absent over an empty period: a date range with no data is
/// a normal user-reachable state, not an error, and reporting zeros instead
/// would misstate the bill.
#[derive(Default)]
#[must_use]
pub struct Summary {
    pub total_energy: Option<KilowattHours>,
    pub total_bill: Option<Euros>,
    pub average_price: Option<CentsPerKilowattHour>,
    pub average_temperature: Option<Celsius>,
}

impl Summary {
    #[allow(clippy::cast_precision_loss)]
    pub fn over(buckets: &[Bucket]) -> Self {
        if buckets.is_empty() {
            return Self::default();
        }
        let average_price = buckets.iter().map(|bucket| bucket.average_price).sum::<CentsPerKilowattHour>()
            / buckets.len() as f64;
        let temperatures =
            buckets.iter().filter_map(|bucket| bucket.average_temperature).collect_vec();
        let average_temperature = (!temperatures.is_empty())
            .then(|| temperatures.iter().copied().sum::<Celsius>() / temperatures.len() as f64);
        Self {
            total_energy: Some(buckets.iter().map(|bucket| bucket.total_energy).sum()),
            total_bill: Some(buckets.iter().map(|bucket| bucket.total_bill).sum()),
            average_price: Some(average_price),
            average_temperature,
        }
    }
}
