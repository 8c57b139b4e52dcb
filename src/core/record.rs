use chrono::NaiveDateTime;

use crate::{
    quantity::{Celsius, CentsPerKilowattHour, Euros, KilowattHours},
    sources::{ConsumptionRecord, PriceRecord},
};

/// One joined hour: consumption, price, temperature, and the derived bill.
#[derive(Copy, Clone, Debug)]
pub struct HourlyRecord {
    pub time: NaiveDateTime,
    pub energy: KilowattHours,
    pub price: CentsPerKilowattHour,
    pub temperature: Option<Celsius>,
    pub bill: Euros,
}

impl HourlyRecord {
    pub fn join(consumption: ConsumptionRecord, price: PriceRecord) -> Self {
        Self {
            time: consumption.time,
            energy: consumption.energy,
            price: price.price,
            temperature: price.temperature,
            bill: consumption.energy * price.price,
        }
    }
}
