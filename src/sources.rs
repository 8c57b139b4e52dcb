//! The two tabular inputs: the consumption export and the spot price history.

mod consumption;
mod fetch;
mod prices;

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use thiserror::Error;

pub use self::{
    consumption::{ConsumptionRecord, load_consumption},
    prices::{PriceRecord, load_prices},
};
use crate::prelude::*;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("source `{location}` is unavailable: {reason}")]
    Unavailable { location: String, reason: String },

    #[error("source `{location}` produced no parseable rows")]
    EmptyDataset { location: String },

    #[error("duplicate timestamp {time} in `{location}`")]
    DuplicateTimestamp { location: String, time: NaiveDateTime },
}

/// Collect parsed rows keyed and sorted by timestamp.
///
/// Unparseable rows are dropped with a warning rather than coerced into
/// nulls, so they can never leak into the aggregates. Duplicate timestamps
/// within one source are rejected outright: silently cross-joining them
/// downstream would double-count the bill.
fn collect_unique<R>(
    location: &str,
    rows: impl Iterator<Item = csv::Result<R>>,
    time_of: impl Fn(&R) -> NaiveDateTime,
) -> Result<Vec<R>, LoadError> {
    let mut by_time = BTreeMap::new();
    for (index, row) in rows.enumerate() {
        match row {
            Ok(row) => {
                let time = time_of(&row);
                if by_time.insert(time, row).is_some() {
                    return Err(LoadError::DuplicateTimestamp {
                        location: location.to_string(),
                        time,
                    });
                }
            }

            // The header occupies the first line:
            Err(error) => warn!(line = index + 2, %error, "dropping an unparseable row"),
        }
    }
    if by_time.is_empty() {
        return Err(LoadError::EmptyDataset { location: location.to_string() });
    }
    Ok(by_time.into_values().collect())
}
