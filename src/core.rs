mod aggregate;
mod granularity;
mod merge;
mod record;
mod summary;

pub use self::{
    aggregate::{Bucket, DateRange, aggregate},
    granularity::Granularity,
    merge::merge,
    record::HourlyRecord,
    summary::Summary,
};
