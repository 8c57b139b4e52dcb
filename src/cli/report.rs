use chrono::NaiveDate;
use clap::Parser;

use crate::{
    cli::sources::SourceArgs,
    core::{DateRange, Granularity, HourlyRecord, Summary, aggregate, merge},
    prelude::*,
    tables::{build_buckets_table, build_summary_table},
};

#[derive(Parser)]
pub struct ReportArgs {
    #[clap(flatten)]
    sources: SourceArgs,

    /// First day of the report, inclusive. Defaults to the first merged day.
    #[clap(long, value_name = "YYYY-MM-DD")]
    from: Option<NaiveDate>,

    /// Last day of the report, inclusive. Defaults to the last merged day.
    #[clap(long, value_name = "YYYY-MM-DD")]
    to: Option<NaiveDate>,

    /// Bucket width.
    #[clap(long, value_enum, default_value = "hourly")]
    granularity: Granularity,
}

impl ReportArgs {
    fn range(&self, records: &[HourlyRecord]) -> Option<DateRange> {
        let start = self.from.or_else(|| records.first().map(|record| record.time.date()))?;
        let end = self.to.or_else(|| records.last().map(|record| record.time.date()))?;
        Some(DateRange::new(start, end))
    }
}

#[instrument(skip_all)]
pub fn report(args: &ReportArgs) -> Result {
    let (consumption, prices) = args.sources.load()?;
    let records = merge(consumption, prices);
    info!(len = records.len(), "merged");

    let Some(range) = args.range(&records) else {
        warn!("the sources share no timestamps, nothing to report");
        println!("{}", build_summary_table(&Summary::default()));
        return Ok(());
    };

    let buckets = aggregate(&records, range, args.granularity);
    if buckets.is_empty() {
        warn!(from = %range.start, to = %range.end, "no data for this range");
    }
    println!("{}", build_summary_table(&Summary::over(&buckets)));
    if !buckets.is_empty() {
        println!("{}", build_buckets_table(&buckets));
    }
    Ok(())
}
