//! HTTP handlers. All operations are scoped to the tenant from the request
//! context.

pub mod banks;
pub mod credit;
pub mod deposits;
pub mod leads;
pub mod mutations;
pub mod withdrawals;

use chrono::NaiveDate;

use crate::mutations::DateRange;

/// Parse an optional `from_date`/`to_date` pair into a calendar range. Both
/// dates must be present and well-formed to activate the range; anything else
/// degrades to "no range", never an error.
pub(crate) fn parse_date_range(from: Option<&str>, to: Option<&str>) -> Option<DateRange> {
    let start = NaiveDate::parse_from_str(from?.trim(), "%Y-%m-%d").ok()?;
    let finish = NaiveDate::parse_from_str(to?.trim(), "%Y-%m-%d").ok()?;
    Some(DateRange::new(start, finish))
}
