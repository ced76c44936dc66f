//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around a civil [`Date`] that formats it with its weekday, the
/// way day buckets are labeled in the course overview.
///
/// The display format follows the pattern: `YYYY-MM-DD Day`
pub struct DayDate<'a>(pub &'a Date);

impl fmt::Display for DayDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%d %a"))
    }
}
