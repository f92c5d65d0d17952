//! Local wall-clock time for message timestamps.

use chrono::{Local, NaiveDateTime};

/// Current local time without zone, as message timestamps store it.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
