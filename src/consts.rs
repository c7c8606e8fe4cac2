//! Shared constants: the MP4/QTFF epoch and the set of FourCCs that
//! introduce a container atom (used by generic tooling over the decoded
//! tree, not by the decoder itself, which dispatches on the FourCC
//! directly in each container decoder).

use time::{Month, PrimitiveDateTime};

/// Container atoms nest other atoms rather than carrying fixed/table data.
pub const CONTAINER: [&str; 11] = [
    "moov", "trak", "tref", "edts", "mdia", "minf", "dinf", "stbl", "tapt", "imap", "udta",
];

/// Time zero for MP4/QTFF timestamps: midnight, January 1 1904.
pub fn mp4_time_zero() -> PrimitiveDateTime {
    time::Date::from_calendar_date(1904, Month::January, 1)
        .unwrap()
        .with_hms_milli(0, 0, 0, 0)
        .unwrap()
}
