//! Fixed-offset timezone definitions.

/// Timezone used when a league file does not declare one.
pub const DEFAULT_TZID: &str = "Asia/Shanghai";

/// A minimal standard-only timezone: one fixed UTC offset, no DST rule.
///
/// Only the default timezone carries a correct offset and abbreviation.
/// Any other configured tzid keeps the +0800/CST values, so the emitted
/// VTIMEZONE block stays syntactically valid but is only meaningful for
/// the one timezone this tool supports.
#[derive(Debug, Clone, PartialEq)]
pub struct TimezoneDef {
    pub tzid: String,
    /// UTC offset in `±HHMM` form, e.g. `+0800`.
    pub offset: String,
    /// Display abbreviation, e.g. `CST`.
    pub name: String,
}

impl TimezoneDef {
    pub fn for_tzid(tzid: &str) -> Self {
        TimezoneDef {
            tzid: tzid.to_string(),
            offset: "+0800".to_string(),
            name: "CST".to_string(),
        }
    }
}
