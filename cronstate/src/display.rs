use std::fmt;

use crate::ast::*;

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders the entry as one cron token: `5`, `1-15`, `*` or `*/5`.
impl fmt::Display for IntervalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalEntry::At(value) => write!(f, "{value}"),
            IntervalEntry::From(start, end) => write!(f, "{start}-{end}"),
            IntervalEntry::Every(1) => write!(f, "*"),
            IntervalEntry::Every(step) => write!(f, "*/{step}"),
        }
    }
}
