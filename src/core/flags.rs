//! Line decoration flags
//!
//! Controls the header written in front of every emitted line. The bit values
//! match the conventional log flags, so `0` always means "no decoration" and
//! [`Flags::STD`] gives `2015/08/21 20:01:48 `.

use bitflags::bitflags;
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};
use std::panic::Location;

bitflags! {
    /// Decoration applied by the line-writer to each emitted line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Flags: u32 {
        /// Date in the local time zone: `2009/01/23`
        const DATE = 1;
        /// Time in the local time zone: `01:23:23`
        const TIME = 1 << 1;
        /// Microsecond resolution: `01:23:23.123123`. Implies `TIME`.
        const MICROSECONDS = 1 << 2;
        /// Full call-site path and line: `/a/b/c/main.rs:23`
        const LONG_FILE = 1 << 3;
        /// Final path element and line: `main.rs:23`. Overrides `LONG_FILE`.
        const SHORT_FILE = 1 << 4;
        /// Use UTC rather than the local time zone
        const UTC = 1 << 5;
        /// Initial values for a new logger
        const STD = Self::DATE.bits() | Self::TIME.bits();
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::STD
    }
}

impl Flags {
    /// Render the header for a line emitted at `now` from `caller`
    pub fn header(self, now: DateTime<Utc>, caller: &Location<'_>) -> String {
        let mut header = String::new();

        if self.intersects(Flags::DATE | Flags::TIME | Flags::MICROSECONDS) {
            if self.contains(Flags::UTC) {
                self.push_datetime(&mut header, &now);
            } else {
                self.push_datetime(&mut header, &now.with_timezone(&Local));
            }
        }

        if self.intersects(Flags::LONG_FILE | Flags::SHORT_FILE) {
            let file = if self.contains(Flags::SHORT_FILE) {
                caller.file().rsplit(['/', '\\']).next().unwrap_or(caller.file())
            } else {
                caller.file()
            };
            let _ = write!(header, "{}:{}: ", file, caller.line());
        }

        header
    }

    fn push_datetime<Tz>(self, buf: &mut String, datetime: &DateTime<Tz>)
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if self.contains(Flags::DATE) {
            let _ = write!(buf, "{} ", datetime.format("%Y/%m/%d"));
        }
        if self.intersects(Flags::TIME | Flags::MICROSECONDS) {
            let _ = write!(buf, "{}", datetime.format("%H:%M:%S"));
            if self.contains(Flags::MICROSECONDS) {
                let _ = write!(buf, "{}", datetime.format("%.6f"));
            }
            buf.push(' ');
        }
    }
}
