//! Human readable, locale-shaped date and time strings.
//!
//! Layouts per [`Locale`], with every component enabled:
//!
//! | locale  | 24-hour                    | 12-hour                     |
//! |---------|----------------------------|-----------------------------|
//! | `en-US` | `3/5/2024, 14:07:09`       | `3/5/2024, 2:07:09 PM`      |
//! | `en-GB` | `05/03/2024, 14:07:09`     | `05/03/2024, 2:07:09 PM`    |
//! | `es`    | `5/3/2024, 14:07:09`       | `5/3/2024, 2:07:09 PM`      |
//! | `de`    | `5.3.2024, 14:07:09`       | `5.3.2024, 2:07:09 PM`      |
//! | `iso`   | `2024-03-05 14:07:09`      | `2024-03-05 2:07:09 PM`     |

use std::fmt::{Display, Formatter, Write as _};
use std::str::FromStr;

use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Serialized as its tag (`en-US`); deserialized with the same rules as [`FromStr`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    Es,
    De,
    Iso,
}

impl Locale {
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::Es => "es",
            Locale::De => "de",
            Locale::Iso => "iso",
        }
    }

    fn write_date(self, out: &mut String, zdt: &Zoned, with_year: bool) {
        let (y, m, d) = (zdt.year(), zdt.month(), zdt.day());

        // Writing to a String never fails
        let _ = match (self, with_year) {
            (Locale::EnUs, true) => write!(out, "{m}/{d}/{y}"),
            (Locale::EnUs, false) => write!(out, "{m}/{d}"),
            (Locale::EnGb, true) => write!(out, "{d:02}/{m:02}/{y}"),
            (Locale::EnGb, false) => write!(out, "{d:02}/{m:02}"),
            (Locale::Es, true) => write!(out, "{d}/{m}/{y}"),
            (Locale::Es, false) => write!(out, "{d}/{m}"),
            (Locale::De, true) => write!(out, "{d}.{m}.{y}"),
            (Locale::De, false) => write!(out, "{d}.{m}."),
            (Locale::Iso, true) => write!(out, "{y:04}-{m:02}-{d:02}"),
            (Locale::Iso, false) => write!(out, "{m:02}-{d:02}"),
        };
    }

    fn separator(self) -> &'static str {
        match self {
            Locale::Iso => " ",
            _ => ", ",
        }
    }

    fn pads_hour(self) -> bool {
        !matches!(self, Locale::Es)
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "es" | "es-es" | "es-ar" | "es-mx" => Ok(Locale::Es),
            "de" | "de-de" | "de-at" | "de-ch" => Ok(Locale::De),
            "iso" => Ok(Locale::Iso),
            _ => Err(Error::UnknownLocale(s.to_string())),
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse::<Locale>().map_err(D::Error::custom)
    }
}

/// Which components to render and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormat {
    /// Append the time of day after the date
    pub time: bool,
    pub locale: Locale,
    /// 12-hour clock with an AM/PM suffix instead of a 24-hour clock
    pub hour12: bool,
    pub year: bool,
    pub second: bool,
    /// Milliseconds after the seconds; ignored when `second` is false
    pub millis: bool,
}

impl Default for DateFormat {
    fn default() -> Self {
        DateFormat {
            time: true,
            locale: Locale::EnUs,
            hour12: false,
            year: true,
            second: true,
            millis: false,
        }
    }
}

impl DateFormat {
    pub fn format(&self, zdt: &Zoned) -> String {
        let mut out = String::with_capacity(32);
        self.locale.write_date(&mut out, zdt, self.year);

        if self.time {
            out.push_str(self.locale.separator());
            self.write_time(&mut out, zdt);
        }

        out
    }

    pub fn format_timestamp(&self, timestamp: Timestamp, tz: TimeZone) -> String {
        self.format(&timestamp.to_zoned(tz))
    }

    /// Format a millisecond UNIX timestamp in `tz`.
    pub fn format_millis(&self, epoch_millis: i64, tz: TimeZone) -> Result<String> {
        let timestamp = Timestamp::from_millisecond(epoch_millis)?;
        Ok(self.format_timestamp(timestamp, tz))
    }

    /// Format the current time in the system time zone.
    pub fn format_now(&self) -> String {
        self.format(&Zoned::now())
    }

    fn write_time(&self, out: &mut String, zdt: &Zoned) {
        let hour = zdt.hour();

        let _ = if self.hour12 {
            let h12 = match hour % 12 {
                0 => 12,
                h => h,
            };
            write!(out, "{h12}:{:02}", zdt.minute())
        } else if self.locale.pads_hour() {
            write!(out, "{hour:02}:{:02}", zdt.minute())
        } else {
            write!(out, "{hour}:{:02}", zdt.minute())
        };

        if self.second {
            let _ = write!(out, ":{:02}", zdt.second());

            if self.millis {
                let _ = write!(out, ".{:03}", zdt.millisecond());
            }
        }

        if self.hour12 {
            out.push_str(if hour < 12 { " AM" } else { " PM" });
        }
    }
}
