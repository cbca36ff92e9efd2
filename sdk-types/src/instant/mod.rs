/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

/// An instant in time, independent of calendar and time zone.
///
/// Stored as seconds (+ subsecond nanos) relative to the Unix epoch. On the
/// wire, JSON protocols render instants as fractional epoch seconds.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * 1_000_000_000_f64) as u32,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        let duration = system_time
            .duration_since(UNIX_EPOCH)
            .expect("SystemTime can never represent a time before the Unix Epoch");
        Instant {
            seconds: duration.as_secs() as i64,
            subsecond_nanos: duration.subsec_nanos(),
        }
    }

    pub fn from_str(s: &str, format: Format) -> Result<Self, InstantParseError> {
        match format {
            Format::DateTime => {
                let dt = DateTime::parse_from_rfc3339(s)
                    .map_err(|err| InstantParseError(err.to_string()))?;
                Ok(Instant::from_secs_and_nanos(
                    dt.timestamp(),
                    dt.timestamp_subsec_nanos(),
                ))
            }
            Format::EpochSeconds => {
                let epoch: f64 = s
                    .parse()
                    .map_err(|_| InstantParseError(format!("`{}` is not a number", s)))?;
                Ok(Instant::from_f64(epoch))
            }
        }
    }

    fn to_chrono(self) -> DateTime<Utc> {
        DateTime::<Utc>::from_utc(
            NaiveDateTime::from_timestamp(self.seconds, self.subsecond_nanos),
            Utc,
        )
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / 1_000_000_000_f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => {
                let rfc3339 = self
                    .to_chrono()
                    .to_rfc3339_opts(SecondsFormat::AutoSi, true);
                // chrono leaves trailing 0s on the subsecond component
                let mut rfc3339 = rfc3339.trim_end_matches('Z').to_owned();
                if rfc3339.contains('.') {
                    while rfc3339.ends_with('0') {
                        rfc3339.pop();
                    }
                    if rfc3339.ends_with('.') {
                        rfc3339.pop();
                    }
                }
                rfc3339.push('Z');
                rfc3339
            }
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Format {
    DateTime,
    EpochSeconds,
}

#[derive(Debug)]
pub struct InstantParseError(String);

impl std::fmt::Display for InstantParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to parse instant: {}", self.0)
    }
}

impl std::error::Error for InstantParseError {}

#[cfg(test)]
mod test {
    use super::{Format, Instant};

    #[test]
    fn parse_date_time() {
        let instant = Instant::from_str("2019-12-16T23:48:18Z", Format::DateTime).unwrap();
        assert_eq!(instant, Instant::from_epoch_seconds(1576540098));
        assert!(Instant::from_str("not-a-date", Format::DateTime).is_err());
    }

    #[test]
    fn parse_epoch_seconds() {
        let instant = Instant::from_str("1576540098.52", Format::EpochSeconds).unwrap();
        assert_eq!(instant.epoch_seconds(), 1576540098);
        assert!(instant.has_nanos());
    }

    #[test]
    fn round_sub_second_fraction() {
        let instant = Instant::from_f64(1576540098.25);
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.25");
    }
}
