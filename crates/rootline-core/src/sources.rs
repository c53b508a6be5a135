//! Long-lived metric source handles.
//!
//! The three pseudo-files are opened once at startup and held for the life
//! of the process. Open and read failures are fatal by design; there is no
//! retry, fallback path, or lazy re-open.

use std::fs::File;

use anyhow::{Context, Result};

use crate::{head, parse};

/// System load averages (1/5/15-minute), space-separated leading tokens.
pub const LOADAVG: &str = "/proc/loadavg";
/// Battery energy currently stored, one numeric token.
pub const ENERGY_NOW: &str = "/sys/class/power_supply/BAT0/energy_now";
/// Battery energy at full charge, one numeric token.
pub const ENERGY_FULL: &str = "/sys/class/power_supply/BAT0/energy_full";

/// Capacity of the per-read sample buffer, terminator included.
const SAMPLE_CAP: usize = 32;

/// The fixed set of read handles sampled every iteration.
pub struct MetricSources {
    loadavg: File,
    energy_now: File,
    energy_full: File,
}

/// One iteration's worth of parsed metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSample {
    pub load1: f64,
    pub load5: f64,
    pub load15: f64,
    pub energy_now: f64,
    pub energy_full: f64,
}

impl MetricSample {
    /// Estimated charge fraction, `energy_now / energy_full`.
    ///
    /// Plain floating-point division: a zero or malformed full-energy
    /// reading propagates as NaN/inf rather than being guarded.
    pub fn battery_fraction(&self) -> f64 {
        self.energy_now / self.energy_full
    }
}

impl MetricSources {
    /// Opens the three fixed source paths read-only.
    ///
    /// # Errors
    /// Returns an error naming the path and the OS error if any open fails.
    pub fn open() -> Result<Self> {
        Ok(Self {
            loadavg: open_source(LOADAVG)?,
            energy_now: open_source(ENERGY_NOW)?,
            energy_full: open_source(ENERGY_FULL)?,
        })
    }

    #[cfg(test)]
    fn from_files(loadavg: File, energy_now: File, energy_full: File) -> Self {
        Self {
            loadavg,
            energy_now,
            energy_full,
        }
    }

    /// Reads and parses all three sources.
    ///
    /// Each source is re-read from offset 0, so the sample reflects the
    /// pseudo-files' current content. Malformed content parses best-effort;
    /// only the reads themselves can fail.
    ///
    /// # Errors
    /// Returns an error naming the path and the OS error if any read fails.
    pub fn sample(&self) -> Result<MetricSample> {
        let mut buf = [0u8; SAMPLE_CAP];

        read_source(&self.loadavg, LOADAVG, &mut buf)?;
        let (load1, load5, load15) = parse::load_averages(head::as_text(&buf));

        read_source(&self.energy_now, ENERGY_NOW, &mut buf)?;
        let energy_now = parse::leading_f64(head::as_text(&buf));

        read_source(&self.energy_full, ENERGY_FULL, &mut buf)?;
        let energy_full = parse::leading_f64(head::as_text(&buf));

        Ok(MetricSample {
            load1,
            load5,
            load15,
            energy_now,
            energy_full,
        })
    }
}

fn open_source(path: &str) -> Result<File> {
    File::open(path).with_context(|| format!("open “{path}”"))
}

fn read_source(file: &File, path: &str, buf: &mut [u8]) -> Result<()> {
    head::read_head(file, buf).with_context(|| format!("read from “{path}”"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::{Seek, SeekFrom, Write};

    use super::{MetricSample, MetricSources};

    fn temp_file_with(content: &str) -> std::fs::File {
        let mut file = tempfile::tempfile().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write content");
        file.seek(SeekFrom::Start(0)).expect("rewind");
        file
    }

    #[test]
    fn samples_parse_all_sources() {
        let sources = MetricSources::from_files(
            temp_file_with("1.23 4.56 7.89 1/257 12345\n"),
            temp_file_with("50000\n"),
            temp_file_with("100000\n"),
        );

        let sample = sources.sample().expect("sample succeeds");
        assert_eq!(sample.load1, 1.23);
        assert_eq!(sample.load5, 4.56);
        assert_eq!(sample.load15, 7.89);
        assert_eq!(sample.energy_now, 50000.0);
        assert_eq!(sample.energy_full, 100000.0);
        assert_eq!(sample.battery_fraction(), 0.5);
    }

    #[test]
    fn repeated_samples_track_current_content() {
        let mut loadavg = temp_file_with("0.10 0.20 0.30\n");
        let sources = MetricSources::from_files(
            loadavg.try_clone().expect("clone handle"),
            temp_file_with("1"),
            temp_file_with("2"),
        );

        let first = sources.sample().expect("first sample");
        assert_eq!(first.load1, 0.10);

        // Pseudo-files regenerate on each access; emulate by rewriting.
        loadavg.seek(SeekFrom::Start(0)).expect("rewind");
        loadavg.write_all(b"0.99 0.20 0.30\n").expect("rewrite");

        let second = sources.sample().expect("second sample");
        assert_eq!(second.load1, 0.99);
    }

    #[test]
    fn empty_battery_sources_divide_to_nan() {
        let sample = MetricSample {
            load1: 0.0,
            load5: 0.0,
            load15: 0.0,
            energy_now: 0.0,
            energy_full: 0.0,
        };
        assert!(sample.battery_fraction().is_nan());
    }
}
