use anyhow::{Context, Result};
use std::fmt;
use std::io::Write;
use std::time::{Duration, Instant};

/// Digits after the decimal point when no precision is requested.
pub const DEFAULT_PRECISION: usize = 6;

/// Elapsed time of one timed call, tagged with the caller's label.
///
/// Formats as `Execution time of <label>: <seconds> seconds`. The seconds
/// are always fixed-point; `{:.3}` overrides the default precision.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub label: String,
    pub elapsed: Duration,
}

impl Measurement {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(
            f,
            "Execution time of {}: {:.*} seconds",
            self.label,
            precision,
            self.seconds()
        )
    }
}

/// Monotonic stopwatch started at construction.
pub struct Timer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> Timer<'a> {
    pub fn start(label: &'a str) -> Self {
        Self { label, start: Instant::now() }
    }

    pub fn finish(self) -> Measurement {
        let elapsed = self.start.elapsed();
        Measurement { label: self.label.to_string(), elapsed }
    }
}

/// Run `op` once and return its result together with the measurement.
///
/// The clock is read immediately before and after the call; the label is
/// only copied once the second reading has been taken.
pub fn time_once<R>(label: &str, op: impl FnOnce() -> R) -> (R, Measurement) {
    let timer = Timer::start(label);
    let out = op();
    (out, timer.finish())
}

/// Run `op` once and report its wall-clock time on stderr.
///
/// A panic inside `op` unwinds straight through: nothing is reported.
pub fn measure<R>(label: &str, op: impl FnOnce() -> R) -> R {
    let (out, m) = time_once(label, op);
    // stderr is locked only after `op` returns; a failed write there has
    // nowhere to go, and must not cost the caller `op`'s result.
    let _ = report(&mut std::io::stderr().lock(), &m, DEFAULT_PRECISION);
    out
}

/// Like [`measure`], but the report line goes to `sink`.
pub fn measure_to<W: Write, R>(
    sink: &mut W,
    label: &str,
    precision: usize,
    op: impl FnOnce() -> R,
) -> Result<R> {
    let (out, m) = time_once(label, op);
    report(sink, &m, precision)?;
    Ok(out)
}

/// Write `m` as one report line. Shared by every `measure*` entry point.
pub fn report<W: Write>(sink: &mut W, m: &Measurement, precision: usize) -> Result<()> {
    writeln!(sink, "{:.*}", precision, m)
        .with_context(|| format!("Failed to report measurement for '{}'", m.label))?;
    sink.flush()
        .with_context(|| format!("Failed to report measurement for '{}'", m.label))
}

/// Time a fallible operation.
///
/// The measurement is reported on stderr whether `op` succeeds or fails,
/// then its result is handed back untouched, so an `Err` reaches the caller
/// exactly as `op` produced it.
pub fn try_measure<T, E>(label: &str, op: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
    measure(label, op)
}
