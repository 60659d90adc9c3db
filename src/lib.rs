pub mod file_data;
pub mod string_builder;
pub mod timer;

use anyhow::Result;
use std::io::Write;

use file_data::FileData;
use string_builder::StringBuilder;
pub use string_builder::GenConfig;
pub use timer::{measure, measure_to, report, time_once, try_measure, Measurement, Timer};

/// Label under which the concatenation pass is reported.
pub const CONCAT_LABEL: &str = "StringBuilder::data()";
/// Label under which the buffer copy is reported.
pub const COPY_LABEL: &str = "FileData::clone()";

/// Configuration for the demo run.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// How the test strings are generated
    pub gen: GenConfig,
    /// Digits after the decimal point in reported seconds
    pub precision: usize,
    /// Also time the fixed-size buffer copy
    pub copy_buffer: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            gen: GenConfig::default(),
            precision: timer::DEFAULT_PRECISION,
            copy_buffer: true,
        }
    }
}

/// What the demo produced, for callers that want more than the report lines.
#[derive(Debug, Clone)]
pub struct DemoSummary {
    pub n_strings: usize,
    pub concat_len: usize,
}

/// Generate test strings, then time their concatenation (and optionally a
/// buffer copy), writing one report line per timed call to `sink`.
///
/// Data generation happens outside the timed interval.
pub fn run_demo<W: Write>(config: &DemoConfig, sink: &mut W) -> Result<DemoSummary> {
    let mut builder = StringBuilder::new();
    builder.generate_test_data(&config.gen)?;

    let joined = measure_to(&mut *sink, CONCAT_LABEL, config.precision, || builder.data())?;

    if config.copy_buffer {
        let data = FileData::new();
        let _copy = measure_to(&mut *sink, COPY_LABEL, config.precision, || data.clone())?;
    }

    Ok(DemoSummary {
        n_strings: builder.strings().len(),
        concat_len: joined.len(),
    })
}
