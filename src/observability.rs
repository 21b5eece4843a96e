// In: src/observability.rs

//! Logger setup for binaries and embedding services. The library itself only
//! emits through the `log` facade; nothing in the codec initializes a logger.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Once;

use log::LevelFilter;

use crate::error::HuffpackError;

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` that prints `[LEVEL] message` lines, to stderr or,
/// when `log_file` is given, appended to that file.
///
/// Only the first call has any effect. `RUST_LOG` still overrides `level` per
/// module when set.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), HuffpackError> {
    // Open the file up front so the failure surfaces to the caller.
    let file = log_file
        .map(|path| OpenOptions::new().append(true).create(true).open(path))
        .transpose()?;

    INIT_LOGGER.call_once(move || {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(level);
        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        builder.format(|buf, record| {
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });

    Ok(())
}
