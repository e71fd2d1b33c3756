// SensorDashboard
// Supplied without warranty.
// Use at your own risk.

use thiserror::Error;

/// Everything that can go wrong between the serial port and a parsed sample.
#[derive(Debug, Error)]
pub enum SensorError {
    #[error("failed to open serial port {port}: {source}")]
    Open {
        port: String,
        #[source]
        source: serialport::Error,
    },

    #[error("serial read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("received bytes are not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("failed to parse '{line}' as a number: {source}")]
    Parse {
        line: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

pub type Result<T, E = SensorError> = std::result::Result<T, E>;
