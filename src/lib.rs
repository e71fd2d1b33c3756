// SensorDashboard
// Supplied without warranty.
// Use at your own risk.

//! Live plot of one current reading streamed over a serial port.
//!
//! Once a second the dashboard reads a line from the board, shows the value
//! and redraws the last 50 samples.

pub mod app;
pub mod buffer;
pub mod chart;
pub mod config;
pub mod error;
pub mod sensor;

pub use app::{Dashboard, Message};
pub use buffer::{RollingBuffer, Series};
pub use error::SensorError;
pub use sensor::{Fallback, LineSource, Reading, SensorReader, SerialLine};
