// SensorDashboard
// Supplied without warranty.
// Use at your own risk.

//! Fixed settings. Changing the port or baud rate means editing this file.

use std::ops::RangeInclusive;
use std::time::Duration;

use iced::{window, Point, Size};

// ---------------- Serial ----------------

/// Device name of the sensor board. On Windows look under
/// Device Manager → Ports (COM & LPT).
#[cfg(windows)]
pub const SERIAL_PORT: &str = "COM3";
#[cfg(not(windows))]
pub const SERIAL_PORT: &str = "/dev/ttyUSB0";

/// Must match the rate the board's firmware writes at.
pub const BAUD_RATE: u32 = 115_200;

/// Upper bound on one blocking line read.
pub const READ_TIMEOUT: Duration = Duration::from_millis(1000);

// ---------------- Sampling / plot ----------------

pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(1000);

/// Number of trailing samples kept and plotted.
pub const WINDOW_POINTS: usize = 50;

pub const Y_RANGE: RangeInclusive<f64> = 0.0..=100.0;

pub const LABEL_PREFIX: &str = "Corrente:";
pub const UNIT: &str = "A";
pub const CHART_CAPTION: &str = "Corrente ao longo do tempo";

// ---------------- Window ----------------

pub const WINDOW_TITLE: &str = "Sensor Dashboard";
pub const WINDOW_POSITION: (f32, f32) = (100.0, 100.0);
pub const WINDOW_SIZE: (f32, f32) = (600.0, 400.0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialConfig {
    pub port_name: String,
    pub baud_rate: u32,
    pub timeout: Duration,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port_name: SERIAL_PORT.to_string(),
            baud_rate: BAUD_RATE,
            timeout: READ_TIMEOUT,
        }
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_SIZE.0, WINDOW_SIZE.1),
        position: window::Position::Specific(Point::new(WINDOW_POSITION.0, WINDOW_POSITION.1)),
        ..Default::default()
    }
}
