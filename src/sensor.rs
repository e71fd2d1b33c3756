// SensorDashboard
// Supplied without warranty.
// Use at your own risk.

//! Serial side of the dashboard: the connection handle and the one-line reader.
//!
//! The board prints one decimal number per line (`12.5\r\n`). Nothing else is
//! framed or acknowledged, so a read either yields a number or falls back to
//! zero.

use std::io::{self, BufRead, BufReader, Read};

use chrono::Local;
use serialport::{SerialPort, SerialPortType};
use tracing::{debug, error, info, warn};

use crate::config::SerialConfig;
use crate::error::{Result, SensorError};

/// Anything that can hand over one raw line of bytes.
///
/// A returned empty vector means nothing arrived before the timeout.
pub trait LineSource: Send {
    fn read_line(&mut self) -> io::Result<Vec<u8>>;
}

/// Line reader over a byte stream with a read timeout (normally the serial port).
pub struct SerialLine<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> SerialLine<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: BufReader::new(inner),
        }
    }
}

impl<R: Read + Send> LineSource for SerialLine<R> {
    fn read_line(&mut self) -> io::Result<Vec<u8>> {
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(_) => Ok(line),
            // read_until keeps what it consumed before the timeout
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(line),
            Err(e) => Err(e),
        }
    }
}

/// Why a tick produced no real sample.
#[derive(Debug)]
pub enum Fallback {
    /// The port never opened.
    Disconnected,
    /// Nothing (or only whitespace) arrived within the timeout.
    Silent,
    Invalid(SensorError),
}

/// Outcome of one [`SensorReader::read_sensor`] call.
#[derive(Debug)]
pub enum Reading {
    Value(f64),
    Fallback(Fallback),
}

impl Reading {
    /// Displayable value. Every fallback reads as zero.
    pub fn value(&self) -> f64 {
        match self {
            Reading::Value(v) => *v,
            Reading::Fallback(_) => 0.0,
        }
    }

    /// Label text: the parsed number keeps its decimal point (`10.0`),
    /// a fallback shows a bare `0`.
    pub fn display_value(&self) -> String {
        match self {
            Reading::Value(v) => format!("{v:?}"),
            Reading::Fallback(_) => "0".to_string(),
        }
    }
}

fn timestamp() -> impl std::fmt::Display {
    Local::now().format("%Y-%m-%d %H:%M:%S")
}

/// Decode, trim and parse one raw line. `Ok(None)` for an empty line.
pub fn parse_line(raw: &[u8]) -> Result<Option<f64>> {
    let text = std::str::from_utf8(raw)?.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<f64>()
        .map(Some)
        .map_err(|source| SensorError::Parse {
            line: text.to_string(),
            source,
        })
}

/// Owns the connection handle, if there is one.
pub struct SensorReader {
    conn: Option<Box<dyn LineSource>>,
}

impl SensorReader {
    /// Try the port once. On failure the reader stays disconnected for good.
    pub fn open(cfg: &SerialConfig) -> Self {
        match open_port(cfg) {
            Ok(port) => {
                info!(port = %cfg.port_name, baud = cfg.baud_rate, "serial port opened");
                Self::with_source(SerialLine::new(port))
            }
            Err(e) => {
                error!("{}: {e}", timestamp());
                log_available_ports();
                Self::disconnected()
            }
        }
    }

    pub fn disconnected() -> Self {
        Self { conn: None }
    }

    pub fn with_source(source: impl LineSource + 'static) -> Self {
        Self {
            conn: Some(Box::new(source)),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Read one line and turn it into a sample. Never fails; see [`Reading::value`].
    pub fn read_sensor(&mut self) -> Reading {
        let Some(conn) = self.conn.as_mut() else {
            debug!("no serial connection, using 0");
            return Reading::Fallback(Fallback::Disconnected);
        };

        let parsed = conn
            .read_line()
            .map_err(SensorError::from)
            .and_then(|raw| parse_line(&raw));

        match parsed {
            Ok(Some(v)) => Reading::Value(v),
            Ok(None) => {
                debug!("no data within timeout");
                Reading::Fallback(Fallback::Silent)
            }
            Err(e) => {
                warn!("{}: {e}", timestamp());
                Reading::Fallback(Fallback::Invalid(e))
            }
        }
    }
}

fn open_port(cfg: &SerialConfig) -> Result<Box<dyn SerialPort>> {
    serialport::new(&cfg.port_name, cfg.baud_rate)
        .timeout(cfg.timeout)
        .open()
        .map_err(|source| SensorError::Open {
            port: cfg.port_name.clone(),
            source,
        })
}

// ---------------- Port listing (operator hint) ----------------

pub fn describe_port(port_name: &str, port_type: &SerialPortType) -> String {
    match port_type {
        SerialPortType::UsbPort(info) => {
            let parts: Vec<&str> = [info.manufacturer.as_deref(), info.product.as_deref()]
                .into_iter()
                .flatten()
                .collect();
            if parts.is_empty() {
                format!("{port_name}: USB Serial")
            } else {
                format!("{port_name}: {}", parts.join(" "))
            }
        }
        SerialPortType::BluetoothPort => format!("{port_name}: Bluetooth"),
        SerialPortType::PciPort => format!("{port_name}: PCI"),
        SerialPortType::Unknown => port_name.to_string(),
    }
}

/// Port descriptions such as `COM7: FTDI FT232R USB UART`, sorted.
pub fn available_ports() -> Vec<String> {
    let mut out: Vec<String> = match serialport::available_ports() {
        Ok(ports) => ports
            .iter()
            .map(|p| describe_port(&p.port_name, &p.port_type))
            .collect(),
        Err(e) => {
            warn!("could not enumerate serial ports: {e}");
            Vec::new()
        }
    };

    out.sort();
    out
}

fn log_available_ports() {
    let ports = available_ports();
    if ports.is_empty() {
        info!("no serial ports found; readings will stay at 0");
        return;
    }
    info!("available serial ports: {}", ports.join(", "));
}
