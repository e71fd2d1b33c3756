// SensorDashboard
// Supplied without warranty.
// Use at your own risk.

use sensor_dashboard::config::SerialConfig;
use tracing::Level;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let serial = SerialConfig::default();
    tracing::info!(
        "sensor-dashboard v{} starting on {} @ {} baud",
        env!("CARGO_PKG_VERSION"),
        serial.port_name,
        serial.baud_rate
    );

    sensor_dashboard::app::run(serial)
}
