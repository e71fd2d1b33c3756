// SensorDashboard
// Supplied without warranty.
// Use at your own risk.

use iced::time;
use iced::widget::{column, text};
use iced::{Element, Length, Subscription, Task};
use plotters_iced::ChartWidget;

use crate::buffer::{RollingBuffer, Series};
use crate::chart::CurrentChart;
use crate::config::{self, SerialConfig, LABEL_PREFIX, SAMPLE_INTERVAL, UNIT, WINDOW_POINTS};
use crate::sensor::{Reading, SensorReader};

#[derive(Debug, Clone)]
pub enum Message {
    Tick,
}

fn label_for(value: impl std::fmt::Display) -> String {
    format!("{LABEL_PREFIX} {value} {UNIT}")
}

pub fn format_label(reading: &Reading) -> String {
    label_for(reading.display_value())
}

/// Window state: the connection, the trailing samples and what is on screen.
pub struct Dashboard {
    reader: SensorReader,
    buffer: RollingBuffer,
    label: String,
    series: Series,
}

impl Dashboard {
    pub fn new(reader: SensorReader) -> Self {
        Self {
            reader,
            buffer: RollingBuffer::new(WINDOW_POINTS),
            label: label_for(0),
            series: Series::zeros(WINDOW_POINTS),
        }
    }

    pub fn title(&self) -> String {
        config::WINDOW_TITLE.to_string()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn buffer(&self) -> &RollingBuffer {
        &self.buffer
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn is_connected(&self) -> bool {
        self.reader.is_connected()
    }

    /// One sampling cycle: read, relabel, push, re-plot.
    fn update_plot(&mut self) {
        let reading = self.reader.read_sensor();
        self.label = format_label(&reading);
        self.buffer.push(reading.value());
        self.series.set_from(&self.buffer);
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => self.update_plot(),
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let chart = CurrentChart {
            series: &self.series,
        };

        let plot: Element<Message> = ChartWidget::new(chart)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        column![text(self.label.as_str()).size(24.0), plot]
            .spacing(10)
            .padding(10)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        time::every(SAMPLE_INTERVAL).map(|_| Message::Tick)
    }
}

/// Open the port once and run the window until it is closed.
pub fn run(serial: SerialConfig) -> iced::Result {
    iced::application(Dashboard::title, Dashboard::update, Dashboard::view)
        .subscription(Dashboard::subscription)
        .window(config::window_settings())
        .antialiasing(true)
        .run_with(move || (Dashboard::new(SensorReader::open(&serial)), Task::none()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::tests::Scripted;
    use crate::sensor::Fallback;

    #[test]
    fn initial_view_is_flat_zero() {
        let dash = Dashboard::new(SensorReader::disconnected());
        assert_eq!(dash.label(), "Corrente: 0 A");
        assert!(dash.buffer().is_empty());
        assert_eq!(dash.series().x.len(), 50);
        assert_eq!(dash.series().y, vec![0.0; 50]);
        assert_eq!(dash.title(), "Sensor Dashboard");
    }

    #[test]
    fn label_keeps_decimal_point_of_parsed_values() {
        assert_eq!(format_label(&Reading::Value(10.0)), "Corrente: 10.0 A");
        assert_eq!(format_label(&Reading::Value(20.5)), "Corrente: 20.5 A");
        assert_eq!(format_label(&Reading::Value(-1.25)), "Corrente: -1.25 A");
        assert_eq!(
            format_label(&Reading::Fallback(Fallback::Silent)),
            "Corrente: 0 A"
        );
    }

    #[test]
    fn whole_number_reading_shows_trailing_zero() {
        let mut dash = Dashboard::new(SensorReader::with_source(Scripted::lines(&["10.0\n"])));
        let _ = dash.update(Message::Tick);
        assert_eq!(dash.label(), "Corrente: 10.0 A");
        assert_eq!(dash.buffer().to_vec(), vec![10.0]);
    }

    #[test]
    fn tick_reads_labels_and_plots() {
        let mut dash = Dashboard::new(SensorReader::with_source(Scripted::lines(&["7.5\n"])));
        assert!(dash.is_connected());

        let _ = dash.update(Message::Tick);

        assert_eq!(dash.label(), "Corrente: 7.5 A");
        assert_eq!(dash.buffer().to_vec(), vec![7.5]);
        assert_eq!(dash.series().y[0], 7.5);
        assert!(dash.series().y[1..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn garbage_tick_plots_zero_and_keeps_going() {
        let mut dash =
            Dashboard::new(SensorReader::with_source(Scripted::lines(&["oops\n", "3\n"])));
        let _ = dash.update(Message::Tick);
        assert_eq!(dash.label(), "Corrente: 0 A");
        let _ = dash.update(Message::Tick);
        assert_eq!(dash.label(), "Corrente: 3.0 A");
        assert_eq!(dash.buffer().to_vec(), vec![0.0, 3.0]);
    }
}
