// SensorDashboard
// Supplied without warranty.
// Use at your own risk.

use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters_iced::{Chart, ChartBuilder as IcedChartBuilder, DrawingBackend};
use tracing::error;

use crate::buffer::Series;
use crate::config::{CHART_CAPTION, Y_RANGE};

/// Line chart of the trailing window on a fixed 0..N x axis.
pub struct CurrentChart<'a> {
    pub series: &'a Series,
}

impl CurrentChart<'_> {
    fn x_max(&self) -> f64 {
        self.series.x.last().copied().unwrap_or(0.0).max(1.0)
    }

    fn draw<DB: DrawingBackend>(
        &self,
        mut builder: IcedChartBuilder<DB>,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        let mut chart = builder
            .caption(CHART_CAPTION, ("sans-serif", 18))
            .margin(10)
            .set_label_area_size(LabelAreaPosition::Left, 40)
            .set_label_area_size(LabelAreaPosition::Bottom, 30)
            .build_cartesian_2d(0f64..self.x_max(), *Y_RANGE.start()..*Y_RANGE.end())?;

        chart.configure_mesh().draw()?;

        let green = ShapeStyle::from(&GREEN).stroke_width(2);
        chart.draw_series(LineSeries::new(self.series.points(), green))?;

        Ok(())
    }
}

impl<Message> Chart<Message> for CurrentChart<'_> {
    type State = ();

    fn build_chart<DB: DrawingBackend>(&self, _state: &Self::State, builder: IcedChartBuilder<DB>) {
        if let Err(e) = self.draw(builder) {
            error!("failed to draw chart: {e}");
        }
    }
}
