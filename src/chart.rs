use bon::Builder;
use itertools::Itertools;
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::prelude::{DrawingArea, DrawingAreaErrorKind, DrawingBackend, IntoSegmentedCoord};
use plotters::series::Histogram;
use plotters::style::{Color, RGBColor, WHITE};

use crate::stats::{mean, stddev};

#[allow(type_alias_bounds)]
pub type ChartResult<DB: DrawingBackend> = Result<(), DrawingAreaErrorKind<DB::ErrorType>>;

const BAR_COLOR: RGBColor = RGBColor(0x1F, 0x77, 0xB4);
const OVERLAY_COLOR: RGBColor = RGBColor(0xEF, 0x97, 0x06);
const OVERLAY_ALPHA: f64 = 0.75;
const MAX_X_LABELS: usize = 45;

/// Bar chart of one pool's distribution, or of two overlaid for comparison.
/// Bars sit at every success count from zero up; heights are percentages.
#[derive(Builder, Debug, Clone)]
#[builder(start_fn(name = "new"), finish_fn(vis = ""))]
pub struct PoolChart<'a> {
    #[builder(start_fn)]
    dice: i32,
    #[builder(start_fn)]
    dist: &'a [f64],
    overlay: Option<(i32, &'a [f64])>,
}

impl PoolChart<'_> {
    pub fn render<DB>(&self, area: DrawingArea<DB, Shift>) -> ChartResult<DB>
    where
        DB: DrawingBackend,
    {
        let percents = scaled(self.dist);
        let overlay = self.overlay.map(|(_, dist)| scaled(dist));
        let len = percents
            .len()
            .max(overlay.as_ref().map_or(0, Vec::len));
        let y_max = percents
            .iter()
            .chain(overlay.iter().flatten())
            .copied()
            .max_by(f64::total_cmp)
            .unwrap_or(100.0);

        area.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&area);
        chart
            .x_label_area_size(35)
            .y_label_area_size(50)
            .margin(10)
            .caption(self.caption(), ("sans-serif", 16.0));

        let x_max = (len as i32 - 1).max(0);
        let mut coord = chart.build_cartesian_2d((0..x_max).into_segmented(), 0f64..y_max)?;

        coord
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(len.min(MAX_X_LABELS))
            .y_label_formatter(&|y: &f64| format!("{y:5.1}%"))
            .x_desc("Number of successes")
            .y_desc("% chance")
            .draw()?;

        let alpha = if overlay.is_some() { OVERLAY_ALPHA } else { 1.0 };
        coord.draw_series(
            Histogram::vertical(&coord)
                .style(BAR_COLOR.mix(alpha).filled())
                .margin(1)
                .data(bars(&percents)),
        )?;
        if let Some(overlay) = &overlay {
            coord.draw_series(
                Histogram::vertical(&coord)
                    .style(OVERLAY_COLOR.mix(OVERLAY_ALPHA).filled())
                    .margin(1)
                    .data(bars(overlay)),
            )?;
        }

        Ok(())
    }

    fn caption(&self) -> String {
        match self.overlay {
            Some((other, _)) => format!("{} and {} dice", self.dice, other),
            None => format!(
                "{} dice | mean: {:.3}±{:.3}",
                self.dice,
                mean(self.dist),
                stddev(self.dist)
            ),
        }
    }
}

impl<'a, S> PoolChartBuilder<'a, S>
where
    S: pool_chart_builder::State,
    S: pool_chart_builder::IsComplete,
{
    pub fn render<DB>(self, area: DrawingArea<DB, Shift>) -> ChartResult<DB>
    where
        DB: DrawingBackend,
    {
        self.build().render(area)
    }
}

fn scaled(dist: &[f64]) -> Vec<f64> {
    dist.iter().map(|p| p * 100.0).collect_vec()
}

fn bars(percents: &[f64]) -> impl Iterator<Item = (i32, f64)> + '_ {
    percents
        .iter()
        .enumerate()
        .map(|(successes, y)| (successes as i32, *y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captions_name_the_pools() {
        let d2 = [0.25, 0.5, 0.24, 0.0, 0.01];
        let d3 = [0.125, 0.375, 0.36, 0.112, 0.015, 0.013];
        assert_eq!(
            PoolChart::new(2, &d2).build().caption(),
            "2 dice | mean: 1.020±0.761"
        );
        assert_eq!(
            PoolChart::new(2, &d2)
                .overlay((3, d3.as_slice()))
                .build()
                .caption(),
            "2 and 3 dice"
        );
    }
}
