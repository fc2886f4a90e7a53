//! SVG line-chart geometry.
//!
//! DESIGN
//! ======
//! Charts are plain SVG: this module maps a series into the viewBox and the
//! `LineChart` component only renders the numbers. Values are clamped to the
//! y-domain so an outlier never draws outside the frame.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

/// One labelled sample.
pub type Point = (&'static str, f64);

/// Drawing area and value domain of a chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub y_max: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 160.0,
            padding: 16.0,
            y_max: 10.0,
        }
    }
}

impl ChartFrame {
    /// Viewport coordinates of each sample, left to right.
    #[must_use]
    pub fn project(&self, series: &[Point]) -> Vec<(f64, f64)> {
        let inner_w = (self.width - 2.0 * self.padding).max(0.0);
        let inner_h = (self.height - 2.0 * self.padding).max(0.0);
        let step = if series.len() > 1 {
            #[allow(clippy::cast_precision_loss)]
            let gaps = (series.len() - 1) as f64;
            inner_w / gaps
        } else {
            0.0
        };
        series
            .iter()
            .enumerate()
            .map(|(i, (_, value))| {
                #[allow(clippy::cast_precision_loss)]
                let x = if series.len() > 1 {
                    self.padding + step * i as f64
                } else {
                    self.width / 2.0
                };
                let ratio = if self.y_max > 0.0 { (value / self.y_max).clamp(0.0, 1.0) } else { 0.0 };
                let y = self.padding + inner_h * (1.0 - ratio);
                (x, y)
            })
            .collect()
    }

    /// `points` attribute for an SVG `<polyline>`.
    #[must_use]
    pub fn polyline(&self, series: &[Point]) -> String {
        self.project(series)
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Y positions of horizontal grid lines at every `step` of the domain.
    #[must_use]
    pub fn grid_lines(&self, step: f64) -> Vec<f64> {
        if step <= 0.0 || self.y_max <= 0.0 {
            return Vec::new();
        }
        let inner_h = self.height - 2.0 * self.padding;
        let mut lines = Vec::new();
        let mut value = 0.0;
        while value <= self.y_max + f64::EPSILON {
            lines.push(self.padding + inner_h * (1.0 - value / self.y_max));
            value += step;
        }
        lines
    }
}

/// Direction of a trend badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// Badge shown next to a chart title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrendBadge {
    pub trend: Trend,
    pub label: &'static str,
}

impl TrendBadge {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self.trend {
            Trend::Up => "trend trend--up",
            Trend::Down => "trend trend--down",
        }
    }

    #[must_use]
    pub fn arrow(self) -> &'static str {
        match self.trend {
            Trend::Up => "\u{2191}",
            Trend::Down => "\u{2193}",
        }
    }
}
