use serde::Serialize;

use crate::{ChartPeriod, PriceHistory, Trend};

pub const EMPTY_CHART_MESSAGE: &str = "No historical data available for charting.";

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Closing-price line chart for one symbol and window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub label: String,
    pub period: ChartPeriod,
    pub labels: Vec<String>,
    pub closes: Vec<f64>,
    pub trend: Trend,
    pub color: &'static str,
}

impl ChartSeries {
    pub fn from_history(symbol: &str, history: &PriceHistory, period: ChartPeriod) -> Self {
        let sorted = history.sorted();
        let labels = sorted
            .prices
            .iter()
            .map(|point| {
                point
                    .day()
                    .map(|day| period.format_label(day))
                    .unwrap_or_else(|_| point.date.clone())
            })
            .collect();
        let closes = sorted.prices.iter().map(|point| point.close).collect();
        let trend = sorted.trend();

        Self {
            title: format!("{symbol} Daily Closing Price"),
            label: format!("{symbol} Close Price"),
            period,
            labels,
            closes,
            trend,
            color: trend.color(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// One block character per close, scaled between the window's min and max.
    pub fn sparkline(&self) -> String {
        let (min, max) = self
            .closes
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let span = max - min;
        let top = SPARK_LEVELS.len() - 1;

        self.closes
            .iter()
            .map(|&close| {
                if span <= f64::EPSILON {
                    return SPARK_LEVELS[top / 2];
                }
                let level = ((close - min) / span * top as f64).round() as usize;
                SPARK_LEVELS[level.min(top)]
            })
            .collect()
    }

    /// Terminal rendering: title, sparkline, axis bounds and trend.
    pub fn render_text(&self) -> String {
        if self.is_empty() {
            return String::from(EMPTY_CHART_MESSAGE);
        }

        let first_label = self.labels.first().map(String::as_str).unwrap_or_default();
        let last_label = self.labels.last().map(String::as_str).unwrap_or_default();
        format!(
            "{} ({})\n{}\n{} .. {}  trend: {}",
            self.title,
            self.period,
            self.sparkline(),
            first_label,
            last_label,
            self.color
        )
    }
}
