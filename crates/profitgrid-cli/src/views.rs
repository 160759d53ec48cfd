//! Text rendering of the dashboard screens for `--format table`.

use std::fmt::Write;

use profitgrid_core::format::{self, NOT_AVAILABLE};
use profitgrid_core::{Analyzer, CompanyProfile, KeyMetrics, Quote, WatchlistItem};

const EMPTY_WATCHLIST: &str = "Your watchlist is empty.\nAdd some stocks to get started!";
const EMPTY_ANALYZER: &str = "Enter a stock symbol above to begin your analysis.";

fn row(out: &mut String, label: &str, value: impl AsRef<str>) {
    let _ = writeln!(out, "  {label:<22} {}", value.as_ref());
}

pub fn quote(quote: &Quote) -> String {
    let mut out = format!("{} Overview\n", quote.symbol);
    row(&mut out, "Current Price", format::currency(quote.price));
    row(
        &mut out,
        "Today's Change",
        format!(
            "{} ({}) [{}]",
            format::signed(quote.change.value_or_zero()),
            quote.change_percent,
            quote.change_trend().color()
        ),
    );
    row(&mut out, "Volume", format::grouped(quote.volume));
    row(&mut out, "Open", format::currency(quote.open_price));
    row(&mut out, "High", format::currency(quote.high));
    row(&mut out, "Low", format::currency(quote.low));
    row(
        &mut out,
        "Previous Close",
        quote
            .previous_close
            .value()
            .map_or_else(|| String::from(NOT_AVAILABLE), format::currency),
    );
    row(&mut out, "Last Updated", format::text(Some(quote.last_updated.as_str())));
    out
}

pub fn profile(profile: &CompanyProfile) -> String {
    let mut out = String::from("Company Profile\n");
    row(&mut out, "Company Name", format::text(profile.company_name.as_deref()));
    row(&mut out, "Exchange", format::text(profile.exchange.as_deref()));
    row(&mut out, "Industry", format::text(profile.industry.as_deref()));
    row(&mut out, "Sector", format::text(profile.sector.as_deref()));
    row(&mut out, "CEO", format::text(profile.ceo.as_deref()));
    row(&mut out, "Website", format::text(profile.website.as_deref()));
    row(
        &mut out,
        "Full Time Employees",
        format::grouped_loose(profile.full_time_employees.as_ref()),
    );
    row(&mut out, "Country", format::text(profile.country.as_deref()));
    row(&mut out, "IPO Date", format::text(profile.ipo_date.as_deref()));
    row(
        &mut out,
        "Market Cap",
        profile
            .market_cap
            .as_ref()
            .and_then(|cap| cap.value())
            .map_or_else(|| String::from(NOT_AVAILABLE), |cap| {
                format!("${}", format::grouped(cap.max(0.0).round() as u64))
            }),
    );
    out
}

pub fn metrics(metrics: &KeyMetrics) -> String {
    let mut out = String::from("Key Financial Metrics\n");
    row(&mut out, "Date (Annual)", format::text(metrics.date.as_deref()));
    row(&mut out, "EPS", format::metric(metrics.eps));
    row(&mut out, "P/E Ratio", format::metric(metrics.pe_ratio));
    row(&mut out, "Revenue Per Share", format::metric(metrics.revenue_per_share));
    row(
        &mut out,
        "Net Income Per Share",
        format::metric(metrics.net_income_per_share),
    );
    row(&mut out, "Current Ratio", format::metric(metrics.current_ratio));
    row(&mut out, "Debt to Equity", format::metric(metrics.debt_to_equity));
    row(&mut out, "Dividend Yield", format::metric_percent(metrics.dividend_yield));
    out
}

pub fn watchlist(items: &[WatchlistItem]) -> String {
    if items.is_empty() {
        return String::from(EMPTY_WATCHLIST);
    }

    let mut out = String::from("My Watchlist\n");
    for item in items {
        let _ = writeln!(out, "  - {}", item.symbol);
    }
    out
}

/// Full analyzer screen: error, or quote followed by whatever else loaded.
pub fn analyzer(analyzer: &Analyzer) -> String {
    if let Some(error) = analyzer.error() {
        return format!("Error: {error}");
    }
    let Some(current) = analyzer.quote() else {
        return String::from(EMPTY_ANALYZER);
    };

    let mut sections = vec![quote(current)];
    if let Some(company) = analyzer.profile() {
        sections.push(profile(company));
    }
    if let Some(ratios) = analyzer.metrics() {
        sections.push(metrics(ratios));
    }
    if let Some(chart) = analyzer.chart() {
        sections.push(chart.render_text());
    }
    sections.join("\n")
}
