//! Console previews of intermediate tables.
//!
//! Purely observational: nothing in here can fail the run. Previews go to
//! stdout; the log stream carries the same milestones for anyone running with
//! RUST_LOG set.

use chrono::NaiveDateTime;
use itertools::izip;

use crate::config::pipeline::PREVIEW_ROWS;
use crate::domain::{ForecastTable, ObservationSeries};
use crate::utils::TimeUtils;

/// First rows of the observation series (the post-transform checkpoint).
pub fn preview_observations_head(series: &ObservationSeries) {
    println!("{:>12}  {:>8}", "ds", "y");
    let n = series.len().min(PREVIEW_ROWS);
    for (t, v) in izip!(&series.timestamps[..n], &series.values[..n]) {
        println!("{:>12}  {:>8.1}", TimeUtils::to_display_date(*t), v);
    }
    print_row_count(series.len());
}

/// Last rows of the extended timeline (the post-extension checkpoint).
pub fn preview_timeline_tail(timeline: &[NaiveDateTime]) {
    println!("{:>12}", "ds");
    for t in tail(timeline) {
        println!("{:>12}", TimeUtils::to_display_date(*t));
    }
    print_row_count(timeline.len());
}

/// Last rows of the forecast table (the post-prediction checkpoint).
pub fn preview_forecast_tail(forecast: &ForecastTable) {
    println!(
        "{:>12}  {:>8}  {:>10}  {:>10}",
        "ds", "yhat", "yhat_lower", "yhat_upper"
    );
    let start = forecast.len().saturating_sub(PREVIEW_ROWS);
    for (t, yhat, lower, upper) in izip!(
        &forecast.timestamps[start..],
        &forecast.yhat[start..],
        &forecast.yhat_lower[start..],
        &forecast.yhat_upper[start..],
    ) {
        println!(
            "{:>12}  {:>8.2}  {:>10.2}  {:>10.2}",
            TimeUtils::to_display_date(*t),
            yhat,
            lower,
            upper
        );
    }
    print_row_count(forecast.len());
}

fn tail<T>(rows: &[T]) -> &[T] {
    &rows[rows.len().saturating_sub(PREVIEW_ROWS)..]
}

fn print_row_count(total: usize) {
    println!("[{} rows]", total);
}
