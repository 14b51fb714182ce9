//! Additive trend + seasonality model.
//!
//! y(t) = trend(t) + seasonal(month of t), fitted with ordinary least squares
//! for the trend and per-month means of the detrended series for the
//! seasonality. Uncertainty bounds come from the residual standard deviation,
//! widened with the square root of the forecast horizon.

use anyhow::{Context, Result, anyhow};
use chrono::{Datelike, NaiveDateTime};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::domain::{ForecastTable, Frequency, ObservationSeries};
use crate::forecast::Forecaster;

/// Two points define a line; anything less has no trend to fit.
const MIN_OBSERVATIONS_FOR_FIT: usize = 2;

/// Width of the uncertainty interval (0.8 = 80%)
const INTERVAL_WIDTH: f64 = 0.8;

const SECONDS_PER_DAY: f64 = 86_400.0;
const MONTHS_PER_YEAR: usize = 12;

/// Everything learned from `fit`, kept together so an unfitted model is
/// simply `state: None`.
#[derive(Debug, Clone)]
struct FittedState {
    /// Timestamp the trend line is anchored at (first observation)
    origin: NaiveDateTime,
    slope_per_day: f64,
    intercept: f64,
    /// Mean detrended value per calendar month (index 0 = January)
    seasonal_by_month: [f64; MONTHS_PER_YEAR],
    /// Residual standard deviation after removing trend and seasonality
    sigma: f64,
    /// Normal quantile matching `INTERVAL_WIDTH`
    z_score: f64,
    /// The timestamps the model was fitted on
    history: Vec<NaiveDateTime>,
}

#[derive(Debug, Clone, Default)]
pub struct AdditiveModel {
    state: Option<FittedState>,
}

impl AdditiveModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    /// Seasonal offsets per calendar month, for the decomposition figure.
    pub fn seasonal_profile(&self) -> Option<[f64; MONTHS_PER_YEAR]> {
        self.state.as_ref().map(|s| s.seasonal_by_month)
    }

    fn fitted(&self) -> Result<&FittedState> {
        self.state
            .as_ref()
            .ok_or_else(|| anyhow!("model has not been fitted"))
    }
}

impl FittedState {
    fn days_since_origin(&self, t: NaiveDateTime) -> f64 {
        (t - self.origin).num_seconds() as f64 / SECONDS_PER_DAY
    }

    fn trend_at(&self, t: NaiveDateTime) -> f64 {
        self.intercept + self.slope_per_day * self.days_since_origin(t)
    }

    fn seasonal_at(&self, t: NaiveDateTime) -> f64 {
        self.seasonal_by_month[t.month0() as usize]
    }

    fn last_observed(&self) -> NaiveDateTime {
        *self.history.last().expect("fitted history is never empty")
    }
}

impl Forecaster for AdditiveModel {
    fn fit(&mut self, observations: &ObservationSeries) -> Result<()> {
        if observations.len() < MIN_OBSERVATIONS_FOR_FIT {
            return Err(anyhow!(
                "need at least {} observations, got {}",
                MIN_OBSERVATIONS_FOR_FIT,
                observations.len()
            ));
        }
        if !observations.is_strictly_increasing() {
            return Err(anyhow!(
                "timestamps must be strictly increasing (no duplicates, no backwards jumps)"
            ));
        }
        if observations.values.iter().any(|v| !v.is_finite()) {
            return Err(anyhow!("series contains non-finite values"));
        }

        let origin = observations.timestamps[0];
        let xs: Vec<f64> = observations
            .timestamps
            .iter()
            .map(|&t| (t - origin).num_seconds() as f64 / SECONDS_PER_DAY)
            .collect();
        let ys = &observations.values;
        let n = xs.len() as f64;

        // OLS trend line
        let x_mean = xs.iter().sum::<f64>() / n;
        let y_mean = ys.iter().sum::<f64>() / n;
        let covariance: f64 = xs
            .iter()
            .zip(ys)
            .map(|(x, y)| (x - x_mean) * (y - y_mean))
            .sum();
        let variance: f64 = xs.iter().map(|x| (x - x_mean).powi(2)).sum();
        // Strictly increasing timestamps with n >= 2 guarantee variance > 0
        let slope_per_day = covariance / variance;
        let intercept = y_mean - slope_per_day * x_mean;

        // Seasonal component: mean detrended value per calendar month
        let detrended: Vec<f64> = xs
            .iter()
            .zip(ys)
            .map(|(x, y)| y - (intercept + slope_per_day * x))
            .collect();

        let mut month_sums = [0.0; MONTHS_PER_YEAR];
        let mut month_counts = [0usize; MONTHS_PER_YEAR];
        for (t, d) in observations.timestamps.iter().zip(&detrended) {
            let month = t.month0() as usize;
            month_sums[month] += d;
            month_counts[month] += 1;
        }
        let mut seasonal_by_month = [0.0; MONTHS_PER_YEAR];
        for month in 0..MONTHS_PER_YEAR {
            if month_counts[month] > 0 {
                seasonal_by_month[month] = month_sums[month] / month_counts[month] as f64;
            }
        }

        // Residual spread drives the uncertainty band
        let residual_sq_sum: f64 = observations
            .timestamps
            .iter()
            .zip(&detrended)
            .map(|(t, d)| (d - seasonal_by_month[t.month0() as usize]).powi(2))
            .sum();
        let sigma = (residual_sq_sum / n).sqrt();

        let standard_normal =
            Normal::new(0.0, 1.0).context("failed to build standard normal distribution")?;
        let z_score = standard_normal.inverse_cdf(0.5 + INTERVAL_WIDTH / 2.0);

        self.state = Some(FittedState {
            origin,
            slope_per_day,
            intercept,
            seasonal_by_month,
            sigma,
            z_score,
            history: observations.timestamps.clone(),
        });

        log::info!(
            "Fitted additive model: slope {:.6}/day, residual sigma {:.4}",
            slope_per_day,
            sigma
        );
        Ok(())
    }

    fn extend_timeline(
        &self,
        periods: usize,
        frequency: Frequency,
    ) -> Result<Vec<NaiveDateTime>> {
        let state = self.fitted()?;
        if periods == 0 {
            return Err(anyhow!("cannot extend the timeline by zero periods"));
        }

        let mut timeline = state.history.clone();
        let mut cursor = state.last_observed();
        for _ in 0..periods {
            cursor = frequency.next_after(cursor);
            timeline.push(cursor);
        }
        Ok(timeline)
    }

    fn predict(&self, timeline: &[NaiveDateTime]) -> Result<ForecastTable> {
        let state = self.fitted()?;
        if timeline.is_empty() {
            return Err(anyhow!("prediction timeline is empty"));
        }

        let last_observed = state.last_observed();
        let mut table = ForecastTable::default();
        let mut horizon = 0usize;

        for &t in timeline {
            let trend = state.trend_at(t);
            let yhat = trend + state.seasonal_at(t);

            // In-sample stamps keep the fitted spread; past the last observed
            // timestamp the standard error grows with sqrt(horizon).
            let std_error = if t > last_observed {
                horizon += 1;
                state.sigma * (horizon as f64).sqrt()
            } else {
                state.sigma
            };
            let half_band = state.z_score * std_error;

            table.timestamps.push(t);
            table.trend.push(trend);
            table.yhat.push(yhat);
            table.yhat_lower.push(yhat - half_band);
            table.yhat_upper.push(yhat + half_band);
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    fn daily_series(start: NaiveDateTime, values: &[f64]) -> ObservationSeries {
        let timestamps = (0..values.len())
            .map(|i| start + chrono::Duration::days(i as i64))
            .collect();
        ObservationSeries::new(timestamps, values.to_vec())
    }

    #[test]
    fn test_fit_rejects_too_few_rows() {
        let mut model = AdditiveModel::new();
        let series = daily_series(dt(2006, 7, 1), &[21.0]);
        assert!(model.fit(&series).is_err());
        assert!(!model.is_fitted());
    }

    #[test]
    fn test_fit_rejects_duplicate_timestamps() {
        let mut model = AdditiveModel::new();
        let series = ObservationSeries::new(
            vec![dt(2006, 7, 1), dt(2006, 7, 1), dt(2006, 7, 2)],
            vec![21.0, 20.5, 22.0],
        );
        assert!(model.fit(&series).is_err());
    }

    #[test]
    fn test_fit_rejects_non_finite_values() {
        let mut model = AdditiveModel::new();
        let series = daily_series(dt(2006, 7, 1), &[21.0, f64::NAN, 22.0]);
        assert!(model.fit(&series).is_err());
    }

    #[test]
    fn test_linear_data_recovers_trend() {
        // y = 3.0 + 0.5 * day, all within one month so seasonality is flat
        let values: Vec<f64> = (0..20).map(|i| 3.0 + 0.5 * i as f64).collect();
        let series = daily_series(dt(2006, 7, 1), &values);

        let mut model = AdditiveModel::new();
        model.fit(&series).unwrap();

        let forecast = model
            .predict(&[dt(2006, 7, 25), dt(2006, 7, 30)])
            .unwrap();
        // Day 24 -> 15.0, day 29 -> 17.5
        assert!((forecast.yhat[0] - 15.0).abs() < 1e-9);
        assert!((forecast.yhat[1] - 17.5).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_timeline_extends_past_last_observation() {
        // End-to-end scenario: two July 2006 observations, 24 monthly periods
        let series = ObservationSeries::new(
            vec![dt(2006, 7, 1), dt(2006, 7, 2)],
            vec![21.0, 20.5],
        );
        let mut model = AdditiveModel::new();
        model.fit(&series).unwrap();

        let timeline = model.extend_timeline(24, Frequency::Monthly).unwrap();
        assert_eq!(timeline.len(), 2 + 24, "history plus 24 future stamps");

        let future = &timeline[2..];
        assert_eq!(future[0], dt(2006, 7, 31), "first future stamp is month-end");
        assert_eq!(future[23], dt(2008, 6, 30));
        assert!(future.iter().all(|&t| t > dt(2006, 7, 2)));
        assert!(timeline.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_extend_requires_fit_and_nonzero_periods() {
        let unfitted = AdditiveModel::new();
        assert!(unfitted.extend_timeline(24, Frequency::Monthly).is_err());

        let mut model = AdditiveModel::new();
        let series = daily_series(dt(2006, 7, 1), &[21.0, 20.5, 22.0]);
        model.fit(&series).unwrap();
        assert!(model.extend_timeline(0, Frequency::Monthly).is_err());
    }

    #[test]
    fn test_uncertainty_band_brackets_forecast_and_widens() {
        let values: Vec<f64> = (0..30).map(|i| 20.0 + (i % 5) as f64 * 0.3).collect();
        let series = daily_series(dt(2006, 7, 1), &values);
        let mut model = AdditiveModel::new();
        model.fit(&series).unwrap();

        let timeline = model.extend_timeline(12, Frequency::Monthly).unwrap();
        let forecast = model.predict(&timeline).unwrap();

        for i in 0..forecast.len() {
            assert!(forecast.yhat_lower[i] <= forecast.yhat[i]);
            assert!(forecast.yhat[i] <= forecast.yhat_upper[i]);
        }

        // Band on the last future stamp is wider than on the first
        let first_future = values.len();
        let last = forecast.len() - 1;
        let width = |i: usize| forecast.yhat_upper[i] - forecast.yhat_lower[i];
        assert!(width(last) > width(first_future));
    }

    #[test]
    fn test_predict_rejects_empty_timeline() {
        let mut model = AdditiveModel::new();
        let series = daily_series(dt(2006, 7, 1), &[21.0, 20.5, 22.0]);
        model.fit(&series).unwrap();
        assert!(model.predict(&[]).is_err());
    }
}
