use serde::Serialize;

/// A derived ratio that may be undefined.
///
/// Ratios whose denominator is zero (ROI against a free product, cost per
/// security point for an unrated vendor) are reported as `NotApplicable`
/// instead of letting `inf`/`NaN` reach formatted output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Metric {
    Value(f64),
    NotApplicable,
}

impl Metric {
    /// Divides `numerator` by `denominator`, yielding `NotApplicable` for a
    /// zero denominator or a non-finite quotient.
    pub fn ratio(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            return Metric::NotApplicable;
        }
        let value = numerator / denominator;
        if value.is_finite() {
            Metric::Value(value)
        } else {
            Metric::NotApplicable
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Metric::Value(v) => Some(*v),
            Metric::NotApplicable => None,
        }
    }

    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Metric::Value(v) => Metric::Value(f(v)),
            Metric::NotApplicable => Metric::NotApplicable,
        }
    }
}

/// Time until cumulative savings cover the vendor's cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "months", rename_all = "snake_case")]
pub enum Payback {
    Months(f64),
    /// Annual savings are zero or negative, so the cost is never recovered
    NoPayback,
}

impl Payback {
    pub fn months(&self) -> Option<f64> {
        match self {
            Payback::Months(m) => Some(*m),
            Payback::NoPayback => None,
        }
    }

    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Payback::Months(m) => Payback::Months(f(m)),
            Payback::NoPayback => Payback::NoPayback,
        }
    }
}

/// Outcome of a metric that needs at least two vendors to compare.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Comparison<T> {
    Available(T),
    InsufficientData { reason: String },
}

impl<T> Comparison<T> {
    pub fn insufficient(reason: impl Into<String>) -> Self {
        Comparison::InsufficientData {
            reason: reason.into(),
        }
    }

    pub fn as_available(&self) -> Option<&T> {
        match self {
            Comparison::Available(value) => Some(value),
            Comparison::InsufficientData { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Comparison::Available(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Comparison<U> {
        match self {
            Comparison::Available(value) => Comparison::Available(f(value)),
            Comparison::InsufficientData { reason } => Comparison::InsufficientData { reason },
        }
    }
}
