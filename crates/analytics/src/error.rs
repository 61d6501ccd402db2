use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalyticsError {
    /// The filtered input holds zero rows, so the global recent date that
    /// anchors the recency calculation is undefined.
    #[error("No transactions fall inside the selected date range")]
    NoDataInRange,
}
