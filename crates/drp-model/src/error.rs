use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrpError {
    #[error(
        "time offset must set both startDate and endDate or neither (startDate: {start:?}, endDate: {end:?})"
    )]
    PartialTimeOffset {
        start: Option<i32>,
        end: Option<i32>,
    },
    #[error("unknown range selector mode: {0}")]
    UnknownRangeSelectorMode(String),
    #[error("unknown time unit: {0}")]
    UnknownTimeUnit(String),
}

pub type Result<T> = std::result::Result<T, DrpError>;
