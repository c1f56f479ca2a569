use thiserror::Error;

pub type ThemeResult<T> = Result<T, ThemeError>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("the chart basic options must be set to get the theme completion")]
    MissingDataOptions,

    #[error("invalid data: {0}")]
    InvalidData(String),
}
