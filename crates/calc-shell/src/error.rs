use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShellError {
    #[error("display text is not a number: {0:?}")]
    NotANumber(String),
}
