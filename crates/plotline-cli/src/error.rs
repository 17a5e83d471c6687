use std::fmt::Display;

use plotline::error::LoadError;
use plotline_render::error::RenderError;
use rustyline::error::ReadlineError;

#[derive(Debug)]
pub enum AppError {
    Aborted,
    Prompt(ReadlineError),
    Load(LoadError),
    Render(RenderError),
}

pub type AppResult<T> = Result<T, AppError>;

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use AppError::*;
        let s = match self {
            Aborted => "aborted".to_owned(),
            Prompt(error) => format!("cannot read input: {error}"),
            Load(error) => error.to_string(),
            Render(error) => error.to_string(),
        };
        write!(f, "{s}")
    }
}

impl std::error::Error for AppError {}

impl From<ReadlineError> for AppError {
    fn from(error: ReadlineError) -> Self {
        match error {
            ReadlineError::Eof | ReadlineError::Interrupted => Self::Aborted,
            other => Self::Prompt(other),
        }
    }
}

impl From<LoadError> for AppError {
    fn from(error: LoadError) -> Self {
        Self::Load(error)
    }
}

impl From<RenderError> for AppError {
    fn from(error: RenderError) -> Self {
        Self::Render(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_input_aborts_instead_of_failing() {
        assert!(matches!(
            AppError::from(ReadlineError::Eof),
            AppError::Aborted
        ));
        assert!(matches!(
            AppError::from(ReadlineError::Interrupted),
            AppError::Aborted
        ));
    }
}
