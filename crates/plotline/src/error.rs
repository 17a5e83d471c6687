use std::fmt::Display;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum LoadError {
    FileAccess {
        path: PathBuf,
        source: io::Error,
    },
    Parse {
        line: usize,
        content: String,
        looks_decimal: bool,
    },
}

pub type LoadResult<T> = Result<T, LoadError>;

impl Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use LoadError::*;
        let s = match self {
            FileAccess { path, source } => {
                format!("cannot read {}: {source}", path.display())
            }
            Parse {
                line,
                content,
                looks_decimal,
            } => {
                if *looks_decimal {
                    format!(
                        "line {line}: \"{content}\" is not a valid integer, only whole integers are supported"
                    )
                } else {
                    format!("line {line}: \"{content}\" is not a valid integer")
                }
            }
        };
        write!(f, "{s}")
    }
}

impl std::error::Error for LoadError {}
