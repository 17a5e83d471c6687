use std::fmt::Display;
use std::path::PathBuf;

use crate::format::ImageFormat;

#[derive(Debug)]
pub enum RenderError {
    EmptySeries,
    MissingExtension { path: PathBuf },
    UnsupportedFormat { extension: String },
    Backend(String),
}

pub type RenderResult<T> = Result<T, RenderError>;

impl Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use RenderError::*;
        let s = match self {
            EmptySeries => "cannot plot an empty series, the input contained no values".to_owned(),
            MissingExtension { path } => format!(
                "output path {} has no file extension, supported formats are {}",
                path.display(),
                ImageFormat::supported()
            ),
            UnsupportedFormat { extension } => format!(
                "unsupported image format \"{extension}\", supported formats are {}",
                ImageFormat::supported()
            ),
            Backend(message) => format!("rendering failed: {message}"),
        };
        write!(f, "{s}")
    }
}

impl std::error::Error for RenderError {}

impl RenderError {
    pub(crate) fn backend(error: impl Display) -> Self {
        Self::Backend(error.to_string())
    }
}
