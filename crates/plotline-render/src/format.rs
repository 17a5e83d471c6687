use std::path::Path;

use itertools::Itertools;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{RenderError, RenderResult};

/// Image formats the renderer can write, keyed by file extension.
///
/// `Svg` goes through the vector backend, everything else through the bitmap
/// backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Svg,
    #[strum(to_string = "jpeg", serialize = "jpg")]
    Jpeg,
    Bmp,
}

impl ImageFormat {
    /// Resolves the format implied by an output path's extension.
    pub fn from_path(path: &Path) -> RenderResult<Self> {
        let Some(extension) = path.extension().and_then(|extension| extension.to_str()) else {
            return Err(RenderError::MissingExtension {
                path: path.to_path_buf(),
            });
        };
        extension.parse().map_err(|_| RenderError::UnsupportedFormat {
            extension: extension.to_owned(),
        })
    }

    pub fn supported() -> String {
        Self::iter().map(|format| format.to_string()).join(", ")
    }
}
