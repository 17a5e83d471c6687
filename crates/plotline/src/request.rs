use std::path::PathBuf;

use crate::series::NumericSeries;

/// Everything needed to render one chart: the data, the labels and where the
/// image goes. Labels and title are free-form text.
#[derive(Debug, Clone)]
pub struct PlotRequest {
    pub series: NumericSeries,
    pub output: PathBuf,
    pub x_label: String,
    pub y_label: String,
    pub title: String,
}
