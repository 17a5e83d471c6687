use std::path::PathBuf;
use std::process::ExitCode;

use plotline::load::load_series;
use plotline::request::PlotRequest;
use plotline_render::{RenderOptions, render};

use crate::error::{AppError, AppResult};
use crate::prompt::Prompter;

mod error;
mod prompt;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Aborted) => {
            println!("Aborted.");
            ExitCode::FAILURE
        }
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let mut prompter = Prompter::new()?;

    let input = PathBuf::from(prompter.ask("Enter the path to the text file")?);
    let x_label = prompter.ask("Enter x axis name")?;
    let y_label = prompter.ask("Enter y axis name")?;
    let title = prompter.ask("Enter plot title")?;
    let output = PathBuf::from(prompter.ask("Enter the path to save the plot")?);

    let series = load_series(&input)?;
    println!("Plotting {} values from {}", series.len(), input.display());

    let request = PlotRequest {
        series,
        output,
        x_label,
        y_label,
        title,
    };
    render(&request, &RenderOptions::default())?;

    println!("Plot saved to: {}", request.output.display());
    Ok(())
}
