use std::fs;
use std::path::PathBuf;

use clap::Parser;

use ksi_plot::generator::{generate_data_default, generate_rising_data};
use ksi_plot::plots::{plot_csv_data, plot_csv_data_least_squares, plot_csv_data_with_line};
use ksi_plot::storage::{write_data_csv, write_data_default, DEFAULT_DATA_PATH};
use ksi_plot::{sort_data_by_x, MeanDivisor, PlotColor, PlotLabels};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long, default_value_t = 30)]
    count: usize,

    #[clap(short, long, default_value = "plots/")]
    plots_path: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let Args { count, plots_path } = Args::parse();

    fs::create_dir_all(&plots_path)?;

    let mut uniform = generate_data_default(count)?;
    sort_data_by_x(&mut uniform);

    let uniform_path = plots_path.join("uniform.csv");
    write_data_csv(&uniform, &uniform_path)?;

    plot_csv_data(
        &uniform_path,
        &PlotLabels {
            title: "Uniform points".to_owned(),
            ..Default::default()
        },
        PlotColor::DEFAULT_DOT,
        plots_path.join("uniform_scatter.svg"),
    )?;

    write_data_default(&generate_rising_data(count))?;

    let labels = PlotLabels {
        title: "Rising data".to_owned(),
        ..Default::default()
    };

    plot_csv_data_with_line(
        DEFAULT_DATA_PATH,
        &labels,
        PlotColor::DEFAULT_DOT,
        PlotColor::DEFAULT_LINE,
        plots_path.join("rising_line.svg"),
    )?;

    for (divisor, file) in [
        (MeanDivisor::SampleCount, "rising_fit.svg"),
        (MeanDivisor::MaxX, "rising_fit_max_x.svg"),
    ] {
        let fit = plot_csv_data_least_squares(
            DEFAULT_DATA_PATH,
            divisor,
            &PlotLabels::default(),
            PlotColor::DEFAULT_DOT,
            PlotColor::DEFAULT_LINE,
            plots_path.join(file),
        )?;

        println!("{divisor:?}: k = {:.3}, b = {:.3}", fit.slope, fit.intercept);
    }

    Ok(())
}
