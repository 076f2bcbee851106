use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

use ksi_plot::generator::{generate_data, generate_rising_data, DataRange};
use ksi_plot::plots::{self, LeastSquaresPlot, ScatterPlot};
use ksi_plot::storage::{read_data_csv, write_data_csv, DEFAULT_DATA_PATH};
use ksi_plot::{sort_data_by_x, LinearFit, MeanDivisor, PlotColor, PlotLabels};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate uniformly distributed points and store them as CSV
    Generate {
        #[clap(short, long)]
        count: usize,

        #[clap(long, default_value_t = 0., allow_negative_numbers = true)]
        min: f64,

        #[clap(long, default_value_t = 1000., allow_negative_numbers = true)]
        max: f64,

        /// Sort the points by x before writing
        #[clap(short, long)]
        sort: bool,

        #[clap(short, long, default_value = DEFAULT_DATA_PATH)]
        output: PathBuf,
    },

    /// Generate points with geometrically rising y and store them as CSV
    Rising {
        #[clap(short, long)]
        count: usize,

        #[clap(short, long, default_value = DEFAULT_DATA_PATH)]
        output: PathBuf,
    },

    /// Scatter plot of a CSV file
    Scatter {
        #[command(flatten)]
        plot: PlotArgs,
    },

    /// Scatter plot with the points connected in file order
    Line {
        #[command(flatten)]
        plot: PlotArgs,

        #[clap(long, default_value = "#1f77b4")]
        line_color: PlotColor,
    },

    /// Scatter plot with a least-squares line fit
    Fit {
        #[command(flatten)]
        plot: PlotArgs,

        #[clap(long, default_value = "#1f77b4")]
        line_color: PlotColor,

        #[clap(long, value_enum, default_value_t)]
        divisor: MeanDivisor,
    },
}

#[derive(clap::Args, Debug)]
struct PlotArgs {
    /// CSV file with one `x,y` row per point
    #[clap(default_value = DEFAULT_DATA_PATH)]
    input: PathBuf,

    /// Output SVG image
    #[clap(short, long, default_value = "plot.svg")]
    output: PathBuf,

    #[clap(short, long, default_value = "")]
    title: String,

    #[clap(long, default_value = "x")]
    x_label: String,

    #[clap(long, default_value = "y")]
    y_label: String,

    #[clap(long, default_value = "red")]
    dot_color: PlotColor,

    #[clap(long, default_value_t = 800)]
    width: u32,

    #[clap(long, default_value_t = 600)]
    height: u32,
}

impl PlotArgs {
    fn labels(&self) -> PlotLabels {
        PlotLabels {
            title: self.title.clone(),
            x_axis: self.x_label.clone(),
            y_axis: self.y_label.clone(),
        }
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let Args { command } = Args::parse();

    match command {
        Command::Generate {
            count,
            min,
            max,
            sort,
            output,
        } => {
            let range = DataRange::new(min, max)?;
            let mut data = generate_data(&mut rand::thread_rng(), count, range)?;

            if sort {
                sort_data_by_x(&mut data);
            }

            write_data_csv(&data, &output)?;
        }
        Command::Rising { count, output } => {
            write_data_csv(&generate_rising_data(count), &output)?;
        }
        Command::Scatter { plot } => {
            let data = read_data_csv(&plot.input)?;
            let labels = plot.labels();

            let scatter = ScatterPlot {
                data: &data,
                labels: &labels,
                dot_color: plot.dot_color,
                line_color: None,
            };

            plots::render_to_file(&scatter, &plot.output, plot.size())?;
        }
        Command::Line { plot, line_color } => {
            let data = read_data_csv(&plot.input)?;
            let labels = plot.labels();

            let line = ScatterPlot {
                data: &data,
                labels: &labels,
                dot_color: plot.dot_color,
                line_color: Some(line_color),
            };

            plots::render_to_file(&line, &plot.output, plot.size())?;
        }
        Command::Fit {
            plot,
            line_color,
            divisor,
        } => {
            let data = read_data_csv(&plot.input)?;
            let labels = plot.labels();

            let least_squares =
                LeastSquaresPlot::new(&data, divisor, &labels, plot.dot_color, line_color)?;

            info!("fitted {} points with {divisor:?} divisor", data.len());

            plots::render_to_file(&least_squares, &plot.output, plot.size())?;

            let LinearFit { slope, intercept } = least_squares.line.fit;
            println!("k = {slope:.3}, b = {intercept:.3}");
        }
    }

    Ok(())
}
