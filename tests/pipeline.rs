use std::fs;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use ksi_plot::generator::{generate_data, generate_rising_data, DataRange};
use ksi_plot::plots::{plot_csv_data, plot_csv_data_least_squares, plot_csv_data_with_line};
use ksi_plot::storage::{read_data_csv, write_data_csv};
use ksi_plot::{sort_data_by_x, Error, MeanDivisor, PlotColor, PlotLabels, Point};

/// Fresh directory under the system temp dir, unique per test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ksi_plot_{}_{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn sorted_uniform_data_is_non_decreasing() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut data = generate_data(&mut rng, 5, DataRange::new(0., 10.).unwrap()).unwrap();

    sort_data_by_x(&mut data);

    assert_eq!(data.len(), 5);
    assert!(data.windows(2).all(|pair| pair[0].x <= pair[1].x));
}

#[test]
fn file_round_trip() {
    let dir = scratch_dir("round_trip");
    let path = dir.join("data.csv");

    let data = vec![Point::new(1., 2.), Point::new(3., 4.)];
    write_data_csv(&data, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "1.0,2.0\n3.0,4.0\n");
    assert_eq!(read_data_csv(&path).unwrap(), data);

    let mut rng = StdRng::seed_from_u64(11);
    let random = generate_data(&mut rng, 100, DataRange::default()).unwrap();
    write_data_csv(&random, &path).unwrap();

    assert_eq!(read_data_csv(&path).unwrap(), random);
}

#[test]
fn writing_overwrites_previous_file() {
    let dir = scratch_dir("overwrite");
    let path = dir.join("data.csv");

    write_data_csv(&generate_rising_data(20), &path).unwrap();
    write_data_csv(&generate_rising_data(2), &path).unwrap();

    assert_eq!(read_data_csv(&path).unwrap().len(), 2);
}

#[test]
fn writing_into_missing_directory_fails() {
    let dir = scratch_dir("missing_dir");

    let result = write_data_csv(&[Point::new(0., 0.)], dir.join("nope").join("data.csv"));

    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn renders_all_plot_kinds_from_csv() {
    let dir = scratch_dir("render");
    let data_path = dir.join("data.csv");

    write_data_csv(&generate_rising_data(25), &data_path).unwrap();

    let labels = PlotLabels {
        title: "Rising".to_owned(),
        x_axis: "index".to_owned(),
        y_axis: "value".to_owned(),
    };

    let scatter = dir.join("scatter.svg");
    plot_csv_data(&data_path, &labels, PlotColor::DEFAULT_DOT, &scatter).unwrap();

    let line = dir.join("line.svg");
    plot_csv_data_with_line(
        &data_path,
        &labels,
        PlotColor::DEFAULT_DOT,
        PlotColor::DEFAULT_LINE,
        &line,
    )
    .unwrap();

    let fit = dir.join("fit.svg");
    let result = plot_csv_data_least_squares(
        &data_path,
        MeanDivisor::SampleCount,
        &PlotLabels::default(),
        PlotColor::DEFAULT_DOT,
        PlotColor::DEFAULT_LINE,
        &fit,
    )
    .unwrap();

    assert!(result.slope > 0.);

    for path in [&scatter, &line, &fit] {
        let svg = fs::read_to_string(path).unwrap();
        assert!(svg.contains("<svg"), "{}", path.display());
        assert_eq!(svg.matches("<circle").count(), 25, "{}", path.display());
    }

    assert!(fs::read_to_string(&scatter).unwrap().contains("index"));
}

#[test]
fn least_squares_on_linear_csv() {
    let dir = scratch_dir("linear");
    let data_path = dir.join("linear.csv");

    fs::write(&data_path, "0,2\n1,4\n2,6\n3,8\n").unwrap();

    let fit = plot_csv_data_least_squares(
        &data_path,
        MeanDivisor::default(),
        &PlotLabels::default(),
        PlotColor::DEFAULT_DOT,
        PlotColor::DEFAULT_LINE,
        dir.join("fit.svg"),
    )
    .unwrap();

    assert!((fit.slope - 2.).abs() < 1e-9);
    assert!((fit.intercept - 2.).abs() < 1e-9);

    let svg = fs::read_to_string(dir.join("fit.svg")).unwrap();
    assert!(svg.contains("k = 2.000, b = 2.000"));
}

#[test]
fn least_squares_on_empty_file_fails_before_rendering() {
    let dir = scratch_dir("empty");
    let data_path = dir.join("empty.csv");
    let output = dir.join("fit.svg");

    fs::write(&data_path, "").unwrap();

    let result = plot_csv_data_least_squares(
        &data_path,
        MeanDivisor::default(),
        &PlotLabels::default(),
        PlotColor::DEFAULT_DOT,
        PlotColor::DEFAULT_LINE,
        &output,
    );

    assert!(matches!(result, Err(Error::DegenerateFit(_))));
    assert!(!output.exists());
}

#[test]
fn plotting_a_missing_file_fails() {
    let dir = scratch_dir("missing");

    let result = plot_csv_data(
        dir.join("absent.csv"),
        &PlotLabels::default(),
        PlotColor::DEFAULT_DOT,
        dir.join("plot.svg"),
    );

    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn plotting_a_malformed_file_fails() {
    let dir = scratch_dir("malformed");
    let data_path = dir.join("bad.csv");

    fs::write(&data_path, "1,2\n3,four\n").unwrap();

    let result = plot_csv_data(
        &data_path,
        &PlotLabels::default(),
        PlotColor::DEFAULT_DOT,
        dir.join("plot.svg"),
    );

    assert!(matches!(result, Err(Error::Csv(_))));
}

#[test]
fn plotting_to_png_is_rejected() {
    let dir = scratch_dir("png");
    let data_path = dir.join("data.csv");
    let output = dir.join("plot.png");

    write_data_csv(&generate_rising_data(5), &data_path).unwrap();

    let result = plot_csv_data(&data_path, &PlotLabels::default(), PlotColor::DEFAULT_DOT, &output);

    assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    assert!(!output.exists());
}
