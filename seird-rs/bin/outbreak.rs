use std::fs;

use ndarray::Array1;
use seird::prelude::*;
use serde::Deserialize;

/// Smoothing windows used on the observed series, in days.
const CASES_WINDOW: usize = 7;
const DEATHS_WINDOW: usize = 21;
/// Most recent observations to drop: the latest report is not yet stable.
const EXCLUDE_LAST: usize = 1;
/// Day at which the modeled death toll is compared with the observed total.
const COMPARISON_DAY: Real = 120.0;

#[derive(Deserialize, Debug)]
struct ObservedRow {
    date: String,
    count: Real,
}

fn read_series(path: &str, name: &str) -> csv::Result<DatedSeries> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut index = Vec::new();
    let mut values = Vec::new();
    for res in reader.deserialize() {
        let row: ObservedRow = res?;
        index.push(row.date);
        values.push(row.count);
    }
    Ok(DatedSeries::new(name, index, values))
}

fn render_columns(head: &str, sep: char, columns: &[&Array1<Real>]) -> String {
    let rows = columns.iter().map(|c| c.len()).min().unwrap_or(0);
    let mut data = head.to_string();
    for i in 0..rows {
        data.push('\n');
        for (j, column) in columns.iter().enumerate() {
            if j > 0 {
                data.push(sep);
            }
            data.push_str(&format!("{}", column[i]));
        }
    }
    data
}

pub fn main() {
    use simple_logger::SimpleLogger;
    SimpleLogger::new().init().unwrap();

    let scenario: Scenario = match fs::read_to_string("outbreak.toml") {
        Ok(data) => toml::from_str(&data).unwrap(),
        Err(_) => Scenario::default(),
    };

    let params = scenario.params();
    println!("R: {}", params.r0());

    let trajectory = integrate(&scenario).unwrap();
    println!("Death toll after a year: {}", trajectory.death_toll());
    println!("Susceptible after a year: {}", trajectory.susceptible_fraction());

    let distancing = scenario.distancing().unwrap();
    let re = reproduction_series(&params, &distancing, trajectory.t());
    let rate = trajectory.daily_deaths();

    let header = format!("t,{}", SeirdModel::CSV_HEADER);
    fs::write("trajectory.csv", trajectory.render_csv(&header, ',')).unwrap();
    fs::write(
        "reproduction.csv",
        render_columns("t,Re", ',', &[trajectory.t(), &re]),
    )
    .unwrap();
    // the death rate aligns to the front of the grid, one sample short
    fs::write(
        "death_rate.csv",
        render_columns("t,rate", ',', &[trajectory.t(), &rate]),
    )
    .unwrap();

    match read_series("cases.csv", "cases") {
        Ok(cases) => {
            println!("Using observed cases from cases.csv");
            let smoothed = moving_average(&cases, CASES_WINDOW, EXCLUDE_LAST).unwrap();
            fs::write("cases_average.csv", smoothed.render_csv(',')).unwrap();
        }
        _ => {}
    }

    match read_series("deaths.csv", "deaths") {
        Ok(deaths) => {
            println!("Using observed deaths from deaths.csv");
            let smoothed = moving_average(&deaths, DEATHS_WINDOW, EXCLUDE_LAST).unwrap();
            if let Some(i) = trajectory.day_index(COMPARISON_DAY) {
                println!(
                    "Death toll after {} days model: {}",
                    COMPARISON_DAY,
                    trajectory.dead()[i]
                );
                println!(
                    "Death toll after {} days true: {}",
                    COMPARISON_DAY,
                    smoothed.sum()
                );
            }
            fs::write("deaths_average.csv", smoothed.render_csv(',')).unwrap();
        }
        _ => {}
    }
}
