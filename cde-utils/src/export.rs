//! CSV serialization of already-fetched series data.
//!
//! The browser download itself happens in the UI layer; this module only
//! produces the file contents and a timestamped filename.

use cde_api::models::{StationAnnualData, StationMonthlyData};
use chrono::NaiveDate;

/// CSV of monthly readings, one row per station/month.
/// Missing temperatures serialize as empty cells.
pub fn monthly_csv(stations: &[StationMonthlyData]) -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());
    // Header mirrors the wire field names
    let _ = writer.write_record([
        "station_id",
        "station_name",
        "year",
        "month",
        "temperature",
    ]);
    for station in stations {
        for point in &station.data {
            let temperature = point
                .temperature
                .map(|t| format!("{:.2}", t))
                .unwrap_or_default();
            let _ = writer.write_record([
                station.station_id.as_str(),
                station.station_name.as_str(),
                &point.year.to_string(),
                &point.month.to_string(),
                &temperature,
            ]);
        }
    }
    finish(writer)
}

/// CSV of annual aggregates, one row per station/year.
pub fn annual_csv(stations: &[StationAnnualData]) -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let _ = writer.write_record([
        "station_id",
        "station_name",
        "year",
        "mean",
        "std",
        "min_temp",
        "max_temp",
        "upper_bound",
        "lower_bound",
    ]);
    for station in stations {
        for point in &station.data {
            let _ = writer.write_record([
                station.station_id.as_str(),
                station.station_name.as_str(),
                &point.year.to_string(),
                &format!("{:.2}", point.mean),
                &format!("{:.2}", point.std),
                &format!("{:.2}", point.min_temp),
                &format!("{:.2}", point.max_temp),
                &format!("{:.2}", point.upper_bound),
                &format!("{:.2}", point.lower_bound),
            ]);
        }
    }
    finish(writer)
}

/// Download filename like `climate_monthly_2026-08-30.csv`.
pub fn export_filename(kind: &str, date: NaiveDate) -> String {
    format!("climate_{}_{}.csv", kind, date.format("%Y-%m-%d"))
}

fn finish(writer: csv::Writer<Vec<u8>>) -> String {
    writer
        .into_inner()
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cde_api::models::{AnnualDataPoint, MonthlyDataPoint};

    fn monthly_fixture() -> Vec<StationMonthlyData> {
        vec![StationMonthlyData {
            station_id: "66062".to_string(),
            station_name: "Station 66062".to_string(),
            data: vec![
                MonthlyDataPoint {
                    year: 1950,
                    month: 1,
                    temperature: Some(-3.25),
                },
                MonthlyDataPoint {
                    year: 1950,
                    month: 2,
                    temperature: None,
                },
            ],
        }]
    }

    #[test]
    fn monthly_csv_layout() {
        let csv = monthly_csv(&monthly_fixture());
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("station_id,station_name,year,month,temperature")
        );
        assert_eq!(lines.next(), Some("66062,Station 66062,1950,1,-3.25"));
        // Missing temperature leaves the cell empty
        assert_eq!(lines.next(), Some("66062,Station 66062,1950,2,"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn annual_csv_layout() {
        let stations = vec![StationAnnualData {
            station_id: "101234".to_string(),
            station_name: "Station 101234".to_string(),
            data: vec![AnnualDataPoint {
                year: 2000,
                mean: 9.5,
                std: 7.125,
                min_temp: -4.0,
                max_temp: 21.3,
                upper_bound: 16.625,
                lower_bound: 2.375,
            }],
        }];
        let csv = annual_csv(&stations);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("station_id,station_name,year,mean,std,min_temp,max_temp,upper_bound,lower_bound")
        );
        assert_eq!(
            lines.next(),
            Some("101234,Station 101234,2000,9.50,7.13,-4.00,21.30,16.63,2.38")
        );
    }

    #[test]
    fn empty_input_yields_header_only() {
        let csv = monthly_csv(&[]);
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn station_names_with_commas_are_quoted() {
        let mut stations = monthly_fixture();
        stations[0].station_name = "Oslo, Blindern".to_string();
        let csv = monthly_csv(&stations);
        assert!(csv.contains("\"Oslo, Blindern\""));
    }

    #[test]
    fn filename_embeds_kind_and_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(
            export_filename("monthly", date),
            "climate_monthly_2026-08-30.csv"
        );
        assert_eq!(
            export_filename("annual", date),
            "climate_annual_2026-08-30.csv"
        );
    }
}
