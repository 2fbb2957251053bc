use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    cohort::LiteratureSlope,
    error::PlotError,
    growth::{Regime, TimeConstantRow},
};

pub const DELIMITER: u8 = b',';
pub const TIME_CONSTANT_HEADER: [&str; 6] =
    ["Regression", "Set", "Slope", "p_value", "Type", "Time_years"];

/// One line of the time-constant table as it sits in the file.
#[derive(Debug, Serialize, Deserialize)]
struct TimeConstantRecord {
    #[serde(rename = "Regression")]
    regression: String,
    #[serde(rename = "Set")]
    set: String,
    #[serde(rename = "Slope")]
    slope: f64,
    p_value: f64,
    #[serde(rename = "Type")]
    regime: Regime,
    #[serde(rename = "Time_years")]
    time_years: f64,
}

impl From<&TimeConstantRow> for TimeConstantRecord {
    fn from(row: &TimeConstantRow) -> Self {
        Self {
            regression: row.slope.regression.clone(),
            set: row.slope.set.clone(),
            slope: row.slope.slope,
            p_value: row.slope.p_value,
            regime: row.regime,
            time_years: row.time_years,
        }
    }
}

impl From<TimeConstantRecord> for TimeConstantRow {
    fn from(record: TimeConstantRecord) -> Self {
        Self {
            slope: LiteratureSlope {
                regression: record.regression,
                set: record.set,
                slope: record.slope,
                p_value: record.p_value,
            },
            regime: record.regime,
            time_years: record.time_years,
        }
    }
}

/// Writes the classified slope table. The header is written even when `rows` is empty.
pub fn write_time_constants(path: impl AsRef<Path>, rows: &[TimeConstantRow]) -> Result<(), PlotError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .from_writer(BufWriter::new(File::create(path)?));
    writer.write_record(TIME_CONSTANT_HEADER)?;
    for row in rows {
        writer.serialize(TimeConstantRecord::from(row))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_time_constants(path: impl AsRef<Path>) -> Result<Vec<TimeConstantRow>, PlotError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .from_reader(BufReader::new(File::open(path)?));
    let headers = reader.headers()?.clone();
    if headers.iter().ne(TIME_CONSTANT_HEADER) {
        return Err(PlotError::Parse {
            line: 1,
            message: format!("unexpected header {:?}", headers),
        });
    }
    reader
        .deserialize::<TimeConstantRecord>()
        .map(|record| Ok(record?.into()))
        .collect()
}

/// Column-wise export of fitted series, one key per column and an optional comment line.
/// Shorter columns leave their trailing cells empty.
pub fn write_f64_columns(
    path: impl AsRef<Path>,
    keys: Vec<String>,
    columns: Vec<Vec<f64>>,
    comment: &str,
) -> Result<(), PlotError> {
    assert_eq!(keys.len(), columns.len());
    let mut file = BufWriter::new(File::create(path)?);
    for line in comment.lines() {
        writeln!(file, "# {}", line)?;
    }
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(file);
    writer.write_record(&keys)?;
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);
    for i in 0..rows {
        writer.write_record(
            columns
                .iter()
                .map(|column| column.get(i).map(f64::to_string).unwrap_or_default()),
        )?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::literature_slopes;
    use itertools::Itertools;

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("plaqueplot_{}_{}", std::process::id(), name))
    }

    #[test]
    fn time_constants_round_trip() {
        let rows = literature_slopes()
            .into_iter()
            .map(TimeConstantRow::new)
            .collect_vec();
        let path = temp_file("time_constants.csv");
        write_time_constants(&path, &rows).unwrap();
        let read = read_time_constants(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(read, rows);
    }

    #[test]
    fn quoted_fields_survive_the_file() {
        let rows = vec![
            TimeConstantRow::new(LiteratureSlope::new("a\nb", "Set, 1", -0.0312, 0.5)),
            TimeConstantRow::new(LiteratureSlope::new("say \"hi\"", "Eta-6", 0.0209, 0.8)),
        ];
        let path = temp_file("quoted.csv");
        write_time_constants(&path, &rows).unwrap();
        let read = read_time_constants(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(read, rows);
    }

    #[test]
    fn empty_table_keeps_its_header() {
        let path = temp_file("empty.csv");
        write_time_constants(&path, &[]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let read = read_time_constants(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(text, "Regression,Set,Slope,p_value,Type,Time_years\n");
        assert!(read.is_empty());
    }

    #[test]
    fn unknown_type_is_rejected() {
        let path = temp_file("unknown_type.csv");
        std::fs::write(
            &path,
            "Regression,Set,Slope,p_value,Type,Time_years\nr,s,0.1,0.5,Sideways,6.93\n",
        )
        .unwrap();
        let result = read_time_constants(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(PlotError::Csv(_))));
    }

    #[test]
    fn infinite_time_survives_the_file() {
        let rows = vec![TimeConstantRow::new(LiteratureSlope::new("flat", "Set-1", 0.0, 1.0))];
        let path = temp_file("flat.csv");
        write_time_constants(&path, &rows).unwrap();
        let read = read_time_constants(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(read[0].time_years.is_infinite());
        assert_eq!(read[0].regime, Regime::Doubling);
    }

    #[test]
    fn bad_header_is_reported() {
        let path = temp_file("bad.csv");
        std::fs::write(&path, "a,b\n1,2\n").unwrap();
        let result = read_time_constants(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(PlotError::Parse { line: 1, .. })));
    }

    #[test]
    fn columns_are_written_row_wise() {
        let path = temp_file("columns.csv");
        write_f64_columns(
            &path,
            vec!["x".to_string(), "fit".to_string()],
            vec![vec![1.0, 2.0], vec![3.5]],
            "theta",
        )
        .unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(text, "# theta\nx,fit\n1,3.5\n2,\n");
    }
}
