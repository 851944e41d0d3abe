//! Dataset loading from JSON or CSV files.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::domain::Row;

/// Errors from the dataset loading layer.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot read dataset '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON dataset '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed CSV dataset '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("unsupported dataset format '{0}' (expected .json or .csv)")]
    UnsupportedFormat(PathBuf),
}

/// On-disk dataset encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Csv,
}

impl DatasetFormat {
    /// Pick the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Load a dataset, choosing the decoder by extension.
pub fn load_rows(path: &Path) -> Result<Vec<Row>, DatasetError> {
    let format = DatasetFormat::from_path(path)
        .ok_or_else(|| DatasetError::UnsupportedFormat(path.to_path_buf()))?;

    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let rows = match format {
        DatasetFormat::Json => read_json(reader).map_err(|source| DatasetError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        DatasetFormat::Csv => read_csv(reader).map_err(|source| DatasetError::Csv {
            path: path.to_path_buf(),
            source,
        })?,
    };

    info!(path = %path.display(), ?format, rows = rows.len(), "dataset loaded");
    Ok(rows)
}

/// A JSON array of rows.
pub fn read_json<R: std::io::Read>(reader: R) -> Result<Vec<Row>, serde_json::Error> {
    serde_json::from_reader(reader)
}

/// CSV with a header row using the camelCase field names.
pub fn read_csv<R: std::io::Read>(reader: R) -> Result<Vec<Row>, csv::Error> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "ticker,company,sector,industry,country,exchange,marketCap,price,change,volume,relativeVolume,pe,forwardPE,peg,ps,pb,dividend,roe,roa,debtEquity,currentRatio,grossMargin,operatingMargin,netMargin,epsGrowthThisYear,insiderOwnership,institutionalOwnership,perfWeek,perfMonth,perfYear,beta,rsi,sma20,sma50,sma200,week52High,week52Low";

    fn write_file(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(DatasetFormat::from_path(Path::new("a.json")), Some(DatasetFormat::Json));
        assert_eq!(DatasetFormat::from_path(Path::new("a.CSV")), Some(DatasetFormat::Csv));
        assert_eq!(DatasetFormat::from_path(Path::new("a.parquet")), None);
        assert_eq!(DatasetFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn loads_json() {
        let dir = tempfile::tempdir().unwrap();
        let json = serde_json::to_string(&crate::data::sample_rows()).unwrap();
        let path = write_file(&dir, "rows.json", &json);
        let rows = load_rows(&path).unwrap();
        assert_eq!(rows, crate::data::sample_rows());
    }

    #[test]
    fn loads_csv_with_abbreviated_volume() {
        let dir = tempfile::tempdir().unwrap();
        let body = format!(
            "{HEADER}\nJPM,JPMorgan Chase & Co.,Financial,Banks,USA,NYSE,450000000000,155.2,0.8,8.9M,1.05,11.2,10.8,1.4,3.2,1.6,2.6,15.8,1.2,1.3,0.9,0,35.2,28.5,12.4,0.8,72.3,1.2,3.5,28.4,1.1,55,153.4,150.2,145.8,162.5,120.3\n"
        );
        let path = write_file(&dir, "rows.csv", &body);
        let rows = load_rows(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].ticker, "JPM");
        assert_eq!(rows[0].volume, 8_900_000.0);
        assert_eq!(rows[0].market_cap_billions(), 450.0);
    }

    #[test]
    fn unsupported_extension() {
        let err = load_rows(Path::new("rows.xlsx")).unwrap_err();
        assert!(matches!(err, DatasetError::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_rows(Path::new("/nonexistent/rows.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "bad.json", "[{\"ticker\": 1}]");
        assert!(matches!(load_rows(&path), Err(DatasetError::Json { .. })));
    }
}
