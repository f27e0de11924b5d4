//! Point-set files: CSV or Parquet with float-castable `x` and `y` columns.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{bail, Context, Result};
use chanhull::api::{Point, PointSet};
use polars::prelude::*;

fn is_parquet(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "parquet")
}

/// Read a point set; extra columns are ignored, duplicates collapse.
pub fn read_points(path: &Path) -> Result<PointSet> {
    let df = if is_parquet(path) {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        ParquetReader::new(file).finish()?
    } else {
        LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()?
            .collect()
            .with_context(|| format!("reading {}", path.display()))?
    };
    let xs = df.column("x").context("missing column x")?.cast(&DataType::Float64)?;
    let ys = df.column("y").context("missing column y")?.cast(&DataType::Float64)?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.f64()?.into_iter().zip(ys.f64()?.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => points.push(Point::new(x, y)),
            _ => bail!("row {row}: missing coordinate in {}", path.display()),
        }
    }
    Ok(PointSet::new(points)?)
}

/// Two-column frame `x,y` in point-set order.
pub fn points_frame(points: &[Point]) -> Result<DataFrame> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    Ok(df!("x" => xs, "y" => ys)?)
}

/// Write a frame as CSV (with header) or Parquet, by extension.
pub fn write_frame(path: &Path, df: &mut DataFrame) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if is_parquet(path) {
        ParquetWriter::new(&mut file).finish(df)?;
    } else {
        CsvWriter::new(&mut file).include_header(true).finish(df)?;
    }
    Ok(())
}

pub fn write_points(path: &Path, points: &PointSet) -> Result<()> {
    let mut df = points_frame(points.as_slice())?;
    write_frame(path, &mut df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn csv_points_survive_a_write_and_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/points.csv");
        let points = PointSet::from_xy([(0.5, 1.0), (3.0, -2.25), (7.0, 7.0)]).unwrap();
        write_points(&path, &points).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("x,y"));
        assert_eq!(read_points(&path).unwrap(), points);
    }

    #[test]
    fn integer_columns_are_accepted_and_duplicates_collapse() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ints.csv");
        fs::write(&path, "x,y,label\n0,0,a\n4,0,b\n0,0,c\n4,4,d\n").unwrap();
        let points = read_points(&path).unwrap();
        assert_eq!(
            points.as_slice(),
            &[Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(4.0, 4.0)]
        );
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "a,b\n1,2\n").unwrap();
        assert!(read_points(&path).is_err());
    }

    #[test]
    fn parquet_output_by_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.parquet");
        let points = PointSet::from_xy([(1.0, 2.0), (3.0, 4.0)]).unwrap();
        write_points(&path, &points).unwrap();
        assert_eq!(read_points(&path).unwrap(), points);
    }
}
