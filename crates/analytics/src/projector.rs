use crate::error::AnalyticsError;
use core_types::{CoreError, Record, Series};

/// Extracts one value per record, keeping the input order.
pub fn project<I, R, T, E, F>(records: I, f: F) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = R>,
    F: Fn(&R) -> Result<T, E>,
{
    records.into_iter().map(|record| f(&record)).collect()
}

/// Runs several extraction functions over the same records in a single pass,
/// returning one index-aligned sequence per function.
pub fn project_many<I, R, T, E, F>(records: I, extractors: &[F]) -> Result<Vec<Vec<T>>, E>
where
    I: IntoIterator<Item = R>,
    F: Fn(&R) -> Result<T, E>,
{
    let mut columns: Vec<Vec<T>> = extractors.iter().map(|_| Vec::new()).collect();

    for record in records {
        for (column, extract) in columns.iter_mut().zip(extractors) {
            column.push(extract(&record)?);
        }
    }

    Ok(columns)
}

/// Plots `f(record)` against the record's position, the "n transactions"
/// counter of the charts.
pub fn indexed<I, R, T, E, F>(records: I, f: F) -> Result<Series<f64, T>, E>
where
    I: IntoIterator<Item = R>,
    F: Fn(&R) -> Result<T, E>,
{
    let mut series = Series::new();
    for (position, record) in records.into_iter().enumerate() {
        series.push(position as f64, f(&record)?);
    }
    Ok(series)
}

/// A numeric extraction function for the named field.
pub fn field(name: &str) -> impl Fn(&&Record) -> Result<f64, CoreError> + '_ {
    move |record| record.number(name)
}

/// Projects a numeric field, reporting the position of the first failing record.
pub fn project_field(records: &[Record], name: &str) -> Result<Vec<f64>, AnalyticsError> {
    project(records.iter().enumerate(), |(index, record)| {
        record
            .number(name)
            .map_err(|e| AnalyticsError::extraction(*index, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshots() -> Vec<Record> {
        serde_json::from_value(json!([
            {"index": 0, "eur": 100.0, "usd": 50.0},
            {"index": 1, "eur": 90.0, "usd": 61.0},
            {"index": 2, "eur": 95.5, "usd": 55.0}
        ]))
        .unwrap()
    }

    #[test]
    fn test_project_is_index_aligned() {
        let records = snapshots();
        let eur = project(&records, field("eur")).unwrap();

        assert_eq!(eur.len(), records.len());
        for (i, record) in records.iter().enumerate() {
            assert_eq!(eur[i], record.number("eur").unwrap());
        }
    }

    #[test]
    fn test_project_many_returns_one_column_per_extractor() {
        let records = snapshots();
        let columns = project_many(&records, &[field("index"), field("eur"), field("usd")]).unwrap();

        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0], vec![0.0, 1.0, 2.0]);
        assert_eq!(columns[1], vec![100.0, 90.0, 95.5]);
        assert_eq!(columns[2], vec![50.0, 61.0, 55.0]);
    }

    #[test]
    fn test_indexed_uses_record_position() {
        let records = snapshots();
        let series = indexed(&records, field("usd")).unwrap();

        assert_eq!(series.xs(), &[0.0, 1.0, 2.0]);
        assert_eq!(series.ys(), &[50.0, 61.0, 55.0]);
    }

    #[test]
    fn test_empty_input_projects_to_empty() {
        let records: Vec<Record> = Vec::new();
        assert!(project(&records, field("eur")).unwrap().is_empty());
        let columns = project_many(&records, &[field("eur"), field("usd")]).unwrap();
        assert_eq!(columns, vec![Vec::<f64>::new(), Vec::new()]);
    }

    #[test]
    fn test_project_field_reports_failing_index() {
        let mut records = snapshots();
        records.push(Record::new().with_field("index", 3));

        let err = project_field(&records, "eur").unwrap_err();
        assert_eq!(
            err,
            AnalyticsError::Extraction {
                index: 3,
                source: CoreError::MissingField("eur".to_string()),
            }
        );
    }
}
