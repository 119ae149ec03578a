use crate::error::AnalyticsError;
use core_types::{Record, SeriesSet};
use std::hash::Hash;

/// Partitions records into series keyed by `key_fn`.
///
/// Records are visited in input order. A key seen for the first time opens a
/// new series at the end of the set, and every record appends one `(x, y)`
/// pair to its key's series. The first extraction failure aborts the whole
/// grouping and is returned unchanged.
pub fn group_by<I, R, K, X, Y, E, FK, FX, FY>(
    records: I,
    key_fn: FK,
    x_fn: FX,
    y_fn: FY,
) -> Result<SeriesSet<K, X, Y>, E>
where
    I: IntoIterator<Item = R>,
    K: Hash + Eq,
    FK: Fn(&R) -> Result<K, E>,
    FX: Fn(&R) -> Result<X, E>,
    FY: Fn(&R) -> Result<Y, E>,
{
    let mut groups = SeriesSet::new();

    for record in records {
        // Extract everything before touching the set so a failing record
        // never leaves an empty series behind.
        let key = key_fn(&record)?;
        let x = x_fn(&record)?;
        let y = y_fn(&record)?;
        groups.push(key, x, y);
    }

    Ok(groups)
}

/// Groups records by the string form of `key_field`, plotting the numeric
/// `x_field` against the numeric `y_field`.
pub fn group_records_by_field(
    records: &[Record],
    key_field: &str,
    x_field: &str,
    y_field: &str,
) -> Result<SeriesSet<String, f64, f64>, AnalyticsError> {
    let groups = group_by(
        records.iter().enumerate(),
        |(index, record)| record.key(key_field).map_err(|e| AnalyticsError::extraction(*index, e)),
        |(index, record)| record.number(x_field).map_err(|e| AnalyticsError::extraction(*index, e)),
        |(index, record)| record.number(y_field).map_err(|e| AnalyticsError::extraction(*index, e)),
    )?;

    tracing::debug!(
        key_field,
        groups = groups.len(),
        points = groups.total_points(),
        "Grouped records into series."
    );

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::CoreError;
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let records = records(json!([
            {"k": "a", "x": 1, "y": 10},
            {"k": "b", "x": 2, "y": 20},
            {"k": "a", "x": 3, "y": 30}
        ]));

        let groups = group_records_by_field(&records, "k", "x", "y").unwrap();

        let keys: Vec<_> = groups.keys().cloned().collect();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);

        let a = groups.get(&"a".to_string()).unwrap();
        assert_eq!(a.xs(), &[1.0, 3.0]);
        assert_eq!(a.ys(), &[10.0, 30.0]);

        let b = groups.get(&"b".to_string()).unwrap();
        assert_eq!(b.xs(), &[2.0]);
        assert_eq!(b.ys(), &[20.0]);
    }

    #[test]
    fn test_lengths_match_key_counts() {
        let keys = ["x", "y", "x", "z", "y", "x"];
        let input: Vec<(usize, &str)> = keys.iter().copied().enumerate().collect();

        let groups = group_by(
            input.iter(),
            |(_, k)| Ok::<_, CoreError>(*k),
            |(i, _)| Ok(*i),
            |(i, _)| Ok(*i * 10),
        )
        .unwrap();

        assert_eq!(groups.total_points(), keys.len());
        for (key, series) in groups.iter() {
            let expected = keys.iter().filter(|k| *k == key).count();
            assert_eq!(series.xs().len(), expected);
            assert_eq!(series.ys().len(), expected);
        }
        assert_eq!(groups.get(&"x").unwrap().xs(), &[0, 2, 5]);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_numeric_keys_group_by_value() {
        let records = records(json!([
            {"interest": 0.0, "n_transactions": 10, "gain_percentages_mean": 1.5},
            {"interest": 0.005, "n_transactions": 10, "gain_percentages_mean": 2.5},
            {"interest": 0.0, "n_transactions": 20, "gain_percentages_mean": 3.5}
        ]));

        let groups =
            group_records_by_field(&records, "interest", "n_transactions", "gain_percentages_mean")
                .unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups.get(&"0".to_string()).unwrap().len(), 2);
        assert_eq!(groups.get(&"0.005".to_string()).unwrap().len(), 1);
    }

    #[test]
    fn test_integer_and_float_forms_share_a_group() {
        let records = records(json!([
            {"k": 0, "x": 1, "y": 10},
            {"k": 0.0, "x": 2, "y": 20},
            {"k": 1e-5, "x": 3, "y": 30},
            {"k": 1, "x": 4, "y": 40},
            {"k": 1.0, "x": 5, "y": 50}
        ]));

        let groups = group_records_by_field(&records, "k", "x", "y").unwrap();

        let keys: Vec<_> = groups.keys().cloned().collect();
        assert_eq!(keys, vec!["0", "0.00001", "1"]);
        assert_eq!(groups.get(&"0".to_string()).unwrap().xs(), &[1.0, 2.0]);
        assert_eq!(groups.get(&"1".to_string()).unwrap().ys(), &[40.0, 50.0]);
        assert_eq!(groups.total_points(), records.len());
    }

    #[test]
    fn test_missing_field_aborts_with_index() {
        let records = records(json!([
            {"k": "a", "x": 1, "y": 10},
            {"k": "b", "x": 2}
        ]));

        let err = group_records_by_field(&records, "k", "x", "y").unwrap_err();
        assert_eq!(
            err,
            AnalyticsError::Extraction {
                index: 1,
                source: CoreError::MissingField("y".to_string()),
            }
        );
    }

    #[test]
    fn test_empty_input() {
        let groups = group_records_by_field(&[], "k", "x", "y").unwrap();
        assert!(groups.is_empty());
    }
}
