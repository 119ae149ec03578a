use charts::SeriesSummary;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

/// A table of every drawn series with its point count and value range.
pub fn summary_table(rows: &[SeriesSummary]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Panel", "Series", "Points", "Min", "Max"]);

    for row in rows {
        let (min, max) = match row.y_bounds {
            Some(b) => (format!("{:.2}", b.min), format!("{:.2}", b.max)),
            None => ("-".to_string(), "-".to_string()),
        };
        table.add_row(vec![
            row.panel.clone(),
            row.label.clone(),
            row.points.to_string(),
            min,
            max,
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::Bounds;

    #[test]
    fn test_summary_table_rows() {
        let rows = vec![
            SeriesSummary {
                panel: "Market".to_string(),
                label: "usd".to_string(),
                points: 3,
                y_bounds: Some(Bounds { min: 1.0, max: 2.5 }),
            },
            SeriesSummary {
                panel: "Trader".to_string(),
                label: "-".to_string(),
                points: 0,
                y_bounds: None,
            },
        ];

        let table = summary_table(&rows);
        assert_eq!(table.row_iter().count(), 2);

        let rendered = table.to_string();
        assert!(rendered.contains("Market"));
        assert!(rendered.contains("2.50"));
    }
}
