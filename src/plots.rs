use analytics::{AnalyticsError, CurrencyNormalizer, group_by, group_records_by_field, indexed};
use charts::{ChartSpec, LinePanel, Pane};
use core_types::{CoreError, CurrencyCode, Record, Series};

/// Mean gain of a simulation sweep, one line per interest rate.
pub fn sweep_chart(simulations: &[Record]) -> Result<ChartSpec, AnalyticsError> {
    let groups =
        group_records_by_field(simulations, "interest", "n_transactions", "gain_percentages_mean")?;

    let mut panel = LinePanel::new("Mean gain by interest", "n_transactions", "mean gain percentage");
    for (interest, series) in groups {
        panel = panel.with_series(series.with_label(format!("interest= {interest}")));
    }

    Ok(ChartSpec::new(panel))
}

/// The five stacked panels of a single simulation run: per-transaction quantity
/// (in EUR), gain and euros paid, then market and trader holdings in EUR.
pub fn single_chart(
    transactions: &[Record],
    market: &[Record],
    trader: &[Record],
    normalizer: &CurrencyNormalizer,
) -> Result<ChartSpec, AnalyticsError> {
    let quantity = per_transaction(transactions, |t| {
        normalizer.to_reference(t, "quantity", "good_type")
    })?;
    let gain = per_transaction(transactions, |t| t.number("gain_percenteage"))?;
    let euros_payed = per_transaction(transactions, |t| t.number("euros_payed"))?;

    let panes = vec![
        LinePanel::new("Quantity exchanged", "n transactions", "quantity exchanged")
            .with_series(quantity)
            .into(),
        LinePanel::new("Gain", "n transactions", "gain percenteage")
            .with_series(gain)
            .into(),
        LinePanel::new("Euros payed", "n transactions", "euros payed")
            .with_series(euros_payed)
            .into(),
        holdings_panel(market, normalizer, "Market", "market goods in eur")?.into(),
        holdings_panel(trader, normalizer, "Trader", "trader goods in eur")?.into(),
    ];

    Ok(ChartSpec::new(Pane::column(panes)))
}

/// Market gain and euros paid for every transaction.
pub fn transactions_chart(transactions: &[Record]) -> Result<ChartSpec, AnalyticsError> {
    let market_gain = per_transaction(transactions, |t| {
        Ok(t.number("market_end")? - t.number("market_start")?)
    })?
    .with_label("EUR");
    let euros_payed = per_transaction(transactions, |t| t.number("euros_payed"))?.with_label("EUR");

    let panes = vec![
        LinePanel::new("Transaction Market Gain", "Time", "Market Gain in EUR")
            .with_series(market_gain)
            .into(),
        LinePanel::new("Transaction EUR payed", "Time", "EUR payed for transaction")
            .with_series(euros_payed)
            .into(),
    ];

    Ok(ChartSpec::new(Pane::column(panes)))
}

/// Total wallet value in EUR on top, one panel per currency quantity below.
pub fn wallet_chart(
    wallets: &[Record],
    normalizer: &CurrencyNormalizer,
    caption: &str,
) -> Result<ChartSpec, AnalyticsError> {
    let total = per_transaction(wallets, |w| normalizer.total_in_reference(w))?
        .with_label("Total Value in Eur");

    let mut quadrants = Vec::with_capacity(CurrencyCode::ALL.len());
    for code in CurrencyCode::ALL {
        let name = code.as_str().to_uppercase();
        let quantity = per_transaction(wallets, |w| w.number(code.as_str()))?.with_label(name.as_str());
        quadrants.push(
            LinePanel::new(format!("{name} Good Quantity"), "Time", "")
                .with_series(quantity)
                .into(),
        );
    }

    let top = LinePanel::new(
        format!("{caption} Total Wallet Value in EUR"),
        "Time",
        "Total value in EUR",
    )
    .with_series(total);

    Ok(ChartSpec::new(Pane::column(vec![
        top.into(),
        Pane::Grid {
            rows: 2,
            cols: 2,
            panes: quadrants,
        },
    ])))
}

/// `metric(record)` against the record's position in the document.
fn per_transaction<F>(records: &[Record], metric: F) -> Result<Series<f64, f64>, AnalyticsError>
where
    F: Fn(&Record) -> Result<f64, CoreError>,
{
    indexed(records.iter().enumerate(), |(index, record)| {
        metric(*record).map_err(|e| AnalyticsError::extraction(*index, e))
    })
}

/// Holdings of a market or trader snapshot, one line per currency normalized to
/// EUR, plotted against the snapshot's `index`.
fn holdings_panel(
    snapshots: &[Record],
    normalizer: &CurrencyNormalizer,
    caption: &str,
    y_desc: &str,
) -> Result<LinePanel, AnalyticsError> {
    let cells = snapshots.iter().enumerate().flat_map(|(index, record)| {
        CurrencyCode::ALL
            .into_iter()
            .map(move |code| (index, record, code))
    });

    let groups = group_by(
        cells,
        |(_, _, code)| Ok(*code),
        |(index, record, _)| {
            record
                .number("index")
                .map_err(|e| AnalyticsError::extraction(*index, e))
        },
        |(index, record, code)| {
            record
                .number(code.as_str())
                .map(|quantity| normalizer.normalize(quantity, *code))
                .map_err(|e| AnalyticsError::extraction(*index, e))
        },
    )?;

    let mut panel = LinePanel::new(caption, "time", y_desc);
    for (code, series) in groups {
        panel = panel.with_series(series.with_label(code.as_str()));
    }
    Ok(panel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::ExchangeRateTable;
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    fn normalizer() -> CurrencyNormalizer {
        CurrencyNormalizer::new(ExchangeRateTable::DEFAULT)
    }

    fn transactions() -> Vec<Record> {
        records(json!([
            {"is_buy": 1, "quantity": 103.576, "good_type": "usd", "euros_payed": 100.0,
             "standard_change": 100.0, "market_start": 5000.0, "market_end": 5002.5, "gain_percenteage": 0.05},
            {"is_buy": 0, "quantity": 50.0, "good_type": "eur", "euros_payed": 50.0,
             "standard_change": 50.0, "market_start": 5002.5, "market_end": 5001.0, "gain_percenteage": -0.03}
        ]))
    }

    fn snapshots() -> Vec<Record> {
        records(json!([
            {"index": 0, "eur": 10.0, "usd": 10.3576, "yen": 1436.15, "yuan": 73.599},
            {"index": 1, "eur": 20.0, "usd": 0.0, "yen": 0.0, "yuan": 0.0}
        ]))
    }

    #[test]
    fn test_sweep_chart_has_one_line_per_interest() {
        let simulations = records(json!([
            {"interest": 0.0, "n_transactions": 10, "gain_percentages_mean": 0.1},
            {"interest": 0.005, "n_transactions": 10, "gain_percentages_mean": 0.4},
            {"interest": 0.0, "n_transactions": 20, "gain_percentages_mean": 0.2}
        ]));

        let spec = sweep_chart(&simulations).unwrap();
        let panels = spec.root.panels();
        assert_eq!(panels.len(), 1);

        let labels: Vec<_> = panels[0].series.iter().map(|s| s.label().unwrap()).collect();
        assert_eq!(labels, vec!["interest= 0", "interest= 0.005"]);
        assert_eq!(panels[0].series[0].xs(), &[10.0, 20.0]);
        assert_eq!(panels[0].series[0].ys(), &[0.1, 0.2]);
    }

    #[test]
    fn test_single_chart_normalizes_quantities_and_holdings() {
        let spec = single_chart(&transactions(), &snapshots(), &snapshots(), &normalizer()).unwrap();
        let panels = spec.root.panels();
        assert_eq!(panels.len(), 5);

        let quantity = &panels[0].series[0];
        assert_eq!(quantity.xs(), &[0.0, 1.0]);
        assert!((quantity.ys()[0] - 100.0).abs() < 1e-9);
        assert_eq!(quantity.ys()[1], 50.0);

        let market = panels[3];
        let labels: Vec<_> = market.series.iter().map(|s| s.label().unwrap()).collect();
        assert_eq!(labels, vec!["eur", "usd", "yen", "yuan"]);
        for series in &market.series {
            assert_eq!(series.xs(), &[0.0, 1.0]);
            assert!((series.ys()[0] - 10.0).abs() < 1e-9);
        }
        assert_eq!(market.series[0].ys()[1], 20.0);
    }

    #[test]
    fn test_single_chart_missing_field_reports_record() {
        let mut market = snapshots();
        market.push(Record::new().with_field("index", 2).with_field("eur", 1.0));

        let err = single_chart(&transactions(), &market, &snapshots(), &normalizer()).unwrap_err();
        assert_eq!(
            err,
            AnalyticsError::extraction(2, CoreError::MissingField("usd".to_string()))
        );
    }

    #[test]
    fn test_transactions_chart_market_gain() {
        let spec = transactions_chart(&transactions()).unwrap();
        let panels = spec.root.panels();

        assert_eq!(panels[0].series[0].ys(), &[2.5, -1.5]);
        assert_eq!(panels[1].series[0].ys(), &[100.0, 50.0]);
    }

    #[test]
    fn test_wallet_chart_layout_and_totals() {
        let spec = wallet_chart(&snapshots(), &normalizer(), "Trader").unwrap();
        let panels = spec.root.panels();

        assert_eq!(panels.len(), 5);
        assert_eq!(panels[0].caption, "Trader Total Wallet Value in EUR");
        assert!((panels[0].series[0].ys()[0] - 40.0).abs() < 1e-9);
        assert_eq!(panels[0].series[0].ys()[1], 20.0);

        assert_eq!(panels[2].caption, "USD Good Quantity");
        assert_eq!(panels[2].series[0].ys(), &[10.3576, 0.0]);
    }
}
