use chrono::NaiveDate;
use edgar_insiders::{EdgarError, FilingSource, ScanBuilder, ScanSummary, TradeDirection};
use rust_decimal::Decimal;

use crate::common::{CannedSource, Tx, form4, form4_with};

fn three_filings() -> CannedSource {
    let mut src = CannedSource::new();
    src.add_filing(1, "2024-05-02", Some(form4(true, &[Tx("P", "1000", "150")], &[])));
    src.add_filing(2, "2024-05-02", Some("<ownershipDocument><issuer>".into()));
    src.add_filing(
        3,
        "2024-05-01",
        Some(form4(
            true,
            &[Tx("S", "2000", "100"), Tx("M", "5000", "100")],
            &[],
        )),
    );
    src
}

#[tokio::test]
async fn malformed_filing_is_skipped_and_rest_ranked() {
    let src = three_filings();
    let report = ScanBuilder::new(&src).run().await.unwrap();

    let values: Vec<_> = report.trades.iter().map(|t| t.total_value).collect();
    assert_eq!(values, [Decimal::new(200_000, 0), Decimal::new(150_000, 0)]);
    assert_eq!(report.trades[0].direction, TradeDirection::Sell);
    assert_eq!(
        report.trades[0].source_url,
        "https://www.sec.gov/Archives/edgar/data/3/0000000003-index.htm"
    );
    assert_eq!(report.trades[1].direction, TradeDirection::Buy);

    assert_eq!(
        report.summary,
        ScanSummary {
            filings_seen: 3,
            filings_parsed: 2,
            trades_extracted: 3,
            trades_retained: 2,
        }
    );
}

#[tokio::test]
async fn limit_applies_after_ranking() {
    let src = three_filings();
    let report = ScanBuilder::new(&src).limit(Some(1)).run().await.unwrap();

    assert_eq!(report.trades.len(), 1);
    assert_eq!(report.trades[0].total_value, Decimal::new(200_000, 0));
    assert_eq!(report.summary.trades_retained, 2);
}

#[tokio::test]
async fn threshold_is_configurable() {
    let src = three_filings();
    let report = ScanBuilder::new(&src)
        .min_value(Decimal::new(175_000, 0))
        .run()
        .await
        .unwrap();
    assert_eq!(report.trades.len(), 1);

    let report = ScanBuilder::new(&src)
        .min_value(Decimal::ZERO)
        .run()
        .await
        .unwrap();
    // The "M" row is extracted but never ranked.
    assert_eq!(report.trades.len(), 2);
    assert_eq!(report.summary.trades_extracted, 3);
}

#[tokio::test]
async fn index_failure_before_first_filing_fails_the_scan() {
    let mut src = CannedSource::new();
    src.index.push(Err("index unavailable".into()));
    src.add_filing(1, "2024-05-02", Some(form4(true, &[Tx("P", "1000", "150")], &[])));

    let err = ScanBuilder::new(&src).run().await.unwrap_err();
    assert!(matches!(err, EdgarError::Parse(ref m) if m == "index unavailable"));
}

#[tokio::test]
async fn index_failure_midway_keeps_partial_results() {
    let mut src = CannedSource::new();
    src.add_filing(1, "2024-05-02", Some(form4(true, &[Tx("P", "1000", "150")], &[])));
    src.index.push(Err("page 2 failed".into()));
    src.add_filing(2, "2024-05-02", Some(form4(true, &[Tx("P", "9000", "150")], &[])));

    let report = ScanBuilder::new(&src).run().await.unwrap();
    assert_eq!(report.trades.len(), 1);
    assert_eq!(report.summary.filings_seen, 1);
}

#[tokio::test]
async fn empty_index_is_an_empty_report() {
    let src = CannedSource::new();
    let report = ScanBuilder::new(&src).run().await.unwrap();
    assert!(report.trades.is_empty());
    assert_eq!(report.summary, ScanSummary::default());
}

#[tokio::test]
async fn missing_period_falls_back_to_index_date() {
    let mut src = CannedSource::new();
    src.add_filing(
        7,
        "2024-04-30",
        Some(form4_with(true, "", &[Tx("D", "10000", "12.5")], &[])),
    );

    let report = ScanBuilder::new(&src).run().await.unwrap();
    assert_eq!(report.trades.len(), 1);
    assert_eq!(
        report.trades[0].filing_date,
        NaiveDate::from_ymd_opt(2024, 4, 30)
    );
}

#[tokio::test]
async fn unreachable_document_is_skipped() {
    let mut src = CannedSource::new();
    src.add_filing(1, "2024-05-02", None);
    src.add_filing(2, "2024-05-02", Some(form4(true, &[Tx("P", "1000", "150")], &[])));

    let report = ScanBuilder::new(&src).run().await.unwrap();
    assert_eq!(report.trades.len(), 1);
    assert_eq!(report.summary.filings_seen, 2);
    assert_eq!(report.summary.filings_parsed, 1);
}

#[tokio::test]
async fn exclusion_patterns_pick_the_link() {
    let mut src = CannedSource::new();
    src.add_filing(1, "2024-05-02", Some(form4(true, &[Tx("P", "1000", "150")], &[])));

    // Without exclusions the rendered view is chosen and it is not served.
    let report = ScanBuilder::new(&src)
        .excluded_patterns(Vec::<String>::new())
        .run()
        .await
        .unwrap();
    assert!(report.trades.is_empty());
    assert_eq!(report.summary.filings_parsed, 0);

    let report = ScanBuilder::new(&src)
        .excluded_patterns(["xslF345"])
        .run()
        .await
        .unwrap();
    assert_eq!(report.trades.len(), 1);
}

#[tokio::test]
async fn works_through_a_trait_object() {
    let src = three_filings();
    let dynamic: &dyn FilingSource = &src;
    let report = ScanBuilder::new(dynamic).window_days(1).run().await.unwrap();
    assert_eq!(report.trades.len(), 2);
}
