use edgar_insiders::{ScanBuilder, ScanSummary, export};
use httpmock::{Method::GET, MockServer};
use rust_decimal::Decimal;

use crate::common::{Tx, atom_feed, client_for, detail_page, form4, no_retry};

#[tokio::test]
async fn scan_end_to_end_against_mock_edgar() {
    let server = MockServer::start();

    let feed = atom_feed(&[
        (
            "4 - ACME WIDGETS INC (0000320193) (Issuer)",
            "/Archives/edgar/data/1/0000000001-24-000001-index.htm",
            "2024-05-02T16:05:11-04:00",
        ),
        (
            "4 - GONE CORP (0000000002) (Issuer)",
            "/Archives/edgar/data/2/0000000002-24-000001-index.htm",
            "2024-05-02T15:00:00-04:00",
        ),
    ]);
    let index = server.mock(|when, then| {
        when.method(GET)
            .path("/cgi-bin/browse-edgar")
            .query_param("type", "4")
            .query_param("output", "atom")
            .query_param("start", "0")
            .query_param_exists("datea");
        then.status(200)
            .header("content-type", "application/atom+xml")
            .body(feed);
    });
    let index_end = server.mock(|when, then| {
        when.method(GET)
            .path("/cgi-bin/browse-edgar")
            .query_param("start", "100");
        then.status(200).body(atom_feed(&[]));
    });

    let detail = server.mock(|when, then| {
        when.method(GET)
            .path("/Archives/edgar/data/1/0000000001-24-000001-index.htm");
        then.status(200)
            .header("content-type", "text/html")
            .body(detail_page("wk-form4.xml"));
    });
    let document = server.mock(|when, then| {
        when.method(GET).path("/Archives/edgar/data/1/wk-form4.xml");
        then.status(200)
            .header("content-type", "text/xml")
            .body(form4(
                true,
                &[Tx("P", "10000", "42.00"), Tx("S", "10", "42.00")],
                &[],
            ));
    });
    let gone = server.mock(|when, then| {
        when.method(GET)
            .path("/Archives/edgar/data/2/0000000002-24-000001-index.htm");
        then.status(404);
    });

    let client = client_for(&server, no_retry());
    let report = ScanBuilder::new(&client)
        .window_days(3)
        .run()
        .await
        .unwrap();

    index.assert_calls(1);
    index_end.assert_calls(1);
    detail.assert_calls(1);
    document.assert_calls(1);
    gone.assert_calls(1);

    assert_eq!(
        report.summary,
        ScanSummary {
            filings_seen: 2,
            filings_parsed: 1,
            trades_extracted: 2,
            trades_retained: 1,
        }
    );
    let t = &report.trades[0];
    assert_eq!(t.total_value, Decimal::new(420_000, 0));
    assert_eq!(t.ticker.as_deref(), Some("ACME"));
    assert_eq!(
        t.source_url,
        server.url("/Archives/edgar/data/1/0000000001-24-000001-index.htm")
    );

    let mut csv = Vec::new();
    export::write_csv(&mut csv, &report.trades).unwrap();
    let text = String::from_utf8(csv).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.lines().nth(1).unwrap().starts_with("2024-05-01,ACME,"));
}
