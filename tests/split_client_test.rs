use httpmock::prelude::*;
use telesplit::upload::{SpreadsheetFile, SplitClient, Submission};
use telesplit::{SplitterConfig, SplitterError};

fn submission(column: &str) -> Submission {
    Submission {
        file: SpreadsheetFile::new("report.xlsx", b"PK-sheet-bytes".to_vec()),
        column_name: column.to_string(),
    }
}

#[tokio::test]
async fn test_posts_file_and_column_as_multipart() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/process-excel")
            .header_exists("content-type")
            .body_contains("name=\"file\"; filename=\"report.xlsx\"")
            .body_contains("PK-sheet-bytes")
            .body_contains("name=\"column_name\"")
            .body_contains("Mobile");
        then.status(200)
            .header("Content-Type", "application/zip")
            .body("PK\u{5}\u{6}zip");
    });

    let config = SplitterConfig::default().with_endpoint(server.url("/process-excel"));
    let client = SplitClient::new(&config).unwrap();

    let bytes = client.split(&submission("Mobile")).await.unwrap();

    mock.assert();
    assert_eq!(bytes, b"PK\x05\x06zip");
}

#[tokio::test]
async fn test_body_has_exactly_two_fields() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/process-excel");
        then.status(200).body("ok");
    });

    let config = SplitterConfig::default().with_endpoint(server.url("/process-excel"));
    let client = SplitClient::new(&config).unwrap();
    client.split(&submission("Mobile")).await.unwrap();
    mock.assert();

    // Re-send through a matcher that only accepts bodies with two parts.
    let strict = server.mock(|when, then| {
        when.method(POST).path("/strict").matches(|req| {
            let body = String::from_utf8_lossy(req.body.as_deref().unwrap_or_default());
            body.matches("Content-Disposition: form-data;").count() == 2
        });
        then.status(200).body("ok");
    });
    let strict_client =
        SplitClient::new(&SplitterConfig::default().with_endpoint(server.url("/strict"))).unwrap();
    strict_client.split(&submission("Mobile")).await.unwrap();
    strict.assert();
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/process-excel");
        then.status(400).body("{\"detail\": \"Column 'Phone' not found\"}");
    });

    let config = SplitterConfig::default().with_endpoint(server.url("/process-excel"));
    let client = SplitClient::new(&config).unwrap();

    let result = client.split(&submission("Phone")).await;

    mock.assert();
    match result {
        Err(SplitterError::StatusError(status)) => assert_eq!(status.as_u16(), 400),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_backend_is_an_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config =
        SplitterConfig::default().with_endpoint(format!("http://{}/process-excel", addr));
    let client = SplitClient::new(&config).unwrap();

    let result = client.split(&submission("Mobile")).await;
    assert!(matches!(result, Err(SplitterError::TransportError(_))));
}
