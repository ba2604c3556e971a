// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTTP download of the target document into memory.
//
// One GET per invocation. No retries; a failure surfaces to the user as a
// dialog and the process exits.

use std::time::Duration;

use tracing::{debug, info, instrument};
use url::Url;

use chipsprint_core::AppConfig;
use chipsprint_core::error::{ChipsPrintError, Result};

/// Build the HTTP client used for the single download.
///
/// No timeout is applied unless one is configured; the download waits as
/// long as the server does.
pub fn build_http_client(config: &AppConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = config.http_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|err| ChipsPrintError::Download(format!("building HTTP client: {err}")))
}

/// Download the document at `url` into a byte buffer.
#[instrument(skip(client), fields(url = %url))]
pub async fn fetch_document(client: &reqwest::Client, url: &Url) -> Result<Vec<u8>> {
    debug!("requesting document");

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|err| ChipsPrintError::Download(format!("GET {url}: {err}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ChipsPrintError::Download(format!(
            "GET {url}: HTTP status {status}"
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|err| ChipsPrintError::Download(format!("reading body of {url}: {err}")))?;

    info!(bytes = bytes.len(), "document downloaded");
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn downloads_body_bytes() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/a.pdf");
                then.status(200).body("%PDF-1.5 payload");
            })
            .await;

        let client = build_http_client(&AppConfig::default()).unwrap();
        let url = Url::parse(&server.url("/a.pdf")).unwrap();

        let bytes = fetch_document(&client, &url).await.unwrap();
        mock.assert_async().await;
        assert_eq!(bytes, b"%PDF-1.5 payload".to_vec());
    }

    #[tokio::test]
    async fn http_error_status_is_a_download_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/gone.pdf");
                then.status(404);
            })
            .await;

        let client = build_http_client(&AppConfig::default()).unwrap();
        let url = Url::parse(&server.url("/gone.pdf")).unwrap();

        let err = fetch_document(&client, &url).await.unwrap_err();
        assert!(matches!(err, ChipsPrintError::Download(_)));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_download_error() {
        let client = build_http_client(&AppConfig::default()).unwrap();
        // Port 1 is never listening.
        let url = Url::parse("http://127.0.0.1:1/unreachable.pdf").unwrap();

        let err = fetch_document(&client, &url).await.unwrap_err();
        assert!(matches!(err, ChipsPrintError::Download(_)));
    }
}
