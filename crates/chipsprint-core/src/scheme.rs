// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Decoder for the chipsprint: URI-scheme argument.
//
// The OS scheme dispatcher hands the process one URL-encoded argument of
// the form
//
//   chipsprint:<encoded-target-url>
//   chipsprint:<encoded-target-url>|cert=<true|false>,debug=<true|false>
//
// Parameters are matched case-insensitively; unrecognised ones are ignored.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::{ChipsPrintError, Result};
use crate::types::PrintRequest;

/// The custom scheme this handler is registered for.
pub const URI_SCHEME: &str = "chipsprint";

/// Decode the raw process argument into a [`PrintRequest`].
///
/// Fails with [`ChipsPrintError::InvalidUrl`] unless the decoded target is
/// an absolute `http` or `https` URL. No partial request is ever returned.
pub fn decode(raw: &str) -> Result<PrintRequest> {
    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|err| ChipsPrintError::InvalidUrl(format!("{raw}: {err}")))?;

    let payload = decoded
        .strip_prefix(URI_SCHEME)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(&decoded);

    // Everything before the first pipe is the URL; the segment after it is
    // the parameter list. Further pipe-separated segments are discarded.
    let mut segments = payload.split('|');
    let url_part = segments.next().unwrap_or_default();
    let params = segments.next().map(str::to_ascii_lowercase);

    let url = parse_target_url(url_part)?;

    let mut certificate = false;
    let mut debug = false;
    if let Some(params) = params {
        for param in params.split(',') {
            match param {
                "cert=true" => certificate = true,
                "debug=true" => debug = true,
                _ => {}
            }
        }
    }

    Ok(PrintRequest {
        url,
        certificate,
        debug,
    })
}

/// Validate the target as an absolute http/https URL.
fn parse_target_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|err| ChipsPrintError::InvalidUrl(format!("{raw}: {err}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ChipsPrintError::InvalidUrl(format!(
            "{raw}: scheme '{other}' is not http or https"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_url_decodes_with_defaults() {
        let request = decode("chipsprint:http%3A%2F%2Fexample.com%2Fa.pdf").unwrap();
        assert_eq!(request.url.as_str(), "http://example.com/a.pdf");
        assert!(!request.certificate);
        assert!(!request.debug);
    }

    #[test]
    fn cert_and_debug_parameters_are_recognised() {
        let request =
            decode("chipsprint:http%3A%2F%2Fexample.com%2Fa.pdf|cert=true,debug=true").unwrap();
        assert_eq!(request.url.as_str(), "http://example.com/a.pdf");
        assert!(request.certificate);
        assert!(request.debug);
    }

    #[test]
    fn cert_false_stays_false() {
        let request = decode("chipsprint:http%3A%2F%2Fexample.com%2Fa.pdf|cert=false").unwrap();
        assert!(!request.certificate);
        assert!(!request.debug);
    }

    #[test]
    fn parameters_match_case_insensitively() {
        let request = decode("chipsprint:http%3A%2F%2Fexample.com%2Fa.pdf|CERT=TRUE").unwrap();
        assert!(request.certificate);
    }

    #[test]
    fn unrecognised_parameters_are_ignored() {
        let request =
            decode("chipsprint:http%3A%2F%2Fexample.com%2Fa.pdf|foo=bar,debug=true").unwrap();
        assert!(!request.certificate);
        assert!(request.debug);
    }

    #[test]
    fn segments_after_a_second_pipe_are_discarded() {
        let request =
            decode("chipsprint:http%3A%2F%2Fexample.com%2Fa.pdf|cert=true|debug=true").unwrap();
        assert!(request.certificate);
        assert!(!request.debug);
    }

    #[test]
    fn missing_scheme_prefix_is_tolerated() {
        let request = decode("http%3A%2F%2Fexample.com%2Fa.pdf").unwrap();
        assert_eq!(request.url.as_str(), "http://example.com/a.pdf");
    }

    #[test]
    fn https_urls_are_accepted() {
        let request = decode("chipsprint:https%3A%2F%2Fexample.com%2Fa.pdf").unwrap();
        assert_eq!(request.url.scheme(), "https");
    }

    #[test]
    fn ftp_url_is_rejected() {
        let err = decode("chipsprint:ftp%3A%2F%2Fexample.com%2Fa.pdf").unwrap_err();
        assert!(matches!(err, ChipsPrintError::InvalidUrl(_)));
    }

    #[test]
    fn non_url_text_is_rejected() {
        let err = decode("chipsprint:not%20a%20url").unwrap_err();
        assert!(matches!(err, ChipsPrintError::InvalidUrl(_)));
    }

    #[test]
    fn relative_url_is_rejected() {
        let err = decode("chipsprint:%2Fdocs%2Fa.pdf").unwrap_err();
        assert!(matches!(err, ChipsPrintError::InvalidUrl(_)));
    }

    #[test]
    fn empty_payload_is_rejected() {
        assert!(decode("chipsprint:").is_err());
        assert!(decode("").is_err());
    }

    #[test]
    fn unencoded_url_also_decodes() {
        // Percent-decoding an already-plain URL is a no-op.
        let request = decode("chipsprint:http://example.com/a.pdf|debug=true").unwrap();
        assert_eq!(request.url.as_str(), "http://example.com/a.pdf");
        assert!(request.debug);
    }
}
