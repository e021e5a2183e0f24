//! HTTP source: one GET returning the whole record array

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use super::{decode_payload, ExpenseSource};
use crate::error::{DashError, DashResult};
use crate::models::ExpenseRecord;

/// Fetches records from an HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> DashResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DashError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl ExpenseSource for HttpSource {
    fn fetch(&self) -> DashResult<Option<Vec<ExpenseRecord>>> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(|e| {
                tracing::warn!(url = %self.url, timeout = e.is_timeout(), "request failed");
                DashError::transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashError::transport(format!(
                "HTTP error! status: {}",
                status.as_u16()
            )));
        }

        let payload: Option<Vec<Value>> = response.json().map_err(DashError::transport)?;
        let records = decode_payload(payload);
        tracing::debug!(
            url = %self.url,
            records = records.as_ref().map_or(0, Vec::len),
            "fetched expenses"
        );
        Ok(records)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve a single canned response on a random local port
    fn serve_once(status: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });

        format!("http://{}/api/gastos", addr)
    }

    fn source(url: &str) -> HttpSource {
        HttpSource::new(url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_fetch_records() {
        let url = serve_once(
            "200 OK",
            r#"[{"proyecto":"A","fecha":"2024-01-05","monto":"100"}]"#,
        );
        let records = source(&url).fetch().unwrap().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].project_id(), Some("A"));
    }

    #[test]
    fn test_odd_element_does_not_fail_the_response() {
        let url = serve_once(
            "200 OK",
            r#"[{"proyecto":"A","fecha":"2024-01-05","monto":"100"},"junk"]"#,
        );
        let records = source(&url).fetch().unwrap().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], ExpenseRecord::default());
    }

    #[test]
    fn test_non_success_status() {
        let url = serve_once("500 Internal Server Error", "{}");
        let err = source(&url).fetch().unwrap_err();
        assert_eq!(err, DashError::Transport("HTTP error! status: 500".into()));
    }

    #[test]
    fn test_unreachable_host_is_transport_failure() {
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let err = source(&format!("http://{}/", addr)).fetch().unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_null_body() {
        let url = serve_once("200 OK", "null");
        assert_eq!(source(&url).fetch().unwrap(), None);
    }
}
