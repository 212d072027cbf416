//! BscScan HTTP transport
//!
//! Sends an assembled log query to the explorer and decodes the JSON
//! envelope. No caching, retries or rate limiting happen here.

use crate::config::Settings;
use crate::error::{ApiError, ConfigError, Result};
use crate::query::{FieldKey, LogQueryRequest, QueryString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Explorer response envelope
#[derive(Debug, Deserialize)]
struct ExplorerResponse {
    status: String,
    message: String,
    result: serde_json::Value,
}

/// One event log as returned by `getLogs`.
///
/// Numeric fields are hex strings, exactly as the explorer sends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub address: String,
    pub topics: Vec<String>,
    pub data: String,
    pub block_number: String,
    pub time_stamp: String,
    pub gas_price: String,
    pub gas_used: String,
    pub log_index: String,
    pub transaction_hash: String,
    pub transaction_index: String,
}

impl LogEntry {
    /// Block number decoded from hex
    pub fn block_number(&self) -> Option<u64> {
        decode_hex_u64(&self.block_number)
    }

    /// Unix timestamp decoded from hex
    pub fn timestamp(&self) -> Option<u64> {
        decode_hex_u64(&self.time_stamp)
    }
}

/// BscScan client for the logs endpoint
pub struct Client {
    /// HTTP client
    http: reqwest::Client,
    /// API endpoint, without query string
    base_url: Url,
    /// API key (if any)
    api_key: Option<String>,
}

impl Client {
    /// Create a new client from settings
    pub fn new(settings: &Settings, api_key: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(ApiError::Http)?;

        let base_url = Url::parse(settings.base_url()).map_err(|e| {
            ConfigError::InvalidBaseUrl(format!("{}: {}", settings.base_url(), e))
        })?;

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// Get the API endpoint
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Full request URL for a query, values form-encoded and the API key
    /// appended last
    pub fn request_url(&self, query: &QueryString) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.pairs() {
                pairs.append_pair(key.as_str(), value);
            }
            if let Some(key) = &self.api_key {
                pairs.append_pair(FieldKey::ApiKey.as_str(), key);
            }
        }
        url
    }

    /// Fetch event logs matching `request`.
    ///
    /// The explorer returns at most 1000 entries per call.
    pub async fn get_logs(&self, request: &LogQueryRequest) -> Result<Vec<LogEntry>> {
        let query = request.build()?;
        let url = self.request_url(&query);

        tracing::debug!("GET {}?{}", self.base_url, query);

        let response = self.http.get(url).send().await.map_err(ApiError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.text().await.map_err(ApiError::Http)?;
        parse_logs_response(&body)
    }
}

/// Decode a `getLogs` response body.
///
/// An empty result set is reported by the explorer as a failure with the
/// message "No records found"; that case decodes to an empty list.
pub fn parse_logs_response(body: &str) -> Result<Vec<LogEntry>> {
    let envelope: ExplorerResponse = serde_json::from_str(body)
        .map_err(|e| ApiError::InvalidResponse(format!("Malformed envelope: {}", e)))?;

    if envelope.status == "1" {
        let logs = serde_json::from_value(envelope.result)
            .map_err(|e| ApiError::InvalidResponse(format!("Malformed log entry: {}", e)))?;
        return Ok(logs);
    }

    if envelope.message.starts_with("No records found") {
        return Ok(Vec::new());
    }

    let result = match envelope.result {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    };

    Err(ApiError::Rejected {
        message: envelope.message,
        result,
    }
    .into())
}

// ============================================================================
// Helper functions
// ============================================================================

fn decode_hex_u64(hex: &str) -> Option<u64> {
    let digits = hex.strip_prefix("0x").unwrap_or(hex);
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Network;
    use crate::query::{Topic, TopicPair};
    use mockito::Matcher;

    const ADDRESS: &str = "0xe561479bebee0e606c19bb1973fc4761613e3c42";
    const TRANSFER: &str = "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";
    const SENDER: &str = "0x000000000000000000000000730e2065b9daee84c3003c05bf6d2b3a08e55667";

    const SUCCESS: &str = r#"{
        "status": "1",
        "message": "OK",
        "result": [{
            "address": "0xe561479bebee0e606c19bb1973fc4761613e3c42",
            "topics": [
                "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef",
                "0x000000000000000000000000730e2065b9daee84c3003c05bf6d2b3a08e55667",
                "0x000000000000000000000000d7d19938eae260d7f0e0a4c36e665ff4cf4b7acc"
            ],
            "data": "0x000000000000000000000000000000000000000000000000076cd96f53f24b0a",
            "blockNumber": "0x4c3326",
            "timeStamp": "0x602e9ef1",
            "gasPrice": "0x2540be400",
            "gasUsed": "0x1b0f2",
            "logIndex": "0xf7",
            "transactionHash": "0x73844fcfc6beab2e973a897c9573f4d79811b12213ce263045a203e0d3cea90e",
            "transactionIndex": "0xb9"
        }]
    }"#;

    fn client(api_key: Option<&str>) -> Client {
        Client::new(&Settings::default(), api_key.map(String::from)).unwrap()
    }

    fn mock_client(server: &mockito::Server, api_key: Option<&str>) -> Client {
        let settings = Settings {
            base_url: Some(format!("{}/api", server.url())),
            ..Default::default()
        };
        Client::new(&settings, api_key.map(String::from)).unwrap()
    }

    fn transfer_request() -> LogQueryRequest {
        LogQueryRequest::new(4_993_830u64, 4_993_832u64)
            .with_address(ADDRESS)
            .with_topic(Topic::T0, TRANSFER)
            .with_operator(TopicPair::T0T1, "and")
            .with_topic(Topic::T1, SENDER)
    }

    #[test]
    fn test_parse_success() {
        let logs = parse_logs_response(SUCCESS).unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].topics.len(), 3);
        assert_eq!(logs[0].block_number(), Some(4_993_830));
        assert_eq!(logs[0].timestamp(), Some(0x602e9ef1));
    }

    #[test]
    fn test_parse_no_records() {
        let body = r#"{"status":"0","message":"No records found","result":[]}"#;
        assert!(parse_logs_response(body).unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejected() {
        let body = r#"{"status":"0","message":"NOTOK","result":"Invalid API Key"}"#;
        let err = parse_logs_response(body).unwrap_err();
        match err {
            crate::Error::Api(ApiError::Rejected { message, result }) => {
                assert_eq!(message, "NOTOK");
                assert_eq!(result, "Invalid API Key");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            parse_logs_response("<html>"),
            Err(crate::Error::Api(ApiError::InvalidResponse(_)))
        ));
    }

    #[test]
    fn test_request_url_appends_key_last() {
        let query = LogQueryRequest::new(1u64, "latest")
            .with_address("0xabc")
            .with_topic(Topic::T0, "0x01")
            .with_topic(Topic::T1, "0x02")
            .with_operator(TopicPair::T0T1, "or")
            .build()
            .unwrap();

        let url = client(Some("KEY+1")).request_url(&query);
        assert_eq!(
            url.as_str(),
            "https://api.bscscan.com/api?module=logs&action=getLogs&address=0xabc\
             &fromBlock=1&toBlock=latest&topic0=0x01&topic1=0x02&topic0_1opr=or&apikey=KEY%2B1"
        );
    }

    #[test]
    fn test_request_url_encodes_values() {
        let query = LogQueryRequest::new(1u64, 2u64)
            .with_address("0x a&b")
            .build()
            .unwrap();

        let url = client(None).request_url(&query);
        assert!(url.as_str().contains("address=0x+a%26b"));
        assert_eq!(url.query_pairs().count(), 5);
        assert!(!url.as_str().contains("apikey"));
    }

    #[test]
    fn test_network_base_url() {
        let settings = Settings {
            network: Network::Testnet,
            ..Default::default()
        };
        let client = Client::new(&settings, None).unwrap();
        assert_eq!(client.base_url(), Network::Testnet.base_url());
    }

    #[test]
    fn test_invalid_base_url() {
        let settings = Settings {
            base_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            Client::new(&settings, None),
            Err(crate::Error::Config(ConfigError::InvalidBaseUrl(_)))
        ));
    }

    #[tokio::test]
    async fn test_get_logs_sends_query_and_key() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/api")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("module".into(), "logs".into()),
                Matcher::UrlEncoded("action".into(), "getLogs".into()),
                Matcher::UrlEncoded("address".into(), ADDRESS.into()),
                Matcher::UrlEncoded("topic1".into(), SENDER.into()),
                Matcher::UrlEncoded("fromBlock".into(), "4993830".into()),
                Matcher::UrlEncoded("toBlock".into(), "4993832".into()),
                Matcher::UrlEncoded("topic0_1opr".into(), "and".into()),
                Matcher::UrlEncoded("apikey".into(), "KEY".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(SUCCESS)
            .create_async()
            .await;

        let logs = mock_client(&server, Some("KEY"))
            .get_logs(&transfer_request())
            .await
            .unwrap();

        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].log_index, "0xf7");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_logs_no_records() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/api")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"status":"0","message":"No records found","result":[]}"#)
            .create_async()
            .await;

        let logs = mock_client(&server, None)
            .get_logs(&transfer_request())
            .await
            .unwrap();

        assert!(logs.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_logs_http_error() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/api")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let err = mock_client(&server, None)
            .get_logs(&transfer_request())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            crate::Error::Api(ApiError::Status { status: 500 })
        ));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_logs_invalid_block_sends_nothing() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/api")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let request = LogQueryRequest::new("soon", "latest");
        let err = mock_client(&server, None).get_logs(&request).await.unwrap_err();

        assert!(matches!(err, crate::Error::Query(_)));
        mock.assert_async().await;
    }

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_hex_u64("0xf7"), Some(247));
        assert_eq!(decode_hex_u64("ff"), Some(255));
        assert_eq!(decode_hex_u64("0x"), None);
        assert_eq!(decode_hex_u64("0xzz"), None);
    }
}
