//! HTTP clients for the LNbits wallet API and the spot price feed.

use crate::config::Config;
use crate::consts::cli_consts::{http, wallet::API_KEY_HEADER};
use crate::wallet::error::ClientError;
use crate::wallet::transaction::Transaction;
use crate::wallet::wire::{parse_balance, parse_spot_price, parse_transactions};
use crate::wallet::{PriceFeed, WalletBackend};
use reqwest::{Client, ClientBuilder, Response};

// User-Agent string with the dashboard version
const USER_AGENT: &str = concat!("wallet-dashboard/", env!("CARGO_PKG_VERSION"));

fn build_http_client() -> Client {
    ClientBuilder::new()
        .connect_timeout(http::connect_timeout())
        .timeout(http::request_timeout())
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to create HTTP client")
}

fn build_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

async fn handle_response_status(response: Response) -> Result<Response, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::from_response(response).await);
    }
    Ok(response)
}

/// One GET, with the API key header when a key is given. No retries.
async fn get_request<T>(
    client: &Client,
    url: &str,
    api_key: Option<&str>,
    parse: fn(&[u8]) -> Result<T, ClientError>,
) -> Result<T, ClientError> {
    log::debug!("GET {}", url);
    let mut request = client.get(url);
    if let Some(key) = api_key {
        request = request.header(API_KEY_HEADER, key);
    }
    let response = request.send().await?;

    let response = handle_response_status(response).await?;
    let response_bytes = response.bytes().await?;
    parse(&response_bytes)
}

/// Public spot price feed (`/prices/{pair}/spot`).
#[derive(Debug, Clone)]
pub struct SpotPriceClient {
    client: Client,
    base_url: String,
    pair: String,
}

impl SpotPriceClient {
    pub fn new(base_url: impl Into<String>, pair: impl Into<String>) -> Self {
        Self {
            client: build_http_client(),
            base_url: base_url.into(),
            pair: pair.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.environment.price_url(), config.price_pair.clone())
    }

    fn spot_url(&self) -> String {
        build_url(&self.base_url, &format!("prices/{}/spot", self.pair))
    }
}

#[async_trait::async_trait]
impl PriceFeed for SpotPriceClient {
    async fn fetch_price(&self) -> Result<f64, ClientError> {
        get_request(&self.client, &self.spot_url(), None, parse_spot_price).await
    }
}

/// LNbits wallet API (`/wallet`, `/payments`), authenticated with `X-Api-Key`.
#[derive(Clone)]
pub struct LnbitsClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for LnbitsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LnbitsClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl LnbitsClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: build_http_client(),
            base_url: base_url.into(),
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.environment.wallet_url(), config.api_key.clone())
    }
}

#[async_trait::async_trait]
impl WalletBackend for LnbitsClient {
    async fn fetch_balance(&self) -> Result<f64, ClientError> {
        let url = build_url(&self.base_url, "wallet");
        get_request(&self.client, &url, self.api_key.as_deref(), parse_balance).await
    }

    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, ClientError> {
        let url = build_url(&self.base_url, "payments");
        get_request(&self.client, &url, self.api_key.as_deref(), parse_transactions).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::error::ErrorKind;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serves a single canned HTTP response and hands back the raw request.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (request_sender, request_receiver) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            let _ = request_sender.send(String::from_utf8_lossy(&request).to_string());
        });

        (format!("http://{}", addr), request_receiver)
    }

    #[test]
    fn test_build_url_joins_slashes() {
        assert_eq!(build_url("http://h/api/v1/", "/wallet"), "http://h/api/v1/wallet");
        assert_eq!(build_url("http://h/api/v1", "wallet"), "http://h/api/v1/wallet");
    }

    #[tokio::test]
    async fn test_fetch_price_hits_pair_endpoint() {
        let (base, request) = serve_once("200 OK", r#"{"data":{"amount":"50001.5"}}"#).await;
        let client = SpotPriceClient::new(base, "BTC-USD");

        assert_eq!(client.fetch_price().await.unwrap(), 50001.5);
        let request = request.await.unwrap();
        assert!(request.starts_with("GET /prices/BTC-USD/spot "));
        assert!(!request.to_lowercase().contains("x-api-key"));
    }

    #[tokio::test]
    async fn test_fetch_balance_sends_api_key() {
        let (base, request) = serve_once("200 OK", r#"{"balance":250000}"#).await;
        let client = LnbitsClient::new(base, Some("secret".to_string()));

        assert_eq!(client.fetch_balance().await.unwrap(), 250.0);
        let request = request.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /wallet "));
        assert!(request.contains("x-api-key: secret"));
    }

    #[tokio::test]
    async fn test_fetch_transactions_returns_records() {
        let (base, request) =
            serve_once("200 OK", r#"[{"amount":1000,"memo":"a"},{"amount":-2000}]"#).await;
        let client = LnbitsClient::new(base, Some("k".to_string()));

        let txs = client.fetch_transactions().await.unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].memo(), Some("a"));
        assert!(request.await.unwrap().starts_with("GET /payments "));
    }

    #[tokio::test]
    // A missing key is sent as-is; the server's refusal becomes a transport error.
    async fn test_missing_key_surfaces_server_rejection() {
        let (base, request) =
            serve_once("401 Unauthorized", r#"{"detail":"Missing api key"}"#).await;
        let client = LnbitsClient::new(base, None);

        let err = client.fetch_balance().await.unwrap_err();
        assert!(matches!(err, ClientError::Http { status: 401, .. }));
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(!request.await.unwrap().to_lowercase().contains("x-api-key"));
    }

    #[tokio::test]
    async fn test_unexpected_body_is_parse_error() {
        let (base, _request) = serve_once("200 OK", r#"{"unexpected":true}"#).await;
        let client = SpotPriceClient::new(base, "BTC-USD");

        let err = client.fetch_price().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Bind then drop to get a port nobody listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = LnbitsClient::new(format!("http://{}", addr), None);
        let err = client.fetch_transactions().await.unwrap_err();
        assert!(matches!(err, ClientError::Reqwest(_)));
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    #[ignore] // This test requires network access to the public price feed.
    async fn test_live_spot_price() {
        let client = SpotPriceClient::from_config(&Config::new(Default::default(), None));
        match client.fetch_price().await {
            Ok(price) => println!("Spot price: {}", price),
            Err(e) => panic!("Failed to fetch price: {}", e),
        }
    }
}
