use async_trait::async_trait;
use hermes_core::Symbol;
use hermes_ports::{ExchangeTransport, OrderParams, RawOrderResponse, TransportResult};
use log::{debug, info, warn};
use reqwest::{Client, header::CONTENT_TYPE};
use rust_decimal::Decimal;
use serde::{Deserialize, de::DeserializeOwned};
use url::form_urlencoded;

use crate::config::{ClientConfig, ConfigError};
use crate::error::RestError;
use crate::signer::Signer;

const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Exchange code for an unknown symbol
const INVALID_SYMBOL: i64 = -1121;

/// One asset entry of the futures account balance
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalance {
    pub asset: String,
    pub balance: Decimal,
    #[serde(default)]
    pub available_balance: Option<Decimal>,
}

#[derive(Deserialize)]
struct TickerPrice {
    price: Decimal,
}

#[derive(Deserialize)]
struct ApiError {
    code: i64,
    msg: String,
}

/// REST client for the Binance USD-M futures API
///
/// Signed endpoints carry `recvWindow`, `timestamp` and a trailing
/// `signature`; the API key travels in the `X-MBX-APIKEY` header.
#[derive(Clone)]
pub struct BinanceFuturesClient {
    client: Client,
    base_url: String,
    api_key: String,
    signer: Signer,
    recv_window_ms: u64,
}

impl BinanceFuturesClient {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        let signer = Signer::new(&config.secret_key).map_err(|e| ConfigError::InvalidValue {
            var: "SECRET_KEY",
            value: "<redacted>".to_string(),
            reason: e.to_string(),
        })?;

        info!("Binance futures client initialized for {}", config.base_url);

        Ok(Self {
            client,
            base_url: config.base_url,
            api_key: config.api_key,
            signer,
            recv_window_ms: config.recv_window_ms,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Place a new order (signed)
    pub async fn place_order(&self, params: &OrderParams) -> Result<RawOrderResponse, RestError> {
        self.signed_post("/fapi/v1/order", params.pairs()).await
    }

    /// Latest price for a symbol (public)
    pub async fn ticker_price(&self, symbol: &str) -> Result<Decimal, RestError> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("symbol", symbol)
            .finish();
        let ticker: TickerPrice = self.get(&format!("/fapi/v1/ticker/price?{}", query)).await?;
        Ok(ticker.price)
    }

    /// Every asset balance in the futures account (signed)
    pub async fn balances(&self) -> Result<Vec<AssetBalance>, RestError> {
        self.signed_get("/fapi/v2/balance", Vec::<(&str, String)>::new()).await
    }

    fn signed_query(&self, params: Vec<(&'static str, String)>) -> String {
        let timestamp = chrono::Utc::now().timestamp_millis();
        self.signer.signed_query(params, self.recv_window_ms, timestamp)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RestError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);
        let resp = self.client.get(&url).send().await?;

        self.handle_response(resp).await
    }

    async fn signed_get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Vec<(&'static str, String)>,
    ) -> Result<T, RestError> {
        let url = format!("{}{}?{}", self.base_url, path, self.signed_query(params));
        debug!("GET {}{} (signed)", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        self.handle_response(resp).await
    }

    async fn signed_post<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Vec<(&'static str, String)>,
    ) -> Result<T, RestError> {
        let url = format!("{}{}", self.base_url, path);
        let body = self.signed_query(params);
        debug!("POST {} (signed)", url);
        let resp = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, RestError> {
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            if let Ok(err) = serde_json::from_str::<ApiError>(&text) {
                return Err(RestError::Api {
                    status: status.as_u16(),
                    code: err.code,
                    msg: err.msg,
                });
            }
            return Err(RestError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| RestError::Parse(e.to_string()))
    }
}

#[async_trait]
impl ExchangeTransport for BinanceFuturesClient {
    async fn create_order(&self, params: &OrderParams) -> TransportResult<RawOrderResponse> {
        Ok(self.place_order(params).await?)
    }

    async fn symbol_price(&self, symbol: &Symbol) -> TransportResult<Option<Decimal>> {
        match self.ticker_price(symbol.as_str()).await {
            Ok(price) => {
                info!("Current price for {}: {}", symbol, price);
                Ok(Some(price))
            }
            Err(RestError::Api {
                code: INVALID_SYMBOL,
                msg,
                ..
            }) => {
                warn!("No price for {}: {}", symbol, msg);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn account_balance(&self, asset: &str) -> TransportResult<Option<Decimal>> {
        let balances = self.balances().await?;
        let balance = balances
            .into_iter()
            .find(|b| b.asset == asset)
            .map(|b| b.balance);

        match balance {
            Some(balance) => info!("Account Balance ({}): {}", asset, balance),
            None => info!("{} balance not found or account is empty", asset),
        }
        Ok(balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decode_balances() {
        let body = r#"[
            {"accountAlias": "SgsR", "asset": "USDT", "balance": "15000.00000000",
             "crossWalletBalance": "15000.00000000", "availableBalance": "14950.5"},
            {"accountAlias": "SgsR", "asset": "BNB", "balance": "0.00000000"}
        ]"#;
        let balances: Vec<AssetBalance> = serde_json::from_str(body).unwrap();
        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].balance, dec!(15000));
        assert_eq!(balances[0].available_balance, Some(dec!(14950.5)));
        assert_eq!(balances[1].available_balance, None);
    }

    #[test]
    fn test_base_url() {
        let config = ClientConfig::new("key", "secret").with_base_url("http://localhost:8080");
        let client = BinanceFuturesClient::new(config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
