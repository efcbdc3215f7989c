use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::constants::{COLORS_ENDPOINT, HISTORY_ENDPOINT, RESET_ENDPOINT, SPIN_ENDPOINT};
use shared::controller::RouletteApi;
use shared::error::ApiError;
use shared::shared_roulette_game::{
    ColorOdds, ColorsResponse, HistoryResponse, HistorySnapshot, ResetResponse, SpinReply,
    SpinResponse,
};

/// Roulette backend over `fetch`.
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// The backend answers errors with a JSON envelope too, so the body is read
// before looking at the status.
async fn read_envelope<T: DeserializeOwned>(
    sent: Result<Response, gloo_net::Error>,
) -> Result<T, ApiError> {
    let response = sent.map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    match response.json::<T>().await {
        Ok(body) => Ok(body),
        Err(_) if !response.ok() => Err(ApiError::Status(response.status())),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

impl RouletteApi for HttpApi {
    async fn spin(&self) -> Result<SpinReply, ApiError> {
        let sent = Request::post(&self.url(SPIN_ENDPOINT)).send().await;
        read_envelope::<SpinResponse>(sent).await?.into_reply()
    }

    async fn history(&self) -> Result<HistorySnapshot, ApiError> {
        let sent = Request::get(&self.url(HISTORY_ENDPOINT)).send().await;
        read_envelope::<HistoryResponse>(sent).await?.into_snapshot()
    }

    async fn reset(&self) -> Result<(), ApiError> {
        let sent = Request::post(&self.url(RESET_ENDPOINT)).send().await;
        read_envelope::<ResetResponse>(sent).await?.into_result()
    }

    async fn colors(&self) -> Result<Vec<ColorOdds>, ApiError> {
        let sent = Request::get(&self.url(COLORS_ENDPOINT)).send().await;
        read_envelope::<ColorsResponse>(sent).await?.into_odds()
    }
}
