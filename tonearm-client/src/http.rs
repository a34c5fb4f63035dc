//! HTTP client for the engine's control endpoints
//!
//! One POST per command. A non-2xx response surfaces as an engine rejection
//! carrying the status and the response body; connection and timeout
//! failures surface as transport errors. No retries, no backoff — the caller
//! decides what a failed command means.

use crate::engine::PlaybackEngine;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tonearm_common::config::ProxyConfig;
use tonearm_common::types::{EqSettings, Song};
use tonearm_common::{Error, Result};
use tracing::debug;

/// [`PlaybackEngine`] implementation speaking JSON-over-HTTP
pub struct HttpEngine {
    http_client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct LoopingRequest {
    looping: bool,
}

#[derive(Debug, Serialize)]
struct MutedRequest {
    muted: bool,
}

#[derive(Debug, Serialize)]
struct VolumeRequest {
    volume: f64,
}

#[derive(Debug, Serialize)]
struct SkipToRequest {
    percentage: f64,
}

#[derive(Debug, Serialize)]
struct SeekRequest {
    position: f64,
}

impl HttpEngine {
    pub fn new(config: &ProxyConfig) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            base_url: config.engine_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post_empty(&self, path: &str) -> Result<()> {
        let url = join_url(&self.base_url, path);
        debug!(%url, "Dispatching engine command");
        let response = self.http_client.post(&url).send().await?;
        check_response(response).await
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let url = join_url(&self.base_url, path);
        debug!(%url, "Dispatching engine command");
        let response = self.http_client.post(&url).json(body).send().await?;
        check_response(response).await
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

async fn check_response(response: reqwest::Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let message = response.text().await.unwrap_or_default();
    Err(Error::Rejected {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl PlaybackEngine for HttpEngine {
    async fn load_song(&self, song: &Song) -> Result<()> {
        self.post_json("/playback/load", song).await
    }

    async fn play(&self) -> Result<()> {
        self.post_empty("/playback/play").await
    }

    async fn pause(&self) -> Result<()> {
        self.post_empty("/playback/pause").await
    }

    async fn play_pause(&self) -> Result<()> {
        self.post_empty("/playback/toggle").await
    }

    async fn rewind(&self) -> Result<()> {
        self.post_empty("/playback/rewind").await
    }

    async fn set_looping(&self, looping: bool) -> Result<()> {
        self.post_json("/playback/looping", &LoopingRequest { looping })
            .await
    }

    async fn set_muted(&self, muted: bool) -> Result<()> {
        self.post_json("/audio/muted", &MutedRequest { muted }).await
    }

    async fn set_volume(&self, volume: f64) -> Result<()> {
        self.post_json("/audio/volume", &VolumeRequest { volume })
            .await
    }

    async fn skip(&self) -> Result<()> {
        self.post_empty("/playback/next").await
    }

    async fn skip_to(&self, percentage: f64) -> Result<()> {
        self.post_json("/playback/skip-to", &SkipToRequest { percentage })
            .await
    }

    async fn set_eq_settings(&self, settings: &EqSettings) -> Result<()> {
        self.post_json("/audio/eq", settings).await
    }

    async fn seek(&self, position: f64) -> Result<()> {
        self.post_json("/playback/seek", &SeekRequest { position })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:5720", "/playback/play"),
            "http://localhost:5720/playback/play"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ProxyConfig {
            engine_url: "http://localhost:5720/".to_string(),
            ..ProxyConfig::default()
        };
        let engine = HttpEngine::new(&config);
        assert_eq!(engine.base_url, "http://localhost:5720");
    }

    #[test]
    fn test_request_body_shapes() {
        let volume = serde_json::to_string(&VolumeRequest { volume: 80.0 }).unwrap();
        assert_eq!(volume, r#"{"volume":80.0}"#);

        let seek = serde_json::to_string(&SeekRequest { position: 12.5 }).unwrap();
        assert_eq!(seek, r#"{"position":12.5}"#);
    }
}
