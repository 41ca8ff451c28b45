//! Outbound notification of listed questions.
//!
//! Every question returned by a listing is forwarded to an external endpoint
//! as `GET <endpoint>?docUrl=<description url>`. Calls are fire-and-forget:
//! [`QuestionNotifier::notify`] returns immediately and outcomes are only logged.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use url::Url;

use crate::config::NotifierConfig;
use crate::domain::Question;
use crate::error::{AppError, Result};

/// Receives the questions produced by a listing.
///
/// Implementations must not block on I/O; the listing response is sent as
/// soon as `notify` returns.
pub trait QuestionNotifier: Send + Sync {
    /// Dispatch one notification per question, in order.
    fn notify(&self, questions: &[Question]);
}

/// Notifier that does nothing. Used when notifications are disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl QuestionNotifier for NoopNotifier {
    fn notify(&self, _questions: &[Question]) {}
}

/// Notifier that issues one HTTP GET per question on a spawned task.
#[derive(Debug, Clone)]
pub struct HttpNotifier {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpNotifier {
    /// Create a notifier for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL or the HTTP client
    /// cannot be built.
    pub fn new(config: &NotifierConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            AppError::Internal(format!("invalid notifier endpoint {}: {e}", config.endpoint))
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, endpoint })
    }

    /// Build the request URL for one question.
    #[must_use]
    pub fn request_url(&self, description_url: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("docUrl", description_url);
        url
    }
}

impl QuestionNotifier for HttpNotifier {
    fn notify(&self, questions: &[Question]) {
        for question in questions {
            let client = self.client.clone();
            let url = self.request_url(&question.description_url);
            let question_id = question.id;

            tokio::spawn(async move {
                match client.get(url).send().await {
                    Ok(response) => {
                        let status = response.status();
                        match response.text().await {
                            Ok(body) => {
                                info!(%question_id, %status, %body, "Notifier endpoint responded");
                            }
                            Err(e) => {
                                warn!(%question_id, %status, error = %e, "Failed to read notifier response");
                            }
                        }
                    }
                    Err(e) => {
                        warn!(%question_id, error = %e, "Notifier request failed");
                    }
                }
            });
        }
    }
}

/// Create the notifier selected by configuration.
///
/// # Errors
///
/// Returns an error if the HTTP notifier cannot be constructed.
pub fn create_notifier(config: &NotifierConfig) -> Result<Arc<dyn QuestionNotifier>> {
    if config.enabled {
        Ok(Arc::new(HttpNotifier::new(config)?))
    } else {
        Ok(Arc::new(NoopNotifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QuestionId;
    use axum::{Router, extract::Query, routing::get};
    use std::collections::HashMap;
    use tokio::net::TcpListener;
    use tokio::sync::mpsc;

    fn question(id: i32, description_url: &str) -> Question {
        Question {
            id: QuestionId(id),
            description_url: description_url.to_string(),
            coding_round: "1".to_string(),
            where_asked: None,
        }
    }

    #[test]
    fn test_request_url_encodes_doc_url() {
        let notifier = HttpNotifier::new(&NotifierConfig {
            endpoint: "https://script.example.com/exec".to_string(),
            ..Default::default()
        })
        .unwrap();

        let url = notifier.request_url("https://docs.example.com/d?id=1&x=a b");
        assert_eq!(url.host_str(), Some("script.example.com"));
        assert_eq!(url.path(), "/exec");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![(
                "docUrl".to_string(),
                "https://docs.example.com/d?id=1&x=a b".to_string()
            )]
        );
    }

    #[test]
    fn test_request_url_keeps_existing_query() {
        let notifier = HttpNotifier::new(&NotifierConfig {
            endpoint: "https://script.example.com/exec?v=2".to_string(),
            ..Default::default()
        })
        .unwrap();

        let url = notifier.request_url("http://x");
        assert_eq!(url.query(), Some("v=2&docUrl=http%3A%2F%2Fx"));
    }

    #[test]
    fn test_create_notifier_disabled() {
        let config = NotifierConfig {
            enabled: false,
            endpoint: "::invalid::".to_string(),
            ..Default::default()
        };
        assert!(create_notifier(&config).is_ok());
    }

    #[tokio::test]
    async fn test_http_notifier_calls_endpoint_per_question() {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        let app = Router::new().route(
            "/exec",
            get(move |Query(params): Query<HashMap<String, String>>| {
                let tx = tx.clone();
                async move {
                    let _ = tx.send(params.get("docUrl").cloned().unwrap_or_default());
                    "ok"
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let notifier = HttpNotifier::new(&NotifierConfig {
            endpoint: format!("http://{addr}/exec"),
            ..Default::default()
        })
        .unwrap();

        notifier.notify(&[question(1, "http://a"), question(2, "http://b")]);

        let mut received = Vec::new();
        for _ in 0..2 {
            let doc_url = tokio::time::timeout(Duration::from_secs(5), rx.recv())
                .await
                .unwrap()
                .unwrap();
            received.push(doc_url);
        }
        received.sort();
        assert_eq!(received, vec!["http://a".to_string(), "http://b".to_string()]);
    }

    #[tokio::test]
    async fn test_http_notifier_does_not_wait_for_response() {
        let (arrived_tx, mut arrived_rx) = mpsc::unbounded_channel::<()>();
        let release = Arc::new(tokio::sync::Notify::new());
        let held = release.clone();
        let app = Router::new().route(
            "/exec",
            get(move || {
                let arrived_tx = arrived_tx.clone();
                let held = held.clone();
                async move {
                    let _ = arrived_tx.send(());
                    held.notified().await;
                    "ok"
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let notifier = HttpNotifier::new(&NotifierConfig {
            endpoint: format!("http://{addr}/exec"),
            ..Default::default()
        })
        .unwrap();

        // The endpoint is held open until released, so a blocking notify would hang here
        notifier.notify(&[question(1, "http://a")]);

        tokio::time::timeout(Duration::from_secs(5), arrived_rx.recv())
            .await
            .unwrap()
            .unwrap();
        release.notify_one();
    }
}
