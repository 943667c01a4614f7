//! Notification service client

use async_trait::async_trait;
use urlencoding::encode;

use crate::http::HttpClient;
use crate::ClientResult;

#[async_trait]
pub trait NotificationApi: Send + Sync {
    /// Send a message to a student. Returns the service's acknowledgement.
    async fn send(&self, roll_number: &str, message: &str) -> ClientResult<String>;
}

/// HTTP client for `/notify`
#[derive(Debug, Clone)]
pub struct NotificationService {
    http: HttpClient,
}

impl NotificationService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl NotificationApi for NotificationService {
    async fn send(&self, roll_number: &str, message: &str) -> ClientResult<String> {
        self.http
            .post_empty_text(&format!(
                "notify/send?rollNumber={}&message={}",
                encode(roll_number),
                encode(message)
            ))
            .await
    }
}
