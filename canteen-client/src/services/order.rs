//! Order service client

use async_trait::async_trait;
use shared::Order;
use urlencoding::encode;

use crate::http::HttpClient;
use crate::ClientResult;

#[async_trait]
pub trait OrderApi: Send + Sync {
    /// Every order placed by a student, in service order
    async fn history(&self, roll_number: &str) -> ClientResult<Vec<Order>>;

    /// Place an order directly. The service answers with a human-readable
    /// result line, also when the order fails for stock or funds.
    async fn place(&self, roll_number: &str, item_id: i64) -> ClientResult<String>;
}

/// HTTP client for `/order`
#[derive(Debug, Clone)]
pub struct OrderService {
    http: HttpClient,
}

impl OrderService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl OrderApi for OrderService {
    async fn history(&self, roll_number: &str) -> ClientResult<Vec<Order>> {
        self.http
            .get(&format!("order/history?rollNumber={}", encode(roll_number)))
            .await
    }

    async fn place(&self, roll_number: &str, item_id: i64) -> ClientResult<String> {
        self.http
            .get_text(&format!(
                "order/place?rollNumber={}&itemId={}",
                encode(roll_number),
                item_id
            ))
            .await
    }
}
