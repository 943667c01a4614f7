//! Menu service client

use async_trait::async_trait;
use shared::{MenuItem, MenuItemDraft};

use crate::http::HttpClient;
use crate::ClientResult;

#[async_trait]
pub trait MenuApi: Send + Sync {
    /// All items in service order
    async fn list_items(&self) -> ClientResult<Vec<MenuItem>>;

    async fn get_item(&self, id: i64) -> ClientResult<MenuItem>;

    /// Add a new item, or overwrite the one whose id the draft carries
    async fn save_item(&self, draft: &MenuItemDraft) -> ClientResult<MenuItem>;

    async fn update_stock(&self, id: i64, quantity: i32) -> ClientResult<MenuItem>;
}

/// HTTP client for `/menu`
#[derive(Debug, Clone)]
pub struct MenuService {
    http: HttpClient,
}

impl MenuService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl MenuApi for MenuService {
    async fn list_items(&self) -> ClientResult<Vec<MenuItem>> {
        self.http.get("menu").await
    }

    async fn get_item(&self, id: i64) -> ClientResult<MenuItem> {
        self.http.get(&format!("menu/{}", id)).await
    }

    async fn save_item(&self, draft: &MenuItemDraft) -> ClientResult<MenuItem> {
        self.http.post("menu", draft).await
    }

    async fn update_stock(&self, id: i64, quantity: i32) -> ClientResult<MenuItem> {
        self.http
            .post_empty(&format!("menu/updateStock/{}/{}", id, quantity))
            .await
    }
}
