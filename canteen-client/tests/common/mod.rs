//! In-memory backend used by the page scenarios

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use canteen_client::pages::PageContext;
use canteen_client::services::{MenuApi, NotificationApi, OrderApi, Services, WalletApi};
use canteen_client::{
    ClientError, ClientResult, FoodType, MemoryStorage, MemoryView, MenuItem, MenuItemDraft,
    Order, OrderStatus, RecordingNavigator, Wallet,
};
use chrono::NaiveDate;
use shared::client::{ResetPasswordResponse, VerifyResponse};

#[derive(Default)]
pub struct FakeBackend {
    pub menu: Mutex<Vec<MenuItem>>,
    pub wallets: Mutex<HashMap<String, (Wallet, String)>>,
    pub orders: Mutex<Vec<Order>>,
    pub notifications: Mutex<Vec<(String, String)>>,
    pub saved_drafts: Mutex<Vec<MenuItemDraft>>,
    pub calls: AtomicUsize,
    pub menu_down: AtomicBool,
    pub notify_down: AtomicBool,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Backend seeded with the canteen's usual menu and one student
    pub fn seeded() -> Arc<Self> {
        let backend = Self::new();
        *backend.menu.lock().unwrap() = vec![
            item(1, "Veg Burger", "Snacks", 50.0, 50, FoodType::Veg),
            item(2, "Chicken Roll", "Snacks", 80.0, 3, FoodType::NonVeg),
            item(3, "Masala Chai", "Drinks", 15.0, 100, FoodType::Veg),
            item(4, "Cold Coffee", "Drinks", 60.0, 100, FoodType::Veg),
            item(5, "Chicken Momos", "Snacks", 100.0, 0, FoodType::NonVeg),
        ];
        backend.add_student("CS101", "Rahul Sharma", "secret", 1000.0);
        backend
    }

    pub fn add_student(&self, roll: &str, name: &str, password: &str, balance: f64) {
        self.wallets.lock().unwrap().insert(
            roll.to_string(),
            (
                Wallet {
                    id: None,
                    roll_number: roll.to_string(),
                    student_name: name.to_string(),
                    balance,
                },
                password.to_string(),
            ),
        );
    }

    pub fn add_order(&self, id: i64, roll: &str, item_id: i64, amount: f64, day: u32, status: &str) {
        self.orders.lock().unwrap().push(Order {
            id,
            roll_number: Some(roll.to_string()),
            item_id,
            item_name: None,
            amount,
            order_time: NaiveDate::from_ymd_opt(2026, 10, day)
                .unwrap()
                .and_hms_opt(12, 30, 0)
                .unwrap(),
            status: OrderStatus::from(status.to_string()),
        });
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    pub fn services(self: &Arc<Self>) -> Services {
        Services {
            menu: self.clone(),
            wallet: self.clone(),
            orders: self.clone(),
            notifications: self.clone(),
        }
    }
}

pub fn item(
    id: i64,
    name: &str,
    category: &str,
    price: f64,
    quantity: i32,
    food_type: FoodType,
) -> MenuItem {
    MenuItem {
        id,
        name: name.into(),
        category: category.into(),
        price,
        quantity,
        image_url: None,
        food_type,
        available: quantity > 0,
    }
}

#[async_trait]
impl MenuApi for FakeBackend {
    async fn list_items(&self) -> ClientResult<Vec<MenuItem>> {
        self.hit();
        if self.menu_down.load(Ordering::SeqCst) {
            return Err(ClientError::Internal("menu service down".into()));
        }
        Ok(self.menu.lock().unwrap().clone())
    }

    async fn get_item(&self, id: i64) -> ClientResult<MenuItem> {
        self.hit();
        self.menu
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("item {id}")))
    }

    async fn save_item(&self, draft: &MenuItemDraft) -> ClientResult<MenuItem> {
        self.hit();
        self.saved_drafts.lock().unwrap().push(draft.clone());
        let mut menu = self.menu.lock().unwrap();
        let id = draft
            .id
            .unwrap_or_else(|| menu.iter().map(|i| i.id).max().unwrap_or(0) + 1);
        let saved = MenuItem {
            id,
            name: draft.name.clone(),
            category: draft.category.clone(),
            price: draft.price,
            quantity: draft.quantity,
            image_url: Some(draft.image_url.clone()),
            food_type: draft.food_type,
            available: draft.is_available,
        };
        match menu.iter_mut().find(|i| i.id == id) {
            Some(existing) => *existing = saved.clone(),
            None => menu.push(saved.clone()),
        }
        Ok(saved)
    }

    async fn update_stock(&self, id: i64, quantity: i32) -> ClientResult<MenuItem> {
        self.hit();
        let mut menu = self.menu.lock().unwrap();
        let item = menu
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("item {id}")))?;
        item.quantity = quantity;
        Ok(item.clone())
    }
}

#[async_trait]
impl WalletApi for FakeBackend {
    async fn get_wallet(&self, roll_number: &str) -> ClientResult<Wallet> {
        self.hit();
        self.wallets
            .lock()
            .unwrap()
            .get(roll_number)
            .map(|(w, _)| w.clone())
            .ok_or_else(|| ClientError::NotFound("Student not found".into()))
    }

    async fn register(
        &self,
        student_name: &str,
        roll_number: &str,
        password: &str,
    ) -> ClientResult<Wallet> {
        self.hit();
        if self.wallets.lock().unwrap().contains_key(roll_number) {
            return Err(ClientError::Internal(
                "Roll number already exists".into(),
            ));
        }
        self.add_student(roll_number, student_name, password, 500.0);
        self.get_wallet(roll_number).await
    }

    async fn login(&self, roll_number: &str, password: &str) -> ClientResult<Wallet> {
        self.hit();
        match self.wallets.lock().unwrap().get(roll_number) {
            Some((wallet, stored)) if stored == password => Ok(wallet.clone()),
            _ => Err(ClientError::Internal("Invalid credentials".into())),
        }
    }

    async fn top_up(&self, roll_number: &str, amount: f64) -> ClientResult<Wallet> {
        self.hit();
        let mut wallets = self.wallets.lock().unwrap();
        let (wallet, _) = wallets
            .get_mut(roll_number)
            .ok_or_else(|| ClientError::Internal("Student not found".into()))?;
        wallet.balance += amount;
        Ok(wallet.clone())
    }

    async fn verify_student(
        &self,
        roll_number: &str,
        student_name: &str,
    ) -> ClientResult<VerifyResponse> {
        self.hit();
        let response = match self.wallets.lock().unwrap().get(roll_number) {
            Some((wallet, _)) if wallet.student_name.eq_ignore_ascii_case(student_name) => {
                VerifyResponse {
                    verified: true,
                    message: "Student verified successfully".into(),
                }
            }
            Some(_) => VerifyResponse {
                verified: false,
                message: "Name does not match our records".into(),
            },
            None => VerifyResponse {
                verified: false,
                message: "Roll number not found".into(),
            },
        };
        Ok(response)
    }

    async fn reset_password(
        &self,
        roll_number: &str,
        new_password: &str,
    ) -> ClientResult<ResetPasswordResponse> {
        self.hit();
        let mut wallets = self.wallets.lock().unwrap();
        Ok(match wallets.get_mut(roll_number) {
            Some((_, password)) => {
                *password = new_password.to_string();
                ResetPasswordResponse {
                    success: true,
                    message: "Password reset successful".into(),
                }
            }
            None => ResetPasswordResponse {
                success: false,
                message: "Failed to reset password".into(),
            },
        })
    }
}

#[async_trait]
impl OrderApi for FakeBackend {
    async fn history(&self, roll_number: &str) -> ClientResult<Vec<Order>> {
        self.hit();
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.roll_number.as_deref() == Some(roll_number))
            .cloned()
            .collect())
    }

    async fn place(&self, roll_number: &str, item_id: i64) -> ClientResult<String> {
        self.hit();
        Ok(format!("Order placed for {roll_number}: item {item_id}"))
    }
}

#[async_trait]
impl NotificationApi for FakeBackend {
    async fn send(&self, roll_number: &str, message: &str) -> ClientResult<String> {
        self.hit();
        if self.notify_down.load(Ordering::SeqCst) {
            return Err(ClientError::Internal("notification service down".into()));
        }
        self.notifications
            .lock()
            .unwrap()
            .push((roll_number.to_string(), message.to_string()));
        Ok("Notification sent".into())
    }
}

/// A page environment plus handles to inspect it
pub struct Harness {
    pub backend: Arc<FakeBackend>,
    pub storage: Arc<MemoryStorage>,
    pub view: Arc<MemoryView>,
    pub navigator: Arc<RecordingNavigator>,
}

impl Harness {
    pub fn new(backend: Arc<FakeBackend>) -> Self {
        Self {
            backend,
            storage: Arc::new(MemoryStorage::new()),
            view: Arc::new(MemoryView::new()),
            navigator: Arc::new(RecordingNavigator::new()),
        }
    }

    pub fn seeded() -> Self {
        Self::new(FakeBackend::seeded())
    }

    pub fn ctx(&self) -> PageContext {
        PageContext::new(
            self.backend.services(),
            self.storage.clone(),
            self.view.clone(),
            self.navigator.clone(),
        )
    }

    /// Same environment with a student already logged in
    pub fn logged_in(self, roll: &str) -> Self {
        self.ctx().auth().login(roll).unwrap();
        self
    }

    pub fn content(&self, target: &str) -> String {
        self.view.content(target).unwrap_or_default()
    }
}
