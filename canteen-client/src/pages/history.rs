//! Order history page

use std::collections::HashMap;

use shared::{FoodType, MenuItem, Order, OrderStatus};

use super::PageContext;
use crate::route::Route;
use crate::ui::format_price;
use crate::ui::html::{escape, loading_panel, StatePanel};
use crate::ui::{format_date, format_time};

pub const ORDERS_CONTAINER: &str = "ordersContainer";
pub const TOTAL_ORDERS: &str = "totalOrders";
pub const TOTAL_SPENT: &str = "totalSpent";
pub const CONFIRMED_ORDERS: &str = "confirmedOrders";

const UNKNOWN: &str = "Unknown";

/// What the page knows about the ordered item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetails {
    pub name: String,
    pub category: String,
    /// `Veg`, `Non-Veg`, or `Unknown` when the item is not on the menu
    pub food_type: String,
    pub image_url: Option<String>,
}

impl ItemDetails {
    fn from_menu(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.clone(),
            food_type: item.food_type.to_string(),
            image_url: item.image_url.clone(),
        }
    }

    fn fallback(order: &Order) -> Self {
        Self {
            name: order
                .item_name()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Item #{}", order.item_id)),
            category: UNKNOWN.to_string(),
            food_type: UNKNOWN.to_string(),
            image_url: None,
        }
    }

    fn is_veg(&self) -> bool {
        self.food_type == FoodType::Veg.label()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub order: Order,
    pub item: ItemDetails,
}

/// Attach item details to each order, newest first
pub fn history_entries(
    mut orders: Vec<Order>,
    lookup: &HashMap<i64, ItemDetails>,
) -> Vec<HistoryEntry> {
    orders.sort_by(|a, b| b.order_time.cmp(&a.order_time));
    orders
        .into_iter()
        .map(|order| {
            let item = lookup
                .get(&order.item_id)
                .cloned()
                .unwrap_or_else(|| ItemDetails::fallback(&order));
            HistoryEntry { order, item }
        })
        .collect()
}

pub struct HistoryPage {
    ctx: PageContext,
    menu_lookup: HashMap<i64, ItemDetails>,
    entries: Vec<HistoryEntry>,
}

impl HistoryPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            menu_lookup: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Page entry: guard, menu lookup, orders
    pub async fn open(&mut self) -> bool {
        if self.ctx.auth().require_auth(self.ctx.navigator.as_ref()).is_none() {
            return false;
        }
        self.load_menu_items().await;
        self.load_orders().await;
        true
    }

    /// Names for the order cards. A failure leaves the lookup empty.
    pub async fn load_menu_items(&mut self) {
        match self.ctx.services.menu.list_items().await {
            Ok(items) => {
                self.menu_lookup = items
                    .iter()
                    .map(|item| (item.id, ItemDetails::from_menu(item)))
                    .collect();
                tracing::debug!(count = self.menu_lookup.len(), "Menu items loaded");
            }
            Err(e) => tracing::error!(error = %e, "Failed to load menu items"),
        }
    }

    pub async fn load_orders(&mut self) -> bool {
        let roll_number = self.ctx.auth().roll_number().unwrap_or_default();
        self.ctx
            .view
            .set_html(ORDERS_CONTAINER, loading_panel("Loading your orders..."));

        match self.ctx.services.orders.history(&roll_number).await {
            Ok(orders) => {
                self.entries = history_entries(orders, &self.menu_lookup);
                self.render_orders();
                self.update_statistics();
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load orders");
                self.ctx.view.set_html(
                    ORDERS_CONTAINER,
                    StatePanel::new(
                        "⚠️",
                        "Failed to Load Orders",
                        "Please check if all services are running.",
                    )
                    .with_retry("loadOrders")
                    .render(),
                );
                false
            }
        }
    }

    pub fn render_orders(&self) {
        if self.entries.is_empty() {
            self.ctx.view.set_html(
                ORDERS_CONTAINER,
                StatePanel::new(
                    "🛒",
                    "No Orders Yet",
                    "Looks like you haven't ordered anything yet. Time to treat yourself to some delicious food!",
                )
                .with_link(Route::Home.path(), "🍔 Browse Menu")
                .render(),
            );
            return;
        }

        let cards: String = self.entries.iter().map(order_card).collect();
        self.ctx.view.set_html(
            ORDERS_CONTAINER,
            format!(r#"<div class="order-timeline">{cards}</div>"#),
        );
    }

    fn update_statistics(&self) {
        let total_spent: f64 = self.entries.iter().map(|e| e.order.amount).sum();
        let confirmed = self
            .entries
            .iter()
            .filter(|e| e.order.status == OrderStatus::Confirmed)
            .count();

        let view = &self.ctx.view;
        view.set_text(TOTAL_ORDERS, self.entries.len().to_string());
        view.set_text(TOTAL_SPENT, format_price(total_spent));
        view.set_text(CONFIRMED_ORDERS, confirmed.to_string());
    }

    /// Order the same item again, after confirmation
    pub fn reorder_item(&self, item_id: i64) -> bool {
        if !self.ctx.view.confirm("Do you want to order this item again?") {
            return false;
        }
        let Some(roll_number) = self.ctx.auth().roll_number() else {
            return false;
        };
        self.ctx.navigator.navigate(Route::PlaceOrder {
            roll_number,
            item_id,
        });
        true
    }

    pub fn go_to_home(&self) {
        self.ctx.navigator.navigate(Route::Home);
    }

    pub fn go_to_wallet(&self) {
        self.ctx.navigator.navigate(Route::Wallet);
    }

    pub fn logout(&self) -> bool {
        if !self.ctx.view.confirm("Are you sure you want to logout?") {
            return false;
        }
        if let Err(e) = self.ctx.auth().logout(self.ctx.navigator.as_ref()) {
            tracing::error!(error = %e, "Failed to clear session");
            return false;
        }
        true
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

fn order_card(entry: &HistoryEntry) -> String {
    let order = &entry.order;
    let item = &entry.item;
    let name = escape(&item.name);
    let category = escape(&item.category);
    let status = escape(order.status.as_str());
    let price = format_price(order.amount);

    let type_badge = if item.is_veg() {
        r#"<span class="badge badge-veg">🟢 Veg</span>"#
    } else {
        r#"<span class="badge badge-non-veg">🔴 Non-Veg</span>"#
    };

    format!(
        r#"<div class="order-card"><div class="order-header"><div class="order-info"><h3 class="order-title">{name}</h3><div class="order-id">Order #{id}</div><div class="order-badge-group">{type_badge}<span class="badge badge-category">{category}</span></div></div><div class="order-price-section"><div class="order-price">{price}</div><span class="order-status status-{status_class}">{status}</span></div></div><div class="order-details"><div class="detail-row"><span class="detail-label">Item Name</span><span class="detail-value">{name}</span></div><div class="detail-row"><span class="detail-label">Category</span><span class="detail-value">{category}</span></div><div class="detail-row"><span class="detail-label">Type</span><span class="detail-value">{food_type}</span></div><div class="detail-row"><span class="detail-label">Price</span><span class="detail-value">{price}</span></div><div class="detail-row"><span class="detail-label">Status</span><span class="detail-value">{status}</span></div></div><div class="order-footer"><div class="order-time"><div class="time-item">📅 {date}</div><div class="time-item">🕐 {time}</div></div><div class="order-actions"><button class="btn btn-sm btn-outline" data-action="reorderItem" data-id="{item_id}">🔄 Reorder</button></div></div></div>"#,
        id = order.id,
        status_class = status.to_lowercase(),
        food_type = escape(&item.food_type),
        date = format_date(&order.order_time),
        time = format_time(&order.order_time),
        item_id = order.item_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(id: i64, item_id: i64, name: Option<&str>, day: u32) -> Order {
        Order {
            id,
            roll_number: Some("CS101".into()),
            item_id,
            item_name: name.map(Into::into),
            amount: 50.0,
            order_time: NaiveDate::from_ymd_opt(2026, 10, day)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            status: OrderStatus::Confirmed,
        }
    }

    #[test]
    fn test_entries_fall_back_to_unknown() {
        let mut lookup = HashMap::new();
        lookup.insert(
            1,
            ItemDetails {
                name: "Veg Burger".into(),
                category: "Snacks".into(),
                food_type: "Veg".into(),
                image_url: None,
            },
        );

        let entries = history_entries(
            vec![
                order(10, 1, None, 1),
                order(11, 7, Some("Paneer Roll"), 3),
                order(12, 8, None, 2),
            ],
            &lookup,
        );

        let ids: Vec<i64> = entries.iter().map(|e| e.order.id).collect();
        assert_eq!(ids, vec![11, 12, 10]);
        assert_eq!(entries[0].item.name, "Paneer Roll");
        assert_eq!(entries[0].item.category, "Unknown");
        assert_eq!(entries[1].item.name, "Item #8");
        assert_eq!(entries[2].item.food_type, "Veg");
    }

    #[test]
    fn test_unknown_type_renders_non_veg_badge() {
        let entry = HistoryEntry {
            item: ItemDetails::fallback(&order(1, 9, None, 1)),
            order: order(1, 9, None, 1),
        };
        let html = order_card(&entry);
        assert!(html.contains("badge-non-veg"));
        assert!(html.contains("status-confirmed"));
        assert!(html.contains("₹50.00"));
    }
}
