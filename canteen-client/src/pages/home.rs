//! Home page: menu browsing

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shared::MenuItem;
use urlencoding::encode;

use super::PageContext;
use crate::catalog::{self, CategoryFilter, SortKey};
use crate::debounce::Debouncer;
use crate::route::Route;
use crate::ui::html::{escape, skeleton_cards, StatePanel};
use crate::ui::timing::{SEARCH_DEBOUNCE, SKELETON_CARDS};
use crate::ui::{format_price, LoadingButton};
use crate::view::View;

pub const FOOD_GRID: &str = "foodGrid";
pub const USER_ROLL: &str = "userRoll";
pub const USER_NAME: &str = "userName";

/// Image shown when an item has none or its image fails to load
pub fn placeholder_image(name: &str) -> String {
    format!(
        "https://placehold.co/600x400/FC8019/ffffff?text={}",
        encode(name)
    )
}

#[derive(Debug, Default)]
struct HomeState {
    menu_items: Vec<MenuItem>,
    filtered_items: Vec<MenuItem>,
    category: CategoryFilter,
    sort: SortKey,
}

fn lock(state: &Mutex<HomeState>) -> MutexGuard<'_, HomeState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct HomePage {
    ctx: PageContext,
    state: Arc<Mutex<HomeState>>,
    search: Debouncer<String>,
}

impl HomePage {
    /// Must be called inside a tokio runtime (search runs on a background
    /// task).
    pub fn new(ctx: PageContext) -> Self {
        let state = Arc::new(Mutex::new(HomeState::default()));

        let search_state = state.clone();
        let view = ctx.view.clone();
        let search = Debouncer::new(SEARCH_DEBOUNCE, move |query: String| {
            run_search(&search_state, view.as_ref(), &query);
        });

        Self { ctx, state, search }
    }

    /// Page entry: guard, user header, menu
    pub async fn open(&self) -> bool {
        if self.ctx.auth().require_auth(self.ctx.navigator.as_ref()).is_none() {
            return false;
        }
        self.load_user_info().await;
        self.load_menu().await;
        true
    }

    pub async fn load_user_info(&self) {
        let Some(roll_number) = self.ctx.auth().roll_number() else {
            return;
        };
        self.ctx.view.set_text(USER_ROLL, roll_number.clone());

        match self.ctx.services.wallet.get_wallet(&roll_number).await {
            Ok(wallet) => self.ctx.view.set_text(USER_NAME, wallet.student_name),
            Err(e) => tracing::error!(error = %e, "Failed to load user info"),
        }
    }

    /// Fetch the menu. A successful load shows the full list in service
    /// order, whatever filter was selected before.
    pub async fn load_menu(&self) -> bool {
        self.ctx.view.set_html(
            FOOD_GRID,
            skeleton_cards(SKELETON_CARDS, "food-card", "card-body", 3),
        );

        match self.ctx.services.menu.list_items().await {
            Ok(items) => {
                {
                    let mut state = lock(&self.state);
                    state.filtered_items = items.clone();
                    state.menu_items = items;
                }
                self.render_menu();
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load menu");
                self.ctx.view.set_html(
                    FOOD_GRID,
                    StatePanel::new(
                        "❌",
                        "Failed to Load Menu",
                        "Please check if Menu Service is running.",
                    )
                    .with_retry("loadMenu")
                    .render(),
                );
                false
            }
        }
    }

    pub fn render_menu(&self) {
        render_grid(&lock(&self.state), self.ctx.view.as_ref());
    }

    pub fn filter_by_category(&self, category: impl Into<CategoryFilter>) {
        lock(&self.state).category = category.into();
        self.apply_filters();
    }

    pub fn change_sort(&self, sort: SortKey) {
        lock(&self.state).sort = sort;
        self.apply_filters();
    }

    /// Recompute the visible list from category and sort, then render
    pub fn apply_filters(&self) {
        let mut state = lock(&self.state);
        state.filtered_items = catalog::apply_filters(&state.menu_items, &state.category, state.sort);
        render_grid(&state, self.ctx.view.as_ref());
    }

    /// Search box input. The filter pass runs once typing pauses.
    pub fn search(&self, query: impl Into<String>) {
        self.search.call(query.into());
    }

    /// Run a search pass right away
    pub fn apply_search(&self, query: &str) {
        run_search(&self.state, self.ctx.view.as_ref(), query);
    }

    /// ADD button: hands the order to the server-side placement page
    pub fn add_to_cart(&self, item_id: i64) {
        let Some(roll_number) = self.ctx.auth().require_auth(self.ctx.navigator.as_ref()) else {
            return;
        };

        let mut button = LoadingButton::new(format!("add-{}", item_id), "ADD");
        button.start();
        self.ctx.view.set_html(button.id(), button.render());

        self.ctx.navigator.navigate(Route::PlaceOrder {
            roll_number,
            item_id,
        });
    }

    pub fn go_to_wallet(&self) {
        self.ctx.navigator.navigate(Route::Wallet);
    }

    pub fn go_to_history(&self) {
        if let Some(roll_number) = self.ctx.auth().roll_number() {
            self.ctx.navigator.navigate(Route::History { roll_number });
        }
    }

    /// Logout after confirmation. Returns whether the user logged out.
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

    pub fn menu_items(&self) -> Vec<MenuItem> {
        lock(&self.state).menu_items.clone()
    }

    pub fn filtered_items(&self) -> Vec<MenuItem> {
        lock(&self.state).filtered_items.clone()
    }

    pub fn category(&self) -> CategoryFilter {
        lock(&self.state).category.clone()
    }

    pub fn sort(&self) -> SortKey {
        lock(&self.state).sort
    }
}

/// Search runs over the full menu and ignores the category tab and sort.
fn run_search(state: &Mutex<HomeState>, view: &dyn View, query: &str) {
    let mut state = lock(state);
    state.filtered_items = catalog::search_items(&state.menu_items, query);
    render_grid(&state, view);
}

fn render_grid(state: &HomeState, view: &dyn View) {
    let html = if state.filtered_items.is_empty() {
        StatePanel::new("🔍", "No Items Found", "Try adjusting your filters.").render()
    } else {
        state.filtered_items.iter().map(food_card).collect()
    };
    view.set_html(FOOD_GRID, html);
}

/// Menu card. The sold-out branch is taken iff the item has no stock.
pub fn food_card(item: &MenuItem) -> String {
    let name = escape(&item.name);
    let category = escape(&item.category);
    let fallback = placeholder_image(&item.name);
    let image = item
        .image_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .map(escape)
        .unwrap_or_else(|| fallback.clone());

    let (type_class, type_icon) = if item.food_type.is_veg() {
        ("veg", "🟢")
    } else {
        ("non-veg", "🔴")
    };
    let bestseller = if item.is_bestseller() {
        r#"<span class="badge badge-bestseller">⭐ Bestseller</span>"#
    } else {
        ""
    };

    let (card_class, stock, overlay, action) = if item.is_available() {
        let low = if item.is_low_stock() { " low-stock" } else { "" };
        (
            "food-card",
            format!(
                r#"<div class="stock-badge{}">📦 {} left</div>"#,
                low, item.quantity
            ),
            String::new(),
            format!(
                r#"<button class="add-to-cart-btn" id="add-{id}" data-id="{id}">ADD</button>"#,
                id = item.id
            ),
        )
    } else {
        (
            "food-card sold-out",
            String::new(),
            r#"<div class="sold-out-overlay"><div class="sold-out-text">SOLD OUT</div></div>"#
                .to_string(),
            r#"<button class="btn btn-secondary" disabled>Unavailable</button>"#.to_string(),
        )
    };

    format!(
        r#"<div class="{card_class}" data-category="{category}"><div class="food-image-container"><img src="{image}" alt="{name}" class="food-image" data-fallback="{fallback}"><div class="image-badges"><span class="badge badge-{type_class}">{type_icon} {food_type}</span>{bestseller}</div>{stock}{overlay}</div><div class="food-card-content"><div class="food-header"><div><h3 class="food-name">{name}</h3><p class="food-category">{category}</p></div></div><div class="food-footer"><div><span class="food-price">{price}</span></div>{action}</div></div></div>"#,
        food_type = item.food_type,
        price = format_price(item.price),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::FoodType;

    fn item(quantity: i32) -> MenuItem {
        MenuItem {
            id: 9,
            name: "Veg Burger".into(),
            category: "Snacks".into(),
            price: 50.0,
            quantity,
            image_url: Some("https://img/burger.png".into()),
            food_type: FoodType::Veg,
            available: true,
        }
    }

    #[test]
    fn test_available_branch_iff_quantity_positive() {
        for quantity in [-1, 0, 1, 5, 6, 51] {
            let html = food_card(&item(quantity));
            let available = quantity > 0;
            assert_eq!(html.contains("SOLD OUT"), !available, "qty {quantity}");
            assert_eq!(html.contains("add-to-cart-btn"), available, "qty {quantity}");
            assert_eq!(html.contains("Unavailable"), !available, "qty {quantity}");
        }
    }

    #[test]
    fn test_stock_badges() {
        assert!(food_card(&item(3)).contains("stock-badge low-stock"));
        assert!(!food_card(&item(6)).contains("low-stock"));
        assert!(food_card(&item(51)).contains("Bestseller"));
        assert!(!food_card(&item(50)).contains("Bestseller"));
        assert!(food_card(&item(3)).contains("₹50.00"));
    }

    #[test]
    fn test_missing_image_uses_placeholder() {
        let mut no_image = item(10);
        no_image.image_url = None;
        let html = food_card(&no_image);
        assert!(html.contains(r#"src="https://placehold.co/600x400/FC8019/ffffff?text=Veg%20Burger""#));
    }
}
