//! Admin console: menu management and wallet recharge

use shared::{FoodType, MenuItem, MenuItemDraft};

use super::home::placeholder_image;
use super::PageContext;
use crate::ui::format::format_price_plain;
use crate::ui::html::{escape, skeleton_cards, StatePanel};
use crate::ui::timing::SKELETON_CARDS;
use crate::ui::{format_price, Toast};

pub const MENU_GRID: &str = "menuGrid";
pub const FORM_TITLE: &str = "formTitle";

const ADD_TITLE: &str = "➕ Add Menu Item";
const DEFAULT_CATEGORY: &str = "Snacks";

/// Raw values of the add/edit form fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminForm {
    /// Empty for a new item
    pub id: String,
    pub name: String,
    pub category: String,
    pub food_type: String,
    pub price: String,
    pub quantity: String,
    pub image_url: String,
}

impl Default for AdminForm {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            food_type: FoodType::Veg.label().to_string(),
            price: String::new(),
            quantity: String::new(),
            image_url: String::new(),
        }
    }
}

impl AdminForm {
    /// Form filled from an existing item
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            category: item.category.clone(),
            food_type: item.food_type.label().to_string(),
            price: item.price.to_string(),
            quantity: item.quantity.to_string(),
            image_url: item.image_url.clone().unwrap_or_default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// Clear the item fields. Category and type keep their selection.
    pub fn reset(&mut self) {
        self.id.clear();
        self.name.clear();
        self.price.clear();
        self.quantity.clear();
        self.image_url.clear();
    }

    /// Validate the fields and build the payload, or return the message to
    /// show.
    pub fn to_draft(&self) -> Result<MenuItemDraft, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Please enter item name");
        }

        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0)
            .ok_or("Please enter valid price")?;

        // no leading number counts as no stock
        let quantity = leading_int(&self.quantity).unwrap_or(0);
        if quantity < 0 {
            return Err("Quantity cannot be negative");
        }

        let image_url = match self.image_url.trim() {
            "" => placeholder_image(name),
            url => url.to_string(),
        };

        Ok(MenuItemDraft {
            id: self.id.trim().parse().ok(),
            name: name.to_string(),
            category: self.category.clone(),
            food_type: self.food_type.parse().unwrap_or_default(),
            price,
            quantity,
            is_available: quantity > 0,
            image_url,
        })
    }
}

/// Integer at the start of the field (`"12.5"` is 12, `" 5 pcs"` is 5)
fn leading_int(value: &str) -> Option<i32> {
    let value = value.trim_start();
    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i32>().ok().map(|n| sign * n)
}

pub struct AdminPage {
    ctx: PageContext,
    form: AdminForm,
    items: Vec<MenuItem>,
}

impl AdminPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            form: AdminForm::default(),
            items: Vec::new(),
        }
    }

    /// Page entry: admin guard, then the menu grid
    pub async fn open(&mut self) -> bool {
        if !self.require_admin() {
            return false;
        }
        self.load_menu().await;
        true
    }

    /// Sends the browser to the admin login unless an admin session is open
    pub fn require_admin(&self) -> bool {
        self.ctx.auth().require_admin(self.ctx.navigator.as_ref())
    }

    pub async fn load_menu(&mut self) -> bool {
        self.ctx.view.set_html(
            MENU_GRID,
            skeleton_cards(SKELETON_CARDS, "admin-menu-card", "admin-card-content", 2),
        );

        match self.ctx.services.menu.list_items().await {
            Ok(items) => {
                let html: String = items.iter().map(admin_card).collect();
                self.ctx.view.set_html(MENU_GRID, html);
                self.items = items;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load menu");
                self.ctx
                    .view
                    .show_toast(Toast::error("Failed to load menu items"));
                self.ctx.view.set_html(
                    MENU_GRID,
                    StatePanel::new("⚠️", "Failed to load menu", "")
                        .with_retry("loadMenu")
                        .render(),
                );
                false
            }
        }
    }

    /// Load an item into the form
    pub fn edit_item(&mut self, item: &MenuItem) {
        self.form = AdminForm::from_item(item);
        self.ctx
            .view
            .set_text(FORM_TITLE, format!("✏️ Edit: {}", item.name));
    }

    /// Load the item with this id from the grid into the form
    pub fn edit_item_by_id(&mut self, id: i64) -> bool {
        let Some(item) = self.items.iter().find(|i| i.id == id).cloned() else {
            return false;
        };
        self.edit_item(&item);
        true
    }

    pub async fn save_item(&mut self) -> bool {
        let draft = match self.form.to_draft() {
            Ok(draft) => draft,
            Err(message) => {
                self.ctx.view.show_toast(Toast::error(message));
                return false;
            }
        };

        if let Err(e) = self.ctx.services.menu.save_item(&draft).await {
            tracing::error!(error = %e, "Save error");
            self.ctx.view.show_toast(Toast::error("Failed to save item"));
            return false;
        }

        let message = if draft.id.is_some() {
            "Item updated successfully!"
        } else {
            "Item added successfully!"
        };
        self.ctx.view.show_toast(Toast::success(message));
        self.reset_form();
        self.load_menu().await;
        true
    }

    pub fn reset_form(&mut self) {
        self.form.reset();
        self.ctx.view.set_text(FORM_TITLE, ADD_TITLE.to_string());
    }

    /// Add money to any student's wallet, then tell the student
    pub async fn recharge_wallet(&self, roll_number: &str, amount: &str) -> bool {
        let roll_number = roll_number.trim();
        if roll_number.is_empty() {
            self.ctx
                .view
                .show_toast(Toast::error("Please enter roll number"));
            return false;
        }

        let Some(amount) = amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a > 0.0)
        else {
            self.ctx
                .view
                .show_toast(Toast::error("Please enter valid amount"));
            return false;
        };

        let wallet = match self.ctx.services.wallet.top_up(roll_number, amount).await {
            Ok(wallet) => wallet,
            Err(e) => {
                tracing::error!(error = %e, "Recharge error");
                self.ctx
                    .view
                    .show_toast(Toast::error("Failed to recharge. Student not found!"));
                return false;
            }
        };

        self.ctx.view.show_toast(Toast::success(format!(
            "Wallet recharged! Added {} to Roll No: {}",
            format_price_plain(amount),
            roll_number
        )));

        let message = format!(
            "Your wallet was recharged with {}. New balance: {}",
            format_price_plain(amount),
            format_price(wallet.balance)
        );
        if let Err(e) = self
            .ctx
            .services
            .notifications
            .send(roll_number, &message)
            .await
        {
            tracing::warn!(error = %e, roll_number, "Failed to send recharge notification");
        }
        true
    }

    pub fn admin_logout(&self) -> bool {
        if !self.ctx.view.confirm("Are you sure you want to logout?") {
            return false;
        }
        if let Err(e) = self.ctx.auth().admin_logout(self.ctx.navigator.as_ref()) {
            tracing::error!(error = %e, "Failed to clear admin session");
            return false;
        }
        true
    }

    pub fn form(&self) -> &AdminForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AdminForm {
        &mut self.form
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

/// Grid card; prices are shown as stored, without padding
pub fn admin_card(item: &MenuItem) -> String {
    let (status_class, status) = if item.is_available() {
        ("badge-veg", "✓ In Stock")
    } else {
        ("badge-non-veg", "✗ Sold Out")
    };
    let (type_class, type_icon) = if item.food_type.is_veg() {
        ("veg", "🟢")
    } else {
        ("non-veg", "🔴")
    };

    format!(
        r#"<div class="admin-menu-card" data-action="editItem" data-id="{id}"><div class="admin-card-image" style="background-image: url('{image}')"><span class="admin-status-badge {status_class}">{status}</span><span class="admin-type-badge badge-{type_class}">{type_icon} {food_type}</span></div><div class="admin-card-content"><div class="admin-card-title">{name}</div><div class="admin-card-meta"><span class="admin-price">{price}</span><span class="admin-stock">📦 {quantity} left</span></div></div></div>"#,
        id = item.id,
        image = escape(item.image_url.as_deref().unwrap_or_default()),
        food_type = item.food_type,
        name = escape(&item.name),
        price = format_price_plain(item.price),
        quantity = item.quantity,
    )
}
