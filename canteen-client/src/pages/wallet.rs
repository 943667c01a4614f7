//! Wallet page: balance and spending

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use shared::{MenuItem, Order, OrderStatus};

use super::PageContext;
use crate::route::Route;
use crate::ui::html::{escape, loading_panel, StatePanel};
use crate::ui::{format_date, format_price, format_time, LoadingButton, Toast};
use crate::ClientResult;

pub const WALLET_BALANCE: &str = "walletBalance";
pub const STUDENT_NAME: &str = "studentName";
pub const STUDENT_ROLL: &str = "studentRoll";
pub const TRANSACTION_LIST: &str = "transactionList";
pub const TOTAL_ORDERS: &str = "totalOrders";
pub const TOTAL_SPENT: &str = "totalSpent";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Debit,
    Credit,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
        }
    }
}

/// Filter chip selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionFilter {
    #[default]
    All,
    Only(TransactionKind),
}

impl TransactionFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Only(kind) => tx.kind == *kind,
        }
    }
}

impl FromStr for TransactionFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "debit" => Ok(Self::Only(TransactionKind::Debit)),
            "credit" => Ok(Self::Only(TransactionKind::Credit)),
            other => Err(format!("unknown transaction filter: {other}")),
        }
    }
}

impl fmt::Display for TransactionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(kind) => f.write_str(kind.as_str()),
        }
    }
}

/// One wallet movement. Orders are the only source, so every transaction
/// is currently a debit.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub kind: TransactionKind,
    pub name: String,
    pub amount: f64,
    pub date: NaiveDateTime,
    pub status: OrderStatus,
    pub item_id: i64,
}

/// Orders as debits, newest first. The name comes from the order, then the
/// menu, then a generic label.
pub fn transactions_from_orders(orders: Vec<Order>, menu: &[MenuItem]) -> Vec<Transaction> {
    let names: HashMap<i64, &str> = menu.iter().map(|i| (i.id, i.name.as_str())).collect();

    let mut transactions: Vec<Transaction> = orders
        .into_iter()
        .map(|order| {
            let name = order
                .item_name()
                .or_else(|| names.get(&order.item_id).copied())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Item #{}", order.item_id));
            Transaction {
                id: order.id,
                kind: TransactionKind::Debit,
                name,
                amount: order.amount,
                date: order.order_time,
                status: order.status,
                item_id: order.item_id,
            }
        })
        .collect();

    transactions.sort_by(|a, b| b.date.cmp(&a.date));
    transactions
}

pub struct WalletPage {
    ctx: PageContext,
    transactions: Vec<Transaction>,
    filter: TransactionFilter,
    refresh_button: LoadingButton,
}

impl WalletPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            transactions: Vec::new(),
            filter: TransactionFilter::All,
            refresh_button: LoadingButton::new("refreshBtn", "🔄 Refresh"),
        }
    }

    /// Page entry: guard, wallet card, transactions
    pub async fn open(&mut self) -> bool {
        if self.ctx.auth().require_auth(self.ctx.navigator.as_ref()).is_none() {
            return false;
        }
        self.load_wallet_data().await;
        self.load_transactions().await;
        true
    }

    pub async fn load_wallet_data(&self) -> bool {
        let Some(roll_number) = self.ctx.auth().roll_number() else {
            return false;
        };

        match self.ctx.services.wallet.get_wallet(&roll_number).await {
            Ok(wallet) => {
                let view = &self.ctx.view;
                view.set_text(WALLET_BALANCE, format_price(wallet.balance));
                view.set_text(STUDENT_NAME, wallet.student_name);
                view.set_text(STUDENT_ROLL, format!("Roll No: {}", roll_number));
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load wallet");
                self.ctx
                    .view
                    .show_toast(Toast::error("Failed to load wallet information"));
                false
            }
        }
    }

    pub async fn load_transactions(&mut self) -> bool {
        self.show_loading();
        let result = self.fetch_transactions().await;
        self.finish_transactions(result)
    }

    fn show_loading(&self) {
        self.ctx
            .view
            .set_html(TRANSACTION_LIST, loading_panel("Loading transactions..."));
    }

    async fn fetch_transactions(&self) -> ClientResult<Vec<Transaction>> {
        let roll_number = self.ctx.auth().roll_number().unwrap_or_default();
        let orders = self.ctx.services.orders.history(&roll_number).await?;
        let menu = self.ctx.services.menu.list_items().await?;
        Ok(transactions_from_orders(orders, &menu))
    }

    fn finish_transactions(&mut self, result: ClientResult<Vec<Transaction>>) -> bool {
        match result {
            Ok(transactions) => {
                self.transactions = transactions;
                self.render_transactions();
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load transactions");
                self.ctx.view.set_html(
                    TRANSACTION_LIST,
                    StatePanel::new("⚠️", "Failed to Load Transactions", "Please try again later")
                        .with_class("transaction-empty")
                        .with_retry("loadTransactions")
                        .render(),
                );
                false
            }
        }
    }

    pub fn render_transactions(&self) {
        let visible: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| self.filter.matches(t))
            .collect();

        if visible.is_empty() {
            self.ctx.view.set_html(
                TRANSACTION_LIST,
                StatePanel::new(
                    "🛒",
                    "No Transactions Yet",
                    "Start ordering delicious food from the menu!",
                )
                .with_class("transaction-empty")
                .with_link(Route::Home.path(), "Browse Menu")
                .render(),
            );
            return;
        }

        let html: String = visible.into_iter().map(transaction_item).collect();
        self.ctx.view.set_html(TRANSACTION_LIST, html);
        self.update_stats();
    }

    /// Totals over all loaded transactions, regardless of the filter
    fn update_stats(&self) {
        let total_spent: f64 = self
            .transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Debit)
            .map(|t| t.amount)
            .sum();
        self.ctx
            .view
            .set_text(TOTAL_ORDERS, self.transactions.len().to_string());
        self.ctx.view.set_text(TOTAL_SPENT, format_price(total_spent));
    }

    pub fn filter_transactions(&mut self, filter: TransactionFilter) {
        self.filter = filter;
        self.render_transactions();
    }

    /// Reload wallet card and transactions concurrently
    pub async fn refresh(&mut self) {
        self.refresh_button.start();
        self.ctx
            .view
            .set_html(self.refresh_button.id(), self.refresh_button.render());
        self.show_loading();

        let (_, result) = tokio::join!(self.load_wallet_data(), self.fetch_transactions());
        self.finish_transactions(result);

        self.refresh_button.stop();
        self.ctx
            .view
            .set_html(self.refresh_button.id(), self.refresh_button.render());
        self.ctx
            .view
            .show_toast(Toast::success("Wallet refreshed successfully!"));
    }

    pub fn go_to_home(&self) {
        self.ctx.navigator.navigate(Route::Home);
    }

    pub fn go_to_history(&self) {
        if let Some(roll_number) = self.ctx.auth().roll_number() {
            self.ctx.navigator.navigate(Route::History { roll_number });
        }
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

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn filter(&self) -> TransactionFilter {
        self.filter
    }

    pub fn refresh_button(&self) -> &LoadingButton {
        &self.refresh_button
    }
}

fn transaction_item(tx: &Transaction) -> String {
    let (icon, sign) = match tx.kind {
        TransactionKind::Debit => ("🍔", "-"),
        TransactionKind::Credit => ("💰", "+"),
    };
    let kind = tx.kind.as_str();

    format!(
        r#"<div class="transaction-item"><div class="transaction-icon {kind}">{icon}</div><div class="transaction-details"><div class="transaction-name">{name}</div><div class="transaction-meta"><span>📅 {date}</span><span>🕐 {time}</span><span>ID: #{id}</span></div></div><div class="transaction-amount"><div class="amount-value {kind}">{sign} {amount}</div><span class="transaction-status status-success">{status}</span></div></div>"#,
        name = escape(&tx.name),
        date = format_date(&tx.date),
        time = format_time(&tx.date),
        id = tx.id,
        amount = format_price(tx.amount),
        status = escape(tx.status.as_str()),
    )
}
