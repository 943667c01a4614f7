//! Canteen terminal client
//!
//! Runs the student and admin pages against the real services, with the
//! session kept in a local file.

mod console;
mod logger;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use canteen_client::catalog::SortKey;
use canteen_client::pages::wallet::TransactionFilter;
use canteen_client::pages::{
    AdminForm, AdminPage, ForgotPasswordPage, HistoryPage, HomePage, LoginPage, PageContext,
    SignupPage, WalletPage,
};
use canteen_client::ui::format::format_price_plain;
use canteen_client::ui::{format_date, format_price, format_time};
use canteen_client::{ClientConfig, FileStorage, MenuItem};
use clap::{Args, Parser, Subcommand};
use console::{ConsoleNavigator, ConsoleView};

/// Campus canteen client
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Menu service base URL
    #[arg(long, env = "CANTEEN_MENU_URL")]
    menu_url: Option<String>,

    /// Wallet service base URL
    #[arg(long, env = "CANTEEN_WALLET_URL")]
    wallet_url: Option<String>,

    /// Order service base URL
    #[arg(long, env = "CANTEEN_ORDER_URL")]
    order_url: Option<String>,

    /// Notification service base URL
    #[arg(long, env = "CANTEEN_NOTIFY_URL")]
    notify_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "CANTEEN_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Session file
    #[arg(long, env = "CANTEEN_SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Answer yes to every confirmation
    #[arg(short, long)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse the menu
    Menu {
        /// Exact category, or "All"
        #[arg(long)]
        category: Option<String>,
        /// default, price-low, price-high or name
        #[arg(long)]
        sort: Option<SortKey>,
        /// Match on name or category
        #[arg(long)]
        search: Option<String>,
    },
    /// Log in as a student
    Login {
        #[arg(long)]
        roll: String,
        #[arg(long)]
        password: String,
    },
    /// End the student session
    Logout,
    /// Create a student account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        roll: String,
        #[arg(long)]
        password: String,
    },
    /// Reset a forgotten password
    ForgotPassword {
        #[arg(long)]
        roll: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        new_password: String,
    },
    /// Wallet balance and transactions
    Wallet {
        /// all, debit or credit
        #[arg(long, default_value = "all")]
        filter: TransactionFilter,
    },
    /// Past orders
    History,
    /// Place an order for one item
    Order { item_id: i64 },
    /// Admin console
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
}

#[derive(Subcommand, Debug)]
enum AdminCommand {
    /// Open an admin session
    Grant,
    /// End the admin session
    Logout,
    /// List menu items
    Items,
    /// Add an item, or update one with --id. Fields left out keep their
    /// current value (new items start as Snacks / Veg with no stock).
    Save {
        #[arg(long)]
        id: Option<i64>,
        #[command(flatten)]
        edits: FormEdits,
    },
    /// Add money to a student's wallet
    Recharge {
        #[arg(long)]
        roll: String,
        #[arg(long)]
        amount: String,
    },
}

/// Form fields given on the command line
#[derive(Args, Debug, Default)]
struct FormEdits {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    category: Option<String>,
    /// Veg or Non-Veg
    #[arg(long = "type")]
    food_type: Option<String>,
    #[arg(long)]
    price: Option<String>,
    #[arg(long)]
    quantity: Option<String>,
    #[arg(long)]
    image_url: Option<String>,
}

impl FormEdits {
    /// Overwrite only the fields that were given
    fn apply(self, form: &mut AdminForm) {
        let fields = [
            (self.name, &mut form.name),
            (self.category, &mut form.category),
            (self.food_type, &mut form.food_type),
            (self.price, &mut form.price),
            (self.quantity, &mut form.quantity),
            (self.image_url, &mut form.image_url),
        ];
        for (value, field) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        if let Some(url) = &self.menu_url {
            config = config.with_menu_url(url);
        }
        if let Some(url) = &self.wallet_url {
            config = config.with_wallet_url(url);
        }
        if let Some(url) = &self.order_url {
            config = config.with_order_url(url);
        }
        if let Some(url) = &self.notify_url {
            config = config.with_notify_url(url);
        }
        if let Some(seconds) = self.timeout {
            config = config.with_timeout(seconds);
        }
        if let Some(path) = &self.session_file {
            config = config.with_session_file(path);
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logger::init_logger(&cli.log_level, cli.json_logs)?;

    let config = cli.client_config();
    tracing::debug!(?config, "Configuration loaded");

    let services = config
        .build_services()
        .context("failed to build service clients")?;
    let storage = FileStorage::open(&config.session_file).with_context(|| {
        format!(
            "failed to open session file {}",
            config.session_file.display()
        )
    })?;

    let ctx = PageContext::new(
        services,
        Arc::new(storage),
        Arc::new(ConsoleView::new(cli.yes)),
        Arc::new(ConsoleNavigator),
    );

    let ok = run(cli.command, ctx).await?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

async fn run(command: Command, ctx: PageContext) -> anyhow::Result<bool> {
    match command {
        Command::Menu {
            category,
            sort,
            search,
        } => {
            let page = HomePage::new(ctx);
            if !page.open().await {
                return Ok(false);
            }
            if let Some(category) = category {
                page.filter_by_category(category.as_str());
            }
            if let Some(sort) = sort {
                page.change_sort(sort);
            }
            if let Some(query) = search {
                page.apply_search(&query);
            }
            print_menu(&page.filtered_items());
            Ok(true)
        }
        Command::Login { roll, password } => {
            Ok(LoginPage::new(ctx).login(&roll, &password).await)
        }
        Command::Logout => {
            ctx.auth().logout(ctx.navigator.as_ref())?;
            Ok(true)
        }
        Command::Signup {
            name,
            roll,
            password,
        } => Ok(SignupPage::new(ctx).signup(&name, &roll, &password).await),
        Command::ForgotPassword {
            roll,
            name,
            new_password,
        } => {
            let mut page = ForgotPasswordPage::new(ctx);
            Ok(page.verify(&roll, &name).await
                && page.reset_password(&new_password, &new_password).await)
        }
        Command::Wallet { filter } => {
            let mut page = WalletPage::new(ctx);
            if !page.open().await {
                return Ok(false);
            }
            page.filter_transactions(filter);
            for tx in page.transactions().iter().filter(|t| filter.matches(t)) {
                println!(
                    "#{:<5} {} {}  {:<24} {:>10}  {}",
                    tx.id,
                    format_date(&tx.date),
                    format_time(&tx.date),
                    tx.name,
                    format!("-{}", format_price(tx.amount)),
                    tx.status
                );
            }
            Ok(true)
        }
        Command::History => {
            let mut page = HistoryPage::new(ctx);
            if !page.open().await {
                return Ok(false);
            }
            for entry in page.entries() {
                println!(
                    "Order #{:<5} {} {}  {:<24} {:<10} {:>10}  {}",
                    entry.order.id,
                    format_date(&entry.order.order_time),
                    format_time(&entry.order.order_time),
                    entry.item.name,
                    entry.item.category,
                    format_price(entry.order.amount),
                    entry.order.status
                );
            }
            Ok(true)
        }
        Command::Order { item_id } => {
            let Some(roll_number) = ctx.auth().require_auth(ctx.navigator.as_ref()) else {
                return Ok(false);
            };
            let result = ctx
                .services
                .orders
                .place(&roll_number, item_id)
                .await
                .context("order service unavailable")?;
            println!("{}", result);
            Ok(true)
        }
        Command::Admin { command } => run_admin(command, ctx).await,
    }
}

async fn run_admin(command: AdminCommand, ctx: PageContext) -> anyhow::Result<bool> {
    match command {
        AdminCommand::Grant => {
            ctx.auth().grant_admin()?;
            println!("Admin session opened");
            Ok(true)
        }
        AdminCommand::Logout => Ok(AdminPage::new(ctx).admin_logout()),
        AdminCommand::Items => {
            let mut page = AdminPage::new(ctx);
            if !page.open().await {
                return Ok(false);
            }
            for item in page.items() {
                println!(
                    "#{:<4} {:<24} {:<10} {:<8} {:>8}  📦 {}",
                    item.id,
                    item.name,
                    item.category,
                    item.food_type,
                    format_price_plain(item.price),
                    item.quantity
                );
            }
            Ok(true)
        }
        AdminCommand::Save { id, edits } => {
            let mut page = AdminPage::new(ctx);
            if !page.open().await {
                return Ok(false);
            }
            if let Some(id) = id
                && !page.edit_item_by_id(id)
            {
                println!("❌ No menu item with id {}", id);
                return Ok(false);
            }
            edits.apply(page.form_mut());
            Ok(page.save_item().await)
        }
        AdminCommand::Recharge { roll, amount } => {
            let page = AdminPage::new(ctx);
            if !page.require_admin() {
                return Ok(false);
            }
            Ok(page.recharge_wallet(&roll, &amount).await)
        }
    }
}

fn print_menu(items: &[MenuItem]) {
    if items.is_empty() {
        println!("🔍 No items found");
        return;
    }
    for item in items {
        let stock = if item.is_available() {
            format!("📦 {} left", item.quantity)
        } else {
            "SOLD OUT".to_string()
        };
        let badge = if item.is_bestseller() { " ⭐" } else { "" };
        println!(
            "#{:<4} {:<24} {:<10} {:<8} {:>8}  {}{}",
            item.id,
            item.name,
            item.category,
            item.food_type,
            format_price(item.price),
            stock,
            badge
        );
    }
}
