use std::{str::FromStr, sync::Arc};

use anyhow::{anyhow, bail, Context, Result};
use cfc_orders::{
    config::{self, DashboardConfig},
    links::order_links,
    models::{Milestone, OrderStatus, ShipMethod, ShipmentStatus},
    session::SessionStore,
    shipping::{PanelHelper, SaveOutcome, ShipmentMethodRouter, TrackingEmail},
    view::{AlertsPanel, OrderCard, OrderDetail, OrderListView},
    Dashboard, HttpOrdersApi,
};
use chrono::{Local, NaiveDate};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let context = CliContext::initialize()?;

    match cli.command {
        Commands::Login(args) => handle_login(&context, args, cli.json),
        Commands::Logout => handle_logout(&context, cli.json),
        Commands::Whoami => handle_whoami(&context, cli.json),
        Commands::Orders(command) => {
            let mut dashboard = context.dashboard().await?;
            handle_orders_command(&mut dashboard, command, cli.json).await
        }
        Commands::Alerts(command) => {
            let mut dashboard = context.dashboard().await?;
            handle_alerts_command(&mut dashboard, command, cli.json).await
        }
        Commands::Shipments(command) => {
            let mut dashboard = context.dashboard().await?;
            handle_shipments_command(&mut dashboard, command, cli.json).await
        }
    }
}

#[derive(Parser)]
#[command(
    name = "cfc-orders",
    about = "Cabinets For Contractors order dashboard",
    version
)]
struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON when available"
    )]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Login(LoginArgs),
    Logout,
    Whoami,
    #[command(subcommand)]
    Orders(OrdersCommands),
    #[command(subcommand)]
    Alerts(AlertsCommands),
    #[command(subcommand)]
    Shipments(ShipmentsCommands),
}

#[derive(Args)]
struct LoginArgs {
    #[arg(long, help = "Shared dashboard password")]
    password: String,
}

#[derive(Subcommand)]
enum OrdersCommands {
    List(ListOrdersArgs),
    Show(OrderIdArgs),
    SetStatus(SetStatusArgs),
    Checkpoint(CheckpointArgs),
    Notes(NotesArgs),
    Summary(SummaryArgs),
    Links(OrderIdArgs),
    Delete(OrderIdArgs),
}

#[derive(Args)]
struct ListOrdersArgs {
    #[arg(long, conflicts_with = "archived", help = "Only orders in this status")]
    status: Option<OrderStatus>,
    #[arg(long, action = ArgAction::SetTrue, help = "Only completed orders")]
    archived: bool,
}

#[derive(Args)]
struct OrderIdArgs {
    #[arg(help = "Order identifier")]
    id: String,
}

#[derive(Args)]
struct SetStatusArgs {
    id: String,
    #[arg(help = "Target status, e.g. needs_bol")]
    status: OrderStatus,
}

#[derive(Args)]
struct CheckpointArgs {
    id: String,
    #[arg(help = "Checkpoint name, e.g. bol_sent")]
    checkpoint: Milestone,
}

#[derive(Args)]
struct NotesArgs {
    id: String,
    #[arg(help = "Replacement notes text")]
    text: String,
}

#[derive(Args)]
struct SummaryArgs {
    id: String,
    #[arg(long, action = ArgAction::SetTrue, help = "Regenerate instead of using the cached summary")]
    force: bool,
}

#[derive(Subcommand)]
enum AlertsCommands {
    List,
    Resolve(AlertIdArgs),
}

#[derive(Args)]
struct AlertIdArgs {
    id: String,
}

#[derive(Subcommand)]
enum ShipmentsCommands {
    Status(ShipmentStatusArgs),
    Method(ShipmentMethodArgs),
    Tracking(ShipmentTrackingArgs),
    Manage(ShipmentIdArgs),
    RlQuote(RlQuoteArgs),
    LiPrice(LiPriceArgs),
    Pirateship(PirateshipArgs),
}

#[derive(Args)]
struct ShipmentIdArgs {
    #[arg(help = "Shipment identifier, e.g. 5124-LI")]
    id: String,
}

#[derive(Args)]
struct ShipmentStatusArgs {
    id: String,
    status: ShipmentStatus,
}

#[derive(Args)]
struct ShipmentMethodArgs {
    id: String,
    #[arg(help = "LTL, Pirateship, Pickup, BoxTruck, LiDelivery or none")]
    method: String,
}

#[derive(Args)]
struct ShipmentTrackingArgs {
    id: String,
    number: String,
}

#[derive(Args)]
struct RlQuoteArgs {
    id: String,
    #[arg(long, help = "RL Carriers quote number")]
    number: Option<String>,
    #[arg(long, help = "Carrier quote price")]
    price: Option<String>,
}

#[derive(Args)]
struct LiPriceArgs {
    id: String,
    #[arg(long, help = "What Li charges us")]
    cost: Option<String>,
    #[arg(long, help = "What the customer pays")]
    charge: Option<String>,
    #[arg(long, action = ArgAction::SetTrue, help = "Persist the prices")]
    save: bool,
}

#[derive(Args)]
struct PirateshipArgs {
    id: String,
    #[arg(long, help = "Tracking number from the purchased label")]
    tracking: Option<String>,
}

struct CliContext {
    config: DashboardConfig,
    session: SessionStore,
}

impl CliContext {
    fn initialize() -> Result<Self> {
        let config = config::load_config().context("failed to load dashboard config")?;
        config::init_tracing(&config.log_level, config.log_json);

        let session = SessionStore::resolve(config.session_file.as_deref())
            .context("failed to locate session file")?;

        Ok(Self { config, session })
    }

    /// Dashboard with both collections loaded; requires the login flag.
    async fn dashboard(&self) -> Result<Dashboard> {
        self.session.require_login()?;
        let api = HttpOrdersApi::from_config(&self.config).context("failed to build API client")?;
        let mut dashboard = Dashboard::new(Arc::new(api), self.config.clone());
        dashboard
            .load()
            .await
            .context("failed to load orders and alerts")?;
        Ok(dashboard)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn handle_login(context: &CliContext, args: LoginArgs, json: bool) -> Result<()> {
    let session = context
        .session
        .login(&args.password, &context.config.app_password)?;
    if json {
        print_json(&session)?;
    } else {
        println!("Logged in");
        println!("Session saved to: {}", context.session.path().display());
    }
    Ok(())
}

fn handle_logout(context: &CliContext, json: bool) -> Result<()> {
    context
        .session
        .logout()
        .context("failed to clear session file")?;
    if json {
        print_json(&json!({ "logged_in": false }))?;
    } else {
        println!("Logged out");
    }
    Ok(())
}

fn handle_whoami(context: &CliContext, json: bool) -> Result<()> {
    let session = context.session.read().context("failed to read session file")?;
    if json {
        print_json(&json!({
            "logged_in": session.as_ref().map(|s| s.logged_in).unwrap_or(false),
            "saved_at": session.as_ref().map(|s| s.saved_at),
            "api_url": context.config.api_url,
        }))?;
    } else {
        match session {
            Some(session) if session.logged_in => println!(
                "Logged in since {} against {}",
                session.saved_at, context.config.api_url
            ),
            _ => println!("Not logged in"),
        }
    }
    Ok(())
}

async fn handle_orders_command(
    dashboard: &mut Dashboard,
    command: OrdersCommands,
    json: bool,
) -> Result<()> {
    match command {
        OrdersCommands::List(args) => {
            if let Some(status) = args.status {
                dashboard.select_status(status);
            } else if args.archived {
                dashboard.toggle_archived();
            }
            let view = dashboard.list_view(today());
            if json {
                print_json(&view)?;
            } else {
                render_list(&view);
            }
            Ok(())
        }
        OrdersCommands::Show(args) => {
            let detail = dashboard
                .open_order(&args.id, today())
                .await
                .with_context(|| format!("failed to open order {}", args.id))?;
            if json {
                print_json(&detail)?;
            } else {
                render_detail(&detail);
            }
            Ok(())
        }
        OrdersCommands::SetStatus(args) => {
            dashboard
                .set_order_status(&args.id, args.status)
                .await
                .with_context(|| format!("failed to move order {}", args.id))?;
            report(dashboard, json)
        }
        OrdersCommands::Checkpoint(args) => {
            dashboard
                .update_checkpoint(&args.id, args.checkpoint)
                .await
                .with_context(|| format!("failed to update checkpoint on order {}", args.id))?;
            report(dashboard, json)
        }
        OrdersCommands::Notes(args) => {
            dashboard
                .save_notes(&args.id, &args.text)
                .await
                .with_context(|| format!("failed to save notes for order {}", args.id))?;
            report(dashboard, json)
        }
        OrdersCommands::Summary(args) => {
            let summary = if args.force {
                dashboard
                    .refresh_summary(&args.id)
                    .await
                    .with_context(|| format!("failed to regenerate summary for {}", args.id))?
            } else {
                dashboard
                    .open_order(&args.id, today())
                    .await
                    .with_context(|| format!("failed to open order {}", args.id))?
                    .ai_summary
                    .unwrap_or_default()
            };
            if json {
                print_json(&json!({ "order_id": args.id, "summary": summary }))?;
            } else if summary.is_empty() {
                println!("No summary for order {}", args.id);
            } else {
                println!("{}", summary);
            }
            Ok(())
        }
        OrdersCommands::Links(args) => {
            if dashboard.order(&args.id).is_none() {
                bail!("order {} not found", args.id);
            }
            let links = order_links(&args.id);
            if json {
                print_json(&links)?;
            } else {
                for link in &links {
                    println!("{}: {}", link.label, link.url);
                }
            }
            Ok(())
        }
        OrdersCommands::Delete(args) => {
            dashboard
                .delete_order(&args.id)
                .await
                .with_context(|| format!("failed to delete order {}", args.id))?;
            report(dashboard, json)
        }
    }
}

async fn handle_alerts_command(
    dashboard: &mut Dashboard,
    command: AlertsCommands,
    json: bool,
) -> Result<()> {
    match command {
        AlertsCommands::List => {
            dashboard.show_alerts();
            let panel = dashboard.alerts_panel();
            if json {
                print_json(&panel)?;
            } else {
                render_alerts(&panel);
            }
            Ok(())
        }
        AlertsCommands::Resolve(args) => {
            dashboard
                .resolve_alert(&args.id)
                .await
                .with_context(|| format!("failed to resolve alert {}", args.id))?;
            report(dashboard, json)
        }
    }
}

fn parse_method(raw: &str) -> Result<Option<ShipMethod>> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    ShipMethod::from_str(raw)
        .map(Some)
        .map_err(|_| anyhow!("unknown shipping method `{}`", raw))
}

/// Opens the shipping manager on `method`'s view. The method is only saved
/// when the command goes on to write; otherwise the view is a preview.
async fn manager_for(
    dashboard: &mut Dashboard,
    shipment_id: &str,
    method: ShipMethod,
    persist: bool,
) -> Result<()> {
    let opened = dashboard.open_shipping_manager(shipment_id).await;
    let Some(current) = dashboard.router().map(ShipmentMethodRouter::method) else {
        return opened.with_context(|| format!("failed to open shipment {}", shipment_id));
    };
    if current == Some(method) {
        return opened.with_context(|| format!("failed to open shipment {}", shipment_id));
    }
    if persist {
        dashboard
            .choose_method(method)
            .await
            .with_context(|| format!("failed to set {} on shipment {}", method, shipment_id))
    } else {
        dashboard
            .preview_method(method)
            .await
            .with_context(|| format!("failed to load {} view for shipment {}", method, shipment_id))
    }
}

fn router(dashboard: &mut Dashboard) -> Result<&mut ShipmentMethodRouter> {
    dashboard
        .router_mut()
        .ok_or_else(|| anyhow!("shipping manager is not open"))
}

async fn handle_shipments_command(
    dashboard: &mut Dashboard,
    command: ShipmentsCommands,
    json: bool,
) -> Result<()> {
    match command {
        ShipmentsCommands::Status(args) => {
            dashboard
                .set_shipment_status(&args.id, args.status)
                .await
                .with_context(|| format!("failed to update shipment {}", args.id))?;
            report(dashboard, json)
        }
        ShipmentsCommands::Method(args) => {
            let method = parse_method(&args.method)?;
            let opened = dashboard
                .set_shipment_method(&args.id, method)
                .await
                .with_context(|| format!("failed to set method on shipment {}", args.id))?;
            if opened {
                if let Some(router) = dashboard.router() {
                    render_manager(router, json)?;
                }
                dashboard.close_panel();
                Ok(())
            } else {
                report(dashboard, json)
            }
        }
        ShipmentsCommands::Tracking(args) => {
            let email = dashboard
                .save_tracking(&args.id, &args.number)
                .await
                .with_context(|| format!("failed to save tracking for shipment {}", args.id))?;
            match email {
                Some(email) => render_email(&email, json),
                None => {
                    println!("Tracking entry is not available for shipment {}", args.id);
                    Ok(())
                }
            }
        }
        ShipmentsCommands::Manage(args) => {
            let opened = dashboard.open_shipping_manager(&args.id).await;
            let router = dashboard
                .router()
                .ok_or_else(|| anyhow!("shipment {} not found", args.id))?;
            render_manager(router, json)?;
            if let Err(err) = opened {
                eprintln!("warning: {}", err);
            }
            dashboard.close_panel();
            Ok(())
        }
        ShipmentsCommands::RlQuote(args) => {
            let edits = args.number.is_some() || args.price.is_some();
            manager_for(dashboard, &args.id, ShipMethod::Ltl, edits).await?;
            let router = router(dashboard)?;
            let ltl = router
                .ltl_mut()
                .ok_or_else(|| anyhow!("freight quote helper unavailable"))?;
            if let Some(number) = args.number {
                ltl.set_quote_number(number);
            }
            if let Some(price) = args.price {
                ltl.set_quote_price(price);
            }
            let dirty = ltl.is_dirty();
            render_manager(router, json)?;
            if dirty {
                let outcome = dashboard
                    .finish_shipping_manager()
                    .await
                    .context("failed to save freight quote")?;
                render_outcome(&outcome, json)?;
            } else {
                dashboard.close_panel();
            }
            Ok(())
        }
        ShipmentsCommands::LiPrice(args) => {
            manager_for(dashboard, &args.id, ShipMethod::LiDelivery, args.save).await?;
            let router = router(dashboard)?;
            let pricing = router
                .li_delivery_mut()
                .ok_or_else(|| anyhow!("Li pricing helper unavailable"))?;
            if let Some(cost) = args.cost {
                pricing.set_cost(cost);
            }
            if let Some(charge) = args.charge {
                pricing.set_charge(charge);
            }
            render_manager(router, json)?;
            if args.save {
                let outcome = dashboard
                    .finish_shipping_manager()
                    .await
                    .context("failed to save Li pricing")?;
                render_outcome(&outcome, json)?;
            } else {
                dashboard.close_panel();
            }
            Ok(())
        }
        ShipmentsCommands::Pirateship(args) => {
            let save = args.tracking.is_some();
            manager_for(dashboard, &args.id, ShipMethod::Pirateship, save).await?;
            let router = router(dashboard)?;
            let helper = router
                .pirateship_mut()
                .ok_or_else(|| anyhow!("Pirateship helper unavailable"))?;
            if let Some(tracking) = args.tracking {
                helper.set_tracking(tracking);
            }
            render_manager(router, json)?;
            if save {
                let outcome = dashboard
                    .finish_shipping_manager()
                    .await
                    .context("failed to save Pirateship tracking")?;
                render_outcome(&outcome, json)?;
            } else {
                dashboard.close_panel();
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn report(dashboard: &Dashboard, json: bool) -> Result<()> {
    if let Some(banner) = dashboard.banner() {
        if json {
            print_json(banner)?;
        } else {
            println!("{}", banner.message);
        }
    }
    Ok(())
}

fn render_list(view: &OrderListView) {
    let counts = &view.counts;
    println!(
        "{} ({} shown, {} active, {} archived)",
        view.title,
        view.cards.len(),
        counts.active,
        counts.archived()
    );
    let tiles: Vec<String> = counts
        .by_status
        .iter()
        .filter(|c| !c.status.is_complete())
        .map(|c| format!("{} {}", c.label, c.count))
        .collect();
    println!("  {}", tiles.join(" | "));
    if view.is_empty() {
        println!("No orders");
    }
    for card in &view.cards {
        render_card(card);
    }
}

fn render_card(card: &OrderCard) {
    println!(
        "- #{} • {} • {} • {} • {}",
        card.order_id, card.name, card.status_label, card.order_total, card.days_open_label
    );
    if let Some(location) = &card.location {
        println!("  {}", location);
    }
    if !card.warehouses.is_empty() {
        println!("  Warehouses: {}", card.warehouses.join(", "));
    }
    for row in &card.shipments {
        let tracking = row
            .tracking_display
            .as_deref()
            .map(|t| format!(" • ...{}", t))
            .unwrap_or_default();
        let manage = if row.shows_manager_button() { " • manage" } else { "" };
        println!(
            "  • {} [{}] {} • {} • {}{}{}",
            row.shipment_id,
            row.warehouse,
            row.method_label(),
            row.status.label(),
            row.quote_label,
            tracking,
            manage
        );
    }
    if let Some(shipping) = &card.shipping {
        let flag = if shipping.all_quoted { "" } else { " (not fully quoted)" };
        println!(
            "  Shipping {} • cost {} • profit {} • total {}{}",
            shipping.charge, shipping.cost, shipping.profit, shipping.grand_total, flag
        );
    }
}

fn render_detail(detail: &OrderDetail) {
    render_card(&detail.card);
    for (label, value) in [
        ("Customer", &detail.customer_name),
        ("Company", &detail.company_name),
        ("Email", &detail.email),
        ("Phone", &detail.phone),
    ] {
        if let Some(value) = value {
            println!("  {}: {}", label, value);
        }
    }
    for line in &detail.address {
        println!("  {}", line);
    }
    println!("  Ordered {}", detail.order_date);
    if !detail.payment_amount.is_empty() {
        println!("  Paid {}", detail.payment_amount);
    }
    if let Some(comments) = &detail.comments {
        println!("  Customer comments: {}", comments);
    }
    if let Some(notes) = &detail.notes {
        println!("  Notes: {}", notes);
    }
    if let Some(summary) = &detail.ai_summary {
        println!("  Summary: {}", summary);
    }
    for link in &detail.links {
        println!("  {}: {}", link.label, link.url);
    }
}

fn render_alerts(panel: &AlertsPanel) {
    if panel.is_empty() {
        println!("No open alerts");
        return;
    }
    println!("Alerts ({})", panel.count());
    for row in &panel.rows {
        println!(
            "- {} • order {} • {} • {}",
            row.id,
            row.order_id.as_deref().unwrap_or("-"),
            row.type_label,
            row.message
        );
    }
}

fn render_manager(router: &ShipmentMethodRouter, json: bool) -> Result<()> {
    if json {
        return print_json(&json!({
            "shipment_id": router.shipment().shipment_id,
            "method": router.method(),
            "view": router.view(),
            "helper": helper_json(router.helper()),
        }));
    }

    let shipment = router.shipment();
    println!(
        "Shipment {} ({}) • {}",
        shipment.shipment_id,
        shipment.warehouse,
        router.method().map(|m| m.label()).unwrap_or("no method")
    );
    match router.helper() {
        PanelHelper::None => {
            for option in router.method_options() {
                let mark = if option.active { "*" } else { " " };
                println!(" {} {} - {}", mark, option.label, option.description);
            }
        }
        PanelHelper::Ltl(ltl) => {
            if let Some(reason) = ltl.failure() {
                println!("Could not load quote data: {}", reason);
                return Ok(());
            }
            println!("Freight class: {}", ltl.freight_class());
            if let Some(weight) = ltl.weight_display() {
                println!("Weight: {}", weight);
            }
            for field in ltl.ship_to_fields() {
                println!("{}: {}", field.label, field.value);
            }
            for item in ltl.oversized_items() {
                println!("Oversized: {}", item);
            }
            if let Some(link) = ltl.quote_link() {
                println!("{}: {}", link.label, link.url);
            }
            println!(
                "Quote {} @ {} • customer {}",
                ltl.entry().quote_number,
                ltl.entry().quote_price,
                ltl.customer_price_display()
            );
            if let Some(bol) = ltl.bol() {
                for field in &bol.bill_to {
                    println!("Bill to {}: {}", field.label, field.value);
                }
                println!("Notify: {}", bol.notification_emails);
            }
        }
        PanelHelper::Pirateship(helper) => {
            for field in helper.address_fields() {
                println!("{}: {}", field.label, field.value);
            }
            let link = helper.label_link();
            println!("{}: {}", link.label, link.url);
        }
        PanelHelper::LiDelivery(pricing) => {
            println!(
                "Li cost {} • charge {} • profit {}",
                pricing.cost_input(),
                pricing.charge_input(),
                pricing.profit_display()
            );
        }
        PanelHelper::Tracking(panel) => println!("{}", panel.instructions()),
    }
    Ok(())
}

fn helper_json(helper: &PanelHelper) -> serde_json::Value {
    match helper {
        PanelHelper::None => serde_json::Value::Null,
        PanelHelper::Ltl(ltl) => json!({
            "freight_class": ltl.freight_class(),
            "entry": ltl.entry(),
            "customer_price": ltl.customer_price_display(),
            "quote_link": ltl.quote_link(),
            "ship_to": ltl.ship_to_fields(),
            "oversized": ltl.oversized_items(),
            "weight": ltl.weight_display(),
            "bol": ltl.bol(),
            "error": ltl.failure(),
        }),
        PanelHelper::Pirateship(helper) => json!({
            "ship_to": helper.address_fields(),
            "label_link": helper.label_link(),
            "tracking": helper.tracking_input(),
        }),
        PanelHelper::LiDelivery(pricing) => json!({
            "cost": pricing.cost_input(),
            "charge": pricing.charge_input(),
            "profit": pricing.profit_display(),
        }),
        PanelHelper::Tracking(panel) => json!({
            "instructions": panel.instructions(),
            "accepts_tracking": panel.accepts_tracking(),
            "tracking": panel.tracking_input,
        }),
    }
}

fn render_outcome(outcome: &SaveOutcome, json: bool) -> Result<()> {
    match (&outcome.patch, &outcome.email) {
        (_, Some(email)) => render_email(email, json),
        (Some(patch), None) => {
            if json {
                print_json(&json!({ "saved": patch.pairs() }))
            } else {
                println!("Saved {}", patch.to_query_string());
                Ok(())
            }
        }
        (None, None) => {
            if !json {
                println!("Nothing to save");
            }
            Ok(())
        }
    }
}

fn render_email(email: &TrackingEmail, json: bool) -> Result<()> {
    if json {
        print_json(&json!({
            "email": email,
            "mailto": email.mailto_url(),
        }))
    } else {
        println!("Tracking saved ({})", email.carrier.name());
        if let Some(url) = &email.tracking_url {
            println!("Track: {}", url);
        }
        println!("Notify customer: {}", email.mailto_url());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfc_orders::{shipping::ManagerView, view::OrderFilter};
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn method_names_parse() {
        assert_eq!(parse_method("none").unwrap(), None);
        assert_eq!(parse_method("ltl").unwrap(), Some(ShipMethod::Ltl));
        assert_eq!(parse_method("li-delivery").unwrap(), Some(ShipMethod::LiDelivery));
        assert!(parse_method("drone").is_err());
    }

    #[test]
    fn status_filter_conflicts_with_archived() {
        let parsed = Cli::try_parse_from([
            "cfc-orders",
            "orders",
            "list",
            "--status",
            "needs_bol",
            "--archived",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn list_filter_is_parsed() {
        let cli =
            Cli::try_parse_from(["cfc-orders", "--json", "orders", "list", "--archived"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Orders(OrdersCommands::List(args)) => assert!(args.archived),
            _ => panic!("expected orders list"),
        }
    }

    #[test]
    fn manager_view_names_are_stable() {
        assert_eq!(serde_json::to_value(ManagerView::LiDelivery).unwrap(), json!("lidelivery"));
        assert_eq!(OrderFilter::default(), OrderFilter::AllActive);
    }
}
