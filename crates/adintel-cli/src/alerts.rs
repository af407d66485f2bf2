//! Alert center command handlers.
//!
//! Read and dismissed state only lives for the duration of one command; the
//! `--mark-read` and `--dismiss` flags apply before the inbox is listed.

use adintel_core::{AlertHistoryRecord, AlertKind, AlertPriority, AppConfig, Dataset};
use adintel_engine::alerts::{
    filter_alerts, filter_history, scan_rules, sort_alerts, AlertFilter, AlertInbox,
    AlertSortField, BulkAction, HistorySummary, SortOrder,
};
use adintel_engine::format::format_relative;
use adintel_engine::{page_slice, total_pages, Clock};
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

/// Sub-commands available under `alerts`.
#[derive(Debug, Subcommand)]
pub enum AlertsCommands {
    /// List active alerts
    List(ListArgs),
    /// Show resolved, acknowledged and dismissed alerts
    History(HistoryArgs),
    /// Evaluate the configured alert rules against the brand dataset
    Scan {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Keep alerts with this priority (repeatable)
    #[arg(long = "priority", value_name = "PRIORITY")]
    pub priorities: Vec<AlertPriority>,
    /// Keep alerts of this kind (repeatable)
    #[arg(long = "kind", value_name = "KIND")]
    pub kinds: Vec<AlertKind>,
    /// Only unread alerts
    #[arg(long)]
    pub unread: bool,
    /// Case-insensitive search over brand, message and details
    #[arg(long, default_value = "")]
    pub query: String,
    /// Column to sort on: priority, brand, timestamp
    #[arg(long, default_value = "timestamp")]
    pub sort: AlertSortField,
    /// Sort direction: asc, desc
    #[arg(long, default_value = "desc")]
    pub order: SortOrder,
    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Mark an alert as read before listing (repeatable)
    #[arg(long = "mark-read", value_name = "ID")]
    pub mark_read: Vec<u32>,
    /// Dismiss an alert before listing (repeatable)
    #[arg(long, value_name = "ID")]
    pub dismiss: Vec<u32>,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Look-back window in days; defaults to `ADINTEL_HISTORY_WINDOW_DAYS`
    #[arg(long)]
    pub days: Option<u32>,
    /// Keep entries of this kind
    #[arg(long)]
    pub kind: Option<AlertKind>,
    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Dispatch an `alerts` sub-command.
///
/// # Errors
///
/// Returns an error if an alert id is unknown or JSON serialization fails.
pub(crate) fn run_alerts(
    dataset: &Dataset,
    config: &AppConfig,
    clock: &dyn Clock,
    command: &AlertsCommands,
) -> anyhow::Result<()> {
    match command {
        AlertsCommands::List(args) => run_alerts_list(dataset, config, clock.now(), args),
        AlertsCommands::History(args) => run_alerts_history(dataset, config, clock.now(), args),
        AlertsCommands::Scan { json } => run_alerts_scan(dataset, clock.now(), *json),
    }
}

fn run_alerts_list(
    dataset: &Dataset,
    config: &AppConfig,
    now: DateTime<Utc>,
    args: &ListArgs,
) -> anyhow::Result<()> {
    let mut inbox = AlertInbox::from_alerts(&dataset.alerts);
    apply_bulk(&mut inbox, dataset, &args.mark_read, BulkAction::MarkRead)?;
    apply_bulk(&mut inbox, dataset, &args.dismiss, BulkAction::Dismiss)?;

    let active = inbox.view(&dataset.alerts);
    let filter = AlertFilter {
        priorities: args.priorities.iter().copied().collect(),
        kinds: args.kinds.clone(),
        unread_only: args.unread,
        query: args.query.clone(),
    };
    let sorted = sort_alerts(&filter_alerts(&active, &filter), args.sort, args.order);
    let pages = total_pages(sorted.len(), config.alert_page_size);
    let page = page_slice(&sorted, args.page, config.alert_page_size);

    if args.json {
        let body = serde_json::json!({
            "unread": inbox.unread_count(&dataset.alerts),
            "total": sorted.len(),
            "page": args.page.max(1),
            "total_pages": pages,
            "alerts": page,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!(
        "{} unread of {} active alerts",
        inbox.unread_count(&dataset.alerts),
        active.len()
    );
    if page.is_empty() {
        println!("no alerts match the current filters");
        return Ok(());
    }

    println!();
    println!(
        "{:<5}{:<5}{:<10}{:<18}{:<16}{:<10}MESSAGE",
        "ID", "NEW", "PRIORITY", "KIND", "BRAND", "AGE"
    );
    for alert in page {
        println!(
            "{:<5}{:<5}{:<10}{:<18}{:<16}{:<10}{}",
            alert.id,
            if alert.is_read { "" } else { "*" },
            alert.priority.to_string(),
            alert.kind.label(),
            alert.brand,
            format_relative(alert.timestamp, now),
            alert.message
        );
    }
    println!();
    println!("Page {} of {}", args.page.max(1), pages.max(1));

    Ok(())
}

fn apply_bulk(
    inbox: &mut AlertInbox,
    dataset: &Dataset,
    ids: &[u32],
    action: BulkAction,
) -> anyhow::Result<()> {
    if ids.is_empty() {
        return Ok(());
    }
    for &id in ids {
        if !dataset.alerts.iter().any(|a| a.id == id) {
            anyhow::bail!("no alert with id {id}");
        }
        if !inbox.selected().contains(&id) {
            inbox.toggle_selected(id);
        }
    }
    let changed = inbox.apply_bulk(action);
    println!("{changed} alert(s) {}", action.past_tense());
    Ok(())
}

fn run_alerts_history(
    dataset: &Dataset,
    config: &AppConfig,
    now: DateTime<Utc>,
    args: &HistoryArgs,
) -> anyhow::Result<()> {
    let window = args.days.unwrap_or(config.history_window_days);
    let entries = filter_history(&dataset.history, window, args.kind, now);
    let summary = HistorySummary::from_records(&entries);
    let pages = total_pages(entries.len(), config.history_page_size);
    let page = page_slice(&entries, args.page, config.history_page_size);

    if args.json {
        let body = serde_json::json!({
            "window_days": window,
            "summary": summary,
            "page": args.page.max(1),
            "total_pages": pages,
            "entries": page,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!(
        "Last {window} days: {} resolved, {} acknowledged, {} dismissed ({} total)",
        summary.resolved, summary.acknowledged, summary.dismissed, summary.total
    );
    if page.is_empty() {
        println!("no alert history in this window");
        return Ok(());
    }

    println!();
    println!(
        "{:<5}{:<14}{:<18}{:<16}{:<18}{:<18}ACTION",
        "ID", "STATUS", "KIND", "BRAND", "RAISED", "RESOLVED"
    );
    for entry in page {
        print_history_row(entry);
    }
    println!();
    println!("Page {} of {}", args.page.max(1), pages.max(1));

    Ok(())
}

fn print_history_row(entry: &AlertHistoryRecord) {
    let resolved = entry.resolved_at.map_or_else(
        || "\u{2014}".to_string(),
        |t| t.format("%Y-%m-%d %H:%M").to_string(),
    );
    println!(
        "{:<5}{:<14}{:<18}{:<16}{:<18}{:<18}{}",
        entry.id,
        entry.status.to_string(),
        entry.kind.label(),
        entry.brand,
        entry.timestamp.format("%Y-%m-%d %H:%M").to_string(),
        resolved,
        entry.action
    );
}

fn run_alerts_scan(dataset: &Dataset, now: DateTime<Utc>, json: bool) -> anyhow::Result<()> {
    let raised = scan_rules(&dataset.brands, &dataset.rules, now);
    tracing::info!(raised = raised.len(), "alert rule scan complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&raised)?);
        return Ok(());
    }

    if raised.is_empty() {
        println!("no alert rules fired");
        return Ok(());
    }

    println!("{:<10}{:<18}{:<16}DETAILS", "PRIORITY", "KIND", "BRAND");
    for alert in &raised {
        println!(
            "{:<10}{:<18}{:<16}{}",
            alert.priority.to_string(),
            alert.kind.label(),
            alert.brand,
            alert.details
        );
    }

    Ok(())
}
