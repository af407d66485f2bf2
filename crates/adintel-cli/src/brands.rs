//! Brand discovery command handlers.

use adintel_core::{AppConfig, Dataset};
use adintel_engine::format::{format_currency, format_growth, format_spend_compact};
use adintel_engine::{
    brand_by_key, brand_facets, brand_profile, discover, overview, Clock, DiscoveryState,
    FacetCount, FilterCriteria, GrowthRange, SortKey, SpendRange, Watchlist,
};
use clap::{Args, Subcommand};
use rust_decimal::Decimal;

/// Arguments for `brands`.
#[derive(Debug, Args)]
pub struct BrandsArgs {
    #[command(subcommand)]
    pub command: Option<BrandsCommands>,
    /// Case-insensitive search over name, industry and description
    #[arg(long, default_value = "")]
    pub query: String,
    /// Keep brands in this industry (repeatable)
    #[arg(long = "industry", value_name = "INDUSTRY")]
    pub industries: Vec<String>,
    /// Keep brands advertising on this platform (repeatable)
    #[arg(long = "platform", value_name = "PLATFORM")]
    pub platforms: Vec<String>,
    /// Keep brands active in this region (repeatable)
    #[arg(long = "geo", value_name = "REGION")]
    pub geography: Vec<String>,
    /// Minimum monthly spend in USD
    #[arg(long)]
    pub min_spend: Option<Decimal>,
    /// Maximum monthly spend in USD
    #[arg(long)]
    pub max_spend: Option<Decimal>,
    /// Minimum growth rate in percent
    #[arg(long, allow_hyphen_values = true)]
    pub min_growth: Option<f64>,
    /// Maximum growth rate in percent
    #[arg(long, allow_hyphen_values = true)]
    pub max_growth: Option<f64>,
    /// Sort order: spend, growth, alphabetical, recent
    #[arg(long, default_value = "spend")]
    pub sort: SortKey,
    /// Number of pages to reveal
    #[arg(long, default_value_t = 1)]
    pub pages: usize,
    /// Flip the watched flag of a brand before listing (repeatable)
    #[arg(long = "toggle-watch", value_name = "ID")]
    pub toggle_watch: Vec<u32>,
    /// Show only watched brands
    #[arg(long)]
    pub watched: bool,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum BrandsCommands {
    /// Show one brand's profile with its spend rankings
    Show {
        /// Brand id, slug (e.g. warby-parker) or name
        #[arg(value_name = "ID|SLUG")]
        key: String,
        /// Print the profile export as JSON
        #[arg(long)]
        json: bool,
    },
}

impl BrandsArgs {
    /// Filter criteria described by the flags. Unset range bounds keep their
    /// slider defaults.
    pub(crate) fn criteria(&self) -> FilterCriteria {
        let spend = SpendRange::default();
        let growth = GrowthRange::default();
        FilterCriteria {
            industries: self.industries.iter().cloned().collect(),
            platforms: self.platforms.iter().cloned().collect(),
            geography: self.geography.iter().cloned().collect(),
            spend_range: SpendRange::new(
                self.min_spend.unwrap_or(spend.min),
                self.max_spend.unwrap_or(spend.max),
            ),
            growth_range: GrowthRange::new(
                self.min_growth.unwrap_or(growth.min),
                self.max_growth.unwrap_or(growth.max),
            ),
        }
    }
}

/// Dispatch `brands`: list by default, or show a single profile.
///
/// # Errors
///
/// Returns an error if the selected handler fails.
pub(crate) fn run_brands(
    dataset: &Dataset,
    config: &AppConfig,
    clock: &dyn Clock,
    args: &BrandsArgs,
) -> anyhow::Result<()> {
    match &args.command {
        Some(BrandsCommands::Show { key, json }) => run_brands_show(dataset, clock, key, *json),
        None => run_brands_list(dataset, config, args),
    }
}

/// List brands matching the search and filter flags.
///
/// # Errors
///
/// Returns an error if `--toggle-watch` names an unknown brand or JSON
/// serialization fails.
fn run_brands_list(
    dataset: &Dataset,
    config: &AppConfig,
    args: &BrandsArgs,
) -> anyhow::Result<()> {
    let mut watchlist = Watchlist::from_records(&dataset.brands);
    for &id in &args.toggle_watch {
        let brand = dataset
            .brands
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| anyhow::anyhow!("no brand with id {id}"))?;
        let watched = watchlist.toggle(id);
        println!(
            "{} {}",
            brand.name,
            if watched { "added to watchlist" } else { "removed from watchlist" }
        );
    }

    let mut records = watchlist.apply(&dataset.brands);
    if args.watched {
        records.retain(|b| b.is_watched);
    }

    let mut state = DiscoveryState::new(config.page_size);
    state.query.clone_from(&args.query);
    state.criteria = args.criteria();
    state.sort = args.sort;
    state.pagination.pages_loaded = args.pages.max(1);

    let view = discover(&records, &state);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let chips = state.criteria.chips();
    if !chips.is_empty() {
        let labels: Vec<String> = chips.iter().map(adintel_engine::FilterChip::label).collect();
        println!(
            "Active filters ({}): {}",
            view.active_filter_count,
            labels.join(", ")
        );
    }

    if view.visible.is_empty() {
        println!("no brands match the current search and filters");
        return Ok(());
    }

    println!(
        "{:<5}{:<18}{:<20}{:>9}{:>9}  {:<12}{:<7}PLATFORMS",
        "ID", "BRAND", "INDUSTRY", "SPEND", "GROWTH", "UPDATED", "WATCH"
    );
    for brand in &view.visible {
        let updated = brand
            .last_updated_at()
            .map_or_else(|| "\u{2014}".to_string(), |d| d.format("%Y-%m-%d").to_string());
        println!(
            "{:<5}{:<18}{:<20}{:>9}{:>9}  {:<12}{:<7}{}",
            brand.id,
            brand.name,
            brand.industry,
            format_spend_compact(brand.monthly_spend),
            format_growth(brand.growth_rate),
            updated,
            if brand.is_watched { "yes" } else { "" },
            brand.platforms.join(", ")
        );
    }

    println!();
    print!(
        "Showing {} of {} {} sorted by {}",
        view.visible.len(),
        view.total_matching,
        if view.total_matching == 1 { "brand" } else { "brands" },
        state.sort.label()
    );
    if view.remaining > 0 {
        print!(
            "; {} more (use --pages {})",
            view.remaining,
            state.pagination.pages_loaded + 1
        );
    }
    println!();

    Ok(())
}

/// Print one brand's profile.
///
/// # Errors
///
/// Returns an error if no brand matches `key` or JSON serialization fails.
fn run_brands_show(
    dataset: &Dataset,
    clock: &dyn Clock,
    key: &str,
    json: bool,
) -> anyhow::Result<()> {
    let brand = brand_by_key(&dataset.brands, key)
        .ok_or_else(|| anyhow::anyhow!("no brand matches '{key}'"))?;
    let profile = brand_profile(&dataset.brands, brand, clock.now());

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    let dash = || "\u{2014}".to_string();
    let join_or_dash = |values: &[String]| {
        if values.is_empty() {
            dash()
        } else {
            values.join(", ")
        }
    };

    println!("{} ({})", brand.name, profile.slug);
    if !brand.description.is_empty() {
        println!("{}", brand.description);
    }
    println!();
    println!("{:<18}{}", "Industry", brand.industry);
    println!("{:<18}{}", "Monthly spend", format_currency(brand.monthly_spend));
    println!("{:<18}{}", "Annual spend", format_currency(profile.annual_spend));
    println!("{:<18}{}", "Growth", format_growth(brand.growth_rate));
    println!(
        "{:<18}#{} of {}",
        "Spend rank", profile.spend_rank, profile.tracked_brands
    );
    println!(
        "{:<18}#{} of {}",
        "Industry rank", profile.industry_rank, profile.industry_brands
    );
    println!("{:<18}{}", "Platforms", join_or_dash(&brand.platforms));
    println!("{:<18}{}", "Geography", join_or_dash(&brand.geography));
    println!("{:<18}{}", "Campaigns", join_or_dash(&brand.campaign_types));
    println!(
        "{:<18}{}",
        "Last updated",
        brand
            .last_updated_at()
            .map_or_else(dash, |d| d.format("%Y-%m-%d %H:%M UTC").to_string())
    );
    println!(
        "{:<18}{}",
        "Watched",
        if brand.is_watched { "yes" } else { "no" }
    );
    Ok(())
}

/// Print the dashboard headline figures and the top spenders.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn run_overview(dataset: &Dataset, top: usize, json: bool) -> anyhow::Result<()> {
    let summary = overview(&dataset.brands, top);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{:<18}{}", "Total spend", format_currency(summary.total_spend));
    println!("{:<18}{}", "Tracked brands", summary.brand_count);
    println!("{:<18}{}", "Watched brands", summary.watched_count);
    println!("{:<18}{}", "Avg. spend", format_currency(summary.average_spend));
    println!("{:<18}{}", "Avg. growth", format_growth(summary.average_growth));

    if summary.top_by_spend.is_empty() {
        return Ok(());
    }

    println!();
    println!("{:<4}{:<18}{:<20}{:>9}{:>9}", "#", "BRAND", "INDUSTRY", "SPEND", "GROWTH");
    for (rank, brand) in (1..).zip(&summary.top_by_spend) {
        println!(
            "{:<4}{:<18}{:<20}{:>9}{:>9}",
            rank,
            brand.name,
            brand.industry,
            format_spend_compact(brand.monthly_spend),
            format_growth(brand.growth_rate)
        );
    }
    Ok(())
}

/// Print every filter value with its brand count.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn run_facets(dataset: &Dataset, json: bool) -> anyhow::Result<()> {
    let facets = brand_facets(&dataset.brands);

    if json {
        println!("{}", serde_json::to_string_pretty(&facets)?);
        return Ok(());
    }

    print_facet("INDUSTRY", &facets.industries);
    print_facet("PLATFORM", &facets.platforms);
    print_facet("GEOGRAPHY", &facets.geography);
    print_facet("CAMPAIGN TYPE", &facets.campaign_types);
    Ok(())
}

fn print_facet(title: &str, values: &[FacetCount]) {
    println!("{title:<24}BRANDS");
    for facet in values {
        println!("  {:<22}{}", facet.value, facet.count);
    }
    println!();
}
