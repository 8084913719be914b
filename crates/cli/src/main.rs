use anyhow::{bail, Context, Result};
use catalog::{
    load_feed_inputs, mock_catalog, parser, CatalogIndex, LocalProfileStore, Product,
    ProfileStore, DEFAULT_MOCK_SIZE,
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use ranker::{FeedMode, FeedRanker, MatchSignals};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// SwipeFeed - personalized product feed
#[derive(Parser)]
#[command(name = "swipe-feed")]
#[command(about = "Personalized swipe feed from onboarding preferences and likes", long_about = None)]
struct Cli {
    /// Catalog JSON file. A seeded mock catalog is used when omitted.
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Directory holding the local profile (preferences and likes)
    #[arg(short, long, default_value = ".swipe-feed")]
    profile_dir: PathBuf,

    /// Seed for the mock catalog
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Number of products in the mock catalog
    #[arg(long, default_value_t = DEFAULT_MOCK_SIZE)]
    mock_size: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the personalized feed for the stored profile
    Feed {
        /// Number of products to show
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Show which signals let each product through
        #[arg(long)]
        explain: bool,

        /// Show the whole catalog if nothing matches
        #[arg(long)]
        fallback: bool,
    },

    /// Like a product (swipe right)
    Like {
        #[arg(long)]
        id: String,
    },

    /// Remove a product from the likes
    Unlike {
        #[arg(long)]
        id: String,
    },

    /// Set onboarding preferences, or print them when no flag is given
    Prefs {
        /// Comma-separated style tags
        #[arg(long, value_delimiter = ',')]
        styles: Option<Vec<String>>,

        /// Comma-separated color tags
        #[arg(long, value_delimiter = ',')]
        colors: Option<Vec<String>>,

        /// Comma-separated brand names
        #[arg(long, value_delimiter = ',')]
        brands: Option<Vec<String>>,

        /// Preferred size
        #[arg(long)]
        size: Option<String>,
    },

    /// Show catalog statistics
    Catalog,

    /// Write the mock catalog to a JSON file
    Mock {
        #[arg(long)]
        out: PathBuf,
    },

    /// Time repeated ranking calls
    Benchmark {
        /// Number of ranking calls
        #[arg(long, default_value = "1000")]
        iterations: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let store = LocalProfileStore::new(&cli.profile_dir);
    match &cli.catalog {
        Some(path) => info!("Catalog: {}", path.display()),
        None => info!("Catalog: mock ({} products, seed {})", cli.mock_size, cli.seed),
    }
    info!("Profile directory: {}", store.dir().display());

    match &cli.command {
        Commands::Feed {
            limit,
            explain,
            fallback,
        } => handle_feed(&cli, &store, *limit, *explain, *fallback)?,
        Commands::Like { id } => handle_like(&cli, &store, id)?,
        Commands::Unlike { id } => handle_unlike(&store, id)?,
        Commands::Prefs {
            styles,
            colors,
            brands,
            size,
        } => handle_prefs(&store, styles, colors, brands, size)?,
        Commands::Catalog => handle_catalog(&cli)?,
        Commands::Mock { out } => handle_mock(&cli, out)?,
        Commands::Benchmark { iterations } => handle_benchmark(&cli, &store, *iterations)?,
    }

    Ok(())
}

/// Load the catalog file, or generate the mock catalog.
fn load_catalog(path: Option<&Path>, seed: u64, mock_size: usize) -> catalog::Result<CatalogIndex> {
    match path {
        Some(path) => CatalogIndex::load_from_file(path),
        None => CatalogIndex::from_products(mock_catalog(mock_size, seed)),
    }
}

fn load_cli_catalog(cli: &Cli) -> Result<CatalogIndex> {
    load_catalog(cli.catalog.as_deref(), cli.seed, cli.mock_size).context("Failed to load catalog")
}

/// Handle the 'feed' command
fn handle_feed(
    cli: &Cli,
    store: &LocalProfileStore,
    limit: usize,
    explain: bool,
    fallback: bool,
) -> Result<()> {
    let path = cli.catalog.as_deref();
    let inputs = load_feed_inputs(
        || Ok(load_catalog(path, cli.seed, cli.mock_size)?.into_products()),
        store,
    )
    .context("Failed to load feed inputs")?;

    let ranker = FeedRanker::new();
    let mode = FeedMode::for_likes(&inputs.liked_ids);
    let feed = ranker.rank(&inputs.preferences, &inputs.liked_ids, &inputs.catalog);

    println!(
        "{}",
        format!(
            "Feed ({:?}, {} liked): {} of {} products",
            mode,
            inputs.liked_ids.len(),
            feed.len(),
            inputs.catalog.len()
        )
        .bold()
        .blue()
    );

    if feed.is_empty() {
        if !fallback {
            println!("{}", "No products available. Come back tomorrow!".yellow());
            return Ok(());
        }
        println!("{}", "Nothing matched, showing the full catalog".yellow());
        for (i, product) in inputs.catalog.iter().take(limit).enumerate() {
            print_product(i + 1, product, None);
        }
        return Ok(());
    }

    let signals = if explain {
        ranker.explain(&inputs.preferences, &inputs.liked_ids, &inputs.catalog)
    } else {
        Vec::new()
    };

    for (i, product) in feed.iter().take(limit).enumerate() {
        print_product(i + 1, product, signals.get(i));
    }
    Ok(())
}

fn print_product(rank: usize, product: &Product, signals: Option<&MatchSignals>) {
    let brand = product.brand_tag().unwrap_or("unknown brand");
    let tags: Vec<&str> = [product.style_tag(), product.color_tag()]
        .into_iter()
        .flatten()
        .collect();
    let price = product
        .price
        .map(|p| format!("${:.2}", p))
        .unwrap_or_else(|| "-".to_string());

    let name = if product.name.is_empty() {
        product.id.as_str()
    } else {
        product.name.as_str()
    };

    print!(
        "{:>3}. {} {} [{}] {}",
        rank,
        name.bold(),
        format!("({})", brand).cyan(),
        product.id,
        price
    );
    if !tags.is_empty() {
        print!(" {}", tags.join("/").dimmed());
    }
    if product.is_eco_friendly() {
        print!(" {}", "eco".green());
    }
    println!();

    if let Some(signals) = signals {
        println!("     {} {}", "why:".dimmed(), signals.describe());
    }
}

/// Handle the 'like' command
fn handle_like(cli: &Cli, store: &LocalProfileStore, id: &str) -> Result<()> {
    let index = load_cli_catalog(cli)?;
    let product = index
        .get_product(id)
        .ok_or_else(|| anyhow::anyhow!("Product {} not found in catalog", id))?;

    store
        .record_like(id)
        .with_context(|| format!("Failed to save like in {}", store.dir().display()))?;

    println!("{} Liked {} ({})", "♥".red(), product.id, product.name);
    Ok(())
}

/// Handle the 'unlike' command
fn handle_unlike(store: &LocalProfileStore, id: &str) -> Result<()> {
    let removed = store
        .remove_like(id)
        .with_context(|| format!("Failed to update likes in {}", store.dir().display()))?;

    if removed {
        println!("{} Removed {} from likes", "✓".green(), id);
    } else {
        println!("Product {} was not liked", id);
    }
    Ok(())
}

/// Handle the 'prefs' command
fn handle_prefs(
    store: &LocalProfileStore,
    styles: &Option<Vec<String>>,
    colors: &Option<Vec<String>>,
    brands: &Option<Vec<String>>,
    size: &Option<String>,
) -> Result<()> {
    let mut preferences = store
        .load_preferences()
        .context("Failed to read preferences")?;

    let updating = styles.is_some() || colors.is_some() || brands.is_some() || size.is_some();
    if updating {
        if let Some(styles) = styles {
            preferences.styles = clean_tags(styles);
        }
        if let Some(colors) = colors {
            preferences.colors = clean_tags(colors);
        }
        if let Some(brands) = brands {
            preferences.brands = clean_tags(brands);
        }
        if let Some(size) = size {
            preferences.size = size.trim().to_string();
        }
        store
            .save_preferences(&preferences)
            .context("Failed to save preferences")?;
        println!("{} Preferences saved", "✓".green());
    }

    let join = |set: &std::collections::BTreeSet<String>| {
        set.iter().cloned().collect::<Vec<_>>().join(", ")
    };
    println!("{}", "Preferences:".bold().blue());
    if preferences.is_empty() {
        println!(
            "{}",
            "No style, color or brand preferences set; the cold-start feed shows everything"
                .dimmed()
        );
    }
    println!("{}Styles: {}", "• ".green(), join(&preferences.styles));
    println!("{}Colors: {}", "• ".green(), join(&preferences.colors));
    println!("{}Brands: {}", "• ".green(), join(&preferences.brands));
    println!("{}Size: {}", "• ".green(), preferences.size);
    Ok(())
}

fn clean_tags(values: &[String]) -> std::collections::BTreeSet<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Handle the 'catalog' command
fn handle_catalog(cli: &Cli) -> Result<()> {
    let index = load_cli_catalog(cli)?;
    let stats = index.stats();

    println!("{}", format!("Catalog: {} products", stats.total).bold().blue());
    println!("{}Style/color tagged: {}", "• ".cyan(), stats.legacy_tagged);
    println!("{}Brand only: {}", "• ".cyan(), stats.brand_tagged);
    println!("{}Untagged: {}", "• ".cyan(), stats.untagged);
    println!("{}Eco-friendly: {}", "• ".cyan(), stats.eco_friendly);
    println!("Brands:");
    for (brand, count) in &stats.brands {
        println!("  - {}: {}", brand, count);
    }
    Ok(())
}

/// Handle the 'mock' command
fn handle_mock(cli: &Cli, out: &Path) -> Result<()> {
    if cli.catalog.is_some() {
        bail!("--catalog can't be combined with 'mock'");
    }
    let products = mock_catalog(cli.mock_size, cli.seed);
    parser::write_json(out, &products)
        .with_context(|| format!("Failed to write {}", out.display()))?;

    println!(
        "{} Wrote {} mock products (seed {}) to {}",
        "✓".green(),
        products.len(),
        cli.seed,
        out.display()
    );
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(cli: &Cli, store: &LocalProfileStore, iterations: usize) -> Result<()> {
    if iterations == 0 {
        bail!("iterations must be greater than 0");
    }
    let catalog = load_cli_catalog(cli)?.into_products();
    let preferences = store.load_preferences()?;
    let liked_ids = store.load_liked_ids()?;
    let ranker = FeedRanker::new();

    println!(
        "Running {} ranking calls over {} products...",
        iterations,
        catalog.len()
    );

    let mut latencies = Vec::with_capacity(iterations);
    let mut feed_len = 0;
    let total = Instant::now();
    for _ in 0..iterations {
        let start = Instant::now();
        feed_len = ranker.rank(&preferences, &liked_ids, &catalog).len();
        latencies.push(start.elapsed());
    }
    let elapsed = total.elapsed();

    latencies.sort();
    let percentile = |p: f64| latencies[((latencies.len() - 1) as f64 * p) as usize];

    println!("{}", "Benchmark results:".bold().blue());
    println!("{}Feed size: {}", "• ".cyan(), feed_len);
    println!("{}Total: {:?}", "• ".cyan(), elapsed);
    println!("{}Mean: {:?}", "• ".cyan(), elapsed.div_f64(iterations as f64));
    println!("{}p50: {:?}", "• ".cyan(), percentile(0.50));
    println!("{}p99: {:?}", "• ".cyan(), percentile(0.99));
    Ok(())
}
