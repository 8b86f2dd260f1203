use anyhow::{bail, Result};
use lesonpaw::api::BackendClient;
use lesonpaw::config::Config;
use lesonpaw::i18n::{keys, CatalogValidator, LanguageRegistry, Locale, Translator};
use lesonpaw::retry::RetryConfig;
use lesonpaw::views::blog::BlogPage;
use lesonpaw::views::LoadState;
use tracing::{debug, info, warn};

fn print_usage() {
    println!(
        r#"
LesonPaw client core

USAGE:
    lesonpaw <COMMAND>

COMMANDS:
    locales                    List shipped locales
    translate <locale> <key>.. Resolve keys in a locale (falls back to English)
    check                      Validate the translation catalog
    blogs [search]             Fetch blog posts from the backend

ENVIRONMENT VARIABLES (for 'blogs'):
    LESONPAW_API_URL           Backend base URL (required)
    IDENTITY_API_KEY           Identity provider key (required)
    PAYMENT_PUBLISHABLE_KEY    Payment gateway publishable key (required)
    DEFAULT_LOCALE             Locale for labels (default: en)
    REQUEST_TIMEOUT_SECS       HTTP timeout (default: 15)

EXAMPLES:
    lesonpaw translate ht signup home alreadyBooked
    lesonpaw blogs tips
"#
    );
}

/// Log catalog gaps once at startup; they are not fatal.
fn log_catalog_health(registry: &LanguageRegistry) {
    for (code, report) in CatalogValidator::validate_registry(registry) {
        if report.has_errors() {
            warn!("Locale '{}' has {} catalog errors", code, report.errors.len());
        }
        if !report.missing_keys.is_empty() {
            debug!(
                "Locale '{}' falls back to the default for {} keys",
                code,
                report.missing_keys.len()
            );
        }
    }
}

fn locales_command() -> Result<()> {
    let translator = Translator::shipped();
    for locale in translator.registry().list_all() {
        let marker = if locale.is_default { " (default)" } else { "" };
        println!("{} {}  {}{}", locale.glyph, locale.code, locale.name, marker);
    }
    Ok(())
}

fn translate_command(args: &[String]) -> Result<()> {
    let Some((code, keys)) = args.split_first() else {
        bail!("Usage: lesonpaw translate <locale> <key>...");
    };
    if keys.is_empty() {
        bail!("No keys given to translate");
    }

    let locale = Locale::from_code(code)?;
    let translator = Translator::shipped();
    translator.set_active_locale(locale.code());

    for key in keys {
        println!("{} = {}", key, translator.resolve(key));
    }
    info!("{}", translator.metrics().report().format());
    Ok(())
}

fn check_command() -> Result<()> {
    let registry = LanguageRegistry::get();
    let mut failed = false;

    for (code, report) in CatalogValidator::validate_registry(registry) {
        if report.is_clean() && report.missing_keys.is_empty() {
            println!("✓ {}: clean", code);
            continue;
        }
        println!(
            "{} {}: {} errors, {} warnings, {} keys via fallback",
            if report.has_errors() { "✗" } else { "!" },
            code,
            report.errors.len(),
            report.warnings.len(),
            report.missing_keys.len()
        );
        for error in &report.errors {
            println!("    error: {}", error);
        }
        for warning in &report.warnings {
            println!("    warning: {}", warning);
        }
        failed |= report.has_errors();
    }

    if failed {
        bail!("Catalog validation failed");
    }
    Ok(())
}

async fn blogs_command(search: Option<&str>) -> Result<()> {
    let config = Config::from_env()?;
    let translator = Translator::with_initial(LanguageRegistry::get(), &config.default_locale);
    let backend = BackendClient::new(config.http_client()?, &config.api_base_url)
        .with_retry(RetryConfig::page_load());

    let mut page = BlogPage::new();
    page.load(&backend, &translator).await;
    if let Some(query) = search {
        page.set_search(query);
    }

    match page.state() {
        LoadState::Failed(message) => bail!("{}", message),
        LoadState::Loading => bail!("Blog posts did not load"),
        LoadState::Ready(_) => {}
    }

    println!("\n{}", translator.resolve(keys::BLOG));
    println!("Categories: {}", page.categories().join(", "));
    for post in page.visible() {
        println!(
            "  [{}] {}",
            post.category.as_deref().unwrap_or("-"),
            post.title.as_deref().unwrap_or("(untitled)")
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lesonpaw=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    log_catalog_health(LanguageRegistry::get());

    let command = &args[1];
    match command.as_str() {
        "locales" => locales_command(),
        "translate" => translate_command(&args[2..]),
        "check" => check_command(),
        "blogs" => blogs_command(args.get(2).map(String::as_str)).await,
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            std::process::exit(1);
        }
    }
}
