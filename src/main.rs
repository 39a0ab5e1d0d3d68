use apex_garage::{
    advisor::GeminiClient,
    config::{self, credentials},
    core::report::{format_clp, format_logbook_entry, format_progress_bar},
    errors::Result,
    store::{Shop, ask_advisor_shared},
};
use dotenvy::dotenv;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load configuration and seed the shop
    let app_config = config::load_default_config()?;
    let shop = Shop::from_config(&app_config)?;

    // 4. Log the dashboard
    let summary = shop.dashboard();
    for card in &summary.jobs {
        info!(
            bay = %card.bay,
            customer = card.customer_name.as_deref().unwrap_or("-"),
            vehicle = %card.vehicle,
            progress = %format_progress_bar(card.progress, None),
            "Job"
        );
    }
    info!(
        in_progress = summary.jobs_in_progress,
        finished = summary.jobs_finished,
        customers = summary.customer_count,
        balance = %format_clp(summary.totals.balance),
        "Dashboard"
    );
    for item in shop.logbook() {
        debug!("Logbook: {}", format_logbook_entry(item));
    }

    // 5. Optionally forward a question to the advisor
    let question = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if question.trim().is_empty() {
        return Ok(());
    }
    let api_key = match credentials::advisor_api_key() {
        Ok(key) => key,
        Err(e) => {
            warn!("{e}; set {} to ask the advisor", credentials::API_KEY_VAR);
            return Ok(());
        }
    };

    let client = GeminiClient::new(&app_config.advisor, api_key)?;
    let shop = shop.into_shared();
    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    if ask_advisor_shared(&shop, &client, &question, &cancel).await {
        if let Some(reply) = shop.read().await.advisor().transcript().last() {
            println!("{}", reply.text);
        }
    }
    Ok(())
}
