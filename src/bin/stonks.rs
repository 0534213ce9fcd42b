use stonks::config::Config;
use stonks::notifiers::base::Notifier;
use stonks::notifiers::console::ConsoleNotifier;
use stonks::notifiers::discord::DiscordWebhook;
use stonks::scheduler;
use stonks::services::market_update::MarketUpdateJob;
use stonks::sources::alpha_vantage::AlphaVantageSource;

use anyhow::Context;
use clap::{App, Arg, SubCommand};
use log::info;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    // Initialize logger
    env_logger::init();

    let matches = App::new("stonks")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Posts a weekday market-close stock summary to a Discord webhook")
        .subcommand(
            SubCommand::with_name("run")
                .about("Run the market update once, now")
                .arg(
                    Arg::with_name("dry-run")
                        .long("dry-run")
                        .help("Print the webhook payload instead of posting it")
                        .takes_value(false),
                ),
        )
        .subcommand(
            SubCommand::with_name("schedule")
                .about("Run on the weekday market-close schedule until interrupted (default)"),
        )
        .get_matches();

    // Both values are required before anything touches the network.
    let config = Config::from_env().context("loading configuration")?;

    let source = Arc::new(AlphaVantageSource::new(&config)?);

    if let Some(matches) = matches.subcommand_matches("run") {
        let notifier: Arc<dyn Notifier + Send + Sync> = if matches.is_present("dry-run") {
            info!("Dry run: payload will be printed, not posted");
            Arc::new(ConsoleNotifier)
        } else {
            Arc::new(DiscordWebhook::new(&config.webhook_url)?)
        };

        let job = MarketUpdateJob::new(config, source, notifier);
        let report = job.run().await.context("market update failed")?;
        info!("{:?}", report);
    } else {
        let notifier = Arc::new(DiscordWebhook::new(&config.webhook_url)?);
        let job = Arc::new(MarketUpdateJob::new(config, source, notifier));
        scheduler::run_until_shutdown(job).await.context("scheduler stopped")?;
    }

    Ok(())
}
