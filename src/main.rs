use paperdesk::adapter::SessionAuthenticator;
use paperdesk::config::Config;
use paperdesk::domain::Side;
use paperdesk::error::{ConfigError, Error};
use paperdesk::service::{AccountService, OpenOrder};
use rust_decimal_macros::dec;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let config = match Config::load("paperdesk.toml") {
        Ok(c) => c,
        // No config file is fine: the engine runs on defaults.
        Err(Error::Config(ConfigError::ReadFile(_))) => Config::default(),
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!("paperdesk starting");

    if let Err(e) = run(&config).await {
        error!(error = %e, "Fatal error");
        std::process::exit(1);
    }

    info!("paperdesk stopped");
}

/// Walk a scripted session through the engine, standing in for the HTTP
/// surface this crate deliberately does not ship.
async fn run(config: &Config) -> anyhow::Result<()> {
    let desk = AccountService::new(SessionAuthenticator::new(config.session.ttl_hours));

    let registration = desk.register("Ana", "ana@x.com", "demo-secret").await?;
    let token = desk.authenticate("ana@x.com", "demo-secret").await?;
    let account_id = desk.resolve(&token).await?;
    info!(%account_id, balance = %registration.starting_balance, "registered");

    let opened = desk.open_position(
        &account_id,
        OpenOrder {
            side: Side::Buy,
            symbol: "EURUSD".into(),
            volume: dec!(2),
            entry_price: dec!(1.10),
            stop_loss: Some(dec!(1.05)),
            take_profit: Some(dec!(1.25)),
        },
    )?;

    let closed = desk.close_position(&account_id, opened.trade.id(), dec!(1.20))?;
    info!(pnl = %closed.realized_pnl, balance = %closed.new_balance, "settled");

    let info = desk.account_info(&account_id)?;
    println!(
        "{} <{}>: cash {} / equity {} / {} open, {} closed",
        info.name,
        info.email,
        info.cash_balance,
        info.equity,
        info.open_position_count,
        desk.list_history(&account_id)?.len()
    );

    desk.logout(&token).await?;
    Ok(())
}
