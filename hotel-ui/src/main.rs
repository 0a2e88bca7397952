use clap::Parser;
use hotel_ui::{App, Args, logger, shell};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let _guard = logger::init_logger(&args.log_level, args.log_json, args.log_dir.as_deref())?;

    let config = args.client_config();
    tracing::info!(api_url = %config.base_url, timeout = config.timeout, "Starting hotel-ui");

    let api = config.build_api()?;
    let app = App::new(api)?;

    shell::run(app, &args.path).await?;

    tracing::info!("hotel-ui stopped");
    Ok(())
}
