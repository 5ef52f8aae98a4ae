use warung::{App, Config, print_banner, setup_environment};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    setup_environment(&config);

    print_banner();
    tracing::info!(restaurant = %config.restaurant_name, "🍛 Warung console starting...");

    let mut app = App::bootstrap(config);
    app.run()?;

    tracing::info!("Warung console shut down");
    Ok(())
}
