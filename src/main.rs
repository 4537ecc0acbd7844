use chart_risk::cli::{Cli, Commands};
use chart_risk::config::Config;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            Config::from_toml(include_str!("../config.toml.example"))?
        }
    };

    // Initialize telemetry
    chart_risk::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Anchor(args) => args.execute(&config)?,
        Commands::TakeProfit(args) => args.execute()?,
        Commands::Size(args) => args.execute(&config)?,
        Commands::Market(args) => args.execute(&config)?,
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Risk: loss rate={}%, threshold={} pips",
                config.risk.allowable_loss_rate, config.risk.threshold_pips
            );
            println!(
                "  Logging: {} ({:?})",
                config.telemetry.log_level, config.telemetry.log_format
            );
            for instrument in &config.instruments {
                println!(
                    "  {}: pip={} pip_value={} digits={} volume={}..{} step {}",
                    instrument.symbol,
                    instrument.pip_size,
                    instrument.pip_value,
                    instrument.digits,
                    instrument.volume_min,
                    instrument.volume_max,
                    instrument.volume_step
                );
            }
        }
    }

    Ok(())
}
