use std::io;
use std::net::SocketAddr;
use std::process::ExitCode;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tool_rental::api::{AppState, create_router};
use tool_rental::catalog::ToolCatalog;
use tool_rental::checkout::compute_agreement;
use tool_rental::config::ConfigLoader;
use tool_rental::error::RentalResult;
use tool_rental::models::RentalAgreement;
use tool_rental::report::{format_currency, parse_date};

mod cli;

use cli::Cli;
use cli::Commands;
use cli::prompt::Prompter;

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so the printed agreement stays clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn load_catalog(cli: &Cli) -> Result<ToolCatalog> {
    match &cli.catalog {
        Some(path) => {
            let loader = ConfigLoader::load(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
            info!(
                catalog = %loader.metadata().name,
                version = %loader.metadata().version,
                "Using catalog file"
            );
            Ok(loader.into_catalog())
        }
        None => Ok(ToolCatalog::standard()),
    }
}

fn run_checkout(
    catalog: &ToolCatalog,
    tool_code: Option<String>,
    rental_days: Option<i64>,
    discount_percentage: Option<i64>,
    checkout_date: Option<String>,
) -> Result<ExitCode> {
    println!("Welcome to the Tool POS system!");

    let agreement: RentalResult<RentalAgreement> =
        match (tool_code, rental_days, discount_percentage, checkout_date) {
            // Argument mode: any bad value ends the session.
            (Some(code), Some(days), Some(discount), Some(date)) => parse_date(&date)
                .and_then(|date| compute_agreement(catalog, &code, days, discount, date)),
            (tool_code, rental_days, discount_percentage, checkout_date) => {
                let stdin = io::stdin();
                Prompter::new(stdin.lock(), io::stdout()).complete_checkout(
                    catalog,
                    tool_code,
                    rental_days,
                    discount_percentage,
                    checkout_date,
                )?
            }
        };

    match agreement {
        Ok(agreement) => {
            info!(
                tool = %agreement.tool().code,
                final_charge = %agreement.final_charge(),
                "Agreement computed"
            );
            println!("\nHere is your rental agreement:\n{}", agreement.to_report());
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", err);
            println!("Invalid input provided. Goodbye!");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_tools(catalog: &ToolCatalog) -> Result<ExitCode> {
    println!(
        "{:<6} {:<12} {:<8} {:>8}  {:<8} {:<8}",
        "Code", "Type", "Brand", "Daily", "Weekend", "Holiday"
    );
    for tool in catalog.tools() {
        println!(
            "{:<6} {:<12} {:<8} {:>8}  {:<8} {:<8}",
            tool.code.to_string(),
            tool.tool_type.to_string(),
            tool.brand.to_string(),
            format_currency(tool.daily_charge),
            if tool.charge_weekends { "yes" } else { "no" },
            if tool.charge_holidays { "yes" } else { "no" },
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn run_serve(catalog: ToolCatalog, bind: SocketAddr, max_rental_days: u32) -> Result<ExitCode> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(bind)
            .await
            .with_context(|| format!("Failed to bind {}", bind))?;
        info!(
            address = %bind,
            tools = catalog.len(),
            max_rental_days,
            "Serving rental API"
        );
        let state = AppState::new(catalog).with_max_rental_days(max_rental_days);
        axum::serve(listener, create_router(state))
            .await
            .context("Server error")?;
        Ok::<_, eyre::Report>(ExitCode::SUCCESS)
    })
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let catalog = load_catalog(&cli)?;

    match cli.command {
        Commands::Checkout {
            tool_code,
            rental_days,
            discount_percentage,
            checkout_date,
        } => run_checkout(
            &catalog,
            tool_code,
            rental_days,
            discount_percentage,
            checkout_date,
        ),
        Commands::Tools => run_tools(&catalog),
        Commands::Serve {
            bind,
            max_rental_days,
        } => run_serve(catalog, bind, max_rental_days),
    }
}
