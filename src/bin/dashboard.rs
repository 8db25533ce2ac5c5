use std::path::Path;

use clap::Parser;

use transaction_dashboard::{
    Config, Error, RefreshScheduler, ReportOptions, build_report, load_snapshot, setup_logging,
    shutdown_signal,
};

/// Print a dashboard report for a snapshot, once or on every refresh.
#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::parse();
    setup_logging(&config.log_level);

    let options = config
        .report_options()
        .inspect_err(|error| tracing::error!("Invalid configuration: {error}"))?;

    if !config.watch {
        return print_report(&config.snapshot, &options);
    }

    let scheduler = RefreshScheduler::new(config.refresh_period())
        .inspect_err(|error| tracing::error!("Invalid configuration: {error}"))?;

    #[cfg(unix)]
    tokio::spawn(refresh_on_hangup(scheduler.manual_trigger()));

    tracing::info!(
        "Watching {} and refreshing every {} seconds",
        config.snapshot.display(),
        config.refresh_secs
    );

    let refresh_count = scheduler
        .run(|| print_report(&config.snapshot, &options), shutdown_signal())
        .await;

    tracing::info!("Shut down after {refresh_count} refreshes");

    Ok(())
}

fn print_report(snapshot_path: &Path, options: &ReportOptions) -> Result<(), Error> {
    let snapshot = load_snapshot(snapshot_path)?;
    let report = build_report(&snapshot.transactions, options).with_page(snapshot.page_info());

    println!("{}", report.to_json()?);

    Ok(())
}

/// Request a refresh whenever the process receives SIGHUP.
#[cfg(unix)]
async fn refresh_on_hangup(trigger: transaction_dashboard::RefreshTrigger) {
    use tokio::signal::unix::{SignalKind, signal};

    let mut hangup = match signal(SignalKind::hangup()) {
        Ok(hangup) => hangup,
        Err(error) => {
            tracing::warn!(
                "Could not listen for the hangup signal, manual refresh is disabled: {error}"
            );
            return;
        }
    };

    while hangup.recv().await.is_some() {
        tracing::info!("Received hangup signal, refreshing.");

        if !trigger.request() {
            break;
        }
    }
}
