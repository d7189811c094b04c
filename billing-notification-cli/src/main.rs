//! # Billing Notification CLI
//!
//! Console entry point wiring the concrete console notification capability
//! into the billing service and charging a customer once.

use std::sync::Arc;

use clap::Parser;
use slog::{Drain, Level, Logger, debug};

use billing_notification::{BillingService, ConsoleNotificationService, StdResult};

/// Amount charged by the demonstration run.
const DEMO_CHARGE_AMOUNT: i64 = 100;

/// Possible command line options and arguments
#[derive(Debug, Parser)]
#[clap(name = "billing-notification")]
#[clap(about = "This program charges a customer and sends the matching charge notification.", long_about = None)]
#[command(version)]
pub struct CliArguments {
    /// Verbosity level (-v=warning, -vv=info, -vvv=debug).
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode, no log will be emitted.
    #[clap(short, long, default_value_t = false)]
    quiet: bool,
}

impl CliArguments {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::Error,
            1 => Level::Warning,
            2 => Level::Info,
            3 => Level::Debug,
            _ => Level::Trace,
        }
    }

    fn build_logger(&self) -> Logger {
        if self.quiet {
            return Logger::root(slog::Discard, slog::o!());
        }

        let decorator = slog_term::TermDecorator::new().stderr().build();
        let drain = slog_term::CompactFormat::new(decorator).build().fuse();
        let drain = slog::LevelFilter::new(drain, self.log_level()).fuse();
        let drain = slog_async::Async::new(drain).build().fuse();

        Logger::root(Arc::new(drain), slog::o!())
    }
}

fn main() -> StdResult<()> {
    let args = CliArguments::parse();
    let logger = args.build_logger();
    debug!(
        logger,
        "Billing notification CLI version: {}",
        env!("CARGO_PKG_VERSION")
    );

    println!("Charge billing demonstration with a substitutable notification service");

    let notification_service = Arc::new(ConsoleNotificationService::new(logger.clone()));
    let billing_service = BillingService::new(notification_service, logger);
    billing_service.charge_customer(DEMO_CHARGE_AMOUNT)?;

    Ok(())
}
