use slog::{Logger, debug};

/// Send a notification to a customer when a charge is made.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationService: Send + Sync {
    /// Send a charge notification for the given amount.
    ///
    /// Returns whether the notification was accepted for sending.
    fn send_charge_notification(&self, amount: i64) -> bool;
}

/// [NotificationService] implementation that prints the notification on the console.
pub struct ConsoleNotificationService {
    logger: Logger,
}

impl ConsoleNotificationService {
    /// `ConsoleNotificationService` factory
    pub fn new(logger: Logger) -> Self {
        Self {
            logger: logger.new(slog::o!("src" => "ConsoleNotificationService")),
        }
    }
}

impl NotificationService for ConsoleNotificationService {
    fn send_charge_notification(&self, amount: i64) -> bool {
        debug!(self.logger, "Sending charge notification"; "amount" => amount);
        println!("Sending charge notification");

        true
    }
}
