use std::sync::Arc;

use slog::{Logger, debug};

use crate::StdResult;
use crate::notification::NotificationService;

/// Coordinate sending a charge notification when a customer is charged.
///
/// The notification capability is injected and shared with the caller so
/// tests can substitute a recording mock for the real console sender.
pub struct BillingService {
    notification_service: Arc<dyn NotificationService>,
    logger: Logger,
}

impl BillingService {
    /// `BillingService` factory
    pub fn new(notification_service: Arc<dyn NotificationService>, logger: Logger) -> Self {
        Self {
            notification_service,
            logger: logger.new(slog::o!("src" => "BillingService")),
        }
    }

    /// Charge a customer for the given amount.
    ///
    /// Sends exactly one charge notification carrying the same amount. The
    /// capability's acceptance flag is logged but not propagated: a rejected
    /// notification still completes the charge.
    pub fn charge_customer(&self, amount: i64) -> StdResult<()> {
        let accepted = self.notification_service.send_charge_notification(amount);
        debug!(
            self.logger, "Charge notification sent";
            "amount" => amount, "accepted" => accepted
        );
        println!("Charging customer for the value of {amount}");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use crate::notification::MockNotificationService;
    use crate::test_tools::TestLogger;

    use super::*;

    fn billing_service_with_mock(
        mock_config: impl FnOnce(&mut MockNotificationService),
    ) -> BillingService {
        let mut notification_service = MockNotificationService::new();
        mock_config(&mut notification_service);

        BillingService::new(Arc::new(notification_service), TestLogger::stdout())
    }

    #[test]
    fn charge_customer_sends_exactly_one_notification_with_the_same_amount() {
        let service = billing_service_with_mock(|mock| {
            mock.expect_send_charge_notification()
                .with(eq(100))
                .times(1)
                .returning(|_| true);
        });

        service
            .charge_customer(100)
            .expect("charging a customer should not fail");
    }

    #[test]
    fn charge_customer_succeeds_even_when_the_notification_is_rejected() {
        let service = billing_service_with_mock(|mock| {
            mock.expect_send_charge_notification()
                .with(eq(42))
                .times(1)
                .returning(|_| false);
        });

        service
            .charge_customer(42)
            .expect("a rejected notification should not fail the charge");
    }

    #[test]
    fn charge_customer_passes_through_arbitrary_amounts() {
        for amount in [0, 1, -5, i64::MAX] {
            let service = billing_service_with_mock(|mock| {
                mock.expect_send_charge_notification()
                    .with(eq(amount))
                    .times(1)
                    .returning(|_| true);
            });

            service.charge_customer(amount).unwrap();
        }
    }
}
