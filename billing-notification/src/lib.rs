#![warn(missing_docs)]

//! Charge billing with a substitutable notification capability.
//!
//! Provide:
//! - The [NotificationService] capability trait and its console-printing
//!   implementation [ConsoleNotificationService].
//! - The [BillingService] that coordinates charging a customer and sending
//!   the matching notification.

mod billing;
mod notification;

pub use billing::BillingService;
pub use notification::{ConsoleNotificationService, NotificationService};

/// Generic result type
pub type StdResult<T> = anyhow::Result<T>;
