//! One-shot "wake me at the next occurrence" adapter over the search.

use std::time::Duration;

use jiff::Zoned;

use crate::error::QueryError;
use crate::query::TimeQuery;

/// Margin added past the computed delay so the wake lands strictly
/// after the target minute boundary despite timer jitter.
const WAKE_MARGIN: Duration = Duration::from_secs(10);

impl TimeQuery {
    /// Sleep until the next occurrence after now, then resolve with it.
    ///
    /// Fires once, a ten second margin past the target minute boundary.
    /// Dropping the future cancels the timer.
    pub async fn wait_next(&self) -> Result<Zoned, QueryError> {
        let now = Zoned::now();
        let target = self.next_from(&now)?;
        let delay = Duration::try_from(target.duration_since(&now)).unwrap_or(Duration::ZERO);
        tokio::time::sleep(delay + WAKE_MARGIN).await;
        Ok(target)
    }
}
