use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;

/// Shared per-minute weight budget for the exchange API.
///
/// Every call acquires its weight before going on the wire. Once the budget
/// for the current wall-clock minute is spent, callers sleep until the next
/// minute begins and try again.
#[derive(Clone)]
pub struct GlobalRateLimiter {
    inner: Arc<Mutex<MinuteBudget>>,
}

struct MinuteBudget {
    spent: u32,
    // The specific minute we are counting for, as minutes since the epoch
    minute_idx: u64,
    limit: u32,
}

impl GlobalRateLimiter {
    pub(crate) fn new(limit: u32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MinuteBudget {
                spent: 0,
                minute_idx: current_minute_idx(),
                limit,
            })),
        }
    }

    /// Acquires permission to spend `cost` weight.
    pub(crate) async fn acquire(&self, cost: u32, context: &str) {
        loop {
            let wait = {
                let mut budget = self.inner.lock().await;
                let now_idx = current_minute_idx();

                // Wall clock rolled into a new minute: budget resets
                if now_idx > budget.minute_idx {
                    budget.spent = 0;
                    budget.minute_idx = now_idx;
                }

                if budget.spent + cost <= budget.limit {
                    budget.spent += cost;
                    return;
                }

                // Saturated. Sleep until just past the next :00.
                let now_secs = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or(Duration::ZERO)
                    .as_secs();
                let into_minute = now_secs % 60;
                Duration::from_secs(60 - into_minute) + Duration::from_millis(100)
            };

            log::warn!(
                "[{}] API minute budget exhausted, waiting {:.1}s",
                context,
                wait.as_secs_f64()
            );

            tokio::time::sleep(wait).await;
        }
    }
}

fn current_minute_idx() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_secs()
        / 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_acquire_within_budget_does_not_block() {
        let limiter = GlobalRateLimiter::new(10);
        limiter.acquire(4, "A").await;
        limiter.acquire(4, "B").await;
        // 8 of 10 spent; a 2-weight call still fits.
        limiter.acquire(2, "C").await;
    }
}
