use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tracing::info;

const SECS_PER_DAY: u64 = 86_400;

/// Usage snapshot reported by `GET /api/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaStatus {
    pub request_count: u32,
    /// `0` means unlimited.
    pub daily_limit: u32,
    pub remaining_requests: Option<u32>,
}

/// Gate for upstream quote requests.
pub trait RequestCounter: Send + Sync {
    /// Take one request permit. Returns `false` when the limit is reached.
    fn try_acquire(&self) -> bool;

    fn status(&self) -> QuotaStatus;
}

#[derive(Debug, Default)]
struct Usage {
    day: u64,
    count: u32,
}

/// Per-UTC-day request counter. The count resets on the first request of a new day.
#[derive(Debug)]
pub struct DailyQuota {
    limit: u32,
    usage: Mutex<Usage>,
}

impl DailyQuota {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            usage: Mutex::new(Usage {
                day: current_day(),
                count: 0,
            }),
        }
    }

    pub fn unlimited() -> Self {
        Self::new(0)
    }

    fn try_acquire_on(&self, day: u64) -> bool {
        let mut usage = self.usage.lock().unwrap_or_else(|e| e.into_inner());
        if usage.day != day {
            info!(previous = usage.count, "daily quote request count reset");
            *usage = Usage { day, count: 0 };
        }
        if self.limit != 0 && usage.count >= self.limit {
            return false;
        }
        usage.count += 1;
        true
    }

    fn status_on(&self, day: u64) -> QuotaStatus {
        let usage = self.usage.lock().unwrap_or_else(|e| e.into_inner());
        let request_count = if usage.day == day { usage.count } else { 0 };
        QuotaStatus {
            request_count,
            daily_limit: self.limit,
            remaining_requests: (self.limit != 0)
                .then(|| self.limit.saturating_sub(request_count)),
        }
    }
}

impl RequestCounter for DailyQuota {
    fn try_acquire(&self) -> bool {
        self.try_acquire_on(current_day())
    }

    fn status(&self) -> QuotaStatus {
        self.status_on(current_day())
    }
}

fn current_day() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() / SECS_PER_DAY)
        .unwrap_or(0)
}
