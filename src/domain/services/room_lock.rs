use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::warn;

use crate::error::AppError;

/// Per-room serialization point. Booking creation and status transitions for
/// the same room hold its lock across the whole check-then-write sequence;
/// requests for different rooms never contend.
#[derive(Default)]
pub struct RoomLockRegistry {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl RoomLockRegistry {
    pub fn new() -> Self {
        Self { locks: DashMap::new() }
    }

    /// Acquires the lock for a room, waiting at most `timeout`. A timeout
    /// means no state was touched and the caller may safely retry.
    pub async fn acquire(
        &self,
        room_id: &str,
        timeout: Duration,
    ) -> Result<OwnedMutexGuard<()>, AppError> {
        let lock = self
            .locks
            .entry(room_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone();

        tokio::time::timeout(timeout, lock.lock_owned())
            .await
            .map_err(|_| {
                warn!("Lock acquisition timed out for room {}", room_id);
                AppError::Contention(format!(
                    "Room {} is being modified by another request, retry shortly",
                    room_id
                ))
            })
    }
}
