use crate::domain::models::{booking::Booking, room::RoomStatus};
use crate::domain::ports::{BookingFilter, BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, room_id, guest_id, guest_name, guest_email, guest_phone, check_in, check_out, status, additional_services, notes, total_price, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.room_id).bind(&booking.guest_id)
            .bind(&booking.guest_name).bind(&booking.guest_email).bind(&booking.guest_phone)
            .bind(booking.check_in).bind(booking.check_out).bind(booking.status)
            .bind(&booking.additional_services).bind(&booking.notes).bind(booking.total_price)
            .bind(booking.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, filter: &BookingFilter) -> Result<(Vec<Booking>, i64), AppError> {
        let offset = (filter.page - 1).max(0) * filter.limit;

        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings
             WHERE (?1 IS NULL OR status = ?1) AND (?2 IS NULL OR room_id = ?2)
             ORDER BY check_in DESC
             LIMIT ?3 OFFSET ?4"
        )
            .bind(filter.status).bind(&filter.room_id).bind(filter.limit).bind(offset)
            .fetch_all(&self.pool).await.map_err(AppError::Database)?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM bookings
             WHERE (?1 IS NULL OR status = ?1) AND (?2 IS NULL OR room_id = ?2)"
        )
            .bind(filter.status).bind(&filter.room_id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)?;

        Ok((bookings, total))
    }

    async fn list_active_by_room(&self, room_id: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE room_id = ? AND status IN ('confirmed', 'checked-in')"
        )
            .bind(room_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_booked_room_ids(&self, check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Result<Vec<String>, AppError> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT room_id FROM bookings
             WHERE status IN ('confirmed', 'checked-in') AND check_in < ? AND check_out > ?"
        )
            .bind(check_out).bind(check_in)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn has_active_for_room(&self, room_id: &str) -> Result<bool, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM bookings WHERE room_id = ? AND status IN ('confirmed', 'checked-in')"
        )
            .bind(room_id).fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok(count > 0)
    }

    async fn transition(&self, booking: &Booking, room_status: RoomStatus) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let updated = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = ? WHERE id = ? RETURNING *"
        )
            .bind(booking.status).bind(&booking.id)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        sqlx::query("UPDATE rooms SET status = ?, updated_at = ? WHERE id = ?")
            .bind(room_status).bind(Utc::now()).bind(&booking.room_id)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(updated)
    }
}
