use crate::domain::models::room::{Room, RoomStatus, RoomType};
use crate::domain::ports::RoomRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqliteRoomRepo {
    pool: SqlitePool,
}

impl SqliteRoomRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for SqliteRoomRepo {
    async fn create(&self, room: &Room) -> Result<Room, AppError> {
        sqlx::query_as::<_, Room>(
            "INSERT INTO rooms (id, room_number, room_type, price_per_night, amenities, status, images, floor, max_occupancy, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&room.id).bind(&room.room_number).bind(room.room_type).bind(room.price_per_night)
            .bind(&room.amenities).bind(room.status).bind(&room.images).bind(room.floor)
            .bind(room.max_occupancy).bind(room.created_at).bind(room.updated_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Room>, AppError> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_number(&self, room_number: &str) -> Result<Option<Room>, AppError> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE room_number = ?")
            .bind(room_number).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, status: Option<RoomStatus>, room_type: Option<RoomType>) -> Result<Vec<Room>, AppError> {
        sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms
             WHERE (?1 IS NULL OR status = ?1) AND (?2 IS NULL OR room_type = ?2)
             ORDER BY room_number ASC"
        )
            .bind(status).bind(room_type)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_available(&self, room_type: Option<RoomType>) -> Result<Vec<Room>, AppError> {
        sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms
             WHERE status = 'available' AND (?1 IS NULL OR room_type = ?1)
             ORDER BY price_per_night ASC"
        )
            .bind(room_type)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, room: &Room) -> Result<Room, AppError> {
        sqlx::query_as::<_, Room>(
            "UPDATE rooms SET room_number=?, room_type=?, price_per_night=?, amenities=?, images=?, floor=?, max_occupancy=?, updated_at=?
             WHERE id=?
             RETURNING *"
        )
            .bind(&room.room_number).bind(room.room_type).bind(room.price_per_night)
            .bind(&room.amenities).bind(&room.images).bind(room.floor).bind(room.max_occupancy)
            .bind(Utc::now()).bind(&room.id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Room not found".into()))
    }

    async fn update_status(&self, id: &str, status: RoomStatus) -> Result<Room, AppError> {
        sqlx::query_as::<_, Room>("UPDATE rooms SET status=?, updated_at=? WHERE id=? RETURNING *")
            .bind(status).bind(Utc::now()).bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Room not found".into()))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = ?")
            .bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Room not found".into()));
        }
        Ok(())
    }
}
