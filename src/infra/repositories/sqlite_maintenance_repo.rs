use crate::domain::models::maintenance::{MaintenancePriority, MaintenanceRequest, MaintenanceStatus};
use crate::domain::models::room::RoomStatus;
use crate::domain::ports::MaintenanceRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqliteMaintenanceRepo {
    pool: SqlitePool,
}

impl SqliteMaintenanceRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MaintenanceRepository for SqliteMaintenanceRepo {
    async fn create(&self, request: &MaintenanceRequest) -> Result<MaintenanceRequest, AppError> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "INSERT INTO maintenance_requests (id, room_id, reported_by, description, kind, status, priority, images, resolved_at, notes, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&request.id).bind(&request.room_id).bind(&request.reported_by)
            .bind(&request.description).bind(request.kind).bind(request.status)
            .bind(request.priority).bind(&request.images).bind(request.resolved_at)
            .bind(&request.notes).bind(request.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<MaintenanceRequest>, AppError> {
        sqlx::query_as::<_, MaintenanceRequest>("SELECT * FROM maintenance_requests WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(
        &self,
        status: Option<MaintenanceStatus>,
        room_id: Option<String>,
        priority: Option<MaintenancePriority>,
    ) -> Result<Vec<MaintenanceRequest>, AppError> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "SELECT * FROM maintenance_requests
             WHERE (?1 IS NULL OR status = ?1) AND (?2 IS NULL OR room_id = ?2) AND (?3 IS NULL OR priority = ?3)
             ORDER BY CASE priority WHEN 'high' THEN 0 WHEN 'medium' THEN 1 ELSE 2 END, created_at DESC"
        )
            .bind(status).bind(room_id).bind(priority)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, request: &MaintenanceRequest, room_status: Option<RoomStatus>) -> Result<MaintenanceRequest, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let updated = sqlx::query_as::<_, MaintenanceRequest>(
            "UPDATE maintenance_requests SET status = ?, notes = ?, resolved_at = ? WHERE id = ? RETURNING *"
        )
            .bind(request.status).bind(&request.notes).bind(request.resolved_at).bind(&request.id)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        if let Some(status) = room_status {
            sqlx::query("UPDATE rooms SET status = ?, updated_at = ? WHERE id = ?")
                .bind(status).bind(Utc::now()).bind(&request.room_id)
                .execute(&mut *tx).await.map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(updated)
    }
}
