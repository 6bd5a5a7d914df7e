use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    Double,
    Suite,
    Deluxe,
}

/// Cached snapshot of physical usability. The authoritative overlap truth
/// lives in the bookings table; every booking status transition writes both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
    Cleaning,
    Maintenance,
}

impl RoomStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Cleaning => "cleaning",
            RoomStatus::Maintenance => "maintenance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(RoomStatus::Available),
            "occupied" => Some(RoomStatus::Occupied),
            "cleaning" => Some(RoomStatus::Cleaning),
            "maintenance" => Some(RoomStatus::Maintenance),
            _ => None,
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Room {
    pub id: String,
    pub room_number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub price_per_night: f64,
    pub amenities: Json<Vec<String>>,
    pub status: RoomStatus,
    pub images: Json<Vec<String>>,
    pub floor: Option<i64>,
    pub max_occupancy: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewRoomParams {
    pub room_number: String,
    pub room_type: RoomType,
    pub price_per_night: f64,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub floor: Option<i64>,
    pub max_occupancy: Option<i64>,
}

impl Room {
    pub fn new(params: NewRoomParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            room_number: params.room_number,
            room_type: params.room_type,
            price_per_night: params.price_per_night,
            amenities: Json(params.amenities),
            status: RoomStatus::Available,
            images: Json(params.images),
            floor: params.floor,
            max_occupancy: params.max_occupancy,
            created_at: now,
            updated_at: now,
        }
    }
}
