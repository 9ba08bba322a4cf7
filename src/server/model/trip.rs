//! Trip domain models and parameters.
//!
//! A trip is owned by its creator and shared with members. Listing endpoints return
//! trips as summaries carrying the member count and the caller's role.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::model::trip::{
    CreateTripDto, PaginatedTripsDto, TripDto, TripRoleDto, UpdateTripDto,
};

/// Role of a user within a trip.
///
/// Stored as lowercase text in the `trip_member.role` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripRole {
    /// The trip creator. Exactly one per trip.
    Owner,
    Member,
}

impl TripRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Member => "member",
        }
    }

    /// Parses a stored role value.
    ///
    /// # Returns
    /// - `Ok(TripRole)` - Known role
    /// - `Err(DbErr::Custom)` - Column holds an unknown value
    pub fn parse(value: &str) -> Result<Self, DbErr> {
        match value {
            "owner" => Ok(Self::Owner),
            "member" => Ok(Self::Member),
            other => Err(DbErr::Custom(format!("Unknown trip role '{}'", other))),
        }
    }

    pub fn into_dto(self) -> TripRoleDto {
        match self {
            Self::Owner => TripRoleDto::Owner,
            Self::Member => TripRoleDto::Member,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub creator_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    pub fn from_entity(entity: entity::trip::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            destination: entity.destination,
            start_date: entity.start_date,
            end_date: entity.end_date,
            creator_id: entity.creator_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Trip as seen by one particular user.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSummary {
    pub trip: Trip,
    pub member_count: u64,
    /// Role of the viewing user.
    pub role: TripRole,
}

impl TripSummary {
    pub fn into_dto(self) -> TripDto {
        TripDto {
            id: self.trip.id,
            name: self.trip.name,
            description: self.trip.description,
            destination: self.trip.destination,
            start_date: self.trip.start_date,
            end_date: self.trip.end_date,
            creator_id: self.trip.creator_id,
            member_count: self.member_count,
            role: self.role.into_dto(),
            created_at: self.trip.created_at,
            updated_at: self.trip.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedTrips {
    pub trips: Vec<TripSummary>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedTrips {
    pub fn into_dto(self) -> PaginatedTripsDto {
        PaginatedTripsDto {
            trips: self.trips.into_iter().map(TripSummary::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTripParams {
    pub creator_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl CreateTripParams {
    pub fn from_dto(creator_id: i32, dto: CreateTripDto) -> Self {
        Self {
            creator_id,
            name: dto.name,
            description: dto.description,
            destination: dto.destination,
            start_date: dto.start_date,
            end_date: dto.end_date,
        }
    }
}

/// Full replacement of a trip's editable fields.
#[derive(Debug, Clone)]
pub struct UpdateTripParams {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl UpdateTripParams {
    pub fn from_dto(id: i32, dto: UpdateTripDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            destination: dto.destination,
            start_date: dto.start_date,
            end_date: dto.end_date,
        }
    }
}
