//! Itinerary domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::itinerary::{
    CreateItineraryItemDto, ItineraryItemDto, ItineraryKindDto, UpdateItineraryItemDto,
};

/// Category of an itinerary entry, stored lowercase in `itinerary_item.kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItineraryKind {
    Activity,
    Lodging,
    Transport,
    Food,
    Other,
}

impl ItineraryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Lodging => "lodging",
            Self::Transport => "transport",
            Self::Food => "food",
            Self::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Result<Self, DbErr> {
        match value {
            "activity" => Ok(Self::Activity),
            "lodging" => Ok(Self::Lodging),
            "transport" => Ok(Self::Transport),
            "food" => Ok(Self::Food),
            "other" => Ok(Self::Other),
            other => Err(DbErr::Custom(format!("Unknown itinerary kind '{}'", other))),
        }
    }

    pub fn into_dto(self) -> ItineraryKindDto {
        match self {
            Self::Activity => ItineraryKindDto::Activity,
            Self::Lodging => ItineraryKindDto::Lodging,
            Self::Transport => ItineraryKindDto::Transport,
            Self::Food => ItineraryKindDto::Food,
            Self::Other => ItineraryKindDto::Other,
        }
    }
}

impl From<ItineraryKindDto> for ItineraryKind {
    fn from(dto: ItineraryKindDto) -> Self {
        match dto {
            ItineraryKindDto::Activity => Self::Activity,
            ItineraryKindDto::Lodging => Self::Lodging,
            ItineraryKindDto::Transport => Self::Transport,
            ItineraryKindDto::Food => Self::Food,
            ItineraryKindDto::Other => Self::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryItem {
    pub id: i32,
    pub trip_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub kind: ItineraryKind,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItineraryItem {
    pub fn from_entity(entity: entity::itinerary_item::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            trip_id: entity.trip_id,
            title: entity.title,
            description: entity.description,
            location: entity.location,
            kind: ItineraryKind::parse(&entity.kind)?,
            start_time: entity.start_time,
            end_time: entity.end_time,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ItineraryItemDto {
        ItineraryItemDto {
            id: self.id,
            trip_id: self.trip_id,
            title: self.title,
            description: self.description,
            location: self.location,
            kind: self.kind.into_dto(),
            start_time: self.start_time,
            end_time: self.end_time,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Fields of an itinerary item, shared by create and full replacement on update.
#[derive(Debug, Clone)]
pub struct SaveItineraryItemParams {
    pub trip_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub kind: ItineraryKind,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}

impl SaveItineraryItemParams {
    pub fn from_create_dto(trip_id: i32, dto: CreateItineraryItemDto) -> Self {
        Self {
            trip_id,
            title: dto.title,
            description: dto.description,
            location: dto.location,
            kind: dto.kind.into(),
            start_time: dto.start_time,
            end_time: dto.end_time,
        }
    }

    pub fn from_update_dto(trip_id: i32, dto: UpdateItineraryItemDto) -> Self {
        Self {
            trip_id,
            title: dto.title,
            description: dto.description,
            location: dto.location,
            kind: dto.kind.into(),
            start_time: dto.start_time,
            end_time: dto.end_time,
        }
    }
}
