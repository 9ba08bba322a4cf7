use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::trip::TripRoleDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TripMemberDto {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub role: TripRoleDto,
    pub joined_at: DateTime<Utc>,
}
