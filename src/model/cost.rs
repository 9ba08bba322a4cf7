use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CostShareDto {
    pub user_id: i32,
    pub amount_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CostDto {
    pub id: i32,
    pub trip_id: i32,
    pub description: String,
    pub amount_cents: i64,
    pub currency: String,
    pub category: Option<String>,
    pub paid_by_id: i32,
    pub incurred_on: NaiveDate,
    pub shares: Vec<CostShareDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a cost.
///
/// `paid_by_id` defaults to the caller, `currency` to USD and `incurred_on` to today.
/// Without `shares` the amount is split equally between all trip participants.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCostDto {
    pub description: String,
    pub amount_cents: i64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub paid_by_id: Option<i32>,
    #[serde(default)]
    pub incurred_on: Option<NaiveDate>,
    #[serde(default)]
    pub shares: Option<Vec<CostShareDto>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCostDto {
    pub description: String,
    pub amount_cents: i64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub paid_by_id: Option<i32>,
    #[serde(default)]
    pub incurred_on: Option<NaiveDate>,
    #[serde(default)]
    pub shares: Option<Vec<CostShareDto>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BalanceDto {
    pub user_id: i32,
    pub name: String,
    pub paid_cents: i64,
    pub owed_cents: i64,
    /// Positive when the user is owed money, negative when they owe.
    pub net_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SettlementDto {
    pub from_user_id: i32,
    pub to_user_id: i32,
    pub amount_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CurrencyBalancesDto {
    pub currency: String,
    pub balances: Vec<BalanceDto>,
    pub settlements: Vec<SettlementDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TripBalancesDto {
    pub trip_id: i32,
    pub currencies: Vec<CurrencyBalancesDto>,
}
