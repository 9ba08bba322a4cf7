//! Cost and balance domain models.
//!
//! Amounts are integer cents throughout. Each cost carries the shares owed by
//! participants; shares are written so that they add up to the cost's amount.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::cost::{
    BalanceDto, CostDto, CostShareDto, CreateCostDto, CurrencyBalancesDto, SettlementDto,
    TripBalancesDto, UpdateCostDto,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostShare {
    pub user_id: i32,
    pub amount_cents: i64,
}

impl CostShare {
    pub fn from_entity(entity: &entity::cost_share::Model) -> Self {
        Self {
            user_id: entity.user_id,
            amount_cents: entity.amount_cents,
        }
    }

    pub fn into_dto(self) -> CostShareDto {
        CostShareDto {
            user_id: self.user_id,
            amount_cents: self.amount_cents,
        }
    }
}

impl From<CostShareDto> for CostShare {
    fn from(dto: CostShareDto) -> Self {
        Self {
            user_id: dto.user_id,
            amount_cents: dto.amount_cents,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cost {
    pub id: i32,
    pub trip_id: i32,
    pub description: String,
    pub amount_cents: i64,
    /// ISO 4217 code, uppercase.
    pub currency: String,
    pub category: Option<String>,
    pub paid_by_id: i32,
    pub incurred_on: NaiveDate,
    /// Shares ordered by user ID.
    pub shares: Vec<CostShare>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cost {
    /// Converts a cost and its share rows at the repository boundary.
    pub fn from_entity(
        entity: entity::cost::Model,
        shares: &[entity::cost_share::Model],
    ) -> Self {
        let mut shares: Vec<CostShare> = shares.iter().map(CostShare::from_entity).collect();
        shares.sort_by_key(|s| s.user_id);

        Self {
            id: entity.id,
            trip_id: entity.trip_id,
            description: entity.description,
            amount_cents: entity.amount_cents,
            currency: entity.currency,
            category: entity.category,
            paid_by_id: entity.paid_by_id,
            incurred_on: entity.incurred_on,
            shares,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CostDto {
        CostDto {
            id: self.id,
            trip_id: self.trip_id,
            description: self.description,
            amount_cents: self.amount_cents,
            currency: self.currency,
            category: self.category,
            paid_by_id: self.paid_by_id,
            incurred_on: self.incurred_on,
            shares: self.shares.into_iter().map(CostShare::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Cost as submitted by a user, before defaults and validation.
#[derive(Debug, Clone)]
pub struct CostInput {
    pub trip_id: i32,
    /// User submitting the cost; becomes the payer when `paid_by_id` is omitted.
    pub submitted_by: i32,
    pub description: String,
    pub amount_cents: i64,
    pub currency: Option<String>,
    pub category: Option<String>,
    pub paid_by_id: Option<i32>,
    pub incurred_on: Option<NaiveDate>,
    pub shares: Option<Vec<CostShare>>,
}

impl CostInput {
    pub fn from_create_dto(trip_id: i32, submitted_by: i32, dto: CreateCostDto) -> Self {
        Self {
            trip_id,
            submitted_by,
            description: dto.description,
            amount_cents: dto.amount_cents,
            currency: dto.currency,
            category: dto.category,
            paid_by_id: dto.paid_by_id,
            incurred_on: dto.incurred_on,
            shares: dto
                .shares
                .map(|shares| shares.into_iter().map(CostShare::from).collect()),
        }
    }

    pub fn from_update_dto(trip_id: i32, submitted_by: i32, dto: UpdateCostDto) -> Self {
        Self {
            trip_id,
            submitted_by,
            description: dto.description,
            amount_cents: dto.amount_cents,
            currency: dto.currency,
            category: dto.category,
            paid_by_id: dto.paid_by_id,
            incurred_on: dto.incurred_on,
            shares: dto
                .shares
                .map(|shares| shares.into_iter().map(CostShare::from).collect()),
        }
    }
}

/// Validated cost row plus its complete share list.
#[derive(Debug, Clone)]
pub struct SaveCostParams {
    pub trip_id: i32,
    pub description: String,
    pub amount_cents: i64,
    pub currency: String,
    pub category: Option<String>,
    pub paid_by_id: i32,
    pub incurred_on: NaiveDate,
    pub shares: Vec<CostShare>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Balance {
    pub user_id: i32,
    pub name: String,
    pub paid_cents: i64,
    pub owed_cents: i64,
    pub net_cents: i64,
}

impl Balance {
    pub fn into_dto(self) -> BalanceDto {
        BalanceDto {
            user_id: self.user_id,
            name: self.name,
            paid_cents: self.paid_cents,
            owed_cents: self.owed_cents,
            net_cents: self.net_cents,
        }
    }
}

/// A single payment that moves a debtor towards zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub from_user_id: i32,
    pub to_user_id: i32,
    pub amount_cents: i64,
}

impl Settlement {
    pub fn into_dto(self) -> SettlementDto {
        SettlementDto {
            from_user_id: self.from_user_id,
            to_user_id: self.to_user_id,
            amount_cents: self.amount_cents,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyBalances {
    pub currency: String,
    pub balances: Vec<Balance>,
    pub settlements: Vec<Settlement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripBalances {
    pub trip_id: i32,
    /// One entry per currency used in the trip, sorted by currency code.
    pub currencies: Vec<CurrencyBalances>,
}

impl TripBalances {
    pub fn into_dto(self) -> TripBalancesDto {
        TripBalancesDto {
            trip_id: self.trip_id,
            currencies: self
                .currencies
                .into_iter()
                .map(|c| CurrencyBalancesDto {
                    currency: c.currency,
                    balances: c.balances.into_iter().map(Balance::into_dto).collect(),
                    settlements: c.settlements.into_iter().map(Settlement::into_dto).collect(),
                })
                .collect(),
        }
    }
}
