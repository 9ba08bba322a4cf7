//! Cost factory, including the per-user shares of a cost.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating costs with their shares.
///
/// Without explicit shares the payer owes the whole amount.
///
/// # Example
///
/// ```rust,ignore
/// let cost = CostFactory::new(&db, trip.id, payer.id)
///     .amount_cents(3000)
///     .shares(vec![(payer.id, 1500), (friend.id, 1500)])
///     .build()
///     .await?;
/// ```
pub struct CostFactory<'a> {
    db: &'a DatabaseConnection,
    trip_id: i32,
    paid_by_id: i32,
    description: String,
    amount_cents: i64,
    currency: String,
    shares: Option<Vec<(i32, i64)>>,
}

impl<'a> CostFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, trip_id: i32, paid_by_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            trip_id,
            paid_by_id,
            description: format!("Cost {}", id),
            amount_cents: 1000,
            currency: "EUR".to_string(),
            shares: None,
        }
    }

    pub fn amount_cents(mut self, amount_cents: i64) -> Self {
        self.amount_cents = amount_cents;
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Sets the shares as `(user_id, amount_cents)` pairs.
    pub fn shares(mut self, shares: Vec<(i32, i64)>) -> Self {
        self.shares = Some(shares);
        self
    }

    pub async fn build(self) -> Result<entity::cost::Model, DbErr> {
        let now = Utc::now();
        let cost = entity::cost::ActiveModel {
            trip_id: ActiveValue::Set(self.trip_id),
            description: ActiveValue::Set(self.description),
            amount_cents: ActiveValue::Set(self.amount_cents),
            currency: ActiveValue::Set(self.currency),
            category: ActiveValue::Set(None),
            paid_by_id: ActiveValue::Set(self.paid_by_id),
            incurred_on: ActiveValue::Set(now.date_naive()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let shares = self
            .shares
            .unwrap_or_else(|| vec![(self.paid_by_id, self.amount_cents)]);
        for (user_id, amount_cents) in shares {
            entity::cost_share::ActiveModel {
                cost_id: ActiveValue::Set(cost.id),
                user_id: ActiveValue::Set(user_id),
                amount_cents: ActiveValue::Set(amount_cents),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(cost)
    }
}

pub async fn create_cost(
    db: &DatabaseConnection,
    trip_id: i32,
    paid_by_id: i32,
) -> Result<entity::cost::Model, DbErr> {
    CostFactory::new(db, trip_id, paid_by_id).build().await
}
