use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::cost::{Cost, CostShare, SaveCostParams};

pub struct CostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CostRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a cost together with its shares.
    pub async fn create(&self, params: SaveCostParams) -> Result<Cost, DbErr> {
        let now = Utc::now();

        let cost = entity::cost::ActiveModel {
            trip_id: ActiveValue::Set(params.trip_id),
            description: ActiveValue::Set(params.description),
            amount_cents: ActiveValue::Set(params.amount_cents),
            currency: ActiveValue::Set(params.currency),
            category: ActiveValue::Set(params.category),
            paid_by_id: ActiveValue::Set(params.paid_by_id),
            incurred_on: ActiveValue::Set(params.incurred_on),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let shares = self.insert_shares(cost.id, &params.shares).await?;

        Ok(Cost::from_entity(cost, &shares))
    }

    pub async fn find_in_trip(&self, trip_id: i32, id: i32) -> Result<Option<Cost>, DbErr> {
        let Some(cost) = self.find_model(trip_id, id).await? else {
            return Ok(None);
        };

        let shares = entity::prelude::CostShare::find()
            .filter(entity::cost_share::Column::CostId.eq(cost.id))
            .all(self.db)
            .await?;

        Ok(Some(Cost::from_entity(cost, &shares)))
    }

    /// Gets all costs of a trip with shares, most recently incurred first.
    pub async fn get_by_trip(&self, trip_id: i32) -> Result<Vec<Cost>, DbErr> {
        let costs = entity::prelude::Cost::find()
            .filter(entity::cost::Column::TripId.eq(trip_id))
            .order_by_desc(entity::cost::Column::IncurredOn)
            .order_by_desc(entity::cost::Column::Id)
            .all(self.db)
            .await?;

        if costs.is_empty() {
            return Ok(Vec::new());
        }

        let cost_ids: Vec<i32> = costs.iter().map(|c| c.id).collect();
        let mut shares_by_cost: HashMap<i32, Vec<entity::cost_share::Model>> = HashMap::new();
        for share in entity::prelude::CostShare::find()
            .filter(entity::cost_share::Column::CostId.is_in(cost_ids))
            .all(self.db)
            .await?
        {
            shares_by_cost.entry(share.cost_id).or_default().push(share);
        }

        Ok(costs
            .into_iter()
            .map(|cost| {
                let shares = shares_by_cost.remove(&cost.id).unwrap_or_default();
                Cost::from_entity(cost, &shares)
            })
            .collect())
    }

    /// Replaces a cost's fields and its complete share list.
    ///
    /// # Returns
    /// - `Ok(Some(Cost))` - Updated cost
    /// - `Ok(None)` - No cost with that ID in the trip
    pub async fn update(&self, id: i32, params: SaveCostParams) -> Result<Option<Cost>, DbErr> {
        let Some(cost) = self.find_model(params.trip_id, id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::cost::ActiveModel = cost.into();
        active_model.description = ActiveValue::Set(params.description);
        active_model.amount_cents = ActiveValue::Set(params.amount_cents);
        active_model.currency = ActiveValue::Set(params.currency);
        active_model.category = ActiveValue::Set(params.category);
        active_model.paid_by_id = ActiveValue::Set(params.paid_by_id);
        active_model.incurred_on = ActiveValue::Set(params.incurred_on);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let cost = active_model.update(self.db).await?;

        entity::prelude::CostShare::delete_many()
            .filter(entity::cost_share::Column::CostId.eq(id))
            .exec(self.db)
            .await?;
        let shares = self.insert_shares(id, &params.shares).await?;

        Ok(Some(Cost::from_entity(cost, &shares)))
    }

    /// Deletes a cost and its shares.
    pub async fn delete(&self, trip_id: i32, id: i32) -> Result<bool, DbErr> {
        if self.find_model(trip_id, id).await?.is_none() {
            return Ok(false);
        }

        self.delete_by_ids(vec![id]).await?;

        Ok(true)
    }

    /// IDs of all costs paid by a user, across trips.
    pub async fn find_ids_paid_by(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        let costs = entity::prelude::Cost::find()
            .filter(entity::cost::Column::PaidById.eq(user_id))
            .all(self.db)
            .await?;

        Ok(costs.into_iter().map(|c| c.id).collect())
    }

    /// Deletes the given costs with their shares.
    pub async fn delete_by_ids(&self, ids: Vec<i32>) -> Result<(), DbErr> {
        if ids.is_empty() {
            return Ok(());
        }

        entity::prelude::CostShare::delete_many()
            .filter(entity::cost_share::Column::CostId.is_in(ids.clone()))
            .exec(self.db)
            .await?;
        entity::prelude::Cost::delete_many()
            .filter(entity::cost::Column::Id.is_in(ids))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Removes a user's shares from every cost.
    pub async fn delete_shares_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::CostShare::delete_many()
            .filter(entity::cost_share::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn insert_shares(
        &self,
        cost_id: i32,
        shares: &[CostShare],
    ) -> Result<Vec<entity::cost_share::Model>, DbErr> {
        let mut inserted = Vec::with_capacity(shares.len());

        for share in shares {
            let model = entity::cost_share::ActiveModel {
                cost_id: ActiveValue::Set(cost_id),
                user_id: ActiveValue::Set(share.user_id),
                amount_cents: ActiveValue::Set(share.amount_cents),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            inserted.push(model);
        }

        Ok(inserted)
    }

    async fn find_model(
        &self,
        trip_id: i32,
        id: i32,
    ) -> Result<Option<entity::cost::Model>, DbErr> {
        entity::prelude::Cost::find_by_id(id)
            .filter(entity::cost::Column::TripId.eq(trip_id))
            .one(self.db)
            .await
    }
}
