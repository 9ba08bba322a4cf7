//! Shared trip expenses and the balances they produce.
//!
//! Every cost is split into shares owed by trip participants. A participant's balance in
//! one currency is what they paid minus what they owe; settlements are a short list of
//! payments that brings every balance back to zero.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::server::{
    data::{cost::CostRepository, trip::TripRepository, user::UserRepository},
    error::AppError,
    model::cost::{
        Balance, Cost, CostInput, CostShare, CurrencyBalances, SaveCostParams, Settlement,
        TripBalances,
    },
    util::validate,
};

const DEFAULT_CURRENCY: &str = "USD";
const MAX_DESCRIPTION_LEN: usize = 200;
const MAX_CATEGORY_LEN: usize = 50;
/// Ten billion in major units.
const MAX_AMOUNT_CENTS: i64 = 1_000_000_000_000;

pub struct CostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a cost for a trip.
    ///
    /// Missing fields take defaults: the submitting user pays, the currency is USD and the
    /// cost is dated today. Without explicit shares the amount is split equally among all
    /// current participants.
    ///
    /// # Returns
    /// - `Ok(Cost)` - Created cost with its shares
    /// - `Err(AppError::BadRequest)` - Invalid amount, currency, payer or shares
    pub async fn create(&self, input: CostInput) -> Result<Cost, AppError> {
        let params = self.prepare(input).await?;

        let txn = self.db.begin().await?;
        let cost = CostRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        tracing::debug!(cost_id = cost.id, trip_id = cost.trip_id, "Created cost");

        Ok(cost)
    }

    /// Gets the trip's costs, most recent first.
    pub async fn list(&self, trip_id: i32) -> Result<Vec<Cost>, AppError> {
        Ok(CostRepository::new(self.db).get_by_trip(trip_id).await?)
    }

    pub async fn get(&self, trip_id: i32, id: i32) -> Result<Cost, AppError> {
        CostRepository::new(self.db)
            .find_in_trip(trip_id, id)
            .await?
            .ok_or_else(not_found)
    }

    /// Replaces a cost and its shares. Shares are recomputed when omitted.
    pub async fn update(&self, id: i32, input: CostInput) -> Result<Cost, AppError> {
        if CostRepository::new(self.db)
            .find_in_trip(input.trip_id, id)
            .await?
            .is_none()
        {
            return Err(not_found());
        }

        let params = self.prepare(input).await?;

        let txn = self.db.begin().await?;
        let cost = CostRepository::new(&txn)
            .update(id, params)
            .await?
            .ok_or_else(not_found)?;
        txn.commit().await?;

        Ok(cost)
    }

    pub async fn delete(&self, trip_id: i32, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        if !CostRepository::new(&txn).delete(trip_id, id).await? {
            return Err(not_found());
        }
        txn.commit().await?;

        Ok(())
    }

    /// Computes per-currency balances and settlements for a trip.
    ///
    /// Every current participant appears in each currency, along with any former member
    /// who still paid or owes part of a cost.
    pub async fn balances(&self, trip_id: i32) -> Result<TripBalances, AppError> {
        let costs = CostRepository::new(self.db).get_by_trip(trip_id).await?;
        let participants = TripRepository::new(self.db)
            .participant_ids(trip_id)
            .await?;

        let mut user_ids: BTreeSet<i32> = participants.iter().copied().collect();
        for cost in &costs {
            user_ids.insert(cost.paid_by_id);
            user_ids.extend(cost.shares.iter().map(|s| s.user_id));
        }
        let user_ids: Vec<i32> = user_ids.into_iter().collect();

        let names: HashMap<i32, String> = UserRepository::new(self.db)
            .find_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user.name))
            .collect();

        Ok(TripBalances {
            trip_id,
            currencies: compute_balances(&costs, &participants, &names),
        })
    }

    /// Applies defaults and validation, producing a row ready to be written.
    async fn prepare(&self, input: CostInput) -> Result<SaveCostParams, AppError> {
        let description =
            validate::required_text("Description", &input.description, MAX_DESCRIPTION_LEN)?;

        if input.amount_cents <= 0 {
            return Err(AppError::BadRequest(
                "Amount must be greater than zero".to_string(),
            ));
        }
        if input.amount_cents > MAX_AMOUNT_CENTS {
            return Err(AppError::BadRequest(format!(
                "Amount must be at most {} cents",
                MAX_AMOUNT_CENTS
            )));
        }

        let currency = normalize_currency(input.currency.as_deref())?;
        let category = validate::optional_text("Category", input.category, MAX_CATEGORY_LEN)?;

        let participants = TripRepository::new(self.db)
            .participant_ids(input.trip_id)
            .await?;

        let paid_by_id = input.paid_by_id.unwrap_or(input.submitted_by);
        if !participants.contains(&paid_by_id) {
            return Err(AppError::BadRequest(
                "The payer must be a member of the trip".to_string(),
            ));
        }

        let shares = match input.shares {
            Some(shares) => validate_shares(input.amount_cents, shares, &participants)?,
            None => split_equally(input.amount_cents, &participants),
        };

        Ok(SaveCostParams {
            trip_id: input.trip_id,
            description,
            amount_cents: input.amount_cents,
            currency,
            category,
            paid_by_id,
            incurred_on: input.incurred_on.unwrap_or_else(|| Utc::now().date_naive()),
            shares,
        })
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Cost not found".to_string())
}

/// Uppercases a three-letter currency code, defaulting to USD.
fn normalize_currency(currency: Option<&str>) -> Result<String, AppError> {
    let currency = match currency.map(str::trim) {
        None | Some("") => return Ok(DEFAULT_CURRENCY.to_string()),
        Some(currency) => currency,
    };

    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::BadRequest(
            "Currency must be a three-letter code".to_string(),
        ));
    }

    Ok(currency.to_ascii_uppercase())
}

/// Splits an amount equally among participants.
///
/// Participants are ordered by user ID and the remainder cents go one each to the first
/// participants in that order, so shares differ by at most one cent.
pub fn split_equally(amount_cents: i64, participants: &[i32]) -> Vec<CostShare> {
    let mut user_ids = participants.to_vec();
    user_ids.sort_unstable();
    user_ids.dedup();

    if user_ids.is_empty() {
        return Vec::new();
    }

    let count = user_ids.len() as i64;
    let base = amount_cents / count;
    let remainder = amount_cents % count;

    user_ids
        .into_iter()
        .enumerate()
        .map(|(index, user_id)| CostShare {
            user_id,
            amount_cents: base + i64::from((index as i64) < remainder),
        })
        .collect()
}

/// Checks explicit shares against the amount and the trip's participants.
fn validate_shares(
    amount_cents: i64,
    mut shares: Vec<CostShare>,
    participants: &[i32],
) -> Result<Vec<CostShare>, AppError> {
    if shares.is_empty() {
        return Err(AppError::BadRequest(
            "At least one share is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    let mut total: i64 = 0;
    for share in &shares {
        if !participants.contains(&share.user_id) {
            return Err(AppError::BadRequest(format!(
                "User {} is not a member of the trip",
                share.user_id
            )));
        }
        if !seen.insert(share.user_id) {
            return Err(AppError::BadRequest(format!(
                "User {} has more than one share",
                share.user_id
            )));
        }
        if share.amount_cents < 0 {
            return Err(AppError::BadRequest(
                "Share amounts must not be negative".to_string(),
            ));
        }
        total = total.checked_add(share.amount_cents).ok_or_else(|| {
            AppError::BadRequest("Shares add up to more than the amount".to_string())
        })?;
    }

    if total != amount_cents {
        return Err(AppError::BadRequest(format!(
            "Shares add up to {} but the amount is {}",
            total, amount_cents
        )));
    }

    shares.sort_by_key(|share| share.user_id);

    Ok(shares)
}

/// Groups costs by currency and computes balances and settlements for each.
///
/// # Arguments
/// - `costs` - All costs of the trip
/// - `participants` - Current participants, included even when they have no costs
/// - `names` - Display names by user ID; users missing here are shown as unknown
///
/// # Returns
/// One entry per currency, sorted by currency code, with balances sorted by user ID.
pub fn compute_balances(
    costs: &[Cost],
    participants: &[i32],
    names: &HashMap<i32, String>,
) -> Vec<CurrencyBalances> {
    let mut by_currency: BTreeMap<&str, BTreeMap<i32, (i64, i64)>> = BTreeMap::new();

    for cost in costs {
        let totals = by_currency.entry(cost.currency.as_str()).or_insert_with(|| {
            participants
                .iter()
                .map(|&user_id| (user_id, (0, 0)))
                .collect()
        });

        totals.entry(cost.paid_by_id).or_default().0 += cost.amount_cents;
        for share in &cost.shares {
            totals.entry(share.user_id).or_default().1 += share.amount_cents;
        }
    }

    by_currency
        .into_iter()
        .map(|(currency, totals)| {
            let balances: Vec<Balance> = totals
                .into_iter()
                .map(|(user_id, (paid_cents, owed_cents))| Balance {
                    user_id,
                    name: names
                        .get(&user_id)
                        .cloned()
                        .unwrap_or_else(|| "Unknown user".to_string()),
                    paid_cents,
                    owed_cents,
                    net_cents: paid_cents - owed_cents,
                })
                .collect();

            let settlements = compute_settlements(&balances);

            CurrencyBalances {
                currency: currency.to_string(),
                balances,
                settlements,
            }
        })
        .collect()
}

/// Builds payments that settle all balances.
///
/// Repeatedly matches the largest debtor with the largest creditor and transfers the
/// smaller of the two amounts. Ties are broken by lower user ID so the result is stable.
/// When balances do not net to zero (shares of a deleted account), the leftover stays
/// unsettled.
pub fn compute_settlements(balances: &[Balance]) -> Vec<Settlement> {
    let mut debtors: Vec<(i32, i64)> = balances
        .iter()
        .filter(|b| b.net_cents < 0)
        .map(|b| (b.user_id, -b.net_cents))
        .collect();
    let mut creditors: Vec<(i32, i64)> = balances
        .iter()
        .filter(|b| b.net_cents > 0)
        .map(|b| (b.user_id, b.net_cents))
        .collect();

    let mut settlements = Vec::new();

    loop {
        let largest = |entries: &Vec<(i32, i64)>| {
            entries
                .iter()
                .enumerate()
                .filter(|(_, (_, amount))| *amount > 0)
                .max_by(|(_, a), (_, b)| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
                .map(|(index, _)| index)
        };

        let (Some(d), Some(c)) = (largest(&debtors), largest(&creditors)) else {
            break;
        };

        let amount = debtors[d].1.min(creditors[c].1);
        settlements.push(Settlement {
            from_user_id: debtors[d].0,
            to_user_id: creditors[c].0,
            amount_cents: amount,
        });

        debtors[d].1 -= amount;
        creditors[c].1 -= amount;
    }

    settlements
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn balance(user_id: i32, net_cents: i64) -> Balance {
        Balance {
            user_id,
            name: format!("User {}", user_id),
            paid_cents: net_cents.max(0),
            owed_cents: (-net_cents).max(0),
            net_cents,
        }
    }

    fn cost(paid_by_id: i32, currency: &str, amount_cents: i64, shares: &[(i32, i64)]) -> Cost {
        let now = Utc::now();
        Cost {
            id: 1,
            trip_id: 1,
            description: "Dinner".to_string(),
            amount_cents,
            currency: currency.to_string(),
            category: None,
            paid_by_id,
            incurred_on: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            shares: shares
                .iter()
                .map(|&(user_id, amount_cents)| CostShare {
                    user_id,
                    amount_cents,
                })
                .collect(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn equal_split_gives_remainder_to_lowest_user_ids() {
        let shares = split_equally(1000, &[7, 3, 5]);

        let amounts: Vec<(i32, i64)> = shares
            .iter()
            .map(|s| (s.user_id, s.amount_cents))
            .collect();
        assert_eq!(amounts, vec![(3, 334), (5, 333), (7, 333)]);
        assert_eq!(shares.iter().map(|s| s.amount_cents).sum::<i64>(), 1000);
    }

    #[test]
    fn equal_split_of_even_amount_has_no_remainder() {
        let shares = split_equally(900, &[1, 2, 3]);

        assert!(shares.iter().all(|s| s.amount_cents == 300));
    }

    #[test]
    fn shares_must_sum_to_amount() {
        let shares = vec![
            CostShare {
                user_id: 1,
                amount_cents: 400,
            },
            CostShare {
                user_id: 2,
                amount_cents: 500,
            },
        ];

        let result = validate_shares(1000, shares, &[1, 2]);

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn shares_must_reference_participants() {
        let shares = vec![
            CostShare {
                user_id: 1,
                amount_cents: 500,
            },
            CostShare {
                user_id: 9,
                amount_cents: 500,
            },
        ];

        let result = validate_shares(1000, shares, &[1, 2]);

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn duplicate_shares_are_rejected() {
        let shares = vec![
            CostShare {
                user_id: 1,
                amount_cents: 500,
            },
            CostShare {
                user_id: 1,
                amount_cents: 500,
            },
        ];

        let result = validate_shares(1000, shares, &[1, 2]);

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn overflowing_shares_are_rejected() {
        let shares = vec![
            CostShare {
                user_id: 1,
                amount_cents: i64::MAX,
            },
            CostShare {
                user_id: 2,
                amount_cents: 1,
            },
        ];

        let result = validate_shares(i64::MAX, shares, &[1, 2]);

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn valid_shares_are_sorted_by_user() {
        let shares = vec![
            CostShare {
                user_id: 2,
                amount_cents: 700,
            },
            CostShare {
                user_id: 1,
                amount_cents: 300,
            },
        ];

        let shares = validate_shares(1000, shares, &[1, 2]).unwrap();

        assert_eq!(shares[0].user_id, 1);
        assert_eq!(shares[1].user_id, 2);
    }

    #[test]
    fn currency_defaults_and_uppercases() {
        assert_eq!(normalize_currency(None).unwrap(), "USD");
        assert_eq!(normalize_currency(Some(" eur ")).unwrap(), "EUR");
        assert!(normalize_currency(Some("EURO")).is_err());
        assert!(normalize_currency(Some("E1R")).is_err());
    }

    #[test]
    fn balances_net_to_zero_per_currency() {
        let costs = vec![
            cost(1, "USD", 900, &[(1, 300), (2, 300), (3, 300)]),
            cost(2, "USD", 300, &[(1, 100), (2, 100), (3, 100)]),
            cost(3, "EUR", 200, &[(1, 100), (3, 100)]),
        ];

        let currencies = compute_balances(&costs, &[1, 2, 3], &HashMap::new());

        assert_eq!(currencies.len(), 2);
        assert_eq!(currencies[0].currency, "EUR");
        assert_eq!(currencies[1].currency, "USD");

        for currency in &currencies {
            assert_eq!(currency.balances.len(), 3);
            assert_eq!(currency.balances.iter().map(|b| b.net_cents).sum::<i64>(), 0);
        }

        let usd = &currencies[1];
        assert_eq!(usd.balances[0].paid_cents, 900);
        assert_eq!(usd.balances[0].owed_cents, 400);
        assert_eq!(usd.balances[0].net_cents, 500);
        assert_eq!(usd.balances[2].net_cents, -400);
    }

    #[test]
    fn participants_without_costs_still_appear() {
        let costs = vec![cost(1, "USD", 200, &[(1, 100), (2, 100)])];

        let currencies = compute_balances(&costs, &[1, 2, 3], &HashMap::new());

        let third = &currencies[0].balances[2];
        assert_eq!(third.user_id, 3);
        assert_eq!(third.net_cents, 0);
    }

    #[test]
    fn settlements_match_largest_debtor_with_largest_creditor() {
        let balances = vec![balance(1, 600), balance(2, -100), balance(3, -500)];

        let settlements = compute_settlements(&balances);

        assert_eq!(
            settlements,
            vec![
                Settlement {
                    from_user_id: 3,
                    to_user_id: 1,
                    amount_cents: 500,
                },
                Settlement {
                    from_user_id: 2,
                    to_user_id: 1,
                    amount_cents: 100,
                },
            ]
        );
    }

    #[test]
    fn settlements_break_ties_by_user_id() {
        let balances = vec![
            balance(4, 300),
            balance(2, 300),
            balance(3, -300),
            balance(1, -300),
        ];

        let settlements = compute_settlements(&balances);

        assert_eq!(
            settlements[0],
            Settlement {
                from_user_id: 1,
                to_user_id: 2,
                amount_cents: 300,
            }
        );
        assert_eq!(
            settlements[1],
            Settlement {
                from_user_id: 3,
                to_user_id: 4,
                amount_cents: 300,
            }
        );
    }

    #[test]
    fn settled_balances_need_no_payments() {
        let balances = vec![balance(1, 0), balance(2, 0)];

        assert!(compute_settlements(&balances).is_empty());
    }
}
