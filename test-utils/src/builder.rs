use entity::prelude::*;
use sea_orm::{
    sea_query::{Alias, Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, IdenStatic, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables (and any composite unique indexes the schema relies on),
/// then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Trip, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Trip)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE UNIQUE INDEX statements, executed after all tables exist.
    indexes: Vec<IndexCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference, since SQLite enforces foreign keys on sqlx connections.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a composite unique index over the given columns of an entity's table.
    ///
    /// Entity derives cannot express multi-column unique keys, so tests that depend on
    /// them (membership and vote uniqueness) register them explicitly.
    pub fn with_unique_index<E: EntityTrait>(mut self, entity: E, columns: &[E::Column]) -> Self {
        let table = entity.table_name().to_owned();

        let mut index = Index::create();
        index
            .name(format!("idx_{}_unique_{}", table, self.indexes.len()))
            .table(Alias::new(table))
            .unique();
        for column in columns {
            index.col(Alias::new(column.as_str()));
        }

        self.indexes.push(index.to_owned());
        self
    }

    /// Adds the user and trip tables plus trip membership.
    ///
    /// Enough for authentication, access checks and trip CRUD.
    pub fn with_trip_tables(self) -> Self {
        self.with_table(User)
            .with_table(Trip)
            .with_table(TripMember)
            .with_unique_index(
                TripMember,
                &[
                    entity::trip_member::Column::TripId,
                    entity::trip_member::Column::UserId,
                ],
            )
    }

    /// Adds every table of the schema in dependency order.
    ///
    /// Use this for tests touching trip content (invites, itinerary, costs, tasks, polls)
    /// or the cascading deletes that span all of them.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_all_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_all_tables(self) -> Self {
        self.with_trip_tables()
            .with_table(TripInvite)
            .with_table(ItineraryItem)
            .with_table(Cost)
            .with_table(CostShare)
            .with_table(Task)
            .with_table(Poll)
            .with_table(PollOption)
            .with_table(Vote)
            .with_unique_index(
                Vote,
                &[entity::vote::Column::PollId, entity::vote::Column::UserId],
            )
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE TABLE
    /// statements in the order they were added, then creates the unique indexes.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::DbErr)` - Failed to connect to database or create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
