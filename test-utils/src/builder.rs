use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Tables are generated from the SeaORM entity definitions, so foreign keys and unique
/// constraints declared on the entities are enforced by the test database as well.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Company};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Company)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order by `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user table and every role profile table.
    ///
    /// Adds, in dependency order: User, Company, Teacher, Secretary, StudentGroup, Student.
    /// Enough for identity resolution and authentication tests.
    pub fn with_profile_tables(self) -> Self {
        self.with_table(User)
            .with_table(Company)
            .with_table(Teacher)
            .with_table(Secretary)
            .with_table(StudentGroup)
            .with_table(Student)
    }

    /// Adds every table of the placement schema.
    ///
    /// Profile tables first (see `with_profile_tables()`), followed by Offer, Candidature,
    /// Affectation, SecretaryLeaveLog and RcAttestation.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_placement_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_placement_tables(self) -> Self {
        self.with_profile_tables()
            .with_table(Offer)
            .with_table(Candidature)
            .with_table(Affectation)
            .with_table(SecretaryLeaveLog)
            .with_table(RcAttestation)
    }

    /// Builds the test context and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an in-memory database holding the tables
    /// - `Err(TestError::Database)` - Failed to connect or to create a table
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
