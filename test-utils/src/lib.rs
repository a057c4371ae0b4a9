//! Placement Desk Test Utils
//!
//! Shared helpers for the placement desk test suites: an in-memory SQLite database built
//! from the entity definitions, a session backed by that same database, and factories for
//! every table in the schema.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder choosing which tables the test database gets
//! - **TestContext**: Holds the database connection and the session for one test
//! - **TestError**: Errors raised while the environment is being set up
//! - **factory**: Entity factories plus scenario helpers wiring whole placement chains
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_offers() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_placement_tables()
//!         .build()
//!         .await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let company = factory::create_company(db).await?;
//!     let offer = factory::create_offer(db, company.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
