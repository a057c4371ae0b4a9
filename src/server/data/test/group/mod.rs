use crate::server::data::group::GroupRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod acting_for;
mod substitutes;
