use crate::server::data::affectation::AffectationRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_placed_students;
