use crate::server::{
    data::candidature::CandidatureRepository, error::AppError,
    model::candidature::CandidatureStatus,
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod list_received;
mod list_retained_without_affectation;
mod transition;
