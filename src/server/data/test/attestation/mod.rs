use crate::server::{
    data::attestation::AttestationRepository,
    error::AppError,
    model::attestation::AttestationStatus,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_in_groups;
mod list_pending;
mod upsert;
