use crate::server::data::leave::LeaveRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod history;
mod set_on_leave;
