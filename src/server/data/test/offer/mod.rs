use crate::server::{
    data::offer::OfferRepository,
    model::offer::{OfferFields, OfferStatus},
};
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod review;
mod update_owned;

/// Fields equal to the `OfferFactory` defaults except for the given remuneration.
fn fields_from(offer: &entity::offer::Model, remuneration: f64) -> OfferFields {
    OfferFields {
        offer_type: offer.offer_type.clone(),
        title: offer.title.clone(),
        description: offer.description.clone(),
        skills: offer.skills.clone(),
        country: offer.country.clone(),
        city: offer.city.clone(),
        duration_months: offer.duration_months,
        remuneration,
        start_date: offer.start_date,
        expiration_date: offer.expiration_date,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
