//! Shared helper utilities for factory methods.
//!
//! ID generation plus scenario helpers that wire up the usual chains of rows
//! (secretary, referent teacher and group; company, offer, student and candidature).

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{
    candidature::CandidatureFactory, company::create_company, offer::create_validated_offer,
    secretary::SecretaryFactory, student::create_student, student_group::GroupFactory,
    teacher::create_teacher, user::create_user,
};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Rows making up one candidature, from the company down to the student.
pub struct CandidatureChain {
    pub company: entity::company::Model,
    pub offer: entity::offer::Model,
    pub student: entity::student::Model,
    pub candidature: entity::candidature::Model,
}

/// Rows making up one delegation setup.
pub struct DelegationChain {
    pub secretary: entity::secretary::Model,
    pub teacher: entity::teacher::Model,
    pub group: entity::student_group::Model,
}

/// Creates a company, a VALIDATED offer, a student and a candidature with `status`.
pub async fn create_candidature_chain(
    db: &DatabaseConnection,
    status: &str,
) -> Result<CandidatureChain, DbErr> {
    let company = create_company(db).await?;
    let offer = create_validated_offer(db, company.id).await?;
    let student = create_student(db).await?;
    let candidature = CandidatureFactory::new(db, offer.id, student.id)
        .status(status)
        .build()
        .await?;

    Ok(CandidatureChain {
        company,
        offer,
        student,
        candidature,
    })
}

/// Creates a candidature chain whose candidature is RETENU.
pub async fn create_retained_candidature(
    db: &DatabaseConnection,
) -> Result<CandidatureChain, DbErr> {
    create_candidature_chain(db, "RETENU").await
}

/// Creates a secretary, a teacher and a group administered by the secretary with the
/// teacher as referent.
pub async fn create_delegation_chain(
    db: &DatabaseConnection,
    secretary_on_leave: bool,
) -> Result<DelegationChain, DbErr> {
    let secretary_user = create_user(db).await?;
    let secretary = SecretaryFactory::new(db, secretary_user.id)
        .on_leave(secretary_on_leave)
        .build()
        .await?;
    let teacher = create_teacher(db).await?;
    let group = GroupFactory::new(db, secretary.id)
        .referent_teacher(teacher.id)
        .build()
        .await?;

    Ok(DelegationChain {
        secretary,
        teacher,
        group,
    })
}
