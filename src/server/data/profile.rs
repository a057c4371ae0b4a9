//! Role profile lookups.
//!
//! Each role (company, student, teacher, secretary) is a separate table referencing the
//! user one-to-one. Identity resolution reads all four for the session user.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use std::collections::HashMap;

pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn company_for_user(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::company::Model>, DbErr> {
        entity::prelude::Company::find()
            .filter(entity::company::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn student_for_user(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn teacher_for_user(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::teacher::Model>, DbErr> {
        entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Strict secretary lookup: only an actual `secretary` row counts.
    pub async fn secretary_for_user(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::secretary::Model>, DbErr> {
        entity::prelude::Secretary::find()
            .filter(entity::secretary::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn find_student(
        &self,
        student_id: i32,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(student_id)
            .one(self.db)
            .await
    }

    pub async fn create_student(
        &self,
        user_id: i32,
        group_id: i32,
    ) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            group_id: ActiveValue::Set(Some(group_id)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn count_students_in(&self, group_ids: &[i32]) -> Result<u64, DbErr> {
        if group_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::Student::find()
            .filter(entity::student::Column::GroupId.is_in(group_ids.to_vec()))
            .count(self.db)
            .await
    }

    /// Loads the user row behind each student id.
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Student id to user model; ids without a student are absent
    pub async fn users_for_students(
        &self,
        student_ids: Vec<i32>,
    ) -> Result<HashMap<i32, entity::user::Model>, DbErr> {
        if student_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Student::find()
            .filter(entity::student::Column::Id.is_in(student_ids))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(student, user)| user.map(|u| (student.id, u)))
            .collect())
    }
}
