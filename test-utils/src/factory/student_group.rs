//! Student group factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for student groups administered by a secretary.
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    secretary_id: i32,
    name: String,
    referent_teacher_id: Option<i32>,
}

impl<'a> GroupFactory<'a> {
    /// Defaults: name `"Group {id}"`, no referent teacher.
    pub fn new(db: &'a DatabaseConnection, secretary_id: i32) -> Self {
        Self {
            db,
            secretary_id,
            name: format!("Group {}", next_id()),
            referent_teacher_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn referent_teacher(mut self, teacher_id: i32) -> Self {
        self.referent_teacher_id = Some(teacher_id);
        self
    }

    pub async fn build(self) -> Result<entity::student_group::Model, DbErr> {
        entity::student_group::ActiveModel {
            name: ActiveValue::Set(self.name),
            secretary_id: ActiveValue::Set(self.secretary_id),
            referent_teacher_id: ActiveValue::Set(self.referent_teacher_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a group without referent teacher.
pub async fn create_group(
    db: &DatabaseConnection,
    secretary_id: i32,
) -> Result<entity::student_group::Model, DbErr> {
    GroupFactory::new(db, secretary_id).build().await
}
