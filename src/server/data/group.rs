//! Student group queries behind secretary delegation.
//!
//! A group is administered by one secretary and may have a referent teacher. While the
//! secretary is on leave, the referent teacher holds secretary authority over that group.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;

use crate::server::model::leave::Substitute;

pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(
        &self,
        group_id: i32,
    ) -> Result<Option<entity::student_group::Model>, DbErr> {
        entity::prelude::StudentGroup::find_by_id(group_id)
            .one(self.db)
            .await
    }

    /// Every group id, for admins who act for all groups.
    pub async fn all_ids(&self) -> Result<Vec<i32>, DbErr> {
        Ok(entity::prelude::StudentGroup::find()
            .order_by_asc(entity::student_group::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|group| group.id)
            .collect())
    }

    /// Ids of the groups where the teacher is referent and the secretary is on leave.
    pub async fn delegated_to(&self, teacher_id: i32) -> Result<Vec<i32>, DbErr> {
        Ok(entity::prelude::StudentGroup::find()
            .inner_join(entity::prelude::Secretary)
            .filter(entity::student_group::Column::ReferentTeacherId.eq(teacher_id))
            .filter(entity::secretary::Column::OnLeave.eq(true))
            .all(self.db)
            .await?
            .into_iter()
            .map(|group| group.id)
            .collect())
    }

    /// Groups over which the holder of these profiles currently has secretary authority.
    ///
    /// A secretary acts for the groups they administer unless they are on leave; a teacher
    /// acts for the groups they are referent of while that group's secretary is on leave.
    /// The result is sorted and free of duplicates.
    pub async fn acting_for(
        &self,
        secretary_id: Option<i32>,
        teacher_id: Option<i32>,
    ) -> Result<Vec<i32>, DbErr> {
        let mut group_ids = Vec::new();

        if let Some(secretary_id) = secretary_id {
            group_ids.extend(
                entity::prelude::StudentGroup::find()
                    .inner_join(entity::prelude::Secretary)
                    .filter(entity::student_group::Column::SecretaryId.eq(secretary_id))
                    .filter(entity::secretary::Column::OnLeave.eq(false))
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(|group| group.id),
            );
        }
        if let Some(teacher_id) = teacher_id {
            group_ids.extend(self.delegated_to(teacher_id).await?);
        }

        group_ids.sort_unstable();
        group_ids.dedup();

        Ok(group_ids)
    }

    /// Referent teachers of the secretary's groups, ordered by teacher name then group.
    ///
    /// Groups without a referent teacher contribute nothing. A teacher referent for
    /// several groups appears once per group.
    pub async fn substitutes(&self, secretary_id: i32) -> Result<Vec<Substitute>, DbErr> {
        let groups = entity::prelude::StudentGroup::find()
            .filter(entity::student_group::Column::SecretaryId.eq(secretary_id))
            .filter(entity::student_group::Column::ReferentTeacherId.is_not_null())
            .order_by_asc(entity::student_group::Column::Name)
            .all(self.db)
            .await?;

        let teacher_ids: Vec<i32> = groups
            .iter()
            .filter_map(|group| group.referent_teacher_id)
            .collect();
        if teacher_ids.is_empty() {
            return Ok(Vec::new());
        }

        let teachers: HashMap<i32, entity::user::Model> = entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::Id.is_in(teacher_ids))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(teacher, user)| user.map(|u| (teacher.id, u)))
            .collect();

        let mut substitutes: Vec<Substitute> = groups
            .into_iter()
            .filter_map(|group| {
                let user = teachers.get(&group.referent_teacher_id?)?;
                Some(Substitute {
                    teacher_user_id: user.id,
                    name: user.name.clone(),
                    email: user.email.clone(),
                    group_name: group.name,
                })
            })
            .collect();
        substitutes.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.group_name.cmp(&b.group_name))
        });

        Ok(substitutes)
    }

    pub async fn names(&self, group_ids: Vec<i32>) -> Result<HashMap<i32, String>, DbErr> {
        if group_ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::StudentGroup::find()
            .filter(entity::student_group::Column::Id.is_in(group_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|group| (group.id, group.name))
            .collect())
    }
}
