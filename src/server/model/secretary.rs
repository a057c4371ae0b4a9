//! Secretary desk models.

use crate::model::secretary::{CreateStudentDto, DeskStatsDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeskStats {
    pub groups: u64,
    pub students: u64,
    pub pending_attestations: u64,
    pub validated_attestations: u64,
    pub placed_students: u64,
}

impl DeskStats {
    pub fn into_dto(self) -> DeskStatsDto {
        DeskStatsDto {
            groups: self.groups,
            students: self.students,
            pending_attestations: self.pending_attestations,
            validated_attestations: self.validated_attestations,
            placed_students: self.placed_students,
        }
    }
}

/// New student account placed in one group.
#[derive(Debug, Clone)]
pub struct CreateStudentParam {
    pub email: String,
    pub password: String,
    pub name: String,
    pub group_id: i32,
}

impl CreateStudentParam {
    pub fn from_dto(dto: CreateStudentDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            name: dto.name,
            group_id: dto.group_id,
        }
    }
}
