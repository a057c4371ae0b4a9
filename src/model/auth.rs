use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// The authenticated caller with every role profile they hold.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalDto {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub admin: bool,
    pub company_id: Option<i32>,
    pub student_id: Option<i32>,
    pub teacher_id: Option<i32>,
    pub secretary_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PrincipalResponseDto {
    pub user: PrincipalDto,
}

/// Self-service signup for a company account.
#[derive(Deserialize, Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCompanyDto {
    pub email: String,
    pub password: String,
    /// Contact person's display name.
    pub name: String,
    pub company_name: String,
}
