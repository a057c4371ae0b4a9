use super::*;
use crate::server::service::auth::{AuthService, RegisterCompanyParam};

fn signup(email: &str) -> RegisterCompanyParam {
    RegisterCompanyParam {
        email: email.to_string(),
        password: "correct horse".to_string(),
        name: "Jane Doe".to_string(),
        company_name: "Acme".to_string(),
    }
}

/// Tests logging in with the factory password.
///
/// Verifies that the email is matched case-insensitively and the principal carries the
/// caller's profiles.
///
/// Expected: Ok(Principal) with the student profile
#[tokio::test]
async fn logs_in_with_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("jane@school.test")
        .build()
        .await?;
    let student = factory::student::create_student_for_user(db, user.id, None).await?;

    let principal = AuthService::new(db)
        .login("  Jane@School.test ", factory::user::DEFAULT_PASSWORD)
        .await?;

    assert_eq!(principal.user_id, user.id);
    assert_eq!(principal.student_id, Some(student.id));
    assert!(principal.company_id.is_none());

    Ok(())
}

/// Tests that a wrong password and an unknown email fail the same way.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = AuthService::new(db);

    let wrong_password = service.login(&user.email, "not the password").await;
    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let unknown_email = service
        .login("nobody@school.test", factory::user::DEFAULT_PASSWORD)
        .await;
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that blank credentials are a validation error.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_blank_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db).login("   ", "").await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests registering a company and logging in with the new account.
///
/// Expected: Ok(Principal) with a company profile, login succeeds afterwards
#[tokio::test]
async fn registers_company() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let principal = service.register_company(signup("HR@Acme.test")).await?;

    assert_eq!(principal.email, "hr@acme.test");
    assert!(principal.company_id.is_some());
    assert!(!principal.admin);

    let logged_in = service.login("hr@acme.test", "correct horse").await?;
    assert_eq!(logged_in.user_id, principal.user_id);
    assert_eq!(logged_in.company_id, principal.company_id);

    Ok(())
}

/// Tests registering twice with the same email.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service.register_company(signup("hr@acme.test")).await?;

    let result = service.register_company(signup("hr@acme.test")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests the signup payload checks.
///
/// Expected: Err(AppError::Validation) for a short password, a malformed email and a
/// blank company name
#[tokio::test]
async fn validates_signup_payload() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);

    let mut short_password = signup("hr@acme.test");
    short_password.password = "short".to_string();
    assert!(matches!(
        service.register_company(short_password).await,
        Err(AppError::Validation(_))
    ));

    assert!(matches!(
        service.register_company(signup("not-an-email")).await,
        Err(AppError::Validation(_))
    ));

    let mut blank_company = signup("hr@acme.test");
    blank_company.company_name = "  ".to_string();
    assert!(matches!(
        service.register_company(blank_company).await,
        Err(AppError::Validation(_))
    ));

    Ok(())
}
