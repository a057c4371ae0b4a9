use super::*;

/// Tests that the company permission requires a company profile.
///
/// Expected: Ok for the company, Err(AuthError::AccessDenied) for a student
#[tokio::test]
async fn company_permission_requires_company_profile() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let company = factory::create_company(db).await?;
    let student = factory::create_student(db).await?;
    let auth_session = AuthSession::new(session);
    let auth_guard = AuthGuard::new(db, session);

    auth_session.set_user_id(company.user_id).await?;
    let principal = auth_guard.require(&[Permission::Company]).await?;
    assert_eq!(principal.company()?, company.id);

    auth_session.set_user_id(student.user_id).await?;
    let result = auth_guard.require(&[Permission::Company]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that the student permission requires a student profile.
///
/// Expected: Err(AuthError::AccessDenied) for a company user
#[tokio::test]
async fn student_permission_denies_company() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let company = factory::create_company(db).await?;
    AuthSession::new(session)
        .set_user_id(company.user_id)
        .await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Student]).await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, reason))) => {
            assert_eq!(user_id, company.user_id);
            assert!(reason.contains("student"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}

/// Tests that staff covers teachers and admins but not secretaries.
///
/// Expected: Ok for a teacher and an admin, Err(AuthError::AccessDenied) for a secretary
#[tokio::test]
async fn staff_permission_covers_teachers_and_admins() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let teacher = factory::create_teacher(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let secretary = factory::create_secretary(db).await?;
    let auth_session = AuthSession::new(session);
    let auth_guard = AuthGuard::new(db, session);

    auth_session.set_user_id(teacher.user_id).await?;
    assert!(auth_guard.require(&[Permission::Staff]).await.is_ok());

    auth_session.set_user_id(admin.id).await?;
    assert!(auth_guard.require(&[Permission::Staff]).await.is_ok());

    auth_session.set_user_id(secretary.user_id).await?;
    let result = auth_guard.require(&[Permission::Staff]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that only admins pass the admin permission.
///
/// Expected: Ok(Principal) with admin=true
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::UserFactory::new(db)
        .name("Head of Studies")
        .admin(true)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let principal = auth_guard.require(&[Permission::Admin]).await?;

    assert!(principal.admin);
    assert_eq!(principal.name, "Head of Studies");

    Ok(())
}
