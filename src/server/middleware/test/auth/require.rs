use super::*;

mod require_acting_secretary;
mod require_role;

/// Tests that a request without a logged in user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session pointing at a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase) carrying the stale id
#[tokio::test]
async fn rejects_session_of_unknown_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(4242).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(user_id))) => {
            assert_eq!(user_id, 4242)
        }
        other => panic!("Expected UserNotInDatabase, got: {:?}", other),
    }

    Ok(())
}

/// Tests that an empty permission list only requires authentication.
///
/// Expected: Ok(Principal) with the profiles of the user
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
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
    let principal = auth_guard.require(&[]).await?;

    assert_eq!(principal.user_id, company.user_id);
    assert_eq!(principal.company_id, Some(company.id));
    assert!(principal.student_id.is_none());

    Ok(())
}

/// Tests that every listed permission must hold.
///
/// Verifies that a teacher passes `Staff` but fails once `Admin` is added.
///
/// Expected: Err(AuthError::AccessDenied) mentioning the admin role
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let teacher = factory::create_teacher(db).await?;
    AuthSession::new(session)
        .set_user_id(teacher.user_id)
        .await?;

    let auth_guard = AuthGuard::new(db, session);
    assert!(auth_guard.require(&[Permission::Staff]).await.is_ok());

    let result = auth_guard
        .require(&[Permission::Staff, Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, reason))) => {
            assert_eq!(user_id, teacher.user_id);
            assert!(reason.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}
