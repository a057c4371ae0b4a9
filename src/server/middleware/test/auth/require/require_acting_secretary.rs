use super::*;

/// Tests that a present secretary holds secretary authority.
///
/// Expected: Ok for both `Secretary` and `ActingSecretary`
#[tokio::test]
async fn present_secretary_passes() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let chain = factory::helpers::create_delegation_chain(db, false).await?;
    AuthSession::new(session)
        .set_user_id(chain.secretary.user_id)
        .await?;

    let auth_guard = AuthGuard::new(db, session);
    let principal = auth_guard
        .require(&[Permission::Secretary, Permission::ActingSecretary])
        .await?;

    assert_eq!(principal.secretary_id, Some(chain.secretary.id));

    Ok(())
}

/// Tests that a secretary on leave loses acting authority but keeps the leave endpoints.
///
/// Expected: Ok for `Secretary`, Err(AuthError::AccessDenied) for `ActingSecretary`
#[tokio::test]
async fn secretary_on_leave_loses_authority() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let chain = factory::helpers::create_delegation_chain(db, true).await?;
    AuthSession::new(session)
        .set_user_id(chain.secretary.user_id)
        .await?;

    let auth_guard = AuthGuard::new(db, session);
    assert!(auth_guard.require(&[Permission::Secretary]).await.is_ok());

    let result = auth_guard.require(&[Permission::ActingSecretary]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that the referent teacher acts for the secretary only during leave.
///
/// Verifies the teacher is denied while the secretary is present, passes once the
/// secretary is on leave, and never passes the `Secretary` permission.
///
/// Expected: Err then Ok for `ActingSecretary`, Err for `Secretary`
#[tokio::test]
async fn referent_teacher_acts_during_leave_only() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let present = factory::helpers::create_delegation_chain(db, false).await?;
    AuthSession::new(session)
        .set_user_id(present.teacher.user_id)
        .await?;

    let auth_guard = AuthGuard::new(db, session);
    assert!(matches!(
        auth_guard.require(&[Permission::ActingSecretary]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let away = factory::helpers::create_delegation_chain(db, true).await?;
    AuthSession::new(session)
        .set_user_id(away.teacher.user_id)
        .await?;

    let principal = auth_guard.require(&[Permission::ActingSecretary]).await?;
    assert_eq!(principal.teacher_id, Some(away.teacher.id));

    let result = auth_guard.require(&[Permission::Secretary]).await;
    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, reason))) => {
            assert_eq!(user_id, away.teacher.user_id);
            assert!(reason.contains("secretary"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}

/// Tests that admins pass the acting secretary check without any group.
///
/// Expected: Ok(Principal) with admin=true
#[tokio::test]
async fn admin_passes_without_groups() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let principal = auth_guard.require(&[Permission::ActingSecretary]).await?;

    assert!(principal.admin);

    Ok(())
}
