mod common;

use anyhow::Result;
use uniadmin_rust::session::{AuthProvider, AuthState, SessionStore};
use uuid::Uuid;

fn temp_store() -> SessionStore {
    let path = std::env::temp_dir().join(format!("uniadmin-test-{}.json", Uuid::new_v4()));
    SessionStore::at(path)
}

#[tokio::test]
async fn sign_in_persists_and_a_restart_restores_the_session() -> Result<()> {
    let ctx = common::context();
    ctx.mock
        .seed_user("admin@uni.edu", "secreto", "Admin General", "admin");
    let store = temp_store();

    let mut provider = AuthProvider::new(ctx.backend.clone(), store.clone());
    provider.initialize();
    assert_eq!(provider.state(), &AuthState::Anonymous);

    let session = provider.sign_in("admin@uni.edu", "secreto").await?;
    assert_eq!(session.email.as_deref(), Some("admin@uni.edu"));
    assert!(provider.is_authenticated());

    let calls_after_sign_in = ctx.mock.calls();

    // Simulated restart: a fresh provider over the same store must restore
    // the identical session without touching the backend.
    let mut restarted = AuthProvider::new(ctx.backend.clone(), store.clone());
    restarted.initialize();
    assert_eq!(restarted.current_user(), Some(&session));
    assert_eq!(ctx.mock.calls(), calls_after_sign_in);

    restarted.sign_out()?;
    assert_eq!(restarted.state(), &AuthState::Anonymous);

    let mut after_logout = AuthProvider::new(ctx.backend, store);
    after_logout.initialize();
    assert_eq!(after_logout.state(), &AuthState::Anonymous);

    Ok(())
}

#[tokio::test]
async fn invalid_credentials_leave_prior_state_untouched() {
    let ctx = common::context();
    ctx.mock.seed_user("admin@uni.edu", "secreto", "Admin", "admin");

    let mut provider = AuthProvider::new(ctx.backend, temp_store());
    provider.initialize();

    let err = provider
        .sign_in("admin@uni.edu", "incorrecta")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Credenciales inválidas");
    assert_eq!(provider.state(), &AuthState::Anonymous);
}

#[tokio::test]
async fn corrupt_session_file_restores_as_anonymous() {
    let ctx = common::context();
    let path = std::env::temp_dir().join(format!("uniadmin-test-{}.json", Uuid::new_v4()));
    std::fs::write(&path, "{ not json").unwrap();

    let mut provider = AuthProvider::new(ctx.backend, SessionStore::at(path.clone()));
    provider.initialize();
    assert_eq!(provider.state(), &AuthState::Anonymous);

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn sign_out_is_idempotent() -> Result<()> {
    let ctx = common::context();
    let mut provider = AuthProvider::new(ctx.backend, temp_store());
    provider.initialize();
    provider.sign_out()?;
    provider.sign_out()?;
    assert_eq!(provider.state(), &AuthState::Anonymous);
    Ok(())
}

#[tokio::test]
async fn backend_failure_during_sign_in_surfaces_verbatim() {
    let ctx = common::context();
    let mut provider = AuthProvider::new(ctx.backend, temp_store());
    provider.initialize();

    ctx.mock.fail_next("DB down");
    let err = provider.sign_in("a@b.com", "x").await.unwrap_err();
    assert_eq!(err.to_string(), "DB down");
    assert_eq!(provider.state(), &AuthState::Anonymous);
}
