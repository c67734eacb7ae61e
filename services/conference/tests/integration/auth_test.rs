use podium_conference::error::ConferenceError;
use podium_conference::usecase::auth::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use podium_domain::role::Role;

use crate::helpers::{InMemoryStore, TEST_PASSWORD, fixture};

fn login(name: &str, password: &str) -> LoginInput {
    LoginInput {
        name: name.into(),
        password: password.into(),
    }
}

fn register(name: &str, password: &str) -> RegisterInput {
    RegisterInput {
        name: name.into(),
        password: password.into(),
        role: Role::Presenter,
    }
}

// ── LoginUseCase ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_log_in_with_correct_password() {
    let f = fixture();
    let usecase = LoginUseCase { repo: f.store };

    let user = usecase.execute(login("alice", TEST_PASSWORD)).await.unwrap();
    assert_eq!(user.id, f.presenter.id);
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let f = fixture();
    let usecase = LoginUseCase { repo: f.store };

    let result = usecase.execute(login("alice", "wrong")).await;
    assert!(
        matches!(result, Err(ConferenceError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_unknown_user_like_wrong_password() {
    let usecase = LoginUseCase {
        repo: InMemoryStore::seeded(),
    };

    let result = usecase.execute(login("nobody", TEST_PASSWORD)).await;
    assert!(matches!(result, Err(ConferenceError::InvalidCredentials)));
}

#[tokio::test]
async fn should_reject_empty_password() {
    let f = fixture();
    let usecase = LoginUseCase { repo: f.store };

    let result = usecase.execute(login("alice", "")).await;
    assert!(matches!(result, Err(ConferenceError::InvalidCredentials)));
}

// ── RegisterUseCase ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_presenter_and_log_in() {
    let store = InMemoryStore::seeded();
    let usecase = RegisterUseCase {
        repo: store.clone(),
    };

    let user = usecase.execute(register("bob", "hunter2")).await.unwrap();
    assert_eq!(user.name, "bob");
    assert_eq!(user.role(), Some(Role::Presenter));
    assert_ne!(user.password_hash, "hunter2");

    let logged_in = LoginUseCase { repo: store }
        .execute(login("bob", "hunter2"))
        .await
        .unwrap();
    assert_eq!(logged_in.id, user.id);
}

#[tokio::test]
async fn should_reject_duplicate_username() {
    let f = fixture();
    let usecase = RegisterUseCase { repo: f.store };

    let result = usecase.execute(register("alice", "another")).await;
    assert!(
        matches!(result, Err(ConferenceError::UserAlreadyExists)),
        "expected UserAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_duplicate_username_with_padding() {
    let f = fixture();
    let usecase = RegisterUseCase { repo: f.store };

    let result = usecase.execute(register("  alice ", "another")).await;
    assert!(matches!(result, Err(ConferenceError::UserAlreadyExists)));
}

#[tokio::test]
async fn should_reject_invalid_username() {
    let usecase = RegisterUseCase {
        repo: InMemoryStore::seeded(),
    };

    let too_long = "x".repeat(65);
    for name in ["", "   ", "a/b", too_long.as_str()] {
        let result = usecase.execute(register(name, "pw")).await;
        assert!(
            matches!(result, Err(ConferenceError::InvalidUsername)),
            "{name:?}: got {result:?}"
        );
    }
}

#[tokio::test]
async fn should_reject_missing_password() {
    let usecase = RegisterUseCase {
        repo: InMemoryStore::seeded(),
    };

    let result = usecase.execute(register("carol", "")).await;
    assert!(matches!(result, Err(ConferenceError::MissingPassword)));
}

#[tokio::test]
async fn should_register_administrator_when_requested() {
    let usecase = RegisterUseCase {
        repo: InMemoryStore::seeded(),
    };

    let user = usecase
        .execute(RegisterInput {
            name: "root".into(),
            password: "pw".into(),
            role: Role::Administrator,
        })
        .await
        .unwrap();
    assert!(user.is_admin());
}
