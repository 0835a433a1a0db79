//! Unit tests for the access-control crate
//!
//! Exercised against the in-memory repository; the Postgres
//! implementation mirrors its semantics.

mod helpers {
    use std::sync::Arc;

    use crate::application::config::AccessConfig;
    use crate::application::{SignUpInput, SignUpOutput, SignUpUseCase};
    use crate::domain::entity::user::User;
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::group::GroupSet;
    use crate::domain::value_object::user_id::UserId;
    use crate::infra::memory::MemoryRepository;

    pub fn setup() -> (Arc<MemoryRepository>, Arc<AccessConfig>) {
        (
            Arc::new(MemoryRepository::new()),
            Arc::new(AccessConfig::development()),
        )
    }

    pub async fn seed_anonymous(repo: &Arc<MemoryRepository>) {
        UserRepository::ensure_anonymous(repo.as_ref())
            .await
            .unwrap();
    }

    pub fn signup_input(login: &str, password: &str) -> SignUpInput {
        SignUpInput {
            login: login.to_string(),
            password1: password.to_string(),
            password2: password.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: format!("{login}@example.com"),
        }
    }

    pub async fn sign_up(
        repo: &Arc<MemoryRepository>,
        config: &Arc<AccessConfig>,
        login: &str,
        password: &str,
    ) -> SignUpOutput {
        SignUpUseCase::new(repo.clone(), repo.clone(), repo.clone(), config.clone())
            .execute(signup_input(login, password))
            .await
            .unwrap()
    }

    /// Grant the admin groups directly, the way an operator would
    /// provision an admin outside the API. Returns the refreshed user.
    pub async fn promote_to_admin(repo: &Arc<MemoryRepository>, user_id: &UserId) -> User {
        UserRepository::replace_groups(
            repo.as_ref(),
            user_id,
            &GroupSet::from_groups(["loggedInUsers", "members", "admins"]),
        )
        .await
        .unwrap()
        .unwrap()
    }
}

mod signup_tests {
    use super::helpers::*;
    use crate::application::{ResolveIdentityUseCase, SignUpUseCase};
    use crate::error::AuthError;

    #[tokio::test]
    async fn test_signup_assigns_initial_groups_and_session() {
        let (repo, config) = setup();

        let output = sign_up(&repo, &config, "alice", "correct horse").await;

        assert!(output.user.groups.contains("loggedInUsers"));
        assert!(output.user.groups.contains("notYetApprovedUsers"));
        assert!(!output.user.groups.contains("members"));

        // The returned token resolves straight to the new user.
        let resolve = ResolveIdentityUseCase::new(repo.clone(), repo.clone(), config.clone());
        let identity = resolve.execute(Some(&output.session_token)).await.unwrap();
        assert_eq!(identity.user_id, output.user.user_id);
    }

    #[tokio::test]
    async fn test_signup_validation_order() {
        let (repo, config) = setup();
        let use_case = SignUpUseCase::new(repo.clone(), repo.clone(), repo.clone(), config.clone());

        // Empty login is reported before anything else, even with bad
        // passwords in the same payload.
        let mut input = signup_input("   ", "pw");
        input.password2 = "other".to_string();
        match use_case.execute(input).await {
            Err(AuthError::InvalidInput(msg)) => assert!(msg.contains("login")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }

        let mut input = signup_input("bob", "   ");
        input.password2 = "other".to_string();
        match use_case.execute(input).await {
            Err(AuthError::InvalidInput(msg)) => assert!(msg.contains("password")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }

        let mut input = signup_input("bob", "pw1");
        input.password2 = "pw2".to_string();
        match use_case.execute(input).await {
            Err(AuthError::InvalidInput(msg)) => assert!(msg.contains("match")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_signup_accepts_single_character_password() {
        let (repo, config) = setup();
        let output = sign_up(&repo, &config, "carol", "x").await;
        assert_eq!(output.user.login.as_str(), "carol");
    }

    #[tokio::test]
    async fn test_duplicate_login_rejected() {
        let (repo, config) = setup();
        sign_up(&repo, &config, "alice", "pw").await;

        let use_case = SignUpUseCase::new(repo.clone(), repo.clone(), repo.clone(), config.clone());
        let result = use_case.execute(signup_input("alice", "other pw")).await;

        assert!(matches!(result, Err(AuthError::LoginTaken)));
    }

    #[tokio::test]
    async fn test_failed_validation_persists_nothing() {
        let (repo, config) = setup();
        let use_case = SignUpUseCase::new(repo.clone(), repo.clone(), repo.clone(), config.clone());

        let mut input = signup_input("dave", "pw1");
        input.password2 = "pw2".to_string();
        assert!(use_case.execute(input).await.is_err());

        // The login is still free.
        let output = sign_up(&repo, &config, "dave", "pw").await;
        assert_eq!(output.user.login.as_str(), "dave");
    }
}

mod login_tests {
    use super::helpers::*;
    use crate::application::{LogInInput, LogInUseCase, ResolveIdentityUseCase};

    fn login_input(login: &str, password: &str) -> LogInInput {
        LogInInput {
            login: login.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_with_correct_password() {
        let (repo, config) = setup();
        seed_anonymous(&repo).await;
        let created = sign_up(&repo, &config, "alice", "correct horse").await;

        let use_case = LogInUseCase::new(repo.clone(), repo.clone(), repo.clone(), config.clone());
        let output = use_case
            .execute(login_input("alice", "correct horse"))
            .await
            .unwrap();

        assert!(output.authenticated);
        assert_eq!(output.user.user_id, created.user.user_id);
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_binds_anonymous() {
        let (repo, config) = setup();
        seed_anonymous(&repo).await;
        sign_up(&repo, &config, "alice", "correct horse").await;

        let use_case = LogInUseCase::new(repo.clone(), repo.clone(), repo.clone(), config.clone());
        let output = use_case
            .execute(login_input("alice", "wrong password"))
            .await
            .unwrap();

        assert!(!output.authenticated);
        assert!(output.user.is_anonymous());

        // The session issued for the failed attempt resolves to the
        // anonymous identity, not to alice.
        let resolve = ResolveIdentityUseCase::new(repo.clone(), repo.clone(), config.clone());
        let identity = resolve.execute(Some(&output.session_token)).await.unwrap();
        assert!(identity.is_anonymous());
    }

    #[tokio::test]
    async fn test_login_with_unknown_login_binds_anonymous() {
        let (repo, config) = setup();
        seed_anonymous(&repo).await;

        let use_case = LogInUseCase::new(repo.clone(), repo.clone(), repo.clone(), config.clone());
        let output = use_case
            .execute(login_input("nobody", "whatever"))
            .await
            .unwrap();

        assert!(!output.authenticated);
        assert!(output.user.is_anonymous());
    }

    #[tokio::test]
    async fn test_login_as_anonymous_sentinel_never_authenticates() {
        let (repo, config) = setup();
        seed_anonymous(&repo).await;

        // The sentinel has no credential row, so even its own login
        // cannot produce an authenticated session.
        let use_case = LogInUseCase::new(repo.clone(), repo.clone(), repo.clone(), config.clone());
        let output = use_case
            .execute(login_input("anonymousUser", ""))
            .await
            .unwrap();

        assert!(!output.authenticated);
        assert!(output.user.is_anonymous());
    }
}

mod identity_tests {
    use super::helpers::*;
    use crate::application::{ResolveIdentityUseCase, token};
    use crate::domain::entity::session::Session;
    use crate::domain::repository::SessionRepository;
    use std::time::Duration;

    #[tokio::test]
    async fn test_missing_token_resolves_to_anonymous() {
        let (repo, config) = setup();
        seed_anonymous(&repo).await;

        let resolve = ResolveIdentityUseCase::new(repo.clone(), repo.clone(), config.clone());
        let identity = resolve.execute(None).await.unwrap();

        assert!(identity.is_anonymous());
    }

    #[tokio::test]
    async fn test_tampered_token_resolves_to_anonymous() {
        let (repo, config) = setup();
        seed_anonymous(&repo).await;
        let output = sign_up(&repo, &config, "alice", "pw").await;

        let mut tampered = output.session_token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        let resolve = ResolveIdentityUseCase::new(repo.clone(), repo.clone(), config.clone());
        let identity = resolve.execute(Some(&tampered)).await.unwrap();

        assert!(identity.is_anonymous());
    }

    #[tokio::test]
    async fn test_garbage_token_resolves_to_anonymous() {
        let (repo, config) = setup();
        seed_anonymous(&repo).await;

        let resolve = ResolveIdentityUseCase::new(repo.clone(), repo.clone(), config.clone());
        let identity = resolve.execute(Some("not-a-token")).await.unwrap();

        assert!(identity.is_anonymous());
    }

    #[tokio::test]
    async fn test_expired_session_is_reaped_and_falls_back() {
        let (repo, config) = setup();
        seed_anonymous(&repo).await;
        let output = sign_up(&repo, &config, "alice", "pw").await;

        let mut session = Session::new(output.user.user_id, Duration::ZERO);
        session.expires_at_ms -= 1;
        SessionRepository::create(repo.as_ref(), &session)
            .await
            .unwrap();
        let stale_token = token::sign_session_token(&config.session_secret, session.session_id);

        let resolve = ResolveIdentityUseCase::new(repo.clone(), repo.clone(), config.clone());
        let identity = resolve.execute(Some(&stale_token)).await.unwrap();

        assert!(identity.is_anonymous());
        // Resolution deleted the expired session.
        let remaining = SessionRepository::find_by_id(repo.as_ref(), session.session_id)
            .await
            .unwrap();
        assert!(remaining.is_none());
    }
}

mod approval_tests {
    use super::helpers::*;
    use crate::application::ApproveUserUseCase;
    use crate::domain::entity::user::User;
    use crate::domain::value_object::user_id::UserId;
    use crate::error::AuthError;

    #[tokio::test]
    async fn test_anonymous_caller_is_rejected_first() {
        let (repo, config) = setup();
        seed_anonymous(&repo).await;
        let target = sign_up(&repo, &config, "newbie", "pw").await;

        let use_case = ApproveUserUseCase::new(repo.clone());
        let result = use_case
            .execute(&User::anonymous(), &target.user.user_id)
            .await;

        assert!(matches!(result, Err(AuthError::SignInRequired)));
    }

    #[tokio::test]
    async fn test_authenticated_non_admin_is_rejected() {
        let (repo, config) = setup();
        let caller = sign_up(&repo, &config, "plain", "pw").await;
        let target = sign_up(&repo, &config, "newbie", "pw").await;

        let use_case = ApproveUserUseCase::new(repo.clone());
        let result = use_case.execute(&caller.user, &target.user.user_id).await;

        assert!(matches!(result, Err(AuthError::AdminRequired)));
    }

    #[tokio::test]
    async fn test_admin_approval_replaces_group_set() {
        let (repo, config) = setup();
        let admin = sign_up(&repo, &config, "admin", "pw").await;
        let admin_user = promote_to_admin(&repo, &admin.user.user_id).await;
        let target = sign_up(&repo, &config, "newbie", "pw").await;

        let use_case = ApproveUserUseCase::new(repo.clone());
        let updated = use_case
            .execute(&admin_user, &target.user.user_id)
            .await
            .unwrap();

        assert!(updated.groups.contains("loggedInUsers"));
        assert!(updated.groups.contains("members"));
        assert!(!updated.groups.contains("notYetApprovedUsers"));
        assert_eq!(updated.groups.len(), 2);
    }

    #[tokio::test]
    async fn test_approving_unknown_target_is_not_found() {
        let (repo, config) = setup();
        let admin = sign_up(&repo, &config, "admin", "pw").await;
        let admin_user = promote_to_admin(&repo, &admin.user.user_id).await;

        let use_case = ApproveUserUseCase::new(repo.clone());
        let result = use_case.execute(&admin_user, &UserId::new()).await;

        assert!(matches!(result, Err(AuthError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_approval_is_idempotent() {
        let (repo, config) = setup();
        let admin = sign_up(&repo, &config, "admin", "pw").await;
        let admin_user = promote_to_admin(&repo, &admin.user.user_id).await;
        let target = sign_up(&repo, &config, "newbie", "pw").await;

        let use_case = ApproveUserUseCase::new(repo.clone());
        let first = use_case
            .execute(&admin_user, &target.user.user_id)
            .await
            .unwrap();
        let second = use_case
            .execute(&admin_user, &target.user.user_id)
            .await
            .unwrap();

        assert_eq!(first.groups, second.groups);
    }
}

mod logout_tests {
    use super::helpers::*;
    use crate::application::{LogOutUseCase, ResolveIdentityUseCase};

    #[tokio::test]
    async fn test_logout_destroys_session() {
        let (repo, config) = setup();
        seed_anonymous(&repo).await;
        let output = sign_up(&repo, &config, "alice", "pw").await;

        let log_out = LogOutUseCase::new(repo.clone(), repo.clone(), config.clone());
        let anonymous = log_out.execute(Some(&output.session_token)).await.unwrap();
        assert!(anonymous.is_anonymous());

        // The destroyed token no longer resolves to alice.
        let resolve = ResolveIdentityUseCase::new(repo.clone(), repo.clone(), config.clone());
        let identity = resolve.execute(Some(&output.session_token)).await.unwrap();
        assert!(identity.is_anonymous());
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let (repo, config) = setup();
        seed_anonymous(&repo).await;
        let output = sign_up(&repo, &config, "alice", "pw").await;

        let log_out = LogOutUseCase::new(repo.clone(), repo.clone(), config.clone());
        log_out.execute(Some(&output.session_token)).await.unwrap();
        let again = log_out.execute(Some(&output.session_token)).await.unwrap();
        assert!(again.is_anonymous());

        let without_token = log_out.execute(None).await.unwrap();
        assert!(without_token.is_anonymous());
    }
}

mod listing_tests {
    use super::helpers::*;
    use crate::application::ListUnapprovedUsersUseCase;
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::group::GroupSet;

    #[tokio::test]
    async fn test_lists_only_unapproved_users() {
        let (repo, config) = setup();
        let pending = sign_up(&repo, &config, "pending", "pw").await;
        let approved = sign_up(&repo, &config, "approved", "pw").await;

        UserRepository::replace_groups(repo.as_ref(), &approved.user.user_id, &GroupSet::approved())
            .await
            .unwrap()
            .unwrap();

        let use_case = ListUnapprovedUsersUseCase::new(repo.clone());
        let users = use_case.execute().await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].user_id, pending.user.user_id);
    }

    #[tokio::test]
    async fn test_similar_group_name_does_not_match() {
        let (repo, config) = setup();
        let archived = sign_up(&repo, &config, "archived", "pw").await;

        UserRepository::replace_groups(
            repo.as_ref(),
            &archived.user.user_id,
            &GroupSet::from_groups(["notYetApprovedUsersArchive"]),
        )
        .await
        .unwrap()
        .unwrap();

        let use_case = ListUnapprovedUsersUseCase::new(repo.clone());
        let users = use_case.execute().await.unwrap();

        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_empty_listing_is_ok() {
        let (repo, _config) = setup();

        let use_case = ListUnapprovedUsersUseCase::new(repo.clone());
        let users = use_case.execute().await.unwrap();

        assert!(users.is_empty());
    }
}

mod token_tests {
    use crate::application::token;
    use uuid::Uuid;

    #[test]
    fn test_token_shape_is_id_dot_signature() {
        let secret = [7u8; 32];
        let id = Uuid::new_v4();

        let token = token::sign_session_token(&secret, id);
        let (left, right) = token.split_once('.').unwrap();

        assert_eq!(left, id.to_string());
        assert!(!right.is_empty());
    }

    #[test]
    fn test_token_rejects_wrong_secret() {
        let id = Uuid::new_v4();
        let token = token::sign_session_token(&[1u8; 32], id);

        assert_eq!(token::parse_session_token(&[1u8; 32], &token), Some(id));
        assert_eq!(token::parse_session_token(&[2u8; 32], &token), None);
    }
}

mod dto_tests {
    use crate::presentation::dto::*;

    #[test]
    fn test_signup_request_deserialization() {
        let json = r#"{"user":{"login":"alice","password1":"pw","password2":"pw","firstName":"Alice","lastName":"Smith","email":"alice@example.com"}}"#;
        let request: SignUpRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.user.login, "alice");
        assert_eq!(request.user.first_name, "Alice");
    }

    #[test]
    fn test_signup_request_profile_fields_default() {
        let json = r#"{"user":{"login":"alice","password1":"pw","password2":"pw"}}"#;
        let request: SignUpRequest = serde_json::from_str(json).unwrap();

        assert!(request.user.first_name.is_empty());
        assert!(request.user.last_name.is_empty());
        assert!(request.user.email.is_empty());
    }

    #[test]
    fn test_user_response_is_camel_case_without_credentials() {
        let user = crate::domain::entity::user::User::new(
            crate::domain::value_object::login::Login::new("alice").unwrap(),
            crate::domain::value_object::group::GroupSet::initial_signup(),
            "Alice",
            "Smith",
            "alice@example.com",
        );

        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();

        assert!(json.contains("firstName"));
        assert!(json.contains("lastName"));
        assert!(json.contains("loggedInUsers"));
        assert!(!json.contains("password"));
        assert!(!json.contains("hash"));
    }
}
