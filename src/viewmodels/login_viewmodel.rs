// ============================================================================
// LOGIN VIEWMODEL - authenticate, then fetch and publish the profile
// ============================================================================

use std::rc::Rc;
use crate::config::CONFIG;
use crate::error::{AppError, AppResult};
use crate::models::Credentials;
use crate::services::{ApiClient, Navigator, SessionService};
use crate::state::{validate, LoginState, Notification, ProfileSink, ReactiveState};

pub const WELCOME_MESSAGE: &str = "Welcome Back !!!";

#[derive(Clone)]
pub struct LoginViewModel {
    api: ApiClient,
    sessions: SessionService,
    profile_sink: Rc<dyn ProfileSink>,
    navigator: Rc<dyn Navigator>,
    state: ReactiveState<LoginState>,
    home_path: String,
}

impl LoginViewModel {
    pub fn new(
        api: ApiClient,
        sessions: SessionService,
        profile_sink: Rc<dyn ProfileSink>,
        navigator: Rc<dyn Navigator>,
        state: ReactiveState<LoginState>,
    ) -> Self {
        Self {
            api,
            sessions,
            profile_sink,
            navigator,
            state,
            home_path: CONFIG.home_path.clone(),
        }
    }

    pub fn with_home_path(mut self, path: impl Into<String>) -> Self {
        self.home_path = path.into();
        self
    }

    pub fn state(&self) -> &ReactiveState<LoginState> {
        &self.state
    }

    /// Submit what is currently in the form. A second submit while one is in flight is dropped.
    pub async fn submit(&self) -> AppResult<()> {
        if self.state.borrow().submitting {
            log::warn!("⚠️ [LOGIN] Submit ignored, a login is already in flight");
            return Ok(());
        }
        let credentials = self.state.borrow().credentials();
        self.authenticate(&credentials).await
    }

    /// Login, persist the session, fetch and persist the profile, publish it, go home.
    ///
    /// Not transactional: when the profile fetch fails the session stays stored.
    pub async fn authenticate(&self, credentials: &Credentials) -> AppResult<()> {
        if let Err(errors) = validate(credentials) {
            log::warn!("⚠️ [LOGIN] Validation failed: {}", errors);
            self.state.update(|s| s.field_errors = errors.clone());
            return Err(AppError::Validation(errors));
        }

        self.state.update(|s| {
            s.field_errors = Default::default();
            s.submitting = true;
            s.notification = None;
        });

        match self.run(credentials).await {
            Ok(()) => {
                self.state.update(|s| {
                    s.submitting = false;
                    s.password.clear();
                    s.notification = Some(Notification::success(WELCOME_MESSAGE));
                });
                self.navigator.replace(&self.home_path)?;
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [LOGIN] Login failed ({}): {}", e.cause(), e);
                self.state.update(|s| {
                    s.submitting = false;
                    s.notification = Some(Notification::error(e.user_message()));
                });
                Err(e)
            }
        }
    }

    async fn run(&self, credentials: &Credentials) -> AppResult<()> {
        let session = self.api.login(credentials).await?;
        self.sessions.save_session(&session)?;
        log::info!("✅ [LOGIN] Authenticated as {}", credentials.username);

        let profile = self.api.fetch_profile(&session).await?;
        self.sessions.save_profile(&profile)?;
        self.profile_sink.set_profile(profile);
        Ok(())
    }

    /// Keystrokes go straight into state so a re-render rebuilds the form
    /// with what the user typed. No re-render is triggered from here.
    pub fn input_username(&self, username: String) {
        self.state.update_silently(|s| s.username = username);
    }

    pub fn input_password(&self, password: String) {
        self.state.update_silently(|s| s.password = password);
    }

    pub fn dismiss_notification(&self) {
        self.state.update(|s| s.notification = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{HttpError, ValidationError};
    use crate::models::{Profile, Session};
    use crate::services::storage::{KeyValueStore, MemoryStorage};
    use crate::services::{PROFILE_STORAGE_KEY, TOKEN_STORAGE_KEY};
    use crate::state::NotificationKind;
    use crate::testing::{MockHttp, MockNavigator, RecordingSink, RefusingStore};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    struct Harness {
        http: Rc<MockHttp>,
        store: Rc<MemoryStorage>,
        sink: Rc<RecordingSink>,
        navigator: Rc<MockNavigator>,
        vm: LoginViewModel,
    }

    fn harness() -> Harness {
        let http = Rc::new(MockHttp::new());
        let store = Rc::new(MemoryStorage::new());
        let sink = Rc::new(RecordingSink::default());
        let navigator = Rc::new(MockNavigator::default());
        let vm = LoginViewModel::new(
            ApiClient::with_http(http.clone(), "http://auth", "http://api"),
            SessionService::with_store(store.clone()),
            sink.clone(),
            navigator.clone(),
            ReactiveState::default(),
        )
        .with_home_path("/");
        Harness { http, store, sink, navigator, vm }
    }

    fn stored(store: &MemoryStorage, key: &str) -> Option<Value> {
        store
            .get_item(key)
            .unwrap()
            .map(|s| serde_json::from_str(&s).unwrap())
    }

    #[test]
    fn empty_fields_fail_validation_without_network() {
        for (user, pass) in [("", "pw"), ("alice", ""), ("", "")] {
            let h = harness();
            let err = block_on(h.vm.authenticate(&Credentials::new(user, pass))).unwrap_err();

            assert!(matches!(err, AppError::Validation(_)));
            assert_eq!(h.http.request_count(), 0);
            assert!(h.store.is_empty());
        }
    }

    #[test]
    fn validation_errors_land_on_the_form() {
        let h = harness();
        let _ = block_on(h.vm.authenticate(&Credentials::new("", "pw")));

        let expected = ValidationError {
            username: Some("email not empty".into()),
            password: None,
        };
        assert_eq!(h.vm.state().get().field_errors, expected);
    }

    #[test]
    fn successful_login_persists_pair_publishes_profile_and_replaces_history() {
        let h = harness();
        h.http.respond(200, json!({"access_token": "T"}));
        h.http.respond(200, json!({"user": {"name": "Alice", "role": "admin"}}));

        block_on(h.vm.authenticate(&Credentials::new("alice", "pw"))).unwrap();

        assert_eq!(stored(&h.store, TOKEN_STORAGE_KEY), Some(json!({"access_token": "T"})));
        assert_eq!(stored(&h.store, PROFILE_STORAGE_KEY), Some(json!({"name": "Alice", "role": "admin"})));
        assert_eq!(h.store.len(), 2);

        let profile: Profile = serde_json::from_value(json!({"name": "Alice", "role": "admin"})).unwrap();
        assert_eq!(h.sink.profiles(), vec![profile]);
        assert_eq!(h.navigator.replaced(), vec!["/".to_string()]);

        let requests = h.http.requests();
        assert_eq!(requests[1].header_value("Authorization"), Some("Bearer T"));

        let state = h.vm.state().get();
        assert!(!state.submitting);
        assert_eq!(state.notification, Some(Notification::success(WELCOME_MESSAGE)));
    }

    #[test]
    fn server_rejection_surfaces_message_and_writes_nothing() {
        let h = harness();
        h.http.respond(401, json!({"message": "Username or password incorrect"}));

        let err = block_on(h.vm.authenticate(&Credentials::new("alice", "bad"))).unwrap_err();

        assert_eq!(err, AppError::Server { status: 401, message: "Username or password incorrect".into() });
        assert!(h.store.is_empty());
        assert!(h.navigator.replaced().is_empty());
        let note = h.vm.state().get().notification.unwrap();
        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(note.message, "Username or password incorrect");
    }

    #[test]
    fn network_failure_is_reported_as_network_error() {
        let h = harness();
        h.http.fail(HttpError::NoResponse("Failed to fetch".into()));

        let err = block_on(h.vm.authenticate(&Credentials::new("alice", "pw"))).unwrap_err();

        assert!(matches!(err, AppError::Network(_)));
        assert_eq!(h.http.request_count(), 1);
    }

    #[test]
    fn profile_failure_keeps_session_but_reports_failure() {
        let h = harness();
        h.http.respond(200, json!({"access_token": "T"}));
        h.http.respond(500, json!({"message": "profile unavailable"}));

        let err = block_on(h.vm.authenticate(&Credentials::new("alice", "pw"))).unwrap_err();

        assert_eq!(err.user_message(), "profile unavailable");
        assert_eq!(stored(&h.store, TOKEN_STORAGE_KEY), Some(json!({"access_token": "T"})));
        assert_eq!(stored(&h.store, PROFILE_STORAGE_KEY), None);
        assert!(h.sink.profiles().is_empty());
        assert!(h.navigator.replaced().is_empty());
    }

    #[test]
    fn submit_reads_the_form_and_ignores_double_submit() {
        let h = harness();
        h.vm.input_username("alice".into());
        h.vm.input_password("pw".into());
        h.vm.state().update(|s| s.submitting = true);

        block_on(h.vm.submit()).unwrap();
        assert_eq!(h.http.request_count(), 0);

        h.vm.state().update(|s| s.submitting = false);
        h.http.respond(200, json!({"access_token": "T"}));
        h.http.respond(200, json!({"user": {}}));
        block_on(h.vm.submit()).unwrap();

        assert_eq!(h.http.request_count(), 2);
        let session: Option<Session> = stored(&h.store, TOKEN_STORAGE_KEY).map(|v| serde_json::from_value(v).unwrap());
        assert_eq!(session, Some(Session::new("T")));
        assert_eq!(h.vm.state().get().password, "");
    }

    #[test]
    fn storage_failure_ends_the_submit_with_an_error_toast() {
        let http = Rc::new(MockHttp::new());
        let navigator = Rc::new(MockNavigator::default());
        let vm = LoginViewModel::new(
            ApiClient::with_http(http.clone(), "http://auth", "http://api"),
            SessionService::with_store(Rc::new(RefusingStore)),
            Rc::new(RecordingSink::default()),
            navigator.clone(),
            ReactiveState::default(),
        );
        http.respond(200, json!({"access_token": "T"}));

        let err = block_on(vm.authenticate(&Credentials::new("alice", "pw"))).unwrap_err();

        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(http.request_count(), 1);
        assert!(navigator.replaced().is_empty());
        let state = vm.state().get();
        assert!(!state.submitting);
        assert_eq!(state.notification.map(|n| n.kind), Some(NotificationKind::Error));
    }

    #[test]
    fn typing_after_a_failed_login_survives_the_toast_dismiss() {
        let h = harness();
        h.http.respond(401, json!({"message": "Username or password incorrect"}));
        h.vm.input_username("alice".into());
        h.vm.input_password("bad".into());
        let _ = block_on(h.vm.submit());

        h.vm.input_username("alice2".into());
        h.vm.input_password("good".into());
        h.vm.dismiss_notification();

        let state = h.vm.state().get();
        assert_eq!(state.notification, None);
        assert_eq!(state.credentials(), Credentials::new("alice2", "good"));
    }
}
