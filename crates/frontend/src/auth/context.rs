//! Session context and provider.
//!
//! The session is the tab-local belief about the current principal, derived
//! from the token slot. It is never authoritative: on mount it is recomputed
//! from token presence, and `user` is advisory display data.

use playforge_http::types::UserProfile;
use std::rc::Rc;
use yew::prelude::*;

use super::service::AuthService;

/// In-memory session state
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
}

/// Session state transitions
pub enum SessionAction {
    /// A login/signup just completed with this profile
    SignedIn(UserProfile),
    /// Mount-time rehydration found a token (profile cache may be empty)
    Rehydrated(Option<UserProfile>),
    SignedOut,
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::SignedIn(profile) => Rc::new(Self {
                user: Some(profile),
                is_authenticated: true,
            }),
            SessionAction::Rehydrated(user) => Rc::new(Self {
                user,
                is_authenticated: true,
            }),
            SessionAction::SignedOut => Rc::new(Self::default()),
        }
    }
}

/// Handle passed through context: current state plus the operations that are
/// allowed to mutate it
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    state: UseReducerHandle<Session>,
    auth: AuthService,
}

impl SessionHandle {
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.state.user.clone()
    }

    /// The injected auth service, for views that issue their own calls
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// Record a completed login/signup.
    ///
    /// The caller is responsible for having gone through
    /// [`AuthService::login`]/[`AuthService::signup`] already; the token is
    /// expected to be persisted by the time this runs.
    pub fn login(&self, profile: UserProfile) {
        self.auth.remember_profile(&profile);
        self.state.dispatch(SessionAction::SignedIn(profile));
    }

    /// End the session.
    ///
    /// Local state is invalidated immediately; the server notification is
    /// fire-and-forget and can never un-do the local transition.
    pub fn logout(&self) {
        let revoked = self.auth.sign_out_local();
        self.state.dispatch(SessionAction::SignedOut);

        let auth = self.auth.clone();
        wasm_bindgen_futures::spawn_local(async move {
            auth.notify_logout(revoked).await;
        });
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    /// Injected explicitly so tests can substitute a memory-backed service
    pub auth: AuthService,
    pub children: Children,
}

/// Session provider component
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_reducer(Session::default);

    // Rehydrate from the persistent slots on mount
    {
        let state = state.clone();
        let auth = props.auth.clone();
        use_effect_with((), move |_| {
            // Reading the profile also purges it if the token is gone
            let profile = auth.cached_profile();
            if auth.is_authenticated() {
                state.dispatch(SessionAction::Rehydrated(profile));
            }
            || ()
        });
    }

    let handle = SessionHandle {
        state,
        auth: props.auth.clone(),
    };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
        .expect("SessionHandle not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to get the current user profile
#[hook]
pub fn use_current_user() -> Option<UserProfile> {
    let session = use_session();
    session.current_user()
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    let session = use_session();
    session.is_authenticated()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            user_id: 1,
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            role: "user".to_string(),
        }
    }

    #[test]
    fn signed_in_sets_user_and_flag() {
        let session = Rc::new(Session::default()).reduce(SessionAction::SignedIn(profile()));
        assert!(session.is_authenticated);
        assert_eq!(session.user.as_ref().map(|u| u.user_id), Some(1));
    }

    #[test]
    fn rehydration_without_profile_is_still_authenticated() {
        let session = Rc::new(Session::default()).reduce(SessionAction::Rehydrated(None));
        assert!(session.is_authenticated);
        assert_eq!(session.user, None);
    }

    #[test]
    fn signed_out_resets_to_default() {
        let session = Rc::new(Session::default())
            .reduce(SessionAction::SignedIn(profile()))
            .reduce(SessionAction::SignedOut);
        assert_eq!(*session, Session::default());
    }
}
