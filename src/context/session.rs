// ============================================================================
// SESSION CONTEXT - process-wide token + user, shared via Yew context
// ============================================================================
// Created at app start, torn down with the tree. One cookie-backed refresh
// call runs before anything below the provider renders.
// ============================================================================

use web_sys::RequestCredentials;
use yew::prelude::*;

use crate::models::auth::{RefreshResponse, User};
use crate::services::{request, Method};
use crate::state::{Session, SessionPhase};

/// Read/write access to the session. Mutations go through `set_auth` and
/// `clear` only, which keeps token and user in lockstep.
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    session: Session,
    setter: Callback<Session>,
}

impl SessionHandle {
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Headers carrying the bearer token; empty when anonymous.
    pub fn bearer_headers(&self) -> Vec<(String, String)> {
        self.session.bearer_header().into_iter().collect()
    }

    /// Login mutation point: token and user enter together.
    pub fn set_auth(&self, token: String, user: User) {
        self.setter.emit(Session::authenticated(token, user));
    }

    /// Logout mutation point: token and user leave together.
    pub fn clear(&self) {
        self.setter.emit(Session::anonymous());
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Wraps the app and gates rendering until the startup refresh resolves.
/// Refresh failure is recoverable: the tree renders anonymous.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_state(Session::anonymous);
    let phase = use_state(|| SessionPhase::Init);

    {
        let session = session.clone();
        let phase = phase.clone();
        use_effect_with((), move |_| {
            phase.set(SessionPhase::Refreshing);
            wasm_bindgen_futures::spawn_local(async move {
                log::info!("🔄 Refreshing session from cookie...");
                let result = request::send_json::<(), RefreshResponse>(
                    Method::Post,
                    "/refresh-token",
                    &(),
                    &[],
                    Some(RequestCredentials::Include),
                )
                .await;

                let resolved = Session::from_refresh(result);
                phase.set(resolved.phase());
                session.set(resolved);
            });
            || ()
        });
    }

    if matches!(*phase, SessionPhase::Init | SessionPhase::Refreshing) {
        // Loading gate: dependent UI must not render on an unresolved session.
        return html! {};
    }

    let setter = {
        let session = session.clone();
        Callback::from(move |next: Session| session.set(next))
    };

    let handle = SessionHandle { session: (*session).clone(), setter };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<SessionHandle>>
    }
}

/// Access the session store. Calling this outside a SessionProvider is a
/// programming error and fails fast.
#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("use_session must be called inside a SessionProvider")
}
