use web_sys::RequestCredentials;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::use_session;
use crate::hooks::{use_post, PostOptions};
use crate::models::auth::{MessageResponse, Role};
use crate::routes::Route;
use crate::services::Method;

/// Top navigation: role-aware links plus logout. Logout ends the server
/// session (bearer + cookie) but clears the local session either way.
#[function_component(Header)]
pub fn header() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("Header must be rendered inside the router");
    let logout = use_post::<(), MessageResponse>("/logout".to_string(), Method::Post);

    let on_logout = {
        let session = session.clone();
        let execute = logout.execute.clone();

        Callback::from(move |_: MouseEvent| {
            let clear_and_leave = {
                let session = session.clone();
                let navigator = navigator.clone();
                move || {
                    session.clear();
                    navigator.push(&Route::Login);
                }
            };
            let on_success = {
                let clear_and_leave = clear_and_leave.clone();
                Callback::from(move |_: MessageResponse| {
                    log::info!("👋 Logged out");
                    clear_and_leave();
                })
            };
            let on_error = Callback::from(move |message: String| {
                // The server session may already be gone; drop ours regardless.
                log::warn!("⚠️ Logout request failed: {}", message);
                clear_and_leave();
            });

            execute.emit((
                (),
                PostOptions {
                    headers: session.bearer_headers(),
                    credentials: Some(RequestCredentials::Include),
                    on_success: Some(on_success),
                    on_error: Some(on_error),
                    ..PostOptions::default()
                },
            ));
        })
    };

    let role = session.user().map(|user| user.role);

    html! {
        <nav class="header">
            <div class="header__brand">{"Pet Adoption"}</div>
            <div class="header__links">
                if session.is_authenticated() {
                    if role == Some(Role::Admin) {
                        <Link<Route> to={Route::Dashboard}>{"Dashboard"}</Link<Route>>
                        <Link<Route> to={Route::AddPet}>{"Add Pet"}</Link<Route>>
                    } else {
                        <Link<Route> to={Route::AppliedStatus}>{"Applied Status"}</Link<Route>>
                    }
                    <Link<Route> to={Route::PetListing}>{"Pet Listing"}</Link<Route>>
                    <button class="header__logout" onclick={on_logout}>{"Logout"}</button>
                } else {
                    <Link<Route> to={Route::PetListing}>{"Pet Listing"}</Link<Route>>
                    <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                    <Link<Route> to={Route::Register}>{"Register"}</Link<Route>>
                }
            </div>
        </nav>
    }
}
