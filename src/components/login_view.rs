use web_sys::RequestCredentials;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{AlertToast, AuthHeading, TextInput};
use crate::context::use_session;
use crate::hooks::{use_alert, use_post, PostOptions};
use crate::models::auth::{LoginRequest, LoginResponse, Role};
use crate::routes::Route;
use crate::services::Method;
use crate::utils::validate;

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("LoginView must be rendered inside the router");
    let alert = use_alert();
    let login = use_post::<LoginRequest, LoginResponse>("/login".to_string(), Method::Post);

    let email = use_state(String::new);
    let password = use_state(String::new);
    let email_error = use_state(|| None::<String>);
    let password_error = use_state(|| None::<String>);

    let onsubmit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let email = email.clone();
        let password = password.clone();
        let email_error = email_error.clone();
        let password_error = password_error.clone();
        let execute = login.execute.clone();
        let show_success = alert.show_success.clone();
        let show_error = alert.show_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut valid = true;
            match validate::required(&email, "Email") {
                Ok(()) => email_error.set(None),
                Err(message) => {
                    email_error.set(Some(message));
                    valid = false;
                }
            }
            match validate::required(&password, "Password") {
                Ok(()) => password_error.set(None),
                Err(message) => {
                    password_error.set(Some(message));
                    valid = false;
                }
            }
            if !valid {
                return;
            }

            let on_success = {
                let session = session.clone();
                let navigator = navigator.clone();
                let show_success = show_success.clone();
                Callback::from(move |response: LoginResponse| {
                    log::info!("✅ Login successful: {}", response.user.email);
                    session.set_auth(response.access_token.clone(), response.user.clone());
                    show_success.emit(("Login Successful".to_string(), response.message.clone()));
                    let landing = match response.user.role {
                        Role::Admin => Route::Dashboard,
                        Role::User => Route::PetListing,
                    };
                    navigator.push(&landing);
                })
            };
            let on_error = {
                let show_error = show_error.clone();
                Callback::from(move |message: String| {
                    show_error.emit(("Login Failed".to_string(), Some(message)));
                })
            };

            execute.emit((
                LoginRequest {
                    email: (*email).clone(),
                    password: (*password).clone(),
                },
                PostOptions {
                    credentials: Some(RequestCredentials::Include),
                    on_success: Some(on_success),
                    on_error: Some(on_error),
                    ..PostOptions::default()
                },
            ));
        })
    };

    html! {
        <div class="auth-page">
            <AuthHeading
                subheading="Welcome Back! Please Log In"
                content="Enter your email and password to continue."
            />
            if let Some(state) = alert.alert.clone() {
                <AlertToast alert={state} on_close={alert.clear.clone()} />
            }
            <form class="auth-form" {onsubmit}>
                <TextInput
                    label="Email"
                    id="email"
                    placeholder="Enter your email"
                    value={(*email).clone()}
                    on_change={Callback::from(move |value| email.set(value))}
                    error={(*email_error).clone()}
                />
                <TextInput
                    label="Password"
                    id="password"
                    input_type="password"
                    placeholder="Enter your password"
                    value={(*password).clone()}
                    on_change={Callback::from(move |value| password.set(value))}
                    error={(*password_error).clone()}
                />
                <button type="submit" class="btn btn--auth" disabled={login.is_loading}>
                    { if login.is_loading { "Loading..." } else { "Submit" } }
                </button>
            </form>
        </div>
    }
}
