use yew::prelude::*;

use crate::components::{AlertToast, AuthHeading, TextInput};
use crate::hooks::{use_alert, use_post, PostOptions};
use crate::models::auth::{MessageResponse, RegisterRequest};
use crate::services::Method;
use crate::utils::validate;

#[derive(Clone, Default, PartialEq)]
struct RegisterErrors {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    confirm_password: Option<String>,
}

#[function_component(RegisterView)]
pub fn register_view() -> Html {
    let alert = use_alert();
    let register = use_post::<RegisterRequest, MessageResponse>("/register".to_string(), Method::Post);

    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let errors = use_state(RegisterErrors::default);

    let onsubmit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let errors = errors.clone();
        let execute = register.execute.clone();
        let show_success = alert.show_success.clone();
        let show_error = alert.show_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let next = RegisterErrors {
                first_name: validate::required(&first_name, "First name").err(),
                last_name: validate::required(&last_name, "Last name").err(),
                email: validate::required(&email, "Email")
                    .and_then(|_| validate::email(&email))
                    .err(),
                password: validate::password(&password).err(),
                confirm_password: validate::passwords_match(&password, &confirm_password).err(),
            };
            let valid = next == RegisterErrors::default();
            errors.set(next);
            if !valid {
                return;
            }

            let on_success = {
                let first_name = first_name.clone();
                let last_name = last_name.clone();
                let email = email.clone();
                let password = password.clone();
                let confirm_password = confirm_password.clone();
                let show_success = show_success.clone();
                Callback::from(move |response: MessageResponse| {
                    show_success.emit(("Registration Successful".to_string(), response.message.clone()));
                    first_name.set(String::new());
                    last_name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    confirm_password.set(String::new());
                })
            };
            let on_error = {
                let show_error = show_error.clone();
                Callback::from(move |message: String| {
                    show_error.emit(("Registration Failed".to_string(), Some(message)));
                })
            };

            execute.emit((
                RegisterRequest {
                    first_name: (*first_name).clone(),
                    last_name: (*last_name).clone(),
                    email: (*email).clone(),
                    password: (*password).clone(),
                    confirm_password: (*confirm_password).clone(),
                },
                PostOptions {
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
                subheading="Create an Account"
                content="Fill in your details to get started."
            />
            if let Some(state) = alert.alert.clone() {
                <AlertToast alert={state} on_close={alert.clear.clone()} />
            }
            <form class="auth-form" {onsubmit}>
                <div class="form-row">
                    <TextInput
                        label="First Name"
                        id="firstName"
                        placeholder="John"
                        value={(*first_name).clone()}
                        on_change={Callback::from(move |value| first_name.set(value))}
                        error={errors.first_name.clone()}
                    />
                    <TextInput
                        label="Last Name"
                        id="lastName"
                        placeholder="Doe"
                        value={(*last_name).clone()}
                        on_change={Callback::from(move |value| last_name.set(value))}
                        error={errors.last_name.clone()}
                    />
                </div>
                <TextInput
                    label="Email"
                    id="email"
                    placeholder="Enter your email"
                    value={(*email).clone()}
                    on_change={Callback::from(move |value| email.set(value))}
                    error={errors.email.clone()}
                />
                <TextInput
                    label="Password"
                    id="password"
                    input_type="password"
                    placeholder="Create a password"
                    value={(*password).clone()}
                    on_change={Callback::from(move |value| password.set(value))}
                    error={errors.password.clone()}
                />
                <TextInput
                    label="Confirm Password"
                    id="confirmPassword"
                    input_type="password"
                    placeholder="Repeat your password"
                    value={(*confirm_password).clone()}
                    on_change={Callback::from(move |value| confirm_password.set(value))}
                    error={errors.confirm_password.clone()}
                />
                <button type="submit" class="btn btn--auth" disabled={register.is_loading}>
                    { if register.is_loading { "Loading..." } else { "Create Account" } }
                </button>
            </form>
        </div>
    }
}
