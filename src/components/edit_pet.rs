use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{AlertToast, PetForm};
use crate::context::use_session;
use crate::hooks::{use_alert, use_get, use_post, GetOptions, PostOptions};
use crate::models::pet::{EditPetResponse, PetPayload, PetResponse};
use crate::routes::Route;
use crate::services::Method;

#[derive(Properties, PartialEq)]
pub struct EditPetProps {
    pub id: String,
}

/// Admin form pre-filled from the pet's current record.
#[function_component(EditPet)]
pub fn edit_pet(props: &EditPetProps) -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("EditPet must be rendered inside the router");
    let alert = use_alert();

    let existing = use_get::<EditPetResponse>(
        format!("/get-edit-pets/{}", props.id),
        GetOptions {
            headers: session.bearer_headers(),
            ..GetOptions::default()
        },
    );
    let update =
        use_post::<PetPayload, PetResponse>(format!("/update-pet/{}", props.id), Method::Put);

    let on_submit = {
        let session = session.clone();
        let execute = update.execute.clone();
        let navigator = navigator.clone();
        let show_error = alert.show_error.clone();

        Callback::from(move |payload: PetPayload| {
            let on_success = {
                let navigator = navigator.clone();
                Callback::from(move |_: PetResponse| {
                    log::info!("🔄 Pet record updated");
                    navigator.push(&Route::PetListing);
                })
            };
            let on_error = {
                let show_error = show_error.clone();
                Callback::from(move |message: String| {
                    show_error.emit(("Update Failed".to_string(), Some(message)));
                })
            };

            execute.emit((
                payload,
                PostOptions {
                    headers: session.bearer_headers(),
                    on_success: Some(on_success),
                    on_error: Some(on_error),
                    ..PostOptions::default()
                },
            ));
        })
    };

    if existing.is_loading {
        return html! { <div class="page centered"><div class="spinner"></div></div> };
    }
    let Some(response) = existing.data.clone() else {
        return html! {
            <div class="page">
                <div class="alert alert--danger">{"Pet not found or invalid ID."}</div>
            </div>
        };
    };

    html! {
        <div class="page edit-pet">
            if let Some(state) = alert.alert.clone() {
                <AlertToast alert={state} on_close={alert.clear.clone()} />
            }
            <div class="card card--form">
                <h2>{"Edit Pet"}</h2>
                <p class="muted">{ format!("Update the listing for {}", response.pet.name) }</p>
                <PetForm
                    initial={PetPayload::from(&response.pet)}
                    on_submit={on_submit}
                    is_loading={update.is_loading}
                    submit_label="Save Changes"
                />
            </div>
        </div>
    }
}
