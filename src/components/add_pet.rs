use yew::prelude::*;

use crate::components::{AlertToast, PetForm};
use crate::context::use_session;
use crate::hooks::{use_alert, use_post, PostOptions};
use crate::models::pet::{PetPayload, PetResponse};
use crate::services::Method;

/// Admin form for listing a new pet.
#[function_component(AddPet)]
pub fn add_pet() -> Html {
    let session = use_session();
    let alert = use_alert();
    let create = use_post::<PetPayload, PetResponse>("/add-pet".to_string(), Method::Post);

    // Remounting the form via its key is how a successful submit clears it.
    let form_epoch = use_state(|| 0u32);

    let on_submit = {
        let session = session.clone();
        let execute = create.execute.clone();
        let form_epoch = form_epoch.clone();
        let show_success = alert.show_success.clone();
        let show_error = alert.show_error.clone();

        Callback::from(move |payload: PetPayload| {
            let name = payload.name.clone();
            let on_success = {
                let form_epoch = form_epoch.clone();
                let show_success = show_success.clone();
                Callback::from(move |_: PetResponse| {
                    log::info!("✅ Pet \"{}\" listed", name);
                    show_success.emit((
                        "Pet Added!".to_string(),
                        Some(format!("{} is now up for adoption.", name)),
                    ));
                    form_epoch.set((*form_epoch).wrapping_add(1));
                })
            };
            let on_error = {
                let show_error = show_error.clone();
                Callback::from(move |message: String| {
                    show_error.emit(("Pet Add Failed".to_string(), Some(message)));
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

    html! {
        <div class="page add-pet">
            if let Some(state) = alert.alert.clone() {
                <AlertToast alert={state} on_close={alert.clear.clone()} />
            }
            <div class="card card--form">
                <h2>{"Add a New Pet"}</h2>
                <p class="muted">{"List a new animal for adoption"}</p>
                <PetForm
                    key={*form_epoch}
                    on_submit={on_submit}
                    is_loading={create.is_loading}
                    submit_label="Add Pet"
                />
            </div>
        </div>
    }
}
