use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::AlertToast;
use crate::context::use_session;
use crate::hooks::{use_alert, use_get, use_post, GetOptions, PostOptions};
use crate::models::adoption::AdoptRequest;
use crate::models::auth::MessageResponse;
use crate::models::pet::{PetDetail as PetDetailModel, PetStatus};
use crate::routes::Route;
use crate::services::Method;

#[derive(Properties, PartialEq)]
pub struct PetDetailsProps {
    pub id: String,
}

/// Detail page for one pet, including the caller's own application state.
#[function_component(PetDetails)]
pub fn pet_details(props: &PetDetailsProps) -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("PetDetails must be rendered inside the router");
    let alert = use_alert();

    let pet = use_get::<PetDetailModel>(
        format!("/pets/{}", props.id),
        GetOptions {
            headers: session.bearer_headers(),
            ..GetOptions::default()
        },
    );
    let adopt = use_post::<AdoptRequest, MessageResponse>("/adopt".to_string(), Method::Post);

    let on_adopt = {
        let session = session.clone();
        let id = props.id.clone();
        let execute = adopt.execute.clone();
        let refetch = pet.refetch.clone();
        let show_success = alert.show_success.clone();
        let show_error = alert.show_error.clone();

        Callback::from(move |_: MouseEvent| {
            let on_success = {
                let refetch = refetch.clone();
                let show_success = show_success.clone();
                Callback::from(move |_: MessageResponse| {
                    show_success.emit((
                        "Request Sent!".to_string(),
                        Some("The shelter will contact you soon.".to_string()),
                    ));
                    refetch.emit(());
                })
            };
            let on_error = {
                let show_error = show_error.clone();
                Callback::from(move |message: String| {
                    show_error.emit(("Request Failed".to_string(), Some(message)));
                })
            };

            execute.emit((
                AdoptRequest { pet_id: id.clone() },
                PostOptions {
                    headers: session.bearer_headers(),
                    on_success: Some(on_success),
                    on_error: Some(on_error),
                    ..PostOptions::default()
                },
            ));
        })
    };

    let on_back = Callback::from(move |_: MouseEvent| navigator.push(&Route::PetListing));

    if pet.is_loading {
        return html! { <div class="page centered"><div class="spinner"></div></div> };
    }
    let Some(detail) = pet.data.clone() else {
        return html! {
            <div class="page">
                <div class="alert alert--danger">{"Pet not found or invalid ID."}</div>
            </div>
        };
    };

    let available = detail.pet.status == PetStatus::Available;
    let badge = if detail.already_applied {
        let status = detail
            .user_application_status
            .clone()
            .unwrap_or_else(|| "pending".to_string());
        html! {
            <span class="badge badge--info">
                {"APPLICATION SENT "}
                <span class="badge badge--warning">{ format!("({})", status.to_uppercase()) }</span>
            </span>
        }
    } else {
        let class = if available { "badge badge--success" } else { "badge badge--warning" };
        html! { <span class={class}>{ detail.pet.status.label().to_uppercase() }</span> }
    };

    let description = if detail.pet.description.is_empty() {
        "This pet doesn't have a description yet. Contact us to learn more about their personality and needs!".to_string()
    } else {
        detail.pet.description.clone()
    };

    html! {
        <div class="page pet-details">
            if let Some(state) = alert.alert.clone() {
                <AlertToast alert={state} on_close={alert.clear.clone()} />
            }
            <button class="btn btn--secondary" onclick={on_back}>{"← Back to Listing"}</button>
            <div class="card pet-details__card">
                <div class="pet-details__image">
                    if let Some(url) = &detail.pet.image_url {
                        <img src={url.clone()} alt={detail.pet.name.clone()} />
                    } else {
                        <span class="muted">{"No Image Available"}</span>
                    }
                </div>
                <div class="pet-details__info">
                    { badge }
                    <h1>{ &detail.pet.name }</h1>
                    <h6 class="muted">{"Specifications"}</h6>
                    <table class="spec-table">
                        <tbody>
                            <tr><th>{"Species"}</th><td>{ &detail.pet.species }</td></tr>
                            <tr><th>{"Breed"}</th><td>{ &detail.pet.breed }</td></tr>
                            <tr><th>{"Age"}</th><td>{ format!("{} Years", detail.pet.age) }</td></tr>
                        </tbody>
                    </table>
                    <h6 class="muted">{"Description"}</h6>
                    <p class="pet-details__description">{ description }</p>
                    <button
                        class="btn btn--primary"
                        onclick={on_adopt}
                        disabled={adopt.is_loading || !available}
                    >
                        { if adopt.is_loading { "Processing..." } else { "Submit Adoption Request" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
