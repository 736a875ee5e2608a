use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{AlertToast, InputSearch};
use crate::context::use_session;
use crate::hooks::{use_alert, use_filter, use_get, GetOptions};
use crate::models::auth::{MessageResponse, Role};
use crate::models::pet::{Pet, PetStatus};
use crate::routes::Route;
use crate::services::{request, Method};
use crate::utils::filter::distinct_values;

const SEARCH_KEYS: &[&str] = &["name", "species", "breed"];
const FILTER_KEYS: &[&str] = &["name", "breed", "age"];

/// Public listing of all pets with debounced search, exact-match dropdown
/// filters and role-dependent row actions.
#[function_component(PetListing)]
pub fn pet_listing() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("PetListing must be rendered inside the router");
    let alert = use_alert();
    let pets = use_get::<Vec<Pet>>("/pets".to_string(), GetOptions::default());

    let field_filters = use_state(|| {
        FILTER_KEYS
            .iter()
            .map(|key| (key.to_string(), String::new()))
            .collect::<Vec<_>>()
    });
    let filter = use_filter(pets.data.clone(), SEARCH_KEYS, (*field_filters).clone());

    let on_filter_change = {
        let field_filters = field_filters.clone();
        Callback::from(move |(key, value): (String, String)| {
            let mut next = (*field_filters).clone();
            for entry in next.iter_mut() {
                if entry.0 == key {
                    entry.1 = value.clone();
                }
            }
            field_filters.set(next);
        })
    };

    let on_delete = {
        let session = session.clone();
        let refetch = pets.refetch.clone();
        let show_success = alert.show_success.clone();
        let show_error = alert.show_error.clone();

        Callback::from(move |id: String| {
            let headers = session.bearer_headers();
            let refetch = refetch.clone();
            let show_success = show_success.clone();
            let show_error = show_error.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = request::send_json::<(), MessageResponse>(
                    Method::Delete,
                    &format!("/pets/{}", id),
                    &(),
                    &headers,
                    None,
                )
                .await;

                match result {
                    Ok(_) => {
                        log::info!("🗑️ Pet {} removed", id);
                        show_success.emit(("Pet Deleted".to_string(), None));
                        refetch.emit(());
                    }
                    Err(e) => {
                        show_error.emit(("Pet Delete Failed".to_string(), Some(e.to_string())));
                    }
                }
            });
        })
    };

    let is_admin = session.user().map(|user| user.role) == Some(Role::Admin);
    let source = pets.data.clone().unwrap_or_default();

    html! {
        <div class="page pet-listing">
            if let Some(state) = alert.alert.clone() {
                <AlertToast alert={state} on_close={alert.clear.clone()} />
            }
            <div class="card">
                <div class="card__header">
                    <h2>{"Pet Listing"}</h2>
                    <div class="card__filters">
                        { filter_select("name", "All Names", &source, &on_filter_change) }
                        { filter_select("breed", "All Breeds", &source, &on_filter_change) }
                        { filter_select("age", "All Ages", &source, &on_filter_change) }
                        <InputSearch on_search={filter.set_search_text.clone()} />
                    </div>
                </div>
                <div class="card__body">
                    if pets.is_loading {
                        <p class="muted">{"Loading..."}</p>
                    } else if filter.filtered_data.is_empty() {
                        <p class="muted">{"No pets found."}</p>
                    } else {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Image"}</th>
                                    <th>{"Name"}</th>
                                    <th>{"Species"}</th>
                                    <th>{"Breed"}</th>
                                    <th>{"Age"}</th>
                                    <th>{"Status"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for filter.filtered_data.iter().map(|pet| {
                                    pet_row(pet, is_admin, &navigator, &on_delete)
                                }) }
                            </tbody>
                        </table>
                    }
                </div>
            </div>
        </div>
    }
}

fn filter_select(
    key: &'static str,
    all_label: &'static str,
    source: &[Pet],
    on_filter_change: &Callback<(String, String)>,
) -> Html {
    let options = distinct_values(source, key);
    let onchange = {
        let on_filter_change = on_filter_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                on_filter_change.emit((key.to_string(), select.value()));
            }
        })
    };

    html! {
        <select class="filter-select" {onchange}>
            <option value="">{ all_label }</option>
            { for options.into_iter().map(|value| html! {
                <option value={value.clone()}>{ value }</option>
            }) }
        </select>
    }
}

fn pet_row(
    pet: &Pet,
    is_admin: bool,
    navigator: &Navigator,
    on_delete: &Callback<String>,
) -> Html {
    let status_class = match pet.status {
        PetStatus::Available => "badge badge--success",
        PetStatus::Pending | PetStatus::Adopted => "badge badge--warning",
    };

    let actions = if is_admin {
        let edit = {
            let navigator = navigator.clone();
            let id = pet.id.clone();
            Callback::from(move |_: MouseEvent| navigator.push(&Route::EditPet { id: id.clone() }))
        };
        let delete = {
            let on_delete = on_delete.clone();
            let id = pet.id.clone();
            Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
        };
        html! {
            <div class="row-actions">
                <button class="btn btn--primary" onclick={edit}>{"Edit"}</button>
                <button class="btn btn--danger" onclick={delete}>{"Delete"}</button>
            </div>
        }
    } else {
        let view = {
            let navigator = navigator.clone();
            let id = pet.id.clone();
            Callback::from(move |_: MouseEvent| navigator.push(&Route::PetDetails { id: id.clone() }))
        };
        html! { <button class="btn btn--primary" onclick={view}>{"View"}</button> }
    };

    html! {
        <tr key={pet.id.clone()}>
            <td>
                if let Some(url) = &pet.image_url {
                    <img class="pet-thumb" src={url.clone()} alt={pet.name.clone()} />
                } else {
                    <div class="pet-thumb pet-thumb--placeholder"></div>
                }
            </td>
            <td>{ &pet.name }</td>
            <td>{ &pet.species }</td>
            <td>{ &pet.breed }</td>
            <td>{ pet.age }</td>
            <td><span class={status_class}>{ pet.status.label() }</span></td>
            <td>{ actions }</td>
        </tr>
    }
}
