use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::TextInput;
use crate::models::pet::{PetPayload, PetStatus};
use crate::utils::validate;

#[derive(Clone, Default, PartialEq)]
struct PetFormErrors {
    name: Option<String>,
    species: Option<String>,
    breed: Option<String>,
    age: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct PetFormProps {
    /// Starting values; the form re-seeds itself when these change (edit
    /// screens pre-fill after their fetch resolves).
    #[prop_or_default]
    pub initial: PetPayload,
    pub on_submit: Callback<PetPayload>,
    pub is_loading: bool,
    pub submit_label: String,
}

/// Shared add/edit pet form: required name/species/breed, non-negative age,
/// status dropdown and free-text description.
#[function_component(PetForm)]
pub fn pet_form(props: &PetFormProps) -> Html {
    let name = use_state(|| props.initial.name.clone());
    let species = use_state(|| props.initial.species.clone());
    let breed = use_state(|| props.initial.breed.clone());
    let age = use_state(|| props.initial.age.to_string());
    let description = use_state(|| props.initial.description.clone());
    let status = use_state(|| props.initial.status);
    let errors = use_state(PetFormErrors::default);

    {
        let name = name.clone();
        let species = species.clone();
        let breed = breed.clone();
        let age = age.clone();
        let description = description.clone();
        let status = status.clone();
        use_effect_with(props.initial.clone(), move |initial| {
            name.set(initial.name.clone());
            species.set(initial.species.clone());
            breed.set(initial.breed.clone());
            age.set(initial.age.to_string());
            description.set(initial.description.clone());
            status.set(initial.status);
            || ()
        });
    }

    let onsubmit = {
        let name = name.clone();
        let species = species.clone();
        let breed = breed.clone();
        let age = age.clone();
        let description = description.clone();
        let status = status.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let parsed_age = validate::non_negative_age(&age);
            let next = PetFormErrors {
                name: validate::required(&name, "Pet name").err(),
                species: validate::required(&species, "Species").err(),
                breed: validate::required(&breed, "Breed").err(),
                age: parsed_age.as_ref().err().cloned(),
            };
            let valid = next == PetFormErrors::default();
            errors.set(next);
            let Ok(parsed_age) = parsed_age else { return };
            if !valid {
                return;
            }

            on_submit.emit(PetPayload {
                name: (*name).clone(),
                species: (*species).clone(),
                breed: (*breed).clone(),
                age: parsed_age,
                description: (*description).clone(),
                status: *status,
            });
        })
    };

    let on_status_change = {
        let status = status.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                status.set(match select.value().as_str() {
                    "pending" => PetStatus::Pending,
                    "adopted" => PetStatus::Adopted,
                    _ => PetStatus::Available,
                });
            }
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                description.set(area.value());
            }
        })
    };

    html! {
        <form class="pet-form" {onsubmit}>
            <TextInput
                label="Pet Name"
                id="name"
                placeholder="e.g. Buddy"
                value={(*name).clone()}
                on_change={Callback::from(move |value| name.set(value))}
                error={errors.name.clone()}
            />
            <div class="form-row">
                <TextInput
                    label="Species"
                    id="species"
                    placeholder="e.g. Dog"
                    value={(*species).clone()}
                    on_change={Callback::from(move |value| species.set(value))}
                    error={errors.species.clone()}
                />
                <TextInput
                    label="Breed"
                    id="breed"
                    placeholder="e.g. Golden Retriever"
                    value={(*breed).clone()}
                    on_change={Callback::from(move |value| breed.set(value))}
                    error={errors.breed.clone()}
                />
            </div>
            <TextInput
                label="Age (Years)"
                id="age"
                input_type="number"
                value={(*age).clone()}
                on_change={Callback::from(move |value| age.set(value))}
                error={errors.age.clone()}
            />
            <div class="form-group">
                <label for="status">{"Listing Status"}</label>
                <select id="status" onchange={on_status_change}>
                    <option value="available" selected={*status == PetStatus::Available}>{"Available"}</option>
                    <option value="pending" selected={*status == PetStatus::Pending}>{"Pending"}</option>
                    <option value="adopted" selected={*status == PetStatus::Adopted}>{"Adopted"}</option>
                </select>
            </div>
            <div class="form-group">
                <label for="description">{"Description"}</label>
                <textarea
                    id="description"
                    placeholder="Describe the pet's personality..."
                    value={(*description).clone()}
                    oninput={on_description_change}
                />
            </div>
            <button type="submit" class="btn btn--auth" disabled={props.is_loading}>
                { if props.is_loading { "Loading...".to_string() } else { props.submit_label.clone() } }
            </button>
        </form>
    }
}
