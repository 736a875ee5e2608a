use yew::prelude::*;

use crate::context::use_session;
use crate::hooks::{use_get, GetOptions};
use crate::models::adoption::{AdoptionApplication, ApplicationStatus};

/// The caller's own adoption applications.
#[function_component(AppliedStatus)]
pub fn applied_status() -> Html {
    let session = use_session();
    let applications = use_get::<Vec<AdoptionApplication>>(
        "/my-adoptions".to_string(),
        GetOptions {
            headers: session.bearer_headers(),
            ..GetOptions::default()
        },
    );

    let rows = applications.data.clone().unwrap_or_default();

    html! {
        <div class="page applied-status">
            <div class="page__heading">
                <h2>{"My Applications"}</h2>
                <span class="badge badge--secondary">{ format!("{} Total", rows.len()) }</span>
            </div>
            <div class="card">
                if applications.is_loading {
                    <p class="muted">{"Loading..."}</p>
                } else if rows.is_empty() {
                    <p class="muted">{"You haven't submitted any adoption requests yet."}</p>
                } else {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Pet"}</th>
                                <th>{"Applied On"}</th>
                                <th>{"Status"}</th>
                                <th>{"Decision Date"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for rows.iter().map(application_row) }
                        </tbody>
                    </table>
                }
            </div>
        </div>
    }
}

fn application_row(application: &AdoptionApplication) -> Html {
    let status_class = match application.status {
        ApplicationStatus::Pending => "badge badge--warning",
        ApplicationStatus::Approved => "badge badge--success",
        ApplicationStatus::Rejected => "badge badge--danger",
    };
    let decision = if application.status == ApplicationStatus::Pending { "-" } else { "Recently" };

    let (name, breed, image) = match &application.pet {
        Some(pet) => (pet.name.clone(), pet.breed.clone(), pet.image_url.clone()),
        None => ("Unknown Pet".to_string(), String::new(), None),
    };

    html! {
        <tr key={application.id.clone()}>
            <td>
                <div class="pet-cell">
                    if let Some(url) = image {
                        <img class="pet-thumb" src={url} alt={name.clone()} />
                    } else {
                        <div class="pet-thumb pet-thumb--placeholder"></div>
                    }
                    <div>
                        <div class="pet-cell__name">{ name }</div>
                        <small class="muted">{ breed }</small>
                    </div>
                </div>
            </td>
            <td>{ &application.application_date }</td>
            <td><span class={status_class}>{ application.status.label() }</span></td>
            <td>{ decision }</td>
        </tr>
    }
}
