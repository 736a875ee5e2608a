use yew::prelude::*;

use crate::components::AlertToast;
use crate::context::use_session;
use crate::hooks::{use_alert, use_get, use_post, GetOptions, PostOptions};
use crate::models::adoption::{AdminAdoption, ApplicationStatus, UpdateStatusRequest};
use crate::models::auth::MessageResponse;
use crate::services::Method;

/// Admin view over every adoption request, with approve/reject actions.
#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let session = use_session();
    let alert = use_alert();

    let requests = use_get::<Vec<AdminAdoption>>(
        "/admin/adoptions".to_string(),
        GetOptions {
            headers: session.bearer_headers(),
            ..GetOptions::default()
        },
    );
    let update_status =
        use_post::<UpdateStatusRequest, MessageResponse>("/admin/update-status".to_string(), Method::Post);

    let on_action = {
        let session = session.clone();
        let execute = update_status.execute.clone();
        let refetch = requests.refetch.clone();
        let show_success = alert.show_success.clone();
        let show_error = alert.show_error.clone();

        Callback::from(move |(id, status): (String, ApplicationStatus)| {
            let on_success = {
                let refetch = refetch.clone();
                let show_success = show_success.clone();
                Callback::from(move |_: MessageResponse| {
                    show_success.emit((
                        "Success".to_string(),
                        Some(format!("Application {} successfully.", status.label())),
                    ));
                    refetch.emit(());
                })
            };
            let on_error = {
                let show_error = show_error.clone();
                Callback::from(move |message: String| {
                    show_error.emit(("Error".to_string(), Some(message)));
                })
            };

            execute.emit((
                UpdateStatusRequest { request_id: id, status },
                PostOptions {
                    headers: session.bearer_headers(),
                    on_success: Some(on_success),
                    on_error: Some(on_error),
                    ..PostOptions::default()
                },
            ));
        })
    };

    let rows = requests.data.clone().unwrap_or_default();

    html! {
        <div class="page admin-dashboard">
            if let Some(state) = alert.alert.clone() {
                <AlertToast alert={state} on_close={alert.clear.clone()} />
            }
            <h2>{"Admin Dashboard"}</h2>
            <p class="muted">{"Manage incoming adoption requests"}</p>
            <div class="card">
                if requests.is_loading {
                    <p class="muted">{"Loading..."}</p>
                } else if rows.is_empty() {
                    <p class="muted">{"No adoption requests yet."}</p>
                } else {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"User Details"}</th>
                                <th>{"Pet"}</th>
                                <th>{"Status"}</th>
                                <th>{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for rows.iter().map(|row| request_row(row, &on_action)) }
                        </tbody>
                    </table>
                }
            </div>
        </div>
    }
}

fn request_row(row: &AdminAdoption, on_action: &Callback<(String, ApplicationStatus)>) -> Html {
    let status_class = match row.status {
        ApplicationStatus::Approved => "badge badge--success",
        ApplicationStatus::Rejected => "badge badge--danger",
        ApplicationStatus::Pending => "badge badge--warning",
    };

    let (applicant_name, applicant_email) = match &row.applicant {
        Some(applicant) => (
            format!("{} {}", applicant.first_name, applicant.last_name),
            applicant.email.clone(),
        ),
        None => ("N/A".to_string(), String::new()),
    };

    let actions = if row.status == ApplicationStatus::Pending {
        let approve = {
            let on_action = on_action.clone();
            let id = row.id.clone();
            Callback::from(move |_: MouseEvent| {
                on_action.emit((id.clone(), ApplicationStatus::Approved))
            })
        };
        let reject = {
            let on_action = on_action.clone();
            let id = row.id.clone();
            Callback::from(move |_: MouseEvent| {
                on_action.emit((id.clone(), ApplicationStatus::Rejected))
            })
        };
        html! {
            <div class="row-actions">
                <button class="btn btn--success" onclick={approve}>{"Accept"}</button>
                <button class="btn btn--danger" onclick={reject}>{"Reject"}</button>
            </div>
        }
    } else {
        html! { <span class="muted">{"Processed"}</span> }
    };

    html! {
        <tr key={row.id.clone()}>
            <td>
                <div class="pet-cell__name">{ applicant_name }</div>
                <small class="muted">{ applicant_email }</small>
            </td>
            <td>
                if let Some(pet) = &row.pet {
                    <div class="pet-cell__name">{ &pet.name }</div>
                    <small class="muted">{ &pet.breed }</small>
                } else {
                    <span class="muted">{"-"}</span>
                }
            </td>
            <td><span class={status_class}>{ row.status.label().to_uppercase() }</span></td>
            <td>{ actions }</td>
        </tr>
    }
}
