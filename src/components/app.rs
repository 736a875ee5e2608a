use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    AddPet, AdminDashboard, AppliedStatus, EditPet, Header, LoginView, PetDetails, PetListing,
    RegisterView,
};
use crate::context::{use_session, SessionProvider};
use crate::routes::{self, Route};

/// Root of the tree. The session provider gates everything below it until
/// the startup refresh has resolved.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <AppShell />
            </BrowserRouter>
        </SessionProvider>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let session = use_session();

    let render = {
        let session = session.clone();
        Callback::from(move |route: Route| {
            // Role gate first; unauthorized routes bounce to the landing route.
            if let Some(target) = routes::resolve(&route, session.session()) {
                return html! { <Redirect<Route> to={target} /> };
            }

            match route {
                Route::Login => html! { <LoginView /> },
                Route::Register => html! { <RegisterView /> },
                Route::PetListing => html! { <PetListing /> },
                Route::PetDetails { id } => html! { <PetDetails {id} /> },
                Route::AppliedStatus => html! { <AppliedStatus /> },
                Route::Dashboard => html! { <AdminDashboard /> },
                Route::AddPet => html! { <AddPet /> },
                Route::EditPet { id } => html! { <EditPet {id} /> },
                Route::NotFound => html! {},
            }
        })
    };

    html! {
        <div class="layout">
            <Header />
            <main class="layout__main">
                <Switch<Route> render={move |route| render.emit(route)} />
            </main>
        </div>
    }
}
