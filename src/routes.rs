use yew_router::prelude::*;

use crate::models::auth::Role;
use crate::state::Session;

#[derive(Routable, Clone, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/pet-listing")]
    PetListing,
    #[at("/pet/:id")]
    PetDetails { id: String },
    #[at("/applied-status")]
    AppliedStatus,
    #[at("/dashboard")]
    Dashboard,
    #[at("/add-pet")]
    AddPet,
    #[at("/edit/:id")]
    EditPet { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Where a session lands when it hits a route it cannot see.
pub fn landing_route(session: &Session) -> Route {
    match session.user().map(|user| user.role) {
        None => Route::Login,
        Some(Role::User) => Route::PetListing,
        Some(Role::Admin) => Route::Dashboard,
    }
}

/// Role gate: `None` means render the route, `Some(target)` means redirect.
/// The pet listing is public; everything else depends on the session's role.
pub fn resolve(route: &Route, session: &Session) -> Option<Route> {
    let role = session.user().map(|user| user.role);

    let allowed = match route {
        Route::PetListing => true,
        Route::Login | Route::Register => role.is_none(),
        Route::PetDetails { .. } => role.is_some(),
        Route::AppliedStatus => role == Some(Role::User),
        Route::Dashboard | Route::AddPet | Route::EditPet { .. } => role == Some(Role::Admin),
        Route::NotFound => false,
    };

    if allowed {
        None
    } else {
        Some(landing_route(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::User;

    fn session_with(role: Role) -> Session {
        Session::authenticated(
            "tok".to_string(),
            User { id: "u1".to_string(), email: "x@y.z".to_string(), role },
        )
    }

    #[test]
    fn anonymous_visitors_see_login_register_and_listing() {
        let anon = Session::anonymous();
        assert_eq!(resolve(&Route::Login, &anon), None);
        assert_eq!(resolve(&Route::Register, &anon), None);
        assert_eq!(resolve(&Route::PetListing, &anon), None);
        assert_eq!(resolve(&Route::Dashboard, &anon), Some(Route::Login));
        assert_eq!(resolve(&Route::AppliedStatus, &anon), Some(Route::Login));
    }

    #[test]
    fn users_are_kept_out_of_admin_screens() {
        let user = session_with(Role::User);
        assert_eq!(resolve(&Route::AppliedStatus, &user), None);
        assert_eq!(resolve(&Route::PetDetails { id: "p1".to_string() }, &user), None);
        assert_eq!(resolve(&Route::Dashboard, &user), Some(Route::PetListing));
        assert_eq!(resolve(&Route::Login, &user), Some(Route::PetListing));
    }

    #[test]
    fn admins_land_on_the_dashboard() {
        let admin = session_with(Role::Admin);
        assert_eq!(resolve(&Route::Dashboard, &admin), None);
        assert_eq!(resolve(&Route::EditPet { id: "p1".to_string() }, &admin), None);
        assert_eq!(resolve(&Route::Register, &admin), Some(Route::Dashboard));
        assert_eq!(landing_route(&admin), Route::Dashboard);
    }

    #[test]
    fn unknown_routes_redirect_to_the_landing_route() {
        assert_eq!(resolve(&Route::NotFound, &Session::anonymous()), Some(Route::Login));
        assert_eq!(
            resolve(&Route::NotFound, &session_with(Role::Admin)),
            Some(Route::Dashboard)
        );
    }
}
