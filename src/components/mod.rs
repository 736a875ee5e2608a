pub mod add_pet;
pub mod admin_dashboard;
pub mod alert_toast;
pub mod app;
pub mod applied_status;
pub mod auth_heading;
pub mod edit_pet;
pub mod header;
pub mod input_search;
pub mod login_view;
pub mod pet_details;
pub mod pet_form;
pub mod pet_listing;
pub mod register_view;
pub mod text_input;

pub use add_pet::AddPet;
pub use admin_dashboard::AdminDashboard;
pub use alert_toast::AlertToast;
pub use app::App;
pub use applied_status::AppliedStatus;
pub use auth_heading::AuthHeading;
pub use edit_pet::EditPet;
pub use header::Header;
pub use input_search::InputSearch;
pub use login_view::LoginView;
pub use pet_details::PetDetails;
pub use pet_form::PetForm;
pub use pet_listing::PetListing;
pub use register_view::RegisterView;
pub use text_input::TextInput;
