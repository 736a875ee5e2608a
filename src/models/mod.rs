pub mod adoption;
pub mod auth;
pub mod pet;

pub use adoption::{
    AdminAdoption, AdoptRequest, AdoptionApplication, ApplicantSummary, ApplicationStatus,
    PetSummary, UpdateStatusRequest,
};
pub use auth::{
    LoginRequest, LoginResponse, MessageResponse, RefreshResponse, RegisterRequest, Role, User,
};
pub use pet::{EditPetResponse, Pet, PetDetail, PetPayload, PetResponse, PetStatus};
