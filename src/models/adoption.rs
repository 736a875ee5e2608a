use serde::{Deserialize, Serialize};

use super::pet::Pet;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// One row of GET /my-adoptions; the backend populates petId with the pet.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionApplication {
    #[serde(rename = "_id")]
    pub id: String,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub application_date: String,
    #[serde(rename = "petId", default)]
    pub pet: Option<Pet>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PetSummary {
    pub name: String,
    #[serde(default)]
    pub breed: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantSummary {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
}

/// One row of GET /admin/adoptions with populated pet and applicant.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AdminAdoption {
    #[serde(rename = "_id")]
    pub id: String,
    pub status: ApplicationStatus,
    #[serde(rename = "petId", default)]
    pub pet: Option<PetSummary>,
    #[serde(rename = "userId", default)]
    pub applicant: Option<ApplicantSummary>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AdoptRequest {
    pub pet_id: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub request_id: String,
    pub status: ApplicationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_row_populates_pet_and_applicant() {
        let json = r#"{
            "_id": "a1",
            "status": "pending",
            "petId": { "name": "Buddy", "breed": "Golden Retriever" },
            "userId": { "firstName": "Jane", "lastName": "Doe", "email": "jane@example.com" },
            "createdAt": "2024-03-01T10:00:00Z"
        }"#;
        let row: AdminAdoption = serde_json::from_str(json).unwrap();
        assert_eq!(row.status, ApplicationStatus::Pending);
        assert_eq!(row.pet.unwrap().name, "Buddy");
        assert_eq!(row.applicant.unwrap().email, "jane@example.com");
    }

    #[test]
    fn update_status_request_serializes_camel_case() {
        let request = UpdateStatusRequest {
            request_id: "a1".to_string(),
            status: ApplicationStatus::Approved,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"requestId":"a1","status":"approved"}"#);
    }

    #[test]
    fn application_tolerates_unpopulated_pet() {
        let json = r#"{"_id":"a2","status":"rejected"}"#;
        let row: AdoptionApplication = serde_json::from_str(json).unwrap();
        assert!(row.pet.is_none());
        assert_eq!(row.status.label(), "rejected");
    }
}
