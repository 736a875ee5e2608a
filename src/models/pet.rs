use serde::{Deserialize, Serialize};

use crate::utils::filter::SearchField;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Adopted,
}

impl PetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Pending => "pending",
            Self::Adopted => "adopted",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub status: PetStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl SearchField for Pet {
    fn field(&self, key: &str) -> Option<String> {
        match key {
            "name" => Some(self.name.clone()),
            "species" => Some(self.species.clone()),
            "breed" => Some(self.breed.clone()),
            "age" => Some(self.age.to_string()),
            "status" => Some(self.status.label().to_string()),
            _ => None,
        }
    }
}

/// Form payload for POST /add-pet and PUT /update-pet/:id.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PetPayload {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: u32,
    pub description: String,
    pub status: PetStatus,
}

impl Default for PetPayload {
    fn default() -> Self {
        Self {
            name: String::new(),
            species: String::new(),
            breed: String::new(),
            age: 0,
            description: String::new(),
            status: PetStatus::Available,
        }
    }
}

impl From<&Pet> for PetPayload {
    fn from(pet: &Pet) -> Self {
        Self {
            name: pet.name.clone(),
            species: pet.species.clone(),
            breed: pet.breed.clone(),
            age: pet.age,
            description: pet.description.clone(),
            status: pet.status,
        }
    }
}

/// GET /pets/:id enriches the pet with the caller's own application state.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PetDetail {
    #[serde(flatten)]
    pub pet: Pet,
    #[serde(default)]
    pub already_applied: bool,
    #[serde(default)]
    pub user_application_status: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PetResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub pet: Option<Pet>,
}

/// Response of GET /get-edit-pets/:id.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct EditPetResponse {
    pub pet: Pet,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buddy_json() -> &'static str {
        r#"{
            "_id": "p1",
            "name": "Buddy",
            "species": "Dog",
            "breed": "Golden Retriever",
            "age": 3,
            "description": "Friendly",
            "imageUrl": "https://cdn.example.com/buddy.jpg",
            "status": "available",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z"
        }"#
    }

    #[test]
    fn pet_deserializes_backend_shape() {
        let pet: Pet = serde_json::from_str(buddy_json()).unwrap();
        assert_eq!(pet.id, "p1");
        assert_eq!(pet.image_url.as_deref(), Some("https://cdn.example.com/buddy.jpg"));
        assert_eq!(pet.status, PetStatus::Available);
    }

    #[test]
    fn pet_detail_flattens_application_state() {
        let json = r#"{
            "_id": "p1",
            "name": "Buddy",
            "species": "Dog",
            "breed": "Golden Retriever",
            "age": 3,
            "status": "pending",
            "alreadyApplied": true,
            "userApplicationStatus": "pending"
        }"#;
        let detail: PetDetail = serde_json::from_str(json).unwrap();
        assert!(detail.already_applied);
        assert_eq!(detail.user_application_status.as_deref(), Some("pending"));
        assert_eq!(detail.pet.name, "Buddy");
    }

    #[test]
    fn search_fields_cover_the_listed_keys() {
        let pet: Pet = serde_json::from_str(buddy_json()).unwrap();
        assert_eq!(pet.field("name").as_deref(), Some("Buddy"));
        assert_eq!(pet.field("age").as_deref(), Some("3"));
        assert_eq!(pet.field("unknown"), None);
    }
}
