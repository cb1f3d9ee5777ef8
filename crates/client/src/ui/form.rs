//! The reusable pet form shared by the create and edit flows.

use petcatalog_core::pet::{PetFields, BIRTHDATE_FORMAT};
use petcatalog_core::types::PetId;

use crate::api::{ClientError, PetClient};
use crate::models::Pet;
use crate::ui::notify::Notification;

/// Whether the form creates a new pet or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(PetId),
}

/// Field values of the pet form, kept as the raw text the user entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetForm {
    pub mode: FormMode,
    pub name: String,
    pub pet_type: String,
    pub birthdate: String,
    pub gender: String,
    pub description: String,
    pub photo: String,
    pub submitting: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Required inputs left blank; nothing was sent.
    #[error("Please fill in: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl SubmitError {
    pub fn notification(&self) -> Notification {
        match self {
            SubmitError::Incomplete(_) => Notification::error(self.to_string()),
            SubmitError::Client(err) => Notification::from_error(err, "Failed to save pet"),
        }
    }
}

impl PetForm {
    /// Blank form for a new pet; the selects start on `dog` and `male`.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            pet_type: "dog".to_string(),
            birthdate: String::new(),
            gender: "male".to_string(),
            description: String::new(),
            photo: String::new(),
            submitting: false,
        }
    }

    /// Form pre-populated from an existing record.
    pub fn edit(pet: &Pet) -> Self {
        Self {
            mode: FormMode::Edit(pet.id),
            name: pet.name.clone(),
            pet_type: pet.pet_type.as_str().to_string(),
            birthdate: pet.birthdate.format(BIRTHDATE_FORMAT).to_string(),
            gender: pet.gender.as_str().to_string(),
            description: pet.description.clone(),
            photo: pet.photo.clone(),
            submitting: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Pet"
        } else {
            "Add New Pet"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.is_editing(), self.submitting) {
            (true, true) => "Updating...",
            (true, false) => "Update Pet",
            (false, true) => "Creating...",
            (false, false) => "Add Pet",
        }
    }

    pub fn success_message(&self) -> &'static str {
        if self.is_editing() {
            "Pet updated successfully"
        } else {
            "Pet added successfully"
        }
    }

    /// Overwrite the inputs present in `edits`, leaving the rest as they are.
    pub fn apply(&mut self, edits: PetFields) {
        let PetFields {
            name,
            pet_type,
            birthdate,
            gender,
            description,
            photo,
        } = edits;

        for (slot, value) in [
            (&mut self.name, name),
            (&mut self.pet_type, pet_type),
            (&mut self.birthdate, birthdate),
            (&mut self.gender, gender),
            (&mut self.description, description),
            (&mut self.photo, photo),
        ] {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }

    /// Inputs marked required that are still blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("type", &self.pet_type),
            ("birthdate", &self.birthdate),
            ("gender", &self.gender),
            ("description", &self.description),
            ("photo", &self.photo),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// The full field set sent on submit.
    pub fn to_fields(&self) -> PetFields {
        PetFields {
            name: Some(self.name.clone()),
            pet_type: Some(self.pet_type.clone()),
            birthdate: Some(self.birthdate.clone()),
            gender: Some(self.gender.clone()),
            description: Some(self.description.clone()),
            photo: Some(self.photo.clone()),
        }
    }

    /// Send the form: create or update depending on the mode.
    ///
    /// Blank required inputs stop the submit before any request is made.
    pub async fn submit(&mut self, client: &PetClient) -> Result<Pet, SubmitError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(SubmitError::Incomplete(missing));
        }

        self.submitting = true;
        let fields = self.to_fields();
        let result = match self.mode {
            FormMode::Create => client.create_pet(&fields).await,
            FormMode::Edit(id) => client.update_pet(id, &fields).await,
        };
        self.submitting = false;

        Ok(result?)
    }
}
