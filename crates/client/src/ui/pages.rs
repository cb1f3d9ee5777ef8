//! View state for each page of the catalog.

use petcatalog_core::types::PetId;

use crate::api::PetClient;
use crate::models::Pet;
use crate::ui::filter::PetFilter;
use crate::ui::form::{PetForm, SubmitError};
use crate::ui::notify::Notification;

/// The public pet listing with its filter bar.
#[derive(Debug, Clone, Default)]
pub struct PetsPage {
    pub loading: bool,
    pub pets: Vec<Pet>,
    pub filter: PetFilter,
    pub notification: Option<Notification>,
}

impl PetsPage {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Fetch the full list. A failure leaves an empty list and an error
    /// notification.
    pub async fn load(&mut self, client: &PetClient) {
        self.loading = true;
        match client.list_pets().await {
            Ok(pets) => self.pets = pets,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load pets");
                self.pets.clear();
                self.notification = Some(Notification::from_error(&err, "Failed to load pets"));
            }
        }
        self.loading = false;
    }

    /// The fetched pets that pass the current filter.
    pub fn visible(&self) -> Vec<&Pet> {
        self.filter.apply(&self.pets)
    }
}

/// A single pet shown in full.
#[derive(Debug, Clone)]
pub struct PetDetailsPage {
    pub id: PetId,
    pub loading: bool,
    pub pet: Option<Pet>,
    pub notification: Option<Notification>,
}

impl PetDetailsPage {
    pub fn new(id: PetId) -> Self {
        Self {
            id,
            loading: true,
            pet: None,
            notification: None,
        }
    }

    pub async fn load(&mut self, client: &PetClient) {
        self.loading = true;
        match client.get_pet(self.id).await {
            Ok(pet) => self.pet = Some(pet),
            Err(err) => {
                tracing::warn!(pet_id = %self.id, error = %err, "Failed to load pet details");
                self.pet = None;
                self.notification =
                    Some(Notification::from_error(&err, "Failed to load pet details"));
            }
        }
        self.loading = false;
    }
}

/// The admin table: the full list plus add, edit and delete.
///
/// Every successful mutation re-fetches the list so the table always shows
/// what the service holds.
#[derive(Debug, Clone, Default)]
pub struct DashboardPage {
    pub loading: bool,
    pub pets: Vec<Pet>,
    pub form: Option<PetForm>,
    pub notification: Option<Notification>,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub async fn load(&mut self, client: &PetClient) {
        self.loading = true;
        match client.list_pets().await {
            Ok(pets) => self.pets = pets,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load pets");
                self.notification = Some(Notification::from_error(&err, "Failed to load pets"));
            }
        }
        self.loading = false;
    }

    pub fn open_create(&mut self) -> &mut PetForm {
        self.form.insert(PetForm::create())
    }

    /// Open the form for a pet in the current list. `None` if the id is not
    /// listed.
    pub fn open_edit(&mut self, id: PetId) -> Option<&mut PetForm> {
        let pet = self.pets.iter().find(|pet| pet.id == id)?;
        Some(self.form.insert(PetForm::edit(pet)))
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Submit the open form. On success the form closes and the list is
    /// re-fetched; on failure the form stays open with its inputs intact.
    pub async fn submit_form(&mut self, client: &PetClient) -> Option<Pet> {
        let form = self.form.as_mut()?;
        let success = form.success_message();

        match form.submit(client).await {
            Ok(pet) => {
                tracing::info!(pet_id = %pet.id, name = %pet.name, "{success}");
                self.form = None;
                self.load(client).await;
                self.notification = Some(Notification::success(success));
                Some(pet)
            }
            Err(err) => {
                if let SubmitError::Client(client_err) = &err {
                    tracing::warn!(error = %client_err, "Failed to save pet");
                }
                self.notification = Some(err.notification());
                None
            }
        }
    }

    /// Delete a pet and re-fetch the list. Confirmation happens before
    /// this is called.
    pub async fn delete(&mut self, client: &PetClient, id: PetId) -> bool {
        match client.delete_pet(id).await {
            Ok(message) => {
                tracing::info!(pet_id = %id, "Pet deleted");
                self.load(client).await;
                self.notification = Some(Notification::success(message));
                true
            }
            Err(err) => {
                tracing::warn!(pet_id = %id, error = %err, "Failed to delete pet");
                self.notification = Some(Notification::from_error(&err, "Failed to delete pet"));
                false
            }
        }
    }
}
