//! # Client Store
//!
//! Customer contact cards. Only the name is required; there is no
//! uniqueness constraint on email or tax id.

use chrono::{DateTime, Utc};

use stockbook_core::validation::validate_new_client;
use stockbook_core::{new_record_id, Client, ClientPatch, NewClient};

use crate::collection::{Collection, Record};
use crate::error::StoreResult;
use crate::snapshot::Snapshots;

impl Record for Client {
    const KEY: &'static str = "clients";

    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

/// Store for client records.
#[derive(Debug)]
pub struct ClientStore {
    inner: Collection<Client>,
}

impl ClientStore {
    pub fn open(snapshots: Snapshots) -> StoreResult<Self> {
        Ok(ClientStore {
            inner: Collection::open(snapshots)?,
        })
    }

    /// Validates, builds the record, appends, persists.
    pub fn add(&mut self, input: NewClient) -> StoreResult<Client> {
        validate_new_client(&input)?;

        let now = Utc::now();
        let client = Client {
            id: new_record_id(),
            name: input.name.trim().to_string(),
            email: input.email,
            phone: input.phone,
            address: input.address,
            city: input.city,
            country: input.country,
            tax_id: input.tax_id,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };

        self.inner.add(client.clone())?;
        Ok(client)
    }

    /// Merges the patch. Silent no-op when the id is absent.
    pub fn update(&mut self, id: &str, patch: ClientPatch) -> StoreResult<bool> {
        self.inner.update_with(id, |client| {
            if let Some(name) = patch.name {
                client.name = name;
            }
            if let Some(email) = patch.email {
                client.email = email;
            }
            if let Some(phone) = patch.phone {
                client.phone = phone;
            }
            if let Some(address) = patch.address {
                client.address = address;
            }
            if let Some(city) = patch.city {
                client.city = city;
            }
            if let Some(country) = patch.country {
                client.country = country;
            }
            if let Some(tax_id) = patch.tax_id {
                client.tax_id = tax_id;
            }
            if let Some(notes) = patch.notes {
                client.notes = notes;
            }
        })
    }

    pub fn remove(&mut self, id: &str) -> StoreResult<bool> {
        self.inner.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&Client> {
        self.inner.get(id)
    }

    pub fn all(&self) -> &[Client] {
        self.inner.all()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Case-insensitive substring search over the client name.
    pub fn search(&self, query: &str) -> Vec<&Client> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.inner.all().iter().collect();
        }

        self.inner
            .all()
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn replace_all(&mut self, clients: Vec<Client>) -> StoreResult<()> {
        self.inner.replace_all(clients)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::StoreConfig;

    fn open_temp() -> (tempfile::TempDir, ClientStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let snapshots = Snapshots::open(StoreConfig::new(dir.path())).expect("open");
        let store = ClientStore::open(snapshots).expect("store");
        (dir, store)
    }

    #[test]
    fn test_only_name_is_required() {
        let (_dir, mut store) = open_temp();
        let client = store
            .add(NewClient {
                name: "Ana Torres".to_string(),
                ..NewClient::default()
            })
            .unwrap();

        assert_eq!(store.get(&client.id).unwrap().name, "Ana Torres");

        let nameless = store.add(NewClient::default());
        assert!(nameless.is_err());
    }

    #[test]
    fn test_duplicate_emails_are_allowed() {
        let (_dir, mut store) = open_temp();
        for name in ["Ana", "Bruno"] {
            store
                .add(NewClient {
                    name: name.to_string(),
                    email: Some("shared@example.com".to_string()),
                    ..NewClient::default()
                })
                .unwrap();
        }
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_patch_clears_optional_field() {
        let (_dir, mut store) = open_temp();
        let client = store
            .add(NewClient {
                name: "Ana".to_string(),
                phone: Some("555-0100".to_string()),
                ..NewClient::default()
            })
            .unwrap();

        let patch = ClientPatch {
            phone: Some(None),
            city: Some(Some("Lima".to_string())),
            ..ClientPatch::default()
        };
        assert!(store.update(&client.id, patch).unwrap());

        let updated = store.get(&client.id).unwrap();
        assert_eq!(updated.phone, None);
        assert_eq!(updated.city.as_deref(), Some("Lima"));
        assert_eq!(updated.name, "Ana");
    }

    #[test]
    fn test_search_by_name() {
        let (_dir, mut store) = open_temp();
        for name in ["Ana Torres", "Bruno Vega", "Anabel Ruiz"] {
            store
                .add(NewClient {
                    name: name.to_string(),
                    ..NewClient::default()
                })
                .unwrap();
        }

        assert_eq!(store.search("ana").len(), 2);
        assert_eq!(store.search("vega").len(), 1);
        assert_eq!(store.search("").len(), 3);
    }
}
