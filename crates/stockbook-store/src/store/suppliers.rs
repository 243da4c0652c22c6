//! # Supplier Store
//!
//! Supplier contact cards. Name, contact person, email, and phone are
//! all required at creation.

use chrono::{DateTime, Utc};

use stockbook_core::validation::validate_new_supplier;
use stockbook_core::{new_record_id, NewSupplier, Supplier, SupplierPatch};

use crate::collection::{Collection, Record};
use crate::error::StoreResult;
use crate::snapshot::Snapshots;

impl Record for Supplier {
    const KEY: &'static str = "suppliers";

    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

/// Store for supplier records.
#[derive(Debug)]
pub struct SupplierStore {
    inner: Collection<Supplier>,
}

impl SupplierStore {
    pub fn open(snapshots: Snapshots) -> StoreResult<Self> {
        Ok(SupplierStore {
            inner: Collection::open(snapshots)?,
        })
    }

    /// Validates, builds the record, appends, persists.
    pub fn add(&mut self, input: NewSupplier) -> StoreResult<Supplier> {
        validate_new_supplier(&input)?;

        let now = Utc::now();
        let supplier = Supplier {
            id: new_record_id(),
            name: input.name.trim().to_string(),
            contact_name: input.contact_name.trim().to_string(),
            email: input.email.trim().to_string(),
            phone: input.phone.trim().to_string(),
            address: input.address,
            city: input.city,
            country: input.country,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };

        self.inner.add(supplier.clone())?;
        Ok(supplier)
    }

    /// Merges the patch. Silent no-op when the id is absent.
    pub fn update(&mut self, id: &str, patch: SupplierPatch) -> StoreResult<bool> {
        self.inner.update_with(id, |supplier| {
            if let Some(name) = patch.name {
                supplier.name = name;
            }
            if let Some(contact_name) = patch.contact_name {
                supplier.contact_name = contact_name;
            }
            if let Some(email) = patch.email {
                supplier.email = email;
            }
            if let Some(phone) = patch.phone {
                supplier.phone = phone;
            }
            if let Some(address) = patch.address {
                supplier.address = address;
            }
            if let Some(city) = patch.city {
                supplier.city = city;
            }
            if let Some(country) = patch.country {
                supplier.country = country;
            }
            if let Some(notes) = patch.notes {
                supplier.notes = notes;
            }
        })
    }

    pub fn remove(&mut self, id: &str) -> StoreResult<bool> {
        self.inner.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&Supplier> {
        self.inner.get(id)
    }

    pub fn all(&self) -> &[Supplier] {
        self.inner.all()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Case-insensitive substring search over the supplier name.
    pub fn search(&self, query: &str) -> Vec<&Supplier> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.inner.all().iter().collect();
        }

        self.inner
            .all()
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn replace_all(&mut self, suppliers: Vec<Supplier>) -> StoreResult<()> {
        self.inner.replace_all(suppliers)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
