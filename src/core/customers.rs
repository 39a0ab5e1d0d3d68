//! Customer directory business logic.
//!
//! Customers are created from a form, edited by replacing the record with the
//! matching id, and deleted only after an explicit confirmation. Jobs keep a
//! weak reference to their customer, so deleting one never touches the board.

use crate::{
    entities::{Customer, CustomerDraft},
    errors::Result,
};
use tracing::{debug, info};

/// The shop's customer list.
#[derive(Debug, Clone)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
    next_id: i64,
}

impl Default for CustomerDirectory {
    fn default() -> Self {
        Self {
            customers: Vec::new(),
            next_id: 1,
        }
    }
}

impl CustomerDirectory {
    /// Wraps existing customers.
    #[must_use]
    pub fn new(customers: Vec<Customer>) -> Self {
        let next_id = customers.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self { customers, next_id }
    }

    /// Every customer, in the order they were added.
    #[must_use]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Looks a customer up by id.
    #[must_use]
    pub fn get(&self, customer_id: i64) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == customer_id)
    }

    /// Number of customers on file.
    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// True when nobody is on file.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Adds a customer from a form submission.
    ///
    /// # Errors
    /// Returns a validation error if the name is blank.
    pub fn add(&mut self, draft: CustomerDraft) -> Result<&Customer> {
        let customer = Customer::from_draft(self.next_id, draft)?;
        self.next_id += 1;
        info!(customer_id = customer.id, name = %customer.name, "Added customer");
        self.customers.push(customer);
        Ok(&self.customers[self.customers.len() - 1])
    }

    /// Replaces the customer with this id by the edited form.
    ///
    /// Returns `Ok(None)` if no customer has this id.
    ///
    /// # Errors
    /// Returns a validation error if the edited name is blank; the stored
    /// record is left unchanged.
    pub fn update(&mut self, customer_id: i64, draft: CustomerDraft) -> Result<Option<&Customer>> {
        let Some(index) = self.customers.iter().position(|c| c.id == customer_id) else {
            return Ok(None);
        };
        self.customers[index] = Customer::from_draft(customer_id, draft)?;
        debug!(customer_id, "Updated customer");
        Ok(Some(&self.customers[index]))
    }

    /// Removes a customer once `confirm` approves it.
    ///
    /// Returns the removed customer, or `None` if it does not exist or the
    /// confirmation was declined.
    pub fn delete(
        &mut self,
        customer_id: i64,
        confirm: impl FnOnce(&Customer) -> bool,
    ) -> Option<Customer> {
        let index = self.customers.iter().position(|c| c.id == customer_id)?;
        if !confirm(&self.customers[index]) {
            debug!(customer_id, "Customer deletion declined");
            return None;
        }
        let removed = self.customers.remove(index);
        info!(customer_id, name = %removed.name, "Removed customer");
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::customer_draft;

    #[test]
    fn test_add_and_get() {
        let mut directory = CustomerDirectory::default();
        let id = directory
            .add(customer_draft("Juan Pérez", "+56912345678"))
            .unwrap()
            .id;
        assert_eq!(directory.get(id).unwrap().phone, "+56912345678");
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_add_blank_name_rejected() {
        let mut directory = CustomerDirectory::default();
        assert!(directory.add(customer_draft(" ", "")).is_err());
        assert!(directory.is_empty());
    }

    #[test]
    fn test_update_replaces_record() {
        let mut directory = CustomerDirectory::default();
        let id = directory.add(customer_draft("Juan", "1")).unwrap().id;

        let mut edit = customer_draft("Juan Pérez", "2");
        edit.vehicle = "Audi RS6 Avant".to_string();
        let updated = directory.update(id, edit).unwrap().unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.vehicle, "Audi RS6 Avant");

        assert!(directory.update(42, customer_draft("X", "")).unwrap().is_none());
    }

    #[test]
    fn test_update_invalid_keeps_record() {
        let mut directory = CustomerDirectory::default();
        let id = directory.add(customer_draft("Juan", "1")).unwrap().id;
        assert!(directory.update(id, customer_draft("", "")).is_err());
        assert_eq!(directory.get(id).unwrap().name, "Juan");
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut directory = CustomerDirectory::default();
        let id = directory.add(customer_draft("Marta", "")).unwrap().id;

        assert!(directory.delete(id, |_| false).is_none());
        assert_eq!(directory.len(), 1);

        assert!(directory.delete(id, |c| c.name == "Marta").is_some());
        assert!(directory.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut directory = CustomerDirectory::default();
        let first = directory.add(customer_draft("A", "")).unwrap().id;
        directory.delete(first, |_| true);
        let second = directory.add(customer_draft("B", "")).unwrap().id;
        assert_ne!(first, second);
    }
}
