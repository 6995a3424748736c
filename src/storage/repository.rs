//! Ordered in-memory repository of persons.

use std::fmt;

use parking_lot::RwLock;

use crate::config::StorageConfig;
use crate::domain::{Address, AddressType, Person};
use crate::storage::error::{StoreError, StoreResult};

/// Outcome of a delete. Its display text is what the API returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { identification: String },
    NotFound { identification: String },
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deleted { identification } => {
                write!(f, "Person with identification {} was deleted", identification)
            }
            Self::NotFound { identification } => {
                write!(f, "Person with identification {} was not found", identification)
            }
        }
    }
}

/// Thread-safe, non-persistent person store.
///
/// Lookups compare identifications with exact string equality and
/// always act on the first match.
#[derive(Debug, Default)]
pub struct PersonRepository {
    persons: RwLock<Vec<Person>>,
    capacity: Option<usize>,
}

impl PersonRepository {
    /// Create an unbounded, empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty repository that refuses saves past `capacity`.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            persons: RwLock::new(Vec::new()),
            capacity: Some(capacity),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        match config.capacity {
            Some(capacity) => Self::with_capacity_limit(capacity),
            None => Self::new(),
        }
    }

    /// Append a person. Duplicate identifications are accepted.
    pub fn save(&self, person: Person) -> StoreResult<Person> {
        let mut persons = self.persons.write();
        if let Some(capacity) = self.capacity {
            if persons.len() >= capacity {
                return Err(StoreError::CapacityExceeded { capacity });
            }
        }
        persons.push(person.clone());
        tracing::debug!(
            identification = %person.identification,
            stored = persons.len(),
            "Person stored"
        );
        Ok(person)
    }

    /// Snapshot of every stored person in insertion order.
    pub fn find_all(&self) -> Vec<Person> {
        self.persons.read().clone()
    }

    pub fn find_by_id(&self, identification: &str) -> StoreResult<Person> {
        self.persons
            .read()
            .iter()
            .find(|person| person.identification == identification)
            .cloned()
            .ok_or_else(|| StoreError::not_found(identification))
    }

    /// Replace the first person matching `identification` with `person`.
    ///
    /// The replacement is stored as given, even when its own
    /// identification differs from the one it was looked up by.
    pub fn update_by_id(&self, identification: &str, person: Person) -> StoreResult<Person> {
        let mut persons = self.persons.write();
        let slot = persons
            .iter_mut()
            .find(|stored| stored.identification == identification)
            .ok_or_else(|| StoreError::not_found(identification))?;

        if person.identification != identification {
            tracing::warn!(
                path_identification = %identification,
                body_identification = %person.identification,
                "Update stores a record under a different identification"
            );
        }
        *slot = person.clone();
        Ok(person)
    }

    /// Remove the first person matching `identification`.
    pub fn delete_by_id(&self, identification: &str) -> DeleteOutcome {
        let mut persons = self.persons.write();
        match persons
            .iter()
            .position(|person| person.identification == identification)
        {
            Some(index) => {
                persons.remove(index);
                DeleteOutcome::Deleted {
                    identification: identification.to_string(),
                }
            }
            None => DeleteOutcome::NotFound {
                identification: identification.to_string(),
            },
        }
    }

    /// Addresses of one category for the first person matching `identification`.
    pub fn find_addresses_by_type(
        &self,
        identification: &str,
        address_type: AddressType,
    ) -> StoreResult<Vec<Address>> {
        self.persons
            .read()
            .iter()
            .find(|person| person.identification == identification)
            .map(|person| person.addresses_of_type(address_type))
            .ok_or_else(|| StoreError::not_found(identification))
    }

    pub fn find_house_addresses_by_id(&self, identification: &str) -> StoreResult<Vec<Address>> {
        self.find_addresses_by_type(identification, AddressType::House)
    }

    pub fn len(&self) -> usize {
        self.persons.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn person(identification: &str, first_name: &str) -> Person {
        Person {
            identification: identification.into(),
            first_name: first_name.into(),
            last_name: "LOPEZ".into(),
            email: "MAIL@MAIL.COM".into(),
            addresses: Vec::new(),
        }
    }

    fn address(city: &str, address_type: AddressType) -> Address {
        Address {
            main_street: "MAIN".into(),
            secondary_street: "SIDE".into(),
            house_number: "1".into(),
            city: city.into(),
            postal_code: 10,
            address_type,
        }
    }

    fn ids(repo: &PersonRepository) -> Vec<String> {
        repo.find_all().into_iter().map(|p| p.identification).collect()
    }

    #[test]
    fn test_save_and_find() {
        let repo = PersonRepository::new();
        assert!(repo.is_empty());

        let saved = repo.save(person("123", "ANA")).unwrap();
        assert_eq!(saved.first_name, "ANA");
        assert_eq!(repo.find_by_id("123").unwrap(), saved);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_find_all_keeps_insertion_order() {
        let repo = PersonRepository::new();
        for id in ["3", "1", "2"] {
            repo.save(person(id, "X")).unwrap();
        }
        assert_eq!(ids(&repo), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_find_by_id_is_exact() {
        let repo = PersonRepository::new();
        repo.save(person("ABC", "X")).unwrap();

        assert!(repo.find_by_id("ABC").is_ok());
        assert_eq!(repo.find_by_id("abc"), Err(StoreError::not_found("abc")));
        assert!(repo.find_by_id(" ABC").unwrap_err().is_not_found());
        assert!(repo.find_by_id("never").unwrap_err().is_not_found());
    }

    #[test]
    fn test_duplicates_resolve_to_first() {
        let repo = PersonRepository::new();
        repo.save(person("1", "FIRST")).unwrap();
        repo.save(person("1", "SECOND")).unwrap();

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.find_by_id("1").unwrap().first_name, "FIRST");

        repo.delete_by_id("1");
        assert_eq!(repo.find_by_id("1").unwrap().first_name, "SECOND");
    }

    #[test]
    fn test_update_replaces_in_place() {
        let repo = PersonRepository::new();
        repo.save(person("1", "A")).unwrap();
        repo.save(person("2", "B")).unwrap();
        repo.save(person("3", "C")).unwrap();

        let updated = repo.update_by_id("2", person("2", "BB")).unwrap();
        assert_eq!(updated.first_name, "BB");

        let all = repo.find_all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0], person("1", "A"));
        assert_eq!(all[1].first_name, "BB");
        assert_eq!(all[2], person("3", "C"));
    }

    #[test]
    fn test_update_missing_leaves_collection() {
        let repo = PersonRepository::new();
        repo.save(person("1", "A")).unwrap();

        let result = repo.update_by_id("9", person("9", "Z"));
        assert!(result.unwrap_err().is_not_found());
        assert_eq!(repo.find_all(), vec![person("1", "A")]);
    }

    #[test]
    fn test_update_does_not_reconcile_identification() {
        let repo = PersonRepository::new();
        repo.save(person("1", "A")).unwrap();

        repo.update_by_id("1", person("2", "B")).unwrap();

        assert!(repo.find_by_id("1").is_err());
        assert_eq!(repo.find_by_id("2").unwrap().first_name, "B");
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_delete_outcomes() {
        let repo = PersonRepository::new();
        repo.save(person("1", "A")).unwrap();
        repo.save(person("2", "B")).unwrap();
        repo.save(person("3", "C")).unwrap();

        let outcome = repo.delete_by_id("2");
        assert!(outcome.is_deleted());
        assert_eq!(outcome.to_string(), "Person with identification 2 was deleted");
        assert_eq!(ids(&repo), vec!["1", "3"]);

        let outcome = repo.delete_by_id("2");
        assert!(!outcome.is_deleted());
        assert_eq!(outcome.to_string(), "Person with identification 2 was not found");
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_house_addresses() {
        let repo = PersonRepository::new();
        let mut mixed = person("1", "A");
        mixed.addresses = vec![
            address("H1", AddressType::House),
            address("W1", AddressType::Work),
            address("H2", AddressType::House),
        ];
        let mut office_only = person("2", "B");
        office_only.addresses = vec![address("W2", AddressType::Work)];
        repo.save(mixed).unwrap();
        repo.save(office_only).unwrap();

        let houses = repo.find_house_addresses_by_id("1").unwrap();
        let cities: Vec<_> = houses.iter().map(|a| a.city.as_str()).collect();
        assert_eq!(cities, vec!["H1", "H2"]);

        assert!(repo.find_house_addresses_by_id("2").unwrap().is_empty());
        assert!(repo.find_house_addresses_by_id("404").unwrap_err().is_not_found());

        let work = repo.find_addresses_by_type("1", AddressType::Work).unwrap();
        assert_eq!(work.len(), 1);
    }

    #[test]
    fn test_capacity_limit() {
        let repo = PersonRepository::with_capacity_limit(1);
        repo.save(person("1", "A")).unwrap();

        let err = repo.save(person("2", "B")).unwrap_err();
        assert_eq!(err, StoreError::CapacityExceeded { capacity: 1 });
        assert_eq!(repo.len(), 1);

        // Deleting frees a slot again.
        repo.delete_by_id("1");
        assert!(repo.save(person("2", "B")).is_ok());
    }

    #[test]
    fn test_from_config() {
        let repo = PersonRepository::from_config(&StorageConfig { capacity: Some(0) });
        assert!(repo.save(person("1", "A")).is_err());

        let repo = PersonRepository::from_config(&StorageConfig::default());
        assert!(repo.save(person("1", "A")).is_ok());
    }

    #[test]
    fn test_concurrent_saves() {
        let repo = Arc::new(PersonRepository::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let repo = repo.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        repo.save(person(&format!("{t}-{i}"), "X")).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(repo.len(), 400);
    }
}
