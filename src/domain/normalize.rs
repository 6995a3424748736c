//! Uppercase normalization applied before every write.
//!
//! Only string fields change. Postal codes and address types pass
//! through untouched.

use crate::domain::person::{Address, Person};

/// Uppercase a single field using the default Unicode mapping.
pub fn upper_case(value: &str) -> String {
    value.to_uppercase()
}

/// Produce an uppercased copy of a record.
pub trait Normalize {
    fn to_upper_case(&self) -> Self;
}

impl Normalize for Address {
    fn to_upper_case(&self) -> Self {
        Self {
            main_street: upper_case(&self.main_street),
            secondary_street: upper_case(&self.secondary_street),
            house_number: upper_case(&self.house_number),
            city: upper_case(&self.city),
            postal_code: self.postal_code,
            address_type: self.address_type,
        }
    }
}

impl Normalize for Person {
    fn to_upper_case(&self) -> Self {
        Self {
            identification: upper_case(&self.identification),
            first_name: upper_case(&self.first_name),
            last_name: upper_case(&self.last_name),
            email: upper_case(&self.email),
            addresses: self.addresses.iter().map(Normalize::to_upper_case).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::person::AddressType;

    #[test]
    fn test_person_fields_uppercased() {
        let person = Person {
            identification: "abc-1".into(),
            first_name: "ana".into(),
            last_name: "núñez".into(),
            email: "ana@mail.com".into(),
            addresses: vec![Address {
                main_street: "av. amazonas".into(),
                secondary_street: "calle 2".into(),
                house_number: "n12-b".into(),
                city: "quito".into(),
                postal_code: 170150,
                address_type: AddressType::Work,
            }],
        };

        let upper = person.to_upper_case();
        assert_eq!(upper.identification, "ABC-1");
        assert_eq!(upper.first_name, "ANA");
        assert_eq!(upper.last_name, "NÚÑEZ");
        assert_eq!(upper.email, "ANA@MAIL.COM");

        let address = &upper.addresses[0];
        assert_eq!(address.main_street, "AV. AMAZONAS");
        assert_eq!(address.secondary_street, "CALLE 2");
        assert_eq!(address.house_number, "N12-B");
        assert_eq!(address.city, "QUITO");
        assert_eq!(address.postal_code, 170150);
        assert_eq!(address.address_type, AddressType::Work);

        // Source untouched
        assert_eq!(person.first_name, "ana");
    }

    #[test]
    fn test_already_upper_is_stable() {
        let person = Person {
            identification: "X1".into(),
            first_name: "LUIS".into(),
            ..Person::default()
        };
        assert_eq!(person.to_upper_case(), person);
    }

    #[test]
    fn test_upper_case_expands_special_characters() {
        assert_eq!(upper_case("straße"), "STRASSE");
        assert_eq!(upper_case(""), "");
    }
}
