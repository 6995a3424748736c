//! Person and address records as they travel over the wire.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category of a postal address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    House,
    Work,
    Other,
}

/// A postal address owned by a [`Person`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    #[serde(default)]
    pub main_street: String,

    #[serde(rename = "secundary_street", default)]
    pub secondary_street: String,

    #[serde(rename = "n_house", default)]
    pub house_number: String,

    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub postal_code: i32,

    #[serde(rename = "addresType")]
    pub address_type: AddressType,
}

/// A person record.
///
/// `identification` is meant to be unique but nothing enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub identification: String,

    #[serde(rename = "fisrtName")]
    pub first_name: String,

    pub last_name: String,

    pub email: String,

    #[serde(rename = "address")]
    pub addresses: Vec<Address>,
}

impl Person {
    /// Addresses of the given category, in their original order.
    pub fn addresses_of_type(&self, address_type: AddressType) -> Vec<Address> {
        self.addresses
            .iter()
            .filter(|address| address.address_type == address_type)
            .cloned()
            .collect()
    }
}
