// User directory wire types.
// Defines structs for deserializing the remote user listing response.
// Deserialization is strict: a malformed record fails the whole payload.

use serde::{Deserialize, Serialize};

/// A user record as returned by the directory endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

/// Postal address with geographic coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Geographic coordinates. Kept as strings: the wire carries strings and
/// they are only ever interpolated into a map URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// Company affiliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}

impl User {
    /// Map query URL derived from the record's coordinates.
    pub fn map_link(&self) -> String {
        format!(
            "https://www.google.com/maps?q={},{}",
            self.address.geo.lat, self.address.geo.lng
        )
    }

    /// Protocol-qualified link to the record's website.
    pub fn website_link(&self) -> String {
        format!("https://{}", self.website)
    }
}
