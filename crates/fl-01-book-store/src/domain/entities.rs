//! # Domain Entities
//!
//! Book versions and the store configuration.

use serde::{Deserialize, Serialize};
use shared_types::{Address, VersionId, U256};

/// A published edition of a book.
///
/// Created exactly once by `publish` and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookVersion {
    /// Sequential identifier, starting at 1.
    pub id: VersionId,
    /// Account that published the version and received its supply.
    pub author: Address,
    /// Price per copy, in base units of `currency`.
    pub price: U256,
    /// Payment token the price is denominated in.
    ///
    /// Not checked against deployed tokens; a bad currency surfaces when
    /// someone tries to buy.
    pub currency: Address,
    /// Copies minted at publish time. Equals the total supply forever.
    pub supply: u64,
}

/// Book store configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookStoreConfig {
    /// Metadata URI template. `{id}` is replaced by the zero-padded hex id.
    pub uri_template: String,
    /// Accept versions with a price of zero.
    pub allow_free_editions: bool,
}

impl Default for BookStoreConfig {
    fn default() -> Self {
        Self {
            uri_template: "folio://versions/{id}.json".to_string(),
            allow_free_editions: false,
        }
    }
}

impl BookStoreConfig {
    /// Render the metadata URI of a version.
    #[must_use]
    pub fn render_uri(&self, id: VersionId) -> String {
        self.uri_template.replace("{id}", &format!("{id:064x}"))
    }
}
