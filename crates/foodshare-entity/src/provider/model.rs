//! Provider entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An entity donating surplus food (restaurant, grocery store, etc.).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Provider {
    /// Unique provider identifier.
    pub id: i64,
    /// Provider name.
    pub name: String,
    /// Provider kind (e.g. "Restaurant", "Grocery Store").
    pub kind: String,
    /// Street address.
    pub address: String,
    /// City the provider operates in.
    pub city: String,
    /// Contact information (phone or email).
    pub contact: String,
}

/// Data required to create a new provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProvider {
    /// Provider name.
    pub name: String,
    /// Provider kind.
    pub kind: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Contact information.
    pub contact: String,
}

/// Partial update of a provider. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProvider {
    /// New name.
    pub name: Option<String>,
    /// New kind.
    pub kind: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New contact information.
    pub contact: Option<String>,
}

/// Name and contact details of a provider, used by the city lookup.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProviderContact {
    /// Provider name.
    pub name: String,
    /// Contact information.
    pub contact: String,
}
