use serde::{Deserialize, Deserializer, Serialize};

use productcatalog_core::{Entity, ValueObject};

/// Product identifier as published in the catalog (e.g. `"OLJCESPC7Z"`).
///
/// Any string is accepted; the catalog owner decides the format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Decode an explicit JSON `null` the same way as an absent field: as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Amount of money in a given currency.
///
/// `units` is the whole part, `nanos` the fractional part in billionths
/// (`USD 19.99` is `units = 19, nanos = 990_000_000`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Money {
    #[serde(alias = "currency_code", deserialize_with = "null_as_default")]
    pub currency_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub units: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub nanos: i32,
}

impl ValueObject for Money {}

/// A sellable item as listed in the catalog.
///
/// Every field is optional in the source document: absent or `null` fields take
/// their empty value and unknown fields are ignored. A key given twice, including
/// a key together with its alias (`priceUsd` and `price_usd`), is a decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub id: ProductId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub picture: String,
    #[serde(alias = "price_usd", deserialize_with = "null_as_default")]
    pub price_usd: Money,
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
