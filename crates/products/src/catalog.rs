//! The catalog document and read-only queries over it.

use serde::{Deserialize, Serialize};

use productcatalog_core::{DomainError, DomainResult, Entity};

use crate::product::{Product, ProductId, null_as_default};

/// Catalog document: `{ "products": [ ... ] }`.
///
/// A missing or `null` `products` key decodes to an empty catalog. Order is kept
/// as written and duplicate ids are not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, deserialize_with = "null_as_default")]
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id. With duplicate ids the first one wins.
    pub fn get(&self, id: &ProductId) -> DomainResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| DomainError::not_found(format!("no product with ID {id}")))
    }

    /// Products whose name or description contains `query`, ignoring case.
    ///
    /// Results keep catalog order. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, description: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: description.to_string(),
            ..Product::default()
        }
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            product("OLJCESPC7Z", "Sunglasses", "Sleek aviator sunglasses."),
            product("66VCHSJNUP", "Tank Top", "Perfectly cropped cotton tank, with a scooped neckline."),
            product("1YMWWN1N4O", "Watch", "This gold-tone stainless steel watch."),
            product("L9ECAV7KIM", "Loafers", "A neat addition to your summer wardrobe."),
        ])
    }

    #[test]
    fn decodes_document_in_order() {
        let json = r#"{"products":[{"id":"b","name":"B"},{"id":"a","name":"A"}]}"#;

        let catalog: Catalog = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn missing_products_key_is_empty_catalog() {
        let catalog: Catalog = serde_json::from_str(r#"{"other":1}"#).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn null_products_is_empty_catalog() {
        let catalog: Catalog = serde_json::from_str(r#"{"products":null}"#).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn duplicate_ids_pass_through() {
        let json = r#"{"products":[{"id":"dup","name":"first"},{"id":"dup","name":"second"}]}"#;

        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&ProductId::new("dup")).unwrap().name, "first");
    }

    #[test]
    fn wrong_products_shape_is_rejected() {
        assert!(serde_json::from_str::<Catalog>(r#"{"products":{"id":"x"}}"#).is_err());
        assert!(serde_json::from_str::<Catalog>(r#"{"products":[1,2]}"#).is_err());
    }

    #[test]
    fn get_finds_product_by_id() {
        let catalog = sample();
        let found = catalog.get(&ProductId::new("1YMWWN1N4O")).unwrap();
        assert_eq!(found.name, "Watch");
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let err = sample().get(&ProductId::new("NOPE")).unwrap_err();
        assert_eq!(err, DomainError::NotFound("no product with ID NOPE".to_string()));
    }

    #[test]
    fn search_matches_name_and_description_ignoring_case() {
        let catalog = sample();

        let by_name: Vec<&str> = catalog.search("WATCH").iter().map(|p| p.name.as_str()).collect();
        assert_eq!(by_name, vec!["Watch"]);

        let by_description: Vec<&str> =
            catalog.search("cotton").iter().map(|p| p.name.as_str()).collect();
        assert_eq!(by_description, vec!["Tank Top"]);
    }

    #[test]
    fn search_keeps_catalog_order() {
        let catalog = sample();
        let names: Vec<&str> = catalog.search("s").iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Sunglasses", "Tank Top", "Watch", "Loafers"]);
    }

    #[test]
    fn search_without_match_is_empty() {
        assert!(sample().search("umbrella").is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_product() -> impl Strategy<Value = Product> {
            ("[A-Z0-9]{10}", "[A-Za-z ]{0,30}", "[A-Za-z .]{0,60}").prop_map(
                |(id, name, description)| product(&id, &name, &description),
            )
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: encoding then decoding a catalog keeps every record and its order.
            #[test]
            fn document_survives_json(products in prop::collection::vec(arb_product(), 0..20)) {
                let catalog = Catalog::new(products);
                let json = serde_json::to_string(&catalog).unwrap();
                let decoded: Catalog = serde_json::from_str(&json).unwrap();
                prop_assert_eq!(decoded, catalog);
            }

            /// Property: search results are a subsequence of the catalog and all match.
            #[test]
            fn search_results_match_query(
                products in prop::collection::vec(arb_product(), 0..20),
                query in "[a-zA-Z]{0,3}"
            ) {
                let catalog = Catalog::new(products);
                let results = catalog.search(&query);
                let needle = query.to_lowercase();

                prop_assert!(results.len() <= catalog.len());
                for p in &results {
                    prop_assert!(
                        p.name.to_lowercase().contains(&needle)
                            || p.description.to_lowercase().contains(&needle)
                    );
                }

                let positions: Vec<usize> = results
                    .iter()
                    .map(|r| catalog.products().iter().position(|p| std::ptr::eq(p, *r)).unwrap())
                    .collect();
                prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }

            /// Property: an empty query returns the whole catalog.
            #[test]
            fn empty_query_matches_all(products in prop::collection::vec(arb_product(), 0..20)) {
                let catalog = Catalog::new(products);
                prop_assert_eq!(catalog.search("").len(), catalog.len());
            }
        }
    }
}
