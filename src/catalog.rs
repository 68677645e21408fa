// In-memory tire catalog, loaded once at startup. Read-only afterwards, so it
// can be shared across concurrent requests without locking.
use crate::model::{CatalogError, CatalogItem};
use std::fs;

pub struct CatalogStore {
    items: Vec<CatalogItem>,
}

impl CatalogStore {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Loads the catalog from a JSON array file. Failure here is fatal for
    /// the process; the engine cannot operate without its data.
    pub fn load(path: &str) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        let items: Vec<CatalogItem> = serde_json::from_str(&content)?;
        Ok(Self { items })
    }

    pub fn all(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Exact brand+model equality, case-insensitive. One product line may
    /// span several rows, so this returns every match.
    pub fn find_exact(&self, brand: &str, model: &str) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|t| {
                t.brand.eq_ignore_ascii_case(brand) && t.model.eq_ignore_ascii_case(model)
            })
            .collect()
    }

    /// Brand equality plus model substring, tolerating partial model names.
    pub fn find_by_brand_model_substring(
        &self,
        brand: &str,
        model_fragment: &str,
    ) -> Vec<&CatalogItem> {
        let brand = brand.to_lowercase();
        let fragment = model_fragment.to_lowercase();
        self.items
            .iter()
            .filter(|t| {
                t.brand.to_lowercase() == brand && t.model.to_lowercase().contains(&fragment)
            })
            .collect()
    }

    /// Exact vehicle make+model equality, case-insensitive.
    pub fn find_by_vehicle(&self, make: &str, model: &str) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|t| {
                t.vehicle_make.eq_ignore_ascii_case(make)
                    && t.vehicle_model.eq_ignore_ascii_case(model)
            })
            .collect()
    }

    /// Exact tire model equality regardless of brand. Used by the
    /// recommendation and conversation-continuation paths.
    pub fn find_by_model(&self, model: &str) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|t| t.model.eq_ignore_ascii_case(model))
            .collect()
    }

    /// Keeps only items whose size equals the canonical token,
    /// case-insensitive. Never re-admits items the route already excluded.
    pub fn filter_by_size<'a>(items: Vec<&'a CatalogItem>, size: &str) -> Vec<&'a CatalogItem> {
        items
            .into_iter()
            .filter(|t| t.size.eq_ignore_ascii_case(size))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::model::CatalogItem;

    use super::CatalogStore;

    pub fn item(
        id: u32,
        brand: &str,
        model: &str,
        size: &str,
        price: f64,
        vehicle_make: &str,
        vehicle_model: &str,
    ) -> CatalogItem {
        CatalogItem {
            id,
            brand: brand.into(),
            model: model.into(),
            size: size.into(),
            price,
            rating: 4.5,
            stock: 12,
            image_url: format!("https://tires.example/img/{id}.jpg"),
            product_url: format!("https://tires.example/p/{id}"),
            vehicle_make: vehicle_make.into(),
            vehicle_model: vehicle_model.into(),
        }
    }

    pub fn sample_store() -> CatalogStore {
        CatalogStore::new(vec![
            item(1, "Michelin", "Defender T+H", "225/65R17", 129.99, "Nissan", "Pathfinder"),
            item(2, "Michelin", "Defender T+H", "215/60R16", 119.49, "Toyota", "Camry"),
            item(3, "Goodyear", "Assurance All-Season", "195/65R15", 98.75, "Honda", "Civic"),
            item(4, "Bridgestone", "Turanza QuietTrack", "225/65R17", 154.00, "Nissan", "Pathfinder"),
            item(5, "Hankook", "Kinergy PT", "205/55R16", 89.99, "", ""),
        ])
    }
}
