use crate::panel::interface::Panel;
use crate::plant_catalog::catalog::PlantCatalog;
use crate::plant_catalog::error::CatalogError;
use crate::plant_catalog::render::render_record;
use std::error::Error;
use std::sync::Arc;

/// Category and plant selectors over the catalog.
///
/// Like a pair of select boxes it always holds a selection: picking a
/// category moves the plant selection to that category's first plant.
#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    catalog: Arc<PlantCatalog>,
    category: String,
    plant: String,
}

impl CatalogBrowser {
    pub fn new(catalog: Arc<PlantCatalog>) -> Result<Self, CatalogError> {
        let category = catalog
            .list_categories()
            .first()
            .map(|c| c.to_string())
            .ok_or(CatalogError::EmptyCatalog)?;
        let plant = first_plant(&catalog, &category)?;

        Ok(Self {
            catalog,
            category,
            plant,
        })
    }

    pub fn categories(&self) -> Vec<&str> {
        self.catalog.list_categories()
    }

    pub fn plants(&self) -> Vec<&str> {
        // The selected category always comes from the catalog.
        self.catalog.list_plants(&self.category).unwrap_or_default()
    }

    pub fn selected_category(&self) -> &str {
        &self.category
    }

    pub fn selected_plant(&self) -> &str {
        &self.plant
    }

    pub fn select_category(&mut self, category: &str) -> Result<(), CatalogError> {
        if category == self.category {
            return Ok(());
        }
        let plant = first_plant(&self.catalog, category)?;
        self.category = category.to_string();
        self.plant = plant;
        Ok(())
    }

    /// Selects a plant of the current category; unknown names are ignored.
    pub fn select_plant(&mut self, plant: &str) -> bool {
        if self.catalog.plant(&self.category, plant).is_some() {
            self.plant = plant.to_string();
            true
        } else {
            false
        }
    }

    pub fn render(&self, panel: &mut dyn Panel) -> Result<(), Box<dyn Error + Send + Sync>> {
        panel.clear()?;
        if let Some(record) = self.catalog.plant(&self.category, &self.plant) {
            render_record(panel, &self.plant, record)?;
        }
        Ok(())
    }
}

fn first_plant(catalog: &PlantCatalog, category: &str) -> Result<String, CatalogError> {
    catalog
        .list_plants(category)?
        .first()
        .map(|p| p.to_string())
        .ok_or_else(|| CatalogError::EmptyCategory(category.to_string()))
}
