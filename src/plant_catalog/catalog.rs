use crate::plant_catalog::error::CatalogError;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantRecord {
    pub scientific_name: String,
    pub image_path: String,
    pub description: String,
}

impl PlantRecord {
    pub fn new(scientific_name: &str, image_path: &str, description: &str) -> Self {
        Self {
            scientific_name: scientific_name.to_string(),
            image_path: image_path.to_string(),
            description: description.to_string(),
        }
    }
}

/// A catalog hit from a cross-category search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantMatch {
    pub category: String,
    pub name: String,
    pub record: PlantRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Category {
    name: String,
    plants: Vec<(String, PlantRecord)>,
}

impl Category {
    fn get(&self, plant: &str) -> Option<&PlantRecord> {
        self.plants
            .iter()
            .find(|(name, _)| name == plant)
            .map(|(_, record)| record)
    }
}

/// Read-only plant knowledge base, ordered by definition.
///
/// Built once through [`PlantCatalogBuilder`]; there is no way to mutate it
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantCatalog {
    categories: Vec<Category>,
}

impl PlantCatalog {
    pub fn builder() -> PlantCatalogBuilder {
        PlantCatalogBuilder::default()
    }

    /// Exact, case-sensitive search across every category in definition
    /// order. When a name appears in more than one category the earliest
    /// category wins.
    pub fn lookup_by_name(&self, name: &str) -> Option<PlantMatch> {
        for category in &self.categories {
            if let Some(record) = category.get(name) {
                return Some(PlantMatch {
                    category: category.name.clone(),
                    name: name.to_string(),
                    record: record.clone(),
                });
            }
        }
        None
    }

    pub fn list_categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn list_plants(&self, category: &str) -> Result<Vec<&str>, CatalogError> {
        self.category(category)
            .map(|c| c.plants.iter().map(|(name, _)| name.as_str()).collect())
            .ok_or_else(|| CatalogError::UnknownCategory(category.to_string()))
    }

    pub fn plant(&self, category: &str, plant: &str) -> Option<&PlantRecord> {
        self.category(category).and_then(|c| c.get(plant))
    }

    pub fn plant_count(&self) -> usize {
        self.categories.iter().map(|c| c.plants.len()).sum()
    }

    /// Checks that every record's image exists under `assets_dir`.
    pub fn validate_assets(&self, assets_dir: &Path) -> Result<(), CatalogError> {
        for category in &self.categories {
            for (name, record) in &category.plants {
                let path = assets_dir.join(&record.image_path);
                if !path.is_file() {
                    return Err(CatalogError::MissingAsset {
                        plant: name.clone(),
                        path,
                    });
                }
            }
        }
        Ok(())
    }

    fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }
}

#[derive(Debug, Default)]
pub struct PlantCatalogBuilder {
    categories: Vec<Category>,
}

impl PlantCatalogBuilder {
    pub fn category(mut self, name: &str, plants: Vec<(&str, PlantRecord)>) -> Self {
        self.categories.push(Category {
            name: name.to_string(),
            plants: plants
                .into_iter()
                .map(|(plant, record)| (plant.to_string(), record))
                .collect(),
        });
        self
    }

    pub fn build(self) -> Result<PlantCatalog, CatalogError> {
        if self.categories.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        for (index, category) in self.categories.iter().enumerate() {
            if category.name.trim().is_empty() {
                return Err(CatalogError::EmptyCategoryName);
            }
            if self.categories[..index]
                .iter()
                .any(|earlier| earlier.name == category.name)
            {
                return Err(CatalogError::DuplicateCategory(category.name.clone()));
            }
            if category.plants.is_empty() {
                return Err(CatalogError::EmptyCategory(category.name.clone()));
            }
            validate_plants(category)?;
        }

        Ok(PlantCatalog {
            categories: self.categories,
        })
    }
}

fn validate_plants(category: &Category) -> Result<(), CatalogError> {
    for (index, (name, record)) in category.plants.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyPlantName {
                category: category.name.clone(),
            });
        }
        if category.plants[..index].iter().any(|(earlier, _)| earlier == name) {
            return Err(CatalogError::DuplicatePlant {
                category: category.name.clone(),
                plant: name.clone(),
            });
        }

        let fields = [
            ("scientific name", &record.scientific_name),
            ("image path", &record.image_path),
            ("description", &record.description),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(CatalogError::EmptyField {
                category: category.name.clone(),
                plant: name.clone(),
                field: *field,
            });
        }
    }
    Ok(())
}
