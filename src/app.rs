use crate::catalog_browser::CatalogBrowser;
use crate::cli::Command;
use crate::config::Config;
use crate::error::AppError;
use crate::gui::PlantIdApp;
use crate::identification::flow::IdentificationFlow;
use crate::identification::render::Render;
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::panel::impl_buffer::PanelBuffer;
use crate::panel::impl_console::PanelConsole;
use crate::panel::interface::Panel;
use crate::plant_catalog::catalog::PlantCatalog;
use std::path::Path;
use std::sync::Arc;

pub struct App {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    catalog: Arc<PlantCatalog>,
}

impl App {
    /// Fails when the catalog references images missing from the assets
    /// directory.
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        catalog: PlantCatalog,
    ) -> Result<Self, AppError> {
        catalog.validate_assets(&config.assets_dir)?;

        let _ = logger.info(&format!(
            "Loaded {} plants in {} categories",
            catalog.plant_count(),
            catalog.list_categories().len()
        ));

        Ok(Self {
            config,
            logger,
            catalog: Arc::new(catalog),
        })
    }

    pub fn start(&self, command: Command) -> Result<(), AppError> {
        match command {
            Command::Gui => {
                let app = PlantIdApp::new(
                    self.identification_flow()?,
                    CatalogBrowser::new(self.catalog.clone())?,
                    self.config.assets_dir.clone(),
                    self.logger.clone(),
                );
                app.run()
            }
            Command::Identify { image } => self.identify(&image),
            Command::Browse { category, plant } => {
                self.browse(category.as_deref(), plant.as_deref())
            }
            Command::Categories => self.list_categories(),
        }
    }

    fn identification_flow(&self) -> Result<IdentificationFlow, AppError> {
        Ok(IdentificationFlow::new(
            self.catalog.clone(),
            self.image_classifier()?,
            Render::new(self.config.confidence_precision),
            self.logger.clone(),
        ))
    }

    /// Loaded once per run and shared read-only afterwards.
    fn image_classifier(&self) -> Result<Arc<dyn ImageClassifier + Send + Sync>, AppError> {
        match &self.config.model {
            Some(model_config) => Ok(Arc::new(ImageClassifierTractOnnx::new(
                model_config.clone(),
                self.config.top_k,
                self.logger.clone(),
            )?)),
            None => {
                let _ = self
                    .logger
                    .info("No --model given, using the fake image classifier");
                Ok(Arc::new(ImageClassifierFake::new(
                    self.logger.clone(),
                    self.config.top_k,
                )))
            }
        }
    }

    fn identify(&self, image: &Path) -> Result<(), AppError> {
        let bytes = std::fs::read(image).map_err(|source| AppError::ReadImage {
            path: image.to_path_buf(),
            source,
        })?;
        let image_name = image
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| image.display().to_string());

        let flow = self.identification_flow()?;
        let mut buffer = PanelBuffer::new();
        flow.identify(flow.initial_state(), &image_name, bytes.into(), &mut buffer);

        // Only the settled result goes to the terminal.
        let mut panel = PanelConsole::new(self.config.assets_dir.clone());
        buffer
            .replay(&mut panel)
            .map_err(|e| AppError::Render(e.to_string()))
    }

    fn browse(&self, category: Option<&str>, plant: Option<&str>) -> Result<(), AppError> {
        let mut browser = CatalogBrowser::new(self.catalog.clone())?;
        if let Some(category) = category {
            browser
                .select_category(category)
                .map_err(|e| AppError::Config(e.to_string()))?;
        }
        if let Some(plant) = plant {
            if !browser.select_plant(plant) {
                return Err(AppError::Config(format!(
                    "{} is not in category {}",
                    plant,
                    browser.selected_category()
                )));
            }
        }

        let mut panel = PanelConsole::new(self.config.assets_dir.clone());
        browser
            .render(&mut panel)
            .map_err(|e| AppError::Render(e.to_string()))
    }

    fn list_categories(&self) -> Result<(), AppError> {
        let mut panel = PanelConsole::new(self.config.assets_dir.clone());
        let render = |panel: &mut PanelConsole| -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            for category in self.catalog.list_categories() {
                panel.write_heading(category)?;
                for plant in self.catalog.list_plants(category)? {
                    panel.write_line(&format!("- {}", plant))?;
                }
            }
            Ok(())
        };
        render(&mut panel).map_err(|e| AppError::Render(e.to_string()))
    }
}
