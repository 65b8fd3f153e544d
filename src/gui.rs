use crate::catalog_browser::CatalogBrowser;
use crate::error::AppError;
use crate::identification::core::State;
use crate::identification::flow::IdentificationFlow;
use crate::library::logger::interface::Logger;
use crate::panel::impl_buffer::{PanelBuffer, PanelItem};
use crate::panel::interface::{ImageRef, Panel};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Plant library sidebar plus the identification page.
pub struct PlantIdApp {
    flow: IdentificationFlow,
    flow_state: State,
    flow_panel: PanelBuffer,
    browser: CatalogBrowser,
    browser_panel: PanelBuffer,
    assets_dir: PathBuf,
    logger: Arc<dyn Logger + Send + Sync>,
    path_input: String,
    upload: Option<Arc<[u8]>>,
    textures: HashMap<String, Option<egui::TextureHandle>>,
}

impl PlantIdApp {
    pub fn new(
        flow: IdentificationFlow,
        browser: CatalogBrowser,
        assets_dir: PathBuf,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        let flow_state = flow.initial_state();
        let mut app = Self {
            flow,
            flow_state,
            flow_panel: PanelBuffer::new(),
            browser,
            browser_panel: PanelBuffer::new(),
            assets_dir,
            logger: logger.with_namespace("gui"),
            path_input: String::new(),
            upload: None,
            textures: HashMap::new(),
        };
        app.render_browser();
        app
    }

    pub fn run(self) -> Result<(), AppError> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]),
            ..Default::default()
        };

        eframe::run_native(
            "Plant Species Identification",
            options,
            Box::new(|_cc| Box::new(self)),
        )
        .map_err(|e| AppError::Gui(e.to_string()))
    }

    fn render_browser(&mut self) {
        if let Err(e) = self.browser.render(&mut self.browser_panel) {
            let _ = self.logger.error(&format!("render failed: {}", e));
        }
    }

    fn submit(&mut self, image_name: &str, bytes: Arc<[u8]>) {
        self.textures.retain(|key, _| !key.starts_with("upload:"));
        self.upload = Some(bytes.clone());

        let state = std::mem::replace(&mut self.flow_state, State::Idle);
        self.flow_state = self
            .flow
            .identify(state, image_name, bytes, &mut self.flow_panel);
    }

    fn submit_path(&mut self, path: &Path) {
        match std::fs::read(path) {
            Ok(bytes) => {
                let image_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                self.submit(&image_name, bytes.into());
            }
            Err(e) => {
                let _ = self
                    .logger
                    .error(&format!("failed to read {}: {}", path.display(), e));
                let _ = self.flow_panel.clear();
                let _ = self
                    .flow_panel
                    .write_line(&format!("Error: failed to read {}: {}", path.display(), e));
            }
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<egui::DroppedFile> = ctx.input(|i| i.raw.dropped_files.clone());

        // One upload at a time, like a single file picker.
        if let Some(file) = dropped.into_iter().next() {
            match (file.bytes, file.path) {
                (Some(bytes), _) => self.submit(&file.name, bytes),
                (None, Some(path)) => self.submit_path(&path),
                (None, None) => {}
            }
        }
    }

    fn texture(&mut self, ctx: &egui::Context, image: &ImageRef) -> Option<egui::TextureHandle> {
        let key = match image {
            ImageRef::Asset(path) => format!("asset:{}", path),
            ImageRef::Upload(name) => format!("upload:{}", name),
        };

        if let Some(texture) = self.textures.get(&key) {
            return texture.clone();
        }

        let decoded = match image {
            ImageRef::Asset(path) => image::open(self.assets_dir.join(path)),
            ImageRef::Upload(_) => match &self.upload {
                Some(bytes) => image::load_from_memory(bytes),
                None => return None,
            },
        };

        let texture = match decoded {
            Ok(decoded) => {
                let rgba = decoded.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                Some(ctx.load_texture(&key, color_image, egui::TextureOptions::LINEAR))
            }
            Err(e) => {
                let _ = self.logger.error(&format!("cannot show {}: {}", key, e));
                None
            }
        };

        self.textures.insert(key, texture.clone());
        texture
    }

    fn draw_items(&mut self, ui: &mut egui::Ui, items: &[PanelItem]) {
        for item in items {
            match item {
                PanelItem::Heading(text) => {
                    ui.heading(text);
                }
                PanelItem::Line(text) => {
                    ui.label(text);
                }
                PanelItem::Field { name, value } => {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(format!("{}:", name)).strong());
                        ui.label(value);
                    });
                }
                PanelItem::Image { image, caption } => {
                    let ctx = ui.ctx().clone();
                    if let Some(texture) = self.texture(&ctx, image) {
                        ui.add(
                            egui::Image::from_texture(egui::load::SizedTexture::from_handle(
                                &texture,
                            ))
                            .max_width(ui.available_width()),
                        );
                    }
                    ui.label(egui::RichText::new(caption).small());
                }
            }
            ui.add_space(4.0);
        }
    }

    fn draw_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.heading("Plant Library");
        ui.add_space(8.0);

        let mut category = self.browser.selected_category().to_string();
        egui::ComboBox::from_label("Choose a category")
            .selected_text(category.clone())
            .show_ui(ui, |ui| {
                for option in self.browser.categories() {
                    ui.selectable_value(&mut category, option.to_string(), option);
                }
            });
        if category != self.browser.selected_category() {
            if let Err(e) = self.browser.select_category(&category) {
                let _ = self.logger.error(&e.to_string());
            }
            self.render_browser();
        }

        let mut plant = self.browser.selected_plant().to_string();
        egui::ComboBox::from_label(format!(
            "Choose a plant from {}",
            self.browser.selected_category()
        ))
        .selected_text(plant.clone())
        .show_ui(ui, |ui| {
            for option in self.browser.plants() {
                ui.selectable_value(&mut plant, option.to_string(), option);
            }
        });
        if plant != self.browser.selected_plant() {
            self.browser.select_plant(&plant);
            self.render_browser();
        }

        ui.separator();
        let items = self.browser_panel.items().to_vec();
        egui::ScrollArea::vertical().show(ui, |ui| self.draw_items(ui, &items));
    }

    fn draw_identification(&mut self, ui: &mut egui::Ui) {
        ui.heading("Plant Species Identification");
        ui.add_space(8.0);
        ui.label("Choose a plant image... (drop a JPEG or PNG here, or enter its path)");

        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut self.path_input);
            if ui.button("Identify").clicked() && !self.path_input.trim().is_empty() {
                let path = PathBuf::from(self.path_input.trim());
                self.submit_path(&path);
            }
            if ui.button("Clear").clicked() {
                let state = std::mem::replace(&mut self.flow_state, State::Idle);
                self.flow_state = self.flow.reset(state, &mut self.flow_panel);
                self.upload = None;
            }
        });

        ui.separator();
        let items = self.flow_panel.items().to_vec();
        egui::ScrollArea::vertical().show(ui, |ui| self.draw_items(ui, &items));
    }
}

impl eframe::App for PlantIdApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        egui::SidePanel::left("plant_library")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| self.draw_sidebar(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.draw_identification(ui));
    }
}
