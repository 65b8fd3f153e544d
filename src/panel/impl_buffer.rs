use crate::panel::interface::{ImageRef, Panel};
use std::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelItem {
    Heading(String),
    Line(String),
    Field { name: String, value: String },
    Image { image: ImageRef, caption: String },
}

/// Keeps rendered items in memory. The GUI draws from it every frame.
#[derive(Debug, Clone, Default)]
pub struct PanelBuffer {
    items: Vec<PanelItem>,
}

impl PanelBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[PanelItem] {
        &self.items
    }

    /// Writes the buffered items into another panel.
    pub fn replay(&self, panel: &mut dyn Panel) -> Result<(), Box<dyn Error + Send + Sync>> {
        panel.clear()?;
        for item in &self.items {
            match item {
                PanelItem::Heading(text) => panel.write_heading(text)?,
                PanelItem::Line(text) => panel.write_line(text)?,
                PanelItem::Field { name, value } => panel.write_field(name, value)?,
                PanelItem::Image { image, caption } => panel.show_image(image.clone(), caption)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
impl PanelBuffer {
    /// Plain-text view of the buffer, one item per line.
    pub fn text(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| match item {
                PanelItem::Heading(text) => format!("## {}", text),
                PanelItem::Line(text) => text.clone(),
                PanelItem::Field { name, value } => format!("{}: {}", name, value),
                PanelItem::Image { image, caption } => match image {
                    ImageRef::Asset(path) => format!("[image {}] {}", path, caption),
                    ImageRef::Upload(name) => format!("[upload {}] {}", name, caption),
                },
            })
            .collect()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.text().iter().any(|line| line.contains(needle))
    }
}

impl Panel for PanelBuffer {
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.items.clear();
        Ok(())
    }

    fn write_heading(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.items.push(PanelItem::Heading(text.to_string()));
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.items.push(PanelItem::Line(text.to_string()));
        Ok(())
    }

    fn write_field(
        &mut self,
        name: &str,
        value: &str,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.items.push(PanelItem::Field {
            name: name.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn show_image(
        &mut self,
        image: ImageRef,
        caption: &str,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.items.push(PanelItem::Image {
            image,
            caption: caption.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_clear() {
        let mut panel = PanelBuffer::new();
        panel.write_heading("Identified Plant: Mint").unwrap();
        panel
            .show_image(ImageRef::Asset("img/mint.png".to_string()), "Mint")
            .unwrap();
        panel.write_field("Scientific Name", "Mentha").unwrap();
        panel.write_line("done").unwrap();

        assert_eq!(
            panel.text(),
            vec![
                "## Identified Plant: Mint",
                "[image img/mint.png] Mint",
                "Scientific Name: Mentha",
                "done",
            ]
        );
        assert!(panel.contains_text("Mentha"));

        let mut copy = PanelBuffer::new();
        copy.write_line("stale").unwrap();
        panel.replay(&mut copy).unwrap();
        assert_eq!(copy.items(), panel.items());

        panel.clear().unwrap();
        assert!(panel.items().is_empty());
    }
}
