use crate::panel::interface::{ImageRef, Panel};
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

/// Writes rendered items straight to stdout.
pub struct PanelConsole {
    assets_dir: PathBuf,
}

impl PanelConsole {
    pub fn new(assets_dir: PathBuf) -> Self {
        Self { assets_dir }
    }

    fn print(&self, line: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        Ok(())
    }
}

impl Panel for PanelConsole {
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.print("────────────────────────────────")
    }

    fn write_heading(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.print(&format!("## {}", text))
    }

    fn write_line(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.print(text)
    }

    fn write_field(
        &mut self,
        name: &str,
        value: &str,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.print(&format!("{}: {}", name, value))
    }

    fn show_image(
        &mut self,
        image: ImageRef,
        caption: &str,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        match image {
            ImageRef::Asset(path) => self.print(&format!(
                "[image {}] {}",
                self.assets_dir.join(path).display(),
                caption
            )),
            ImageRef::Upload(name) => self.print(&format!("[image {}] {}", name, caption)),
        }
    }
}
