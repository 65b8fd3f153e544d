use std::error::Error;

/// Where a rendered image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Path relative to the assets directory.
    Asset(String),
    /// The image the user uploaded, by file name.
    Upload(String),
}

/// An output surface the catalog browser and the identification flow
/// render into.
pub trait Panel {
    /// Remove everything previously written
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn write_heading(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn write_line(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Write a labelled value, e.g. `Scientific Name: Mentha`
    fn write_field(&mut self, name: &str, value: &str)
        -> Result<(), Box<dyn Error + Send + Sync>>;

    fn show_image(
        &mut self,
        image: ImageRef,
        caption: &str,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
}
