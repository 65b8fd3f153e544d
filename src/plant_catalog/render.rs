use crate::panel::interface::{ImageRef, Panel};
use crate::plant_catalog::catalog::PlantRecord;
use std::error::Error;

/// Image, scientific name and description of one plant.
pub fn render_record(
    panel: &mut dyn Panel,
    name: &str,
    record: &PlantRecord,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    panel.show_image(ImageRef::Asset(record.image_path.clone()), name)?;
    panel.write_field("Scientific Name", &record.scientific_name)?;
    panel.write_field("Description", &record.description)?;
    Ok(())
}
