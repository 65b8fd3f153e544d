use crate::plant_catalog::catalog::{PlantCatalog, PlantRecord};
use crate::plant_catalog::error::CatalogError;

/// The bundled library of plants common in Moroccan cooking and remedies.
pub fn default_catalog() -> Result<PlantCatalog, CatalogError> {
    PlantCatalog::builder()
        .category(
            "Spices",
            vec![
                (
                    "Ginger",
                    PlantRecord::new(
                        "Zingiber officinale",
                        "img/ginger.png",
                        "Medicinal properties for digestion and inflammation.",
                    ),
                ),
                (
                    "Saffron",
                    PlantRecord::new(
                        "Crocus sativus",
                        "img/saffron.png",
                        "Known for its distinctive color and health benefits.",
                    ),
                ),
                (
                    "Turmeric",
                    PlantRecord::new(
                        "Curcuma longa",
                        "img/turmeric.png",
                        "Anti-inflammatory properties.",
                    ),
                ),
                (
                    "Cinnamon",
                    PlantRecord::new(
                        "Cinnamomum",
                        "img/cinnamon.png",
                        "Cinnamon is a spice known for its flavor and medicinal properties.",
                    ),
                ),
                (
                    "Pepper",
                    PlantRecord::new(
                        "Piper nigrum",
                        "img/pepper.png",
                        "Black pepper is commonly used in Moroccan spices blends like Ras el Hanout.",
                    ),
                ),
            ],
        )
        .category(
            "Herbs",
            vec![
                (
                    "Mint",
                    PlantRecord::new(
                        "Mentha",
                        "img/mint.png",
                        "Mint is a fundamental herb in Moroccan tea and is known for its refreshing and digestive properties.",
                    ),
                ),
                (
                    "Thyme",
                    PlantRecord::new(
                        "Thymus",
                        "img/thyme.png",
                        "Thyme is used in Moroccan cuisine and as a remedy for respiratory conditions.",
                    ),
                ),
                (
                    "Basil",
                    PlantRecord::new(
                        "Ocimum basilicum",
                        "img/basil.png",
                        "Basil is used in Moroccan cooking and is known for its anti-inflammatory properties.",
                    ),
                ),
                (
                    "Rosemary",
                    PlantRecord::new(
                        "Salvia rosmarinus",
                        "img/rosemary.png",
                        "Rosemary is a fragrant herb used in Moroccan cooking and traditional medicine.",
                    ),
                ),
            ],
        )
        .category(
            "Medicinal Plants",
            vec![
                (
                    "Aloe Vera",
                    PlantRecord::new(
                        "Aloe barbadensis miller",
                        "img/aloe_vera.png",
                        "Aloe Vera is known for its medicinal properties, particularly in treating skin conditions.",
                    ),
                ),
                (
                    "Lavender",
                    PlantRecord::new(
                        "Lavandula",
                        "img/lavender.png",
                        "Lavender is used for anxiety, stress, and insomnia.",
                    ),
                ),
                (
                    "Coriander",
                    PlantRecord::new(
                        "Coriandrum sativum",
                        "img/coriander.png",
                        "Coriander is commonly used in Moroccan cuisine and traditional medicine for digestive issues.",
                    ),
                ),
            ],
        )
        .build()
}
