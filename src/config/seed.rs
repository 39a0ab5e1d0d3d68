//! Demo data the shop starts with when the configuration file provides none.
//!
//! Jobs refer to customers by the id the directory assigns them, which is
//! their 1-based position in the `[[customers]]` list.

use crate::entities::{CustomerDraft, ProductDraft, ProductKind, ServiceHistoryItem, StepDraft};
use serde::Deserialize;

/// A job to open at startup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobSeed {
    /// Customer id the job belongs to
    pub customer_id: i64,
    /// Bay label
    pub bay: String,
    /// Ordered checklist
    #[serde(default)]
    pub steps: Vec<StepDraft>,
}

fn product(name: &str, price: u64, category: &str, icon: &str, kind: ProductKind) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        price,
        category: category.to_string(),
        icon: icon.to_string(),
        kind,
        barcode: None,
    }
}

fn step(name: &str, description: &str, icon: &str, completed: bool) -> StepDraft {
    StepDraft {
        icon: icon.to_string(),
        completed,
        ..StepDraft::new(name, description)
    }
}

fn history(title: &str, subtitle: &str, date: &str, mileage: &str, icon: &str) -> ServiceHistoryItem {
    ServiceHistoryItem {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        date: date.to_string(),
        mileage: mileage.to_string(),
        icon: icon.to_string(),
        verified: true,
    }
}

/// Seeded catalog.
#[must_use]
pub fn demo_products() -> Vec<ProductDraft> {
    vec![
        product("Cerámico Graphene 9H", 450_000, "Protección", "shield", ProductKind::Service),
        product("Corrección Pintura (Etapa 2)", 250_000, "Estética", "flare", ProductKind::Service),
        ProductDraft {
            barcode: Some("78000000001".to_string()),
            ..product("Shampoo pH Neutro", 15_900, "Insumos", "water_drop", ProductKind::Good)
        },
    ]
}

/// Seeded customer directory.
#[must_use]
pub fn demo_customers() -> Vec<CustomerDraft> {
    vec![
        CustomerDraft {
            name: "Juan Pérez".to_string(),
            phone: "+56912345678".to_string(),
            vehicle: "Porsche 911 GT3 RS".to_string(),
        },
        CustomerDraft {
            name: "Marta Gómez".to_string(),
            phone: "+56987654321".to_string(),
            vehicle: "Audi RS6 Avant".to_string(),
        },
    ]
}

/// Seeded job board: one car in bay 1 with its first step done.
#[must_use]
pub fn demo_jobs() -> Vec<JobSeed> {
    vec![JobSeed {
        customer_id: 1,
        bay: "Bahía 1".to_string(),
        steps: vec![
            step("Lavado y Descontaminado", "Clay bar profunda", "water_drop", true),
            step("Corrección de Pintura", "Eliminación de swirls", "flare", false),
            step("Sellado Cerámico", "Graphene 9H", "shield", false),
        ],
    }]
}

/// Seeded vehicle logbook.
#[must_use]
pub fn demo_logbook() -> Vec<ServiceHistoryItem> {
    vec![
        history("Tratamiento Cerámico 9H", "Recubrimiento Nanotecnológico", "12 Dic, 2024", "12,400", "shield"),
        history(
            "Detallado de Interiores",
            "Desinfección y Nutrición de Cuero",
            "05 Oct, 2024",
            "11,200",
            "airline_seat_recline_extra",
        ),
        history("Corrección de Pintura", "Restauración de Brillo Espejo", "20 Jul, 2024", "9,500", "flare"),
        history("Instalación de PPF", "Paint Protection Film - Frontal", "10 May, 2024", "5,200", "layers"),
    ]
}
