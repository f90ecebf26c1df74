//! Static content catalog for the landing page.
//!
//! Everything the page displays lives here as `'static` data: the six
//! feature entries, the benefit lines, the process steps and the page copy.
//! Array position is the only identity an entry has.
//!
//! The types derive [`Serialize`] so the export CLI can dump the catalog
//! as `catalog.json` next to the rendered page.
//!
//! # Example
//!
//! ```rust
//! use agro_page::catalog::{BENEFITS, FEATURES, PROCESS_STEPS};
//!
//! assert_eq!(FEATURES.len(), 6);
//! assert_eq!(BENEFITS.len(), 6);
//! assert_eq!(PROCESS_STEPS.len(), 5);
//! assert_eq!(FEATURES[1].title, "Gestión del Riego");
//! ```

use serde::Serialize;

/// Glyph shown in a feature card's icon badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureIcon {
    /// Aerial monitoring
    Drone,
    /// Irrigation
    Droplet,
    /// Fertilizer control
    Leaf,
    /// Data analysis
    BarChart,
    /// Real-time alerts
    Zap,
    /// Crop planning, also used as the benefit bullet
    Sprout,
}

/// One product capability: a card on the grid plus its detail dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureEntry {
    /// Icon badge glyph
    pub icon: FeatureIcon,
    /// Card and dialog title
    pub title: &'static str,
    /// One-line summary shown on the card
    pub description: &'static str,
    /// Operational tasks, in display order
    pub activities: &'static [&'static str],
    /// Output artifacts, in display order
    pub deliverables: &'static [&'static str],
}

/// One entry of the "how it works" sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    /// Step heading
    pub title: &'static str,
    /// Step body text
    pub description: &'static str,
}

/// Page-level copy that is not part of any list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageCopy {
    /// `<title>` of the exported document
    pub document_title: &'static str,
    /// Hero heading
    pub hero_title: &'static str,
    /// Hero subtitle
    pub hero_subtitle: &'static str,
    /// Heading above the feature grid
    pub features_heading: &'static str,
    /// Heading of the activity list inside a dialog
    pub activities_heading: &'static str,
    /// Heading of the deliverable list inside a dialog
    pub deliverables_heading: &'static str,
    /// Heading of the benefits section
    pub benefits_heading: &'static str,
    /// Heading of the process section
    pub process_heading: &'static str,
    /// Heading of the call-to-action section
    pub cta_heading: &'static str,
    /// Label of the call-to-action button
    pub cta_label: &'static str,
    /// Accessible label of the dialog close button
    pub close_label: &'static str,
}

/// The whole catalog, as written to `catalog.json`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Catalog {
    /// Page-level copy
    pub copy: &'static PageCopy,
    /// Feature entries
    pub features: &'static [FeatureEntry],
    /// Benefit lines
    pub benefits: &'static [&'static str],
    /// Process steps
    pub process: &'static [ProcessStep],
}

/// Number of feature cards on the page.
pub const FEATURE_COUNT: usize = 6;

/// Catalog handle over the static tables below.
pub const CATALOG: Catalog = Catalog {
    copy: &COPY,
    features: &FEATURES,
    benefits: &BENEFITS,
    process: &PROCESS_STEPS,
};

/// Page-level copy.
pub const COPY: PageCopy = PageCopy {
    document_title: "Agricultura de Precisión",
    hero_title: "Sistema de Automatización para la Agricultura de Precisión",
    hero_subtitle: "Optimiza tus cultivos con drones y sensores IoT para una agricultura más eficiente y sostenible",
    features_heading: "Características Principales",
    activities_heading: "Actividades:",
    deliverables_heading: "Entregables:",
    benefits_heading: "Beneficios",
    process_heading: "Cómo Funciona",
    cta_heading: "¿Listo para revolucionar tu agricultura?",
    cta_label: "Solicita una Demostración",
    close_label: "Cerrar",
};

/// Feature entries, in grid order.
pub const FEATURES: [FeatureEntry; FEATURE_COUNT] = [
    FeatureEntry {
        icon: FeatureIcon::Drone,
        title: "Monitoreo con Drones",
        description: "Vigilancia aérea para una visión completa de tus cultivos",
        activities: &[
            "Planificación de vuelos de drones",
            "Captura de imágenes multiespectrales",
            "Procesamiento de datos de vuelo",
        ],
        deliverables: &[
            "Mapas de índice de vegetación",
            "Informes de salud de cultivos",
            "Identificación de áreas problemáticas",
        ],
    },
    FeatureEntry {
        icon: FeatureIcon::Droplet,
        title: "Gestión del Riego",
        description: "Optimización del uso del agua basada en datos en tiempo real",
        activities: &[
            "Monitoreo de humedad del suelo",
            "Análisis de patrones climáticos",
            "Programación de riego automatizado",
        ],
        deliverables: &[
            "Planes de riego personalizados",
            "Alertas de estrés hídrico",
            "Informes de ahorro de agua",
        ],
    },
    FeatureEntry {
        icon: FeatureIcon::Leaf,
        title: "Control de Fertilizantes",
        description: "Aplicación precisa de nutrientes según las necesidades del cultivo",
        activities: &[
            "Análisis de suelos",
            "Monitoreo de nutrientes en plantas",
            "Cálculo de dosis de fertilizantes",
        ],
        deliverables: &[
            "Planes de fertilización específicos",
            "Mapas de aplicación variable",
            "Informes de eficiencia de nutrientes",
        ],
    },
    FeatureEntry {
        icon: FeatureIcon::BarChart,
        title: "Análisis de Datos",
        description: "Insights actionables para mejorar la productividad",
        activities: &[
            "Recopilación de datos de múltiples fuentes",
            "Procesamiento con algoritmos de IA",
            "Generación de informes personalizados",
        ],
        deliverables: &[
            "Dashboards interactivos",
            "Predicciones de rendimiento",
            "Recomendaciones de optimización",
        ],
    },
    FeatureEntry {
        icon: FeatureIcon::Zap,
        title: "Alertas en Tiempo Real",
        description: "Notificaciones inmediatas sobre condiciones críticas",
        activities: &[
            "Monitoreo continuo de condiciones",
            "Detección de anomalías",
            "Envío de notificaciones push",
        ],
        deliverables: &[
            "Sistema de alertas personalizables",
            "Registro de incidencias",
            "Protocolos de acción rápida",
        ],
    },
    FeatureEntry {
        icon: FeatureIcon::Sprout,
        title: "Planificación de Cultivos",
        description: "Recomendaciones para la rotación y manejo de cultivos",
        activities: &[
            "Análisis de historial de cultivos",
            "Evaluación de condiciones del suelo",
            "Modelado de escenarios de cultivo",
        ],
        deliverables: &[
            "Planes de rotación de cultivos",
            "Calendarios de siembra optimizados",
            "Estrategias de manejo integrado",
        ],
    },
];

/// Benefit lines, in display order.
pub const BENEFITS: [&str; 6] = [
    "Aumento de la productividad agrícola",
    "Reducción en el uso de agua y fertilizantes",
    "Detección temprana de plagas y enfermedades",
    "Mejora en la calidad de los cultivos",
    "Toma de decisiones basada en datos precisos",
    "Contribución a la agricultura sostenible",
];

/// "How it works" steps, in display order.
pub const PROCESS_STEPS: [ProcessStep; 5] = [
    ProcessStep {
        title: "Recolección de Datos",
        description: "Los drones sobrevuelan los campos y los sensores IoT recopilan información sobre el suelo, el clima y el estado de los cultivos.",
    },
    ProcessStep {
        title: "Análisis en Tiempo Real",
        description: "Nuestro sistema procesa los datos recolectados utilizando algoritmos avanzados de inteligencia artificial.",
    },
    ProcessStep {
        title: "Generación de Insights",
        description: "Se crean informes detallados y recomendaciones específicas para cada área del campo.",
    },
    ProcessStep {
        title: "Acciones Automatizadas",
        description: "El sistema puede ajustar automáticamente el riego, la fertilización y otros parámetros según sea necesario.",
    },
    ProcessStep {
        title: "Monitoreo Continuo",
        description: "Los agricultores pueden acceder a la información y controlar sus campos en cualquier momento a través de una aplicación móvil o plataforma web.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_feature_has_three_activities_and_deliverables() {
        for feature in &FEATURES {
            assert_eq!(feature.activities.len(), 3, "{}", feature.title);
            assert_eq!(feature.deliverables.len(), 3, "{}", feature.title);
        }
    }

    #[test]
    fn list_entries_are_unique_across_features() {
        // Render tests locate dialog content by text, so no string may repeat.
        let mut seen = std::collections::HashSet::new();
        for feature in &FEATURES {
            for item in feature.activities.iter().chain(feature.deliverables) {
                assert!(seen.insert(*item), "duplicate entry: {item}");
            }
        }
    }

    #[test]
    fn catalog_serializes_to_json() {
        let json = serde_json::to_value(CATALOG).unwrap();

        assert_eq!(json["features"].as_array().unwrap().len(), FEATURE_COUNT);
        assert_eq!(json["features"][0]["icon"], "drone");
        assert_eq!(json["features"][3]["icon"], "bar_chart");
        assert_eq!(json["benefits"][5], "Contribución a la agricultura sostenible");
        assert_eq!(json["process"][2]["title"], "Generación de Insights");
        assert_eq!(json["copy"]["cta_label"], "Solicita una Demostración");
    }
}
