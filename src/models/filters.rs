use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::report::{Categoria, Estado, Prioridad};

/// Criterio de orden de la lista de reportes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SortBy {
    Newest,
    Oldest,
    MostVoted,
}

impl Default for SortBy {
    fn default() -> Self {
        SortBy::Newest
    }
}

/// Configuración de filtros de la lista de reportes.
///
/// Struct cerrado con campos opcionales con nombre (no un mapa abierto):
/// un campo ausente significa "sin restricción" y las dimensiones se
/// componen como AND lógico.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportFilters {
    pub category: Option<Categoria>,
    pub status: Option<Estado>,
    pub priority: Option<Prioridad>,
    pub search: Option<String>,
    #[serde(default)]
    pub sort_by: SortBy,
}
