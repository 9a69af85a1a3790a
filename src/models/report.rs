use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Categoría de un reporte (conjunto cerrado: valores fuera de la lista
/// se rechazan al deserializar, no se convierten en "otros")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Categoria {
    Saneamiento,
    Infraestructura,
    SaludPublica,
    Seguridad,
    MedioAmbiente,
    ServiciosPublicos,
    Transporte,
    Otros,
}

/// Estado del flujo de trabajo de un reporte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Estado {
    Nuevo,
    EnProceso,
    Resuelto,
    Cerrado,
    NoAprobado,
}

impl Default for Estado {
    // Estado canónico de todo reporte recién creado
    fn default() -> Self {
        Estado::Nuevo
    }
}

/// Prioridad/urgencia de un reporte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Prioridad {
    Baja,
    Media,
    Alta,
}

impl Default for Prioridad {
    fn default() -> Self {
        Prioridad::Media
    }
}

/// Sentido de un voto sobre un reporte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum VoteTipo {
    Up,
    Down,
}

/// Reporte ciudadano
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub titulo: String,
    pub descripcion: String,
    pub categoria: Categoria,
    pub estado: Estado,
    pub prioridad: Prioridad,
    pub ubicacion: String,
    // Coordenadas ausentes hasta que el usuario elige un punto en el mapa
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
    #[serde(default)]
    pub imagen: Option<String>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: DateTime<Utc>,
    #[serde(default)]
    pub votos_positivos: u32,
    #[serde(default)]
    pub votos_negativos: u32,
    #[serde(default)]
    pub comentarios: Vec<Comment>,
}

impl Report {
    /// Balance de votos (positivos - negativos), para ordenar por votados
    pub fn puntuacion(&self) -> i64 {
        self.votos_positivos as i64 - self.votos_negativos as i64
    }
}

/// Comentario de un usuario sobre un reporte
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub autor: String,
    pub texto: String,
    pub fecha: DateTime<Utc>,
}

/// Datos para crear un reporte. El estado inicial, las fechas, los votos
/// y el id los asigna el store, nunca el llamador.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReport {
    pub titulo: String,
    pub descripcion: String,
    pub categoria: Categoria,
    #[serde(default)]
    pub prioridad: Prioridad,
    pub ubicacion: String,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
    #[serde(default)]
    pub imagen: Option<String>,
}

/// Cambios parciales sobre un reporte existente: solo los campos `Some`
/// se aplican, el resto queda intacto.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportPatch {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub categoria: Option<Categoria>,
    pub estado: Option<Estado>,
    pub prioridad: Option<Prioridad>,
    pub ubicacion: Option<String>,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
    pub imagen: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn categoria_acepta_mayusculas_y_minusculas() {
        assert_eq!(Categoria::from_str("infraestructura").unwrap(), Categoria::Infraestructura);
        assert_eq!(Categoria::from_str("INFRAESTRUCTURA").unwrap(), Categoria::Infraestructura);
        assert_eq!(Categoria::from_str("salud_publica").unwrap(), Categoria::SaludPublica);
    }

    #[test]
    fn categoria_rechaza_valores_fuera_del_conjunto() {
        assert!(Categoria::from_str("astrologia").is_err());
        assert!(serde_json::from_str::<Categoria>("\"astrologia\"").is_err());
    }

    #[test]
    fn estado_se_serializa_en_snake_case() {
        assert_eq!(serde_json::to_string(&Estado::EnProceso).unwrap(), "\"en_proceso\"");
        assert_eq!(serde_json::from_str::<Estado>("\"no_aprobado\"").unwrap(), Estado::NoAprobado);
        assert!(serde_json::from_str::<Estado>("\"pendiente\"").is_err());
    }

    #[test]
    fn estado_por_defecto_es_nuevo() {
        assert_eq!(Estado::default(), Estado::Nuevo);
    }

    #[test]
    fn vote_tipo_usa_up_down_en_el_wire() {
        assert_eq!(serde_json::to_string(&VoteTipo::Up).unwrap(), "\"up\"");
        assert_eq!(serde_json::from_str::<VoteTipo>("\"down\"").unwrap(), VoteTipo::Down);
    }
}
