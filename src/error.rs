// ============================================================================
// ERRORES - Taxonomía de errores de la capa de datos
// ============================================================================
// Ninguna operación pública lanza panics: todo se devuelve como Result
// para que la UI muestre mensajes inline en vez de romperse.
// ============================================================================

use thiserror::Error;

/// Errores de comunicación con el backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Fallo de transporte (DNS, conexión rechazada, sin red)
    #[error("No se pudo conectar con el servidor: {0}")]
    Network(String),

    /// Respuesta no exitosa o no-JSON del servidor
    #[error("Error del servidor ({status}): {message}")]
    Server { status: u16, message: String },

    /// Cuerpo JSON malformado en una respuesta exitosa
    #[error("Respuesta inválida del servidor: {0}")]
    Parse(String),
}

/// Errores de las operaciones locales sobre los stores
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Campos obligatorios vacíos, con la lista de los que faltan
    #[error("Faltan campos obligatorios: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Búsqueda por id sin resultado
    #[error("No existe el reporte {0}")]
    NotFound(i64),
}
