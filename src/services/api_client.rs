// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP contra el backend
// de reportes. Un intento por llamada: sin reintentos, sin timeouts.
// ============================================================================

use gloo_net::http::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::{CategoryInfo, Comment, LoginRequest, LoginResponse, NewReport, RegisterRequest, Report, VoteTipo};
use crate::utils::constants::BACKEND_URL;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Request genérico: arma la URL absoluta, fija Content-Type JSON,
    /// adjunta el bearer token si hay, y normaliza la respuesta.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let mut builder = RequestBuilder::new(&url)
            .method(method)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .json(&body)
                .map_err(|e| ApiError::Parse(format!("No se pudo armar el request: {}", e)))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Parse(format!("No se pudo armar el request: {}", e)))?,
        };

        let response = request.send().await.map_err(|e| {
            ApiError::Network(format!("Verifica tu conexión a internet ({})", e))
        })?;

        let status = response.status();
        let status_text = response.status_text();

        // Leer el cuerpo completo como texto ANTES de parsear: un 404 del
        // proxy devuelve una página HTML, no JSON del API.
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("No se pudo leer la respuesta: {}", e)))?;

        interpret_response(status, &status_text, &text)
    }

    fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Iniciar sesión
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 Iniciando sesión para: {}", email);
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let value = self
            .request(Method::POST, "/api/auth/login", Some(serde_json::to_value(&body).unwrap_or(Value::Null)), None)
            .await?;
        Self::decode(value)
    }

    /// Registrar usuario (no devuelve token: hay que pasar por login)
    pub async fn register(&self, data: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        log::info!("📝 Registrando usuario: {}", data.email);
        let value = self
            .request(Method::POST, "/api/auth/register", Some(serde_json::to_value(data).unwrap_or(Value::Null)), None)
            .await?;
        Self::decode(value)
    }

    /// Listar todos los reportes
    pub async fn get_reports(&self) -> Result<Vec<Report>, ApiError> {
        let value = self.request(Method::GET, "/api/reports", None, None).await?;
        let reports: Vec<Report> = Self::decode(value)?;
        log::info!("📋 Reportes recibidos del servidor: {}", reports.len());
        Ok(reports)
    }

    /// Crear un reporte (requiere sesión)
    pub async fn create_report(&self, data: &NewReport, token: &str) -> Result<Report, ApiError> {
        log::info!("📤 Enviando reporte: {}", data.titulo);
        let value = self
            .request(Method::POST, "/api/reports", Some(serde_json::to_value(data).unwrap_or(Value::Null)), Some(token))
            .await?;
        Self::decode(value)
    }

    /// Obtener un reporte por id
    pub async fn get_report_by_id(&self, id: i64) -> Result<Report, ApiError> {
        let value = self
            .request(Method::GET, &format!("/api/reports/{}", id), None, None)
            .await?;
        Self::decode(value)
    }

    /// Catálogo de categorías
    pub async fn get_categories(&self) -> Result<Vec<CategoryInfo>, ApiError> {
        let value = self.request(Method::GET, "/api/categorias", None, None).await?;
        Self::decode(value)
    }

    /// Comentarios de un reporte
    pub async fn get_comments(&self, reporte_id: i64) -> Result<Vec<Comment>, ApiError> {
        let value = self
            .request(Method::GET, &format!("/api/comentarios/reporte/{}", reporte_id), None, None)
            .await?;
        Self::decode(value)
    }

    /// Crear un comentario (requiere sesión)
    pub async fn create_comment(&self, data: &NewCommentRequest, token: &str) -> Result<Comment, ApiError> {
        let value = self
            .request(Method::POST, "/api/comentarios", Some(serde_json::to_value(data).unwrap_or(Value::Null)), Some(token))
            .await?;
        Self::decode(value)
    }

    /// Votar un reporte (requiere sesión)
    pub async fn vote_report(&self, reporte_id: i64, tipo: VoteTipo, token: &str) -> Result<VoteResponse, ApiError> {
        log::info!("🗳️ Voto {} para reporte {}", tipo, reporte_id);
        let body = VoteRequest { tipo };
        let value = self
            .request(
                Method::POST,
                &format!("/api/votos/reporte/{}", reporte_id),
                Some(serde_json::to_value(&body).unwrap_or(Value::Null)),
                Some(token),
            )
            .await?;
        Self::decode(value)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Normaliza una respuesta HTTP ya leída como texto.
///
/// - Cuerpo con pinta de página HTML (404 del proxy, etc.) → ServerError
///   con el status, para distinguir fallos de infraestructura del API.
/// - 2xx con JSON inválido → ParseError.
/// - No-2xx → ServerError con el campo `message` del cuerpo si existe,
///   si no con la línea de estado.
/// - 2xx con cuerpo vacío → JSON null (endpoints sin respuesta).
fn interpret_response(status: u16, status_text: &str, body: &str) -> Result<Value, ApiError> {
    let exito = (200..300).contains(&status);

    let recortado = body.trim_start().to_ascii_lowercase();
    if recortado.starts_with("<!doctype") || recortado.starts_with("<html") {
        return Err(ApiError::Server {
            status,
            message: format!("El servidor devolvió una página HTML ({} {})", status, status_text),
        });
    }

    if exito && body.trim().is_empty() {
        return Ok(Value::Null);
    }

    match serde_json::from_str::<Value>(body) {
        Ok(value) => {
            if exito {
                Ok(value)
            } else {
                let message = value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} {}", status, status_text));
                Err(ApiError::Server { status, message })
            }
        }
        Err(e) => {
            if exito {
                Err(ApiError::Parse(e.to_string()))
            } else {
                Err(ApiError::Server {
                    status,
                    message: format!("{} {}", status, status_text),
                })
            }
        }
    }
}

#[derive(serde::Serialize)]
pub struct VoteRequest {
    pub tipo: VoteTipo,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct VoteResponse {
    #[serde(default)]
    pub votos_positivos: u32,
    #[serde(default)]
    pub votos_negativos: u32,
}

#[derive(serde::Serialize)]
pub struct NewCommentRequest {
    pub reporte_id: i64,
    pub texto: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}
