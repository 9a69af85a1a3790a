/// URL base del backend de reportes.
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:3000 (por defecto)
/// - Producción: via BACKEND_URL en .env (ver build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

// Claves de almacenamiento local. Se leen al arrancar y se reescriben
// completas en cada mutación.
pub const STORAGE_KEY_TOKEN: &str = "authToken";
pub const STORAGE_KEY_USER: &str = "user";
pub const STORAGE_KEY_REPORTS: &str = "reports";
