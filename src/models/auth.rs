use serde::{Deserialize, Serialize};

/// Usuario autenticado, tal como lo devuelve y persiste la app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub nombre: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Respuesta de /api/auth/login: credencial bearer + datos del usuario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Alta de usuario (/api/auth/register). Por convención del backend el
/// registro NO devuelve token: hay que pasar por login después.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub nombre: String,
    pub email: String,
    pub password: String,
}
