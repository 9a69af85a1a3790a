// ============================================================================
// AUTH STORE - Sesión del usuario (token + datos) con persistencia local
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ApiError;
use crate::models::{LoginResponse, RegisterRequest, User};
use crate::services::ApiClient;
use crate::utils::storage::{load_json, save_json, StorageBackend};
use crate::utils::{STORAGE_KEY_TOKEN, STORAGE_KEY_USER};

/// Estado de la sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Aún no se consultó el almacenamiento local
    Unknown,
    /// Restauración en curso
    Loading,
    Authenticated,
    Anonymous,
}

/// Estado de autenticación
#[derive(Clone)]
pub struct AuthStore {
    api: Rc<ApiClient>,
    storage: Rc<dyn StorageBackend>,
    status: Rc<RefCell<SessionStatus>>,
    user: Rc<RefCell<Option<User>>>,
    token: Rc<RefCell<Option<String>>>,
}

impl AuthStore {
    pub fn new(api: Rc<ApiClient>, storage: Rc<dyn StorageBackend>) -> Self {
        Self {
            api,
            storage,
            status: Rc::new(RefCell::new(SessionStatus::Unknown)),
            user: Rc::new(RefCell::new(None)),
            token: Rc::new(RefCell::new(None)),
        }
    }

    /// Restaurar la sesión desde el almacenamiento local al arrancar.
    /// Cualquier fallo de lectura degrada a Anonymous: un store local
    /// corrupto nunca debe tumbar el arranque.
    pub fn restore_session(&self) {
        *self.status.borrow_mut() = SessionStatus::Loading;

        let token = match self.storage.get(STORAGE_KEY_TOKEN) {
            Ok(token) => token,
            Err(e) => {
                log::warn!("⚠️ No se pudo leer el token guardado: {}", e);
                None
            }
        };
        let user = load_json::<User>(&*self.storage, STORAGE_KEY_USER);

        match (token, user) {
            (Some(token), Some(user)) => {
                log::info!("✅ Sesión restaurada: {}", user.email);
                *self.token.borrow_mut() = Some(token);
                *self.user.borrow_mut() = Some(user);
                *self.status.borrow_mut() = SessionStatus::Authenticated;
            }
            _ => {
                *self.token.borrow_mut() = None;
                *self.user.borrow_mut() = None;
                *self.status.borrow_mut() = SessionStatus::Anonymous;
            }
        }
    }

    /// Iniciar sesión contra el backend. Si falla, el estado previo
    /// (Authenticated o Anonymous) queda intacto y se devuelve el error.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let resultado = self.api.login(email, password).await;
        self.finish_login(resultado)
    }

    // Separado de login() para poder ejercitarlo sin red
    pub(crate) fn finish_login(&self, resultado: Result<LoginResponse, ApiError>) -> Result<User, ApiError> {
        match resultado {
            Ok(respuesta) => {
                log::info!("✅ Login exitoso: {}", respuesta.user.email);
                self.apply_session(respuesta.user.clone(), respuesta.token);
                Ok(respuesta.user)
            }
            Err(e) => {
                log::error!("❌ Login fallido: {}", e);
                Err(e)
            }
        }
    }

    /// Registrar un usuario. NO inicia sesión: el backend no devuelve
    /// token en el registro, el llamador debe navegar a login.
    pub async fn register(&self, data: &RegisterRequest) -> Result<(), ApiError> {
        self.api.register(data).await?;
        log::info!("✅ Registro exitoso: {}", data.email);
        Ok(())
    }

    /// Cerrar sesión. Idempotente: sin sesión activa es un no-op.
    pub fn logout(&self) {
        if let Err(e) = self.storage.remove(STORAGE_KEY_TOKEN) {
            log::warn!("⚠️ No se pudo eliminar el token guardado: {}", e);
        }
        if let Err(e) = self.storage.remove(STORAGE_KEY_USER) {
            log::warn!("⚠️ No se pudo eliminar el usuario guardado: {}", e);
        }

        *self.token.borrow_mut() = None;
        *self.user.borrow_mut() = None;
        *self.status.borrow_mut() = SessionStatus::Anonymous;
        log::info!("👋 Sesión cerrada");
    }

    pub fn status(&self) -> SessionStatus {
        *self.status.borrow()
    }

    pub fn get_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn get_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    /// Derivado: hay sesión si y solo si hay token
    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    // Persistir y activar la sesión. Los fallos de escritura se registran
    // y se tragan: la sesión en memoria sigue siendo la autoritativa.
    fn apply_session(&self, user: User, token: String) {
        if let Err(e) = self.storage.set(STORAGE_KEY_TOKEN, &token) {
            log::warn!("⚠️ No se pudo guardar el token: {}", e);
        }
        if let Err(e) = save_json(&*self.storage, STORAGE_KEY_USER, &user) {
            log::warn!("⚠️ No se pudo guardar el usuario: {}", e);
        }

        *self.token.borrow_mut() = Some(token);
        *self.user.borrow_mut() = Some(user);
        *self.status.borrow_mut() = SessionStatus::Authenticated;
    }
}
