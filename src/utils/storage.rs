// ============================================================================
// STORAGE - Persistencia local clave/valor
// ============================================================================
// Interfaz mínima (get/set/remove) para poder cambiar el backend según la
// plataforma: localStorage en el navegador, memoria en tests y modo local.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};

/// Backend de almacenamiento duradero clave/valor
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// Backend sobre window.localStorage
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> Result<web_sys::Storage, String> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| "No se pudo acceder a localStorage".to_string())
    }
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.storage()?
            .get_item(key)
            .map_err(|_| "Error leyendo localStorage".to_string())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.storage()?
            .set_item(key, value)
            .map_err(|_| "Error guardando en localStorage".to_string())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.storage()?
            .remove_item(key)
            .map_err(|_| "Error eliminando de localStorage".to_string())
    }
}

/// Backend en memoria: tests y modo local sin navegador
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Serializa y guarda un valor como JSON
pub fn save_json<T: Serialize>(storage: &dyn StorageBackend, key: &str, value: &T) -> Result<(), String> {
    let json = serde_json::to_string(value).map_err(|e| format!("Error serializando datos: {}", e))?;
    storage.set(key, &json)
}

/// Carga y deserializa un valor JSON. Cualquier fallo (clave ausente,
/// JSON corrupto, error del backend) degrada a None: un store local
/// dañado nunca debe tumbar el arranque.
pub fn load_json<T: DeserializeOwned>(storage: &dyn StorageBackend, key: &str) -> Option<T> {
    match storage.get(key) {
        Ok(Some(json)) => match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("⚠️ Dato corrupto en '{}', se descarta: {}", key, e);
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            log::warn!("⚠️ No se pudo leer '{}': {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_guarda_y_elimina() {
        let storage = MemoryStorage::new();
        storage.set("clave", "valor").unwrap();
        assert_eq!(storage.get("clave").unwrap(), Some("valor".to_string()));
        storage.remove("clave").unwrap();
        assert_eq!(storage.get("clave").unwrap(), None);
    }

    #[test]
    fn load_json_degrada_a_none_con_json_corrupto() {
        let storage = MemoryStorage::new();
        storage.set("user", "{esto no es json").unwrap();
        assert!(load_json::<serde_json::Value>(&storage, "user").is_none());
    }

    #[test]
    fn save_y_load_json_hacen_round_trip() {
        let storage = MemoryStorage::new();
        let valor = vec!["a".to_string(), "b".to_string()];
        save_json(&storage, "lista", &valor).unwrap();
        assert_eq!(load_json::<Vec<String>>(&storage, "lista"), Some(valor));
    }
}
