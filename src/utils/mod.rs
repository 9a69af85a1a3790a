// Utils compartidos

pub mod constants;
pub mod mock_data;
pub mod storage;

pub use constants::*;
pub use storage::{load_json, save_json, LocalStorage, MemoryStorage, StorageBackend};
