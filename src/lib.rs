// ============================================================================
// REPORTES CIUDADANOS - CAPA DE DATOS (PWA)
// ============================================================================
// Arquitectura MVVM estricta (la UI vive en otro crate):
// - Models: estructuras compartidas con el backend + enums cerrados
// - Services: SOLO comunicación API
// - Stores: estado con Rc<RefCell> + persistencia en localStorage
// - ViewModels: vistas derivadas (filtros, orden, catálogo de categorías)
// ============================================================================

pub mod app;
pub mod error;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;

pub use app::App;

/// Inicializa logging y panic hook. La UI lo llama UNA vez al arrancar.
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Reportes Ciudadanos - capa de datos inicializada");
}
