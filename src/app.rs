// ============================================================================
// APP - Raíz de composición de la capa de datos
// ============================================================================
// Construye explícitamente cliente API, stores y viewmodel (nada de
// singletons a nivel de módulo) y restaura el estado persistido. La UI
// recibe esta estructura al arrancar y la comparte con sus pantallas.
// ============================================================================

use std::rc::Rc;

use crate::services::ApiClient;
use crate::stores::{AuthStore, ReportStore};
use crate::utils::storage::{LocalStorage, StorageBackend};
use crate::viewmodels::ReportsViewModel;

/// Capa de datos completa, lista para inyectar en las pantallas
#[derive(Clone)]
pub struct App {
    pub api: Rc<ApiClient>,
    pub auth: AuthStore,
    pub reports: ReportStore,
    pub query: ReportsViewModel,
}

impl App {
    /// Arranque normal en el navegador: localStorage como backend
    pub fn new() -> Self {
        Self::with_storage(Rc::new(LocalStorage))
    }

    /// Arranque con un backend de almacenamiento arbitrario (tests,
    /// modo local sin navegador)
    pub fn with_storage(storage: Rc<dyn StorageBackend>) -> Self {
        let api = Rc::new(ApiClient::new());
        let auth = AuthStore::new(api.clone(), storage.clone());
        let reports = ReportStore::new(storage);
        let query = ReportsViewModel::new();

        // Restaurar lo persistido antes de que la UI pinte nada
        auth.restore_session();
        reports.load();
        log::info!(
            "✅ Capa de datos lista: {} reportes, sesión {}",
            reports.len(),
            if auth.is_authenticated() { "activa" } else { "anónima" }
        );

        Self {
            api,
            auth,
            reports,
            query,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Categoria, NewReport, Prioridad, ReportFilters, SortBy};
    use crate::utils::MemoryStorage;

    #[test]
    fn el_arranque_siembra_y_la_vista_derivada_filtra_y_ordena() {
        let app = App::with_storage(Rc::new(MemoryStorage::new()));

        // Semilla cargada y sesión anónima
        assert!(!app.reports.is_empty());
        assert!(!app.auth.is_authenticated());

        // Filtrar por categoría con la vista derivada
        app.query
            .update_filters(|f| f.category = Some(Categoria::Infraestructura));
        let derivado = app.query.derive(&app.reports.all());
        assert!(!derivado.is_empty());
        assert!(derivado.iter().all(|r| r.categoria == Categoria::Infraestructura));

        // Orden oldest sobre toda la colección
        app.query.set_filters(ReportFilters {
            sort_by: SortBy::Oldest,
            ..ReportFilters::default()
        });
        let ordenado = app.query.derive(&app.reports.all());
        for ventana in ordenado.windows(2) {
            assert!(ventana[0].fecha_creacion <= ventana[1].fecha_creacion);
        }
    }

    #[test]
    fn crear_y_buscar_de_extremo_a_extremo() {
        let app = App::with_storage(Rc::new(MemoryStorage::new()));
        let creado = app
            .reports
            .create_report(NewReport {
                titulo: "Fuga de agua en la vereda".to_string(),
                descripcion: "Sale agua limpia desde hace tres días".to_string(),
                categoria: Categoria::ServiciosPublicos,
                prioridad: Prioridad::Alta,
                ubicacion: "Calle Lima 450".to_string(),
                latitud: None,
                longitud: None,
                imagen: None,
            })
            .unwrap();

        app.query.set_filters(ReportFilters {
            search: Some("FUGA".to_string()),
            ..ReportFilters::default()
        });
        let derivado = app.query.derive(&app.reports.all());
        assert_eq!(derivado.len(), 1);
        assert_eq!(derivado[0].id, creado.id);
    }
}
