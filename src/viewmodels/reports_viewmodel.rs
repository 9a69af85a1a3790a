// ============================================================================
// REPORTS VIEWMODEL - Vista derivada: filtros + orden sobre la colección
// ============================================================================
// Función pura de (colección, filtros) → lista ordenada. No es un store:
// se recalcula cada vez que cambia la colección o la configuración.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{default_categories, CategoryInfo, Report, ReportFilters, SortBy};

/// Estado de la lista filtrada de reportes
#[derive(Clone, Default)]
pub struct ReportsViewModel {
    filters: Rc<RefCell<ReportFilters>>,
}

impl ReportsViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> ReportFilters {
        self.filters.borrow().clone()
    }

    pub fn set_filters(&self, filters: ReportFilters) {
        *self.filters.borrow_mut() = filters;
    }

    /// Modificar la configuración actual in-place (p. ej. solo el orden)
    pub fn update_filters<F: FnOnce(&mut ReportFilters)>(&self, updater: F) {
        updater(&mut self.filters.borrow_mut());
    }

    pub fn clear_filters(&self) {
        *self.filters.borrow_mut() = ReportFilters::default();
    }

    /// Vista derivada con la configuración actual
    pub fn derive(&self, reports: &[Report]) -> Vec<Report> {
        apply_filters(reports, &self.filters.borrow())
    }

    /// Catálogo fijo de categorías para los chips de filtro
    pub fn categories(&self) -> Vec<CategoryInfo> {
        default_categories()
    }
}

/// Filtra y ordena sin mutar la colección de entrada. Las dimensiones
/// componen como AND; un campo ausente no restringe nada.
pub fn apply_filters(reports: &[Report], filters: &ReportFilters) -> Vec<Report> {
    let mut resultado: Vec<Report> = reports
        .iter()
        .filter(|r| matches_filters(r, filters))
        .cloned()
        .collect();
    sort_reports(&mut resultado, filters.sort_by);
    resultado
}

fn matches_filters(report: &Report, filters: &ReportFilters) -> bool {
    if let Some(categoria) = filters.category {
        if report.categoria != categoria {
            return false;
        }
    }
    if let Some(estado) = filters.status {
        if report.estado != estado {
            return false;
        }
    }
    if let Some(prioridad) = filters.priority {
        if report.prioridad != prioridad {
            return false;
        }
    }
    if let Some(busqueda) = filters.search.as_deref() {
        let busqueda = busqueda.trim().to_lowercase();
        if !busqueda.is_empty() {
            let coincide = report.titulo.to_lowercase().contains(&busqueda)
                || report.descripcion.to_lowercase().contains(&busqueda)
                || report.ubicacion.to_lowercase().contains(&busqueda);
            if !coincide {
                return false;
            }
        }
    }
    true
}

/// Orden estable: los empates conservan el orden previo
pub fn sort_reports(reports: &mut [Report], sort_by: SortBy) {
    match sort_by {
        SortBy::Newest => reports.sort_by(|a, b| b.fecha_creacion.cmp(&a.fecha_creacion)),
        SortBy::Oldest => reports.sort_by(|a, b| a.fecha_creacion.cmp(&b.fecha_creacion)),
        SortBy::MostVoted => reports.sort_by(|a, b| b.puntuacion().cmp(&a.puntuacion())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Categoria, Estado, Prioridad};
    use chrono::{TimeZone, Utc};

    fn reporte(id: i64, titulo: &str, categoria: Categoria, estado: Estado, dia: u32) -> Report {
        let fecha = Utc.with_ymd_and_hms(2024, 11, dia, 12, 0, 0).unwrap();
        Report {
            id,
            titulo: titulo.to_string(),
            descripcion: format!("Descripción de {}", titulo),
            categoria,
            estado,
            prioridad: Prioridad::Media,
            ubicacion: "Centro".to_string(),
            latitud: None,
            longitud: None,
            imagen: None,
            fecha_creacion: fecha,
            fecha_actualizacion: fecha,
            votos_positivos: 0,
            votos_negativos: 0,
            comentarios: Vec::new(),
        }
    }

    // Reporte de saneamiento del 2024-11-01 y uno de infraestructura
    // del 2024-10-28, como en el ejemplo de extremo a extremo de la capa
    fn coleccion_ejemplo() -> Vec<Report> {
        let mut vereda = reporte(2, "Vereda rota", Categoria::Infraestructura, Estado::EnProceso, 1);
        let fecha = Utc.with_ymd_and_hms(2024, 10, 28, 12, 0, 0).unwrap();
        vereda.fecha_creacion = fecha;
        vereda.fecha_actualizacion = fecha;

        vec![
            reporte(1, "Basura sin recoger", Categoria::Saneamiento, Estado::Nuevo, 1),
            vereda,
        ]
    }

    #[test]
    fn sin_filtros_devuelve_todo_ordenado_por_newest() {
        let coleccion = coleccion_ejemplo();
        let resultado = apply_filters(&coleccion, &ReportFilters::default());
        assert_eq!(resultado.len(), 2);
        // id=1 es de noviembre, id=2 de octubre: newest primero
        assert_eq!(resultado[0].id, 1);
        assert_eq!(resultado[1].id, 2);
    }

    #[test]
    fn filtro_por_categoria_devuelve_solo_esa_categoria() {
        let coleccion = coleccion_ejemplo();
        let filtros = ReportFilters {
            category: Some(Categoria::Infraestructura),
            ..ReportFilters::default()
        };
        let resultado = apply_filters(&coleccion, &filtros);
        assert_eq!(resultado.len(), 1);
        assert_eq!(resultado[0].id, 2);
    }

    #[test]
    fn orden_oldest_invierte_la_lista_del_ejemplo() {
        let coleccion = coleccion_ejemplo();
        let filtros = ReportFilters {
            sort_by: SortBy::Oldest,
            ..ReportFilters::default()
        };
        let resultado = apply_filters(&coleccion, &filtros);
        assert_eq!(resultado[0].id, 2);
        assert_eq!(resultado[1].id, 1);
    }

    #[test]
    fn la_salida_es_subconjunto_de_la_entrada() {
        let coleccion = coleccion_ejemplo();
        let filtros = ReportFilters {
            search: Some("rota".to_string()),
            ..ReportFilters::default()
        };
        let resultado = apply_filters(&coleccion, &filtros);
        assert!(resultado.len() <= coleccion.len());
        for r in &resultado {
            assert!(coleccion.iter().any(|original| original == r));
        }
        // Y sin duplicados
        let mut ids: Vec<i64> = resultado.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), resultado.len());
    }

    #[test]
    fn busqueda_case_insensitive_sobre_titulo_descripcion_y_ubicacion() {
        let mut coleccion = coleccion_ejemplo();
        coleccion.push({
            let mut r = reporte(3, "Poste caído", Categoria::ServiciosPublicos, Estado::Nuevo, 3);
            r.descripcion = "Hay un BACHE gigante al costado".to_string();
            r
        });
        coleccion.push({
            let mut r = reporte(4, "Esquina peligrosa", Categoria::Seguridad, Estado::Nuevo, 4);
            r.ubicacion = "Pasaje del Bache 123".to_string();
            r
        });

        let filtros = ReportFilters {
            search: Some("bache".to_string()),
            ..ReportFilters::default()
        };
        let resultado = apply_filters(&coleccion, &filtros);
        let ids: Vec<i64> = resultado.iter().map(|r| r.id).collect();
        assert!(ids.contains(&3), "coincidencia en descripción");
        assert!(ids.contains(&4), "coincidencia en ubicación");
        assert!(!ids.contains(&1) && !ids.contains(&2));
    }

    #[test]
    fn busqueda_vacia_no_restringe() {
        let coleccion = coleccion_ejemplo();
        let filtros = ReportFilters {
            search: Some("   ".to_string()),
            ..ReportFilters::default()
        };
        assert_eq!(apply_filters(&coleccion, &filtros).len(), 2);
    }

    #[test]
    fn los_filtros_componen_como_and() {
        let coleccion = coleccion_ejemplo();
        let filtros = ReportFilters {
            category: Some(Categoria::Infraestructura),
            status: Some(Estado::Nuevo), // id=2 está EnProceso
            ..ReportFilters::default()
        };
        assert!(apply_filters(&coleccion, &filtros).is_empty());
    }

    #[test]
    fn most_voted_no_crece_nunca_en_puntuacion() {
        let mut coleccion = Vec::new();
        for (id, positivos, negativos) in [(1, 5, 0), (2, 9, 1), (3, 2, 7), (4, 4, 4)] {
            let mut r = reporte(id, "r", Categoria::Otros, Estado::Nuevo, id as u32);
            r.votos_positivos = positivos;
            r.votos_negativos = negativos;
            coleccion.push(r);
        }

        let filtros = ReportFilters {
            sort_by: SortBy::MostVoted,
            ..ReportFilters::default()
        };
        let resultado = apply_filters(&coleccion, &filtros);
        for ventana in resultado.windows(2) {
            assert!(ventana[0].puntuacion() >= ventana[1].puntuacion());
        }
        assert_eq!(resultado[0].id, 2);
    }

    #[test]
    fn most_voted_conserva_el_orden_previo_en_empates() {
        let mut coleccion = Vec::new();
        for id in [10, 20, 30] {
            let mut r = reporte(id, "empate", Categoria::Otros, Estado::Nuevo, 5);
            r.votos_positivos = 3;
            coleccion.push(r);
        }

        let mut resultado = coleccion.clone();
        sort_reports(&mut resultado, SortBy::MostVoted);
        let ids: Vec<i64> = resultado.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn el_viewmodel_recalcula_con_la_configuracion_vigente() {
        let vm = ReportsViewModel::new();
        let coleccion = coleccion_ejemplo();

        assert_eq!(vm.derive(&coleccion).len(), 2);

        vm.update_filters(|f| f.category = Some(Categoria::Saneamiento));
        let derivado = vm.derive(&coleccion);
        assert_eq!(derivado.len(), 1);
        assert_eq!(derivado[0].categoria, Categoria::Saneamiento);

        vm.clear_filters();
        assert_eq!(vm.derive(&coleccion).len(), 2);
    }

    #[test]
    fn el_catalogo_de_categorias_esta_disponible_para_los_chips() {
        let vm = ReportsViewModel::new();
        let catalogo = vm.categories();
        assert!(catalogo.iter().any(|c| c.id == "saneamiento"));
        assert!(catalogo.iter().all(|c| !c.icono.is_empty()));
    }
}
