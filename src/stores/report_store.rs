// ============================================================================
// REPORT STORE - Colección de reportes en memoria + espejo en storage
// ============================================================================
// El store es el único dueño de la colección; el almacenamiento local es
// una copia que se reescribe completa después de cada mutación, antes de
// devolver el control al llamador.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};

use crate::error::StoreError;
use crate::models::{Categoria, Comment, Estado, NewReport, Prioridad, Report, ReportPatch, VoteTipo};
use crate::utils::mock_data::seed_reports;
use crate::utils::storage::{load_json, save_json, StorageBackend};
use crate::utils::STORAGE_KEY_REPORTS;

/// Colección de reportes con persistencia local
#[derive(Clone)]
pub struct ReportStore {
    storage: Rc<dyn StorageBackend>,
    reports: Rc<RefCell<Vec<Report>>>,
    subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl ReportStore {
    pub fn new(storage: Rc<dyn StorageBackend>) -> Self {
        Self {
            storage,
            reports: Rc::new(RefCell::new(Vec::new())),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Cargar la colección desde el almacenamiento local. Si no hay nada
    /// guardado (o está corrupto) se siembra con los datos de ejemplo.
    /// Una lista vacía guardada es válida y NO se vuelve a sembrar.
    pub fn load(&self) {
        match load_json::<Vec<Report>>(&*self.storage, STORAGE_KEY_REPORTS) {
            Some(reports) => {
                log::info!("📋 {} reportes cargados del almacenamiento", reports.len());
                *self.reports.borrow_mut() = reports;
            }
            None => {
                log::info!("ℹ️ Sin reportes guardados, sembrando datos de ejemplo");
                *self.reports.borrow_mut() = seed_reports();
                self.persist();
            }
        }
    }

    /// Copia de toda la colección (la UI no muta el store directamente)
    pub fn all(&self) -> Vec<Report> {
        self.reports.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }

    /// Crear un reporte. Valida los campos obligatorios, asigna id,
    /// estado inicial "nuevo", fechas y contadores, y persiste.
    pub fn create_report(&self, data: NewReport) -> Result<Report, StoreError> {
        let mut faltantes = Vec::new();
        if data.titulo.trim().is_empty() {
            faltantes.push("titulo".to_string());
        }
        if data.descripcion.trim().is_empty() {
            faltantes.push("descripcion".to_string());
        }
        if data.ubicacion.trim().is_empty() {
            faltantes.push("ubicacion".to_string());
        }
        if !faltantes.is_empty() {
            return Err(StoreError::Validation(faltantes));
        }

        let ahora = Utc::now();
        let report = Report {
            id: self.next_id(ahora),
            titulo: data.titulo,
            descripcion: data.descripcion,
            categoria: data.categoria,
            estado: Estado::default(),
            prioridad: data.prioridad,
            ubicacion: data.ubicacion,
            latitud: data.latitud,
            longitud: data.longitud,
            imagen: data.imagen,
            fecha_creacion: ahora,
            fecha_actualizacion: ahora,
            votos_positivos: 0,
            votos_negativos: 0,
            comentarios: Vec::new(),
        };

        self.reports.borrow_mut().push(report.clone());
        self.persist();
        self.notify();
        log::info!("✅ Reporte creado: {} ({})", report.titulo, report.id);
        Ok(report)
    }

    /// Accesor de conveniencia con filtros exactos opcionales. Sin
    /// búsqueda de texto ni orden: eso vive en el viewmodel.
    pub fn get_reports(
        &self,
        categoria: Option<Categoria>,
        estado: Option<Estado>,
        prioridad: Option<Prioridad>,
    ) -> Vec<Report> {
        self.reports
            .borrow()
            .iter()
            .filter(|r| categoria.map_or(true, |c| r.categoria == c))
            .filter(|r| estado.map_or(true, |e| r.estado == e))
            .filter(|r| prioridad.map_or(true, |p| r.prioridad == p))
            .cloned()
            .collect()
    }

    pub fn get_report_by_id(&self, id: i64) -> Result<Report, StoreError> {
        self.reports
            .borrow()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Aplicar cambios parciales: solo los campos `Some` del patch se
    /// copian; fecha_actualizacion crece estrictamente en cada update.
    pub fn update_report(&self, id: i64, cambios: ReportPatch) -> Result<Report, StoreError> {
        let actualizado = {
            let mut reports = self.reports.borrow_mut();
            let report = reports
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(StoreError::NotFound(id))?;

            if let Some(titulo) = cambios.titulo {
                report.titulo = titulo;
            }
            if let Some(descripcion) = cambios.descripcion {
                report.descripcion = descripcion;
            }
            if let Some(categoria) = cambios.categoria {
                report.categoria = categoria;
            }
            if let Some(estado) = cambios.estado {
                report.estado = estado;
            }
            if let Some(prioridad) = cambios.prioridad {
                report.prioridad = prioridad;
            }
            if let Some(ubicacion) = cambios.ubicacion {
                report.ubicacion = ubicacion;
            }
            if let Some(latitud) = cambios.latitud {
                report.latitud = Some(latitud);
            }
            if let Some(longitud) = cambios.longitud {
                report.longitud = Some(longitud);
            }
            if let Some(imagen) = cambios.imagen {
                report.imagen = Some(imagen);
            }

            report.fecha_actualizacion = siguiente_fecha(report.fecha_actualizacion);
            report.clone()
        };

        self.persist();
        self.notify();
        Ok(actualizado)
    }

    /// Eliminar un reporte. Idempotente: un id inexistente es éxito
    /// silencioso y deja la colección como estaba.
    pub fn delete_report(&self, id: i64) {
        let eliminado = {
            let mut reports = self.reports.borrow_mut();
            let antes = reports.len();
            reports.retain(|r| r.id != id);
            reports.len() != antes
        };

        if eliminado {
            self.persist();
            self.notify();
            log::info!("🗑️ Reporte {} eliminado", id);
        }
    }

    /// Registrar un voto localmente sobre el contador correspondiente
    pub fn vote_report(&self, id: i64, tipo: VoteTipo) -> Result<Report, StoreError> {
        let actualizado = {
            let mut reports = self.reports.borrow_mut();
            let report = reports
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(StoreError::NotFound(id))?;

            match tipo {
                VoteTipo::Up => report.votos_positivos += 1,
                VoteTipo::Down => report.votos_negativos += 1,
            }
            report.fecha_actualizacion = siguiente_fecha(report.fecha_actualizacion);
            report.clone()
        };

        self.persist();
        self.notify();
        Ok(actualizado)
    }

    /// Agregar un comentario al final de la lista del reporte
    pub fn add_comment(&self, id: i64, autor: &str, texto: &str) -> Result<Report, StoreError> {
        let actualizado = {
            let mut reports = self.reports.borrow_mut();
            let report = reports
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(StoreError::NotFound(id))?;

            report.comentarios.push(Comment {
                autor: autor.to_string(),
                texto: texto.to_string(),
                fecha: Utc::now(),
            });
            report.fecha_actualizacion = siguiente_fecha(report.fecha_actualizacion);
            report.clone()
        };

        self.persist();
        self.notify();
        Ok(actualizado)
    }

    /// Suscribirse a mutaciones para refrescar vistas dependientes
    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    // Id monotónico: timestamp de creación en ms, empujado por encima del
    // máximo existente si hiciera falta (dos creaciones en el mismo ms).
    fn next_id(&self, ahora: DateTime<Utc>) -> i64 {
        let maximo = self.reports.borrow().iter().map(|r| r.id).max().unwrap_or(0);
        ahora.timestamp_millis().max(maximo + 1)
    }

    // Escribir la colección completa. Los fallos se registran y se tragan:
    // la copia en memoria sigue siendo la autoritativa.
    fn persist(&self) {
        if let Err(e) = save_json(&*self.storage, STORAGE_KEY_REPORTS, &*self.reports.borrow()) {
            log::warn!("⚠️ No se pudo persistir la colección de reportes: {}", e);
        }
    }

    fn notify(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }
}

// La fecha de actualización crece estrictamente aunque dos mutaciones
// caigan en el mismo milisegundo.
fn siguiente_fecha(anterior: DateTime<Utc>) -> DateTime<Utc> {
    let ahora = Utc::now();
    if ahora > anterior {
        ahora
    } else {
        anterior + Duration::milliseconds(1)
    }
}
