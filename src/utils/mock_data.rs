// Datos de ejemplo con los que se siembra un store vacío (modo local,
// primer arranque). Mismo rol que los mocks del backend real.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Categoria, Comment, Estado, Prioridad, Report};

// Fechas fijas de octubre 2024, como en los mocks del backend
fn fecha(dia: u32, hora: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, dia, hora, 0, 0).unwrap()
}

/// Reportes de ejemplo para un store recién creado
pub fn seed_reports() -> Vec<Report> {
    vec![
        Report {
            id: 1,
            titulo: "Bache enorme en la avenida principal".to_string(),
            descripcion: "Bache de más de medio metro frente al mercado, ya rompió varias llantas".to_string(),
            categoria: Categoria::Infraestructura,
            estado: Estado::EnProceso,
            prioridad: Prioridad::Alta,
            ubicacion: "Av. Los Próceres 1420".to_string(),
            latitud: Some(-12.0464),
            longitud: Some(-77.0428),
            imagen: None,
            fecha_creacion: fecha(12, 9),
            fecha_actualizacion: fecha(20, 15),
            votos_positivos: 24,
            votos_negativos: 2,
            comentarios: vec![Comment {
                autor: "María Q.".to_string(),
                texto: "Hoy casi me caigo en moto por ese bache".to_string(),
                fecha: fecha(14, 18),
            }],
        },
        Report {
            id: 2,
            titulo: "Basura acumulada en la esquina del parque".to_string(),
            descripcion: "Llevan dos semanas sin recoger la basura, hay mal olor y perros".to_string(),
            categoria: Categoria::Saneamiento,
            estado: Estado::Nuevo,
            prioridad: Prioridad::Media,
            ubicacion: "Parque Central, esquina norte".to_string(),
            latitud: Some(-12.0512),
            longitud: Some(-77.0365),
            imagen: None,
            fecha_creacion: fecha(18, 8),
            fecha_actualizacion: fecha(18, 8),
            votos_positivos: 11,
            votos_negativos: 0,
            comentarios: vec![],
        },
        Report {
            id: 3,
            titulo: "Alumbrado público apagado hace un mes".to_string(),
            descripcion: "Tres postes seguidos sin luz, la cuadra queda totalmente oscura de noche".to_string(),
            categoria: Categoria::ServiciosPublicos,
            estado: Estado::Nuevo,
            prioridad: Prioridad::Alta,
            ubicacion: "Jr. Las Magnolias cuadra 5".to_string(),
            latitud: None,
            longitud: None,
            imagen: None,
            fecha_creacion: fecha(22, 20),
            fecha_actualizacion: fecha(22, 20),
            votos_positivos: 17,
            votos_negativos: 1,
            comentarios: vec![],
        },
        Report {
            id: 4,
            titulo: "Semáforo malogrado en cruce escolar".to_string(),
            descripcion: "El semáforo queda en ámbar intermitente justo a la hora de salida del colegio".to_string(),
            categoria: Categoria::Transporte,
            estado: Estado::Resuelto,
            prioridad: Prioridad::Alta,
            ubicacion: "Cruce Av. Grau con Jr. Unión".to_string(),
            latitud: Some(-12.0588),
            longitud: Some(-77.0301),
            imagen: None,
            fecha_creacion: fecha(5, 7),
            fecha_actualizacion: fecha(25, 11),
            votos_positivos: 31,
            votos_negativos: 3,
            comentarios: vec![Comment {
                autor: "Jorge T.".to_string(),
                texto: "Ya lo arreglaron, gracias a todos por votar".to_string(),
                fecha: fecha(25, 11),
            }],
        },
        Report {
            id: 5,
            titulo: "Quema de basura en terreno baldío".to_string(),
            descripcion: "Todas las tardes queman desmonte y llantas, el humo llega a las casas".to_string(),
            categoria: Categoria::MedioAmbiente,
            estado: Estado::Nuevo,
            prioridad: Prioridad::Media,
            ubicacion: "Terreno baldío detrás del estadio".to_string(),
            latitud: None,
            longitud: None,
            imagen: None,
            fecha_creacion: fecha(27, 17),
            fecha_actualizacion: fecha(27, 17),
            votos_positivos: 8,
            votos_negativos: 0,
            comentarios: vec![],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn los_ids_de_la_semilla_son_unicos() {
        let reports = seed_reports();
        let mut ids: Vec<i64> = reports.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), reports.len());
    }

    #[test]
    fn la_semilla_no_trae_votos_negativos_mayores_que_positivos() {
        for report in seed_reports() {
            assert!(report.puntuacion() >= 0, "reporte {} con balance negativo", report.id);
        }
    }
}
