use serde::{Deserialize, Serialize};

use super::report::Categoria;

/// Registro de categoría que consumen los chips de filtro de la UI.
/// Es configuración fija, no se deriva de los reportes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: String,
    pub nombre: String,
    pub descripcion: String,
    pub icono: String,
}

impl CategoryInfo {
    fn new(categoria: Categoria, nombre: &str, descripcion: &str, icono: &str) -> Self {
        Self {
            id: categoria.to_string(),
            nombre: nombre.to_string(),
            descripcion: descripcion.to_string(),
            icono: icono.to_string(),
        }
    }
}

/// Catálogo fijo de categorías (mismo contenido que /api/categorias)
pub fn default_categories() -> Vec<CategoryInfo> {
    vec![
        CategoryInfo::new(
            Categoria::Saneamiento,
            "Saneamiento",
            "Basura acumulada, alcantarillas, aguas residuales",
            "trash",
        ),
        CategoryInfo::new(
            Categoria::Infraestructura,
            "Infraestructura",
            "Baches, veredas rotas, puentes, obras abandonadas",
            "construct",
        ),
        CategoryInfo::new(
            Categoria::SaludPublica,
            "Salud Pública",
            "Focos infecciosos, plagas, criaderos de mosquitos",
            "medkit",
        ),
        CategoryInfo::new(
            Categoria::Seguridad,
            "Seguridad",
            "Zonas peligrosas, falta de iluminación, vandalismo",
            "shield",
        ),
        CategoryInfo::new(
            Categoria::MedioAmbiente,
            "Medio Ambiente",
            "Tala ilegal, quema de basura, contaminación",
            "leaf",
        ),
        CategoryInfo::new(
            Categoria::ServiciosPublicos,
            "Servicios Públicos",
            "Cortes de agua o luz, alumbrado público dañado",
            "bulb",
        ),
        CategoryInfo::new(
            Categoria::Transporte,
            "Transporte",
            "Semáforos, señalización, paradas de transporte",
            "bus",
        ),
        CategoryInfo::new(Categoria::Otros, "Otros", "Todo lo que no encaja en las demás", "ellipsis-horizontal"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn el_catalogo_cubre_todas_las_categorias() {
        let catalogo = default_categories();
        for categoria in Categoria::iter() {
            assert!(
                catalogo.iter().any(|c| c.id == categoria.to_string()),
                "falta {} en el catálogo",
                categoria
            );
        }
        assert_eq!(catalogo.len(), Categoria::iter().count());
    }
}
