//! Party name to logo path mapping.

use std::collections::BTreeMap;

/// Maps exact party names to their logo path. No case or whitespace
/// normalization is applied to lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogoMapping {
    entries: BTreeMap<String, String>,
}

impl LogoMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the path for `name`
    pub fn with(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.entries.insert(name.into(), path.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LogoMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, path)| (name.into(), path.into()))
                .collect(),
        }
    }
}

/// Built-in logo locations for the registered parties.
pub const DEFAULT_LOGOS: &[(&str, &str)] = &[
    ("Partido Democrático Nacional", "static/logos/partido_democratico.png"),
    ("Alianza Popular", "static/logos/alianza_popular.png"),
    ("Movimiento Verde Progresista", "static/logos/verde_progresista.png"),
    ("Frente Unido por el Perú", "static/logos/frente_unido.png"),
    ("Partido Libertad y Democracia", "static/logos/partido_libertad.png"),
    ("Acción Nacional", "static/logos/accion_nacional.png"),
    ("Renovación Popular", "static/logos/renovacion_popular.png"),
    ("Perú Libre", "static/logos/peru_libre.png"),
    ("Fuerza Popular", "static/logos/fuerza_popular.png"),
    ("Juntos por el Perú", "static/logos/juntos_peru.png"),
];

/// Mapping built from [`DEFAULT_LOGOS`]
pub fn default_logo_mapping() -> LogoMapping {
    DEFAULT_LOGOS.iter().copied().collect()
}
