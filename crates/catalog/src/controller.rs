use serde::{Deserialize, Serialize};

use crate::{CityRecord, ProviderCatalog};

/// Contract the controller needs from a renderer.
///
/// Implementations handle re-rendering and disposal of previously shown
/// points themselves; both calls are synchronous.
pub trait PointSurface {
    /// Replaces the currently shown point set.
    fn set_points(&mut self, points: &[CityRecord]);

    /// Disposes all shown points.
    fn clear(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderCount {
    pub name: String,
    pub count: usize,
}

/// Display snapshot of the current catalog and selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub selected_provider: Option<String>,
    pub selected_count: usize,
    /// Per-provider counts in catalog insertion order.
    pub per_provider: Vec<ProviderCount>,
}

/// Owns the catalog and the selected provider.
///
/// Every successful `load` or `select` pushes the visible city set to the
/// attached surface, unconditionally and without diffing. Surfaces only
/// ever see read-only snapshots.
#[derive(Debug, Default)]
pub struct ProviderController<S> {
    catalog: ProviderCatalog,
    selected: Option<String>,
    surface: S,
}

impl<S: PointSurface> ProviderController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            catalog: ProviderCatalog::new(),
            selected: None,
            surface,
        }
    }

    /// Replaces the catalog wholesale and resets the selection to the
    /// first provider in first-seen order (none when the catalog is
    /// empty). The prior catalog is never merged with.
    pub fn load(&mut self, catalog: ProviderCatalog) {
        self.catalog = catalog;
        self.selected = self.catalog.first_provider().map(str::to_string);
        self.push();
    }

    /// Selects `name` if it is a catalog key.
    ///
    /// Unknown names are rejected: the call returns `false` and leaves
    /// selection, visible set, and surface untouched.
    pub fn select(&mut self, name: &str) -> bool {
        if !self.catalog.contains(name) {
            return false;
        }
        self.selected = Some(name.to_string());
        self.push();
        true
    }

    pub fn catalog(&self) -> &ProviderCatalog {
        &self.catalog
    }

    pub fn selected_provider(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Records for the selected provider; empty when none is selected.
    pub fn visible_cities(&self) -> &[CityRecord] {
        self.selected
            .as_deref()
            .and_then(|name| self.catalog.cities(name))
            .unwrap_or(&[])
    }

    pub fn summary(&self) -> Summary {
        let per_provider = self
            .catalog
            .iter()
            .map(|(name, cities)| ProviderCount {
                name: name.to_string(),
                count: cities.len(),
            })
            .collect();

        Summary {
            selected_provider: self.selected.clone(),
            selected_count: self.visible_cities().len(),
            per_provider,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn push(&mut self) {
        let points = self.visible_cities().to_vec();
        self.surface.set_points(&points);
    }
}

#[cfg(test)]
mod tests {
    use super::{PointSurface, ProviderController, ProviderCount};
    use crate::{CityRecord, ProviderCatalog};
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default)]
    struct RecordingSurface {
        points: Vec<CityRecord>,
        set_calls: usize,
        clear_calls: usize,
    }

    impl PointSurface for RecordingSurface {
        fn set_points(&mut self, points: &[CityRecord]) {
            self.points = points.to_vec();
            self.set_calls += 1;
        }

        fn clear(&mut self) {
            self.points.clear();
            self.clear_calls += 1;
        }
    }

    fn two_provider_catalog() -> ProviderCatalog {
        let mut catalog = ProviderCatalog::new();
        catalog.push("A", CityRecord::new("X", 1.0, 2.0));
        catalog.push("A", CityRecord::new("Y", 3.0, 4.0));
        catalog.push("B", CityRecord::new("Z", 5.0, 6.0));
        catalog
    }

    #[test]
    fn load_selects_first_provider_and_pushes() {
        let mut ctrl = ProviderController::new(RecordingSurface::default());
        ctrl.load(two_provider_catalog());

        assert_eq!(ctrl.selected_provider(), Some("A"));
        assert_eq!(ctrl.visible_cities().len(), 2);
        assert_eq!(ctrl.surface().set_calls, 1);
        assert_eq!(ctrl.surface().points.len(), 2);
    }

    #[test]
    fn load_empty_catalog_clears_selection() {
        let mut ctrl = ProviderController::new(RecordingSurface::default());
        ctrl.load(two_provider_catalog());
        ctrl.load(ProviderCatalog::new());

        assert_eq!(ctrl.selected_provider(), None);
        assert!(ctrl.visible_cities().is_empty());
        // The empty set is still pushed, disposing prior markers.
        assert_eq!(ctrl.surface().set_calls, 2);
        assert!(ctrl.surface().points.is_empty());
    }

    #[test]
    fn select_switches_visible_set() {
        let mut ctrl = ProviderController::new(RecordingSurface::default());
        ctrl.load(two_provider_catalog());

        assert!(ctrl.select("B"));
        assert_eq!(ctrl.selected_provider(), Some("B"));
        assert_eq!(
            ctrl.visible_cities(),
            &[CityRecord::new("Z", 5.0, 6.0)][..]
        );
        assert_eq!(ctrl.surface().points.len(), 1);
    }

    #[test]
    fn select_unknown_provider_is_rejected() {
        let mut ctrl = ProviderController::new(RecordingSurface::default());
        ctrl.load(two_provider_catalog());
        let pushes_before = ctrl.surface().set_calls;

        assert!(!ctrl.select("nope"));
        assert_eq!(ctrl.selected_provider(), Some("A"));
        assert_eq!(ctrl.visible_cities().len(), 2);
        assert_eq!(ctrl.surface().set_calls, pushes_before);
    }

    #[test]
    fn reload_resets_selection_even_if_provider_persists() {
        let mut ctrl = ProviderController::new(RecordingSurface::default());
        ctrl.load(two_provider_catalog());
        assert!(ctrl.select("B"));

        ctrl.load(two_provider_catalog());
        assert_eq!(ctrl.selected_provider(), Some("A"));
    }

    #[test]
    fn summary_follows_insertion_order() {
        let mut ctrl = ProviderController::new(RecordingSurface::default());
        let mut catalog = ProviderCatalog::new();
        // Deliberately reverse-alphabetical first-seen order.
        catalog.push("Zeta", CityRecord::new("X", 0.0, 0.0));
        catalog.push("Alpha", CityRecord::new("Y", 0.0, 0.0));
        catalog.push("Zeta", CityRecord::new("Z", 0.0, 0.0));
        ctrl.load(catalog);

        let summary = ctrl.summary();
        assert_eq!(summary.selected_provider.as_deref(), Some("Zeta"));
        assert_eq!(summary.selected_count, 2);
        assert_eq!(
            summary.per_provider,
            vec![
                ProviderCount {
                    name: "Zeta".to_string(),
                    count: 2
                },
                ProviderCount {
                    name: "Alpha".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn summary_of_empty_controller() {
        let ctrl = ProviderController::new(RecordingSurface::default());
        let summary = ctrl.summary();
        assert_eq!(summary.selected_provider, None);
        assert_eq!(summary.selected_count, 0);
        assert!(summary.per_provider.is_empty());
    }

    #[test]
    fn summary_serializes_to_json() {
        let mut ctrl = ProviderController::new(RecordingSurface::default());
        ctrl.load(two_provider_catalog());

        let json = serde_json::to_string(&ctrl.summary()).unwrap();
        assert!(json.contains("\"selected_provider\":\"A\""));
        assert!(json.contains("\"selected_count\":2"));
    }
}
