use catalog::{CityRecord, PointSurface};

/// Globe-library style surface: keeps geographic coordinates verbatim and
/// leaves projection to the rendering library.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GeoPointSurface {
    points: Vec<CityRecord>,
}

impl GeoPointSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[CityRecord] {
        &self.points
    }
}

impl PointSurface for GeoPointSurface {
    fn set_points(&mut self, points: &[CityRecord]) {
        self.points = points.to_vec();
    }

    fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::GeoPointSurface;
    use catalog::{CityRecord, PointSurface};

    #[test]
    fn keeps_records_verbatim() {
        let mut surface = GeoPointSurface::new();
        let records = vec![
            CityRecord::new("Madrid", 40.4168, -3.7038),
            CityRecord::new("Paris", 48.8566, 2.3522),
        ];
        surface.set_points(&records);
        assert_eq!(surface.points(), &records[..]);
    }

    #[test]
    fn set_points_replaces_and_clear_empties() {
        let mut surface = GeoPointSurface::new();
        surface.set_points(&[CityRecord::new("X", 1.0, 2.0)]);
        surface.set_points(&[CityRecord::new("Y", 3.0, 4.0)]);
        assert_eq!(surface.points().len(), 1);
        assert_eq!(surface.points()[0].city, "Y");

        surface.clear();
        assert!(surface.points().is_empty());
    }
}
