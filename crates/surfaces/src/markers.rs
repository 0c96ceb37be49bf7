use catalog::{CityRecord, PointSurface};
use foundation::math::{
    GLOBE_RADIUS, MARKER_LIFT, SPIN_RATE_RAD_PER_S, Vec3, lat_lon_to_sphere,
};

/// A city marker placed slightly above the globe surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub city: String,
    /// Rest position before globe spin is applied.
    pub position: Vec3,
}

/// Scene-graph style surface: each record is projected onto a rotating
/// sphere and kept as a named marker mesh stand-in.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SphereMarkerSurface {
    markers: Vec<Marker>,
    spin_rad: f64,
}

impl SphereMarkerSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn spin_rad(&self) -> f64 {
        self.spin_rad
    }

    /// Advances the globe spin by `dt_s` seconds.
    pub fn step(&mut self, dt_s: f64) {
        self.spin_rad = (self.spin_rad + SPIN_RATE_RAD_PER_S * dt_s) % std::f64::consts::TAU;
    }

    /// Marker position with the current spin applied (rotation about +Y).
    pub fn spun_position(&self, marker: &Marker) -> Vec3 {
        let (sin, cos) = self.spin_rad.sin_cos();
        let p = marker.position;
        Vec3::new(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos)
    }
}

impl PointSurface for SphereMarkerSurface {
    fn set_points(&mut self, points: &[CityRecord]) {
        // Dispose the previous markers before placing the new set.
        self.markers.clear();
        self.markers.extend(points.iter().map(|record| Marker {
            city: record.city.clone(),
            position: lat_lon_to_sphere(
                record.latitude,
                record.longitude,
                GLOBE_RADIUS + MARKER_LIFT,
            ),
        }));
    }

    fn clear(&mut self) {
        self.markers.clear();
    }
}
