use super::Vec3;

/// Globe radius in world units (a 3.5-diameter sphere).
pub const GLOBE_RADIUS: f64 = 1.75;
/// Lift above the globe surface at which city markers sit.
pub const MARKER_LIFT: f64 = 0.05;
/// Globe spin rate (radians per second; 0.0008 rad/frame at 60 fps).
pub const SPIN_RATE_RAD_PER_S: f64 = 0.048;

/// Projects geographic coordinates onto a Y-up sphere of the given radius.
///
/// Longitude 0 faces +X so an equirectangular globe texture wraps with
/// the prime meridian centered towards the default camera.
pub fn lat_lon_to_sphere(lat_deg: f64, lon_deg: f64, radius: f64) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lon_deg + 180.0).to_radians();

    let x = -(radius * phi.sin() * theta.cos());
    let z = radius * phi.sin() * theta.sin();
    let y = radius * phi.cos();

    Vec3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::{GLOBE_RADIUS, Vec3, lat_lon_to_sphere};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    fn assert_vec_close(a: Vec3, b: Vec3, eps: f64) {
        assert_close(a.x, b.x, eps);
        assert_close(a.y, b.y, eps);
        assert_close(a.z, b.z, eps);
    }

    #[test]
    fn north_pole_maps_to_positive_y() {
        let p = lat_lon_to_sphere(90.0, 0.0, GLOBE_RADIUS);
        assert_vec_close(p, Vec3::new(0.0, GLOBE_RADIUS, 0.0), 1e-12);
    }

    #[test]
    fn south_pole_maps_to_negative_y() {
        let p = lat_lon_to_sphere(-90.0, 45.0, GLOBE_RADIUS);
        assert_vec_close(p, Vec3::new(0.0, -GLOBE_RADIUS, 0.0), 1e-12);
    }

    #[test]
    fn equator_prime_meridian_faces_positive_x() {
        let p = lat_lon_to_sphere(0.0, 0.0, GLOBE_RADIUS);
        assert_vec_close(p, Vec3::new(GLOBE_RADIUS, 0.0, 0.0), 1e-12);
    }

    #[test]
    fn equator_90e_faces_negative_z() {
        let p = lat_lon_to_sphere(0.0, 90.0, GLOBE_RADIUS);
        assert_vec_close(p, Vec3::new(0.0, 0.0, -GLOBE_RADIUS), 1e-12);
    }

    #[test]
    fn projection_preserves_radius() {
        let p = lat_lon_to_sphere(40.4168, -3.7038, 2.0);
        assert_close(p.length(), 2.0, 1e-12);
    }
}
