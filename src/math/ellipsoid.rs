use super::{Point3, TOLERANCE};

/// Geodetic position on an ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cartographic {
    /// Longitude in degrees, in `(-180, 180]`.
    pub longitude: f64,
    /// Latitude in degrees, in `[-90, 90]`.
    pub latitude: f64,
    /// Height above the ellipsoid surface in meters.
    pub height: f64,
}

/// A biaxial reference ellipsoid centered at the origin, with its polar
/// axis along +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    semimajor_axis: f64,
    semiminor_axis: f64,
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

impl Ellipsoid {
    /// The WGS84 ellipsoid.
    pub const WGS84: Self = Self {
        semimajor_axis: 6_378_137.0,
        semiminor_axis: 6_356_752.314_245_179,
    };

    const MAX_ITERATIONS: usize = 16;

    /// Creates an ellipsoid from its equatorial and polar radii.
    #[must_use]
    pub fn new(semimajor_axis: f64, semiminor_axis: f64) -> Self {
        Self {
            semimajor_axis,
            semiminor_axis,
        }
    }

    /// Returns the equatorial radius.
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.semimajor_axis
    }

    /// Returns the polar radius.
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.semiminor_axis
    }

    /// First eccentricity squared.
    fn eccentricity_squared(&self) -> f64 {
        let ratio = self.semiminor_axis / self.semimajor_axis;
        1.0 - ratio * ratio
    }

    /// Prime vertical radius of curvature at the given latitude (radians).
    fn prime_vertical_radius(&self, sin_lat: f64) -> f64 {
        self.semimajor_axis / (1.0 - self.eccentricity_squared() * sin_lat * sin_lat).sqrt()
    }

    /// Converts a geodetic position to Earth-centered Cartesian coordinates.
    #[must_use]
    pub fn cartographic_to_cartesian(&self, carto: &Cartographic) -> Point3 {
        let lon = carto.longitude.to_radians();
        let lat = carto.latitude.to_radians();
        let (sin_lat, cos_lat) = lat.sin_cos();
        let n = self.prime_vertical_radius(sin_lat);
        let e2 = self.eccentricity_squared();
        Point3::new(
            (n + carto.height) * cos_lat * lon.cos(),
            (n + carto.height) * cos_lat * lon.sin(),
            (n * (1.0 - e2) + carto.height) * sin_lat,
        )
    }

    /// Converts Earth-centered Cartesian coordinates to a geodetic position.
    ///
    /// Latitude is solved iteratively. Returns `None` for points too close
    /// to the ellipsoid center, where the geodetic normal is undefined.
    #[must_use]
    pub fn cartesian_to_cartographic(&self, point: &Point3) -> Option<Cartographic> {
        let p = point.x.hypot(point.y);
        if p < TOLERANCE && point.z.abs() < TOLERANCE {
            return None;
        }

        if p < TOLERANCE {
            return Some(Cartographic {
                longitude: 0.0,
                latitude: 90.0_f64.copysign(point.z),
                height: point.z.abs() - self.semiminor_axis,
            });
        }

        let e2 = self.eccentricity_squared();
        let longitude = point.y.atan2(point.x);
        let mut latitude = point.z.atan2(p * (1.0 - e2));
        let mut height = 0.0;

        for _ in 0..Self::MAX_ITERATIONS {
            let (sin_lat, cos_lat) = latitude.sin_cos();
            let n = self.prime_vertical_radius(sin_lat);
            let a2 = self.semimajor_axis * self.semimajor_axis;
            height = p * cos_lat + point.z * sin_lat - a2 / n;
            let next = point.z.atan2(p * (1.0 - e2 * n / (n + height)));
            let converged = (next - latitude).abs() < 1e-14;
            latitude = next;
            if converged {
                break;
            }
        }

        Some(Cartographic {
            longitude: longitude.to_degrees(),
            latitude: latitude.to_degrees(),
            height,
        })
    }
}
