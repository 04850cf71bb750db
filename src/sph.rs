use std::fmt;

/// A point in spherical coordinates.
/// Latitude is measured from the equatorial plane (not colatitude from
/// the pole); longitude is measured in the x-y plane.
#[derive(Debug, Clone, Copy)]
pub struct Spherical {
    pub radius: f64,
    pub lat_deg: f64,
    pub lon_deg: f64,
}
impl Spherical {
    /// Create a new spherical point.
    pub fn new(radius: f64, lat_deg: f64, lon_deg: f64) -> Self {
        Spherical{radius, lat_deg, lon_deg}
    }

    /// Convert to Cartesian coordinates.
    pub fn to_cartesian(&self) -> Cartesian {
        let lat = self.lat_deg.to_radians();
        let lon = self.lon_deg.to_radians();
        Cartesian{
            x: self.radius * lat.cos() * lon.cos(),
            y: self.radius * lat.cos() * lon.sin(),
            z: self.radius * lat.sin(),
        }
    }
}

/// A point in Cartesian coordinates.
/// Displays as `(x,y,z)` with 3 decimal places by default.
#[derive(Debug, Clone, Copy)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Cartesian {
    /// Create a new Cartesian point.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian{x, y, z}
    }
}
impl fmt::Display for Cartesian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*},{:.*},{:.*})", precision, self.x, precision, self.y, precision, self.z)
    }
}
