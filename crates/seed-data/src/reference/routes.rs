//! Route table with coordinates.

/// WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Linear interpolation towards `other`; `t` of 0 is `self`, 1 is `other`.
    pub fn lerp(&self, other: &GeoPoint, t: f64) -> GeoPoint {
        GeoPoint::new(
            self.lat + (other.lat - self.lat) * t,
            self.lon + (other.lon - self.lon) * t,
        )
    }

    /// Returns the point shifted by the given offsets in degrees.
    pub fn offset(&self, d_lat: f64, d_lon: f64) -> GeoPoint {
        GeoPoint::new(self.lat + d_lat, self.lon + d_lon)
    }

    /// Compass heading in degrees [0, 360) of a small step from `self` to `other`.
    pub fn heading_to(&self, other: &GeoPoint) -> f64 {
        let d_lat = other.lat - self.lat;
        let d_lon = (other.lon - self.lon) * self.lat.to_radians().cos();
        d_lon.atan2(d_lat).to_degrees().rem_euclid(360.0)
    }
}

/// Mode of a route, which decides the vehicle class that can run it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    Road,
    Air,
    Urban,
}

impl RouteKind {
    /// Multiplier applied to the drawn road speed.
    pub fn speed_scale(&self) -> f64 {
        match self {
            RouteKind::Air => 10.0,
            RouteKind::Road | RouteKind::Urban => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    pub origin: &'static str,
    pub destination: &'static str,
    pub distance_km: f64,
    pub toll_cost: f64,
    pub kind: RouteKind,
    pub origin_at: GeoPoint,
    pub destination_at: GeoPoint,
}

impl Route {
    const fn road(
        origin: &'static str,
        destination: &'static str,
        distance_km: f64,
        toll_cost: f64,
        origin_at: GeoPoint,
        destination_at: GeoPoint,
    ) -> Self {
        Self {
            origin,
            destination,
            distance_km,
            toll_cost,
            kind: RouteKind::Road,
            origin_at,
            destination_at,
        }
    }

    const fn untolled(
        kind: RouteKind,
        origin: &'static str,
        destination: &'static str,
        distance_km: f64,
        origin_at: GeoPoint,
        destination_at: GeoPoint,
    ) -> Self {
        Self {
            origin,
            destination,
            distance_km,
            toll_cost: 0.0,
            kind,
            origin_at,
            destination_at,
        }
    }

    /// Routes above this distance need an overnight stop and a refuel.
    pub fn is_long_haul(&self) -> bool {
        self.distance_km > 400.0
    }
}

const MUMBAI: GeoPoint = GeoPoint::new(19.0760, 72.8777);
const PUNE: GeoPoint = GeoPoint::new(18.5204, 73.8567);
const DELHI: GeoPoint = GeoPoint::new(28.7041, 77.1025);
const JAIPUR: GeoPoint = GeoPoint::new(26.9124, 75.7873);
const AHMEDABAD: GeoPoint = GeoPoint::new(23.0225, 72.5714);
const SURAT: GeoPoint = GeoPoint::new(21.1702, 72.8311);
const BENGALURU: GeoPoint = GeoPoint::new(12.9716, 77.5946);
const CHENNAI: GeoPoint = GeoPoint::new(13.0827, 80.2707);
const HYDERABAD: GeoPoint = GeoPoint::new(17.3850, 78.4867);
const KOLKATA: GeoPoint = GeoPoint::new(22.5726, 88.3639);
const NAGPUR: GeoPoint = GeoPoint::new(21.1458, 79.0882);
const NASHIK: GeoPoint = GeoPoint::new(19.9975, 73.7898);
const INDORE: GeoPoint = GeoPoint::new(22.7196, 75.8577);
const BHOPAL: GeoPoint = GeoPoint::new(23.2599, 77.4126);
const LUCKNOW: GeoPoint = GeoPoint::new(26.8467, 80.9462);
const KANPUR: GeoPoint = GeoPoint::new(26.4499, 80.3319);
const COIMBATORE: GeoPoint = GeoPoint::new(11.0168, 76.9558);
const KOCHI: GeoPoint = GeoPoint::new(9.9312, 76.2673);
const MYSURU: GeoPoint = GeoPoint::new(12.2958, 76.6394);
const AGRA: GeoPoint = GeoPoint::new(27.1767, 78.0081);
const CHANDIGARH: GeoPoint = GeoPoint::new(30.7333, 76.7794);
const VISAKHAPATNAM: GeoPoint = GeoPoint::new(17.6868, 83.2185);
const VIJAYAWADA: GeoPoint = GeoPoint::new(16.5062, 80.6480);

/// All routes. Road routes come first, then air, then urban; selection by
/// kind keeps that order.
pub const ROUTES: [Route; 24] = [
    Route::road("Mumbai", "Pune", 150.0, 320.0, MUMBAI, PUNE),
    Route::road("Mumbai", "Ahmedabad", 530.0, 1150.0, MUMBAI, AHMEDABAD),
    Route::road("Delhi", "Jaipur", 280.0, 650.0, DELHI, JAIPUR),
    Route::road("Bengaluru", "Chennai", 350.0, 740.0, BENGALURU, CHENNAI),
    Route::road("Hyderabad", "Bengaluru", 570.0, 1080.0, HYDERABAD, BENGALURU),
    Route::road("Pune", "Nashik", 210.0, 0.0, PUNE, NASHIK),
    Route::road("Delhi", "Chandigarh", 245.0, 520.0, DELHI, CHANDIGARH),
    Route::road("Ahmedabad", "Surat", 265.0, 410.0, AHMEDABAD, SURAT),
    Route::road("Chennai", "Coimbatore", 505.0, 860.0, CHENNAI, COIMBATORE),
    Route::road("Nagpur", "Hyderabad", 500.0, 930.0, NAGPUR, HYDERABAD),
    Route::road("Kolkata", "Visakhapatnam", 880.0, 1420.0, KOLKATA, VISAKHAPATNAM),
    Route::road("Indore", "Bhopal", 195.0, 0.0, INDORE, BHOPAL),
    Route::road("Delhi", "Agra", 230.0, 480.0, DELHI, AGRA),
    Route::road("Mumbai", "Nagpur", 820.0, 1560.0, MUMBAI, NAGPUR),
    Route::road("Bengaluru", "Mysuru", 145.0, 250.0, BENGALURU, MYSURU),
    Route::road("Coimbatore", "Kochi", 190.0, 0.0, COIMBATORE, KOCHI),
    Route::road("Lucknow", "Kanpur", 90.0, 155.0, LUCKNOW, KANPUR),
    Route::road("Hyderabad", "Vijayawada", 275.0, 455.0, HYDERABAD, VIJAYAWADA),
    Route::untolled(RouteKind::Air, "Mumbai", "Delhi", 1150.0, MUMBAI, DELHI),
    Route::untolled(RouteKind::Air, "Bengaluru", "Kolkata", 1560.0, BENGALURU, KOLKATA),
    Route::untolled(
        RouteKind::Urban,
        "Andheri",
        "Bandra",
        11.0,
        GeoPoint::new(19.1136, 72.8697),
        GeoPoint::new(19.0596, 72.8295),
    ),
    Route::untolled(
        RouteKind::Urban,
        "Koramangala",
        "Whitefield",
        18.0,
        GeoPoint::new(12.9352, 77.6245),
        GeoPoint::new(12.9698, 77.7500),
    ),
    Route::untolled(
        RouteKind::Urban,
        "Connaught Place",
        "Saket",
        14.0,
        GeoPoint::new(28.6315, 77.2167),
        GeoPoint::new(28.5245, 77.2066),
    ),
    Route::untolled(
        RouteKind::Urban,
        "Hinjewadi",
        "Kothrud",
        16.0,
        GeoPoint::new(18.5913, 73.7389),
        GeoPoint::new(18.5074, 73.8077),
    ),
];

/// Returns the routes of `kind` in table order.
pub fn routes_of(kind: RouteKind) -> Vec<&'static Route> {
    ROUTES.iter().filter(|route| route.kind == kind).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_contiguous() {
        for (i, route) in ROUTES.iter().enumerate() {
            let expected = match i {
                0..=17 => RouteKind::Road,
                18..=19 => RouteKind::Air,
                _ => RouteKind::Urban,
            };
            assert_eq!(route.kind, expected, "route {i}");
        }
    }

    #[test]
    fn test_some_road_routes_are_toll_free() {
        let toll_free = routes_of(RouteKind::Road)
            .into_iter()
            .filter(|r| r.toll_cost == 0.0)
            .count();
        assert_eq!(toll_free, 3);
        assert!(routes_of(RouteKind::Air).iter().all(|r| r.toll_cost == 0.0));
    }

    #[test]
    fn test_heading() {
        let origin = GeoPoint::new(19.0, 73.0);
        assert!((origin.heading_to(&GeoPoint::new(19.1, 73.0)) - 0.0).abs() < 1e-9);
        assert!((origin.heading_to(&GeoPoint::new(19.0, 73.1)) - 90.0).abs() < 1e-9);
        assert!((origin.heading_to(&GeoPoint::new(18.9, 73.0)) - 180.0).abs() < 1e-9);
        assert!((origin.heading_to(&GeoPoint::new(19.0, 72.9)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = GeoPoint::new(10.0, 20.0);
        let b = GeoPoint::new(20.0, 40.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), GeoPoint::new(15.0, 30.0));
    }
}
