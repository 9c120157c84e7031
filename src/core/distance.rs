/// Straight-line distance between two points in raw coordinate degrees
///
/// Deliberately planar rather than geodesic: the matcher only ranks
/// volunteers within a city, where the raw-degree metric preserves the
/// nearest-first ordering.
#[inline]
pub fn euclidean_deg(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    ((lat1 - lat2).powi(2) + (lon1 - lon2).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance() {
        assert_eq!(euclidean_deg(17.3850, 78.4867, 17.3850, 78.4867), 0.0);
    }

    #[test]
    fn test_pythagorean_triple() {
        assert_eq!(euclidean_deg(0.0, 0.0, 3.0, 4.0), 5.0);
    }

    #[test]
    fn test_symmetric() {
        let forward = euclidean_deg(17.3850, 78.4867, 19.0760, 72.8777);
        let backward = euclidean_deg(19.0760, 72.8777, 17.3850, 78.4867);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_hyderabad_to_mumbai() {
        // sqrt(1.691^2 + 5.609^2) ≈ 5.858 degrees
        let distance = euclidean_deg(17.3850, 78.4867, 19.0760, 72.8777);
        assert!((distance - 5.858).abs() < 0.01, "got {}", distance);
    }
}
