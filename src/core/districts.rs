use serde::{Deserialize, Serialize};

/// District and village names when coordinates fall outside every known zone
pub const UNKNOWN: &str = "Unknown";

/// District and village inferred from coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locality {
    pub district: String,
    pub village: String,
}

impl Locality {
    fn new(district: &str, village: &str) -> Self {
        Self {
            district: district.to_string(),
            village: village.to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.district == UNKNOWN
    }
}

/// Offline lookup of district and village from coordinates
///
/// Covers the pilot zones only. Zone edges are exclusive; everything else
/// resolves to "Unknown", which the matcher treats as no district
/// preference.
pub fn locate(latitude: f64, longitude: f64) -> Locality {
    if latitude > 17.3 && latitude < 17.5 && longitude > 78.4 && longitude < 78.5 {
        Locality::new("Hyderabad", "Mohanpur")
    } else if latitude > 19.0 && latitude < 19.1 && longitude > 72.8 && longitude < 72.9 {
        Locality::new("Mumbai", "Andheri")
    } else {
        Locality::new(UNKNOWN, UNKNOWN)
    }
}
