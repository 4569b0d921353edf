use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in decimal degrees. Ranges are not validated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `lat,lng`, the form the provider expects in query strings.
    pub fn to_query(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }

    pub fn centroid(points: &[Coordinates]) -> Option<Coordinates> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let lat = points.iter().map(|p| p.lat).sum::<f64>() / n;
        let lng = points.iter().map(|p| p.lng).sum::<f64>() / n;
        Some(Coordinates { lat, lng })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_form_is_lat_then_lng() {
        assert_eq!(Coordinates::new(21.5, 105.25).to_query(), "21.5,105.25");
    }

    #[test]
    fn centroid_of_empty_is_none() {
        assert!(Coordinates::centroid(&[]).is_none());
    }

    #[test]
    fn centroid_averages() {
        let c = Coordinates::centroid(&[Coordinates::new(10.0, 100.0), Coordinates::new(12.0, 102.0)])
            .unwrap();
        assert_eq!(c, Coordinates::new(11.0, 101.0));
    }
}
