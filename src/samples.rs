use geo::{point, Distance, Geodesic, LineString, Point};
use itertools::Itertools;
use wkt::ToWkt;

/// Sampled positions along a path, held as index-aligned longitude and
/// latitude sequences.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Samples {
    lons: Vec<f64>,
    lats: Vec<f64>,
}

impl Samples {
    pub(crate) fn new(lons: Vec<f64>, lats: Vec<f64>) -> Self {
        debug_assert_eq!(lons.len(), lats.len());
        Samples { lons, lats }
    }

    pub fn lons(&self) -> &[f64] {
        &self.lons
    }

    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    pub fn len(&self) -> usize {
        self.lons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lons.is_empty()
    }

    /// Consumes the samples, yielding `(lons, lats)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.lons, self.lats)
    }

    /// Iterates the samples as `(x: lon, y: lat)` points, in path order.
    pub fn points(&self) -> impl DoubleEndedIterator<Item = Point> + ExactSizeIterator + '_ {
        self.lons
            .iter()
            .zip(self.lats.iter())
            .map(|(&x, &y)| point! { x: x, y: y })
    }

    /// Geodesic length of the polyline through the samples, in metres.
    pub fn length(&self) -> f64 {
        self.points()
            .tuple_windows()
            .map(|(a, b)| Geodesic.distance(a, b))
            .sum()
    }

    /// The samples as a WKT `LINESTRING`.
    pub fn wkt_string(&self) -> String {
        LineString::from(self.clone()).wkt_string()
    }
}

impl From<Samples> for LineString {
    fn from(value: Samples) -> Self {
        value.points().collect()
    }
}

impl FromIterator<Point> for Samples {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        let (lons, lats) = iter.into_iter().map(|p| p.x_y()).unzip();
        Samples { lons, lats }
    }
}
