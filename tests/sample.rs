use approx::assert_abs_diff_eq;
use gcproject::{sample, SampleError, DEFAULT_NPTS};

#[test_log::test]
fn lengths_match_npts() {
    for mode in ["dist", "lon", "lat"] {
        let (lons, lats) =
            sample(-122.4, 37.8, -73.9, 40.7, mode, DEFAULT_NPTS).expect("Must sample");

        assert_eq!(lons.len(), DEFAULT_NPTS, "{mode}");
        assert_eq!(lats.len(), DEFAULT_NPTS, "{mode}");
    }
}

#[test_log::test]
fn longitude_spacing_is_exact() {
    let (lons, lats) = sample(0.0, 0.0, 10.0, 10.0, "lon", 11).expect("Must sample");

    assert_eq!(lons, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
    assert_eq!(lats.len(), 11);
}

#[test_log::test]
fn lon_and_lat_modes_trace_the_same_path() {
    let (lon_lons, lon_lats) = sample(0.0, 0.0, 10.0, 10.0, "lon", 11).expect("Must sample");
    let (lat_lons, lat_lats) = sample(0.0, 0.0, 10.0, 10.0, "lat", 11).expect("Must sample");

    // Off the equator a geodesic bows poleward, so both sets sit above the
    // straight line in lon/lat space, by the same amount.
    for ((lon, lat), (other_lon, other_lat)) in lon_lons
        .iter()
        .zip(&lon_lats)
        .zip(lat_lons.iter().zip(&lat_lats))
    {
        assert!(lat >= &(lon - 0.1), "({lon}, {lat})");
        assert!(other_lat >= &(other_lon - 0.1), "({other_lon}, {other_lat})");
    }

    // Interpolating either set at the other's keys lands within the lookup error.
    for (lon, lat) in lat_lons.iter().zip(&lat_lats) {
        let i = lon.floor() as usize;
        if i + 1 >= lon_lons.len() {
            continue;
        }

        let t = lon - lon_lons[i];
        let expected = lon_lats[i] + (lon_lats[i + 1] - lon_lats[i]) * t;
        assert_abs_diff_eq!(*lat, expected, epsilon = 0.1);
    }
}

#[test_log::test]
fn two_points_are_the_endpoints() {
    let (lons, lats) = sample(100.0, -30.0, 120.0, -10.0, "dist", 2).expect("Must sample");
    assert_eq!(lons, vec![100.0, 120.0]);
    assert_eq!(lats, vec![-30.0, -10.0]);

    let (lons, lats) = sample(100.0, -30.0, 120.0, -10.0, "lat", 2).expect("Must sample");
    assert_eq!(lons, vec![100.0, 120.0]);
    assert_eq!(lats, vec![-30.0, -10.0]);
}

#[test_log::test]
fn reversed_distance_sampling_is_reversed() {
    let (lons, lats) = sample(5.0, 50.0, 30.0, 60.0, "dist", 101).expect("Must sample");
    let (rev_lons, rev_lats) = sample(30.0, 60.0, 5.0, 50.0, "dist", 101).expect("Must sample");

    for (a, b) in lons.iter().zip(rev_lons.iter().rev()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
    }
    for (a, b) in lats.iter().zip(rev_lats.iter().rev()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
    }
}

#[test]
fn unsupported_mode_is_named() {
    let error = sample(0.0, 0.0, 1.0, 1.0, "foo", 11).expect_err("Must reject");

    assert_eq!(error, SampleError::InvalidMode("foo".to_string()));
    assert_eq!(
        error.to_string(),
        "The input type foo is not supported! Supported types include dist, lon, and lat."
    );
}
