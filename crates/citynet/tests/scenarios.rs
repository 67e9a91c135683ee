//! End-to-end scenarios on small hand-checked inputs.

use citynet::prelude::*;

fn cities(points: &[(f64, f64)]) -> PointSet {
    points
        .iter()
        .map(|&(x, y)| {
            let p = Point::xy(x, y);
            (p, Marker::at_corner(p, 8))
        })
        .collect()
}

#[test]
fn square_forms_closed_quadrilateral() {
    let set = cities(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let centroid = set.centroid().unwrap();
    assert_eq!(centroid, Point::xy(5.0, 5.0));
    let tour = PolarTourBuilder::default()
        .build(&set, Some(centroid))
        .unwrap();
    let stops = tour.stops();
    assert_eq!(stops.len(), 4);
    // consecutive stops are adjacent corners, so no diagonal is drawn
    for (a, b) in tour.edges() {
        assert!((a.distance(&b) - 10.0).abs() < 1e-12, "{a} -> {b}");
    }
    // counterclockwise in standard axes: angles strictly increase
    let angles: Vec<f64> = stops
        .iter()
        .map(|p| PolarKey::around(*p, centroid).angle)
        .collect();
    assert!(angles.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn single_ring_of_four_around_origin() {
    let cfg = MeshCfg {
        rings: 1,
        points_per_ring: 4,
        radius_increment: 50.0,
        marker_size: 5,
    };
    let net = radial_mesh(Point::zeros(), &cfg).unwrap();
    assert_eq!(net.len(), 5);
    for (x, y) in [(0.0, 0.0), (50.0, 0.0), (0.0, 50.0), (-50.0, 0.0), (0.0, -50.0)] {
        let (hit, d) = nearest_with_distance(Point::xy(x + 1e-3, y), net.points()).unwrap();
        assert!(d < 1e-2, "no net point near ({x}, {y}), closest {hit}");
    }
}

#[test]
fn cities_snap_into_the_net() {
    let set = cities(&[(100.0, 100.0), (300.0, 120.0), (180.0, 260.0)]);
    let centroid = set.centroid().unwrap();
    let net = radial_mesh(centroid, &MeshCfg::for_city_count(set.len())).unwrap();
    let snapped = snap_to_net(&set, &net);
    assert_eq!(snapped.len(), 3);
    for (city, net_point) in &snapped {
        assert!(net.contains(net_point));
        // no net point is closer than the snapped one
        let d = city.distance(net_point);
        assert!(net.points().all(|q| city.distance(&q) >= d));
    }
}

#[test]
fn seeded_scene_is_reproducible() {
    let cfg = SceneCfg::for_city_count(15);
    let vp = Viewport {
        width: 640.0,
        height: 480.0,
    };
    let a = Scene::generate_seeded(&cfg, vp, 2024).unwrap();
    let b = Scene::generate_seeded(&cfg, vp, 2024).unwrap();
    assert_eq!(a.tour, b.tour);
    assert_eq!(a.net.len(), b.net.len());
    assert_eq!(a.frame().segments, b.frame().segments);
}
