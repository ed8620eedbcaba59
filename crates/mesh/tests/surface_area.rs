use float_eq::assert_float_eq;
use stlarea_mesh::{surface_area, surface_area_with, Facet, ReducerConfig, Vector3};

// A deterministic, irregular mesh so partial sums actually differ per chunk.
fn fan(n: usize) -> Vec<Facet> {
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.37;
            Facet::new(
                Vector3::new(0.0, 0.0, 0.0),
                [
                    Vector3::new(t.cos(), t.sin(), 0.1 * t),
                    Vector3::new(2.0 * t.sin(), 0.5, t.cos()),
                    Vector3::new(1.0 + t, -t.cos(), 3.0 * t.sin()),
                ],
            )
        })
        .collect()
}

#[test]
fn area_is_invariant_to_worker_count() {
    let facets = fan(1000);
    let expected = surface_area_with(&facets, &ReducerConfig { workers: 1 });
    assert!(expected > 0.0);
    for workers in [2, 3, 4, 7, 16, 999, 1000, 1001] {
        let area = surface_area_with(&facets, &ReducerConfig { workers });
        assert_float_eq!(area, expected, rmax <= 1e-12);
    }
    assert_float_eq!(surface_area(&facets), expected, rmax <= 1e-12);
}

#[test]
fn fixed_partitioning_is_reproducible() {
    let facets = fan(257);
    let config = ReducerConfig { workers: 1 };
    let first = surface_area_with(&facets, &config);
    for _ in 0..10 {
        assert_eq!(surface_area_with(&facets, &config), first);
    }
}

#[test]
fn single_facet_area() {
    let facets = [Facet::new(
        Vector3::new(0.0, 0.0, 1.0),
        [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 2.0, 0.0),
        ],
    )];
    assert_eq!(surface_area(&facets), 4.0);
}
