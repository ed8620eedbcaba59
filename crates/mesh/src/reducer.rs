use std::sync::mpsc;

use log::{debug, trace};

use crate::geometry::{facet_area, Facet};

/// Parameters for the surface area reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReducerConfig {
    /// Upper bound on the number of chunks the facets are split into. Each
    /// chunk is summed by its own task. Zero is treated as one.
    pub workers: usize,
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            workers: rayon::current_num_threads(),
        }
    }
}

fn chunk_area(facets: &[Facet]) -> f64 {
    facets.iter().fold(0.0, |area, f| area + facet_area(f))
}

/// Computes the total surface area of `facets` using one worker per
/// available thread.
///
/// See [`surface_area_with`].
pub fn surface_area(facets: &[Facet]) -> f64 {
    surface_area_with(facets, &ReducerConfig::default())
}

/// Computes the total surface area of `facets`.
///
/// The facets are split into at most `config.workers` contiguous chunks of
/// `ceil(n / workers)` facets each; the last chunk takes whatever remains.
/// Every chunk is summed by an independent task which reports exactly one
/// partial sum back to the caller. The call returns once all tasks have
/// completed.
///
/// The partials are added in arrival order, so results for different worker
/// counts can differ in the last few bits.
pub fn surface_area_with(facets: &[Facet], config: &ReducerConfig) -> f64 {
    if facets.is_empty() {
        return 0.0;
    }

    // There is never more than one chunk per facet.
    let workers = config.workers.clamp(1, facets.len());
    let chunk_size = (facets.len() + workers - 1) / workers;

    let (tx, rx) = mpsc::channel::<f64>();
    // The scope owns the original sender, so the channel closes once every
    // task has reported.
    rayon::scope(move |s| {
        for (i, chunk) in facets.chunks(chunk_size).enumerate() {
            let tx = tx.clone();
            s.spawn(move |_| {
                let area = chunk_area(chunk);
                trace!("chunk {i}: {} facets, area {area}", chunk.len());
                // `rx` outlives the scope so the send can't fail.
                let _ = tx.send(area);
            });
        }
    });
    let total = rx.iter().fold(0.0, |total, area| total + area);
    debug!(
        "surface area of {} facets over {} chunks: {total}",
        facets.len(),
        (facets.len() + chunk_size - 1) / chunk_size
    );
    total
}

#[cfg(test)]
mod tests {
    use float_eq::assert_float_eq;

    use super::*;
    use crate::Vector3;

    fn unit_square_halves(n: usize) -> Vec<Facet> {
        (0..n)
            .map(|i| {
                let z = i as f64;
                Facet::new(
                    Vector3::new(0.0, 0.0, 1.0),
                    [
                        Vector3::new(0.0, 0.0, z),
                        Vector3::new(1.0, 0.0, z),
                        Vector3::new(0.0, 1.0, z),
                    ],
                )
            })
            .collect()
    }

    #[test]
    fn empty_mesh_has_no_area() {
        assert_eq!(surface_area(&[]), 0.0);
        assert_eq!(surface_area_with(&[], &ReducerConfig { workers: 4 }), 0.0);
    }

    #[test]
    fn sums_every_facet() {
        let facets = unit_square_halves(10);
        assert_eq!(surface_area_with(&facets, &ReducerConfig { workers: 1 }), 10.0);
        assert_eq!(surface_area(&facets), 10.0);
    }

    #[test]
    fn zero_workers_is_one_worker() {
        let facets = unit_square_halves(3);
        assert_eq!(surface_area_with(&facets, &ReducerConfig { workers: 0 }), 3.0);
    }

    #[test]
    fn more_workers_than_facets() {
        let facets = unit_square_halves(5);
        assert_eq!(surface_area_with(&facets, &ReducerConfig { workers: 64 }), 5.0);
    }

    #[test]
    fn huge_worker_count() {
        let facets = unit_square_halves(3);
        let config = ReducerConfig {
            workers: usize::MAX,
        };
        assert_eq!(surface_area_with(&facets, &config), 3.0);
    }

    #[test]
    fn uneven_partitions() {
        // 5 facets over 4 workers yields chunks of 2, 2 and 1, which must
        // not run past the end of the slice.
        let facets = unit_square_halves(5);
        for workers in 1..=8 {
            assert_eq!(surface_area_with(&facets, &ReducerConfig { workers }), 5.0);
        }
    }

    #[test]
    fn degenerate_facets_do_not_abort_the_reduction() {
        let mut facets = unit_square_halves(4);
        facets[1].vertices[1] = Vector3::new(f64::NAN, 0.0, 0.0);
        facets[2].vertices[2] = facets[2].vertices[0];
        let area = surface_area_with(&facets, &ReducerConfig { workers: 2 });
        assert_float_eq!(area, 2.0, abs <= 1e-12);
    }
}
