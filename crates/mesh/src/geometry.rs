use cgmath::InnerSpace;

pub type Vector3 = cgmath::Vector3<f64>;

// We rely on Vector3 being repr(c).
static_assertions::assert_eq_size!(Vector3, [f64; 3]);
static_assertions::assert_eq_align!(Vector3, f64);

/// A single triangular face of a mesh.
///
/// The normal is stored as declared by the source file. It is never
/// recomputed from the vertex winding.
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Facet {
    pub normal: Vector3,
    pub vertices: [Vector3; 3],
}

impl Facet {
    pub fn new(normal: Vector3, vertices: [Vector3; 3]) -> Self {
        Self { normal, vertices }
    }

    /// Returns the textbook triangle area, `0.5 * |AB x AC|`.
    ///
    /// Note this is *not* what the surface area reduction sums; see
    /// [`facet_area`].
    pub fn triangle_area(&self) -> f64 {
        0.5 * facet_area(self)
    }
}

impl std::default::Default for Facet {
    fn default() -> Self {
        let zero = Vector3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        };
        Self {
            normal: zero,
            vertices: [zero; 3],
        }
    }
}

fn is_finite(v: &Vector3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

/// Computes the area contribution of a single facet.
///
/// With `AB = v1 - v0` and `AC = v2 - v0` this is `|AB x AC|`, the area of
/// the parallelogram spanned by the two edges. The conventional `0.5` factor
/// is deliberately left out so results stay comparable with values produced
/// by earlier versions of this tool.
///
/// Facets whose cross product is not finite, or whose squared magnitude
/// overflows, contribute `0.0`.
pub fn facet_area(facet: &Facet) -> f64 {
    let [a, b, c] = facet.vertices;
    let cp = (b - a).cross(c - a);
    if !is_finite(&cp) {
        return 0.0;
    }

    let magnitude2 = cp.magnitude2();
    if magnitude2.is_infinite() {
        return 0.0;
    }
    magnitude2.sqrt()
}
