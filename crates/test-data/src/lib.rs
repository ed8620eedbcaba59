pub struct TestModel {
    pub bytes: &'static [u8],
    pub facet_count: usize,
    /// Expected surface area when reduced by a single worker.
    pub surface_area: f64,
}

/// A 20mm cube, 2 facets per side, in ASCII encoding.
pub const STL_CUBE_ASCII: TestModel = TestModel {
    bytes: include_bytes!("../../../res/cube/cube-ascii.stl"),
    facet_count: 12,
    surface_area: 4800.0,
};

/// The same cube as [`STL_CUBE_ASCII`] in binary encoding, with every field
/// stored as a 64-bit float.
pub const STL_CUBE_BINARY: TestModel = TestModel {
    bytes: include_bytes!("../../../res/cube/cube-bin.stl"),
    facet_count: 12,
    surface_area: 4800.0,
};

/// A low-poly sphere of radius 1.1.
pub const STL_MOON_ASCII: TestModel = TestModel {
    bytes: include_bytes!("../../../res/moon/moon-ascii.stl"),
    facet_count: 116,
    surface_area: 26.227146368059863,
};
