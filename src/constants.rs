/// Absolute roughness of commercial steel pipe (m)
pub const ROUGHNESS: f64 = 0.00015;

/// Millimeters per meter, diameters are tabulated in mm
pub const MM_PER_M: f64 = 1000.0;
