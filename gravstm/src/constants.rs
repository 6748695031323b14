/// Reference distance unit, Earth equatorial radius of the EGM2008 model (km).
pub const DU: f64 = 6378.1363;

/// Earth gravitational parameter of the EGM2008 model (km^3/s^2).
pub const MU: f64 = 398600.4415;

/// Unnormalized J2 zonal coefficient (WGS84).
pub const J2: f64 = 1.08263e-3;

/// Rows in the batched state block; matches the dimension of the STM.
pub const STM_ROWS: usize = 6;

/// Components of one position/velocity row.
pub const ROW_LEN: usize = 6;

/// Default central-difference step, in distance units (km).
pub const DEFAULT_STEP: f64 = 1e-3;

/// Highest degree the degree surface ever asks for.
pub const MAX_TABULATED_DEGREE: u32 = 100;
