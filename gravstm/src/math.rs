use glam::DVec3;

pub const PI: f64 = std::f64::consts::PI;

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub fn apply<T: Copy, R>(x: &[T], func: impl Fn(T) -> R) -> Vec<R> {
    x.iter().map(|x| func(*x)).collect()
}

pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![a];
    }
    if n == 2 {
        return vec![a, b];
    }
    (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64;
            lerp(a, b, t)
        })
        .collect()
}

/// `n` values from `10^a` to `10^b`, evenly spaced in the exponent.
pub fn logspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    apply(&linspace(a, b, n), |e| 10f64.powf(e))
}

/// Roughly uniform unit directions on the sphere (Fibonacci lattice).
pub fn sphere_directions(n: usize) -> Vec<DVec3> {
    let golden = PI * (3.0 - 5f64.sqrt());
    (0..n)
        .map(|i| {
            let z = if n < 2 {
                0.0
            } else {
                1.0 - 2.0 * i as f64 / (n - 1) as f64
            };
            let rho = (1.0 - z * z).max(0.0).sqrt();
            let a = golden * i as f64;
            DVec3::new(rho * a.cos(), rho * a.sin(), z)
        })
        .collect()
}

/// max |x - y| over two 3x3 matrices, both indexed `[col][row]`.
pub fn max_abs_diff(x: &[[f64; 3]; 3], y: &[[f64; 3]; 3]) -> f64 {
    x.iter()
        .flatten()
        .zip(y.iter().flatten())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}
