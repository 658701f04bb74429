//! Scalar height functions `y = f(x, z)` for height-field grids
//!
//! Evaluated in `f64` and narrowed to `f32`.

/// Height field sampled at every grid vertex
#[derive(Clone, Copy, Debug)]
pub enum HeightFn {
    /// Always zero (a flat grid)
    Flat,
    /// Gaussian bump: `4 · e^-(x² + z²)`
    Gauss,
    /// Radially symmetric damped wave: `3 · sin(3r) / 3r`
    RotationalSinc,
    /// Elliptic paraboloid opening upward, sunk to `y = -5` at the origin
    EllipticParaboloid,
    /// `(√2·sin x)² + (√2·cos z)² - 1`
    RotationalParaboloid,
    /// Saddle: `(1.25x)² - (1.2z)² - 1`
    HyperbolicParaboloid,
    /// Caller-supplied function
    Custom(fn(f32, f32) -> f32),
}

impl HeightFn {
    /// Evaluate the height at planar position `(x, z)`
    pub fn eval(self, x: f32, z: f32) -> f32 {
        match self {
            Self::Flat => 0.0,
            Self::Gauss => gauss(x, z),
            Self::RotationalSinc => rotational_sinc(x, z),
            Self::EllipticParaboloid => elliptic_paraboloid(x, z),
            Self::RotationalParaboloid => rotational_paraboloid(x, z),
            Self::HyperbolicParaboloid => hyperbolic_paraboloid(x, z),
            Self::Custom(f) => f(x, z),
        }
    }
}

fn gauss(x: f32, z: f32) -> f32 {
    let (x, z) = (x as f64, z as f64);
    (4.0 * (-(x * x + z * z)).exp()) as f32
}

fn rotational_sinc(x: f32, z: f32) -> f32 {
    let r = (x as f64).hypot(z as f64);
    if r == 0.0 {
        // lim r→0 of 3·sin(3r)/(3r)
        return 3.0;
    }
    (3.0 * (3.0 * r).sin() / (3.0 * r)) as f32
}

fn elliptic_paraboloid(x: f32, z: f32) -> f32 {
    const A: f64 = 0.75;
    const B: f64 = 0.75;
    const P: f64 = 1.0;
    const Q: f64 = -5.0;

    let (x, z) = (x as f64, z as f64);
    ((A * x * x + B * z * z) / (2.0 * P) + Q) as f32
}

fn rotational_paraboloid(x: f32, z: f32) -> f32 {
    const U: f64 = 2.0;
    const Q: f64 = -1.0;

    let term_x = (U.sqrt() * (x as f64).sin()).powi(2);
    let term_z = (U.sqrt() * (z as f64).cos()).powi(2);
    (term_x + term_z + Q) as f32
}

fn hyperbolic_paraboloid(x: f32, z: f32) -> f32 {
    const Q: f64 = -1.0;

    let term_x = (x as f64 * 1.25).powi(2);
    let term_z = (z as f64 * 1.2).powi(2);
    (term_x - term_z + Q) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_gauss_peak_and_falloff() {
        assert!(approx_eq(HeightFn::Gauss.eval(0.0, 0.0), 4.0));
        assert!(approx_eq(HeightFn::Gauss.eval(1.0, 0.0), 4.0 * (-1.0f32).exp()));
        assert!(HeightFn::Gauss.eval(3.0, 3.0) < 1e-6);
    }

    #[test]
    fn test_rotational_sinc_is_finite_at_origin() {
        let y = HeightFn::RotationalSinc.eval(0.0, 0.0);
        assert!(y.is_finite());
        assert!(approx_eq(y, 3.0));
    }

    #[test]
    fn test_rotational_sinc_is_radially_symmetric() {
        let a = HeightFn::RotationalSinc.eval(1.0, 0.0);
        let b = HeightFn::RotationalSinc.eval(0.0, -1.0);
        let c = HeightFn::RotationalSinc.eval(0.6, 0.8);
        assert!(approx_eq(a, b));
        assert!(approx_eq(a, c));
    }

    #[test]
    fn test_elliptic_paraboloid_vertex() {
        assert!(approx_eq(HeightFn::EllipticParaboloid.eval(0.0, 0.0), -5.0));
        assert!(approx_eq(HeightFn::EllipticParaboloid.eval(2.0, 0.0), -3.5));
    }

    #[test]
    fn test_rotational_paraboloid_values() {
        // sin 0 = 0, cos 0 = 1 -> 0 + 2 - 1
        assert!(approx_eq(HeightFn::RotationalParaboloid.eval(0.0, 0.0), 1.0));
    }

    #[test]
    fn test_saddle_signs() {
        let saddle = HeightFn::HyperbolicParaboloid;
        assert!(approx_eq(saddle.eval(0.0, 0.0), -1.0));
        assert!(saddle.eval(2.0, 0.0) > -1.0);
        assert!(saddle.eval(0.0, 2.0) < -1.0);
    }

    #[test]
    fn test_custom_and_flat() {
        fn ramp(x: f32, _z: f32) -> f32 {
            2.0 * x
        }
        assert!(approx_eq(HeightFn::Custom(ramp).eval(1.5, 9.0), 3.0));
        assert_eq!(HeightFn::Flat.eval(7.0, -7.0), 0.0);
    }
}
