//! Random wave generator.
//!
//! Every curve has the same closed form; only its eight parameters are drawn
//! from the random source.

use rand::Rng;

/// Parameters of one generated wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    /// Horizontal stretch, in `[1, 3)`.
    pub x_scale: f64,
    /// Vertical stretch, in `[1, 3)`.
    pub y_scale: f64,
    /// Horizontal shift, in `[-2, 2)`.
    pub x_offset: f64,
    /// Vertical shift, in `[-5, 5)`.
    pub y_offset: f64,
    /// Shape coefficients, each in `[-1, 1)`.
    pub r: [f64; 4],
}

impl WaveParams {
    /// Draw a parameter set. Consumes exactly eight uniform samples.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut unit = || rng.random::<f64>();
        let x_scale = (unit() + 0.5) * 2.0;
        let y_scale = (unit() + 0.5) * 2.0;
        let x_offset = (unit() - 0.5) * 4.0;
        let y_offset = (unit() - 0.5) * 10.0;
        let r = [
            (unit() - 0.5) * 2.0,
            (unit() - 0.5) * 2.0,
            (unit() - 0.5) * 2.0,
            (unit() - 0.5) * 2.0,
        ];
        Self {
            x_scale,
            y_scale,
            x_offset,
            y_offset,
            r,
        }
    }

    /// X coordinate of point `i` out of `n`.
    pub fn x_at(&self, i: usize, n: usize) -> f64 {
        (i as f64 / n as f64 - 0.5) * 10.0 * self.x_scale + self.x_offset
    }

    /// Y value of the wave at `x`.
    pub fn y_at(&self, x: f64) -> f64 {
        let [r1, r2, r3, r4] = self.r;
        ((x * r1 * 5.0).sin() * ((x * r2).cos() * r4 * 3.0).sin()
            + r3 * (x.sin() * r4 * 2.0).cos())
            * self.y_scale
            + self.y_offset
    }

    /// Evaluate `n` points of the wave.
    pub fn points(&self, n: usize) -> Vec<(f64, f64)> {
        (0..n)
            .map(|i| {
                let x = self.x_at(i, n);
                (x, self.y_at(x))
            })
            .collect()
    }
}

/// Draw fresh parameters and evaluate `n` points.
pub fn random_wave<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<(f64, f64)> {
    WaveParams::sample(rng).points(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_POINT_COUNT;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn produces_the_requested_number_of_points() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_wave(&mut rng, DEFAULT_POINT_COUNT).len(), 50);
    }

    #[test]
    fn x_is_monotonic() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let points = random_wave(&mut rng, DEFAULT_POINT_COUNT);
            assert!(points.windows(2).all(|w| w[0].0 <= w[1].0));
        }
    }

    #[test]
    fn parameters_stay_in_their_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let p = WaveParams::sample(&mut rng);
            assert!((1.0..3.0).contains(&p.x_scale));
            assert!((1.0..3.0).contains(&p.y_scale));
            assert!((-2.0..2.0).contains(&p.x_offset));
            assert!((-5.0..5.0).contains(&p.y_offset));
            assert!(p.r.iter().all(|r| (-1.0..1.0).contains(r)));
        }
    }

    #[test]
    fn matches_the_closed_form() {
        let p = WaveParams {
            x_scale: 2.0,
            y_scale: 1.5,
            x_offset: 0.5,
            y_offset: -1.0,
            r: [0.2, -0.4, 0.6, 0.8],
        };
        let points = p.points(50);
        assert_relative_eq!(points[0].0, -9.5);
        assert_relative_eq!(points[25].0, 0.5);

        let x = points[10].0;
        let expected = ((x * 0.2 * 5.0).sin() * ((x * -0.4).cos() * 0.8 * 3.0).sin()
            + 0.6 * (x.sin() * 0.8 * 2.0).cos())
            * 1.5
            - 1.0;
        assert_relative_eq!(points[10].1, expected);
    }

    #[test]
    fn same_seed_same_curve() {
        let a = random_wave(&mut StdRng::seed_from_u64(9), 50);
        let b = random_wave(&mut StdRng::seed_from_u64(9), 50);
        assert_eq!(a, b);
    }
}
