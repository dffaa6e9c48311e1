//! Utils

use super::{Color, Vec3};
use image::Rgb;
use rand::Rng;

/// Random vector with every component uniformly drawn between `min` and `max`
///
/// Equal bounds pin that component.
pub fn gen_random(rng: &mut impl Rng, min: &Vec3, max: &Vec3) -> Vec3 {
    let mut out = *min;
    for i in 0..3 {
        out[i] += (max[i] - min[i]) * rng.gen::<f64>();
    }
    out
}

/// Quantize a colour to 8 bits per channel
pub fn get_pixel(color: &Color) -> Rgb<u8> {
    Rgb([
        scale_color(color[0]),
        scale_color(color[1]),
        scale_color(color[2]),
    ])
}

/// scale the color to between 0 and 255, dropping the fraction
fn scale_color(val: f64) -> u8 {
    (255.0 * val.clamp(0.0, 1.0)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn pixels_are_clamped_and_truncated() {
        assert_eq!(get_pixel(&Color::new(0.0, 0.5, 1.0)), Rgb([0, 127, 255]));
        assert_eq!(get_pixel(&Color::new(-0.3, 1.7, 0.999)), Rgb([0, 255, 254]));
        // NaN saturates to zero
        assert_eq!(get_pixel(&Color::new(f64::NAN, 0.0, 0.0)), Rgb([0, 0, 0]));
    }

    #[test]
    fn random_vectors_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let min = Vec3::new(-1.0, 2.0, 5.0);
        let max = Vec3::new(1.0, 2.0, 6.0);
        for _ in 0..100 {
            let v = gen_random(&mut rng, &min, &max);
            assert!((-1.0..1.0).contains(&v.x()));
            assert_eq!(v.y(), 2.0);
            assert!((5.0..6.0).contains(&v.z()));
        }
    }
}
