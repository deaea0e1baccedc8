//! Background star field animation state
//!
//! The drifting, twinkling backdrop behind every screen, kept as plain
//! state: whoever drives the redraw calls [`Starfield::step`] once per
//! frame, and the field dies with the session that owns it, so no
//! per-frame callback can outlive its screen.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One background star
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Fall speed in units per frame
    pub speed: f32,
    /// Brightness, clamped to [0.2, 1.0] once animated
    pub opacity: f32,
}

/// The animated star field
#[derive(Debug)]
pub struct Starfield {
    width: f32,
    height: f32,
    stars: Vec<Star>,
    rng: ChaCha8Rng,
}

impl Starfield {
    /// Scatter `count` stars over a `width` x `height` field
    pub fn new(width: f32, height: f32, count: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let stars = (0..count)
            .map(|_| Star {
                x: rng.gen::<f32>() * width,
                y: rng.gen::<f32>() * height,
                size: rng.gen::<f32>() * 2.0,
                speed: rng.gen::<f32>() * 0.5,
                opacity: rng.gen::<f32>(),
            })
            .collect();
        Self {
            width,
            height,
            stars,
            rng,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Advance one frame: stars fall, wrap at the bottom, and twinkle
    pub fn step(&mut self) {
        for star in &mut self.stars {
            star.y += star.speed;
            if star.y > self.height {
                star.y = 0.0;
            }
            star.opacity += (self.rng.gen::<f32>() - 0.5) * 0.05;
            star.opacity = star.opacity.clamp(0.2, 1.0);
        }
    }

    /// Re-bound the field after a viewport change
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        for star in &mut self.stars {
            star.x = star.x.min(width);
            star.y = star.y.min(height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_spawn_in_bounds() {
        let field = Starfield::new(800.0, 600.0, 150, 42);
        assert_eq!(field.stars().len(), 150);
        for star in field.stars() {
            assert!((0.0..=800.0).contains(&star.x));
            assert!((0.0..=600.0).contains(&star.y));
        }
    }

    #[test]
    fn test_step_keeps_stars_in_bounds_and_clamped() {
        let mut field = Starfield::new(800.0, 600.0, 150, 42);
        for _ in 0..5000 {
            field.step();
        }
        for star in field.stars() {
            assert!((0.0..=600.0).contains(&star.y));
            assert!((0.2..=1.0).contains(&star.opacity));
        }
    }

    #[test]
    fn test_same_seed_same_sky() {
        let mut a = Starfield::new(100.0, 100.0, 20, 7);
        let mut b = Starfield::new(100.0, 100.0, 20, 7);
        for _ in 0..100 {
            a.step();
            b.step();
        }
        for (sa, sb) in a.stars().iter().zip(b.stars()) {
            assert_eq!(sa.y, sb.y);
            assert_eq!(sa.opacity, sb.opacity);
        }
    }

    #[test]
    fn test_resize_pulls_strays_inside() {
        let mut field = Starfield::new(800.0, 600.0, 50, 1);
        field.resize(100.0, 100.0);
        for star in field.stars() {
            assert!(star.x <= 100.0);
            assert!(star.y <= 100.0);
        }
    }
}
