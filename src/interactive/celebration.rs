//! One-shot confetti burst for a won game
//!
//! Particles live in unit screen space (0..1 on both axes) so the burst
//! does not depend on the terminal size. Each particle falls once and is
//! dropped when it leaves the screen; nothing is respawned.

use rand::Rng;
use std::time::Duration;

/// Glyphs a particle can be drawn with
pub const GLYPHS: [char; 6] = ['▪', '■', '●', '◆', '▲', '*'];

/// Number of distinct particle colors
pub const PALETTE_SIZE: usize = 6;

/// Fastest downward speed, in screen heights per second
const TERMINAL_VELOCITY: f32 = 0.45;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub glyph: char,
    /// Index into the renderer's palette
    pub color: usize,
}

#[derive(Debug, Clone)]
pub struct Celebration {
    particles: Vec<Particle>,
    gravity: f32,
    elapsed: Duration,
}

impl Celebration {
    /// Launch `count` particles from just above the top edge
    pub fn burst<R: Rng + ?Sized>(count: usize, gravity: f32, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.random_range(0.0..1.0),
                // staggered so the burst rains down instead of landing at once
                y: rng.random_range(-0.6..0.0),
                vx: rng.random_range(-0.08..0.08),
                vy: rng.random_range(0.0..0.2),
                glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
                color: rng.random_range(0..PALETTE_SIZE),
            })
            .collect();

        Self {
            particles,
            gravity,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance the simulation by `dt`
    pub fn tick(&mut self, dt: Duration) {
        let secs = dt.as_secs_f32();
        self.elapsed += dt;

        for p in &mut self.particles {
            p.vy = (p.vy + self.gravity * secs).min(TERMINAL_VELOCITY);
            p.x += p.vx * secs;
            p.y += p.vy * secs;
        }

        self.particles
            .retain(|p| (-1.0..1.0).contains(&p.y) && (-0.1..1.1).contains(&p.x));
    }

    /// True once every particle has left the screen
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn burst(count: usize) -> Celebration {
        let mut rng = StdRng::seed_from_u64(17);
        Celebration::burst(count, 0.6, &mut rng)
    }

    #[test]
    fn burst_spawns_requested_particles() {
        let c = burst(250);
        assert_eq!(c.particles().len(), 250);
        assert!(!c.is_finished());
        assert!(c.particles().iter().all(|p| p.y < 0.0 && p.color < PALETTE_SIZE));
    }

    #[test]
    fn particles_fall() {
        let mut c = burst(50);
        let before: f32 = c.particles().iter().map(|p| p.y).sum();
        c.tick(Duration::from_millis(100));
        let after: f32 = c.particles().iter().map(|p| p.y).sum();
        assert!(after > before);
    }

    #[test]
    fn burst_is_one_shot() {
        let mut c = burst(100);
        let mut previous = c.particles().len();
        for _ in 0..400 {
            c.tick(Duration::from_millis(33));
            // never respawns
            assert!(c.particles().len() <= previous);
            previous = c.particles().len();
        }
        assert!(c.is_finished());
        assert!(c.elapsed() >= Duration::from_secs(13));
    }

    #[test]
    fn particles_leaving_through_the_top_are_dropped() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut c = Celebration::burst(100, -0.6, &mut rng);
        for _ in 0..400 {
            c.tick(Duration::from_millis(33));
        }
        assert!(c.is_finished());
    }

    #[test]
    fn empty_burst_is_finished() {
        assert!(burst(0).is_finished());
    }
}
