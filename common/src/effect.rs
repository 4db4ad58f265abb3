//! Declarative description of the response animation.
//!
//! Cards hand one of these to the front end while they are in the responded
//! state. Nothing here animates anything; the HTML page turns it into CSS
//! keyframes and the terminal client just notes that it is playing.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

pub const PARTICLE_COUNT: usize = 8;
pub const PARTICLE_RADIUS: f64 = 60.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEffect {
    pub pulse: Pulse,
    pub ripples: Vec<Ripple>,
    pub particles: Vec<Particle>,
}

/// Scale keyframes applied to the button itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pulse {
    pub scale: Vec<f64>,
    pub duration_ms: u64,
}

/// An expanding, fading overlay on the button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ripple {
    pub scale_from: f64,
    pub scale_to: f64,
    pub opacity_from: f64,
    pub opacity_to: f64,
    pub duration_ms: u64,
    pub delay_ms: u64,
}

/// A dot flying out from the button center to `(dx, dy)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub dx: f64,
    pub dy: f64,
    pub scale: Vec<f64>,
    pub opacity: Vec<f64>,
    pub duration_ms: u64,
    pub delay_ms: u64,
}

impl ResponseEffect {
    pub fn new() -> Self {
        let ripples = vec![
            Ripple {
                scale_from: 0.0,
                scale_to: 2.5,
                opacity_from: 0.8,
                opacity_to: 0.0,
                duration_ms: 600,
                delay_ms: 0,
            },
            Ripple {
                scale_from: 0.0,
                scale_to: 3.0,
                opacity_from: 0.6,
                opacity_to: 0.0,
                duration_ms: 800,
                delay_ms: 100,
            },
        ];

        let particles = (0..PARTICLE_COUNT)
            .map(|i| {
                let angle = i as f64 / PARTICLE_COUNT as f64 * TAU;
                Particle {
                    dx: angle.cos() * PARTICLE_RADIUS,
                    dy: angle.sin() * PARTICLE_RADIUS,
                    scale: vec![0.0, 1.0, 0.0],
                    opacity: vec![1.0, 1.0, 0.0],
                    duration_ms: 800,
                    delay_ms: 100,
                }
            })
            .collect();

        Self {
            pulse: Pulse {
                scale: vec![1.0, 1.02, 1.0],
                duration_ms: 300,
            },
            ripples,
            particles,
        }
    }

    /// Longest delay + duration across all parts.
    pub fn total_duration_ms(&self) -> u64 {
        let ripples = self.ripples.iter().map(|r| r.delay_ms + r.duration_ms);
        let particles = self.particles.iter().map(|p| p.delay_ms + p.duration_ms);
        ripples
            .chain(particles)
            .fold(self.pulse.duration_ms, u64::max)
    }
}

impl Default for ResponseEffect {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_two_ripples_eight_particles() {
        let effect = ResponseEffect::new();
        assert_eq!(effect.ripples.len(), 2);
        assert_eq!(effect.particles.len(), PARTICLE_COUNT);
        assert_eq!(effect.pulse.scale, vec![1.0, 1.02, 1.0]);
    }

    #[test]
    fn test_particles_spread_evenly_on_circle() {
        let effect = ResponseEffect::new();
        let first = &effect.particles[0];
        assert!(close(first.dx, 60.0) && close(first.dy, 0.0));

        let quarter = &effect.particles[2];
        assert!(close(quarter.dx, 0.0) && close(quarter.dy, 60.0));

        let half = &effect.particles[4];
        assert!(close(half.dx, -60.0) && close(half.dy, 0.0));

        for p in &effect.particles {
            assert!(close(p.dx.hypot(p.dy), PARTICLE_RADIUS));
        }
    }

    #[test]
    fn test_effect_fits_inside_reset_window() {
        let effect = ResponseEffect::new();
        assert_eq!(effect.total_duration_ms(), 900);
        assert!(effect.total_duration_ms() < crate::RESPONSE_RESET.as_millis() as u64);
    }
}
