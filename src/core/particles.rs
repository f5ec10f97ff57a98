//! Particle field behind the home page hero
//!
//! A drifting set of dots joined by faint lines when they are close, with
//! brighter lines to the pointer while it hovers ("grab"). The simulation is
//! plain data; the canvas renderer in `ui::particles` only reads it.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Tuning knobs for the field
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleOptions {
    /// Particles per density area
    pub count: u32,
    /// Area (in thousands of px²) that holds `count` particles
    pub density_area: f64,
    pub link_distance: f64,
    pub link_opacity: f64,
    /// Maximum drift speed in px per frame
    pub speed: f64,
    pub size_min: f64,
    pub size_max: f64,
    pub opacity_min: f64,
    pub opacity_max: f64,
    /// Opacity change per frame, in hundredths
    pub opacity_speed: f64,
    pub grab_distance: f64,
    pub grab_link_opacity: f64,
    pub fps_limit: u32,
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            count: 60,
            density_area: 900.0,
            link_distance: 150.0,
            link_opacity: 0.15,
            speed: 0.8,
            size_min: 1.0,
            size_max: 3.0,
            opacity_min: 0.1,
            opacity_max: 0.4,
            opacity_speed: 0.5,
            grab_distance: 140.0,
            grab_link_opacity: 0.4,
            fps_limit: 60,
        }
    }
}

impl ParticleOptions {
    /// Number of particles for a canvas of the given size
    pub fn particles_for(&self, width: f64, height: f64) -> usize {
        if width <= 0.0 || height <= 0.0 || self.density_area <= 0.0 {
            return 0;
        }
        let factor = (width * height) / (self.density_area * 1000.0);
        (f64::from(self.count) * factor).round().max(1.0) as usize
    }

    /// Minimum time between rendered frames
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / f64::from(self.fps_limit.max(1))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub opacity: f64,
    fading: bool,
}

/// Line between two particles, or between a particle and the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub alpha: f64,
}

/// Opacity of a link of length `distance`; zero at or past `max_distance`
pub fn link_alpha(distance: f64, max_distance: f64, opacity: f64) -> f64 {
    if max_distance <= 0.0 || distance >= max_distance {
        0.0
    } else {
        opacity * (1.0 - distance / max_distance)
    }
}

pub struct ParticleField {
    options: ParticleOptions,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: Option<(f64, f64)>,
    rng: SmallRng,
}

impl ParticleField {
    pub fn new(options: ParticleOptions, width: f64, height: f64, seed: u64) -> Self {
        let mut field = Self {
            options,
            width: width.max(0.0),
            height: height.max(0.0),
            particles: Vec::new(),
            pointer: None,
            rng: SmallRng::seed_from_u64(seed),
        };
        field.fill();
        field
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Track the pointer in canvas coordinates; `None` when it leaves
    pub fn set_pointer(&mut self, pointer: Option<(f64, f64)>) {
        self.pointer = pointer;
    }

    /// Adapt to a new canvas size, keeping existing particles where possible
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let wanted = self.options.particles_for(self.width, self.height);
        self.particles.truncate(wanted);
        for p in &mut self.particles {
            p.x = wrap(p.x, self.width);
            p.y = wrap(p.y, self.height);
        }
        self.fill();
    }

    /// Advance by `frames` (1.0 = one frame at the fps limit)
    pub fn step(&mut self, frames: f64) {
        let frames = if frames.is_finite() {
            frames.clamp(0.0, 10.0)
        } else {
            1.0
        };
        let (min, max) = (self.options.opacity_min, self.options.opacity_max);
        let fade = self.options.opacity_speed / 100.0 * frames;

        for p in &mut self.particles {
            p.x = wrap(p.x + p.vx * frames, self.width);
            p.y = wrap(p.y + p.vy * frames, self.height);

            if p.fading {
                p.opacity -= fade;
                if p.opacity <= min {
                    p.opacity = min;
                    p.fading = false;
                }
            } else {
                p.opacity += fade;
                if p.opacity >= max {
                    p.opacity = max;
                    p.fading = true;
                }
            }
        }
    }

    /// Lines between particles closer than the link distance
    pub fn links(&self) -> Vec<Link> {
        let max = self.options.link_distance;
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in self.particles.iter().skip(i + 1) {
                let alpha = link_alpha(distance(a, b), max, self.options.link_opacity);
                if alpha > 0.0 {
                    links.push(Link {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        alpha,
                    });
                }
            }
        }
        links
    }

    /// Lines from the pointer to every particle inside the grab radius
    pub fn grab_links(&self) -> Vec<Link> {
        let Some((px, py)) = self.pointer else {
            return Vec::new();
        };
        self.particles
            .iter()
            .filter_map(|p| {
                let d = ((p.x - px).powi(2) + (p.y - py).powi(2)).sqrt();
                let alpha = link_alpha(
                    d,
                    self.options.grab_distance,
                    self.options.grab_link_opacity,
                );
                (alpha > 0.0).then_some(Link {
                    from: (px, py),
                    to: (p.x, p.y),
                    alpha,
                })
            })
            .collect()
    }

    fn fill(&mut self) {
        let wanted = self.options.particles_for(self.width, self.height);
        while self.particles.len() < wanted {
            let particle = self.spawn();
            self.particles.push(particle);
        }
    }

    fn spawn(&mut self) -> Particle {
        let o = &self.options;
        let angle = self.rng.gen_range(0.0..std::f64::consts::TAU);
        let speed = o.speed * self.rng.gen_range(0.1..=1.0);
        let x = if self.width > 0.0 {
            self.rng.gen_range(0.0..self.width)
        } else {
            0.0
        };
        let y = if self.height > 0.0 {
            self.rng.gen_range(0.0..self.height)
        } else {
            0.0
        };
        Particle {
            x,
            y,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            radius: self.rng.gen_range(o.size_min..=o.size_max),
            opacity: self.rng.gen_range(o.opacity_min..=o.opacity_max),
            fading: self.rng.gen_bool(0.5),
        }
    }
}

fn distance(a: &Particle, b: &Particle) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Particles leaving one edge re-enter from the opposite one
fn wrap(value: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        0.0
    } else {
        let wrapped = value.rem_euclid(extent);
        if wrapped >= extent { 0.0 } else { wrapped }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(width: f64, height: f64) -> ParticleField {
        ParticleField::new(ParticleOptions::default(), width, height, 7)
    }

    #[test]
    fn test_particle_count_scales_with_area() {
        let options = ParticleOptions::default();
        assert_eq!(options.particles_for(900.0, 1000.0), 60);
        assert_eq!(options.particles_for(1800.0, 1000.0), 120);
        assert_eq!(options.particles_for(10.0, 10.0), 1);
        assert_eq!(options.particles_for(0.0, 1000.0), 0);
    }

    #[test]
    fn test_frame_interval() {
        let options = ParticleOptions::default();
        assert!((options.frame_interval_ms() - 16.666).abs() < 0.01);
    }

    #[test]
    fn test_spawned_particles_respect_options() {
        let field = field(900.0, 1000.0);
        assert_eq!(field.particles().len(), 60);
        for p in field.particles() {
            assert!((0.0..900.0).contains(&p.x));
            assert!((0.0..1000.0).contains(&p.y));
            assert!((1.0..=3.0).contains(&p.radius));
            assert!((0.1..=0.4).contains(&p.opacity));
            assert!((p.vx.powi(2) + p.vy.powi(2)).sqrt() <= 0.8 + 1e-9);
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = field(640.0, 480.0);
        let b = field(640.0, 480.0);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_particles_stay_in_bounds() {
        let mut field = field(300.0, 200.0);
        for _ in 0..2000 {
            field.step(1.0);
        }
        for p in field.particles() {
            assert!((0.0..300.0).contains(&p.x), "x out of bounds: {}", p.x);
            assert!((0.0..200.0).contains(&p.y), "y out of bounds: {}", p.y);
            assert!((0.1..=0.4).contains(&p.opacity));
        }
    }

    #[test]
    fn test_wrap_reenters_from_opposite_edge() {
        assert_eq!(wrap(-1.0, 100.0), 99.0);
        assert_eq!(wrap(101.0, 100.0), 1.0);
        assert_eq!(wrap(50.0, 100.0), 50.0);
        assert_eq!(wrap(50.0, 0.0), 0.0);
    }

    #[test]
    fn test_link_alpha_falls_off_with_distance() {
        assert!((link_alpha(0.0, 150.0, 0.15) - 0.15).abs() < 1e-12);
        assert!(link_alpha(75.0, 150.0, 0.15) > 0.0);
        assert_eq!(link_alpha(150.0, 150.0, 0.15), 0.0);
        assert_eq!(link_alpha(400.0, 150.0, 0.15), 0.0);
    }

    #[test]
    fn test_links_only_join_close_particles() {
        let field = field(1200.0, 900.0);
        for link in field.links() {
            let d = ((link.from.0 - link.to.0).powi(2) + (link.from.1 - link.to.1).powi(2)).sqrt();
            assert!(d < 150.0);
            assert!(link.alpha > 0.0 && link.alpha <= 0.15);
        }
    }

    #[test]
    fn test_grab_links_need_pointer() {
        let mut field = field(900.0, 1000.0);
        assert!(field.grab_links().is_empty());

        field.set_pointer(Some((450.0, 500.0)));
        for link in field.grab_links() {
            assert_eq!(link.from, (450.0, 500.0));
            let d = ((link.to.0 - 450.0).powi(2) + (link.to.1 - 500.0).powi(2)).sqrt();
            assert!(d < 140.0);
        }

        field.set_pointer(None);
        assert!(field.grab_links().is_empty());
    }

    #[test]
    fn test_resize_adjusts_population() {
        let mut field = field(1800.0, 1000.0);
        assert_eq!(field.particles().len(), 120);

        field.resize(900.0, 500.0);
        assert_eq!(field.particles().len(), 30);
        for p in field.particles() {
            assert!(p.x < 900.0 && p.y < 500.0);
        }

        field.resize(900.0, 1000.0);
        assert_eq!(field.particles().len(), 60);
    }
}
