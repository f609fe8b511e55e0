//! Ambient particle fields: snowfall, stars, firework bursts.
//!
//! Purely decorative. Each field seeds randomized per-particle parameters
//! at construction, is advanced every tick, and never touches application
//! state. Fields are plain values owned by the state that created them, so
//! unmounting the owner stops the loop.
//!
//! Coordinates are fractional (`0..1` across and down the field); the
//! renderer scales them to whatever area it draws into.

use std::f32::consts::TAU;
use std::time::Duration;

use rand::Rng;

/// One snowflake.
#[derive(Debug, Clone)]
pub struct Snowflake {
    pub x: f32,
    pub y: f32,
    /// Relative size, `0..1`; picks the glyph and brightness.
    pub size: f32,
    /// Fall speed in field-heights per second.
    speed: f32,
    /// Horizontal drift in field-widths per second.
    drift: f32,
    /// Pastel hue in degrees.
    pub hue: u16,
}

impl Snowflake {
    fn seeded(rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen_range(0.0..1.0),
            // Start anywhere above or inside the field so the first frames
            // are not a synchronized curtain.
            y: rng.gen_range(-1.0..1.0),
            size: rng.gen_range(0.0..1.0f32),
            speed: rng.gen_range(0.03..0.12),
            drift: rng.gen_range(-0.02..0.02),
            hue: rng.gen_range(0..360),
        }
    }
}

/// A continuously falling snow field.
#[derive(Debug, Clone)]
pub struct SnowField {
    flakes: Vec<Snowflake>,
}

impl SnowField {
    #[must_use]
    pub fn new(count: usize) -> Self {
        let mut rng = rand::thread_rng();
        let flakes = (0..count).map(|_| Snowflake::seeded(&mut rng)).collect();
        Self { flakes }
    }

    pub fn advance(&mut self, delta: Duration) {
        let dt = delta.as_secs_f32();
        let mut rng = rand::thread_rng();
        for flake in &mut self.flakes {
            flake.y += flake.speed * dt;
            flake.x += flake.drift * dt;
            if flake.y > 1.0 {
                flake.y = -0.02;
                flake.x = rng.gen_range(0.0..1.0);
            }
            flake.x = flake.x.rem_euclid(1.0);
        }
    }

    #[must_use]
    pub fn flakes(&self) -> &[Snowflake] {
        &self.flakes
    }
}

#[derive(Debug, Clone)]
struct Star {
    x: f32,
    y: f32,
    phase: f32,
}

/// A blinking star field for the intro sky.
#[derive(Debug, Clone)]
pub struct StarField {
    stars: Vec<Star>,
    elapsed: f32,
}

const STAR_PULSE_SECS: f32 = 3.0;

impl StarField {
    #[must_use]
    pub fn new(count: usize) -> Self {
        let mut rng = rand::thread_rng();
        let stars = (0..count)
            .map(|_| Star {
                x: rng.gen_range(0.0..1.0),
                y: rng.gen_range(0.0..1.0),
                phase: rng.gen_range(0.0..TAU),
            })
            .collect();
        Self {
            stars,
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed += delta.as_secs_f32();
    }

    /// `(x, y, brightness)` per star; brightness pulses in `0.3..=1.0`.
    pub fn stars(&self) -> impl Iterator<Item = (f32, f32, f32)> + '_ {
        let t = self.elapsed;
        self.stars.iter().map(move |star| {
            let pulse = (TAU * t / STAR_PULSE_SECS + star.phase).sin();
            (star.x, star.y, 0.65 + 0.35 * pulse)
        })
    }
}

/// Color class of a firework spark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparkColor {
    Gold,
    White,
    Silver,
}

#[derive(Debug, Clone)]
struct FireworkParticle {
    angle: f32,
    speed: f32,
    delay: f32,
    color: SparkColor,
}

/// A rendered spark: fractional offsets from the burst center.
#[derive(Debug, Clone, Copy)]
pub struct Spark {
    pub dx: f32,
    pub dy: f32,
    /// Fades `1.0 -> 0.0` over the spark's life.
    pub intensity: f32,
    pub color: SparkColor,
}

const SPARK_LIFE_SECS: f32 = 2.5;
const SPARK_MAX_DELAY_SECS: f32 = 0.2;

/// A one-shot radial firework burst.
///
/// Sparks leave the center at `index * 12` degrees with randomized speed
/// and a small randomized start delay, then droop under gravity while
/// fading out.
#[derive(Debug, Clone)]
pub struct FireworkBurst {
    particles: Vec<FireworkParticle>,
    elapsed: f32,
}

impl FireworkBurst {
    #[must_use]
    pub fn new(count: usize) -> Self {
        let mut rng = rand::thread_rng();
        let particles = (0..count)
            .map(|index| FireworkParticle {
                angle: (index as f32 * 12.0).to_radians(),
                speed: rng.gen_range(0.5..1.0),
                delay: rng.gen_range(0.0..SPARK_MAX_DELAY_SECS),
                color: match index % 3 {
                    0 => SparkColor::Gold,
                    1 => SparkColor::White,
                    _ => SparkColor::Silver,
                },
            })
            .collect();
        Self {
            particles,
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed += delta.as_secs_f32();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= SPARK_LIFE_SECS + SPARK_MAX_DELAY_SECS
    }

    /// Live sparks at the current instant.
    pub fn sparks(&self) -> impl Iterator<Item = Spark> + '_ {
        self.particles.iter().filter_map(move |p| {
            let t = ((self.elapsed - p.delay) / SPARK_LIFE_SECS).clamp(0.0, 1.0);
            if t <= 0.0 || t >= 1.0 {
                return None;
            }
            // Radial flight with a gravity droop towards the end.
            let reach = p.speed * t;
            let droop = 0.25 * t * t;
            Some(Spark {
                dx: p.angle.cos() * reach,
                dy: p.angle.sin() * reach + droop,
                intensity: 1.0 - t,
                color: p.color,
            })
        })
    }
}
