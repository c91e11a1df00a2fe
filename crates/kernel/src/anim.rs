//! Time-driven interpolation with exclusive per-field ownership.
//!
//! The [`Animator`] is a small table keyed by [`Field`]. Starting a tween on
//! a field replaces the tween that owned it, so two animations can never
//! write the same field. Different fields animate independently: a camera
//! snap and a player move overlap freely.
//!
//! [`Delays`] holds the one-shot timers (goal celebration, reset rebuild).

use glam::Vec3;
use std::collections::BTreeMap;

/// Identity of an animatable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    CameraAzimuth,
    CameraPolar,
    CameraRadius,
    PlayerPosition,
    PlayerScale,
}

/// An animatable value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Scalar(f32),
    Vector(Vec3),
}

impl Value {
    fn lerp(self, to: Value, t: f32) -> Value {
        match (self, to) {
            (Value::Scalar(a), Value::Scalar(b)) => Value::Scalar(a + (b - a) * t),
            (Value::Vector(a), Value::Vector(b)) => Value::Vector(a.lerp(b, t)),
            // Mismatched kinds never blend.
            (_, b) => b,
        }
    }
}

/// Easing curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out.
    Power1Out,
    /// Quadratic ease-in-out.
    Power1InOut,
    /// Quintic ease-out.
    Power4Out,
    /// Overshoots past the target by the given amount, then settles.
    BackOut(f32),
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power1Out => 1.0 - (1.0 - t).powi(2),
            Easing::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::Power4Out => 1.0 - (1.0 - t).powi(5),
            Easing::BackOut(s) => {
                let p = t - 1.0;
                p * p * ((s + 1.0) * p + s) + 1.0
            }
        }
    }
}

/// What the owner should do when a tween completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    MoveFinished,
    SnapSettled,
}

/// A single interpolation from `from` to `to`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub from: Value,
    pub to: Value,
    /// Seconds per pass.
    pub duration: f32,
    pub easing: Easing,
    /// Extra passes after the first.
    pub repeat: u32,
    /// Alternate passes run backwards.
    pub yoyo: bool,
    pub cue: Option<Cue>,
    elapsed: f32,
}

impl Tween {
    pub fn new(from: Value, to: Value, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            repeat: 0,
            yoyo: false,
            cue: None,
            elapsed: 0.0,
        }
    }

    pub fn scalar(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self::new(Value::Scalar(from), Value::Scalar(to), duration, easing)
    }

    /// Swing out to `to` and back, `repeat + 1` passes in total.
    pub fn yoyo(mut self, repeat: u32) -> Self {
        self.repeat = repeat;
        self.yoyo = true;
        self
    }

    pub fn with_cue(mut self, cue: Cue) -> Self {
        self.cue = Some(cue);
        self
    }

    pub fn total_duration(&self) -> f32 {
        self.duration * (self.repeat + 1) as f32
    }

    pub fn is_finished(&self) -> bool {
        self.duration <= 0.0 || self.elapsed >= self.total_duration()
    }

    /// Exact resting value once every pass has played.
    pub fn final_value(&self) -> Value {
        if self.yoyo && self.repeat % 2 == 1 {
            self.from
        } else {
            self.to
        }
    }

    pub fn value(&self) -> Value {
        if self.is_finished() {
            return self.final_value();
        }
        let pass = (self.elapsed / self.duration).floor();
        let local = (self.elapsed - pass * self.duration) / self.duration;
        let backwards = self.yoyo && (pass as u32) % 2 == 1;
        let t = if backwards {
            self.easing.apply(1.0 - local)
        } else {
            self.easing.apply(local)
        };
        self.from.lerp(self.to, t)
    }
}

/// One field update produced by [`Animator::advance`].
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub field: Field,
    pub value: Value,
    /// Set on the final sample of a tween that carried a cue.
    pub cue: Option<Cue>,
    pub finished: bool,
}

/// Owned-interpolation table: at most one tween per field.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    tweens: BTreeMap<Field, Tween>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give `field` to `tween`. Returns the tween it displaced, if any.
    pub fn start(&mut self, field: Field, tween: Tween) -> Option<Tween> {
        let displaced = self.tweens.insert(field, tween);
        if displaced.is_some() {
            tracing::trace!(?field, "tween replaced");
        }
        displaced
    }

    pub fn cancel(&mut self, field: Field) -> Option<Tween> {
        self.tweens.remove(&field)
    }

    pub fn cancel_all(&mut self) {
        self.tweens.clear();
    }

    pub fn is_animating(&self, field: Field) -> bool {
        self.tweens.contains_key(&field)
    }

    pub fn active(&self) -> usize {
        self.tweens.len()
    }

    /// Advance every tween by `dt` seconds and report the new values.
    ///
    /// Finished tweens are removed and report their exact final value.
    pub fn advance(&mut self, dt: f32) -> Vec<Sample> {
        let mut samples = Vec::with_capacity(self.tweens.len());
        for (field, tween) in self.tweens.iter_mut() {
            tween.elapsed += dt;
            let finished = tween.is_finished();
            samples.push(Sample {
                field: *field,
                value: tween.value(),
                cue: if finished { tween.cue } else { None },
                finished,
            });
        }
        self.tweens.retain(|_, t| !t.is_finished());
        samples
    }
}

/// One-shot delayed triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    LevelComplete,
    ResetRebuild,
}

/// Pending delayed triggers, fired in order of expiry.
#[derive(Debug, Clone, Default)]
pub struct Delays {
    pending: Vec<(f32, Trigger)>,
}

impl Delays {
    pub fn schedule(&mut self, delay: f32, trigger: Trigger) {
        self.pending.push((delay, trigger));
    }

    pub fn cancel(&mut self, trigger: Trigger) {
        self.pending.retain(|(_, t)| *t != trigger);
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, trigger: Trigger) -> bool {
        self.pending.iter().any(|(_, t)| *t == trigger)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn advance(&mut self, dt: f32) -> Vec<Trigger> {
        for (remaining, _) in &mut self.pending {
            *remaining -= dt;
        }
        let mut due: Vec<(f32, Trigger)> = self
            .pending
            .iter()
            .copied()
            .filter(|(r, _)| *r <= 0.0)
            .collect();
        self.pending.retain(|(r, _)| *r > 0.0);
        due.sort_by(|a, b| a.0.total_cmp(&b.0));
        due.into_iter().map(|(_, t)| t).collect()
    }
}
