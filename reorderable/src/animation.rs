use crate::Offset;

/// How a cancelled drag returns the dragged item to its resting place.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragCancelledAnimation {
    /// Snap back on the next frame.
    None,
    Spring(SpringSpec),
    Tween(TweenSpec),
}

impl Default for DragCancelledAnimation {
    fn default() -> Self {
        Self::Spring(SpringSpec::default())
    }
}

impl DragCancelledAnimation {
    /// Starts animating `from` towards zero at `start_ms`.
    pub fn start(&self, from: Offset, start_ms: u64) -> ReturnAnimation {
        ReturnAnimation {
            spec: *self,
            from,
            current: from,
            velocity: Offset::ZERO,
            start_ms,
            last_ms: start_ms,
            finished: false,
        }
    }
}

/// Damped-spring parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringSpec {
    /// 1.0 is critically damped, below 1.0 bounces. Values under 0.01 are treated as 0.01.
    pub damping_ratio: f32,
    pub stiffness: f32,
    /// Distance (px) under which the spring may settle.
    pub visibility_threshold: f32,
    /// Speed (px/s) under which the spring may settle.
    pub velocity_threshold: f32,
}

impl SpringSpec {
    pub fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
            ..Self::default()
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            visibility_threshold: 0.5,
            velocity_threshold: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TweenSpec {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl TweenSpec {
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::new(300, Easing::FastOutSlowIn)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    FastOutSlowIn,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

// CSS-style cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1): solve x(s) = t, return y(s).
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    fn eval(a: f32, b: f32, s: f32) -> f32 {
        let u = 1.0 - s;
        3.0 * u * u * s * a + 3.0 * u * s * s * b + s * s * s
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    let mut s = t;
    for _ in 0..24 {
        let x = eval(x1, x2, s);
        if (x - t).abs() < 1e-5 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    eval(y1, y2, s)
}

// Lower bound for the damping ratio; an undamped spring would never settle.
const MIN_DAMPING_RATIO: f64 = 0.01;

/// A running return-to-zero animation, advanced by frame time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReturnAnimation {
    spec: DragCancelledAnimation,
    from: Offset,
    current: Offset,
    velocity: Offset,
    start_ms: u64,
    last_ms: u64,
    finished: bool,
}

impl ReturnAnimation {
    pub fn spec(&self) -> DragCancelledAnimation {
        self.spec
    }

    pub fn from(&self) -> Offset {
        self.from
    }

    pub fn value(&self) -> Offset {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances to `now_ms` and returns the new offset.
    ///
    /// Once finished, the offset is exactly zero.
    pub fn advance(&mut self, now_ms: u64) -> Offset {
        if self.finished {
            return self.current;
        }
        match self.spec {
            DragCancelledAnimation::None => self.settle(),
            DragCancelledAnimation::Tween(tween) => {
                let elapsed = now_ms.saturating_sub(self.start_ms);
                let duration = tween.duration_ms.max(1);
                if elapsed >= duration {
                    self.settle();
                } else {
                    let t = elapsed as f32 / duration as f32;
                    let remaining = 1.0 - tween.easing.sample(t);
                    self.current = Offset::new(self.from.x * remaining, self.from.y * remaining);
                }
            }
            DragCancelledAnimation::Spring(spring) => {
                let dt = now_ms.saturating_sub(self.last_ms) as f64 / 1000.0;
                self.step_spring(&spring, dt);
            }
        }
        self.last_ms = self.last_ms.max(now_ms);
        self.current
    }

    fn step_spring(&mut self, spring: &SpringSpec, dt: f64) {
        let stiffness = f64::from(spring.stiffness.max(0.0));
        if stiffness == 0.0 || !stiffness.is_finite() {
            self.settle();
            return;
        }
        let omega = stiffness.sqrt();
        let zeta = f64::from(spring.damping_ratio).max(MIN_DAMPING_RATIO);

        let (x, vx) = damped(self.current.x, self.velocity.x, omega, zeta, dt);
        let (y, vy) = damped(self.current.y, self.velocity.y, omega, zeta, dt);
        self.current = Offset::new(x, y);
        self.velocity = Offset::new(vx, vy);

        let distance = self.current.x.hypot(self.current.y);
        let speed = self.velocity.x.hypot(self.velocity.y);
        let at_rest = distance < spring.visibility_threshold && speed < spring.velocity_threshold;
        if at_rest || !distance.is_finite() || !speed.is_finite() {
            self.settle();
        }
    }

    fn settle(&mut self) {
        self.current = Offset::ZERO;
        self.velocity = Offset::ZERO;
        self.finished = true;
    }
}

/// Exact solution of `x'' = -omega^2 x - 2 zeta omega x'` after `t` seconds, from displacement
/// `x0` and velocity `v0`. Returns the new displacement and velocity.
fn damped(x0: f32, v0: f32, omega: f64, zeta: f64, t: f64) -> (f32, f32) {
    let (x0, v0) = (f64::from(x0), f64::from(v0));
    let (x, v) = if (zeta - 1.0).abs() < 1e-3 {
        let decay = (-omega * t).exp();
        let b = v0 + omega * x0;
        (decay * (x0 + b * t), decay * (v0 - omega * b * t))
    } else if zeta < 1.0 {
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * omega * t).exp();
        let (sin, cos) = (omega_d * t).sin_cos();
        let x = decay * (x0 * cos + (v0 + zeta * omega * x0) / omega_d * sin);
        let v = decay * (v0 * cos - (zeta * omega * v0 + omega * omega * x0) / omega_d * sin);
        (x, v)
    } else {
        // Overdamped: two real roots. `slow` is written as a quotient to avoid cancellation.
        let root = (zeta * zeta - 1.0).sqrt();
        let slow = -omega / (zeta + root);
        let fast = -omega * (zeta + root);
        let c_fast = (slow * x0 - v0) / (slow - fast);
        let c_slow = x0 - c_fast;
        let (e_slow, e_fast) = ((slow * t).exp(), (fast * t).exp());
        (
            c_slow * e_slow + c_fast * e_fast,
            c_slow * slow * e_slow + c_fast * fast * e_fast,
        )
    };
    (x as f32, v as f32)
}
