use crate::constants::ENGINE_MAX_DT_SEC;
use crate::engine::{BobPositions, PendulumEngine, PendulumState};
use crate::filter::normalize_angle;
use crate::params::SimParams;

const DENOM_EPS: f64 = 1e-12;

/// In-process point-mass double pendulum, advanced with classic RK4.
#[derive(Debug)]
pub struct RkEngine {
    params: SimParams,
    state: PendulumState,
    positions: BobPositions,
}

impl RkEngine {
    pub fn create(params: &SimParams, initial: PendulumState) -> Self {
        let state = PendulumState {
            theta1: normalize_angle(initial.theta1),
            theta2: normalize_angle(initial.theta2),
            ..initial
        };
        log::debug!(
            "[engine] create l=({:.2},{:.2}) m=({:.2},{:.2}) g={:.3} damping={:.3}",
            params.l1,
            params.l2,
            params.m1,
            params.m2,
            params.g,
            params.damping
        );
        let mut engine = Self {
            params: *params,
            state,
            positions: BobPositions::default(),
        };
        engine.refresh_position_cache();
        engine
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Positions computed from the live state, bypassing the cache.
    pub fn bob_positions(&self) -> BobPositions {
        let p = &self.params;
        let s = &self.state;
        let x1 = p.l1 * s.theta1.sin();
        let y1 = p.l1 * s.theta1.cos();
        BobPositions {
            x1,
            y1,
            x2: x1 + p.l2 * s.theta2.sin(),
            y2: y1 + p.l2 * s.theta2.cos(),
        }
    }

    /// Angular accelerations of both arms for the given state.
    fn accel(&self, st: &PendulumState) -> (f64, f64) {
        let SimParams {
            l1,
            l2,
            m1,
            m2,
            g,
            damping,
        } = self.params;
        let PendulumState {
            theta1: th1,
            omega1: w1,
            theta2: th2,
            omega2: w2,
        } = *st;
        let dth = th1 - th2;

        let denom = 2.0 * m1 + m2 - m2 * (2.0 * dth).cos();
        let denom = denom.abs().max(DENOM_EPS).copysign(denom);

        let mut a1 = (-g * (2.0 * m1 + m2) * th1.sin()
            - m2 * g * (th1 - 2.0 * th2).sin()
            - 2.0 * dth.sin() * m2 * (w2 * w2 * l2 + w1 * w1 * l1 * dth.cos()))
            / (l1 * denom);

        let mut a2 = (2.0
            * dth.sin()
            * (w1 * w1 * l1 * (m1 + m2) + g * (m1 + m2) * th1.cos() + w2 * w2 * l2 * m2 * dth.cos()))
            / (l2 * denom);

        if damping != 0.0 {
            a1 -= damping * w1;
            a2 -= damping * w2;
        }
        (a1, a2)
    }

    fn derivative(&self, st: &PendulumState) -> PendulumState {
        let (a1, a2) = self.accel(st);
        PendulumState::new(st.omega1, a1, st.omega2, a2)
    }

    fn rk4(&mut self, dt: f64) {
        let s = self.state;
        let offset = |k: &PendulumState, h: f64| PendulumState {
            theta1: s.theta1 + h * k.theta1,
            omega1: s.omega1 + h * k.omega1,
            theta2: s.theta2 + h * k.theta2,
            omega2: s.omega2 + h * k.omega2,
        };

        let k1 = self.derivative(&s);
        let k2 = self.derivative(&offset(&k1, 0.5 * dt));
        let k3 = self.derivative(&offset(&k2, 0.5 * dt));
        let k4 = self.derivative(&offset(&k3, dt));

        let blend = |a: f64, b: f64, c: f64, d: f64| (dt / 6.0) * (a + 2.0 * b + 2.0 * c + d);
        self.state = PendulumState {
            theta1: normalize_angle(
                s.theta1 + blend(k1.theta1, k2.theta1, k3.theta1, k4.theta1),
            ),
            omega1: s.omega1 + blend(k1.omega1, k2.omega1, k3.omega1, k4.omega1),
            theta2: normalize_angle(
                s.theta2 + blend(k1.theta2, k2.theta2, k3.theta2, k4.theta2),
            ),
            omega2: s.omega2 + blend(k1.omega2, k2.omega2, k3.omega2, k4.omega2),
        };
    }

    /// θ2'' for the lower arm when its pivot accelerates by `(xdd, ydd)`.
    fn accel_theta2_moving_pivot(&self, th2: f64, w2: f64, xdd: f64, ydd: f64) -> f64 {
        let p = &self.params;
        let (s2, c2) = th2.sin_cos();
        let mut a2 = -(p.g / p.l2) * s2 - (xdd * c2 + ydd * s2) / p.l2;
        if p.damping != 0.0 {
            a2 -= p.damping * w2;
        }
        a2
    }

    fn rk4_theta2(&mut self, dt: f64, xdd: f64, ydd: f64) {
        let (th, w) = (self.state.theta2, self.state.omega2);
        let deriv = |th: f64, w: f64| (w, self.accel_theta2_moving_pivot(th, w, xdd, ydd));

        let (k1_th, k1_w) = deriv(th, w);
        let (k2_th, k2_w) = deriv(th + 0.5 * dt * k1_th, w + 0.5 * dt * k1_w);
        let (k3_th, k3_w) = deriv(th + 0.5 * dt * k2_th, w + 0.5 * dt * k2_w);
        let (k4_th, k4_w) = deriv(th + dt * k3_th, w + dt * k3_w);

        let th = th + (dt / 6.0) * (k1_th + 2.0 * k2_th + 2.0 * k3_th + k4_th);
        let w = w + (dt / 6.0) * (k1_w + 2.0 * k2_w + 2.0 * k3_w + k4_w);
        self.state.theta2 = normalize_angle(th);
        self.state.omega2 = w;
    }
}

/// Cartesian acceleration of bob 1 from its imposed angular motion.
fn bob1_cart_accel(l1: f64, th1: f64, w1: f64, a1: f64) -> (f64, f64) {
    let (s, c) = th1.sin_cos();
    (l1 * (a1 * c - w1 * w1 * s), l1 * (-a1 * s - w1 * w1 * c))
}

#[inline]
fn clamp_dt(dt: f64) -> f64 {
    if dt.is_nan() {
        0.0
    } else {
        dt.clamp(0.0, ENGINE_MAX_DT_SEC)
    }
}

impl PendulumEngine for RkEngine {
    fn step(&mut self, dt: f64) {
        self.rk4(clamp_dt(dt));
    }

    fn step_drag_override_bob1(&mut self, dt: f64, theta1: f64, omega1: f64, alpha1: f64) {
        let dt = clamp_dt(dt);
        self.state.theta1 = normalize_angle(theta1);
        self.state.omega1 = omega1;
        let (xdd, ydd) = bob1_cart_accel(self.params.l1, self.state.theta1, omega1, alpha1);
        self.rk4_theta2(dt, xdd, ydd);
    }

    fn refresh_position_cache(&mut self) {
        self.positions = self.bob_positions();
    }

    fn cached_positions(&self) -> BobPositions {
        self.positions
    }

    fn set_theta2(&mut self, theta2: f64) {
        self.state.theta2 = normalize_angle(theta2);
    }

    fn set_omega2(&mut self, omega2: f64) {
        self.state.omega2 = omega2;
    }

    fn set_l1(&mut self, l1: f64) {
        self.params.l1 = l1;
    }

    fn set_l2(&mut self, l2: f64) {
        self.params.l2 = l2;
    }

    fn set_m1(&mut self, m1: f64) {
        self.params.m1 = m1;
    }

    fn set_m2(&mut self, m2: f64) {
        self.params.m2 = m2;
    }

    fn set_damping(&mut self, damping: f64) {
        self.params.damping = damping;
    }

    fn set_gravity(&mut self, g: f64) {
        self.params.g = g;
    }

    fn state(&self) -> PendulumState {
        self.state
    }

    fn kinetic_energy(&self) -> f64 {
        let SimParams { l1, l2, m1, m2, .. } = self.params;
        let s = &self.state;
        let v1_sq = (l1 * s.omega1).powi(2);
        let v2_sq = v1_sq
            + (l2 * s.omega2).powi(2)
            + 2.0 * l1 * l2 * s.omega1 * s.omega2 * (s.theta1 - s.theta2).cos();
        0.5 * m1 * v1_sq + 0.5 * m2 * v2_sq
    }

    fn potential_energy(&self) -> f64 {
        // +y is down, so height above the lowest point is l(1 - cos θ)
        let SimParams { l1, l2, m1, m2, g, .. } = self.params;
        let s = &self.state;
        (m1 + m2) * g * l1 * (1.0 - s.theta1.cos()) + m2 * g * l2 * (1.0 - s.theta2.cos())
    }

    fn reset(&mut self, state: PendulumState) {
        self.state = PendulumState {
            theta1: normalize_angle(state.theta1),
            theta2: normalize_angle(state.theta2),
            ..state
        };
    }
}

impl Drop for RkEngine {
    fn drop(&mut self) {
        log::debug!("[engine] destroy");
    }
}
