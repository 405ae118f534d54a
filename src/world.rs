use glam::Vec3;
use log::warn;

use crate::{
    config::{WorldConfig, DEFAULT_CATCH_UP_WARNING_STEPS, DEFAULT_GRAVITY, DEFAULT_TIME_STEP},
    core::actor::Actor,
    error::{PhysicsError, Result},
    utils::{
        allocator::{ActorHandle, Arena},
        profiling::{ScopedTimer, StepProfile},
    },
};

/// Owns the actors and advances them with a fixed-timestep accumulator.
#[derive(Debug)]
pub struct PhysicsWorld {
    actors: Arena<Actor>,
    gravity: Vec3,
    time_step: f32,
    catch_up_warning_steps: u32,
    elapsed: f64,
    last_update: f64,
    profile: StepProfile,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_STEP)
    }
}

impl PhysicsWorld {
    /// Creates an empty world. A non-finite or non-positive `time_step` falls
    /// back to [`DEFAULT_TIME_STEP`].
    pub fn new(time_step: f32) -> Self {
        let time_step = if time_step.is_finite() && time_step > 0.0 {
            time_step
        } else {
            warn!("invalid time step {time_step}, using {DEFAULT_TIME_STEP}");
            DEFAULT_TIME_STEP
        };

        Self {
            actors: Arena::new(),
            gravity: Vec3::from_array(DEFAULT_GRAVITY),
            time_step,
            catch_up_warning_steps: DEFAULT_CATCH_UP_WARNING_STEPS,
            elapsed: 0.0,
            last_update: 0.0,
            profile: StepProfile::default(),
        }
    }

    pub fn from_config(config: &WorldConfig) -> Result<Self> {
        config.validate()?;
        let mut world = Self::new(config.time_step);
        world.gravity = config.gravity;
        world.catch_up_warning_steps = config.catch_up_warning_steps;
        Ok(world)
    }

    pub fn add_actor(&mut self, actor: Actor) -> ActorHandle {
        self.actors.insert(actor)
    }

    /// Removes and returns an actor.
    pub fn destroy_actor(&mut self, handle: ActorHandle) -> Result<Actor> {
        self.actors
            .remove(handle)
            .ok_or(PhysicsError::UnknownActor(handle))
    }

    pub fn clear_actors(&mut self) {
        self.actors.clear();
    }

    pub fn has_actor(&self, handle: ActorHandle) -> bool {
        self.actors.contains(handle)
    }

    pub fn actor(&self, handle: ActorHandle) -> Option<&Actor> {
        self.actors.get(handle)
    }

    pub fn actor_mut(&mut self, handle: ActorHandle) -> Option<&mut Actor> {
        self.actors.get_mut(handle)
    }

    pub fn actors(&self) -> impl Iterator<Item = (ActorHandle, &Actor)> + '_ {
        self.actors.iter()
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec3) -> Result<()> {
        if !gravity.is_finite() {
            return Err(PhysicsError::InvalidGravity(gravity));
        }
        self.gravity = gravity;
        Ok(())
    }

    pub fn time_step(&self) -> f32 {
        self.time_step
    }

    /// Simulated time consumed by fixed steps so far.
    pub fn simulated_time(&self) -> f64 {
        self.last_update
    }

    /// Profile of the most recent fixed step.
    pub fn last_profile(&self) -> &StepProfile {
        &self.profile
    }

    /// Adds `dt` seconds to the clock and runs every fixed step that fits.
    /// Leftover time carries into the next call. Returns the step count.
    pub fn step(&mut self, dt: f32) -> u32 {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += f64::from(dt);
        }
        self.catch_up()
    }

    /// Moves the clock to the absolute time `elapsed` (seconds since the
    /// world was created) and runs every fixed step that fits. A clock that
    /// goes backwards runs nothing.
    pub fn advance_to(&mut self, elapsed: f64) -> u32 {
        if elapsed.is_finite() && elapsed > self.elapsed {
            self.elapsed = elapsed;
        }
        self.catch_up()
    }

    fn catch_up(&mut self) -> u32 {
        let time_step = f64::from(self.time_step);
        let mut steps = 0;
        while self.elapsed - self.last_update >= time_step {
            self.last_update += time_step;
            self.fixed_step();
            steps += 1;
        }
        if steps > self.catch_up_warning_steps {
            warn!(
                "physics fell behind: ran {steps} steps of {}s in one call",
                self.time_step
            );
        }
        steps
    }

    /// Runs one fixed step: integrate every actor, then resolve every
    /// distinct pair of actors that existed when the step began.
    fn fixed_step(&mut self) {
        let mut profile = StepProfile::default();
        let handles = self.actors.handles();
        profile.actor_count = handles.len();

        {
            let _timer = ScopedTimer::new("step::total", &mut profile.total_step_time);

            {
                let _timer = ScopedTimer::new("step::integrate", &mut profile.integration_time);
                for actor in self.actors.iter_mut() {
                    actor.update(self.time_step, self.gravity);
                }
            }

            {
                let _timer = ScopedTimer::new("step::collide", &mut profile.collision_time);
                for (i, &first) in handles.iter().enumerate() {
                    for &second in &handles[i + 1..] {
                        let Some((a, b)) = self.actors.get2_mut(first, second) else {
                            continue;
                        };
                        profile.pairs_tested += 1;
                        if Actor::resolve_collision(a, b).is_some() {
                            profile.contacts_resolved += 1;
                        }
                    }
                }
            }
        }

        profile.report();
        self.profile = profile;
    }
}
