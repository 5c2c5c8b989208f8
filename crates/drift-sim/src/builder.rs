//! Builder for constructing an [`Arena`].

use drift_core::{ActorId, ActorRng, ArenaConfig, RandomSource, RngStream, SimRng, Vec2};
use drift_motion::{BoundedWanderer, InsetRect, WanderConfig};
use drift_timer::{ProbabilisticRecurringTimer, TimerConfig};
use tracing::debug;

use crate::{ActorStore, Arena, EffectRole, SimError, SimResult, TimerSlot};

/// Where an actor starts.
#[derive(Copy, Clone, Debug)]
enum Placement {
    /// Uniformly inside the actor's inset rectangle (origin without bounds).
    Random,
    At(Vec2),
}

#[derive(Clone, Debug)]
struct PendingActor {
    motion:    Option<WanderConfig>,
    placement: Placement,
    timers:    Vec<(EffectRole, TimerConfig)>,
}

/// Builder for [`Arena`].
///
/// Actors are registered one at a time and receive their [`ActorId`]
/// immediately, so timers can be attached afterwards.  Nothing random
/// happens until [`build`](Self::build): every component then gets its own
/// [`ActorRng`] stream derived from `config.seed`, and random spawn points
/// are drawn from one arena-level [`SimRng`] in id order.
///
/// # Example
///
/// ```rust,ignore
/// let mut b = ArenaBuilder::new(ArenaConfig::default());
/// let boss = b.spawn_wanderer(WanderConfig::default().with_radius(1.5), Some(Vec2::ZERO));
/// let grunt = b.spawn_wanderer(WanderConfig::default(), None);
/// b.with_timer(grunt, EffectRole::Shield, TimerConfig::default())?;
/// let mut arena = b.build()?;
/// arena.run(&mut NoopObserver);
/// ```
pub struct ArenaBuilder {
    config: ArenaConfig,
    actors: Vec<PendingActor>,
}

impl ArenaBuilder {
    pub fn new(config: ArenaConfig) -> Self {
        Self {
            config,
            actors: Vec::new(),
        }
    }

    /// Register a wandering actor.  `position: None` picks a random point
    /// inside the arena at build time.
    pub fn spawn_wanderer(&mut self, config: WanderConfig, position: Option<Vec2>) -> ActorId {
        self.push(PendingActor {
            motion:    Some(config),
            placement: position.map_or(Placement::Random, Placement::At),
            timers:    Vec::new(),
        })
    }

    /// Register an actor that does not move on its own (a turret, or an
    /// enemy driven by something other than a wanderer).
    pub fn spawn_static(&mut self, position: Vec2) -> ActorId {
        self.push(PendingActor {
            motion:    None,
            placement: Placement::At(position),
            timers:    Vec::new(),
        })
    }

    /// Attach a timer to an already registered actor.
    pub fn with_timer(&mut self, actor: ActorId, role: EffectRole, config: TimerConfig) -> SimResult<()> {
        let pending = self
            .actors
            .get_mut(actor.index())
            .ok_or(SimError::UnknownActor(actor))?;
        pending.timers.push((role, config));
        Ok(())
    }

    /// Number of registered actors.
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Validate inputs, seed every component and return a ready-to-run
    /// [`Arena`].
    pub fn build(self) -> SimResult<Arena> {
        self.config.validate()?;

        let seed = self.config.seed;
        let bounds = self.config.bounds;
        let mut spawn_rng = SimRng::new(seed);
        let mut store = ActorStore::new();

        for (i, pending) in self.actors.into_iter().enumerate() {
            let id = ActorId(i as u32);

            let position = match pending.placement {
                Placement::At(p) if !p.is_finite() => {
                    return Err(SimError::Config(format!("spawn position of {id} is not finite: {p}")));
                }
                Placement::At(p) => p,
                Placement::Random => {
                    let motion = pending.motion.unwrap_or_default().sanitized();
                    match bounds {
                        Some(b) => {
                            let inset = InsetRect::derive(&b, motion.edge_inset, motion.radius);
                            random_point(&mut spawn_rng, &inset)
                        }
                        None => Vec2::ZERO,
                    }
                }
            };

            let wanderer = pending.motion.map(|config| {
                BoundedWanderer::new(config, bounds, position, ActorRng::new(seed, id, RngStream::Motion))
            });

            let timers = pending
                .timers
                .into_iter()
                .enumerate()
                .map(|(k, (role, config))| {
                    let rng = ActorRng::new(seed, id, RngStream::Timer(k as u32));
                    TimerSlot::new(role, ProbabilisticRecurringTimer::new(config, rng))
                })
                .collect::<Vec<_>>();

            debug!(actor = %id, %position, timers = timers.len(), "actor spawned");
            store.push(wanderer, position, timers);
        }

        Ok(Arena::new(self.config, store))
    }

    fn push(&mut self, actor: PendingActor) -> ActorId {
        let id = ActorId(self.actors.len() as u32);
        self.actors.push(actor);
        id
    }
}

fn random_point<R: RandomSource>(rng: &mut R, inset: &InsetRect) -> Vec2 {
    Vec2::new(
        rng.range_f32(inset.x.min, inset.x.max),
        rng.range_f32(inset.y.min, inset.y.max),
    )
}
