//! Actor storage: one slot per `ActorId`, struct-of-arrays.

use drift_core::{ActorId, Vec2};
use drift_motion::BoundedWanderer;
use drift_timer::ProbabilisticRecurringTimer;

// ── EffectRole ────────────────────────────────────────────────────────────────

/// What an actor's timer drives on the host side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EffectRole {
    /// Toggled on activate, off on deactivate.
    Shield,
    /// One shot per activation.
    Weapon,
}

impl EffectRole {
    pub fn as_str(self) -> &'static str {
        match self {
            EffectRole::Shield => "shield",
            EffectRole::Weapon => "weapon",
        }
    }
}

impl std::fmt::Display for EffectRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TimerSlot ─────────────────────────────────────────────────────────────────

/// A timer tagged with the effect it drives.
#[derive(Clone, Debug)]
pub struct TimerSlot {
    pub role:  EffectRole,
    pub timer: ProbabilisticRecurringTimer,
}

impl TimerSlot {
    pub fn new(role: EffectRole, timer: ProbabilisticRecurringTimer) -> Self {
        Self { role, timer }
    }

    /// Whether the effect is currently applied (shield up).  One-shot timers
    /// are never active between frames.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.timer.is_active()
    }
}

// ── ActorStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for every actor in the arena.
///
/// Every `Vec` has exactly `count` elements and `ActorId` is the index into
/// all of them.  Despawned actors keep their slot (ids are never reused);
/// `alive` is the host's "still alive" check.
#[derive(Clone, Debug, Default)]
pub struct ActorStore {
    /// Number of actor slots.
    pub count: usize,

    pub alive: Vec<bool>,

    /// Motion controller.  `None` for actors that only carry timers.
    pub wanderers: Vec<Option<BoundedWanderer>>,

    /// Position of actors without a wanderer.
    pub anchors: Vec<Vec2>,

    pub timers: Vec<Vec<TimerSlot>>,
}

impl ActorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a live actor and return its id.
    pub fn push(&mut self, wanderer: Option<BoundedWanderer>, anchor: Vec2, timers: Vec<TimerSlot>) -> ActorId {
        let id = ActorId(self.count as u32);
        self.alive.push(true);
        self.wanderers.push(wanderer);
        self.anchors.push(anchor);
        self.timers.push(timers);
        self.count += 1;
        id
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn contains(&self, actor: ActorId) -> bool {
        actor.index() < self.count
    }

    #[inline]
    pub fn is_alive(&self, actor: ActorId) -> bool {
        self.alive.get(actor.index()).copied().unwrap_or(false)
    }

    pub fn alive_count(&self) -> usize {
        self.alive.iter().filter(|&&a| a).count()
    }

    /// Ids of all live actors, ascending.
    pub fn iter_alive(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.alive
            .iter()
            .enumerate()
            .filter(|&(_, &a)| a)
            .map(|(i, _)| ActorId(i as u32))
    }

    #[inline]
    pub fn wanderer(&self, actor: ActorId) -> Option<&BoundedWanderer> {
        self.wanderers.get(actor.index())?.as_ref()
    }

    #[inline]
    pub fn wanderer_mut(&mut self, actor: ActorId) -> Option<&mut BoundedWanderer> {
        self.wanderers.get_mut(actor.index())?.as_mut()
    }

    /// Current position: the wanderer's if there is one, else the anchor.
    pub fn position(&self, actor: ActorId) -> Option<Vec2> {
        match self.wanderer(actor) {
            Some(w) => Some(w.position()),
            None    => self.anchors.get(actor.index()).copied(),
        }
    }

    /// Current velocity; zero for actors without a wanderer.
    pub fn velocity(&self, actor: ActorId) -> Vec2 {
        self.wanderer(actor).map_or(Vec2::ZERO, |w| w.velocity())
    }

    #[inline]
    pub fn timers(&self, actor: ActorId) -> &[TimerSlot] {
        self.timers.get(actor.index()).map_or(&[], Vec::as_slice)
    }

    /// `true` if any of the actor's timers with `role` is currently active.
    pub fn effect_active(&self, actor: ActorId, role: EffectRole) -> bool {
        self.timers(actor).iter().any(|s| s.role == role && s.is_active())
    }
}
