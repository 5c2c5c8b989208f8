//! The `Arena` struct and its frame loop.

use drift_core::{ActorId, ArenaConfig, Frame, FrameClock, Rect, Vec2};
use drift_timer::ActivationEvent;
use tracing::{debug, info};

use crate::{Activation, ActorStore, ArenaObserver, EffectRole, SimError, SimResult};

/// The host driver.
///
/// `Arena` owns every actor and drives the per-frame loop:
///
/// 1. **Logic**: each live actor's wanderer advances its heading timer by
///    `frame_dt`; each of its timers advances and any event is reported via
///    [`ArenaObserver::on_activation`].
/// 2. **Contacts**: normals queued with [`report_contact`](Self::report_contact)
///    are applied to their wanderers.
/// 3. **Physics**: the [`FrameClock`] accumulator decides how many
///    fixed-`fixed_dt` sub-steps run; each moves every live wanderer.
/// 4. **Snapshot** every `snapshot_interval_frames` frames.
///
/// Effects dropped by a despawn or respawn between frames are reported as
/// `Deactivate` before the logic phase.
///
/// Actors are processed in ascending id order, so a run is a pure function
/// of the config, the spawn list and the host calls made between frames.
///
/// Create via [`ArenaBuilder`][crate::ArenaBuilder].
pub struct Arena {
    pub config: ArenaConfig,

    pub clock: FrameClock,

    pub actors: ActorStore,

    /// Contact normals waiting for the next frame's contact phase.
    pending_contacts: Vec<(ActorId, Vec2)>,

    /// Effects dropped by `despawn`/`respawn` while active; reported as
    /// `Deactivate` at the start of the next frame.
    pending_drops: Vec<(ActorId, EffectRole)>,
}

impl Arena {
    pub(crate) fn new(config: ArenaConfig, actors: ActorStore) -> Self {
        Self {
            clock: config.make_clock(),
            config,
            actors,
            pending_contacts: Vec::new(),
            pending_drops: Vec::new(),
        }
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Run from the current frame to `config.end_frame()`.
    pub fn run<O: ArenaObserver>(&mut self, observer: &mut O) {
        let end = self.config.end_frame();
        info!(
            actors = self.actors.alive_count(),
            from = %self.clock.current_frame,
            to = %end,
            "arena run started"
        );
        while self.clock.current_frame < end {
            self.process_frame(observer);
        }
        observer.on_run_end(self.clock.current_frame);
        info!(frame = %self.clock.current_frame, secs = self.clock.elapsed_secs(), "arena run finished");
    }

    /// Run exactly `n` frames from the current position (ignores
    /// `end_frame`).
    pub fn run_frames<O: ArenaObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.process_frame(observer);
        }
    }

    // ── Host calls between frames ─────────────────────────────────────────

    /// Queue a contact normal for `actor`; applied during the next frame's
    /// contact phase.
    pub fn report_contact(&mut self, actor: ActorId, normal: Vec2) -> SimResult<()> {
        if !self.actors.contains(actor) {
            return Err(SimError::UnknownActor(actor));
        }
        self.pending_contacts.push((actor, normal));
        Ok(())
    }

    /// Replace the arena boundary.  Every wanderer re-derives its inset
    /// rectangle now, before the next tick.
    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.config.bounds = bounds;
        for w in self.actors.wanderers.iter_mut().flatten() {
            w.set_bounds(bounds);
        }
        match bounds {
            Some(b) => info!(bounds = %b, "arena bounds changed"),
            None    => info!("arena bounds removed"),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Option<Rect> {
        self.config.bounds
    }

    /// Stop ticking `actor`.  Its slot and last position stay readable.
    ///
    /// Active effects are dropped: their timers restart from idle and a
    /// `Deactivate` is reported at the start of the next frame.
    pub fn despawn(&mut self, actor: ActorId) -> SimResult<()> {
        if !self.actors.contains(actor) {
            return Err(SimError::UnknownActor(actor));
        }
        self.actors.alive[actor.index()] = false;
        self.drop_effects(actor);
        debug!(actor = %actor, "actor despawned");
        Ok(())
    }

    /// Bring `actor` back at `position` with a fresh heading, heading timer
    /// and activation timers.  Still-active effects are dropped as in
    /// [`despawn`](Self::despawn).
    pub fn respawn(&mut self, actor: ActorId, position: Vec2) -> SimResult<()> {
        if !self.actors.contains(actor) {
            return Err(SimError::UnknownActor(actor));
        }
        if !position.is_finite() {
            return Err(SimError::Config(format!(
                "respawn position of {actor} is not finite: {position}"
            )));
        }
        self.drop_effects(actor);
        let i = actor.index();
        self.actors.alive[i] = true;
        self.actors.anchors[i] = position;
        if let Some(w) = self.actors.wanderers[i].as_mut() {
            w.set_position(position);
            w.reset();
        }
        for slot in &mut self.actors.timers[i] {
            slot.timer.reset();
        }
        debug!(actor = %actor, %position, "actor respawned");
        Ok(())
    }

    #[inline]
    pub fn current_frame(&self) -> Frame {
        self.clock.current_frame
    }

    /// Simulated seconds since frame 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.clock.elapsed_secs()
    }

    fn drop_effects(&mut self, actor: ActorId) {
        for slot in &mut self.actors.timers[actor.index()] {
            if slot.is_active() {
                slot.timer.reset();
                self.pending_drops.push((actor, slot.role));
            }
        }
    }

    // ── Frame processing ──────────────────────────────────────────────────

    fn process_frame<O: ArenaObserver>(&mut self, observer: &mut O) {
        let frame = self.clock.current_frame;
        let time_secs = self.clock.time_of(frame);
        let frame_dt = self.clock.frame_dt;
        let fixed_dt = self.clock.fixed_dt;

        observer.on_frame_start(frame);

        for (actor, role) in std::mem::take(&mut self.pending_drops) {
            observer.on_activation(&Activation {
                frame,
                time_secs,
                actor,
                role,
                event: ActivationEvent::Deactivate,
            });
        }

        // ── Phase 1: logic tick ───────────────────────────────────────────
        for i in 0..self.actors.count {
            if !self.actors.alive[i] {
                continue;
            }
            let actor = ActorId(i as u32);
            if let Some(w) = self.actors.wanderers[i].as_mut() {
                w.tick_logic(frame_dt);
            }
            for slot in &mut self.actors.timers[i] {
                if let Some(event) = slot.timer.advance(frame_dt) {
                    observer.on_activation(&Activation {
                        frame,
                        time_secs,
                        actor,
                        role: slot.role,
                        event,
                    });
                }
            }
        }

        // ── Phase 2: contact normals ──────────────────────────────────────
        for (actor, normal) in std::mem::take(&mut self.pending_contacts) {
            if !self.actors.is_alive(actor) {
                continue;
            }
            if let Some(w) = self.actors.wanderer_mut(actor) {
                w.on_collision(normal);
            }
        }

        // ── Phase 3: fixed-step physics ───────────────────────────────────
        let substeps = self.clock.physics_substeps();
        for _ in 0..substeps {
            for (w, &alive) in self.actors.wanderers.iter_mut().zip(&self.actors.alive) {
                if let (Some(w), true) = (w.as_mut(), alive) {
                    w.tick_physics(fixed_dt);
                }
            }
        }

        observer.on_frame_end(frame, substeps);

        let interval = self.config.snapshot_interval_frames;
        if interval > 0 && frame.0.is_multiple_of(interval) {
            observer.on_snapshot(frame, time_secs, &self.actors);
        }

        self.clock.advance();
    }
}
