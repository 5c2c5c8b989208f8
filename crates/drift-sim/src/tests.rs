//! Integration tests for drift-sim.

use drift_core::{ActorId, ArenaConfig, Frame, Rect, Vec2};
use drift_motion::WanderConfig;
use drift_timer::{ActivationEvent, DelayRange, TimerConfig};

use crate::{Activation, ActorStore, Arena, ArenaBuilder, ArenaObserver, EffectRole, NoopObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn arena_bounds() -> Rect {
    Rect::new(Vec2::splat(-10.0), Vec2::splat(10.0))
}

fn test_config(total_frames: u64) -> ArenaConfig {
    ArenaConfig {
        seed:                     7,
        frame_dt:                 0.25,
        fixed_dt:                 0.125,
        max_substeps:             8,
        total_frames,
        snapshot_interval_frames: 4,
        bounds:                   Some(arena_bounds()),
    }
}

/// Records everything the arena reports.
#[derive(Default)]
struct Recorder {
    frame_starts: Vec<Frame>,
    substeps:     Vec<u32>,
    activations:  Vec<Activation>,
    snapshots:    Vec<(Frame, Vec<Vec2>)>,
    run_end:      Option<Frame>,
}

impl ArenaObserver for Recorder {
    fn on_frame_start(&mut self, frame: Frame) {
        self.frame_starts.push(frame);
    }

    fn on_activation(&mut self, activation: &Activation) {
        self.activations.push(*activation);
    }

    fn on_frame_end(&mut self, _frame: Frame, substeps: u32) {
        self.substeps.push(substeps);
    }

    fn on_snapshot(&mut self, frame: Frame, _time_secs: f64, actors: &ActorStore) {
        let positions = (0..actors.count)
            .filter_map(|i| actors.position(ActorId(i as u32)))
            .collect();
        self.snapshots.push((frame, positions));
    }

    fn on_run_end(&mut self, final_frame: Frame) {
        self.run_end = Some(final_frame);
    }
}

fn crowd(config: ArenaConfig, n: usize) -> Arena {
    let mut b = ArenaBuilder::new(config);
    for _ in 0..n {
        let id = b.spawn_wanderer(WanderConfig::default().with_speed(6.0).with_radius(0.5), None);
        b.with_timer(id, EffectRole::Shield, TimerConfig::default()).unwrap();
        b.with_timer(id, EffectRole::Weapon, TimerConfig::fire(100, DelayRange::new(0.8, 1.2))).unwrap();
    }
    b.build().unwrap()
}

// ── ArenaBuilder ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn ids_are_sequential() {
        let mut b = ArenaBuilder::new(test_config(1));
        assert_eq!(b.spawn_wanderer(WanderConfig::default(), None), ActorId(0));
        assert_eq!(b.spawn_static(Vec2::ZERO), ActorId(1));
        assert_eq!(b.spawn_wanderer(WanderConfig::default(), Some(Vec2::ONE)), ActorId(2));
        assert_eq!(b.actor_count(), 3);
        let arena = b.build().unwrap();
        assert_eq!(arena.actors.count, 3);
        assert_eq!(arena.actors.alive_count(), 3);
        assert!(arena.actors.wanderer(ActorId(1)).is_none());
    }

    #[test]
    fn timer_on_unknown_actor_errors() {
        let mut b = ArenaBuilder::new(test_config(1));
        let err = b.with_timer(ActorId(3), EffectRole::Shield, TimerConfig::default());
        assert!(matches!(err, Err(SimError::UnknownActor(ActorId(3)))));
    }

    #[test]
    fn invalid_timestep_errors() {
        let config = ArenaConfig {
            fixed_dt: 0.0,
            ..test_config(1)
        };
        let result = ArenaBuilder::new(config).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn non_finite_spawn_errors() {
        let mut b = ArenaBuilder::new(test_config(1));
        b.spawn_wanderer(WanderConfig::default(), Some(Vec2::new(f32::NAN, 0.0)));
        assert!(matches!(b.build(), Err(SimError::Config(_))));
    }

    #[test]
    fn random_spawns_land_inside_inset() {
        let arena = crowd(test_config(1), 50);
        for id in arena.actors.iter_alive() {
            let w = arena.actors.wanderer(id).unwrap();
            assert!(w.inset().unwrap().contains(w.position()), "{id} spawned at {}", w.position());
        }
    }

    #[test]
    fn random_spawn_without_bounds_is_origin() {
        let config = ArenaConfig {
            bounds: None,
            ..test_config(1)
        };
        let mut b = ArenaBuilder::new(config);
        let id = b.spawn_wanderer(WanderConfig::default(), None);
        let arena = b.build().unwrap();
        assert_eq!(arena.actors.position(id), Some(Vec2::ZERO));
    }
}

// ── Frame loop ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn runs_to_end_frame() {
        let mut arena = crowd(test_config(20), 3);
        let mut rec = Recorder::default();
        arena.run(&mut rec);

        assert_eq!(arena.current_frame(), Frame(20));
        assert_eq!(rec.run_end, Some(Frame(20)));
        assert_eq!(rec.frame_starts.len(), 20);
        assert_eq!(rec.frame_starts[0], Frame(0));
        // 0.25 s frames with 0.125 s physics → two sub-steps every frame.
        assert!(rec.substeps.iter().all(|&n| n == 2));
        // Frames 0, 4, 8, 12, 16.
        let snap_frames: Vec<u64> = rec.snapshots.iter().map(|(f, _)| f.0).collect();
        assert_eq!(snap_frames, vec![0, 4, 8, 12, 16]);
    }

    #[test]
    fn same_seed_same_run() {
        let mut a = crowd(test_config(200), 8);
        let mut b = crowd(test_config(200), 8);
        let (mut ra, mut rb) = (Recorder::default(), Recorder::default());
        a.run(&mut ra);
        b.run(&mut rb);
        assert_eq!(ra.snapshots, rb.snapshots);
        assert_eq!(ra.activations, rb.activations);
    }

    #[test]
    fn different_seed_different_run() {
        let mut a = crowd(test_config(40), 4);
        let mut b = crowd(ArenaConfig { seed: 8, ..test_config(40) }, 4);
        let (mut ra, mut rb) = (Recorder::default(), Recorder::default());
        a.run(&mut ra);
        b.run(&mut rb);
        assert_ne!(ra.snapshots, rb.snapshots);
    }

    #[test]
    fn wanderers_stay_inside() {
        let mut arena = crowd(test_config(400), 10);
        let mut rec = Recorder::default();
        arena.run(&mut rec);
        let inset = Rect::new(Vec2::splat(-9.5), Vec2::splat(9.5));
        for (frame, positions) in &rec.snapshots {
            for p in positions {
                assert!(inset.contains(*p), "{frame}: {p} escaped");
            }
        }
    }

    #[test]
    fn shield_cycle_reported_with_frame_times() {
        let mut b = ArenaBuilder::new(test_config(16));
        let id = b.spawn_static(Vec2::ZERO);
        b.with_timer(id, EffectRole::Shield, TimerConfig::shield(100, DelayRange::fixed(1.0)))
            .unwrap();
        let mut arena = b.build().unwrap();

        let mut rec = Recorder::default();
        arena.run_frames(4, &mut rec);
        // Elapsed reaches 1.0 during the fourth frame (frame 3, starting at 0.75 s).
        assert_eq!(rec.activations.len(), 1);
        let a = rec.activations[0];
        assert_eq!((a.frame, a.actor, a.role, a.event), (Frame(3), id, EffectRole::Shield, ActivationEvent::Activate));
        assert_eq!(a.time_secs, 0.75);
        assert!(arena.actors.effect_active(id, EffectRole::Shield));

        arena.run_frames(4, &mut rec);
        assert_eq!(rec.activations.len(), 2);
        assert_eq!(rec.activations[1].event, ActivationEvent::Deactivate);
        assert_eq!(rec.activations[1].frame, Frame(7));
        assert!(!arena.actors.effect_active(id, EffectRole::Shield));
    }

    #[test]
    fn weapon_fires_without_staying_active() {
        let mut b = ArenaBuilder::new(test_config(8));
        let id = b.spawn_static(Vec2::ZERO);
        b.with_timer(id, EffectRole::Weapon, TimerConfig::fire(100, DelayRange::fixed(0.5)))
            .unwrap();
        let mut arena = b.build().unwrap();
        let mut rec = Recorder::default();
        arena.run(&mut rec);
        assert_eq!(rec.activations.len(), 4);
        assert!(rec.activations.iter().all(|a| a.event == ActivationEvent::Activate));
        assert!(!arena.actors.effect_active(id, EffectRole::Weapon));
    }

    #[test]
    fn static_actor_does_not_move() {
        let mut b = ArenaBuilder::new(test_config(10));
        let id = b.spawn_static(Vec2::new(2.0, 3.0));
        let mut arena = b.build().unwrap();
        arena.run(&mut NoopObserver);
        assert_eq!(arena.actors.position(id), Some(Vec2::new(2.0, 3.0)));
        assert_eq!(arena.actors.velocity(id), Vec2::ZERO);
    }
}

// ── Host calls ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod host_tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::SimError;

    #[test]
    fn despawned_actor_freezes() {
        let mut arena = crowd(test_config(100), 2);
        arena.run_frames(4, &mut NoopObserver);
        arena.despawn(ActorId(0)).unwrap();
        let frozen = arena.actors.position(ActorId(0));

        let mut rec = Recorder::default();
        arena.run_frames(40, &mut rec);
        assert_eq!(arena.actors.position(ActorId(0)), frozen);
        assert!(
            rec.activations
                .iter()
                .all(|a| a.actor != ActorId(0) || a.event == ActivationEvent::Deactivate)
        );
        assert!(rec.activations.iter().any(|a| a.actor == ActorId(1)));
        assert_eq!(arena.actors.alive_count(), 1);
    }

    #[test]
    fn despawn_unknown_errors() {
        let mut arena = crowd(test_config(1), 1);
        assert!(matches!(arena.despawn(ActorId(9)), Err(SimError::UnknownActor(_))));
    }

    #[test]
    fn respawn_restarts_actor() {
        let mut b = ArenaBuilder::new(test_config(100));
        let id = b.spawn_wanderer(WanderConfig::default(), Some(Vec2::ZERO));
        b.with_timer(id, EffectRole::Shield, TimerConfig::shield(100, DelayRange::fixed(1.0)))
            .unwrap();
        let mut arena = b.build().unwrap();
        arena.run_frames(4, &mut NoopObserver);
        assert!(arena.actors.effect_active(id, EffectRole::Shield));
        arena.actors.wanderer_mut(id).unwrap().set_heading(Vec2::X);

        arena.despawn(id).unwrap();
        arena.respawn(id, Vec2::new(-3.0, 2.0)).unwrap();
        assert!(arena.actors.is_alive(id));
        assert!(!arena.actors.effect_active(id, EffectRole::Shield));
        assert_eq!(arena.actors.position(id), Some(Vec2::new(-3.0, 2.0)));

        let w = arena.actors.wanderer(id).unwrap();
        assert_eq!(w.heading_timer(), 0.0);
        assert_ne!(w.heading(), Vec2::X);
        assert_relative_eq!(w.heading().length(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn dropped_shield_reports_deactivate() {
        let mut b = ArenaBuilder::new(test_config(100));
        let id = b.spawn_static(Vec2::ZERO);
        b.with_timer(id, EffectRole::Shield, TimerConfig::shield(100, DelayRange::fixed(1.0)))
            .unwrap();
        let mut arena = b.build().unwrap();

        let mut rec = Recorder::default();
        arena.run_frames(4, &mut rec);
        arena.despawn(id).unwrap();
        arena.respawn(id, Vec2::ZERO).unwrap();
        arena.run_frames(4, &mut rec);

        let events: Vec<(Frame, ActivationEvent)> =
            rec.activations.iter().map(|a| (a.frame, a.event)).collect();
        assert_eq!(
            events,
            vec![
                (Frame(3), ActivationEvent::Activate),
                (Frame(4), ActivationEvent::Deactivate),
                (Frame(7), ActivationEvent::Activate),
            ]
        );
    }

    #[test]
    fn respawn_of_live_actor_drops_active_effect() {
        let mut b = ArenaBuilder::new(test_config(100));
        let id = b.spawn_static(Vec2::ZERO);
        b.with_timer(id, EffectRole::Shield, TimerConfig::shield(100, DelayRange::fixed(1.0)))
            .unwrap();
        let mut arena = b.build().unwrap();

        let mut rec = Recorder::default();
        arena.run_frames(4, &mut rec);
        arena.respawn(id, Vec2::new(1.0, 1.0)).unwrap();
        arena.run_frames(1, &mut rec);

        assert_eq!(rec.activations.len(), 2);
        assert_eq!(rec.activations[1].event, ActivationEvent::Deactivate);
        assert_eq!(rec.activations[1].role, EffectRole::Shield);
        assert_eq!(arena.actors.position(id), Some(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn respawn_rejects_non_finite_position() {
        let mut arena = crowd(test_config(1), 1);
        arena.despawn(ActorId(0)).unwrap();
        assert!(matches!(
            arena.respawn(ActorId(0), Vec2::new(f32::NAN, 0.0)),
            Err(SimError::Config(_))
        ));
        assert!(!arena.actors.is_alive(ActorId(0)));
        assert!(matches!(arena.respawn(ActorId(5), Vec2::ZERO), Err(SimError::UnknownActor(_))));
    }

    #[test]
    fn contact_normal_reflects_on_next_frame() {
        let mut b = ArenaBuilder::new(test_config(10));
        let id = b.spawn_wanderer(WanderConfig::default().with_speed(1.0), Some(Vec2::ZERO));
        let mut arena = b.build().unwrap();
        arena.actors.wanderer_mut(id).unwrap().set_heading(Vec2::X);

        arena.report_contact(id, Vec2::NEG_X).unwrap();
        arena.run_frames(1, &mut NoopObserver);

        let w = arena.actors.wanderer(id).unwrap();
        assert_eq!(w.heading(), Vec2::NEG_X);
        // Two 0.125 s sub-steps at speed 1.
        assert_relative_eq!(w.position().x, -0.25);
    }

    #[test]
    fn contact_for_unknown_actor_errors() {
        let mut arena = crowd(test_config(1), 1);
        assert!(arena.report_contact(ActorId(5), Vec2::X).is_err());
    }

    #[test]
    fn shrinking_bounds_pulls_everyone_in() {
        let mut arena = crowd(test_config(100), 12);
        arena.run_frames(10, &mut NoopObserver);

        let small = Rect::new(Vec2::splat(-2.0), Vec2::splat(2.0));
        arena.set_bounds(Some(small));
        assert_eq!(arena.bounds(), Some(small));
        arena.run_frames(1, &mut NoopObserver);

        let inner = Rect::new(Vec2::splat(-1.5), Vec2::splat(1.5));
        for id in arena.actors.iter_alive() {
            let p = arena.actors.position(id).unwrap();
            assert!(inner.contains(p), "{id} at {p}");
        }
    }

    #[test]
    fn removing_bounds_stops_motion() {
        let mut arena = crowd(test_config(100), 3);
        arena.run_frames(2, &mut NoopObserver);
        arena.set_bounds(None);
        let before: Vec<_> = arena.actors.iter_alive().map(|id| arena.actors.position(id)).collect();
        arena.run_frames(10, &mut NoopObserver);
        let after: Vec<_> = arena.actors.iter_alive().map(|id| arena.actors.position(id)).collect();
        assert_eq!(before, after);
        assert!(arena.actors.iter_alive().all(|id| arena.actors.velocity(id) == Vec2::ZERO));
    }
}
