//! Plain data row types written by output backends.

/// One actor's kinematic state at a snapshot frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorSnapshotRow {
    pub actor_id:  u32,
    pub frame:     u64,
    pub time_secs: f64,
    pub x:         f32,
    pub y:         f32,
    pub vx:        f32,
    pub vy:        f32,
    /// Zero for actors without a wanderer.
    pub heading_x: f32,
    pub heading_y: f32,
}

/// One timer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationRow {
    pub frame:     u64,
    pub time_secs: f64,
    pub actor_id:  u32,
    /// `"shield"` or `"weapon"`.
    pub role:      &'static str,
    /// `"activate"` or `"deactivate"`.
    pub event:     &'static str,
}
