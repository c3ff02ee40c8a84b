//! Plain data row types written by output backends.

use hf_core::AgentMode;

/// One agent's marker at a given time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub now_ms:   u64,
    pub x:        f32,
    pub y:        f32,
    pub mode:     AgentMode,
}

/// One existing edge at a given time, endpoints in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSnapshotRow {
    pub now_ms:  u64,
    pub a_x:     f32,
    pub a_y:     f32,
    pub b_x:     f32,
    pub b_y:     f32,
    pub traffic: u64,
}
