//! Pursuit controller: the collector's target registry and its two-mode
//! state machine.
//!
//! # Modes
//!
//! - **Pursuing**: a target is selected and the collector has been launched
//!   toward it.
//! - **Idling**: nothing to chase; the collector orbits a fixed centre with a
//!   slowly growing radius.
//!
//! # Transitions
//!
//! ```text
//! Idling    --arrival-------------------------> Pursuing
//! Pursuing  --collect, targets remain---------> Pursuing (next target)
//! Pursuing  --collect, registry now empty-----> Idling   (orbit reset)
//! Pursuing  --arrival beating closest bound---> Pursuing (pre-empted)
//! ```
//!
//! The controller only makes decisions. It never touches ECS state; the
//! systems in [`super::systems`] apply what it returns to the movement sink.

use bevy::prelude::*;

use crate::game::collections::RankedList;

use super::policy::{select_next_pursuit_target, should_preempt_current_pursuit};
use super::target::Target;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PursuitMode {
    #[default]
    Idling,
    Pursuing,
}

/// Circle the collector traces while idling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdleOrbit {
    pub center: Vec2,
    pub radius: f32,
    pub angle: f32,
}

impl IdleOrbit {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            angle: 0.0,
        }
    }

    /// One physics step of radius growth, capped at `max`.
    pub fn grow(&mut self, step: f32, max: f32) {
        self.radius = (self.radius + step).min(max);
    }

    /// Advance the angle by `rotate_speed * dt` and return the new position.
    pub fn advance(&mut self, rotate_speed: f32, dt: f32) -> Vec2 {
        self.angle += rotate_speed * dt;
        self.position()
    }

    pub fn position(&self) -> Vec2 {
        self.center + Vec2::new(self.angle.sin(), self.angle.cos()) * self.radius
    }
}

/// Result of a contact report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactOutcome {
    /// Not the pursued pickup, or nothing to collect.
    Ignored,
    /// `pickup` was collected. `next` is the new pursuit, `None` means idling.
    Collected { pickup: Entity, next: Option<Target> },
}

/// Registry of known pickups plus pursuit state, attached to the collector.
#[derive(Component, Debug, Clone)]
pub struct PursuitController {
    targets: RankedList<Target>,
    pursued: Option<Target>,
    closest_rank_seen: f32,
    mode: PursuitMode,
    orbit: IdleOrbit,
    idle_start_radius: f32,
    collected: u32,
}

impl PursuitController {
    /// New controller, idling around `home`.
    pub fn new(home: Vec2, idle_start_radius: f32) -> Self {
        Self {
            targets: RankedList::new(),
            pursued: None,
            closest_rank_seen: f32::INFINITY,
            mode: PursuitMode::Idling,
            orbit: IdleOrbit::new(home, idle_start_radius),
            idle_start_radius,
            collected: 0,
        }
    }

    pub fn targets(&self) -> &RankedList<Target> {
        &self.targets
    }

    pub fn pursued(&self) -> Option<&Target> {
        self.pursued.as_ref()
    }

    pub fn mode(&self) -> PursuitMode {
        self.mode
    }

    pub fn is_idling(&self) -> bool {
        self.mode == PursuitMode::Idling
    }

    pub fn orbit(&self) -> &IdleOrbit {
        &self.orbit
    }

    pub fn orbit_mut(&mut self) -> &mut IdleOrbit {
        &mut self.orbit
    }

    pub fn closest_rank_seen(&self) -> f32 {
        self.closest_rank_seen
    }

    /// Pickups collected over the controller's lifetime.
    pub fn collected(&self) -> u32 {
        self.collected
    }

    /// Register a newly spawned pickup.
    ///
    /// Returns the target to launch toward if the arrival takes over the
    /// pursuit, `None` if the current pursuit continues.
    pub fn on_pickup_arrived(
        &mut self,
        pickup: Entity,
        pickup_pos: Vec2,
        owner_pos: Vec2,
    ) -> Option<Target> {
        if self.targets.position(|t| t.pickup == pickup).is_some() {
            debug!("Pickup {:?} already tracked, arrival ignored", pickup);
            return None;
        }

        let target = Target::measure(pickup, pickup_pos, owner_pos);
        self.targets.add(target);

        if !should_preempt_current_pursuit(target.rank, self.closest_rank_seen, self.pursued.as_ref()) {
            return None;
        }

        if target.rank < self.closest_rank_seen {
            self.closest_rank_seen = target.rank;
        }
        self.pursue(target);
        Some(target)
    }

    /// Handle the collector overlapping `other`.
    ///
    /// Only the pursued pickup can be collected. On collection every remaining
    /// target is re-measured against `owner_pos` using `locate`; targets whose
    /// pickup can no longer be located are dropped.
    pub fn on_contact(
        &mut self,
        other: Entity,
        owner_pos: Vec2,
        locate: impl Fn(Entity) -> Option<Vec2>,
    ) -> ContactOutcome {
        if self.targets.is_empty() {
            self.pursued = None;
            if !self.is_idling() {
                self.start_idling(owner_pos);
            }
            return ContactOutcome::Ignored;
        }

        let Some(pursued) = self.pursued else {
            return ContactOutcome::Ignored;
        };
        if pursued.pickup != other {
            return ContactOutcome::Ignored;
        }

        let Some(index) = self.locate_pursued(&pursued) else {
            error!("Pursued pickup {:?} missing from registry", pursued.pickup);
            self.pursued = None;
            return ContactOutcome::Ignored;
        };
        if let Err(e) = self.targets.remove_at(index) {
            error!("Failed to remove pursued pickup {:?}: {}", pursued.pickup, e);
            return ContactOutcome::Ignored;
        }
        self.collected += 1;

        let before = self.targets.count();
        self.targets.retain(|t| locate(t.pickup).is_some());
        if self.targets.count() < before {
            warn!("Dropped {} targets whose pickups vanished", before - self.targets.count());
        }
        for target in self.targets.iter_mut() {
            if let Some(pickup_pos) = locate(target.pickup) {
                target.remeasure(pickup_pos, owner_pos);
            }
        }
        self.targets.sort();

        let next = select_next_pursuit_target(&self.targets);
        match next {
            Some(target) => self.pursue(target),
            None => self.start_idling(owner_pos),
        }

        ContactOutcome::Collected {
            pickup: pursued.pickup,
            next,
        }
    }

    /// Registry index of the pursued target.
    ///
    /// Rank search first; if it misses or lands on a different pickup of equal
    /// rank, fall back to a linear scan by identity.
    fn locate_pursued(&self, pursued: &Target) -> Option<usize> {
        if let Some(index) = self.targets.index_of(pursued) {
            if self.targets.get(index).is_ok_and(|t| t.pickup == pursued.pickup) {
                return Some(index);
            }
        }

        let index = self.targets.position(|t| t.pickup == pursued.pickup);
        if index.is_some() {
            warn!("Rank lookup missed pickup {:?}, found by identity", pursued.pickup);
        }
        index
    }

    fn pursue(&mut self, target: Target) {
        self.pursued = Some(target);
        self.mode = PursuitMode::Pursuing;
    }

    fn start_idling(&mut self, owner_pos: Vec2) {
        self.pursued = None;
        self.mode = PursuitMode::Idling;
        self.orbit = IdleOrbit::new(owner_pos, self.idle_start_radius);
    }
}
