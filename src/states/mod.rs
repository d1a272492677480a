//! States domain: the character's finite-state machine.
//!
//! Exactly one [`CharacterState`] is current. Each fixed tick the machine runs
//! its `execute`; a returned state replaces it, running the old state's `exit`
//! and the new state's `enter` exactly once.

mod attack;
mod context;
mod fall;
mod fall_slide;
mod getup;
mod jump;
mod run;
pub(crate) mod systems;
mod wall_slide;

use std::fmt;

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::ProfileKind;

pub use attack::AttackState;
pub use context::{CharacterContext, Clock, sweep_for_wall};
pub use fall::FallState;
pub use fall_slide::FallSlideState;
pub use getup::{GetupJumpState, GetupStandState};
pub use jump::{JumpState, Launch, wall_jump};
pub use run::RunState;
pub use wall_slide::WallSlideState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    Run,
    Jump,
    Fall,
    FallSlide,
    GetupStand,
    GetupJump,
    WallSlide,
    Attack,
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CharacterState {
    Run(RunState),
    Jump(JumpState),
    Fall(FallState),
    FallSlide(FallSlideState),
    GetupStand(GetupStandState),
    GetupJump(GetupJumpState),
    WallSlide(WallSlideState),
    Attack(AttackState),
}

macro_rules! state_conversions {
    ($($variant:ident($state:ty)),* $(,)?) => {
        $(
            impl From<$state> for CharacterState {
                fn from(state: $state) -> Self {
                    CharacterState::$variant(state)
                }
            }
        )*
    };
}

state_conversions!(
    Run(RunState),
    Jump(JumpState),
    Fall(FallState),
    FallSlide(FallSlideState),
    GetupStand(GetupStandState),
    GetupJump(GetupJumpState),
    WallSlide(WallSlideState),
    Attack(AttackState),
);

impl CharacterState {
    pub fn kind(&self) -> StateKind {
        match self {
            CharacterState::Run(_) => StateKind::Run,
            CharacterState::Jump(_) => StateKind::Jump,
            CharacterState::Fall(_) => StateKind::Fall,
            CharacterState::FallSlide(_) => StateKind::FallSlide,
            CharacterState::GetupStand(_) => StateKind::GetupStand,
            CharacterState::GetupJump(_) => StateKind::GetupJump,
            CharacterState::WallSlide(_) => StateKind::WallSlide,
            CharacterState::Attack(_) => StateKind::Attack,
        }
    }

    fn enter(&mut self, ctx: &mut CharacterContext) {
        match self {
            CharacterState::Run(state) => state.enter(ctx),
            CharacterState::Jump(state) => state.enter(ctx),
            CharacterState::Fall(state) => state.enter(ctx),
            CharacterState::FallSlide(state) => state.enter(ctx),
            CharacterState::GetupStand(state) => state.enter(ctx),
            CharacterState::GetupJump(state) => state.enter(ctx),
            CharacterState::WallSlide(state) => state.enter(ctx),
            CharacterState::Attack(state) => state.enter(ctx),
        }
    }

    fn execute(&mut self, ctx: &mut CharacterContext) -> Option<CharacterState> {
        match self {
            CharacterState::Run(state) => state.execute(ctx),
            CharacterState::Jump(state) => state.execute(ctx),
            CharacterState::Fall(state) => state.execute(ctx),
            CharacterState::FallSlide(state) => state.execute(ctx),
            CharacterState::GetupStand(state) => state.execute(ctx),
            CharacterState::GetupJump(state) => state.execute(ctx),
            CharacterState::WallSlide(state) => state.execute(ctx),
            CharacterState::Attack(state) => state.execute(ctx),
        }
    }

    fn exit(&mut self, ctx: &mut CharacterContext) {
        match self {
            CharacterState::Run(state) => state.exit(ctx),
            CharacterState::Jump(state) => state.exit(ctx),
            CharacterState::Fall(state) => state.exit(ctx),
            CharacterState::FallSlide(state) => state.exit(ctx),
            CharacterState::GetupStand(state) => state.exit(ctx),
            CharacterState::GetupJump(state) => state.exit(ctx),
            CharacterState::WallSlide(state) => state.exit(ctx),
            CharacterState::Attack(state) => state.exit(ctx),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Option<StateKind>,
    pub to: StateKind,
}

/// Holds the current state and the one before it.
#[derive(Component, Debug, Default)]
pub struct CharacterMachine {
    current: Option<CharacterState>,
    previous: Option<CharacterState>,
}

impl CharacterMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&CharacterState> {
        self.current.as_ref()
    }

    pub fn current_kind(&self) -> Option<StateKind> {
        self.current.as_ref().map(CharacterState::kind)
    }

    pub fn previous(&self) -> Option<&CharacterState> {
        self.previous.as_ref()
    }

    pub fn previous_kind(&self) -> Option<StateKind> {
        self.previous.as_ref().map(CharacterState::kind)
    }

    /// Enter the initial state. Bodies spawn mid-air, so the jump profile
    /// stays active until the first state that sets its own.
    pub fn start(&mut self, ctx: &mut CharacterContext) -> Transition {
        let transition = self.change_state(RunState.into(), ctx);
        ctx.set_physics_profile(ProfileKind::JumpStandard);
        transition
    }

    /// Run one step of the current state, switching if it asks to.
    pub fn tick(&mut self, ctx: &mut CharacterContext) -> Option<Transition> {
        ctx.previous = self.previous_kind();
        let next = self.current.as_mut()?.execute(ctx)?;
        Some(self.change_state(next, ctx))
    }

    /// Exit the current state (if any), then enter `next`.
    pub fn change_state(
        &mut self,
        next: CharacterState,
        ctx: &mut CharacterContext,
    ) -> Transition {
        if let Some(current) = self.current.as_mut() {
            current.exit(ctx);
        }

        let from = self.current_kind();
        self.previous = self.current.take();
        ctx.previous = from;

        let state = self.current.insert(next);
        state.enter(ctx);

        Transition {
            from,
            to: state.kind(),
        }
    }
}

/// Message fired whenever a character changes state.
#[derive(Debug, Clone)]
pub struct CharacterStateChanged {
    pub entity: Entity,
    pub from: Option<StateKind>,
    pub to: StateKind,
}

impl Message for CharacterStateChanged {}

pub struct StatesPlugin;

impl Plugin for StatesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CharacterStateChanged>();
    }
}
