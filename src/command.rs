//! Reconfiguration commands
//!
//! A UI or network task queues [`ShowCommand`] values into a bounded
//! [`CommandChannel`]; the render loop drains them at the frame boundary so
//! configuration never changes while a frame's pixels are being queried.
//! Synchronization uses `critical-section`, so producers may live in another
//! task or an interrupt handler.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::color::Rgb;
use crate::engine::ShowEngine;
use crate::show::{Direction, ShowType, TransitionType};

/// One configuration call, mirroring the engine setters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShowCommand {
    SetShowType(ShowType),
    SetSpeed(u16),
    SetSize(u16),
    SetDirection(Direction),
    SetSplits(u16),
    SetTransition(TransitionType),
    SetTransitionWidth(f32),
    /// 1-based step number and its color
    SetColorStep(u8, Rgb),
    SetColorCount(u8),
    Restart,
}

impl ShowEngine {
    /// Apply a single command
    pub fn apply(&mut self, command: ShowCommand) {
        match command {
            ShowCommand::SetShowType(show_type) => self.set_show_type(show_type),
            ShowCommand::SetSpeed(bpm) => self.set_speed(bpm),
            ShowCommand::SetSize(size) => self.set_size(size),
            ShowCommand::SetDirection(direction) => self.set_direction(direction),
            ShowCommand::SetSplits(splits) => self.set_splits(splits),
            ShowCommand::SetTransition(transition) => self.set_transition(transition),
            ShowCommand::SetTransitionWidth(width) => self.set_transition_width(width),
            ShowCommand::SetColorStep(step, color) => {
                self.set_color_step(step, color.r, color.g, color.b);
            }
            ShowCommand::SetColorCount(count) => self.set_color_count(count),
            ShowCommand::Restart => self.restart(),
        }
    }
}

/// Returned when the channel is full, carries the rejected command
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrySendError(pub ShowCommand);

/// Bounded command queue
pub struct CommandChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<ShowCommand, SIZE>>>,
}

impl<const SIZE: usize> CommandChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { channel: self }
    }

    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { channel: self }
    }

    fn try_send(&self, command: ShowCommand) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(TrySendError)
        })
    }

    fn try_receive(&self) -> Option<ShowCommand> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for CommandChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle for a [`CommandChannel`]
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Queue a command
    ///
    /// Returns `Err(TrySendError(command))` if the channel is full.
    pub fn try_send(&self, command: ShowCommand) -> Result<(), TrySendError> {
        self.channel.try_send(command)
    }
}

/// Consumer handle for a [`CommandChannel`]
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<ShowCommand> {
        self.channel.try_receive()
    }

    /// Drain every queued command into the engine
    ///
    /// Returns the number of commands applied.
    pub fn apply_pending(&self, engine: &mut ShowEngine) -> usize {
        let mut applied = 0;
        while let Some(command) = self.try_receive() {
            engine.apply(command);
            applied += 1;
        }
        applied
    }
}
