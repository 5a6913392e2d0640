//! Interactive tutorial: linear step machine, content registry, change events
//!
//! The tutorial is a fixed, linearly ordered walk from [`TutorialStep::Start`]
//! to [`TutorialStep::End`]. Per-step display text and gating live in a
//! [`StepContentSet`] loaded from a JSON asset; a hole in that registry is a
//! fatal configuration error. The [`TutorialController`] owns the current
//! step and an observer list so views can re-render when other parts of the
//! system drive the tutorial forward.
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use thiserror::Error;

/// Every tutorial step in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TutorialStep {
    Start,
    GoToStatsPage,
    StatsPage,
    StatsToTerminal,
    TerminalIntro,
    TerminalHelp,
    TerminalList,
    TerminalProbe,
    TerminalProbeDeep1,
    TerminalProbeDeep2,
    TerminalLink,
    TerminalScout,
    TerminalCrack,
    TerminalSiphon,
    SiphonMechanics,
    TerminalCreateScript,
    ScriptEditor,
    TerminalMemFree,
    TerminalRunScript,
    GoToTasksPage,
    TasksPage,
    TasksToTerminal,
    TerminalWatchLog,
    GoToRigPage,
    RigIntro,
    RigToCityPage,
    CityPage,
    DocsPage,
    End,
}

impl TutorialStep {
    /// All steps, ordered. Indexed by the enum discriminant.
    pub const ALL: [Self; 29] = [
        Self::Start,
        Self::GoToStatsPage,
        Self::StatsPage,
        Self::StatsToTerminal,
        Self::TerminalIntro,
        Self::TerminalHelp,
        Self::TerminalList,
        Self::TerminalProbe,
        Self::TerminalProbeDeep1,
        Self::TerminalProbeDeep2,
        Self::TerminalLink,
        Self::TerminalScout,
        Self::TerminalCrack,
        Self::TerminalSiphon,
        Self::SiphonMechanics,
        Self::TerminalCreateScript,
        Self::ScriptEditor,
        Self::TerminalMemFree,
        Self::TerminalRunScript,
        Self::GoToTasksPage,
        Self::TasksPage,
        Self::TasksToTerminal,
        Self::TerminalWatchLog,
        Self::GoToRigPage,
        Self::RigIntro,
        Self::RigToCityPage,
        Self::CityPage,
        Self::DocsPage,
        Self::End,
    ];

    #[must_use]
    pub const fn first() -> Self {
        Self::Start
    }

    /// The step after this one, or `None` at [`TutorialStep::End`].
    #[must_use]
    pub fn next_step(self) -> Option<Self> {
        Self::ALL.get(self as usize + 1).copied()
    }

    /// The step before this one, or `None` at [`TutorialStep::Start`].
    #[must_use]
    pub fn prev_step(self) -> Option<Self> {
        (self as usize)
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx))
            .copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TutorialError {
    /// The content registry has a hole inside the valid step range. This is
    /// unrecoverable: rendering must not silently skip the step.
    #[error("no tutorial content registered for step {0:?}")]
    MissingContent(TutorialStep),
}

/// Display content and gating for a single step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepContent {
    pub text: String,
    /// Whether the Next control is effective at this step. Gated steps wait
    /// for the embedding system to call [`TutorialMachine::unlock_step`]
    /// (e.g. the player ran the requested terminal command).
    pub can_advance: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StepContentEntry {
    step: TutorialStep,
    #[serde(flatten)]
    content: StepContent,
}

/// Total mapping from step to content, loaded from the tutorial JSON asset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepContentSet {
    entries: HashMap<TutorialStep, StepContent>,
}

impl StepContentSet {
    /// Parse the registry from its JSON asset (an array of step entries).
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the registry shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<StepContentEntry> = serde_json::from_str(json)?;
        Ok(Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.step, entry.content))
                .collect(),
        })
    }

    pub fn insert(&mut self, step: TutorialStep, content: StepContent) {
        self.entries.insert(step, content);
    }

    /// Check totality over the whole step range.
    ///
    /// # Errors
    ///
    /// Returns [`TutorialError::MissingContent`] naming the first uncovered
    /// step. Absence of content is a fatal configuration error.
    pub fn validate(&self) -> Result<(), TutorialError> {
        for step in TutorialStep::ALL {
            if !self.entries.contains_key(&step) {
                return Err(TutorialError::MissingContent(step));
            }
        }
        Ok(())
    }

    /// Content for one step.
    ///
    /// # Errors
    ///
    /// Returns [`TutorialError::MissingContent`] if the registry has no entry
    /// for `step`.
    pub fn content_for(&self, step: TutorialStep) -> Result<&StepContent, TutorialError> {
        self.entries
            .get(&step)
            .ok_or(TutorialError::MissingContent(step))
    }
}

/// Pure transition core of the tutorial.
///
/// `next` takes the gating decision as an explicit boolean so the transition
/// function stays testable without a registry. The `step_unlocked` flag is
/// the external-event gate: flipped by [`TutorialMachine::unlock_step`],
/// consumed by the next effective transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialMachine {
    step: TutorialStep,
    running: bool,
    step_unlocked: bool,
}

impl Default for TutorialMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl TutorialMachine {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step: TutorialStep::first(),
            running: true,
            step_unlocked: false,
        }
    }

    #[must_use]
    pub const fn step(&self) -> TutorialStep {
        self.step
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub const fn is_step_unlocked(&self) -> bool {
        self.step_unlocked
    }

    /// External event gate: the embedding system observed the action the
    /// current step asked for. Returns whether the flag actually changed.
    pub fn unlock_step(&mut self) -> bool {
        if self.step_unlocked || !self.running {
            return false;
        }
        self.step_unlocked = true;
        true
    }

    /// Advance one step if allowed. `can_advance` comes from the step's
    /// content; a gated step still advances once unlocked. Entering
    /// [`TutorialStep::End`] terminates the tutorial. Past-the-end calls are
    /// clamped no-ops. Returns whether the step changed.
    pub fn next(&mut self, can_advance: bool) -> bool {
        if !self.running || !(can_advance || self.step_unlocked) {
            return false;
        }
        let Some(next) = self.step.next_step() else {
            return false;
        };
        self.step = next;
        self.step_unlocked = false;
        if self.step == TutorialStep::End {
            self.running = false;
        }
        true
    }

    /// Step back unconditionally, clamped at [`TutorialStep::Start`].
    /// Returns whether the step changed.
    pub fn prev(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let Some(prev) = self.step.prev_step() else {
            return false;
        };
        self.step = prev;
        self.step_unlocked = false;
        true
    }

    /// Force-terminate from any step, bypassing the remaining sequence.
    /// Returns whether anything changed.
    pub fn end(&mut self) -> bool {
        if !self.running && self.step == TutorialStep::End {
            return false;
        }
        self.step = TutorialStep::End;
        self.running = false;
        self.step_unlocked = false;
        true
    }

    /// Reset to the beginning of the sequence.
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

/// Owns the machine, the content registry, and the observer list.
///
/// Views hold a [`TutorialHandle`] instead of touching this directly.
pub struct TutorialController {
    machine: TutorialMachine,
    contents: StepContentSet,
    subscribers: Vec<(u64, Rc<dyn Fn()>)>,
    next_subscriber: u64,
}

impl TutorialController {
    /// Build a controller over a validated content registry.
    ///
    /// # Errors
    ///
    /// Returns [`TutorialError::MissingContent`] if the registry does not
    /// cover every step.
    pub fn new(contents: StepContentSet) -> Result<Self, TutorialError> {
        contents.validate()?;
        Ok(Self {
            machine: TutorialMachine::new(),
            contents,
            subscribers: Vec::new(),
            next_subscriber: 0,
        })
    }

    fn current_can_advance(&self) -> Result<bool, TutorialError> {
        Ok(self.contents.content_for(self.machine.step())?.can_advance)
    }
}

/// Cloneable handle to a shared [`TutorialController`].
///
/// Equality is pointer identity, so Yew props holding a handle only re-render
/// when the underlying controller is swapped out (the observer list covers
/// in-place changes).
#[derive(Clone)]
pub struct TutorialHandle {
    inner: Rc<RefCell<TutorialController>>,
}

impl PartialEq for TutorialHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl TutorialHandle {
    /// Build a controller and wrap it in a shared handle.
    ///
    /// # Errors
    ///
    /// Returns [`TutorialError::MissingContent`] if the registry does not
    /// cover every step.
    pub fn new(contents: StepContentSet) -> Result<Self, TutorialError> {
        Ok(Self {
            inner: Rc::new(RefCell::new(TutorialController::new(contents)?)),
        })
    }

    #[must_use]
    pub fn step(&self) -> TutorialStep {
        self.inner.borrow().machine.step()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.borrow().machine.is_running()
    }

    /// Content for the current step, cloned out so no borrow is held.
    ///
    /// # Errors
    ///
    /// Returns [`TutorialError::MissingContent`] if the registry has a hole
    /// at the current step.
    pub fn current_content(&self) -> Result<StepContent, TutorialError> {
        let controller = self.inner.borrow();
        controller
            .contents
            .content_for(controller.machine.step())
            .cloned()
    }

    /// Advance one step if the current step permits it.
    ///
    /// # Errors
    ///
    /// Returns [`TutorialError::MissingContent`] if the registry has a hole
    /// at the current step.
    pub fn next(&self) -> Result<(), TutorialError> {
        let changed = {
            let mut controller = self.inner.borrow_mut();
            let can_advance = controller.current_can_advance()?;
            controller.machine.next(can_advance)
        };
        if changed {
            self.notify();
        }
        Ok(())
    }

    /// Step back, clamped at the start.
    pub fn prev(&self) {
        let changed = self.inner.borrow_mut().machine.prev();
        if changed {
            self.notify();
        }
    }

    /// Dismiss the tutorial from any step.
    pub fn end(&self) {
        let changed = self.inner.borrow_mut().machine.end();
        if changed {
            self.notify();
        }
    }

    /// Record that the externally requested action happened, unblocking the
    /// gated current step.
    pub fn unlock_step(&self) {
        let changed = self.inner.borrow_mut().machine.unlock_step();
        if changed {
            self.notify();
        }
    }

    /// Start the tutorial over from the first step.
    pub fn restart(&self) {
        self.inner.borrow_mut().machine.restart();
        self.notify();
    }

    /// Register a change observer. The returned subscription unsubscribes on
    /// drop, so views can tie it to their mount lifetime.
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> TutorialSubscription {
        let mut controller = self.inner.borrow_mut();
        let id = controller.next_subscriber;
        controller.next_subscriber += 1;
        controller.subscribers.push((id, Rc::new(callback)));
        TutorialSubscription {
            controller: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Invoke every subscriber. Callbacks are cloned out first so they may
    /// re-enter the handle without a borrow conflict.
    fn notify(&self) {
        let callbacks: Vec<Rc<dyn Fn()>> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in callbacks {
            callback();
        }
    }
}

/// Scoped registration on a [`TutorialHandle`]; dropping it unsubscribes.
pub struct TutorialSubscription {
    controller: Weak<RefCell<TutorialController>>,
    id: u64,
}

impl TutorialSubscription {
    /// Unsubscribe explicitly. Dropping the subscription does the same.
    pub fn cancel(&mut self) {
        if let Some(controller) = self.controller.upgrade() {
            controller
                .borrow_mut()
                .subscribers
                .retain(|(id, _)| *id != self.id);
        }
        self.controller = Weak::new();
    }
}

impl Drop for TutorialSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}
