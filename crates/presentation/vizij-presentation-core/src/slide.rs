//! Per-slide item reveal state machine.
//!
//! A slide drives `current` (items revealed) toward `target` one item at a
//! time. Each step is handed back to the owner as a [`StepOutcome::Step`]; the
//! owner starts the effect and, once the host reports completion, calls
//! [`Slide::complete_step`] to resume the loop. While a step is in flight any
//! retargeting is absorbed and picked up on the next iteration, so step N+1
//! never starts before step N has finished.

use serde::{Deserialize, Serialize};

use crate::deck::SlideSpec;
use crate::host::Stage;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Reveal,
    Conceal,
}

/// One single-item transition.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Step {
    pub slide: usize,
    pub item: usize,
    pub direction: Direction,
}

/// What the owner must do after a slide operation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StepOutcome {
    /// Nothing to start: settled, or absorbed by the running loop.
    Idle,
    /// A step was started; animate it and refresh the hash.
    Step(Step),
    /// The move ran past the last item.
    AdvanceSlide,
    /// The move ran before the first item.
    RetreatSlide,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Item {
    pub id: Option<String>,
    pub animation: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Slide {
    index: usize,
    id: Option<String>,
    title: Option<String>,
    items: Vec<Item>,
    current: usize,
    target: i64,
    stepping: bool,
}

impl Slide {
    pub fn new(index: usize, spec: &SlideSpec) -> Self {
        Self {
            index,
            id: spec.id.clone().filter(|id| !id.is_empty()),
            title: spec.title.clone().filter(|t| !t.trim().is_empty()),
            items: spec
                .items
                .iter()
                .map(|it| Item {
                    id: it.id.clone().filter(|id| !id.is_empty()),
                    animation: it.animation.clone().filter(|a| !a.is_empty()),
                })
                .collect(),
            current: 0,
            target: 0,
            stepping: false,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items currently revealed, counted from the first.
    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Count the slide is heading to once in-flight steps finish.
    #[inline]
    pub fn target(&self) -> i64 {
        self.target
    }

    #[inline]
    pub fn is_stepping(&self) -> bool {
        self.stepping
    }

    pub fn is_settled(&self) -> bool {
        !self.stepping && self.target == self.current as i64
    }

    /// Token used in the hash: the slide identifier or its position.
    pub fn token(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => self.index.to_string(),
        }
    }

    pub fn move_by(&mut self, offset: i64) -> StepOutcome {
        self.move_to(self.target.saturating_add(offset))
    }

    pub fn move_to(&mut self, index: i64) -> StepOutcome {
        if index < 0 {
            return StepOutcome::RetreatSlide;
        }
        if index > self.items.len() as i64 {
            return StepOutcome::AdvanceSlide;
        }
        self.target = index;
        if self.stepping {
            StepOutcome::Idle
        } else {
            self.run_step()
        }
    }

    /// Resume the loop after the host finished the in-flight step.
    pub fn complete_step(&mut self) -> StepOutcome {
        if !self.stepping {
            log::warn!(
                "slide {}: completion without a step in flight; ignored",
                self.index
            );
            return StepOutcome::Idle;
        }
        self.run_step()
    }

    fn run_step(&mut self) -> StepOutcome {
        self.stepping = false;

        if self.target < 0 {
            return StepOutcome::RetreatSlide;
        }
        if self.target > self.items.len() as i64 {
            return StepOutcome::AdvanceSlide;
        }

        let target = self.target as usize;
        if target < self.current {
            self.stepping = true;
            self.current -= 1;
            StepOutcome::Step(Step {
                slide: self.index,
                item: self.current,
                direction: Direction::Conceal,
            })
        } else if target > self.current {
            self.stepping = true;
            self.current += 1;
            StepOutcome::Step(Step {
                slide: self.index,
                item: self.current - 1,
                direction: Direction::Reveal,
            })
        } else {
            StepOutcome::Idle
        }
    }

    /// Instantly show items `[0, index)` and hide the rest. Returns whether the
    /// revealed count changed.
    ///
    /// Leaves `target` alone when `current` already matches: a hash echo of the
    /// step in flight must not cut a longer move short.
    pub fn jump_to(&mut self, index: usize, stage: &mut dyn Stage) -> bool {
        let index = self.clamp(index);
        if self.current == index {
            return false;
        }
        self.settle_at(index, stage)
    }

    /// Like [`Slide::jump_to`], but also drops any pending retarget so a step
    /// still in flight resumes into nothing. Returns whether the count or the
    /// target changed.
    pub fn settle_at(&mut self, index: usize, stage: &mut dyn Stage) -> bool {
        let index = self.clamp(index);
        let changed = self.current != index || self.target != index as i64;
        self.current = index;
        self.target = index as i64;
        for i in 0..self.items.len() {
            stage.set_item_visible(self.index, i, i < index);
        }
        changed
    }

    /// Hide every item.
    pub fn clear(&mut self, stage: &mut dyn Stage) -> bool {
        self.settle_at(0, stage)
    }

    /// Show every item.
    pub fn fill(&mut self, stage: &mut dyn Stage) -> bool {
        self.settle_at(self.items.len(), stage)
    }

    fn clamp(&self, index: usize) -> usize {
        if index > self.items.len() {
            log::warn!(
                "slide {}: item count {index} clamped to {}",
                self.index,
                self.items.len()
            );
            self.items.len()
        } else {
            index
        }
    }

    /// Hide every item regardless of the recorded count. Used once at startup
    /// when the document may show items the state machine does not know about.
    pub(crate) fn reset(&mut self, stage: &mut dyn Stage) {
        self.current = 0;
        self.target = 0;
        for i in 0..self.items.len() {
            stage.set_item_visible(self.index, i, false);
        }
    }
}
