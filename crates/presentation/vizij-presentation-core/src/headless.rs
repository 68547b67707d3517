//! In-memory host.
//!
//! Records what a browser host would display and keeps a history stack for
//! the address fragment. Effects either complete on the spot or wait in
//! `pending` until [`Presentation::settle`] (or a manual
//! [`Presentation::step_completed`]) finishes them.

use std::collections::{BTreeMap, VecDeque};

use crate::hash::strip_marker;
use crate::host::{Completion, Location, ScrollOffset, Stage};
use crate::presentation::Presentation;
use crate::slide::{Direction, Step};
use crate::style::AnimationStyle;

#[derive(Clone, Debug)]
pub struct HeadlessHost {
    /// Complete every effect immediately.
    pub auto_complete: bool,
    /// Every step handed to `animate`, with the style chosen for it.
    pub started: Vec<(Step, String)>,
    /// Steps waiting for completion, oldest first.
    pub pending: VecDeque<Step>,
    /// `(slide, animate)` for each layout request.
    pub layouts: Vec<(usize, bool)>,
    pub resizes: usize,
    /// Title reported for each active-slide change.
    pub titles: Vec<Option<String>>,
    pub pushes: usize,
    pub replaces: usize,
    items: BTreeMap<(usize, usize), bool>,
    slides: BTreeMap<usize, bool>,
    history: Vec<String>,
    cursor: usize,
    scroll: ScrollOffset,
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self {
            auto_complete: true,
            started: Vec::new(),
            pending: VecDeque::new(),
            layouts: Vec::new(),
            resizes: 0,
            titles: Vec::new(),
            pushes: 0,
            replaces: 0,
            items: BTreeMap::new(),
            slides: BTreeMap::new(),
            history: vec![String::new()],
            cursor: 0,
            scroll: ScrollOffset::default(),
        }
    }
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose effects wait for an explicit completion.
    pub fn deferred() -> Self {
        Self {
            auto_complete: false,
            ..Self::default()
        }
    }

    /// Start with the given fragment as the only history entry.
    pub fn with_hash(mut self, hash: &str) -> Self {
        self.history = vec![strip_marker(hash).to_string()];
        self.cursor = 0;
        self
    }

    /// Simulate the user typing a new fragment (new history entry). The caller
    /// then delivers the change with `handle_hash_change`.
    pub fn navigate(&mut self, hash: &str) {
        self.history.truncate(self.cursor + 1);
        self.history.push(strip_marker(hash).to_string());
        self.cursor += 1;
    }

    /// Browser back button. Returns false at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Browser forward button. Returns false at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.history.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// History entries without the `#` marker, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn is_item_visible(&self, slide: usize, item: usize) -> bool {
        self.items.get(&(slide, item)).copied().unwrap_or(false)
    }

    /// Number of visible items on a slide.
    pub fn visible_items(&self, slide: usize) -> usize {
        self.items
            .range((slide, 0)..(slide + 1, 0))
            .filter(|(_, visible)| **visible)
            .count()
    }

    /// Slides are laid out until told otherwise.
    pub fn is_slide_visible(&self, slide: usize) -> bool {
        self.slides.get(&slide).copied().unwrap_or(true)
    }

    /// Drop recorded effects and history, keeping the current entry and the
    /// displayed state.
    pub fn clear_records(&mut self) {
        self.started.clear();
        self.layouts.clear();
        self.resizes = 0;
        self.titles.clear();
        self.pushes = 0;
        self.replaces = 0;
        let current = std::mem::take(&mut self.history[self.cursor]);
        self.history = vec![current];
        self.cursor = 0;
    }

    pub fn set_scroll(&mut self, offset: ScrollOffset) {
        self.scroll = offset;
    }

    pub fn scroll(&self) -> ScrollOffset {
        self.scroll
    }

    fn write(&mut self, hash: &str) -> String {
        // Fragment navigation scrolls the target into view.
        self.scroll = ScrollOffset::default();
        strip_marker(hash).to_string()
    }
}

impl Stage for HeadlessHost {
    fn animate(&mut self, step: Step, style: &AnimationStyle) -> Completion {
        self.started.push((step, style.name.clone()));
        self.items.insert(
            (step.slide, step.item),
            step.direction == Direction::Reveal,
        );
        if self.auto_complete {
            Completion::Done
        } else {
            self.pending.push_back(step);
            Completion::Pending
        }
    }

    fn set_item_visible(&mut self, slide: usize, item: usize, visible: bool) {
        self.items.insert((slide, item), visible);
    }

    fn set_slide_visible(&mut self, slide: usize, visible: bool) {
        self.slides.insert(slide, visible);
    }

    fn layout(&mut self, slide: usize, animate: bool) {
        self.layouts.push((slide, animate));
    }

    fn resize(&mut self) {
        self.resizes += 1;
    }

    fn set_title(&mut self, title: Option<&str>) {
        self.titles.push(title.map(str::to_owned));
    }
}

impl Location for HeadlessHost {
    fn hash(&self) -> String {
        let current = &self.history[self.cursor];
        if current.is_empty() {
            String::new()
        } else {
            format!("#{current}")
        }
    }

    fn replace_hash(&mut self, hash: &str) {
        let entry = self.write(hash);
        self.history[self.cursor] = entry;
        self.replaces += 1;
    }

    fn push_hash(&mut self, hash: &str) {
        let entry = self.write(hash);
        self.history.truncate(self.cursor + 1);
        self.history.push(entry);
        self.cursor += 1;
        self.pushes += 1;
    }

    fn scroll_offset(&self) -> ScrollOffset {
        self.scroll
    }

    fn restore_scroll(&mut self, offset: ScrollOffset) {
        self.scroll = offset;
    }
}

impl Presentation<HeadlessHost> {
    /// Complete pending steps until none remain. Returns how many completed.
    pub fn settle(&mut self) -> usize {
        let mut completed = 0;
        while let Some(step) = self.host_mut().pending.pop_front() {
            self.step_completed(step.slide);
            completed += 1;
        }
        completed
    }

    /// Complete only the oldest pending step.
    pub fn complete_next(&mut self) -> Option<Step> {
        let step = self.host_mut().pending.pop_front()?;
        self.step_completed(step.slide);
        Some(step)
    }
}
