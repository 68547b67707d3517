//! Presentation: owns the slides, the active slide and the hash guard.
//!
//! Methods:
//! - new (reads the initial hash), slide_move_by / slide_move_to, item_move_by / item_move_to
//! - apply (logical commands), handle_hash_change, handle_resize, step_completed
//! - begin_navigation / end_navigation, update_hash, current_hash

use crate::config::Config;
use crate::deck::DeckSpec;
use crate::error::PresentationError;
use crate::hash::{format_hash, parse_hash, strip_marker};
use crate::host::{Completion, Host};
use crate::inputs::Command;
use crate::locator::{IdentifierIndex, Locator};
use crate::slide::{Slide, StepOutcome};
use crate::style::StyleRegistry;

/// Slide indices past `i64::MAX` can only come from a parsed hash; keep them
/// out of range instead of letting them wrap to a negative target.
fn slide_target(slide: usize) -> i64 {
    i64::try_from(slide).unwrap_or(i64::MAX)
}

#[derive(Debug)]
pub struct Presentation<H: Host> {
    cfg: Config,
    host: H,
    slides: Vec<Slide>,
    current: usize,
    ids: IdentifierIndex,
    styles: StyleRegistry,
    /// Hash writes are deferred while > 0.
    suppression: u32,
}

impl<H: Host> Presentation<H> {
    /// Build the presentation and move to the position named by the host's
    /// current hash, without animating and without writing the hash back.
    pub fn new(deck: &DeckSpec, cfg: Config, host: H) -> Result<Self, PresentationError> {
        if deck.slides.is_empty() {
            return Err(PresentationError::EmptyDeck);
        }
        let styles = StyleRegistry::from_config(&cfg)?;
        let slides = deck
            .slides
            .iter()
            .enumerate()
            .map(|(i, spec)| Slide::new(i, spec))
            .collect();

        let mut p = Self {
            cfg,
            host,
            slides,
            current: 0,
            ids: IdentifierIndex::from_deck(deck),
            styles,
            suppression: 0,
        };

        p.begin_navigation();
        for slide in &mut p.slides {
            slide.reset(&mut p.host);
        }
        let loc = parse_hash(&p.host.hash(), &p.ids);
        if p.slide_move_to(slide_target(loc.slide), false) {
            let cur = p.current;
            p.slides[cur].jump_to(loc.item, &mut p.host);
        } else {
            log::warn!("initial hash names missing slide {}", loc.slide);
            p.slide_move_to(0, false);
        }
        p.end_navigation(false);
        Ok(p)
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: construction rejects empty decks.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    pub fn current_title(&self) -> Option<&str> {
        self.current_slide().title()
    }

    /// Label shown on each slide, e.g. "Slide 2 of 7".
    pub fn slide_label(&self, index: usize) -> String {
        format!("Slide {} of {}", index + 1, self.slides.len())
    }

    /// Active slide and its revealed count.
    pub fn locator(&self) -> Locator {
        Locator::new(self.current, self.current_slide().current())
    }

    pub fn identifier_index(&self) -> &IdentifierIndex {
        &self.ids
    }

    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    pub fn navigation_depth(&self) -> u32 {
        self.suppression
    }

    /// Open a navigation region. Regions nest.
    pub fn begin_navigation(&mut self) {
        self.suppression += 1;
    }

    /// Close a navigation region; with `commit`, write the hash if this was the
    /// outermost one.
    pub fn end_navigation(&mut self, commit: bool) {
        if self.suppression == 0 {
            log::warn!("end_navigation without matching begin_navigation");
        }
        self.suppression = self.suppression.saturating_sub(1);
        if commit {
            self.update_hash();
        }
    }

    /// Hash for the current state (without the leading `#`).
    pub fn current_hash(&self) -> String {
        format_hash(self.current_slide())
    }

    /// Write the current state to the host's hash. Item moves within the
    /// active slide replace the history entry; slide changes push a new one.
    pub fn update_hash(&mut self) {
        if self.suppression > 0 {
            return;
        }
        let hash = self.current_hash();
        let existing = self.host.hash();
        if strip_marker(&existing) == hash {
            return;
        }
        log::debug!("moving from #{} to #{hash}", strip_marker(&existing));

        let scroll = self.host.scroll_offset();
        if parse_hash(&existing, &self.ids).slide == self.current {
            self.host.replace_hash(&hash);
        } else {
            self.host.push_hash(&hash);
        }
        self.host.restore_scroll(scroll);
    }

    /// Move relative to the active slide. Moving before the first slide is
    /// ignored; moving past the last one is a no-op in `slide_move_to`.
    pub fn slide_move_by(&mut self, offset: i64) {
        let target = (self.current as i64).saturating_add(offset);
        if target >= 0 {
            self.slide_move_to(target, true);
        }
    }

    /// Make `target` the active slide. Negative targets count from the end.
    /// Returns false, touching nothing, when no such slide exists.
    pub fn slide_move_to(&mut self, target: i64, animate: bool) -> bool {
        let len = self.slides.len() as i64;
        let target = if target < 0 { len + target % len } else { target };
        if target >= len {
            log::debug!("slide {target} out of range (0..{len})");
            return false;
        }
        let target = target as usize;
        let from = self.current;

        self.begin_navigation();

        let min = from.min(target) as i64;
        let max = from.max(target) as i64;
        let margin = self.cfg.cull_margin as i64;
        let band = self.cfg.cull_band as i64;

        for (i, slide) in self.slides.iter_mut().enumerate() {
            // Slides before the target read as fully shown; so does the target
            // itself when approached from ahead.
            if i < target || (i == target && target < from) {
                slide.fill(&mut self.host);
            } else {
                slide.clear(&mut self.host);
            }

            let pos = i as i64;
            let hidden = pos < min - margin
                || pos > max + margin
                || (pos > min + band && pos < max - band);
            self.host.set_slide_visible(i, !hidden);
        }

        // Snap to account for newly hidden slides before the real transition.
        if animate {
            self.host.layout(from, false);
        }

        self.current = target;
        self.host.layout(target, animate);
        self.host.set_title(self.slides[target].title());
        log::debug!("slide {from} -> {target}");

        self.end_navigation(true);
        true
    }

    pub fn item_move_by(&mut self, offset: i64) {
        let outcome = self.slides[self.current].move_by(offset);
        self.drive(outcome);
    }

    /// Animate the active slide to `count` revealed items, one item at a time.
    pub fn item_move_to(&mut self, count: i64) {
        let outcome = self.slides[self.current].move_to(count);
        self.drive(outcome);
    }

    pub fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::AdvanceItem => self.item_move_by(1),
            Command::RetreatItem => self.item_move_by(-1),
            Command::AdvanceSlide => self.slide_move_by(1),
            Command::RetreatSlide => self.slide_move_by(-1),
            Command::Home => {
                // Slide 0 approached from ahead would read as full; home is its clean state.
                self.begin_navigation();
                self.slide_move_to(0, true);
                self.slides[0].clear(&mut self.host);
                self.end_navigation(true);
            }
            Command::End => {
                if self.current + 1 == self.slides.len() {
                    let count = self.current_slide().len() as i64;
                    self.item_move_to(count);
                } else {
                    self.slide_move_to(-1, true);
                }
            }
        }
    }

    /// React to an external hash change (back/forward, edited URL, or the echo
    /// of our own write). Never writes the hash itself.
    pub fn handle_hash_change(&mut self) {
        self.begin_navigation();
        let loc = parse_hash(&self.host.hash(), &self.ids);
        // Same slide: only the item count may differ; skip the slide move so
        // an echo of our own write does not feed back.
        if loc.slide != self.current {
            self.slide_move_to(slide_target(loc.slide), true);
        }
        let cur = self.current;
        self.slides[cur].jump_to(loc.item, &mut self.host);
        self.end_navigation(false);
    }

    pub fn handle_resize(&mut self) {
        self.host.resize();
        self.host.layout(self.current, false);
    }

    /// The host finished the effect started for a step on `slide`.
    pub fn step_completed(&mut self, slide: usize) {
        let Some(s) = self.slides.get_mut(slide) else {
            log::warn!("completion for missing slide {slide}");
            return;
        };
        let outcome = s.complete_step();
        self.drive(outcome);
    }

    /// Run the step loop until it settles or waits on the host.
    fn drive(&mut self, mut outcome: StepOutcome) {
        loop {
            match outcome {
                StepOutcome::Idle => return,
                StepOutcome::AdvanceSlide => {
                    self.slide_move_by(1);
                    return;
                }
                StepOutcome::RetreatSlide => {
                    self.slide_move_by(-1);
                    return;
                }
                StepOutcome::Step(step) => {
                    let item = &self.slides[step.slide].items()[step.item];
                    let style = self.styles.resolve(item.animation.as_deref());
                    let completion = self.host.animate(step, style);
                    // The hash follows the step's intent, before the effect ends.
                    self.update_hash();
                    match completion {
                        Completion::Pending => return,
                        Completion::Done => outcome = self.slides[step.slide].complete_step(),
                    }
                }
            }
        }
    }
}
