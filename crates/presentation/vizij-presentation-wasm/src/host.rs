//! Host implemented by a JavaScript object.
//!
//! Expected shape (all functions, the last four optional):
//!
//! ```js
//! {
//!   animate(slide, item, direction, style, durationMs) -> boolean, // true = already finished
//!   setItemVisible(slide, item, visible),
//!   setSlideVisible(slide, visible),
//!   layout(slide, animate),
//!   getHash() -> string,
//!   replaceHash(hash),
//!   pushHash(hash),
//!   resize?(),
//!   setTitle?(title | undefined),
//!   getScroll?() -> { window_x, host_x },
//!   restoreScroll?({ window_x, host_x }),
//! }
//! ```
//!
//! Callbacks are invoked with the host object as `this` while the presentation
//! is borrowed; a finished effect must be reported later through
//! `step_completed`, never from inside `animate`.

use js_sys::{Array, Function, Reflect};
use serde_wasm_bindgen as swb;
use wasm_bindgen::{JsCast, JsError, JsValue};

use vizij_presentation_core::{
    AnimationStyle, Completion, Direction, Location, ScrollOffset, Stage, Step,
};

pub(crate) struct JsHost {
    /// Receiver for every callback, so hosts can be plain objects with methods.
    this: JsValue,
    animate: Function,
    set_item_visible: Function,
    set_slide_visible: Function,
    layout: Function,
    get_hash: Function,
    replace_hash: Function,
    push_hash: Function,
    resize: Option<Function>,
    set_title: Option<Function>,
    get_scroll: Option<Function>,
    restore_scroll: Option<Function>,
}

fn optional_fn(obj: &JsValue, name: &str) -> Result<Option<Function>, JsError> {
    let v = Reflect::get(obj, &JsValue::from_str(name))
        .map_err(|e| JsError::new(&format!("host.{name}: {e:?}")))?;
    if v.is_undefined() || v.is_null() {
        return Ok(None);
    }
    v.dyn_into::<Function>()
        .map(Some)
        .map_err(|_| JsError::new(&format!("host.{name} is not a function")))
}

fn required_fn(obj: &JsValue, name: &str) -> Result<Function, JsError> {
    optional_fn(obj, name)?.ok_or_else(|| JsError::new(&format!("host.{name} is missing")))
}

fn report(name: &str, result: Result<JsValue, JsValue>) -> Option<JsValue> {
    match result {
        Ok(v) => Some(v),
        Err(err) => {
            log::error!("host.{name} threw: {err:?}");
            None
        }
    }
}

impl JsHost {
    pub(crate) fn from_js(obj: &JsValue) -> Result<Self, JsError> {
        if !obj.is_object() {
            return Err(JsError::new("host must be an object"));
        }
        Ok(Self {
            this: obj.clone(),
            animate: required_fn(obj, "animate")?,
            set_item_visible: required_fn(obj, "setItemVisible")?,
            set_slide_visible: required_fn(obj, "setSlideVisible")?,
            layout: required_fn(obj, "layout")?,
            get_hash: required_fn(obj, "getHash")?,
            replace_hash: required_fn(obj, "replaceHash")?,
            push_hash: required_fn(obj, "pushHash")?,
            resize: optional_fn(obj, "resize")?,
            set_title: optional_fn(obj, "setTitle")?,
            get_scroll: optional_fn(obj, "getScroll")?,
            restore_scroll: optional_fn(obj, "restoreScroll")?,
        })
    }
}

impl Stage for JsHost {
    fn animate(&mut self, step: Step, style: &AnimationStyle) -> Completion {
        let direction = match step.direction {
            Direction::Reveal => "reveal",
            Direction::Conceal => "conceal",
        };
        let args = Array::new();
        args.push(&JsValue::from(step.slide as u32));
        args.push(&JsValue::from(step.item as u32));
        args.push(&JsValue::from_str(direction));
        args.push(&JsValue::from_str(&style.name));
        args.push(&JsValue::from(style.duration_ms));
        match report("animate", self.animate.apply(&self.this, &args)) {
            Some(v) if v.as_bool() == Some(true) => Completion::Done,
            Some(_) => Completion::Pending,
            // A throwing effect never completes; keep the loop moving.
            None => Completion::Done,
        }
    }

    fn set_item_visible(&mut self, slide: usize, item: usize, visible: bool) {
        report(
            "setItemVisible",
            self.set_item_visible.call3(
                &self.this,
                &JsValue::from(slide as u32),
                &JsValue::from(item as u32),
                &JsValue::from_bool(visible),
            ),
        );
    }

    fn set_slide_visible(&mut self, slide: usize, visible: bool) {
        report(
            "setSlideVisible",
            self.set_slide_visible.call2(
                &self.this,
                &JsValue::from(slide as u32),
                &JsValue::from_bool(visible),
            ),
        );
    }

    fn layout(&mut self, slide: usize, animate: bool) {
        report(
            "layout",
            self.layout.call2(
                &self.this,
                &JsValue::from(slide as u32),
                &JsValue::from_bool(animate),
            ),
        );
    }

    fn resize(&mut self) {
        if let Some(f) = &self.resize {
            report("resize", f.call0(&self.this));
        }
    }

    fn set_title(&mut self, title: Option<&str>) {
        if let Some(f) = &self.set_title {
            let title = title.map_or(JsValue::UNDEFINED, JsValue::from_str);
            report("setTitle", f.call1(&self.this, &title));
        }
    }
}

impl Location for JsHost {
    fn hash(&self) -> String {
        report("getHash", self.get_hash.call0(&self.this))
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    }

    fn replace_hash(&mut self, hash: &str) {
        report(
            "replaceHash",
            self.replace_hash
                .call1(&self.this, &JsValue::from_str(hash)),
        );
    }

    fn push_hash(&mut self, hash: &str) {
        report(
            "pushHash",
            self.push_hash
                .call1(&self.this, &JsValue::from_str(hash)),
        );
    }

    fn scroll_offset(&self) -> ScrollOffset {
        let Some(f) = &self.get_scroll else {
            return ScrollOffset::default();
        };
        report("getScroll", f.call0(&self.this))
            .and_then(|v| swb::from_value(v).ok())
            .unwrap_or_default()
    }

    fn restore_scroll(&mut self, offset: ScrollOffset) {
        let Some(f) = &self.restore_scroll else {
            return;
        };
        match swb::to_value(&offset) {
            Ok(v) => {
                report("restoreScroll", f.call1(&self.this, &v));
            }
            Err(e) => log::error!("restoreScroll: {e}"),
        }
    }
}
