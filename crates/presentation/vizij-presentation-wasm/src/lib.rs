use log::LevelFilter;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use vizij_presentation_core::{Command, Config, DeckSpec, Presentation};

mod host;
mod logging;

use host::JsHost;

#[wasm_bindgen]
pub struct VizijPresentation {
    core: Presentation<JsHost>,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

#[wasm_bindgen]
impl VizijPresentation {
    /// Create a presentation over `deck` driven by the `host` callbacks.
    /// Pass a config object or undefined/null for defaults.
    /// Example:
    ///   new VizijPresentation({ slides: [...] }, host, { cull_band: 3 })
    #[wasm_bindgen(constructor)]
    pub fn new(deck: JsValue, host: JsValue, config: JsValue) -> Result<VizijPresentation, JsError> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();
        logging::install(LevelFilter::Warn);

        let deck: DeckSpec =
            swb::from_value(deck).map_err(|e| JsError::new(&format!("deck error: {e}")))?;
        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let host = JsHost::from_js(&host)?;

        let core = Presentation::new(&deck, cfg, host).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(VizijPresentation { core })
    }

    #[wasm_bindgen(js_name = item_move_by)]
    pub fn item_move_by(&mut self, offset: i32) {
        self.core.item_move_by(offset as i64);
    }

    #[wasm_bindgen(js_name = item_move_to)]
    pub fn item_move_to(&mut self, count: i32) {
        self.core.item_move_to(count as i64);
    }

    #[wasm_bindgen(js_name = slide_move_by)]
    pub fn slide_move_by(&mut self, offset: i32) {
        self.core.slide_move_by(offset as i64);
    }

    /// Negative targets count from the end. Returns false if no such slide exists.
    #[wasm_bindgen(js_name = slide_move_to)]
    pub fn slide_move_to(&mut self, target: i32, animate: Option<bool>) -> bool {
        self.core.slide_move_to(target as i64, animate.unwrap_or(true))
    }

    /// Apply a command by name, e.g. "AdvanceItem" or "Home".
    pub fn command(&mut self, cmd: JsValue) -> Result<(), JsError> {
        let cmd: Command =
            swb::from_value(cmd).map_err(|e| JsError::new(&format!("command error: {e}")))?;
        self.core.apply(cmd);
        Ok(())
    }

    /// Feed a keydown `keyCode`. Returns true when the key was handled and the
    /// caller should prevent its default action.
    #[wasm_bindgen(js_name = key_down)]
    pub fn key_down(&mut self, key_code: u32) -> bool {
        match Command::from_key_code(key_code) {
            Some(cmd) => {
                self.core.apply(cmd);
                true
            }
            None => false,
        }
    }

    pub fn wheel(&mut self, delta: f64) {
        self.core.apply(Command::from_wheel_delta(delta));
    }

    #[wasm_bindgen(js_name = hash_changed)]
    pub fn hash_changed(&mut self) {
        self.core.handle_hash_change();
    }

    pub fn resize(&mut self) {
        self.core.handle_resize();
    }

    /// Report that the effect started for a step on `slide` has finished.
    #[wasm_bindgen(js_name = step_completed)]
    pub fn step_completed(&mut self, slide: u32) {
        self.core.step_completed(slide as usize);
    }

    #[wasm_bindgen(js_name = begin_navigation)]
    pub fn begin_navigation(&mut self) {
        self.core.begin_navigation();
    }

    #[wasm_bindgen(js_name = end_navigation)]
    pub fn end_navigation(&mut self, commit: bool) {
        self.core.end_navigation(commit);
    }

    /// `{ slide, item }` for the active slide.
    pub fn locator(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.locator()).map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(js_name = current_slide)]
    pub fn current_slide(&self) -> u32 {
        self.core.current_index() as u32
    }

    #[wasm_bindgen(js_name = current_hash)]
    pub fn current_hash(&self) -> String {
        self.core.current_hash()
    }

    #[wasm_bindgen(js_name = current_title)]
    pub fn current_title(&self) -> Option<String> {
        self.core.current_title().map(str::to_owned)
    }

    #[wasm_bindgen(js_name = slide_label)]
    pub fn slide_label(&self, index: u32) -> String {
        self.core.slide_label(index as usize)
    }

    #[wasm_bindgen(js_name = slide_count)]
    pub fn slide_count(&self) -> u32 {
        self.core.len() as u32
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}

/// Route `log` output to the browser console. `level` is one of
/// "off", "error", "warn", "info", "debug", "trace"; defaults to "warn".
#[wasm_bindgen]
pub fn init_logging(level: Option<String>) -> Result<(), JsError> {
    let filter = match level.as_deref() {
        None => LevelFilter::Warn,
        Some(name) => logging::parse_level(name)
            .ok_or_else(|| JsError::new(&format!("unknown log level: {name}")))?,
    };
    logging::install(filter);
    log::set_max_level(filter);
    Ok(())
}
