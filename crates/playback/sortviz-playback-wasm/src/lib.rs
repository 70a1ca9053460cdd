use js_sys::{Function, JSON};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use sortviz_playback_core::{
    parse_array, parse_sort_response_json, validate_delay, ChartRenderer, ChartTheme, Config,
    Controller, Outputs, ScenePatch, Step, StepSequence, Surface, Viewport,
};

#[wasm_bindgen]
pub struct SortvizPlayback {
    core: Controller,
    renderer: ChartRenderer,
    theme: ChartTheme,
    surface: Option<JsSurface>,
    /// Last trace received from the sorting service, replayable by `start`.
    loaded: Option<StepSequence>,
    delay_ms: u32,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Drawing surface backed by two JS callbacks:
/// `measure() -> {width, height}` and `apply(patch)`.
struct JsSurface {
    measure: Function,
    apply: Function,
}

impl Surface for JsSurface {
    fn viewport(&mut self) -> Viewport {
        // A throwing or malformed measure yields a zero-size viewport; the
        // renderer then draws zero-width bars instead of panicking.
        match self.measure.call0(&JsValue::UNDEFINED) {
            Ok(val) => swb::from_value(val).unwrap_or_default(),
            Err(_) => Viewport::default(),
        }
    }

    fn apply(&mut self, patch: &ScenePatch) {
        if let Ok(val) = swb::to_value(patch) {
            // A throwing apply drops the frame; playback state is unaffected.
            let _ = self.apply.call1(&JsValue::UNDEFINED, &val);
        }
    }
}

#[wasm_bindgen]
impl SortvizPlayback {
    /// Create a new playback instance. Pass a JSON config object or
    /// undefined/null for defaults.
    /// Example:
    ///   new SortvizPlayback({ scale_factor: 4, default_delay_ms: 250 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SortvizPlayback, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        let delay_ms = cfg.default_delay_ms;
        Ok(SortvizPlayback {
            core: Controller::new(cfg),
            renderer: ChartRenderer::new(),
            theme: ChartTheme::default(),
            surface: None,
            loaded: None,
            delay_ms,
        })
    }

    /// Install the drawing surface as a pair of JS callbacks. `measure` is
    /// called as `measure() -> {width, height}` on every render; `apply`
    /// receives one `{ops, transition_ms}` patch per rendered frame.
    #[wasm_bindgen(js_name = set_surface)]
    pub fn set_surface(&mut self, measure: Function, apply: Function) {
        self.surface = Some(JsSurface { measure, apply });
    }

    /// Load a sorting-service response (`{steps: [...]}`) or a bare steps
    /// array. Returns the step count. The trace is held until `start`.
    #[wasm_bindgen(js_name = load_steps)]
    pub fn load_steps(&mut self, data_json: JsValue) -> Result<u32, JsError> {
        if jsvalue_is_undefined_or_null(&data_json) {
            return Err(JsError::new("load_steps: data_json is null/undefined"));
        }
        // Stringify the JS object so we can reuse the core parser (expects &str)
        let s = JSON::stringify(&data_json)
            .map_err(|e| JsError::new(&format!("load_steps stringify error: {:?}", e)))?
            .as_string()
            .ok_or_else(|| JsError::new("load_steps: stringify produced non-string"))?;
        let steps: StepSequence = if js_sys::Array::is_array(&data_json) {
            let steps: Vec<Step> = serde_json::from_str(&s)
                .map_err(|e| JsError::new(&format!("load_steps parse error: {e}")))?;
            for (index, step) in steps.iter().enumerate() {
                step.validate_basic()
                    .map_err(|reason| JsError::new(&format!("invalid step {index}: {reason}")))?;
            }
            steps
        } else {
            parse_sort_response_json(&s)
                .map_err(|e| JsError::new(&format!("load_steps parse error: {e}")))?
        };
        let count = steps.len() as u32;
        self.loaded = Some(steps);
        Ok(count)
    }

    /// Begin playing the loaded trace at `delay_ms` per step, superseding any
    /// run already in progress. Errors if the delay is outside 100..=2000 ms
    /// or no trace has been loaded.
    pub fn start(&mut self, delay_ms: u32) -> Result<(), JsError> {
        let delay_ms =
            validate_delay(delay_ms).map_err(|e| JsError::new(&format!("start: {e}")))?;
        let steps = self
            .loaded
            .clone()
            .ok_or_else(|| JsError::new("start: no steps loaded"))?;
        self.delay_ms = delay_ms;
        self.core.start(steps, delay_ms);
        Ok(())
    }

    /// Advance playback by dt (seconds). Renders the emitted frame, if any,
    /// through the installed surface and returns Outputs JSON.
    pub fn update(&mut self, dt: f32) -> Result<JsValue, JsError> {
        let out: Outputs = self.core.update(dt).clone();
        if let (Some(frame), Some(surface)) = (&out.frame, self.surface.as_mut()) {
            self.renderer.render(
                surface,
                self.core.config(),
                &self.theme,
                &frame.array,
                frame.pivot,
                &frame.compared,
                self.delay_ms,
            );
        }
        swb::to_value(&out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Draw the current array with no annotations, for the resting display at
    /// mount and after input changes.
    #[wasm_bindgen(js_name = render_resting)]
    pub fn render_resting(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            let snapshot = self.core.current_array().to_vec();
            self.renderer.render(
                surface,
                self.core.config(),
                &self.theme,
                &snapshot,
                None,
                &[],
                self.delay_ms,
            );
        }
    }

    /// Parse the form's comma-separated array text. On success the parsed
    /// array becomes the current array and is returned; on any bad token the
    /// previous array is kept unchanged and an error is thrown.
    #[wasm_bindgen(js_name = parse_array)]
    pub fn parse_array(&mut self, text: &str) -> Result<JsValue, JsError> {
        let values =
            parse_array(text).map_err(|e| JsError::new(&format!("parse_array: {e}")))?;
        self.core.set_array(values.clone());
        swb::to_value(&values).map_err(|e| JsError::new(&format!("array error: {e}")))
    }

    /// Mark a sort request as submitted so `is_sorting` reports true while it
    /// is in flight.
    #[wasm_bindgen(js_name = begin_request)]
    pub fn begin_request(&mut self) {
        self.core.begin_request();
    }

    /// Report a failed or unreachable sorting service; releases `is_sorting`.
    #[wasm_bindgen(js_name = fail_request)]
    pub fn fail_request(&mut self, message: &str) {
        self.core.fail_request(message);
    }

    /// True while a request is in flight or a trace is animating.
    #[wasm_bindgen(js_name = is_sorting)]
    pub fn is_sorting(&self) -> bool {
        self.core.is_sorting()
    }

    /// The array observers should display right now.
    #[wasm_bindgen(js_name = current_array)]
    pub fn current_array(&self) -> Result<JsValue, JsError> {
        swb::to_value(self.core.current_array())
            .map_err(|e| JsError::new(&format!("array error: {e}")))
    }

    /// Replace the chart colors. Pass a JSON object matching ChartTheme.
    #[wasm_bindgen(js_name = set_theme)]
    pub fn set_theme(&mut self, theme: JsValue) -> Result<(), JsError> {
        self.theme =
            swb::from_value(theme).map_err(|e| JsError::new(&format!("theme error: {e}")))?;
        Ok(())
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
