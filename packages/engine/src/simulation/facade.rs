use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::render::{CanvasPresenter, PixelRenderer, RenderParams, Renderer};

use super::frame_loop::FrameLoop;
use super::input::pairs_from_flat;
use super::perf_stats::PerfStats;
use super::{now_ms, LifeCore, PerfTimer, Stats};

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct RenderLayout {
    pixels_ptr: u32,
    pixels_len_elements: u32,
    pixels_len_bytes: u32,
    width: u32,
    height: u32,
    cell_size: u32,
    grid_size: u32,
}

#[wasm_bindgen]
impl RenderLayout {
    #[wasm_bindgen(getter)]
    pub fn pixels_ptr(&self) -> u32 { self.pixels_ptr }
    #[wasm_bindgen(getter)]
    pub fn pixels_len_elements(&self) -> u32 { self.pixels_len_elements }
    #[wasm_bindgen(getter)]
    pub fn pixels_len_bytes(&self) -> u32 { self.pixels_len_bytes }
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.width }
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.height }
    #[wasm_bindgen(getter)]
    pub fn cell_size(&self) -> u32 { self.cell_size }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
}

/// Everything one frame touches, shared between the facade and the frame loop
struct Session {
    core: LifeCore,
    renderer: PixelRenderer,
    presenter: Option<CanvasPresenter>,
}

impl Session {
    /// Tick the scheduler, then draw whether or not a generation ran, so
    /// edits made while paused show up on the next frame
    fn frame(&mut self, now_ms: f64) -> bool {
        let stepped = self.core.advance_frame(now_ms);
        self.redraw();
        stepped
    }

    fn redraw(&mut self) {
        let timer = if self.core.perf_enabled() { Some(PerfTimer::start()) } else { None };

        let params = RenderParams::from_config(self.core.config());
        self.renderer.render(self.core.grid(), &params);
        if let Some(presenter) = self.presenter.as_mut() {
            if let Err(e) = presenter.present(&self.renderer) {
                console_warn!("canvas present failed: {:?}", e);
            }
        }

        if let Some(t) = timer {
            self.core.record_render_ms(t.elapsed_ms());
        }
    }
}

#[wasm_bindgen]
pub struct Life {
    session: Rc<RefCell<Session>>,
    frame_loop: Option<FrameLoop>,
}

impl Life {
    fn from_core(core: LifeCore) -> Self {
        Self {
            session: Rc::new(RefCell::new(Session {
                core,
                renderer: PixelRenderer::new(),
                presenter: None,
            })),
            frame_loop: None,
        }
    }

    fn with_core<R>(&self, f: impl FnOnce(&mut LifeCore) -> R) -> R {
        f(&mut self.session.borrow_mut().core)
    }

    fn read_core<R>(&self, f: impl FnOnce(&LifeCore) -> R) -> R {
        f(&self.session.borrow().core)
    }

    /// Copy of the current grid
    pub fn grid_snapshot(&self) -> crate::grid::Grid {
        self.read_core(|core| core.grid().clone())
    }

    /// Surface pixel at (x, y) as last drawn
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.session.borrow().renderer.pixel(x, y)
    }
}

#[wasm_bindgen]
impl Life {
    /// Create a session with an empty grid (size clamped to 10..=100, step 10)
    #[wasm_bindgen(constructor)]
    pub fn new(grid_size: i32) -> Self {
        Self::from_core(LifeCore::new(grid_size as i64))
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(grid_size: i32, seed: u32) -> Self {
        Self::from_core(LifeCore::with_seed(grid_size as i64, seed))
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> u32 { self.read_core(|c| c.size()) }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.read_core(|c| c.generation()) }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.read_core(|c| c.is_running()) }

    pub fn stats(&self) -> Stats { self.read_core(|c| c.stats()) }

    pub fn is_alive(&self, row: u32, col: u32) -> bool {
        self.read_core(|c| c.grid().is_alive(row, col))
    }

    // === Run state ===

    pub fn play(&mut self) { self.with_core(|c| { c.play(); }) }

    pub fn pause(&mut self) { self.with_core(|c| { c.pause(); }) }

    /// Returns the new running state
    pub fn toggle_running(&mut self) -> bool { self.with_core(|c| c.toggle_running()) }

    pub fn step_once(&mut self) { self.with_core(|c| c.step()) }

    // === Commands ===

    pub fn clear(&mut self) { self.with_core(|c| c.clear()) }

    pub fn reset(&mut self) { self.with_core(|c| c.reset()) }

    pub fn randomize(&mut self) { self.with_core(|c| c.randomize()) }

    pub fn random_fill(&mut self, density: f64) { self.with_core(|c| c.random_fill(density)) }

    pub fn place_pattern(&mut self, name: &str) -> Result<(), JsValue> {
        self.with_core(|c| c.place_pattern(name)).map_err(js_err)
    }

    /// Merge presets from a JSON bundle; returns how many were added
    pub fn load_patterns(&mut self, json: &str) -> Result<u32, JsValue> {
        self.with_core(|c| c.load_patterns_json(json))
            .map(|n| n as u32)
            .map_err(js_err)
    }

    pub fn pattern_manifest_json(&self) -> String {
        self.read_core(|c| c.patterns().manifest_json())
    }

    pub fn toggle_cell(&mut self, row: u32, col: u32) -> bool {
        self.with_core(|c| c.toggle_cell(row, col))
    }

    /// Click/tap at surface-local pixel coordinates
    pub fn pointer_down(&mut self, px: f64, py: f64, origin_x: f64, origin_y: f64) -> bool {
        self.with_core(|c| c.pointer_down(px, py, origin_x, origin_y))
    }

    /// Touch points as a flat `[x0, y0, x1, y1, ...]` array
    pub fn touch_start(&mut self, points: Vec<f64>, origin_x: f64, origin_y: f64) -> u32 {
        let pairs = pairs_from_flat(&points);
        self.with_core(|c| c.touch_start(&pairs, origin_x, origin_y))
    }

    // === Settings ===

    pub fn set_speed(&mut self, speed: i32) { self.with_core(|c| c.set_speed(speed as i64)) }

    pub fn set_grid_size(&mut self, size: i32) { self.with_core(|c| c.set_grid_size(size as i64)) }

    pub fn set_show_grid(&mut self, show: bool) { self.with_core(|c| c.set_show_grid(show)) }

    pub fn set_alive_color(&mut self, color: &str) -> Result<(), JsValue> {
        self.with_core(|c| c.set_alive_color(color)).map_err(js_err)
    }

    pub fn set_dead_color(&mut self, color: &str) -> Result<(), JsValue> {
        self.with_core(|c| c.set_dead_color(color)).map_err(js_err)
    }

    pub fn set_grid_line_color(&mut self, color: &str) -> Result<(), JsValue> {
        self.with_core(|c| c.set_grid_line_color(color)).map_err(js_err)
    }

    pub fn set_density(&mut self, density: f64) { self.with_core(|c| c.set_density(density)) }

    pub fn set_canvas_size(&mut self, px: i32) { self.with_core(|c| c.set_canvas_size(px as i64)) }

    pub fn config_json(&self) -> String { self.read_core(|c| c.config_json()) }

    pub fn apply_config_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.with_core(|c| c.apply_config_json(json)).map_err(js_err)
    }

    // === Perf ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.with_core(|c| c.enable_perf_metrics(enabled))
    }

    pub fn get_perf_stats(&self) -> PerfStats { self.read_core(|c| c.get_perf_stats()) }

    // === Frames & rendering ===

    /// One frame callback at `now_ms`: at most one generation, then a redraw.
    /// Returns whether a generation ran.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        self.session.borrow_mut().frame(now_ms)
    }

    /// `frame` using the engine's own clock
    pub fn tick(&mut self) -> bool {
        self.frame(now_ms())
    }

    /// Redraw without ticking the scheduler
    pub fn render(&mut self) {
        self.session.borrow_mut().redraw();
    }

    /// Get pointer to the ABGR pixel surface (for JS ImageData views)
    pub fn pixels_ptr(&self) -> *const u32 { self.session.borrow().renderer.pixels_ptr() }

    pub fn pixels_len(&self) -> usize { self.session.borrow().renderer.pixels_len() }

    pub fn surface_width(&self) -> u32 { self.session.borrow().renderer.width() }

    pub fn surface_height(&self) -> u32 { self.session.borrow().renderer.height() }

    pub fn render_layout(&self) -> RenderLayout {
        let session = self.session.borrow();
        let r = &session.renderer;
        RenderLayout {
            pixels_ptr: r.pixels_ptr() as usize as u32,
            pixels_len_elements: r.pixels_len() as u32,
            pixels_len_bytes: r.pixels_byte_len() as u32,
            width: r.width(),
            height: r.height(),
            cell_size: session.core.config().cell_size(),
            grid_size: session.core.size(),
        }
    }

    /// Draw into this canvas on every frame from now on
    pub fn attach_canvas(&mut self, canvas: HtmlCanvasElement) -> Result<(), JsValue> {
        let presenter = CanvasPresenter::new(canvas)?;
        let mut session = self.session.borrow_mut();
        session.presenter = Some(presenter);
        session.redraw();
        Ok(())
    }

    pub fn detach_canvas(&mut self) {
        self.session.borrow_mut().presenter = None;
    }

    /// Start the requestAnimationFrame loop (no-op if already started)
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.frame_loop.is_some() {
            return Ok(());
        }
        let session = self.session.clone();
        let frame_loop = FrameLoop::start(move |timestamp| {
            session.borrow_mut().frame(timestamp);
        })?;
        self.frame_loop = Some(frame_loop);
        Ok(())
    }

    /// Cancel the frame loop; the session itself stays usable
    pub fn stop(&mut self) {
        self.frame_loop = None;
    }

    pub fn is_started(&self) -> bool {
        self.frame_loop.is_some()
    }
}
