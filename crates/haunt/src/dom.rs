//! Page driver: binds a `Haunt` to the live document.
//!
//! One `mousemove` listener feeds the follower, one `resize` listener keeps
//! the viewport current, and a single `requestAnimationFrame` chain runs
//! `Haunt::frame` for the whole swarm. `HauntHandle::stop` tears all of it
//! down and removes the spawned ghost elements.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent, Window};

use crate::config::HauntConfig;
use crate::error::HauntError;
use crate::pool::GhostId;
use crate::stage::Stage;
use crate::viewport::Viewport;
use crate::Haunt;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn dom_err(err: &JsValue) -> HauntError {
    HauntError::Dom(format!("{err:?}"))
}

fn window_viewport(window: &Window) -> Result<Viewport, HauntError> {
    let width = window.inner_width().map_err(|e| dom_err(&e))?;
    let height = window.inner_height().map_err(|e| dom_err(&e))?;
    Viewport::new(width.as_f64().unwrap_or(0.0), height.as_f64().unwrap_or(0.0))
}

fn place(el: &HtmlElement, x: f64, y: f64) {
    let style = el.style();
    let left = style.set_property("left", &format!("{x}px"));
    let top = style.set_property("top", &format!("{y}px"));
    if let Err(err) = left.and(top) {
        log::warn!("failed to position element: {err:?}");
    }
}

/// Draws ghosts as absolutely positioned elements under `<body>`.
#[derive(Debug)]
struct DomStage {
    document: Document,
    body: HtmlElement,
    follower: Option<HtmlElement>,
    class_name: String,
    glyph: String,
    ghosts: HashMap<GhostId, HtmlElement>,
}

impl DomStage {
    fn new(document: Document, config: &HauntConfig) -> Result<Self, HauntError> {
        let body = document.body().ok_or(HauntError::MissingBody)?;
        let follower = document
            .get_element_by_id(&config.follower_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if follower.is_none() {
            log::warn!("no #{} element; pointer follower disabled", config.follower_id);
        }
        Ok(Self {
            document,
            body,
            follower,
            class_name: config.class_name.clone(),
            glyph: config.glyph.clone(),
            ghosts: HashMap::new(),
        })
    }

    fn create_ghost(&self, x: f64, y: f64) -> Result<HtmlElement, HauntError> {
        let el = self
            .document
            .create_element("div")
            .map_err(|e| dom_err(&e))?
            .dyn_into::<HtmlElement>()
            .map_err(|e| dom_err(&e))?;
        el.set_class_name(&self.class_name);
        el.set_inner_html(&self.glyph);
        place(&el, x, y);
        self.body.append_child(&el).map_err(|e| dom_err(&e))?;
        Ok(el)
    }
}

impl Stage for DomStage {
    fn place_follower(&mut self, x: f64, y: f64) {
        if let Some(el) = &self.follower {
            place(el, x, y);
        }
    }

    fn ghost_spawned(&mut self, id: GhostId, x: f64, y: f64) {
        match self.create_ghost(x, y) {
            Ok(el) => {
                self.ghosts.insert(id, el);
            }
            Err(err) => log::warn!("ghost element not created: {err}"),
        }
    }

    fn place_ghost(&mut self, id: GhostId, x: f64, y: f64) {
        if let Some(el) = self.ghosts.get(&id) {
            place(el, x, y);
        }
    }

    fn ghost_retired(&mut self, id: GhostId) {
        if let Some(el) = self.ghosts.remove(&id) {
            el.remove();
        }
    }
}

#[derive(Debug)]
struct Driver {
    haunt: Haunt,
    stage: DomStage,
    last_timestamp: Option<f64>,
    frame_id: Option<i32>,
    running: bool,
}

fn request_frame(window: &Window, slot: &FrameSlot) -> Option<i32> {
    let slot = slot.borrow();
    let callback = slot.as_ref()?;
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(err) => {
            log::warn!("requestAnimationFrame failed: {err:?}");
            None
        }
    }
}

/// Running page animation. Call `stop` (or drop it) to shut down.
#[wasm_bindgen]
pub struct HauntHandle {
    window: Window,
    document: Document,
    driver: Rc<RefCell<Driver>>,
    on_frame: FrameSlot,
    on_pointer: Closure<dyn FnMut(MouseEvent)>,
    on_resize: Closure<dyn FnMut(Event)>,
    stopped: bool,
}

impl std::fmt::Debug for HauntHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HauntHandle")
            .field("stopped", &self.stopped)
            .finish_non_exhaustive()
    }
}

#[wasm_bindgen]
impl HauntHandle {
    #[must_use]
    pub fn ghost_count(&self) -> usize {
        self.driver.borrow().haunt.pool().len()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.stopped
    }

    /// Cancel the frame chain, detach listeners and remove spawned ghosts.
    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;

        {
            let mut driver = self.driver.borrow_mut();
            driver.running = false;
            if let Some(id) = driver.frame_id.take() {
                if let Err(err) = self.window.cancel_animation_frame(id) {
                    log::warn!("cancelAnimationFrame failed: {err:?}");
                }
            }
            let Driver { haunt, stage, .. } = &mut *driver;
            haunt.clear(stage);
        }

        let detached = self
            .document
            .remove_event_listener_with_callback(
                "mousemove",
                self.on_pointer.as_ref().unchecked_ref(),
            )
            .and(self.window.remove_event_listener_with_callback(
                "resize",
                self.on_resize.as_ref().unchecked_ref(),
            ));
        if let Err(err) = detached {
            log::warn!("failed to detach listeners: {err:?}");
        }

        // Breaks the closure's reference back to its own slot.
        self.on_frame.borrow_mut().take();
        log::info!("haunt stopped");
    }
}

impl Drop for HauntHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Start the page animation with the default configuration.
#[wasm_bindgen]
pub fn haunt_page() -> Result<HauntHandle, JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    Ok(start(HauntConfig::default())?)
}

fn start(config: HauntConfig) -> Result<HauntHandle, HauntError> {
    let window = web_sys::window().ok_or(HauntError::MissingWindow)?;
    let document = window.document().ok_or(HauntError::MissingDocument)?;
    let viewport = window_viewport(&window)?;

    let stage = DomStage::new(document.clone(), &config)?;
    let seed = js_sys::Date::now().to_bits();
    let haunt = Haunt::new(config, viewport, seed)?;
    let driver = Rc::new(RefCell::new(Driver {
        haunt,
        stage,
        last_timestamp: None,
        frame_id: None,
        running: true,
    }));

    let pointer_driver = Rc::clone(&driver);
    let on_pointer = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let mut driver = pointer_driver.borrow_mut();
        let Driver { haunt, stage, .. } = &mut *driver;
        haunt.pointer_moved(
            f64::from(event.client_x()),
            f64::from(event.client_y()),
            stage,
        );
    });
    document
        .add_event_listener_with_callback("mousemove", on_pointer.as_ref().unchecked_ref())
        .map_err(|e| dom_err(&e))?;

    let resize_driver = Rc::clone(&driver);
    let resize_window = window.clone();
    let on_resize = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        match window_viewport(&resize_window) {
            Ok(viewport) => resize_driver.borrow_mut().haunt.resize(viewport),
            Err(err) => log::warn!("ignoring resize: {err}"),
        }
    });
    window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(|e| dom_err(&e))?;

    let on_frame: FrameSlot = Rc::new(RefCell::new(None));
    let frame_slot = Rc::clone(&on_frame);
    let frame_driver = Rc::clone(&driver);
    let frame_window = window.clone();
    *on_frame.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
        let mut driver = frame_driver.borrow_mut();
        if !driver.running {
            return;
        }
        let dt_ms = driver.last_timestamp.map_or(0.0, |last| timestamp - last);
        driver.last_timestamp = Some(timestamp);
        let Driver { haunt, stage, .. } = &mut *driver;
        haunt.frame(dt_ms, stage);
        driver.frame_id = request_frame(&frame_window, &frame_slot);
    }));
    driver.borrow_mut().frame_id = request_frame(&window, &on_frame);

    log::info!(
        "haunt started: {}x{}, up to {} ghosts every {}ms",
        viewport.width,
        viewport.height,
        driver.borrow().haunt.config().max_ghosts,
        driver.borrow().haunt.config().spawn_interval_ms
    );

    Ok(HauntHandle {
        window,
        document,
        driver,
        on_frame,
        on_pointer,
        on_resize,
        stopped: false,
    })
}
