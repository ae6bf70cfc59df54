use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, Window};

use crate::animation::{ParticleField, Surface, TRAIL_RGB};

struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64) {
        let (r, g, b) = TRAIL_RGB;
        self.ctx.begin_path();
        self.ctx
            .set_fill_style_str(&format!("rgba({r}, {g}, {b}, {alpha})"));
        if self
            .ctx
            .arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0)
            .is_ok()
        {
            self.ctx.fill();
        }
    }
}

/// Sizes the canvas to the viewport.
pub fn fit_to_viewport(win: &Window, canvas: &HtmlCanvasElement) {
    let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    canvas.set_width(w.max(0.0) as u32);
    canvas.set_height(h.max(0.0) as u32);
}

/// State shared between the loop handle and the frame callback.
struct Trail {
    field: RefCell<ParticleField>,
    surface: RefCell<CanvasSurface>,
    frame: RefCell<Option<AnimationFrame>>,
    running: Cell<bool>,
}

/// Requests the next frame. The callback re-requests itself while running.
fn schedule(trail: &Rc<Trail>) {
    let next = Rc::clone(trail);
    let handle = request_animation_frame(move |_| {
        next.frame.borrow_mut().take();
        next.field.borrow_mut().frame(&mut *next.surface.borrow_mut());
        if next.running.get() {
            schedule(&next);
        }
    });
    *trail.frame.borrow_mut() = Some(handle);
}

/// A running cursor-trail loop. Dropping it tears the loop down.
pub struct AnimationLoop {
    trail: Rc<Trail>,
    listeners: Vec<EventListener>,
}

impl AnimationLoop {
    pub fn particle_count(&self) -> usize {
        self.trail.field.borrow().len()
    }

    pub fn is_running(&self) -> bool {
        self.trail.running.get()
    }

    /// Removes listeners and cancels the pending frame. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        if !self.trail.running.replace(false) {
            return;
        }
        self.listeners.clear();
        // dropping the handle cancels the request and breaks the callback's cycle
        self.trail.frame.borrow_mut().take();
        log::debug!("animation loop stopped");
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Start the particle trail on `canvas`.
pub fn start(canvas: HtmlCanvasElement) -> Result<AnimationLoop, JsValue> {
    let win = window().ok_or("no window")?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2D canvas not supported")?
        .dyn_into()?;

    fit_to_viewport(&win, &canvas);

    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let mut rng = SmallRng::seed_from_u64(seed);

    let on_resize = {
        let w = win.clone();
        let canvas = canvas.clone();
        EventListener::new(&win, "resize", move |_| fit_to_viewport(&w, &canvas))
    };

    let trail = Rc::new(Trail {
        field: RefCell::new(ParticleField::new()),
        surface: RefCell::new(CanvasSurface { canvas, ctx }),
        frame: RefCell::new(None),
        running: Cell::new(true),
    });

    let on_move = {
        let trail = Rc::clone(&trail);
        EventListener::new(&win, "pointermove", move |event: &Event| {
            let Some(m) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            trail
                .field
                .borrow_mut()
                .pointer_moved(m.client_x() as f64, m.client_y() as f64, &mut rng);
        })
    };

    schedule(&trail);
    log::debug!("animation loop started");

    Ok(AnimationLoop {
        trail,
        listeners: vec![on_resize, on_move],
    })
}
