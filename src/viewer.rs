//! Standalone viewer window backed by winit.
//!
//! ```no_run
//! # use spinview::Viewer;
//! Viewer::builder()
//!     .with_title("spinview")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, Touch, TouchPhase, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    engine::RenderEngine, error::SpinviewError, input::PointerEvent,
    options::Options,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with defaults (title "spinview", default options).
    fn new() -> Self {
        Self {
            options: None,
            title: "spinview".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window displaying one drag-rotatable object.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to enter
/// the event loop.
pub struct Viewer {
    options: Option<Options>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`SpinviewError::Viewer`] if the event loop cannot be
    /// created or fails while running.
    pub fn run(self) -> Result<(), SpinviewError> {
        let event_loop =
            EventLoop::new().map_err(|e| SpinviewError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            cursor_pos: (0.0, 0.0),
            active_touches: Vec::new(),
            options: self.options,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| SpinviewError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<RenderEngine>,
    /// Last-seen cursor position, needed because button events carry none.
    cursor_pos: (f32, f32),
    /// IDs of currently-down touch contacts, in landing order.
    active_touches: Vec<u64>,
    options: Option<Options>,
    title: String,
}

/// Clamp the wgpu surface size to at least one pixel per axis.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ViewerApp {
    /// Translate a winit touch event into a [`PointerEvent`], maintaining
    /// the active-contact list so the drag tracker can apply its
    /// single-contact policy.
    fn translate_touch(&mut self, touch: Touch) -> PointerEvent {
        #[allow(clippy::cast_possible_truncation)]
        let (x, y) = (touch.location.x as f32, touch.location.y as f32);
        match touch.phase {
            TouchPhase::Started => {
                if !self.active_touches.contains(&touch.id) {
                    self.active_touches.push(touch.id);
                }
                PointerEvent::TouchStarted {
                    x,
                    y,
                    contacts: self.active_touches.len(),
                }
            }
            TouchPhase::Moved => PointerEvent::TouchMoved {
                x,
                y,
                contacts: self.active_touches.len(),
            },
            TouchPhase::Ended => {
                self.active_touches.retain(|&id| id != touch.id);
                PointerEvent::TouchEnded
            }
            TouchPhase::Cancelled => {
                self.active_touches.retain(|&id| id != touch.id);
                PointerEvent::TouchCancelled
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            #[allow(clippy::cast_possible_truncation)]
            let logical_w = (mon_size.width as f64 / scale * 0.75) as u32;
            #[allow(clippy::cast_possible_truncation)]
            let logical_h = (mon_size.height as f64 / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(logical_w, logical_h))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = viewport_size(window.inner_size());
        let options = self.options.take().unwrap_or_default();
        let engine = match pollster::block_on(RenderEngine::new(
            window.clone(),
            size,
            options,
        )) {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            // Exiting drops the engine along with the app, releasing the
            // surface, buffers, and pipeline.
            event_loop.exit();
            return;
        }

        // Guard: resize or input arriving before the engine exists is a
        // no-op, not an error.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                if let Some(engine) = &mut self.engine {
                    engine.resize(vp_w, vp_h);
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let inner = self.window.as_ref().map(|w| w.inner_size());
                if let (Some(engine), Some(inner)) = (&mut self.engine, inner) {
                    let (vp_w, vp_h) = viewport_size(inner);
                    engine.resize(vp_w, vp_h);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(engine) = &mut self.engine {
                    match engine.render() {
                        Ok(()) => {}
                        Err(
                            wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost,
                        ) => {
                            if let Some(w) = &self.window {
                                let (vp_w, vp_h) = viewport_size(w.inner_size());
                                engine.resize(vp_w, vp_h);
                            }
                        }
                        Err(e) => {
                            log::error!("render error: {e:?}");
                        }
                    }
                }
                // Free-running loop: each frame schedules the next.
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                if button != winit::event::MouseButton::Left {
                    return;
                }
                let pointer_event = if state == ElementState::Pressed {
                    PointerEvent::ButtonPressed {
                        x: self.cursor_pos.0,
                        y: self.cursor_pos.1,
                    }
                } else {
                    PointerEvent::ButtonReleased
                };
                if let Some(engine) = &mut self.engine {
                    engine.handle_pointer(pointer_event);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                let (x, y) = (position.x as f32, position.y as f32);
                self.cursor_pos = (x, y);
                if let Some(engine) = &mut self.engine {
                    engine.handle_pointer(PointerEvent::CursorMoved { x, y });
                }
            }

            WindowEvent::CursorLeft { .. } => {
                if let Some(engine) = &mut self.engine {
                    engine.handle_pointer(PointerEvent::ButtonReleased);
                }
            }

            WindowEvent::Touch(touch) => {
                let pointer_event = self.translate_touch(touch);
                if let Some(engine) = &mut self.engine {
                    engine.handle_pointer(pointer_event);
                }
            }

            _ => (),
        }
    }
}
