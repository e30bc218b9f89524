// ABOUTME: Demo application entry point.
// ABOUTME: Drives the grid pipeline from a winit window and simulated participants.

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowAttributes, WindowId};

use vidgrid_core::{Config, TrackReference, TrackSource};
use vidgrid_layout::{GridController, LayoutCatalog, LayoutHints, SwipeDetector};
use vidgrid_viewport::{
    ElementId, FrameScheduler, ObserverHandle, SizeListener, SizeObserverRegistry,
};

/// The one container this demo observes: the window itself
const STAGE: ElementId = ElementId(0);

/// Schedules a registry flush by asking winit for a redraw
struct WindowFrameScheduler {
    window: Arc<Window>,
}

impl FrameScheduler for WindowFrameScheduler {
    fn request_frame(&self) {
        self.window.request_redraw();
    }
}

/// Forwards coalesced size updates into the grid controller
struct ControllerListener {
    controller: Arc<Mutex<GridController>>,
}

impl SizeListener for ControllerListener {
    fn on_resize(&self, _element: ElementId, size: vidgrid_core::ViewportSize) {
        if let Ok(mut controller) = self.controller.lock() {
            controller.on_resize(size);
        }
    }
}

struct App {
    controller: Arc<Mutex<GridController>>,
    // The registry's frame scheduler keeps the window alive
    registry: Option<Arc<SizeObserverRegistry>>,
    stage_handle: Option<ObserverHandle>,
    swipe: SwipeDetector,
    mouse_pos: (f32, f32),
    participants: usize,
    screen_share: bool,
    last_hints: Option<LayoutHints>,
}

impl App {
    fn new(config: &Config, catalog: LayoutCatalog) -> Self {
        let swipe = SwipeDetector::new(config.swipe);
        Self {
            controller: Arc::new(Mutex::new(GridController::new(catalog))),
            registry: None,
            stage_handle: None,
            swipe,
            mouse_pos: (0.0, 0.0),
            participants: 0,
            screen_share: false,
            last_hints: None,
        }
    }

    /// Rebuild the simulated track list and hand it to the controller.
    ///
    /// Every fourth participant has no camera and gets a placeholder tile.
    fn sync_tracks(&mut self) {
        let mut tracks = Vec::with_capacity(self.participants + 1);
        if self.screen_share {
            tracks.push(TrackReference::screen_share("presenter", "TR_share"));
        }
        for index in 0..self.participants {
            let identity = format!("participant-{index}");
            if index % 4 == 3 {
                tracks.push(TrackReference::placeholder(
                    identity.as_str(),
                    TrackSource::Camera,
                ));
            } else {
                tracks.push(TrackReference::camera(
                    identity.as_str(),
                    format!("TR_cam{index}"),
                ));
            }
        }

        if let Ok(mut controller) = self.controller.lock() {
            controller.set_tracks(&tracks);
        }
        self.publish_hints();
    }

    /// Log the layout hints whenever they change
    fn publish_hints(&mut self) {
        let hints = match self.controller.lock() {
            Ok(controller) => controller.snapshot(),
            Err(_) => return,
        };
        if self.last_hints.as_ref() == Some(&hints) {
            return;
        }
        tracing::info!(
            "Layout {} ({}x{}): page {}/{} with {} tiles",
            hints.layout,
            hints.columns,
            hints.rows,
            hints.current_page + 1,
            hints.total_pages,
            hints.tracks.len()
        );
        self.last_hints = Some(hints);
    }

    fn handle_key(&mut self, key: Key) {
        match key {
            Key::Named(NamedKey::Space) => {
                self.participants += 1;
                tracing::info!("Participant joined ({} total)", self.participants);
                self.sync_tracks();
            }
            Key::Named(NamedKey::Backspace) => {
                if self.participants > 0 {
                    self.participants -= 1;
                    tracing::info!("Participant left ({} total)", self.participants);
                    self.sync_tracks();
                }
            }
            Key::Named(NamedKey::ArrowRight) => {
                if let Ok(mut controller) = self.controller.lock() {
                    controller.next_page();
                }
                self.publish_hints();
            }
            Key::Named(NamedKey::ArrowLeft) => {
                if let Ok(mut controller) = self.controller.lock() {
                    controller.prev_page();
                }
                self.publish_hints();
            }
            Key::Character(text) if text == "s" => {
                self.screen_share = !self.screen_share;
                tracing::info!(
                    "Screen share {}",
                    if self.screen_share { "started" } else { "stopped" }
                );
                self.sync_tracks();
            }
            _ => {}
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let attributes = WindowAttributes::default()
            .with_title("vidgrid demo")
            .with_inner_size(LogicalSize::new(1200.0, 800.0));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                tracing::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let registry = SizeObserverRegistry::new(WindowFrameScheduler {
            window: Arc::clone(&window),
        });
        let listener = Arc::new(ControllerListener {
            controller: Arc::clone(&self.controller),
        });
        self.stage_handle = Some(registry.observe(STAGE, listener));

        let size = window.inner_size();
        registry.report(STAGE, size.width as f32, size.height as f32);
        tracing::info!(
            "Window created: {}x{} physical pixels",
            size.width,
            size.height
        );

        self.registry = Some(registry);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Close requested, exiting");
                // Detach from the registry before the window goes away
                self.stage_handle = None;
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(registry) = &self.registry {
                    registry.report(STAGE, new_size.width as f32, new_size.height as f32);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(registry) = &self.registry {
                    registry.flush();
                }
                self.publish_hints();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    self.handle_key(event.logical_key);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_pos = (position.x as f32, position.y as f32);
                self.swipe.update(self.mouse_pos.0, self.mouse_pos.1);
            }
            WindowEvent::CursorLeft { .. } => {
                self.swipe.cancel();
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    match state {
                        ElementState::Pressed => {
                            self.swipe.begin(self.mouse_pos.0, self.mouse_pos.1);
                        }
                        ElementState::Released => {
                            if let Some(action) = self.swipe.end() {
                                if let Ok(mut controller) = self.controller.lock() {
                                    controller.apply(action);
                                }
                                self.publish_hints();
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting vidgrid demo");

    let config = Config::load_or_default();
    let catalog = if config.catalog.is_empty() {
        LayoutCatalog::standard()
    } else {
        LayoutCatalog::from_entries(&config.catalog).context("Invalid layout catalog in config")?
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(&config, catalog);

    event_loop.run_app(&mut app)?;

    Ok(())
}
