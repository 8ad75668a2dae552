#![deny(clippy::all)]
#![forbid(unsafe_code)]

use autocell::{Color, PixelSurface, Random, render_autocell};
use error_iter::ErrorIter as _;
use log::{error, info};
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::process::ExitCode;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const WIDTH: u32 = 400;
const HEIGHT: u32 = 300;
const CANVAS_NAME: &str = "cell_canvas";
const BACKGROUND_COLOR: Color = Color::WHITE;

fn main() -> ExitCode {
    env_logger::init();

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            log_error("EventLoop::new", err);
            return ExitCode::FAILURE;
        }
    };
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut handler = AppEventHandler::default();
    if let Err(err) = event_loop.run_app(&mut handler) {
        log_error("run_app", err);
        return ExitCode::FAILURE;
    }

    if handler.failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}

struct App {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

impl App {
    fn new(event_loop: &ActiveEventLoop) -> Option<Self> {
        let window = match Self::build_window(event_loop) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log_error("create_window", err);
                return None;
            }
        };
        let pixels = match Self::build_pixels(&window) {
            Ok(pixels) => pixels,
            Err(err) => {
                log_error("PixelsBuilder::build", err);
                return None;
            }
        };
        Some(Self { window, pixels })
    }

    fn build_window(event_loop: &ActiveEventLoop) -> Result<Window, winit::error::OsError> {
        let size = LogicalSize::new(WIDTH as f64, HEIGHT as f64);
        let window_attributes = Window::default_attributes()
            .with_title(CANVAS_NAME)
            .with_inner_size(size)
            .with_min_inner_size(size)
            .with_visible(false);
        event_loop.create_window(window_attributes)
    }

    fn build_pixels(window: &Arc<Window>) -> Result<Pixels<'static>, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        PixelsBuilder::new(WIDTH, HEIGHT, surface_texture)
            .clear_color(pixels::wgpu::Color::WHITE)
            .build()
    }

    fn on_create(&mut self, surface: &PixelSurface) {
        surface.copy_to_frame(self.pixels.frame_mut(), BACKGROUND_COLOR);
        self.window.request_redraw();
        self.window.set_visible(true);
    }

    fn on_redraw(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}

#[derive(Default)]
struct AppEventHandler {
    app: Option<App>,
    failed: bool,
}

impl AppEventHandler {
    fn fail(&mut self, event_loop: &ActiveEventLoop) {
        self.failed = true;
        event_loop.exit();
    }
}

fn render_canvas() -> Result<PixelSurface, autocell::Error> {
    let mut surface = PixelSurface::new(WIDTH, HEIGHT)?;
    surface.clear(BACKGROUND_COLOR);
    let scene = render_autocell(&mut surface, &mut Random::new());
    info!("rendered {} shapes onto {CANVAS_NAME}", scene.shapes.len());
    Ok(surface)
}

impl ApplicationHandler for AppEventHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() {
            return;
        }

        let surface = match render_canvas() {
            Ok(surface) => surface,
            Err(err) => {
                log_error("render_canvas", err);
                return self.fail(event_loop);
            }
        };
        let Some(mut app) = App::new(event_loop) else {
            return self.fail(event_loop);
        };
        app.on_create(&surface);
        self.app = Some(app);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Released,
                        repeat: false,
                        ..
                    },
                ..
            } => match code {
                KeyCode::Escape | KeyCode::KeyQ | KeyCode::KeyX => {
                    event_loop.exit();
                }
                _ => (),
            },
            WindowEvent::Resized(size) => {
                if let Err(err) = app.pixels.resize_surface(size.width, size.height) {
                    log_error("pixels.resize_surface", err);
                    self.fail(event_loop);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = app.on_redraw() {
                    log_error("pixels.render", err);
                    self.fail(event_loop);
                }
            }
            _ => (),
        }
    }
}
