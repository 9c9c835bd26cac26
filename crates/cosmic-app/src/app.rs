//! Application state and event loop for Cosmic Architect

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use cosmic_core::flow::{FlowError, QuestionFlow};
use cosmic_core::planet::{PlanetConditions, PlanetState};

use crate::config::AppConfig;
use crate::render::Renderer;
use crate::ui::{HudStats, show_hud, show_questions};

/// Question flow, accumulated conditions and the generated planet
///
/// Owned by the app and passed explicitly to whatever reads or mutates it;
/// there are no module-level globals.
pub struct AppState {
    pub flow: QuestionFlow,
    pub conditions: PlanetConditions,
    pub planet: PlanetState,
}

impl AppState {
    pub fn new(seed: i32) -> Result<Self, FlowError> {
        QuestionFlow::validate()?;
        Ok(Self {
            flow: QuestionFlow::new(),
            conditions: PlanetConditions::default(),
            planet: PlanetState::new(seed),
        })
    }

    /// Process one answered option
    pub fn choose(&mut self, option_index: usize) {
        self.flow
            .choose(option_index, &mut self.conditions, &mut self.planet);
    }
}

/// Main application state
pub struct App {
    // Window and rendering
    window: Arc<Window>,
    renderer: Renderer,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,

    // Game state
    state: AppState,
    config: AppConfig,

    // Timing
    frame_start: Instant,
    frame_count: u64,
    fps_update_time: Instant,
    fps: f32,
}

impl App {
    /// Create a new app
    pub async fn new() -> Result<(Self, EventLoop<()>)> {
        let config = AppConfig::load();

        // Create event loop
        let event_loop = EventLoop::new()?;

        // Create window
        let window_attrs = WindowAttributes::default()
            .with_title("Cosmic Architect: The Origin of Life")
            .with_inner_size(LogicalSize::new(config.window_width, config.window_height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        // Create renderer
        let renderer = Renderer::new(&window, &config).await?;

        // Create game state with a fresh seed; every run gets its own planet
        let seed = {
            use rand::Rng;
            rand::thread_rng().gen()
        };
        let state = AppState::new(seed)?;

        // Setup egui
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &renderer.device,
            renderer.surface_format(),
            egui_wgpu::RendererOptions::default(),
        );

        Ok((
            Self {
                window,
                renderer,
                egui_ctx,
                egui_state,
                egui_renderer,
                state,
                config,
                frame_start: Instant::now(),
                frame_count: 0,
                fps_update_time: Instant::now(),
                fps: 0.0,
            },
            event_loop,
        ))
    }

    /// Run the event loop
    pub fn run(event_loop: EventLoop<()>, mut app: Self) -> Result<()> {
        event_loop.run_app(&mut app)?;
        Ok(())
    }

    /// Update per-frame bookkeeping
    fn update(&mut self) {
        let now = Instant::now();

        // Update FPS
        self.frame_count += 1;
        if now.duration_since(self.fps_update_time).as_secs_f32() >= 1.0 {
            self.fps = self.frame_count as f32;
            self.frame_count = 0;
            self.fps_update_time = now;
        }
    }

    /// Render frame
    fn render(&mut self) -> Result<()> {
        // Collect data for the egui closure to avoid borrow checker issues
        let stats = HudStats {
            fps: self.fps,
            show_fps: self.config.show_fps,
            water_fraction: self.state.planet.water_fraction(),
            flow_complete: self.state.flow.is_terminal(),
        };

        // Run egui first so a click is applied within this same frame,
        // before the planet texture is uploaded and drawn.
        let raw_input = self.egui_state.take_egui_input(&self.window);
        let mut clicked = None;
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            clicked = show_questions(ctx, &self.state.flow);
            show_hud(ctx, &stats);
        });

        if let Some(option_index) = clicked {
            self.state.choose(option_index);
        }

        // Upload the current raster; regeneration has already completed
        self.renderer
            .update_planet_texture(self.state.planet.raster());

        // Begin frame
        let output = self.renderer.begin_frame()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            self.renderer
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("render_encoder"),
                });

        // Render planet
        self.renderer.render_planet(&mut encoder, &view)?;

        // Handle egui platform output
        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        // Tessellate egui shapes
        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        // Update egui textures
        for (id, delta) in &full_output.textures_delta.set {
            self.egui_renderer.update_texture(
                &self.renderer.device,
                &self.renderer.queue,
                *id,
                delta,
            );
        }

        // Create screen descriptor
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.renderer.size().width, self.renderer.size().height],
            pixels_per_point: full_output.pixels_per_point,
        };

        // Update egui buffers
        self.egui_renderer.update_buffers(
            &self.renderer.device,
            &self.renderer.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        // Render egui
        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui_render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            self.egui_renderer.render(
                &mut render_pass.forget_lifetime(),
                &paint_jobs,
                &screen_descriptor,
            );
        }

        // Free egui textures
        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        // Submit and present
        self.renderer
            .queue
            .submit(std::iter::once(encoder.finish()));
        self.renderer.end_frame(output);

        Ok(())
    }

    /// Sleep out the remainder of the frame budget (30 FPS cap)
    fn pace_frame(&mut self) {
        let budget = Duration::from_secs_f32(1.0 / self.config.target_fps as f32);
        let elapsed = self.frame_start.elapsed();
        if elapsed < budget {
            std::thread::sleep(budget - elapsed);
        }
        self.frame_start = Instant::now();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        // Nothing to do on resume for now
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle events first
        let egui_response = self.egui_state.on_window_event(&self.window, &event);
        if egui_response.consumed {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.renderer.resize(size);
            }
            WindowEvent::RedrawRequested => {
                self.update();
                if let Err(e) = self.render() {
                    log::error!("Render error: {}", e);
                }
                self.pace_frame();
                self.window.request_redraw();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}
