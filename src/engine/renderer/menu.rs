// Context menu window drawn with egui

use super::{begin_clear_pass, GpuContext, RenderTarget};
use crate::game::pet::{ContextMenu, MenuCommand};
use anyhow::Result;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::window::Window;

const MENU_FILL: egui::Color32 = egui::Color32::from_rgb(40, 40, 48);

/// Lay out one row per menu item and return the command clicked this frame
pub fn show_menu(ctx: &egui::Context, menu: &ContextMenu) -> Option<MenuCommand> {
    let layout = menu.layout();
    let mut chosen = None;

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(MENU_FILL))
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing = egui::Vec2::ZERO;
            for item in menu.items() {
                let button = egui::Button::new(item.label.as_str()).frame(false);
                let response =
                    ui.add_sized(egui::vec2(layout.width, layout.row_height), button);
                if response.clicked() {
                    chosen = Some(item.command);
                }
            }
        });

    chosen
}

/// The menu window: egui input state plus the wgpu renderer for its output
pub struct MenuPainter {
    target: RenderTarget,
    context: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl MenuPainter {
    pub fn new(gpu: &GpuContext, target: RenderTarget) -> Self {
        let context = egui::Context::default();
        let window = target.window();
        let state = egui_winit::State::new(
            context.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            Some(gpu.device.limits().max_texture_dimension_2d as usize),
        );
        let renderer = egui_wgpu::Renderer::new(&gpu.device, target.format(), None, 1);

        Self {
            target,
            context,
            state,
            renderer,
        }
    }

    pub fn window(&self) -> &Window {
        self.target.window()
    }

    pub fn resize(&mut self, gpu: &GpuContext, new_size: PhysicalSize<u32>) {
        self.target.resize(gpu, new_size);
    }

    /// Feed a window event to egui. Returns true if the menu needs a repaint.
    pub fn on_window_event(&mut self, event: &WindowEvent) -> bool {
        self.state
            .on_window_event(self.target.window(), event)
            .repaint
    }

    /// Run one egui frame, present it and return the clicked command
    pub fn paint(&mut self, gpu: &GpuContext, menu: &ContextMenu) -> Result<Option<MenuCommand>> {
        let raw_input = self.state.take_egui_input(self.target.window());
        let mut chosen = None;
        let output = self.context.run(raw_input, |ctx| {
            chosen = show_menu(ctx, menu);
        });
        self.state
            .handle_platform_output(self.target.window(), output.platform_output);

        let animating = output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|viewport| viewport.repaint_delay.is_zero());

        let paint_jobs = self
            .context
            .tessellate(output.shapes, output.pixels_per_point);
        for (id, delta) in &output.textures_delta.set {
            self.renderer
                .update_texture(&gpu.device, &gpu.queue, *id, delta);
        }

        if let Some(frame) = self.target.acquire(gpu)? {
            let view = frame
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default());
            let screen = egui_wgpu::ScreenDescriptor {
                size_in_pixels: self.target.size(),
                pixels_per_point: output.pixels_per_point,
            };

            let mut encoder = gpu
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Menu Encoder"),
                });
            let uploads = self.renderer.update_buffers(
                &gpu.device,
                &gpu.queue,
                &mut encoder,
                &paint_jobs,
                &screen,
            );

            {
                let mut render_pass =
                    begin_clear_pass(&mut encoder, &view, wgpu::Color::TRANSPARENT);
                self.renderer.render(&mut render_pass, &paint_jobs, &screen);
            }

            gpu.queue
                .submit(uploads.into_iter().chain(std::iter::once(encoder.finish())));
            frame.present();
        }

        for id in &output.textures_delta.free {
            self.renderer.free_texture(id);
        }

        if animating {
            self.target.window().request_redraw();
        }

        Ok(chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::pet::settings::Settings;

    fn frame(ctx: &egui::Context, menu: &ContextMenu, events: Vec<egui::Event>) -> Option<MenuCommand> {
        let (width, height) = menu.size();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(width, height),
            )),
            events,
            ..Default::default()
        };
        let mut chosen = None;
        let _ = ctx.run(input, |ctx| chosen = show_menu(ctx, menu));
        chosen
    }

    fn click(ctx: &egui::Context, menu: &ContextMenu, pos: egui::Pos2) -> Option<MenuCommand> {
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };
        frame(ctx, menu, vec![egui::Event::PointerMoved(pos)]);
        frame(ctx, menu, vec![button(true)]);
        frame(ctx, menu, vec![button(false)])
    }

    fn row_center(menu: &ContextMenu, row: usize) -> egui::Pos2 {
        let layout = menu.layout();
        egui::pos2(
            layout.width / 2.0,
            layout.row_height * (row as f32 + 0.5),
        )
    }

    #[test]
    fn test_no_command_without_input() {
        let ctx = egui::Context::default();
        let menu = ContextMenu::new(&Settings::default());
        assert_eq!(frame(&ctx, &menu, Vec::new()), None);
        assert_eq!(frame(&ctx, &menu, Vec::new()), None);
    }

    #[test]
    fn test_click_picks_row_command() {
        let menu = ContextMenu::new(&Settings::default());
        for (row, item) in menu.items().iter().enumerate() {
            let ctx = egui::Context::default();
            frame(&ctx, &menu, Vec::new());
            assert_eq!(click(&ctx, &menu, row_center(&menu, row)), Some(item.command));
        }
    }

    #[test]
    fn test_click_outside_rows_does_nothing() {
        let ctx = egui::Context::default();
        let menu = ContextMenu::new(&Settings::default());
        frame(&ctx, &menu, Vec::new());
        let below = egui::pos2(10.0, menu.size().1 + 20.0);
        assert_eq!(click(&ctx, &menu, below), None);
    }
}
