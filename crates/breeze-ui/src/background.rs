//! Persistent animated backdrop
//!
//! The backdrop lives behind all content for the whole session. It has
//! two layers: a cheap procedural wash with slowly drifting glows, and
//! an optional full scene raster supplied by a [`SceneSource`] in two
//! stages: the placeholder wash immediately, the rendered scene later
//! from a background task. A freshly arrived scene is held back for one
//! frame before its first composite, so the texture upload never lands
//! in the same frame it is drawn.

use egui::{
    Color32, ColorImage, Context, Mesh, Pos2, Rect, Shape, TextureHandle, TextureOptions, Ui,
};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

use crate::tab_pill::MAX_FRAME_DT;

/// Error from a scene source's expensive stage
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene rendering failed: {0}")]
    Render(String),
}

/// Two-stage source for the backdrop scene
///
/// `placeholder` must be cheap and synchronous; it is shown from the
/// first frame. `render` may be expensive and runs on a background
/// task; its result replaces the placeholder once uploaded.
pub trait SceneSource: Send + 'static {
    /// Top and bottom colors of the placeholder wash
    fn placeholder(&self) -> [Color32; 2];

    /// Produce the full scene raster
    fn render(&self) -> Result<ColorImage, SceneError>;
}

/// Built-in twilight scene: a vertical ramp with a soft horizon glow
pub struct TwilightScene;

impl TwilightScene {
    const SIZE: usize = 384;
}

impl SceneSource for TwilightScene {
    fn placeholder(&self) -> [Color32; 2] {
        [Color32::from_rgb(17, 19, 34), Color32::from_rgb(46, 31, 53)]
    }

    fn render(&self) -> Result<ColorImage, SceneError> {
        let size = Self::SIZE;
        let mut pixels = Vec::with_capacity(size * size);

        for y in 0..size {
            let fy = y as f32 / (size - 1) as f32;
            for x in 0..size {
                let fx = x as f32 / (size - 1) as f32;

                // Twilight ramp, warming toward the bottom
                let r = 17.0 + 34.0 * fy;
                let g = 19.0 + 14.0 * fy;
                let b = 34.0 + 24.0 * fy;

                // Soft glow low on the horizon
                let dx = fx - 0.5;
                let dy = fy - 0.72;
                let glow = (1.0 - (dx * dx * 1.4 + dy * dy * 3.0).sqrt()).clamp(0.0, 1.0);
                let glow = glow * glow;

                pixels.push(Color32::from_rgb(
                    (r + 52.0 * glow) as u8,
                    (g + 30.0 * glow) as u8,
                    (b + 40.0 * glow) as u8,
                ));
            }
        }

        Ok(ColorImage {
            size: [size, size],
            pixels,
        })
    }
}

/// One-frame gate between scene arrival and first composite
#[derive(Debug, Default)]
struct PromotionGate {
    armed: bool,
}

impl PromotionGate {
    /// Returns true once a full frame has elapsed since arrival
    fn admit(&mut self) -> bool {
        if self.armed {
            true
        } else {
            self.armed = true;
            false
        }
    }
}

/// The backdrop layer
pub struct Backdrop {
    time: f32,
    wash: [Color32; 2],
    receiver: Option<Receiver<Result<ColorImage, SceneError>>>,
    pending: Option<ColorImage>,
    gate: PromotionGate,
    texture: Option<TextureHandle>,
}

impl Backdrop {
    /// Procedural wash only, no scene loader
    pub fn procedural() -> Self {
        Self {
            time: 0.0,
            wash: TwilightScene.placeholder(),
            receiver: None,
            pending: None,
            gate: PromotionGate::default(),
            texture: None,
        }
    }

    /// Start the two-stage load: placeholder now, full scene whenever
    /// the background task finishes.
    pub fn with_source<S: SceneSource>(
        source: S,
        runtime: &tokio::runtime::Handle,
        egui_ctx: &Context,
    ) -> Self {
        let wash = source.placeholder();
        let (tx, rx) = channel();
        let ctx = egui_ctx.clone();

        runtime.spawn_blocking(move || {
            let result = source.render();
            if tx.send(result).is_ok() {
                ctx.request_repaint();
            }
        });

        Self {
            time: 0.0,
            wash,
            receiver: Some(rx),
            pending: None,
            gate: PromotionGate::default(),
            texture: None,
        }
    }

    /// Paint the backdrop across the available rect. `animate` drives
    /// the glow drift; when false the backdrop is static and requests
    /// no repaints.
    pub fn ui(&mut self, ui: &mut Ui, animate: bool) {
        self.poll_scene(ui.ctx());

        let rect = ui.max_rect();
        if animate {
            self.time += ui.input(|i| i.stable_dt).min(MAX_FRAME_DT);
            // The drift is slow; ~30 fps is plenty
            ui.ctx().request_repaint_after(Duration::from_millis(33));
        }

        self.paint_base(ui, rect);
        self.paint_glows(ui, rect);
    }

    /// Drain the loader channel and promote a finished scene, one
    /// frame late.
    fn poll_scene(&mut self, ctx: &Context) {
        if let Some(receiver) = &self.receiver {
            match receiver.try_recv() {
                Ok(Ok(image)) => {
                    info!("backdrop scene ready");
                    self.pending = Some(image);
                    self.receiver = None;
                }
                Ok(Err(err)) => {
                    // The wash stays up; losing the scene is cosmetic
                    error!(%err, "backdrop scene failed");
                    self.receiver = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.receiver = None;
                }
            }
        }

        if let Some(image) = self.pending.take() {
            if self.gate.admit() {
                self.texture = Some(ctx.load_texture("backdrop_scene", image, TextureOptions::LINEAR));
            } else {
                self.pending = Some(image);
                ctx.request_repaint();
            }
        }
    }

    fn paint_base(&self, ui: &Ui, rect: Rect) {
        let painter = ui.painter();

        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                rect,
                Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
            return;
        }

        let [top, bottom] = self.wash;
        let mut mesh = Mesh::default();
        mesh.colored_vertex(rect.left_top(), top);
        mesh.colored_vertex(rect.right_top(), top);
        mesh.colored_vertex(rect.right_bottom(), bottom);
        mesh.colored_vertex(rect.left_bottom(), bottom);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        painter.add(Shape::mesh(mesh));
    }

    /// Slow parallax glows layered over the base
    fn paint_glows(&self, ui: &Ui, rect: Rect) {
        let painter = ui.painter();
        let glows = [
            (0.11, 0.0, 0.34, Color32::from_rgb(70, 90, 180)),
            (0.07, 2.1, 0.46, Color32::from_rgb(140, 70, 150)),
            (0.16, 4.4, 0.22, Color32::from_rgb(60, 140, 160)),
        ];

        for (speed, phase, radius_frac, color) in glows {
            let t = self.time * speed + phase;
            let center = Pos2::new(
                rect.left() + (0.5 + 0.38 * t.sin()) * rect.width(),
                rect.top() + (0.42 + 0.3 * (t * 0.7).cos()) * rect.height(),
            );
            let radius = rect.width().min(rect.height()) * radius_frac;

            // Layered circles fake a soft radial falloff
            for layer in 0..5 {
                let f = 1.0 - layer as f32 * 0.16;
                painter.circle_filled(
                    center,
                    radius * f,
                    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 6),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotion_gate_holds_exactly_one_frame() {
        let mut gate = PromotionGate::default();
        assert!(!gate.admit());
        assert!(gate.admit());
        assert!(gate.admit());
    }

    #[test]
    fn twilight_scene_renders_full_raster() {
        let image = TwilightScene.render().unwrap();
        assert_eq!(image.size, [TwilightScene::SIZE, TwilightScene::SIZE]);
        assert_eq!(image.pixels.len(), TwilightScene::SIZE * TwilightScene::SIZE);
    }

    #[test]
    fn placeholder_is_darker_at_the_top() {
        let [top, bottom] = TwilightScene.placeholder();
        assert!(top.r() <= bottom.r());
    }
}
