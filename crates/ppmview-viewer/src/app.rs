use ppmview_engine::core::{App, AppControl, FrameCtx};
use ppmview_engine::input::Key;
use ppmview_engine::render::{ClearColor, ImageRenderer};
use ppmview_engine::transform::{QuadTransform, TransformOp};
use ppmview_ppm::PpmImage;

/// The viewer application: one image, one transform, one draw per frame.
pub struct ViewerApp {
    renderer: ImageRenderer,
    transform: QuadTransform,
}

impl ViewerApp {
    pub fn new(image: &PpmImage) -> Self {
        Self {
            renderer: ImageRenderer::new(image.width, image.height, image.to_rgba8()),
            transform: QuadTransform::default(),
        }
    }
}

impl App for ViewerApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.pressed(Key::Escape) {
            return AppControl::Exit;
        }

        for key in &ctx.input_frame.keys_pressed {
            if let Some(op) = binding(*key) {
                self.transform.apply(op);
                log::debug!(
                    "frame {}: {:?} -> {:?}",
                    ctx.time.frame_index,
                    op,
                    self.transform
                );
            }
        }

        let transform = self.transform;
        let renderer = &mut self.renderer;
        ctx.render(ClearColor::BLACK, |rctx, target| {
            renderer.render(rctx, target, &transform);
        })
    }
}

/// Key bindings, matching the classic layout: Q/E rotate CCW/CW, =/- scale
/// up/down, arrows translate, W/S shear along x, D/A shear along y.
fn binding(key: Key) -> Option<TransformOp> {
    match key {
        Key::Q => Some(TransformOp::RotateCcw),
        Key::E => Some(TransformOp::RotateCw),
        Key::Equal => Some(TransformOp::ScaleUp),
        Key::Minus => Some(TransformOp::ScaleDown),
        Key::ArrowUp => Some(TransformOp::TranslateUp),
        Key::ArrowDown => Some(TransformOp::TranslateDown),
        Key::ArrowLeft => Some(TransformOp::TranslateLeft),
        Key::ArrowRight => Some(TransformOp::TranslateRight),
        Key::W => Some(TransformOp::ShearXUp),
        Key::S => Some(TransformOp::ShearXDown),
        Key::D => Some(TransformOp::ShearYUp),
        Key::A => Some(TransformOp::ShearYDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bindings_cover_the_classic_layout() {
        assert_eq!(binding(Key::Q), Some(TransformOp::RotateCcw));
        assert_eq!(binding(Key::E), Some(TransformOp::RotateCw));
        assert_eq!(binding(Key::Equal), Some(TransformOp::ScaleUp));
        assert_eq!(binding(Key::Minus), Some(TransformOp::ScaleDown));
        assert_eq!(binding(Key::ArrowUp), Some(TransformOp::TranslateUp));
        assert_eq!(binding(Key::ArrowDown), Some(TransformOp::TranslateDown));
        assert_eq!(binding(Key::ArrowLeft), Some(TransformOp::TranslateLeft));
        assert_eq!(binding(Key::ArrowRight), Some(TransformOp::TranslateRight));
        assert_eq!(binding(Key::W), Some(TransformOp::ShearXUp));
        assert_eq!(binding(Key::S), Some(TransformOp::ShearXDown));
        assert_eq!(binding(Key::D), Some(TransformOp::ShearYUp));
        assert_eq!(binding(Key::A), Some(TransformOp::ShearYDown));
    }

    #[test]
    fn unbound_keys_do_nothing() {
        assert_eq!(binding(Key::Z), None);
        assert_eq!(binding(Key::Space), None);
        assert_eq!(binding(Key::Escape), None);
    }
}
