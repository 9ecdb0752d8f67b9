//! Background fill and image painting for one box fragment.

use boxpaint_render_core::Canvas;
use boxpaint_style::{BackgroundImage, BackgroundRepeat};
use boxpaint_tree::Fragment;
use boxpaint_types::{Color, Rect};

pub struct BackgroundPainter;

impl BackgroundPainter {
    /// Fills `rect`. `None` and fully transparent colors paint nothing.
    pub fn paint_fill<C>(canvas: &mut C, rect: Rect, color: Option<&Color>)
    where
        C: Canvas + ?Sized,
    {
        let Some(color) = color.filter(|c| c.a > 0.0) else {
            log::trace!("Background fill suppressed: transparent");
            return;
        };
        if rect.is_empty() {
            log::trace!("Background fill suppressed: empty area");
            return;
        }
        canvas.filled_rectangle(rect, color);
    }

    /// Tiles `image` over `rect`.
    ///
    /// A `no-repeat` image belongs to the first fragment of its element only;
    /// continuation fragments skip it. Fill color has no such restriction.
    pub fn paint_image<C>(
        canvas: &mut C,
        rect: Rect,
        image: Option<&BackgroundImage>,
        fragment: Fragment,
    ) where
        C: Canvas + ?Sized,
    {
        let Some(image) = image else {
            return;
        };
        if !image.is_resolved() {
            log::warn!("Background image reference is unresolved; skipping");
            return;
        }
        if image.repeat == BackgroundRepeat::NoRepeat && !fragment.is_first() {
            log::trace!(
                "Background image '{}' suppressed on continuation fragment",
                image.src
            );
            return;
        }
        if rect.is_empty() {
            log::trace!("Background image '{}' suppressed: empty area", image.src);
            return;
        }
        canvas.tile_image(image, rect);
    }
}
