//! Display list execution.
//!
//! ```text
//! LayoutBox tree → Painter → DisplayList → Canvas
//! ```
//!
//! Commands are executed strictly in list order (back to front), which is
//! the painting order the [`Painter`] established. Nothing here looks at the
//! layout tree.

use ochre_css::{DisplayCommand, DisplayList, LayoutBox, Painter, Rect};

use crate::canvas::Canvas;
use crate::raster::PixelRect;

impl Canvas {
    /// Paint a layout tree onto the canvas.
    ///
    /// `None` leaves the canvas untouched.
    pub fn paint(&mut self, root: Option<&LayoutBox>) {
        let display_list = Painter::new().paint(root);
        self.render(&display_list);
    }

    /// Execute every command in a display list, in order.
    pub fn render(&mut self, display_list: &DisplayList) {
        for command in display_list {
            self.execute(command);
        }
    }

    /// Execute a single display command.
    pub fn execute(&mut self, command: &DisplayCommand) {
        match command {
            DisplayCommand::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                let rect = PixelRect::from_rect(&Rect::new(*x, *y, *width, *height));
                self.fill_pixel_rect(rect, *color);
            }
            DisplayCommand::DrawBorder {
                x,
                y,
                width,
                height,
                widths,
                color,
                style,
            } => {
                self.draw_border(Rect::new(*x, *y, *width, *height), *widths, *color, *style);
            }
            DisplayCommand::DrawText {
                x,
                y,
                text,
                font_size,
                color,
                font_weight,
            } => {
                self.draw_text(text, *x, *y, *font_size, *color, font_weight);
            }
        }
    }
}
