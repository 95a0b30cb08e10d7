//! Lingrad UI: the linear-gradient view on top of `lingrad-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use lingrad_ui::prelude::*;
//!
//! let mut view = LinearGradientView::new(ViewConfig::default().with_pixel_density(2.0));
//! view.on_size_changed(200, 120);
//! view.apply(
//!     PropUpdate::new()
//!         .colors(&[0xFF4C669F, 0xFF3B5998, 0xFF192F6A])
//!         .use_angle(true)
//!         .angle(135.0)
//!         .border_radii(&[12.0; 8]),
//! );
//!
//! if view.take_redraw_request() {
//!     let mut canvas = PixmapCanvas::new(200, 120)?;
//!     view.draw(&mut canvas);
//! }
//! ```

pub mod config;
pub mod props;
pub mod view;

pub use config::ViewConfig;
pub use props::PropUpdate;
pub use view::LinearGradientView;

/// Everything needed to drive a view and draw it.
pub mod prelude {
    pub use crate::{LinearGradientView, PropUpdate, ViewConfig};
    pub use lingrad_engine::coords::{PixelSize, Vec2};
    pub use lingrad_engine::render::{Canvas, PixmapCanvas};
    pub use lingrad_engine::scene::DrawList;
}
