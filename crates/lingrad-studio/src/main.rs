use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use lingrad_engine::logging::{init_logging, LoggingConfig};
use lingrad_ui::prelude::*;

const DEFAULT_SIZE: PixelSize = PixelSize::new(320, 200);

/// Usage: `lingrad-studio [OUT_DIR] [WIDTHxHEIGHT]`
///
/// Renders every preset view into `OUT_DIR/<name>.png`.
fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args().skip(1);
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_owned()));
    let size = match args.next() {
        Some(s) => parse_size(&s)?,
        None => DEFAULT_SIZE,
    };

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    println!();
    println!("  lingrad studio  ·  {}x{}  ->  {}", size.width, size.height, out_dir.display());
    println!();

    for (name, update) in presets() {
        let file = render_preset(&out_dir, name, update, size)?;
        println!("  {name:<14} {}", file.display());
    }
    println!();
    Ok(())
}

fn render_preset(out_dir: &Path, name: &str, update: PropUpdate, size: PixelSize) -> Result<PathBuf> {
    let mut view = LinearGradientView::new(ViewConfig::default().with_pixel_density(2.0));
    view.on_size_changed(size.width, size.height);
    view.apply(update);

    if view.shader().is_none() {
        log::warn!("preset {name}: gradient did not resolve, output will be blank");
    }

    let mut canvas = PixmapCanvas::for_size(size)?;
    view.draw(&mut canvas);

    let file = out_dir.join(format!("{name}.png"));
    canvas.save_png(&file)?;
    log::info!("rendered {name} to {}", file.display());
    Ok(file)
}

fn presets() -> Vec<(&'static str, PropUpdate)> {
    vec![
        (
            "vertical",
            PropUpdate::new().colors(&[0xFF4C669F, 0xFF3B5998, 0xFF192F6A]),
        ),
        (
            "horizontal",
            PropUpdate::new()
                .colors(&[0xFFFF512F, 0xFFDD2476])
                .start_position((0.0, 0.5))
                .end_position((1.0, 0.5)),
        ),
        (
            "angled",
            PropUpdate::new()
                .colors(&[0xFF00C6FF, 0xFF0072FF])
                .use_angle(true)
                .angle(135.0),
        ),
        (
            "stops",
            PropUpdate::new()
                .colors(&[0xFFF7971E, 0xFFFFD200, 0xFF21D4FD])
                .locations(&[0.0, 0.15, 1.0]),
        ),
        (
            "rounded",
            PropUpdate::new()
                .colors(&[0xFF8E2DE2, 0xFF4A00E0])
                .border_radii(&[24.0, 24.0, 8.0, 8.0, 24.0, 24.0, 8.0, 8.0]),
        ),
        (
            "outline",
            PropUpdate::new()
                .colors(&[0xFFFC466B, 0xFF3F5EFB])
                .use_angle(true)
                .angle(90.0)
                .is_transparent(true)
                .stroke_width(6)
                .border_radii(&[16.0; 8]),
        ),
    ]
}

/// Parses `WIDTHxHEIGHT`, e.g. `640x360`.
fn parse_size(s: &str) -> Result<PixelSize> {
    let Some((w, h)) = s.split_once(|c: char| c == 'x' || c == 'X') else {
        bail!("size must look like WIDTHxHEIGHT, got {s:?}");
    };
    let width: i32 = w.trim().parse().with_context(|| format!("bad width in {s:?}"))?;
    let height: i32 = h.trim().parse().with_context(|| format!("bad height in {s:?}"))?;
    let size = PixelSize::new(width, height);
    if !size.is_valid() {
        bail!("size must be positive, got {s:?}");
    }
    Ok(size)
}
