mod page;

use std::time::{Duration, Instant};

use anyhow::{ensure, Context, Result};

use scrolltint_engine::logging::{init_logging, LoggingConfig};
use scrolltint_engine::surface::{RecordingSurface, RenderSurface};
use scrolltint_engine::{ScrollThemeEngine, ThemeConfig, ThemeFrame};

/// Simulated time between animation frames.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Scroll events delivered per frame; all but the last are coalesced.
const EVENTS_PER_FRAME: usize = 3;

/// Smallest accepted sweep step. Finer steps only repeat identical frames.
const MIN_STEP_PX: f32 = 1.0;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let step = parse_arg(args.next(), "step_px", 240.0)?;
    let viewport = parse_arg(args.next(), "viewport_height", 900.0)?;
    ensure!(step >= MIN_STEP_PX, "step_px must be at least {MIN_STEP_PX}, got {step}");
    ensure!(viewport > 0.0, "viewport_height must be positive, got {viewport}");

    init_logging(LoggingConfig {
        env_filter: std::env::var("SCROLLTINT_LOG").ok(),
        ..LoggingConfig::default()
    });

    let config = ThemeConfig::default();
    let mut surface = page::storefront(&config, viewport);
    let mut engine = ScrollThemeEngine::new(config.clone());

    println!();
    println!(
        "  scrolltint studio: {} sections, viewport {viewport}px, document {}px",
        config.sections.len(),
        surface.document_height()
    );
    println!();

    let mut now = Instant::now();
    let mut frames = 0usize;
    let mut requests = 0usize;
    let end = surface.document_height() - viewport;
    let mut drifted = false;

    for offset in sweep_offsets(end, step) {
        // Late media halfway down the page moves every section.
        if !drifted && offset >= end / 2.0 {
            page::push_sections_down(&mut surface, &config, viewport, viewport * 0.25);
            engine.notify_layout_changed(&mut || requests += 1);
            drifted = true;
            log::info!("sections shifted by {}px at offset {offset:.0}", viewport * 0.25);
        }

        for i in 0..EVENTS_PER_FRAME {
            let behind = (EVENTS_PER_FRAME - 1 - i) as f32 / EVENTS_PER_FRAME as f32;
            surface.scroll_to(offset - step * behind);
            engine.on_scroll(&mut || requests += 1);
        }

        now += FRAME_INTERVAL;
        if let Some(frame) = engine.on_animation_frame(&mut surface, now) {
            frames += 1;
            print_frame(offset, &frame);
        }
    }

    // A rotation to landscape halves the viewport.
    surface.resize(viewport * 0.5, surface.document_height());
    engine.on_resize(&mut || requests += 1);
    now += FRAME_INTERVAL;
    if let Some(frame) = engine.on_animation_frame(&mut surface, now) {
        frames += 1;
        print_frame(surface.scroll_offset(), &frame);
    }

    print_summary(&surface, &engine, frames, requests);
    Ok(())
}

/// Offsets `0, step, 2 * step, ...` up to `end`, derived from an integer
/// frame index so float rounding can never stall the sweep.
fn sweep_offsets(end: f32, step: f32) -> impl Iterator<Item = f32> {
    let last = if end > 0.0 && step > 0.0 { (end / step).floor() as usize } else { 0 };
    (0..=last).map(move |i| step * i as f32)
}

fn parse_arg(arg: Option<String>, name: &str, default: f32) -> Result<f32> {
    match arg {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{name} must be a number, got {raw:?}")),
    }
}

fn print_frame(offset: f32, frame: &ThemeFrame) {
    println!(
        "  {offset:>8.0}px  {:<18} bg {}  text {}  vignette {:.2}  blur {:>5.2}px / {:>4.2}px",
        frame.zone,
        frame.background.to_hex(),
        frame.text.to_hex(),
        frame.vignette_intensity(),
        frame.video_blur_px(),
        frame.bottom_blur_px(),
    );
}

fn print_summary(
    surface: &RecordingSurface,
    engine: &ScrollThemeEngine,
    frames: usize,
    requests: usize,
) {
    let writes = surface.writes();
    let resolved = engine.state().breakpoints().map_or(0, <[_]>::len);

    println!();
    println!("  frames        {frames}");
    println!("  requests      {requests} ({} coalesced)", engine.state().coalesced_frames());
    println!(
        "  writes        bg {}  text {}  props {}",
        writes.background, writes.text, writes.properties
    );
    println!("  sections      {resolved} resolved");
    println!();
}
