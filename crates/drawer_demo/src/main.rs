//! Drawer demo
//!
//! Replays a scripted drag session against a headless drawer and logs every
//! committed state and host callback. Useful for checking how a config
//! behaves without a renderer.
//!
//! ```text
//! drawer-demo --direction bottom --content-height 1200 --drag=-40,-120,-260
//! RUST_LOG=trace drawer-demo --config drawer.toml
//! ```

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use drawer_animation::ManualClock;
use drawer_core::{
    AnimatedVisuals, Drawer, DrawerConfig, DrawerDirection, DrawerSlots, HostCallbacks,
    StateChange,
};
use drawer_platform::{FixedGeometry, SafeAreaInsets, ScreenGeometry};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Frame step used to settle animations
const FRAME_DT: f32 = 1.0 / 60.0;
const MAX_SETTLE_FRAMES: u32 = 600;

#[derive(Parser)]
#[command(name = "drawer-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Replay a scripted drawer drag session", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// TOML drawer configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Edge the drawer slides from (overrides the config)
    #[arg(short, long, value_enum)]
    direction: Option<DirectionArg>,

    /// Physical screen height
    #[arg(long, default_value_t = 844.0)]
    screen_height: f32,

    /// Top safe-area inset
    #[arg(long, default_value_t = 47.0)]
    inset_top: f32,

    /// Bottom safe-area inset
    #[arg(long, default_value_t = 34.0)]
    inset_bottom: f32,

    /// Use the far-edge safe-area inset as drawer padding
    #[arg(long)]
    safe_area_padding: bool,

    /// Natural height of the drawer content
    #[arg(long, default_value_t = 420.0)]
    content_height: f32,

    /// Gesture translations to replay, in order; the drag ends afterwards
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = vec![40.0, 120.0, 200.0]
    )]
    drag: Vec<f32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    Top,
    Bottom,
}

impl From<DirectionArg> for DrawerDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Top => DrawerDirection::Top,
            DirectionArg::Bottom => DrawerDirection::Bottom,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let geometry = FixedGeometry::new(cli.screen_height)
        .with_insets(SafeAreaInsets::vertical(cli.inset_top, cli.inset_bottom));
    let config = load_config(&cli, &geometry)?;
    info!(
        "Drawer from {:?}, padding {}, delay {}ms",
        config.direction, config.padding, config.deferred_delay_ms
    );

    run_session(&cli, config, geometry)
}

fn load_config(cli: &Cli, geometry: &FixedGeometry) -> Result<DrawerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            DrawerConfig::from_toml_str(&source)
                .with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => DrawerConfig::default(),
    };

    if let Some(direction) = cli.direction {
        config = config.direction(direction.into());
    }
    if cli.safe_area_padding {
        config = config.safe_area_padding(geometry)?;
    }
    Ok(config)
}

fn run_session(cli: &Cli, config: DrawerConfig, geometry: FixedGeometry) -> Result<()> {
    // The hosting viewport is whatever the insets leave over
    let viewport = geometry.available_height().unwrap_or(cli.screen_height);

    let host = HostCallbacks::new()
        .on_close(|| info!("host: close requested"))
        .on_presented_changed(|presented| info!("host: presented = {}", presented))
        .on_disappear(|| info!("host: content disappeared"));

    let clock = ManualClock::new();
    let mut drawer = Drawer::try_new(config.clone(), DrawerSlots::content(()), geometry, host)?
        .with_clock(clock.clone());

    let visuals = Rc::new(RefCell::new(AnimatedVisuals::new(drawer.state(), config.clone())));
    drawer.subscribe({
        let visuals = Rc::clone(&visuals);
        move |change: &StateChange| {
            debug!(
                "commit: open {} -> {}, offset {} -> {}, scroll {}",
                change.previous.is_open(),
                change.current.is_open(),
                change.previous.drawer_offset(),
                change.current.drawer_offset(),
                change.current.scroll_content_offset()
            );
            visuals.borrow_mut().apply(change);
        }
    });

    // Appear presented; the open waits for the deferred delay
    drawer.on_viewport_measured(viewport);
    drawer.on_appear(true);
    clock.advance(config.deferred_delay_duration());
    drawer.poll();
    info!("phase after appear: {:?}", drawer.render_phase());

    drawer.on_content_measured(cli.content_height);
    drawer.on_warm_up_complete();
    settle(&visuals);
    report("opened", &drawer, &visuals);

    for translation in &cli.drag {
        drawer.on_drag_translation(*translation);
        report(&format!("drag {}", translation), &drawer, &visuals);
    }

    drawer.on_drag_translation(0.0);
    let frames = settle(&visuals);
    info!("released, settled in {} frames", frames);
    report("released", &drawer, &visuals);

    if !drawer.state().is_open() {
        drawer.on_content_disappear();
    }
    Ok(())
}

/// Tick the visuals until they rest; returns the number of frames
fn settle(visuals: &Rc<RefCell<AnimatedVisuals>>) -> u32 {
    let mut visuals = visuals.borrow_mut();
    let mut frames = 0;
    while visuals.tick(FRAME_DT) {
        frames += 1;
        if frames >= MAX_SETTLE_FRAMES {
            warn!("Animation did not settle after {} frames", frames);
            break;
        }
    }
    frames
}

fn report<C>(label: &str, drawer: &Drawer<C>, visuals: &Rc<RefCell<AnimatedVisuals>>) {
    let state = drawer.state();
    let frame = visuals.borrow().current();
    info!(
        "{}: phase={:?} open={} offset={} scroll={} visible={} overlay={:?} blur={:.2}",
        label,
        drawer.render_phase(),
        state.is_open(),
        state.drawer_offset(),
        state.scroll_content_offset(),
        state.visible_drawer_length(),
        frame.overlay_color.to_array(),
        frame.blur_radius
    );
}
