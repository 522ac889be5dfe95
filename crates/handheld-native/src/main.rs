mod camera;
mod frame;
mod images;
mod input;
mod render;
mod scene;

use anyhow::Context;
use clap::Parser;
use handheld_core::{
    lcd, ShaderConfig, Tuning, DEFAULT_BAR_HEIGHT, DEFAULT_BAR_WIDTH, DEFAULT_BAR_WIDTH_GAP,
    DEFAULT_BRIGHTNESS, DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_THRESHOLD,
};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use frame::FrameContext;
use render::GpuState;
use scene::{parse_hex_color, Palette};

/// Handheld console replica with a live LCD screen.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Image shown on the console screen (PNG or JPEG). Files can also be
    /// dropped onto the window.
    image: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: u32,
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: u32,
    #[arg(long, default_value_t = DEFAULT_BAR_HEIGHT)]
    bar_height: f32,
    #[arg(long, default_value_t = DEFAULT_BAR_WIDTH)]
    bar_width: f32,
    #[arg(long, default_value_t = DEFAULT_BAR_WIDTH_GAP)]
    bar_width_gap: f32,
    #[arg(long, default_value_t = DEFAULT_BRIGHTNESS)]
    brightness: f32,
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f32,

    /// Housing colour, e.g. `#8b8b83`.
    #[arg(long, value_parser = parse_hex_color)]
    color_main: Option<[f32; 4]>,
    /// A/B button colour.
    #[arg(long, value_parser = parse_hex_color)]
    color_ab: Option<[f32; 4]>,
    /// Directional pad colour.
    #[arg(long, value_parser = parse_hex_color)]
    color_dpad: Option<[f32; 4]>,
    /// Select/Start button colour.
    #[arg(long, value_parser = parse_hex_color)]
    color_sel_start: Option<[f32; 4]>,

    /// Render only the screen to this PNG and exit, without opening a window.
    #[arg(long, value_name = "PNG")]
    snapshot: Option<PathBuf>,
    #[arg(long, default_value_t = 640)]
    snapshot_width: u32,
    #[arg(long, default_value_t = 512)]
    snapshot_height: u32,
}

impl Args {
    fn tuning(&self) -> Tuning {
        Tuning {
            rows: self.rows,
            columns: self.columns,
            bar_height: self.bar_height,
            bar_width: self.bar_width,
            bar_width_gap: self.bar_width_gap,
            brightness: self.brightness,
            threshold: self.threshold,
        }
        .clamped()
    }

    fn palette(&self) -> Palette {
        let d = Palette::default();
        Palette {
            main: self.color_main.unwrap_or(d.main),
            buttons_ab: self.color_ab.unwrap_or(d.buttons_ab),
            dpad: self.color_dpad.unwrap_or(d.dpad),
            buttons_sel_start: self.color_sel_start.unwrap_or(d.buttons_sel_start),
        }
    }
}

fn snapshot(args: &Args, out: &Path) -> anyhow::Result<()> {
    let source = match &args.image {
        Some(path) => Some(images::load_image(path)?),
        None => {
            log::warn!("[image] no image given; snapshot shows the bare screen");
            None
        }
    };
    let mut config = ShaderConfig::default();
    config.apply(&args.tuning());
    let (w, h) = (args.snapshot_width.max(1), args.snapshot_height.max(1));
    let rgba = lcd::render_rgba(&config, source.as_ref(), w, h);
    images::write_png(out, w, h, rgba)?;
    log::info!("[image] snapshot written to {}", out.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Some(out) = &args.snapshot {
        return snapshot(&args, out);
    }

    let (image_tx, image_rx) = mpsc::channel();
    if let Some(path) = args.image.clone() {
        images::spawn_loader(path, image_tx.clone());
    }

    let event_loop = EventLoop::new().context("create event loop")?;
    let window = WindowBuilder::new()
        .with_title("Handheld")
        .with_inner_size(winit::dpi::LogicalSize::new(960.0, 900.0))
        .build(&event_loop)
        .context("create window")?;

    let mut gpu = pollster::block_on(GpuState::new(&window))?;
    let mut ctx = FrameContext::new(args.tuning(), &args.palette(), image_rx);
    log::info!("[engine] ready; drop an image on the window, keys r/c/h/w/g/b/t tune the screen");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                gpu.resize(size);
                let (w, h) = gpu.size();
                ctx.resized(w, h);
            }
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                let (w, h) = gpu.size();
                ctx.pointer_moved(w, h, position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => ctx.pointer_left(),
            WindowEvent::DroppedFile(path) => images::spawn_loader(path, image_tx.clone()),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match &event.logical_key {
                    Key::Named(NamedKey::Escape) => elwt.exit(),
                    Key::Character(s) => {
                        input::adjust_tuning(s.as_str(), &mut ctx.tuning);
                    }
                    _ => {}
                }
            }
            _ => {}
        },
        Event::AboutToWait => match ctx.frame(&mut gpu) {
            Ok(()) => gpu.window().request_redraw(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = gpu.window().inner_size();
                gpu.resize(size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[gpu] out of memory");
                elwt.exit();
            }
            Err(e) => log::warn!("[gpu] frame skipped: {e}"),
        },
        _ => {}
    })?;
    Ok(())
}
