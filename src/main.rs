use clap::Parser;
use log::{error, info};

mod cli;
mod logger;

use cli::{Args, DemoKind};
use logger::init_logger;
use raycast_demos::canvas::HdrImage;
use raycast_demos::config::Config;
use raycast_demos::output::{numbered_path, save_image, send_image_to_tev, ImageFormat};
use raycast_demos::{demo, Boundary, InputEvent, Key, Result, Scene};

/// Resolve the config file and apply command line overrides on top.
fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = Config::load_or_default(&args.config)?;
    config.apply_overrides(args.width, args.height, args.rays, args.frames);
    Ok(config)
}

/// Feed each click through the scene and render one frame per new field.
fn run_raycast(args: &Args, config: &Config) -> Result<Vec<HdrImage>> {
    let boundary = Boundary::new(config.window.width as f32, config.window.height as f32)?;
    let mut scene = Scene::new(boundary, config.raycast.ray_count);

    let mut events: Vec<InputEvent> = args
        .clicks
        .iter()
        .map(|&screen| InputEvent::Click { screen })
        .collect();
    if events.is_empty() {
        // The center maps to itself under the y flip
        info!("No --click given, casting from the window center");
        events.push(InputEvent::Click { screen: boundary.center() });
    }
    events.push(InputEvent::Key(Key::Escape));

    let mut frames = Vec::new();
    for event in events {
        if let Some(field) = scene.update(event) {
            frames.push(demo::render_raycast(config, scene.boundary(), &field));
        }
        if scene.should_close() {
            break;
        }
    }
    Ok(frames)
}

fn run(args: &Args) -> Result<()> {
    // Fail on a bad extension before spending time rendering
    ImageFormat::from_path(&args.output)?;

    let config = resolve_config(args)?;
    info!(
        "Demo {:?} at {}x{}",
        args.demo, config.window.width, config.window.height
    );

    let frames = match args.demo {
        DemoKind::Window => vec![demo::render_window(&config)],
        DemoKind::Triangle => vec![demo::render_triangle(&config)],
        DemoKind::Raycast => run_raycast(args, &config)?,
        DemoKind::Cube => demo::render_cube(&config),
    };

    let tev_address = if args.tev || args.tev_address.is_some() {
        Some(args.tev_address.as_deref().unwrap_or("localhost"))
    } else {
        None
    };

    for (index, image) in frames.iter().enumerate() {
        let path = numbered_path(&args.output, index, frames.len());
        if let Some(address) = tev_address {
            let name = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
            send_image_to_tev(image, address, &name);
        }
        save_image(image, &path)?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("raycast-demos - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
