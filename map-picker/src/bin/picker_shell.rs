//! Line-driven host for the map screen.
//!
//! Plays the role of the UI toolkit: it owns the event loop, provides a galileo map surface
//! and feeds user input to the screen.
//! Run with: cargo run --bin picker-shell -- [config.json]

use std::io::{BufRead, Write};

use anyhow::Context;
use log::info;
use map_picker::core::init_logger;
use map_picker::host::{EditText, NavigationLog, TextField};
use map_picker::surface::{GalileoSurface, MapEvent, MapSurface, SurfaceRequest};
use map_picker::{Coordinate, MapScreen, PickerConfig, ScreenState};

const HELP: &str = "\
commands:
  ready              provide the map surface to the screen
  tap <lat> <lon>    tap the map
  long-press         long-press the map (uses the typed coordinates)
  lat <text>         type into the latitude field
  lon <text>         type into the longitude field
  show               print fields, markers and camera
  gps                open the location screen
  quit";

type ShellScreen = MapScreen<GalileoSurface, EditText>;

fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => PickerConfig::from_path(&path)
            .with_context(|| format!("failed to load configuration from {path}"))?,
        None => PickerConfig::default(),
    };
    init_logger(&config.log);

    let navigation = NavigationLog::default();
    let (mut screen, request) = ShellScreen::create(
        EditText::default(),
        EditText::default(),
        navigation.clone(),
        config.clone(),
    );
    let mut request = Some(request);

    println!("{HELP}");
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };

        match command {
            "ready" => match request.take() {
                Some(request) => provide_surface(&mut screen, request, &config)?,
                None => println!("map surface was already provided"),
            },
            "tap" => match parse_position(words.next(), words.next()) {
                Some(position) => {
                    screen.handle_event(&MapEvent::Tap(position));
                }
                None => println!("usage: tap <lat> <lon>"),
            },
            "long-press" => {
                let position = screen
                    .surface()
                    .and_then(|surface| surface.camera())
                    .unwrap_or(config.default_marker);
                screen.handle_event(&MapEvent::LongPress(position));
            }
            "lat" => screen
                .latitude_field_mut()
                .set_text(&words.collect::<Vec<_>>().join(" ")),
            "lon" => screen
                .longitude_field_mut()
                .set_text(&words.collect::<Vec<_>>().join(" ")),
            "show" => print_screen(&screen),
            "gps" => {
                screen.navigate_to_other_screen();
                for launched in navigation.drain() {
                    println!("launched {launched:?}");
                }
            }
            "quit" | "exit" => break,
            _ => println!("{HELP}"),
        }
        stdout.flush().context("failed to write output")?;
    }

    info!("Shell finished");
    Ok(())
}

fn provide_surface(
    screen: &mut ShellScreen,
    request: SurfaceRequest<GalileoSurface>,
    config: &PickerConfig,
) -> anyhow::Result<()> {
    if request.resolve(GalileoSurface::new(config)).is_err() {
        anyhow::bail!("map screen is gone");
    }

    let state = screen.poll_surface()?;
    println!("screen state: {state:?}");
    Ok(())
}

fn parse_position(latitude: Option<&str>, longitude: Option<&str>) -> Option<Coordinate> {
    let latitude = latitude?.parse().ok()?;
    let longitude = longitude?.parse().ok()?;
    Some(Coordinate::new(latitude, longitude))
}

fn print_screen(screen: &ShellScreen) {
    let describe = |field: &EditText| match field.error() {
        Some(error) => format!("{:?} ({error})", field.text()),
        None => format!("{:?}", field.text()),
    };
    println!("latitude:  {}", describe(screen.latitude_field()));
    println!("longitude: {}", describe(screen.longitude_field()));

    match (screen.state(), screen.surface()) {
        (ScreenState::Ready, Some(surface)) => {
            for marker in surface.markers() {
                println!(
                    "marker {} {}",
                    marker.position,
                    marker.title.as_deref().unwrap_or("<unlabeled>")
                );
            }
            if let Some(camera) = surface.camera() {
                println!("camera {camera}");
            }
        }
        _ => println!("map surface is not ready"),
    }
}
