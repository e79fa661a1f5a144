use std::fs::File;
use std::io;
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::style::Color;
use crossterm::terminal;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sparselife::camera::Camera;
use sparselife::config::Config;
use sparselife::config::Rgb;
use sparselife::generation::Generation;
use sparselife::init::initialize_from;
use sparselife::io::Event;
use sparselife::io::convert_event;
use sparselife::world::World;

/// Logs go to the file named by `LIFE_LOG`, since the terminal is taken by the simulation.
fn setup_tracing() -> anyhow::Result<()> {
    let Ok(path) = std::env::var("LIFE_LOG") else {
        return Ok(());
    };

    let file = File::create(&path).with_context(|| format!("Failed to create log file {path}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

/// A camera filling the terminal, looking at the middle of `generation`
fn camera_for(cols: u16, rows: u16, generation: &Generation, config: &Config) -> Camera {
    let mut cam = Camera::for_terminal(cols, rows);

    if let Some(bounds) = generation.bounds() {
        cam.center_on(bounds, config.cell_size);
    }

    cam
}

fn run(config: &Config, stdout: &mut io::Stdout) -> anyhow::Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let world = World::new(config);
    let mut generation = initialize_from(config, &mut rng);

    let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
    let mut cam = camera_for(cols, rows, &generation, config);

    let frame_time = config.frame_time();
    let mut paused = false;
    let mut step = 0u64;

    loop {
        let t = Instant::now();

        if event::poll(frame_time)? {
            match convert_event(event::read()?) {
                None => {}
                Some(Event::Exit) => break,
                Some(Event::Pause) => paused = !paused,
                Some(Event::Move { dx, dy }) => {
                    cam.offset_x(dx);
                    cam.offset_y(dy);
                }
                Some(Event::Center) => {
                    if let Some(bounds) = generation.bounds() {
                        cam.center_on(bounds, config.cell_size);
                    }
                }
                Some(Event::Resize { cols, rows }) => {
                    cam = camera_for(cols, rows, &generation, config);
                }
            }
        }

        if !paused {
            generation = world.transition(&generation);
            step += 1;
        }

        cam.reset();
        cam.draw(&generation, config.cell_size);

        queue!(
            stdout,
            style::SetBackgroundColor(rgb(config.background)),
            style::SetForegroundColor(rgb(config.foreground)),
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;

        for line in cam.render().lines() {
            queue!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        stdout.flush()?;

        let time_left = frame_time.saturating_sub(t.elapsed());
        std::thread::sleep(time_left);
    }

    info!(step, population = generation.len(), "exiting");

    Ok(())
}

fn main() -> anyhow::Result<()> {
    setup_tracing()?;

    let config = Config::from_env().context("Invalid configuration")?;
    info!(?config, "starting");

    let mut stdout = io::stdout();

    terminal::enable_raw_mode()?;

    let res = execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)
        .context("Failed to enter the alternate screen")
        .and_then(|()| run(&config, &mut stdout));

    // Both restore steps always run, even if one of them fails
    let screen = execute!(
        stdout,
        style::ResetColor,
        cursor::Show,
        terminal::LeaveAlternateScreen
    );
    let raw = terminal::disable_raw_mode();

    finish(res, screen, raw)
}

/// The error from the run itself wins over errors from restoring the terminal.
fn finish(
    res: anyhow::Result<()>,
    screen: io::Result<()>,
    raw: io::Result<()>,
) -> anyhow::Result<()> {
    res?;
    screen.context("Failed to restore the screen")?;
    raw.context("Failed to leave raw mode")?;

    Ok(())
}
