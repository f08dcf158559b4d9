use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use floppy::input::handle_key;
use floppy::ui;
use floppy::utils::{build_info, logging, persistence};
use floppy::{Session, WorldConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn print_help() {
    println!("FloppyCircle - turn-based terminal flyer\n");
    println!("Usage: floppy [options]\n");
    println!("Options:");
    println!("  --seed <N>  Use a fixed seed for pipe placement");
    println!("  --version   Show version information");
    println!("  --help      Show this help message");
    println!();
    println!("World settings are read from ~/.floppy/config.json if present.");
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'floppy --help' for usage.");
    std::process::exit(1);
}

/// Parse CLI arguments. Returns the optional RNG seed.
fn parse_args() -> Option<u64> {
    let mut args = std::env::args().skip(1);
    let mut seed = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--seed" => match args.next().map(|s| s.parse::<u64>()) {
                Some(Ok(n)) => seed = Some(n),
                _ => usage_error("--seed needs a non-negative integer"),
            },
            other => usage_error(&format!("Unknown option: {}", other)),
        }
    }
    seed
}

fn main() -> io::Result<()> {
    let seed = parse_args();

    logging::init_logging();
    let config = persistence::load_world_config();
    log::info!("starting {} with {:?}", build_info::version_line(), config);

    let rng = match seed {
        Some(n) => StdRng::seed_from_u64(n),
        None => StdRng::from_entropy(),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, config, rng);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let best = result?;
    println!("Thanks for playing FloppyCircle! Final Best: {}", best);
    log::info!("session over, best {}", best);
    Ok(())
}

/// Drive the session until the player leaves. Returns the best score.
fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: WorldConfig,
    rng: StdRng,
) -> io::Result<u32> {
    let mut session = Session::new(config, rng);

    while !session.is_finished() {
        terminal.draw(|frame| ui::draw(frame, &session))?;

        // Blocks until a key arrives: one key, one tick
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(&mut session, key);
            }
        }
    }

    Ok(session.scoreboard.best())
}
