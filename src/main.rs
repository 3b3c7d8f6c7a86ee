use clap::Parser;
use quiz_arcade::config::{Cli, Command};
use quiz_arcade::{Arcade, ArcadeError, QuizSettings, RoundSettings, logging};

fn main() {
    let cli = Cli::parse();

    let log_dir = cli.log_dir.clone().unwrap_or_else(logging::default_log_dir);
    let guard = match logging::init(&log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            None
        }
    };

    if let Err(e) = run(cli.command) {
        tracing::error!(error = %e, "arcade exited with an error");
        eprintln!("Error: {}", e);
        // Flush buffered log lines; exit skips destructors.
        drop(guard);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), ArcadeError> {
    let arcade = match command {
        Command::Quiz { questions } => {
            Arcade::from_quiz_settings(&QuizSettings { questions })?
        }
        Command::Rounds { first_to, seed } => {
            let settings = RoundSettings {
                win_threshold: first_to,
                seed,
            };
            Arcade::from_round_settings(&settings)?
        }
    };

    arcade.run()
}
