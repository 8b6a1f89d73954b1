use std::io::{self, BufRead, Write};

use clap::Parser;
use scical::{
    AngleMode, format::format_result, interpreter::environment::function::BUILTIN_FUNCTIONS,
    session::Session,
};

/// scical evaluates scientific calculator expressions such as
/// `sin(30) + 2^10 - 5!`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Interpret trigonometric arguments and results in degrees instead of
    /// radians.
    #[arg(short, long)]
    degrees: bool,

    /// The value `ans` refers to.
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    ans: f64,

    /// The expression to evaluate. Without it, scical reads expressions from
    /// standard input, one per line.
    expression: Option<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let mut session = Session::new();
    session.set_answer(args.ans);
    if args.degrees {
        session.set_angle_mode(AngleMode::Degrees);
    }

    if let Some(expression) = args.expression {
        match session.evaluate(&expression) {
            Ok(value) => println!("{}", format_result(value)),
            Err(e) => {
                eprintln!("{}: {e}", e.kind());
                std::process::exit(1);
            },
        }
        return;
    }

    if let Err(e) = run_interactive(&mut session) {
        eprintln!("Failed to read input: {e}");
        std::process::exit(1);
    }
}

/// Reads lines from stdin until end of input or `:quit`.
///
/// Lines starting with `:` are session commands; everything else is
/// evaluated.
fn run_interactive(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    prompt(session, &mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        if let Some(command) = input.strip_prefix(':') {
            if !run_command(session, command.trim()) {
                break;
            }
        } else if !input.is_empty() {
            match session.evaluate(input) {
                Ok(value) => println!("= {}", format_result(value)),
                Err(e) => println!("{}: {e}", e.kind()),
            }
        }

        prompt(session, &mut stdout)?;
    }

    Ok(())
}

fn prompt(session: &Session, stdout: &mut io::Stdout) -> io::Result<()> {
    write!(stdout, "[{}] > ", session.angle_mode())?;
    stdout.flush()
}

/// Runs a session command. Returns `false` when the session should end.
fn run_command(session: &mut Session, command: &str) -> bool {
    if let Ok(angle_mode) = command.parse::<AngleMode>() {
        session.set_angle_mode(angle_mode);
        return true;
    }

    match command {
        "mc" => session.memory_clear(),
        "mr" => println!("M = {}", format_result(session.memory_recall())),
        "m+" => session.memory_add(session.answer()),
        "m-" => session.memory_subtract(session.answer()),
        "ms" => session.memory_store(session.answer()),
        "history" => {
            for entry in session.history().iter().rev() {
                println!("{} = {}", entry.expression, format_result(entry.result));
            }
        },
        "clear" => session.clear_history(),
        "functions" => println!("{}", BUILTIN_FUNCTIONS.join(" ")),
        "quit" | "q" => return false,
        other => println!("Unknown command ':{other}'. Try :deg :rad :mc :mr :m+ :m- :ms :history :clear :functions :quit"),
    }
    true
}
