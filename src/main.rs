// study-aid CLI - extract, quiz, key points, read aloud
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use study_aid::clipboard::{copy_key_points, SystemClipboard};
use study_aid::speech::{CommandSpeaker, SpeechEngine};
use study_aid::study::{KeyPoint, QuizQuestion};
use study_aid::{StudyApp, StudyConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Quizzes, key points and read-aloud for PDF, DOCX and TXT study material")]
struct Args {
    /// Config file (defaults to $STUDY_AID_CONFIG, ./study-aid.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct DocArgs {
    /// .pdf, .docx or .txt file
    file: PathBuf,

    /// Declared MIME type, instead of guessing from the extension
    #[arg(long)]
    media_type: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the extracted text
    Extract {
        #[command(flatten)]
        doc: DocArgs,
    },
    /// Generate multiple-choice questions
    Quiz {
        #[command(flatten)]
        doc: DocArgs,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Extract the longest sentences as key points
    Keypoints {
        #[command(flatten)]
        doc: DocArgs,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Also copy the bulleted list to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Read the document aloud
    Speak {
        #[command(flatten)]
        doc: DocArgs,
        /// Block until speech finishes
        #[arg(long)]
        wait: bool,
    },
    /// Interactive quiz and key-point session
    Study {
        #[command(flatten)]
        doc: DocArgs,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = StudyConfig::load(args.config.as_deref()).context("loading config")?;

    match args.command {
        Command::Extract { doc } => {
            let app = load(&config, &doc).await?;
            println!("{}", app.extracted_text);
        }
        Command::Quiz { doc, seed, format } => {
            if seed.is_some() {
                config.quiz.seed = seed;
            }
            let app = load(&config, &doc).await?;
            let questions = app.session.questions();
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(questions)?),
                Format::Text if questions.is_empty() => println!("No quiz questions could be generated."),
                Format::Text => questions.iter().for_each(print_question),
            }
        }
        Command::Keypoints { doc, format, copy } => {
            let mut app = load(&config, &doc).await?;
            let points = app.generate_key_points().to_vec();
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&points)?),
                Format::Text if points.is_empty() => println!("No key points found."),
                Format::Text => print_key_points(&points),
            }
            if copy && points.is_empty() {
                eprintln!("Nothing to copy.");
            } else if copy {
                let mut clipboard = SystemClipboard::new()?;
                copy_key_points(&mut clipboard, &points)?;
                eprintln!("Key points copied to clipboard!");
            }
        }
        Command::Speak { doc, wait } => {
            let app = load(&config, &doc).await?;
            let mut speaker = CommandSpeaker::new(&config.speech);
            speaker.speak(&app.extracted_text)?;
            if wait {
                speaker.wait()?;
            }
        }
        Command::Study { doc, seed } => {
            if seed.is_some() {
                config.quiz.seed = seed;
            }
            let app = load(&config, &doc).await?;
            let mut speaker = CommandSpeaker::new(&config.speech);
            run_study_mode(app, &mut speaker).await?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "study_aid=debug" } else { "study_aid=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn load(config: &StudyConfig, doc: &DocArgs) -> Result<StudyApp> {
    let mut app = StudyApp::new(config);
    app.open_path(&doc.file, doc.media_type.as_deref())
        .await
        .with_context(|| format!("loading {}", doc.file.display()))?;
    Ok(app)
}

fn print_question(q: &QuizQuestion) {
    println!("{} [{}] {}", q.id, q.kind, q.question);
    for (i, option) in q.options.iter().enumerate() {
        println!("  {}) {}", i + 1, option);
    }
}

fn print_key_points(points: &[KeyPoint]) {
    for kp in points {
        let marker = if kp.is_important { "*" } else { " " };
        println!("{} {}. {}", marker, kp.id + 1, kp.point);
    }
}

const STUDY_HELP: &str = "\
Commands:
  open <file> [mime]   - switch to another document
  show                 - list the quiz questions
  answer <id> <n>      - pick option n (1-4) for question <id>
  hear <id>            - read a question aloud
  hear-answer <id>     - read the correct answer aloud
  regen                - generate new questions
  points               - extract key points
  copy                 - copy key points to the clipboard
  read                 - read the whole document aloud
  stop                 - stop speech
  score                - show your score
  quit                 - exit";

async fn run_study_mode(mut app: StudyApp, speaker: &mut dyn SpeechEngine) -> Result<()> {
    println!(
        "Studying {} ({} characters)",
        app.document_name.as_deref().unwrap_or("document"),
        app.extracted_text.chars().count()
    );
    println!("Type 'help' for commands, 'quit' to exit.");
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            prompt()?;
            continue;
        }
        if matches!(parts[0], "quit" | "exit") {
            break;
        }

        if let Err(e) = run_study_command(&mut app, speaker, &parts).await {
            println!("Error: {}", e);
        }
        prompt()?;
    }

    speaker.cancel()?;
    Ok(())
}

async fn run_study_command(app: &mut StudyApp, speaker: &mut dyn SpeechEngine, parts: &[&str]) -> Result<()> {
    match parts {
        ["help"] => println!("{}", STUDY_HELP),
        ["open", file] => open_document(app, speaker, file, None).await?,
        ["open", file, mime] => open_document(app, speaker, file, Some(*mime)).await?,
        ["show"] => {
            if app.session.is_empty() {
                println!("No quiz questions could be generated.");
            }
            for q in app.session.questions() {
                print_question(q);
                if let Some(feedback) = app.session.feedback(&q.id) {
                    println!("  -> {}", feedback);
                }
            }
        }
        ["answer", id, n] => {
            let index = n
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .with_context(|| format!("not an option number: {}", n))?;
            let feedback = app.session.select(id, index)?;
            println!("{}", feedback);
        }
        ["hear", id] => {
            let question = app.session.question(id)?.question.clone();
            speaker.speak(&question)?;
        }
        ["hear-answer", id] => {
            let announcement = app.session.answer_announcement(id)?;
            println!("{}", announcement);
            speaker.speak(&announcement)?;
        }
        ["regen"] => {
            app.regenerate_quiz();
            println!("Generated {} new questions.", app.session.questions().len());
        }
        ["points"] => {
            let points = app.generate_key_points();
            if points.is_empty() {
                println!("No key points found.");
            }
            print_key_points(points);
        }
        ["copy"] => {
            if app.points.is_empty() {
                println!("No key points yet; run 'points' first.");
            } else {
                let mut clipboard = SystemClipboard::new()?;
                copy_key_points(&mut clipboard, &app.points)?;
                println!("Key points copied to clipboard!");
            }
        }
        ["read"] => speaker.speak(&app.extracted_text)?,
        ["stop"] => speaker.cancel()?,
        ["score"] => println!("{}", app.session.score()),
        _ => println!("Unknown command: {} (try 'help')", parts.join(" ")),
    }
    Ok(())
}

async fn open_document(
    app: &mut StudyApp,
    speaker: &mut dyn SpeechEngine,
    file: &str,
    mime: Option<&str>,
) -> Result<()> {
    speaker.cancel()?;
    app.open_path(Path::new(file), mime).await?;
    println!(
        "Opened {} ({} characters), {} questions.",
        app.document_name.as_deref().unwrap_or(file),
        app.extracted_text.chars().count(),
        app.session.questions().len()
    );
    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}
