//! Wikipedia-style page generator. The thin presentation collaborator for
//! [`Generator`]: reads a topic, generates an article, prints it and writes
//! it to the suggested file name.

use clap::Parser;
use std::process::ExitCode;
use wikigen::{Generator, Model, Topic};

/// Generate a comprehensive, Wikipedia-style article about a topic.
///
/// The API key is read from the GOOGLE_API_KEY environment variable.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Topic for the article, e.g. "Artificial Intelligence".
    topic: String,
    /// Model to use.
    #[arg(short, long, default_value = "gemini-pro")]
    model: Model,
    /// Skip writing the article to disk.
    #[arg(long)]
    no_save: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    #[cfg(feature = "log")]
    env_logger::init();

    // Read the command line arguments.
    let args = Args::parse();

    // A blank topic is refused before any client is touched.
    let topic = match Topic::new(args.topic) {
        Ok(topic) => topic,
        Err(_) => {
            eprintln!("Please enter a topic first!");
            return ExitCode::FAILURE;
        }
    };

    // Configuration failure is fatal. Report once and halt before any
    // request is made.
    let generator = match Generator::from_env() {
        Ok(generator) => generator.model(args.model),
        Err(error) => {
            eprintln!("Error configuring API: {}", error);
            return ExitCode::FAILURE;
        }
    };

    // One outbound call. Failures are reported, not propagated as a crash.
    let article = match generator.generate(&topic).await {
        Ok(article) => article,
        Err(error) => {
            eprintln!("Error generating content: {}", error);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", article);

    if !args.no_save {
        let file_name = article.file_name();
        if let Err(error) = std::fs::write(&file_name, article.text()) {
            eprintln!("Error writing {}: {}", file_name, error);
            return ExitCode::FAILURE;
        }
        eprintln!("Saved article to {}", file_name);
    }

    ExitCode::SUCCESS
}
