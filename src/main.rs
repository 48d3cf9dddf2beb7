/*!
 * Command-line interface for code-assistant
 */

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use code_assistant::config::{Args, CompletionConfig, Config, SupportedExtensions};
use code_assistant::estimate::estimate;
use code_assistant::report::{CollectionReport, Reporter};
use code_assistant::tokenizer::create_tokenizer;
use code_assistant::{
    CodebaseContext, Dispatcher, FileCollector, IgnoreMatcher, OpenAIClient, Result, Session,
};

fn main() -> ExitCode {
    // Parse command line arguments; usage errors exit with status 2
    let args = Args::parse();

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "code-assistant", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    match run(Config::from_args(args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> Result<()> {
    // Everything that can be misconfigured fails before traversal starts
    let completion_config = CompletionConfig::from_env()?;
    config.validate()?;
    let extensions = SupportedExtensions::load(&config.extensions_file)?;
    let matcher = IgnoreMatcher::load(&config.target_dir, &config.ignore_file)?;

    let mut collector = FileCollector::new(&config.target_dir, extensions, matcher);
    let context = CodebaseContext::from_files(&mut collector);

    let tokenizer = create_tokenizer(config.model);
    let estimate = estimate(&*tokenizer, context.as_str())?;

    let client = OpenAIClient::new(completion_config, config.max_tokens)?;
    let dispatcher = Dispatcher::new(
        &client,
        config.model,
        config.chunk_size,
        create_progress_bar(),
    );

    if config.summary {
        Reporter::print_summary(&CollectionReport {
            statistics: collector.statistics(),
            estimate,
            chunks: dispatcher.chunks_for(context.as_str()),
            chunk_size: config.chunk_size,
        });
    }

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), dispatcher);
    session.run(&context, &estimate)?;

    Ok(())
}

fn create_progress_bar() -> ProgressBar {
    let progress = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} {wide_msg:.dim.white} {pos}/{len} ⏱️  {elapsed_precise}")
    {
        progress.set_style(style);
    }
    progress
}
