//! jotter - quick notes with categories, tags and pins

pub mod cli;
pub mod domain;
pub mod infra;
pub mod query;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_clear, handle_counts, handle_edit, handle_export, handle_import, handle_list,
        handle_new, handle_pin, handle_rm, handle_show, handle_stats, handle_tag, handle_tags,
        handle_theme, handle_untag,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    infra::init_logging(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        clap_complete::generate(args.shell, &mut Cli::command(), "jot", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    let data_dir = config.data_dir(cli.dir.as_ref());
    log::debug!("using data directory {}", data_dir.display());

    match &cli.command {
        Command::New(args) => handle_new(args, &data_dir),
        Command::Edit(args) => handle_edit(args, &data_dir),
        Command::Show(args) => handle_show(args, &data_dir),
        Command::Pin(args) => handle_pin(args, &data_dir),
        Command::Rm(args) => handle_rm(args, &data_dir),
        Command::Clear(args) => handle_clear(args, &data_dir),
        Command::List(args) => handle_list(args, &data_dir),
        Command::Tag(args) => handle_tag(args, &data_dir),
        Command::Untag(args) => handle_untag(args, &data_dir),
        Command::Tags(args) => handle_tags(args, &data_dir),
        Command::Counts(args) => handle_counts(args, &data_dir),
        Command::Stats(args) => handle_stats(args, &data_dir),
        Command::Export(args) => handle_export(args, &data_dir),
        Command::Import(args) => handle_import(args, &data_dir),
        Command::Theme(args) => handle_theme(args, &data_dir),
        Command::Completions(_) => Ok(()),
    }
}
