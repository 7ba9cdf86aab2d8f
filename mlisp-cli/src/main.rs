//! mlisp CLI - The mlisp command line interface.
//! mlisp CLI - mlisp 语言的命令行界面。

mod commands;
mod config;
mod error;
mod logging;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ReplConfig;

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "mlisp")]
#[command(author, version, about = "mlisp - A small Lisp with matrices", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Start an interactive REPL (the default). / 启动交互式 REPL（默认）。
    Repl {
        /// History file. Falls back to $MLISP_HISTORY, then history.txt.
        /// 历史文件。
        #[arg(long)]
        history: Option<PathBuf>,

        /// Do not load or save history. / 不加载或保存历史。
        #[arg(long)]
        no_history: bool,
    },

    /// Evaluate an expression. / 求值表达式。
    Eval {
        /// The expression to evaluate. / 要求值的表达式。
        expr: String,
    },

    /// Run an mlisp file. / 运行 mlisp 文件。
    Run {
        /// The file to run. / 要运行的文件。
        file: PathBuf,
    },
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Repl {
        history: None,
        no_history: false,
    });

    let result = match command {
        Commands::Repl {
            history,
            no_history,
        } => commands::repl::run(&ReplConfig::resolve(history, no_history)),
        Commands::Eval { expr } => commands::eval::run(&expr, cli.verbose),
        Commands::Run { file } => commands::run::run(&file, cli.verbose),
    };

    if let Err(e) = result {
        if !cli.quiet && !e.is_rendered() {
            output::error(&e.to_string());
        }
        std::process::exit(1);
    }
}
