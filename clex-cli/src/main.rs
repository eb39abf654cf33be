//! clex CLI - tokenize C-like source files from the command line.
//! clex CLI - 在命令行中对类 C 源文件进行词法分析。

mod commands;
mod error;
mod logging;
mod options;
mod output;
mod sink;
mod source;

use clap::{Parser, Subcommand};
use options::ScanArgs;
use sink::OutputFormat;

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "clex")]
#[command(author, version, about = "clex - a tokenizer for C-like source", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress the final error line. / 不打印最后的错误行。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Print every token of a file (`-` reads stdin). / 打印文件中的每个 token（`-` 读取标准输入）。
    Tokens {
        /// The file to tokenize. / 要分析的文件。
        file: String,

        /// Output format. / 输出格式。
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Check that a file tokenizes without errors. / 检查文件能否无错误地完成词法分析。
    Check {
        /// The file to check. / 要检查的文件。
        file: String,

        #[command(flatten)]
        scan: ScanArgs,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tokens { file, format, scan } => {
            commands::tokens::run(&file, format, scan.options(), cli.verbose)
        }
        Commands::Check { file, scan } => commands::check::run(&file, scan.options(), cli.verbose),
    };

    if let Err(e) = result {
        if !cli.quiet {
            output::error(&e.to_string());
        }
        std::process::exit(1);
    }
}
