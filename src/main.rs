use clap::Parser;
use dtcq::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Lookup(args) => dtcq::cli::commands::lookup::run(args, &global),
        Commands::List(args) => dtcq::cli::commands::list::run(args, &global),
        Commands::Makes(args) => dtcq::cli::commands::makes::run(args, &global),
        Commands::Info(args) => dtcq::cli::commands::info::run(args, &global),
        Commands::Completions(args) => dtcq::cli::commands::completions::run(args),
    }
}
