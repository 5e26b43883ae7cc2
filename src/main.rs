use primes::command::one_shot;
use primes::core::cli::Cli;
use primes::core::context::AppContext;
use primes::logging::LogTarget;
use primes::prompter::flows::session::SessionFlow;
use primes::prompter::prompter::Prompter;

fn main() {
    let cli = Cli::from_env();
    let mut ctx = match AppContext::from_cli(&cli) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let outcome = match cli.limit {
        Some(limit) => one_shot::run(&mut ctx, limit),
        None => Prompter::new().run(SessionFlow::new(&mut ctx)),
    };

    if let Err(err) = outcome {
        ctx.logger.error(format!("{err}"), LogTarget::ConsoleAndFile);
        std::process::exit(1);
    }
}
