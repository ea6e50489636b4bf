use crate::demo::{run_demo, run_predict, PredictArgs};
use crate::server;
use career_predictor::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Career Predictor",
    about = "Serve or run RIASEC career predictions from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a `{"answers": [...]}` payload and print the prediction
    Predict(PredictArgs),
    /// Run the reference quiz profiles through the predictor
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Predict(args) => run_predict(args),
        Command::Demo => run_demo(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["career-predictor-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from(["career-predictor-api", "serve", "--port", "7000"])
            .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(7000));
                assert!(args.host.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn predict_takes_an_answers_file() {
        let cli = Cli::try_parse_from([
            "career-predictor-api",
            "predict",
            "--answers",
            "quiz.json",
            "--compact",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Predict(args)) => {
                assert_eq!(args.answers.as_deref(), Some(std::path::Path::new("quiz.json")));
                assert!(args.compact);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
