#![deny(warnings)]

use anyhow::Context;
use clap::{ArgGroup, Parser};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;
use youdao_translator_core::config::{
    resolve_credentials, ConfigError, Credentials, Env, LangCode, LangPair, StdEnv,
    DEFAULT_API_URL, DEFAULT_FROM_LANG, DEFAULT_TO_LANG,
};
use youdao_translator_core::host::{translate_selection, Host};
use youdao_translator_core::lang::LANGUAGES;
use youdao_translator_core::translate::{Translation, YoudaoTranslator};

#[derive(Parser)]
#[command(name = "youdao-translate")]
#[command(about = "Translate a piece of text with the Youdao open API")]
#[command(group(
    ArgGroup::new("input")
        .multiple(false)
        .args(["text", "file"])
))]
struct Args {
    /// Text to translate. Read from stdin when neither TEXT nor --file is given.
    text: Option<String>,

    #[arg(long)]
    file: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_FROM_LANG)]
    from: String,

    #[arg(long, default_value = DEFAULT_TO_LANG)]
    to: String,

    /// Falls back to YOUDAO_APP_KEY.
    #[arg(long)]
    app_key: Option<String>,

    /// Falls back to YOUDAO_APP_SECRET.
    #[arg(long)]
    app_secret: Option<String>,

    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: url::Url,

    /// Print the result as JSON instead of the text layout.
    #[arg(long)]
    json: bool,

    /// List the supported language tags and exit.
    #[arg(long)]
    list_langs: bool,

    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Terminal host: selection from the command line, output on stdout,
/// notifications on stderr.
struct CliHost {
    selection: String,
    json: bool,
}

impl Host for CliHost {
    fn selected_text(&mut self) -> String {
        std::mem::take(&mut self.selection)
    }

    fn append_line(&mut self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{line}") {
            tracing::error!(error = %e, "failed to write output");
        }
    }

    fn show_info(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn show_translation(&mut self, translation: &Translation) {
        if !self.json {
            self.append_line(&translation.to_string());
            return;
        }
        match serde_json::to_string_pretty(translation) {
            Ok(json) => self.append_line(&json),
            Err(e) => self.show_error(&format!("failed to encode result: {e}")),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    if args.list_langs {
        for (tag, name) in LANGUAGES {
            println!("{tag:<8}{name}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let pair = LangPair {
        from: LangCode::new(&args.from).context("invalid --from")?,
        to: LangCode::new(&args.to).context("invalid --to")?,
    };
    let credentials = credentials_from(&args, &StdEnv);
    let selection = read_selection(&args).await?;

    tracing::info!(from = %pair.from.as_str(), to = %pair.to.as_str(), "config loaded");

    let mut host = CliHost {
        selection,
        json: args.json,
    };
    let api_url = args.api_url.clone();
    let outcome = translate_selection(&mut host, credentials, pair, |creds| {
        YoudaoTranslator::new(creds).with_api_url(api_url)
    })
    .await;

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn credentials_from(args: &Args, env: &impl Env) -> Result<Credentials, ConfigError> {
    resolve_credentials(args.app_key.clone(), args.app_secret.clone(), env)
}

async fn read_selection(args: &Args) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        return Ok(strip_trailing_newlines(content));
    }
    if std::io::stdin().is_terminal() {
        return Ok(String::new());
    }
    let mut buf = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buf)
        .await
        .context("failed to read stdin")?;
    Ok(strip_trailing_newlines(buf))
}

fn strip_trailing_newlines(mut s: String) -> String {
    let len = s.trim_end_matches(['\n', '\r']).len();
    s.truncate(len);
    s
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(
            level
                .parse()
                .with_context(|| format!("invalid --log-level: {level}"))?,
        )
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
