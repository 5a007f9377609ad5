use anyhow::Context;
use clap::Parser;
use kombucha_calc::core::session::run_once;
use kombucha_calc::domain::ports::Renderer;
use kombucha_calc::utils::{logger, validation::Validate};
use kombucha_calc::{
    Calculator, CliConfig, Field, FieldEdit, JsonRenderer, KombuchaError, OutputFormat, Session,
    TextRenderer, TomlConfig,
};
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.log_json);

    tracing::info!("Starting kombucha calculator");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => exit_with(&e),
            }
        }
        None => TomlConfig::default(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let format = cli.format.or(config.output_format()).unwrap_or_default();
    let renderer: Box<dyn Renderer> = match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer {
            pretty: cli.pretty || config.pretty_json(),
        }),
    };

    let mut calculator = Calculator::from_config(&config);
    tracing::debug!("Using ratios: {:?}", calculator.ratios());

    if cli.interactive {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut session = Session::new(calculator, renderer.as_ref());
        if let Err(e) = session.run(stdin.lock(), &mut stdout) {
            exit_with(&e);
        }
        return Ok(());
    }

    let edit = match (&cli.water, &cli.starter) {
        (Some(raw), _) => Some(FieldEdit::parse(Field::Water, raw)),
        (None, Some(raw)) => Some(FieldEdit::parse(Field::Starter, raw)),
        (None, None) => None,
    };

    let outcome = run_once(&mut calculator, edit, renderer.as_ref())
        .context("failed to render recipe")?;
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", outcome.rendered).context("failed to write to stdout")?;

    if outcome.rejected {
        std::process::exit(outcome.exit_code());
    }

    Ok(())
}

fn exit_with(e: &KombuchaError) -> ! {
    tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code().max(1));
}
