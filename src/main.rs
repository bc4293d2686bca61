use brix_dose::app::render::render_report;
use brix_dose::core::InputProvider;
use brix_dose::utils::{logger, validation::Validate};
use brix_dose::{CliConfig, DoseError, DoseSession, Form, OutputFormat};
use clap::Parser;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init(config.verbose, config.log_json);

    tracing::info!("Starting brix-dose");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證參數
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let result = if config.interactive {
        let stdin = std::io::stdin();
        let mut form = Form::with_defaults(stdin.lock(), std::io::stdout(), config.batch_input());
        form.collect()
            .and_then(|input| DoseSession::new(input).run())
    } else {
        DoseSession::new(config.clone()).run()
    };

    let report = result.unwrap_or_else(|e| exit_with(&e));
    let output = render_report(&report, config.format, config.text_renderer())
        .unwrap_or_else(|e| exit_with(&e));

    let mut stdout = std::io::stdout().lock();
    if config.interactive {
        writeln!(stdout)?;
    }
    write!(stdout, "{}", output)?;
    if config.format == OutputFormat::Json {
        writeln!(stdout)?;
    }
    stdout.flush()?;

    Ok(())
}

fn exit_with(e: &DoseError) -> ! {
    tracing::error!(
        "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
