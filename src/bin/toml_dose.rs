use anyhow::Context;
use brix_dose::app::render::{render_report, OutputFormat};
use brix_dose::core::InputProvider;
use brix_dose::utils::{logger, validation::Validate};
use brix_dose::{DoseError, DoseSession, Locale, TomlConfig};
use clap::Parser;

#[derive(Parser)]
#[command(name = "toml-dose")]
#[command(about = "Sugar dose for a batch described in a TOML file")]
struct Args {
    /// Path to TOML batch file
    #[arg(short, long, default_value = "batch.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override output format from config
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Override report language from config
    #[arg(long, value_enum)]
    lang: Option<Locale>,

    /// Validate the file and show the batch without computing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("📁 Loading batch from: {}", args.config);

    if let Err(e) = brix_dose::utils::validation::validate_path("--config", &args.config) {
        exit_with(&e);
    }

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load batch file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    // 應用命令列覆蓋設定
    if args.format.is_some() || args.lang.is_some() {
        let output = config.output.get_or_insert_with(Default::default);
        if let Some(format) = args.format {
            output.format = Some(format);
            tracing::info!("🔧 Output format overridden to: {:?}", format);
        }
        if let Some(lang) = args.lang {
            output.lang = Some(lang);
            tracing::info!("🔧 Report language overridden to: {:?}", lang);
        }
    }

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    if args.dry_run {
        display_batch_summary(&config);
        return Ok(());
    }

    let format = config.format();
    let renderer = config.text_renderer();
    let report = DoseSession::new(config)
        .run()
        .unwrap_or_else(|e| exit_with(&e));

    let output = render_report(&report, format, renderer)
        .with_context(|| format!("rendering report for {}", args.config))?;
    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }

    Ok(())
}

fn display_batch_summary(config: &TomlConfig) {
    println!("🔍 DRY RUN - batch file is valid, nothing computed");
    if let Some(name) = config.batch_name() {
        println!("   Batch:            {}", name);
    }
    println!("   Initial mass:     {} kg", config.initial_mass_kg());
    println!("   Initial °Brix:    {}", config.initial_brix());
    println!("   Target °Brix:     {}", config.target_brix());
    println!("   Output format:    {:?}", config.format());
    println!("   Language:         {:?}", config.lang());
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
