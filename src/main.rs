use anyhow::Context;
use clap::Parser;
use kadane_bench::config::LogFormat;
use kadane_bench::utils::logger;
use kadane_bench::{BenchEngine, BenchError, BenchSettings, CliConfig, ReaderInput};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        let exit_code = match e.downcast_ref::<BenchError>() {
            Some(bench_error) => {
                tracing::error!(
                    "❌ Benchmark failed: {:#} (Category: {:?}, Severity: {:?})",
                    e,
                    bench_error.category(),
                    bench_error.severity()
                );
                eprintln!("❌ {:#}", e);
                eprintln!("💡 {}", bench_error.recovery_suggestion());
                bench_error.exit_code()
            }
            None => {
                tracing::error!("❌ Benchmark failed: {:#}", e);
                eprintln!("❌ {:#}", e);
                1
            }
        };
        std::process::exit(exit_code);
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let settings: BenchSettings = cli.resolve().context("Invalid configuration")?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let report_format = settings.report;
    let engine = BenchEngine::new(settings);

    // 輸入來源: 檔案或標準輸入
    let report = match engine.config().input_path() {
        Some(path) => {
            let mut source = ReaderInput::open(path)
                .with_context(|| format!("Failed to open input file '{}'", path.display()))?;
            engine.run(&mut source)?
        }
        None => engine.run(&mut ReaderInput::stdin())?,
    };

    if let Some(rendered) = report.render(report_format)? {
        println!("{}", rendered);
    }

    Ok(())
}
