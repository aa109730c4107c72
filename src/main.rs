// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> .env --> tokio runtime --> Command Dispatch
//!                                                                    Env | Run | Seed | Config | Version
//! ```

use std::process::ExitCode;

use utm_tools::cli::global::GlobalOptions;
use utm_tools::cli::{self, Command};
use utm_tools::cmd::config::run_config_command;
use utm_tools::cmd::env::{EnvRequest, env_request, run_env_dry_command};
use utm_tools::cmd::run::run_run_command;
use utm_tools::cmd::seed::run_seed_command;
use utm_tools::config::loader::ConfigLoader;
use utm_tools::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use utm_tools::core::dotenv::load_env;
use utm_tools::logging::{LogConfig, LogGuard, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();
    // `utm env` reports problems and still exits 0.
    let lenient = matches!(cli.command, Some(Command::Env(_)));

    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Invalid command-line option: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let config_files = loader.format_loaded_files();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) if lenient => {
            eprintln!("Failed to load config, using defaults: {e:#}");
            Config::default()
        }
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard: Option<LogGuard> = match init_logging(&build_log_config(&config)) {
        Ok(guard) => Some(guard),
        Err(e) if lenient => {
            eprintln!("Failed to initialize logging: {e:#}");
            None
        }
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    if let EnvRequest::Load(path) = env_request(cli.command.as_ref(), &config) {
        // SAFETY: the async runtime does not exist yet. The only other thread
        // is the log file writer, which never touches the environment.
        unsafe {
            load_env(path.as_deref());
        }
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(dispatch_command(&cli, &config, &config_files))
}

fn build_log_config(config: &Config) -> LogConfig {
    let log_file = config.global.log_file.display().to_string();

    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file((!log_file.is_empty()).then_some(log_file))
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config, config_files: &[String]) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Config) => {
            run_config_command(config, config_files);
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Env(args)) => {
            if args.dry {
                run_env_dry_command(args, config);
            }
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Run(args)) => run_run_command(args, config).await,
        Some(Command::Seed(args)) => run_seed_command(args, config)
            .await
            .map(|()| ExitCode::SUCCESS),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> utm_tools::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}
