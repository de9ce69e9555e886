use std::{io::Write, path::PathBuf};

use anyhow::bail;
use clap::Parser;
use grafana_dashboard_configmaps::{
    api::constants::{DASHBOARDS_DIR, OUTPUT_FILE},
    dashboards::generator::{self, Generator},
    telemetry::{self, LogFormat},
};
use tracing::info;

/// Generate ConfigMaps that the OpenShift Grafana operator imports as
/// dashboards.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Directory holding the dashboard JSON files
    #[arg(long, default_value = DASHBOARDS_DIR)]
    dashboards_dir: PathBuf,

    /// Output file, or `-` for stdout
    #[arg(short, long, default_value = OUTPUT_FILE)]
    output: String,

    /// Fail if the output file differs from what would be generated
    #[arg(long)]
    check: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    telemetry::init(args.log_format);

    let dashboards = Generator::new(&args.dashboards_dir);
    let to_stdout = args.output == "-";
    if args.check && to_stdout {
        bail!("--check compares against an output file and cannot be used with `--output -`");
    }
    // stdout carries the stream itself when writing to `-`
    let console = !to_stdout && !args.check;

    if console {
        println!(
            "Generating ConfigMaps for {} dashboards...",
            dashboards.dashboards().len()
        );
    }
    let stream = dashboards.generate(|dashboard| {
        if console {
            println!("  - Processing {}...", dashboard.title);
        } else {
            info!(dashboard = dashboard.name, "processing");
        }
    })?;

    if to_stdout {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(stream.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let output = PathBuf::from(&args.output);
    if args.check {
        generator::check(&output, &stream)?;
        info!(path = %output.display(), "ConfigMaps are up to date");
        return Ok(());
    }

    generator::write(&output, &stream)?;
    println!(
        "\n✅ Generated {} with {} ConfigMaps",
        output.display(),
        dashboards.dashboards().len()
    );
    println!("\nTo apply:");
    println!("  oc apply -f {}", output.display());
    Ok(())
}
