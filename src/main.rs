use clap::Parser;
use scenemark::{
    GoogleFontsCollector, OutputFormat, PipelineBuilder, PipelineError, PrefixAssetProvider,
    RenderMode,
};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Compiles a design-tool composition into static HTML and CSS.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Composition JSON (or serialized IR with --ir)
    input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "out")]
    output: PathBuf,

    /// Render the layout-debugging overlay instead of content
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// Write the root element and a separate styles.css
    #[arg(long, default_value_t = false)]
    fragment: bool,

    /// The input is an already lowered IR document
    #[arg(long, default_value_t = false)]
    ir: bool,

    /// Minimum occurrences before a style block becomes a shared class
    #[arg(long, default_value_t = 2)]
    threshold: usize,

    /// Keep every declaration inline instead of mapping to utility classes
    #[arg(long, default_value_t = false)]
    no_utilities: bool,

    /// Prefix for asset URLs (images/ and svgs/ references)
    #[arg(long)]
    asset_base: Option<String>,

    /// Link used fonts from Google Fonts
    #[arg(long, default_value_t = false)]
    google_fonts: bool,

    /// Page title
    #[arg(long, default_value = "Untitled")]
    title: String,

    /// Also write the lowered IR to ir.json
    #[arg(long, default_value_t = false)]
    dump_ir: bool,
}

fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut builder = PipelineBuilder::new()
        .with_mode(if args.debug { RenderMode::Debug } else { RenderMode::Content })
        .with_output(if args.fragment { OutputFormat::Fragment } else { OutputFormat::Document })
        .with_shared_class_threshold(args.threshold)
        .with_utility_classes(!args.no_utilities)
        .with_title(args.title.clone())
        .with_debug_ir(args.dump_ir);
    if let Some(base) = &args.asset_base {
        builder = builder.with_asset_provider(Arc::new(PrefixAssetProvider::new(base.clone())));
    }
    if args.google_fonts {
        builder = builder.with_font_collector(Arc::new(GoogleFontsCollector::new()));
    }
    let pipeline = builder.build()?;

    log::info!("Reading {}", args.input.display());
    let input = fs::read_to_string(&args.input)?;

    let output = if args.ir {
        pipeline.render_ir_json(&input)?
    } else {
        let lowered = pipeline.lower_json(&input)?;
        if args.dump_ir {
            fs::create_dir_all(&args.output)?;
            let path = args.output.join("ir.json");
            fs::write(&path, serde_json::to_string_pretty(&lowered.document)?)?;
            log::info!("Wrote IR to {}", path.display());
        }
        pipeline.render_lowered(&lowered)?
    };

    pipeline.write_output(&output, &args.output)?;
    if args.asset_base.is_none() && !output.images.is_empty() {
        log::warn!(
            "{} image fills must be supplied under {}: {}",
            output.images.len(),
            args.output.join("images").display(),
            output.images.join(", ")
        );
    }
    Ok(())
}
