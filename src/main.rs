use std::path::PathBuf;

use clap::Parser;
use image::DynamicImage;

use defectlens::analyze;
use defectlens::config::InferenceConfig;
use defectlens::inference::HttpInferenceClient;
use defectlens::models::UploadedImage;
use defectlens::render::{annotate, class_counts, render_class_chart, table_rows};
use defectlens::session::SessionState;

#[derive(Parser)]
#[command(name = "defectlens")]
#[command(about = "Detect defects in label images via a remote inference service")]
struct Cli {
    /// Path to input image file (png/jpg/jpeg). Omit to launch the GUI.
    #[arg(value_name = "IMAGE")]
    image_path: Option<PathBuf>,

    /// Directory for the annotated image and chart outputs
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Override the configured model identifier
    #[arg(long, value_name = "MODEL")]
    model_id: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let mut config = InferenceConfig::load()?;
    if let Some(model_id) = args.model_id {
        config.model_id = model_id;
    }

    match args.image_path {
        Some(path) => run_headless(&config, &path, &args.out_dir, args.verbose),
        None => launch_gui(config),
    }
}

#[cfg(feature = "gui")]
fn launch_gui(config: InferenceConfig) -> anyhow::Result<()> {
    defectlens::gui::run(config)
}

#[cfg(not(feature = "gui"))]
fn launch_gui(_config: InferenceConfig) -> anyhow::Result<()> {
    anyhow::bail!("built without the gui feature; pass an image path")
}

fn run_headless(
    config: &InferenceConfig,
    path: &std::path::Path,
    out_dir: &std::path::Path,
    verbose: bool,
) -> anyhow::Result<()> {
    if verbose {
        println!("Loading image: {:?}", path);
    }
    let upload = UploadedImage::from_path(path)?;
    let decoded = upload.decode()?;
    if verbose {
        println!("Image loaded: {}x{}\n", decoded.width(), decoded.height());
    }

    let backend = HttpInferenceClient::new(config)?;
    let mut session = SessionState::new();

    if verbose {
        println!("Analyzing with model {}...\n", config.model_id);
    }
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(analyze(&mut session, &backend, &config.model_id, upload))?;

    let result = session
        .result()
        .ok_or_else(|| anyhow::anyhow!("analysis completed without a result"))?;

    // Print results
    println!("\n=== Defect Detection Results ===");
    println!("Total detections: {}", result.len());

    let rows = table_rows(result);
    if !rows.is_empty() {
        println!("\nDetected defects:");
        for row in &rows {
            println!(
                "  [{}] {} (confidence: {:.2}) bbox={} id={}",
                row.index, row.class, row.confidence, row.bounding_box, row.detection_id
            );
        }

        println!("\nOccurrences per class:");
        for (class, count) in class_counts(result) {
            println!("  {}: {}", class, count);
        }
    } else {
        println!("No defects detected.");
    }

    // Save the annotated image and the class chart
    std::fs::create_dir_all(out_dir)?;
    let annotated_path = out_dir.join("annotated.png");
    DynamicImage::ImageRgba8(annotate(&decoded, result)).save(&annotated_path)?;
    let chart_path = out_dir.join("class_chart.png");
    DynamicImage::ImageRgb8(render_class_chart(&class_counts(result))).save(&chart_path)?;

    println!("\nSaved {} and {}", annotated_path.display(), chart_path.display());

    Ok(())
}
