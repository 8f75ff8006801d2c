use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use greenscreen::{
    BrushConfig, ControlInput, EXPORT_FILE_NAME, EditorConfig, EditorSession, FrameRGBA,
    InputEvent, InteractionController,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "greenscreen", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the full-resolution composite as a PNG.
    Export(ComposeArgs),
    /// Write the preview-resolution composite as a PNG.
    Preview(ComposeArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Foreground image shot against green.
    #[arg(long)]
    fg: PathBuf,

    /// Background image.
    #[arg(long)]
    bg: PathBuf,

    /// Output PNG path.
    #[arg(long, default_value = EXPORT_FILE_NAME)]
    out: PathBuf,

    /// Horizontal position of the foreground center, percent of background width.
    #[arg(long)]
    x: Option<f64>,

    /// Vertical position of the foreground center, percent of background height.
    #[arg(long)]
    y: Option<f64>,

    /// Foreground scale in percent.
    #[arg(long)]
    scale: Option<f64>,

    /// Foreground rotation in degrees.
    #[arg(long)]
    rotate: Option<f64>,

    /// Recorded input script (JSON) replayed after the controls are applied.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Editor config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// A recorded session: an optional starting brush, then events in order.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct Script {
    brush: Option<BrushConfig>,
    events: Vec<ScriptStep>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum ScriptStep {
    Host(HostStep),
    Input(InputEvent),
}

/// Steps a UI would perform through its own widgets rather than the canvas.
#[derive(Debug, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum HostStep {
    SetBrush { brush: BrushConfig },
    Control { control: ControlInput },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Export(args) => cmd_export(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn cmd_export(args: ComposeArgs) -> anyhow::Result<()> {
    let session = prepare_session(&args)?;
    let png = session.export_png().context("render export")?;
    write_output(&args.out, &png)
}

fn cmd_preview(args: ComposeArgs) -> anyhow::Result<()> {
    let session = prepare_session(&args)?;
    let frame: FrameRGBA = session
        .render_preview()
        .context("render preview")?
        .context("preview needs a background image")?;
    let png = frame.to_png().context("encode preview")?;
    write_output(&args.out, &png)
}

fn prepare_session(args: &ComposeArgs) -> anyhow::Result<EditorSession> {
    let config = match &args.config {
        Some(path) => EditorConfig::from_json_path(path)?,
        None => EditorConfig::default(),
    }
    .with_env_overrides();
    config.validate()?;

    let mut session = EditorSession::new(config);
    session
        .load_foreground(&read_bytes(&args.fg)?)
        .with_context(|| format!("load foreground '{}'", args.fg.display()))?;
    session
        .load_background(&read_bytes(&args.bg)?)
        .with_context(|| format!("load background '{}'", args.bg.display()))?;

    let controls = [
        args.x.map(ControlInput::PosXPct),
        args.y.map(ControlInput::PosYPct),
        args.scale.map(ControlInput::ScalePct),
        args.rotate.map(ControlInput::RotationDeg),
    ];
    for control in controls.into_iter().flatten() {
        if !session.apply_control(control) {
            anyhow::bail!("invalid control value {control:?}");
        }
    }

    if let Some(path) = &args.script {
        let script = read_script(path)?;
        replay(&mut session, script)?;
    }
    Ok(session)
}

fn read_bytes(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read '{}'", path.display()))
}

fn read_script(path: &Path) -> anyhow::Result<Script> {
    let f = File::open(path).with_context(|| format!("open script '{}'", path.display()))?;
    let script: Script =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse script JSON")?;
    Ok(script)
}

fn replay(session: &mut EditorSession, script: Script) -> anyhow::Result<()> {
    if let Some(brush) = script.brush {
        session.set_brush(brush).context("script brush")?;
    }

    let mut controller = InteractionController::new(session.config());
    let mut redraws = 0usize;
    for (i, step) in script.events.into_iter().enumerate() {
        match step {
            ScriptStep::Host(HostStep::SetBrush { brush }) => {
                if let Err(err) = session.set_brush(brush) {
                    tracing::warn!(step = i, %err, "skipping invalid brush");
                }
            }
            ScriptStep::Host(HostStep::Control { control }) => {
                if !session.apply_control(control) {
                    tracing::warn!(step = i, ?control, "skipping invalid control");
                }
            }
            ScriptStep::Input(event) => {
                if session
                    .apply_input(&mut controller, &event)
                    .with_context(|| format!("script step {i}"))?
                    .is_some()
                {
                    redraws += 1;
                }
            }
        }
    }
    tracing::debug!(redraws, "script replayed");
    Ok(())
}

fn write_output(out: &Path, png: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, png).with_context(|| format!("write png '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
