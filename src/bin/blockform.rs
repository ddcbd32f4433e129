use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use blockform::{
    ActionOutcome, Builtins, Editor, EditorCtx, ExprId, FunctionIndex, KeyPress, LayoutEngine,
    LayoutProps, MemoryClipboard, MemoryWorkspace, MonoMeasure, ParleyMeasure, Rect, Size,
    TextMeasure, Theme, Workspace,
};

#[derive(Parser, Debug)]
#[command(name = "blockform", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out one function and print its geometry as JSON.
    Layout(LayoutArgs),
    /// Replay a key sequence through the editor and print the resulting tree.
    Edit(EditArgs),
    /// Print the toy-box templates per category.
    Toybox,
}

#[derive(Parser, Debug)]
struct ViewArgs {
    /// Input workspace JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Function to open.
    #[arg(long)]
    name: String,

    /// Theme JSON; the built-in theme when omitted.
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Font file used to measure text; fixed-advance measurement when omitted.
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Collapse comments to a marker.
    #[arg(long)]
    fold_comments: bool,
}

#[derive(Parser, Debug)]
struct EditArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Comma-separated keys such as `a,Space,Enter`. `text:<value>` types into the open inline
    /// edit and `comment:<value>` answers a comment prompt.
    #[arg(long, value_delimiter = ',')]
    keys: Vec<String>,

    /// Where to write the edited workspace.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(serde::Serialize)]
struct LayoutReport {
    size: Size,
    areas: Vec<AreaReport>,
}

#[derive(serde::Serialize)]
struct AreaReport {
    id: ExprId,
    path: Vec<usize>,
    inline: bool,
    rect: Rect,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Edit(args) => cmd_edit(args),
        Command::Toybox => cmd_toybox(),
    }
}

fn setup_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,blockform={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn make_engine(view: &ViewArgs) -> anyhow::Result<LayoutEngine> {
    let theme = match &view.theme {
        Some(path) => Theme::from_path(path)?,
        None => Theme::default(),
    };
    let measure: Box<dyn TextMeasure> = match &view.font {
        Some(path) => Box::new(ParleyMeasure::from_path(path)?),
        None => Box::new(MonoMeasure::default()),
    };
    Ok(LayoutEngine::new(theme, measure))
}

fn read_workspace(path: &Path) -> anyhow::Result<MemoryWorkspace> {
    MemoryWorkspace::from_path(path)
        .with_context(|| format!("load workspace '{}'", path.display()))
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let ws = read_workspace(&args.view.in_path)?;
    let tree = ws.get(&args.view.name)?;
    let mut engine = make_engine(&args.view)?;

    let props = LayoutProps {
        fold_comments: args.fold_comments,
        ..LayoutProps::default()
    };
    let result = engine.layout(&tree, &props);
    let areas = result
        .area_map()
        .iter()
        .map(|a| {
            let path = tree
                .path_to(a.id)
                .with_context(|| format!("area {} has no node in the tree (bug)", a.id))?;
            Ok(AreaReport {
                id: a.id,
                path,
                inline: a.inline,
                rect: a.rect,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let report = LayoutReport {
        size: result.padded_size(),
        areas,
    };
    let json = serde_json::to_string_pretty(&report).context("serialize layout report")?;
    println!("{json}");
    Ok(())
}

fn cmd_edit(args: EditArgs) -> anyhow::Result<()> {
    let mut ws = read_workspace(&args.view.in_path)?;
    let mut clipboard = MemoryClipboard::new();
    let builtins = Builtins::default();
    let index = FunctionIndex::from_sources(&ws, &builtins);
    let engine = make_engine(&args.view)?;
    let mut editor = Editor::open(args.view.name.as_str(), &ws, engine)?;

    {
        let mut ctx = EditorCtx {
            workspace: &mut ws,
            clipboard: &mut clipboard,
            builtins: &builtins,
            search: &index,
        };
        editor.set_focused(&mut ctx, true)?;
        replay(&mut editor, &mut ctx, &args.keys)?;
    }

    let tree = editor.tree(&ws)?;
    println!("{tree}");
    let selected = tree
        .path_to(editor.selection())
        .context("selection is not in the tree (bug)")?;
    eprintln!("selection at {selected:?}");

    if let Some(out) = &args.out {
        ws.save(out)?;
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}

fn replay(editor: &mut Editor, ctx: &mut EditorCtx<'_>, tokens: &[String]) -> anyhow::Result<()> {
    let mut prompt: Option<ExprId> = None;
    for token in tokens {
        if let Some(text) = token.strip_prefix("text:") {
            if !editor.edit_text(ctx, text)? && editor.inline_edit().is_none() {
                anyhow::bail!("'{token}': no inline edit is open");
            }
            continue;
        }
        if let Some(comment) = token.strip_prefix("comment:") {
            let target = prompt
                .take()
                .with_context(|| format!("'{token}': no comment prompt is open"))?;
            editor.set_comment(ctx, target, Some(comment))?;
            continue;
        }

        let press = KeyPress::parse(token).with_context(|| format!("parse key '{token}'"))?;
        match editor.handle_key(ctx, &press)? {
            ActionOutcome::Done => tracing::info!(key = %token, "handled"),
            ActionOutcome::Ignored => tracing::info!(key = %token, "ignored"),
            ActionOutcome::PromptComment { target, current } => {
                tracing::info!(key = %token, ?current, "comment prompt");
                prompt = Some(target);
            }
        }
    }
    Ok(())
}

fn cmd_toybox() -> anyhow::Result<()> {
    let builtins = Builtins::default();
    for (category, templates) in blockform::toy_box(&builtins) {
        println!("{category:?}:");
        for template in templates {
            match template.comment() {
                Some(comment) => println!("  {template}  # {comment}"),
                None => println!("  {template}"),
            }
        }
    }
    Ok(())
}
