//! Anchor Layout CLI
//!
//! Places a child item inside a fixed-size container with the solver
//! engine and prints the constraints it created and the resolved frames.
//!
//! Usage:
//!   anchor-layout [OPTIONS]
//!
//! Options:
//!   -a, --alignment <ALIGNMENT>  Placement of the child [default: center]
//!   -i, --inset <INSET>          Inset on every side [default: 10]
//!   -c, --config <FILE>          Layout configuration (TOML format)
//!   --rtl                        Resolve leading/trailing right-to-left
//!   --margins                    Align within the container's margins
//!   -h, --help                   Print help
//!
//! Set `RUST_LOG=anchor_layout=trace` to see every constraint as it is
//! created.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use anchor_layout::{
    Alignment, ConstraintId, EdgeInsets, Frame, GroupOptions, Item, Layout, LayoutConfig, LayoutDirection,
    LayoutError, LayoutItem, Priority, Relation, Size, SolverEngine,
};

#[derive(Parser)]
#[command(name = "anchor-layout")]
#[command(about = "Place an item in a container with anchor constraints")]
struct Cli {
    /// Placement of the child inside the container
    #[arg(short, long, value_enum, default_value_t = Placement::Center)]
    alignment: Placement,

    /// Inset applied on every side
    #[arg(short, long, default_value_t = 10.0)]
    inset: f64,

    /// Preferred child size (weak; yields to the alignment)
    #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"], default_values_t = [80.0, 80.0])]
    size: Vec<f64>,

    /// Container size
    #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"], default_values_t = [200.0, 200.0])]
    container: Vec<f64>,

    /// Layout configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Resolve leading and trailing right-to-left
    #[arg(long)]
    rtl: bool,

    /// Align within the container's layout margins
    #[arg(long)]
    margins: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Placement {
    Fill,
    Center,
    TopLeading,
    Top,
    TopTrailing,
    Leading,
    Trailing,
    BottomLeading,
    Bottom,
    BottomTrailing,
}

impl From<Placement> for Alignment {
    fn from(placement: Placement) -> Self {
        match placement {
            Placement::Fill => Alignment::FILL,
            Placement::Center => Alignment::CENTER,
            Placement::TopLeading => Alignment::TOP_LEADING,
            Placement::Top => Alignment::TOP,
            Placement::TopTrailing => Alignment::TOP_TRAILING,
            Placement::Leading => Alignment::LEADING,
            Placement::Trailing => Alignment::TRAILING,
            Placement::BottomLeading => Alignment::BOTTOM_LEADING,
            Placement::Bottom => Alignment::BOTTOM,
            Placement::BottomTrailing => Alignment::BOTTOM_TRAILING,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match LayoutConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => LayoutConfig::default(),
    };
    if cli.rtl {
        config = config.with_direction(LayoutDirection::RightToLeft);
    }

    let container = Item::root("container");
    let view = Item::child("view", &container);

    let mut engine = SolverEngine::new(config);
    let bounds = Frame::new(0.0, 0.0, cli.container[0], cli.container[1]);
    if let Err(e) = engine.set_frame(container.id(), bounds) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let layout = Layout::new(engine);
    let result = place(&layout, &view, &cli);
    match result {
        Ok(ids) => {
            for constraint in layout.descriptors(&ids) {
                println!("{}", constraint);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    println!();
    let engine = layout.engine();
    for item in [&container, &view] {
        if let Some(frame) = engine.frame(item.id()) {
            println!(
                "{}: x={} y={} width={} height={}",
                item.id(),
                frame.x,
                frame.y,
                frame.width,
                frame.height
            );
        }
    }
}

fn place(
    layout: &Layout<SolverEngine>,
    view: &Item,
    cli: &Cli,
) -> Result<Vec<ConstraintId>, LayoutError> {
    let anchors = layout.anchors(view);

    let mut ids = layout.group_with(GroupOptions::new().priority(Priority::new(1.0)), || {
        anchors
            .size()
            .set(Size::new(cli.size[0], cli.size[1]), Relation::Equal);
    })?;

    let mut placed = Ok(Vec::new());
    ids.extend(layout.group(|| {
        let edges = anchors.edges();
        let insets = EdgeInsets::uniform(cli.inset);
        let alignment = Alignment::from(cli.alignment);
        placed = if cli.margins {
            edges.align_in_superview_margins(insets, alignment)
        } else {
            edges.align_in_superview(insets, alignment)
        };
    })?);
    placed?;

    Ok(ids)
}
