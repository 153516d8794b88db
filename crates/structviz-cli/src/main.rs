use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use structviz_core::{
    Array, ArrayConfig, BinarySearchTree, Document, Element, ElementVisual, FileTransport,
    LinkedList, ListKind, RenderOpts, Structure, StructureType, VizError, build_representation,
    visualize,
};

#[derive(Parser, Debug)]
#[command(
    name = "structviz",
    about = "Build demo data structures and dump their visualization JSON",
    version
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Array of 1 to 3 dimensions, one labelled cell per offset
    Array(ArrayArgs),
    /// Singly, doubly or circular linked list
    List(ListArgs),
    /// Binary search tree built from a key sequence
    Bst(BstArgs),
    /// List the structure type tags understood by the renderer
    Types,
}

#[derive(ClapArgs, Debug)]
struct OutputArgs {
    /// Indent the JSON document
    #[arg(long, default_value_t = false)]
    pretty: bool,
    /// Write the document into this directory instead of printing it
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
    /// Node color (hex like #ff8800 or a color name)
    #[arg(long)]
    color: Option<String>,
    /// Node shape (circle, square, diamond, cross, triangle-up, ...)
    #[arg(long)]
    shape: Option<String>,
}

#[derive(ClapArgs, Debug)]
struct ArrayArgs {
    /// Per-axis extents, e.g. `--dims 4 3`
    #[arg(long, num_args = 1..=3, allow_negative_numbers = true, default_values_t = [8i64])]
    dims: Vec<i64>,
    /// Read the extents from a JSON file like {"extents":[4,3]}
    #[arg(long, value_name = "JSON", conflicts_with = "dims")]
    config: Option<PathBuf>,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum KindArg {
    Singly,
    Doubly,
    CircularSingly,
    CircularDoubly,
}

impl From<KindArg> for ListKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Singly => ListKind::Singly,
            KindArg::Doubly => ListKind::Doubly,
            KindArg::CircularSingly => ListKind::CircularSingly,
            KindArg::CircularDoubly => ListKind::CircularDoubly,
        }
    }
}

#[derive(ClapArgs, Debug)]
struct ListArgs {
    #[arg(long, value_enum, default_value_t = KindArg::Singly)]
    kind: KindArg,
    /// Number of nodes
    #[arg(long, default_value_t = 5)]
    len: usize,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(ClapArgs, Debug)]
struct BstArgs {
    /// Keys in insertion order, e.g. `--keys 50,30,70`
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
    keys: Vec<i64>,
    #[command(flatten)]
    output: OutputArgs,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let res = match cli.cmd.unwrap_or(Cmd::Types) {
        Cmd::Array(a) => cmd_array(a),
        Cmd::List(a) => cmd_list(a),
        Cmd::Bst(a) => cmd_bst(a),
        Cmd::Types => {
            for t in StructureType::ALL {
                println!("{}", t);
            }
            Ok(())
        }
    };
    if let Err(e) = res {
        eprintln!("error: {}", e);
        let code = match e {
            VizError::Io(_) | VizError::Json(_) => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}

fn node_visual(out: &OutputArgs) -> Result<ElementVisual, VizError> {
    let mut v = ElementVisual::default();
    if let Some(c) = &out.color {
        v.set_color_str(c)?;
    }
    if let Some(s) = &out.shape {
        v.set_shape_str(s)?;
    }
    Ok(v)
}

fn emit<S: Structure>(structure: &S, out: &OutputArgs) -> Result<(), VizError> {
    let opts = RenderOpts { pretty: out.pretty };
    match &out.out {
        Some(dir) => {
            let transport = FileTransport::new(dir).with_opts(opts);
            let doc = visualize(structure, &transport)?;
            tracing::debug!(nodes = doc.nodes.len(), "delivered");
            Ok(())
        }
        None => {
            let doc: Document = build_representation(structure)?;
            println!("{}", doc.to_json_string(opts)?);
            Ok(())
        }
    }
}

fn cmd_array(args: ArrayArgs) -> Result<(), VizError> {
    let config = match &args.config {
        Some(p) => serde_json::from_str::<ArrayConfig>(&std::fs::read_to_string(p)?)?,
        None => ArrayConfig::new(args.dims.clone()),
    };
    let visual = node_visual(&args.output)?;
    let arr: Array<()> = Array::from_fn(&config, |c| {
        let label = c
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(",");
        Element::default().with_label(label).with_visual(visual)
    })?;
    emit(&arr, &args.output)
}

fn cmd_list(args: ListArgs) -> Result<(), VizError> {
    let visual = node_visual(&args.output)?;
    let list: LinkedList<usize> = LinkedList::from_elements(
        args.kind.into(),
        (0..args.len).map(|i| {
            Element::new(i)
                .with_label(i.to_string())
                .with_visual(visual)
        }),
    );
    emit(&list, &args.output)
}

fn cmd_bst(args: BstArgs) -> Result<(), VizError> {
    let visual = node_visual(&args.output)?;
    let mut bst: BinarySearchTree<i64> = BinarySearchTree::new();
    for k in &args.keys {
        bst.insert(
            *k,
            Element::default()
                .with_label(k.to_string())
                .with_visual(visual),
        )?;
    }
    emit(&bst, &args.output)
}
