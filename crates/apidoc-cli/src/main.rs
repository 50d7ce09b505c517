use std::ffi::OsString;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use apidoc_config::ApiDocConfig;
use apidoc_model::SymbolTree;
use clap::Parser;

/// Javadoc doclet options spelled with a single dash.
const DOCLET_LONG_OPTIONS: &[&str] = &[
    "-output",
    "-root-dir",
    "-skip-class-regex",
    "-doctitle",
    "-windowtitle",
];

#[derive(Parser, Debug)]
#[command(
    name = "apidoc",
    version,
    about = "Write a canonical, diffable description of a Java API"
)]
struct Cli {
    /// Symbol tree (JSON) produced by the source front-end
    symbols: PathBuf,
    /// Output file; the location map is written to `<OUTPUT>.map`
    #[arg(long)]
    output: Option<PathBuf>,
    /// Prefix stripped from source paths in the location map
    #[arg(long)]
    root_dir: Option<PathBuf>,
    /// Skip types whose qualified name matches this regex (repeatable)
    #[arg(long, value_name = "REGEX")]
    skip_class_regex: Vec<String>,
    /// Accepted for doclet compatibility; ignored
    #[arg(long)]
    doctitle: Option<String>,
    /// Accepted for doclet compatibility; ignored
    #[arg(long)]
    windowtitle: Option<String>,
    /// Accepted for doclet compatibility; ignored
    #[arg(short = 'd', value_name = "DIR")]
    directory: Option<PathBuf>,
    /// TOML config file; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,
    /// Render every name fully qualified, without an import header
    #[arg(long)]
    no_imports: bool,
    /// Print annotations whose type is marked `@Documented` instead of the allow-list
    #[arg(long)]
    documented_annotations: bool,
}

impl Cli {
    /// Overlays explicitly passed flags onto `config`.
    fn apply(&self, config: &mut ApiDocConfig) {
        if let Some(output) = &self.output {
            config.output = Some(output.clone());
        }
        if let Some(root_dir) = &self.root_dir {
            config.root_dir = Some(root_dir.clone());
        }
        config
            .skip_class_regex
            .extend(self.skip_class_regex.iter().cloned());
        if let Some(title) = &self.doctitle {
            config.doc_title = Some(title.clone());
        }
        if let Some(title) = &self.windowtitle {
            config.window_title = Some(title.clone());
        }
        if let Some(directory) = &self.directory {
            config.directory = Some(directory.clone());
        }
        if self.no_imports {
            config.imports = false;
        }
        if self.documented_annotations {
            config.annotations.policy = apidoc_config::AnnotationPolicyKind::Documented;
        }
    }
}

/// Rewrites `-output x` style doclet options to their `--output` form.
fn doclet_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some(flag) if DOCLET_LONG_OPTIONS.contains(&flag) => format!("-{flag}").into(),
            _ => arg,
        })
        .collect()
}

fn main() {
    let cli = Cli::parse_from(doclet_args(std::env::args_os()));
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            2
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    let mut config = match &cli.config {
        Some(path) => ApiDocConfig::load_from_path(path)?,
        None => ApiDocConfig::default(),
    };
    cli.apply(&mut config);
    apidoc_config::init_logging(&config.logging);

    let run = config.resolve()?;
    let tree = read_symbols(&cli.symbols)?;

    apidoc_canon::write_api(&tree, &run.options, &run.output)?;
    Ok(0)
}

fn read_symbols(path: &Path) -> Result<SymbolTree> {
    let file = File::open(path)
        .with_context(|| format!("failed to open symbol tree {}", path.display()))?;
    let tree = SymbolTree::from_json_reader(BufReader::new(file))
        .with_context(|| format!("failed to load symbol tree {}", path.display()))?;
    tracing::debug!(
        target: "apidoc.cli",
        path = %path.display(),
        types = tree.types().count(),
        "loaded symbol tree"
    );
    Ok(tree)
}
