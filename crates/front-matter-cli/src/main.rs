use anyhow::{Context, Result};
use front_matter_config::Config;
use front_matter_engine::{
    BlockKind, BlockNode, BlockParser, FrontMatterOptions, RopeDocument, front_matter_plugin, io,
};
use std::{env, path::PathBuf, process};
use xi_rope::Rope;

/// What one run of the tool found in a document.
struct Report {
    front_matter: Option<String>,
    blocks: Vec<BlockNode>,
}

fn extract(rope: &Rope, options: FrontMatterOptions) -> Result<Report> {
    let doc = RopeDocument::new(rope);
    let mut front_matter = None;

    let blocks = {
        let mut parser = BlockParser::new();
        front_matter_plugin(&mut parser, options, |text: &str| {
            front_matter = Some(text.to_string());
        })?;
        parser.parse(&doc)
    };

    Ok(Report {
        front_matter,
        blocks,
    })
}

fn kind_label(kind: &BlockKind) -> &'static str {
    match kind {
        BlockKind::FrontMatter => "front matter",
        BlockKind::FencedCode { .. } => "code fence",
        BlockKind::Table => "table",
        BlockKind::Paragraph => "paragraph",
    }
}

fn render(report: &Report) -> String {
    let mut out = String::new();
    match &report.front_matter {
        Some(text) => {
            out.push_str("Front matter:\n");
            for line in text.lines() {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
        }
        None => out.push_str("No front matter\n"),
    }

    out.push_str("Blocks:\n");
    for block in &report.blocks {
        let hidden = if block.hidden { " (hidden)" } else { "" };
        out.push_str(&format!(
            "  lines {}-{}: {}{}\n",
            block.map.start + 1,
            block.map.end,
            kind_label(&block.kind),
            hidden
        ));
    }
    out
}

/// Paths named on the command line.
#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    document: Option<PathBuf>,
    config: PathBuf,
}

/// Parses the arguments after the program name: `[document.md [config.toml]]`.
fn parse_args(args: &[String]) -> Option<Invocation> {
    match args {
        [] => Some(Invocation {
            document: None,
            config: Config::config_path(),
        }),
        [document] => Some(Invocation {
            document: Some(PathBuf::from(document)),
            config: Config::config_path(),
        }),
        [document, config] => Some(Invocation {
            document: Some(PathBuf::from(document)),
            config: PathBuf::from(config),
        }),
        _ => None,
    }
}

fn run(invocation: &Invocation) -> Result<String> {
    let config_path = &invocation.config;
    let config = Config::load_from_path(config_path)
        .with_context(|| format!("Failed to load config file {}", config_path.display()))?
        .unwrap_or_default();

    let Some(document_path) = invocation
        .document
        .clone()
        .or_else(|| config.default_document.clone())
    else {
        anyhow::bail!(
            "No document provided and no default_document configured in {}",
            config_path.display()
        );
    };

    let options = FrontMatterOptions::new(
        config.front_matter.marker,
        config.front_matter.min_markers,
    )
    .with_context(|| format!("Invalid [front_matter] settings in {}", config_path.display()))?;

    log::debug!("Parsing {} with {options:?}", document_path.display());
    let rope = io::read_document(&document_path)
        .with_context(|| format!("Failed to read {}", document_path.display()))?;

    let report = extract(&rope, options)?;
    Ok(render(&report))
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("front-matter-cli", String::as_str);
    let Some(invocation) = parse_args(args.get(1..).unwrap_or_default()) else {
        eprintln!("Usage: {program} [document.md [config.toml]]");
        process::exit(1);
    };

    print!("{}", run(&invocation)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn renders_front_matter_and_outline() {
        let rope = Rope::from("---\ntitle: x\ntags: []\n---\nbody\n");
        let report = extract(&rope, FrontMatterOptions::default()).unwrap();

        assert_eq!(
            render(&report),
            "Front matter:\n  title: x\n  tags: []\nBlocks:\n  lines 1-4: front matter (hidden)\n  lines 5-5: paragraph\n"
        );
    }

    #[test]
    fn renders_missing_front_matter() {
        let rope = Rope::from("body\n");
        let report = extract(&rope, FrontMatterOptions::default()).unwrap();

        assert_eq!(
            render(&report),
            "No front matter\nBlocks:\n  lines 1-1: paragraph\n"
        );
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn document_only_uses_default_config() {
        assert_eq!(
            parse_args(&args(&["notes.md"])),
            Some(Invocation {
                document: Some(PathBuf::from("notes.md")),
                config: Config::config_path(),
            })
        );
    }

    #[test]
    fn document_and_config() {
        assert_eq!(
            parse_args(&args(&["notes.md", "custom.toml"])),
            Some(Invocation {
                document: Some(PathBuf::from("notes.md")),
                config: PathBuf::from("custom.toml"),
            })
        );
    }

    #[test]
    fn no_arguments_defers_to_config() {
        assert_eq!(
            parse_args(&[]),
            Some(Invocation {
                document: None,
                config: Config::config_path(),
            })
        );
    }

    #[test]
    fn too_many_arguments_is_a_usage_error() {
        assert_eq!(parse_args(&args(&["a.md", "c.toml", "extra"])), None);
    }

    #[test]
    fn run_applies_settings_from_given_config() {
        let temp_dir = TempDir::new().unwrap();
        let document = temp_dir.path().join("notes.md");
        let config = temp_dir.path().join("config.toml");
        std::fs::write(&document, "+++\ntitle = \"x\"\n+++\nbody\n").unwrap();
        std::fs::write(&config, "[front_matter]\nmarker = \"+\"\n").unwrap();

        let output = run(&Invocation {
            document: Some(document),
            config,
        })
        .unwrap();

        assert_eq!(
            output,
            "Front matter:\n  title = \"x\"\nBlocks:\n  lines 1-3: front matter (hidden)\n  lines 4-4: paragraph\n"
        );
    }

    #[test]
    fn run_falls_back_to_default_document() {
        let temp_dir = TempDir::new().unwrap();
        let document = temp_dir.path().join("index.md");
        let config = temp_dir.path().join("config.toml");
        std::fs::write(&document, "body\n").unwrap();
        std::fs::write(
            &config,
            format!("default_document = {:?}\n", document.display().to_string()),
        )
        .unwrap();

        let output = run(&Invocation {
            document: None,
            config,
        })
        .unwrap();

        assert_eq!(output, "No front matter\nBlocks:\n  lines 1-1: paragraph\n");
    }

    #[test]
    fn run_without_any_document_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("missing.toml");

        let err = run(&Invocation {
            document: None,
            config,
        })
        .unwrap_err();

        assert!(err.to_string().contains("No document provided"));
    }
}
