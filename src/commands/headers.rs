use crate::*;
use std::path::{Path, PathBuf};

pub fn handle_header_commands(cli: &Cli) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Apply(args) => {
            run_apply(cli.json, args)?;
            Ok(true)
        }
        Commands::HeaderFileHelp => {
            print_header_file_help();
            Ok(true)
        }
        _ => Ok(false),
    }
}

fn run_apply(json: bool, args: &ApplyArgs) -> anyhow::Result<()> {
    let config = load_config()?;
    let opts = resolve_options(args, &config);
    let header_file = args.header_file.as_deref().map(PathBuf::from);

    let spec = load_spec(args, header_file.as_deref())?;
    let spec = apply_whitespace_policy(spec, opts.allow_whitespace)?;

    let exclude = default_exclusions(header_file.as_deref());
    let targets = collect_targets(
        Path::new(&args.directory),
        opts.recursive,
        &opts.extension,
        &exclude,
    )?;
    tracing::debug!(count = targets.len(), ?opts, "collected targets");

    for t in &targets {
        notice(json, t.display());
    }
    if !confirm(
        "\nfileheaders will edit the above files, is this okay?",
        args.yes,
        json,
    )? {
        return Ok(());
    }

    preview(json, &spec);
    if !confirm("Is this correct?", args.yes, json)? {
        return Ok(());
    }

    let reports = apply_to_files(
        &targets,
        &spec,
        opts.tags_enabled,
        opts.detection_enabled,
    )?;
    let summary = ApplySummary::from_reports(&reports);
    audit(
        "apply",
        serde_json::json!({
            "directory": args.directory,
            "modified": summary.modified,
            "unchanged": summary.unchanged,
            "skipped": summary.skipped,
        }),
    );

    print_out(json, summary.skipped == 0, &reports, |r| match &r.outcome {
        FileOutcome::Modified { insertion } => {
            format!("Added {} to {} ...", title_case(insertion.label()), r.path)
        }
        FileOutcome::Unchanged => format!("Already present in {} ...", r.path),
        FileOutcome::Skipped { reason } => reason.clone(),
    })?;
    if !json {
        println!(
            "{} modified, {} unchanged, {} skipped",
            summary.modified, summary.unchanged, summary.skipped
        );
    }
    Ok(())
}

fn load_spec(args: &ApplyArgs, header_file: Option<&Path>) -> anyhow::Result<HeaderFooterSpec> {
    let source = match header_file {
        Some(path) => Some(read_spec_source(path)?),
        None => None,
    };
    Ok(resolve_sources(&args.top, &args.bottom, source.as_deref())?)
}

fn read_spec_source(path: &Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Ok(raw),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(SpecError::SourceNotFound {
            path: path.to_path_buf(),
        }
        .into()),
        Err(e) => Err(anyhow::anyhow!(
            "failed to read header file {}: {}",
            path.display(),
            e
        )),
    }
}

fn preview(json: bool, spec: &HeaderFooterSpec) {
    let (header, footer) = match spec.file_state() {
        FileState::HasHeaderAndFooter => (spec.header_text(), spec.footer_text()),
        FileState::HasHeader => (spec.header_text(), "No footer given."),
        FileState::HasFooter => ("No header given.", spec.footer_text()),
        FileState::NoHeaderFooter => ("No header given.", "No footer given."),
    };
    notice(json, format!("HEADER:\n{}", header));
    notice(json, format!("FOOTER:\n{}", footer));
}

fn title_case(label: &str) -> String {
    label
        .split('/')
        .map(|w| {
            let mut c = w.chars();
            match c.next() {
                Some(first) => first.to_uppercase().chain(c).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join("/")
}

fn print_header_file_help() {
    println!(
        "\
To make a header/footer file you must include at least one header or footer block,
and no more than one each. You can make a header block by typing, on its own line
\"{HEADER_START_TAG}\" and on its own line as well \"{HEADER_END_TAG}\", any text in
between these two lines will be your header. For footer do the same but with
\"{FOOTER_START_TAG}\" and \"{FOOTER_END_TAG}\".

You can make the headers change from file to file by adding tags, tags will insert
things like file name or folder name when you run the tool.

Tags:
\t{FILE_NAME_TAG}: Inserts the name of the current file.
\t{FOLDER_NAME_TAG}: Inserts the name of the current file's folder."
    );
}
