//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{audit, render_output, PatternService, ProblemInput};
use crate::cli::args::{Cli, Commands, ConfigCommands, SynthesisArgs};
use crate::cli::output;
use crate::cli::CliResult;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::{DerivationKind, TrieDisplay};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let project_dir = cli
        .project_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let settings = Settings::load(Some(&project_dir))?;
    debug!("settings: {:?}", settings);

    match &cli.command {
        Some(Commands::Generate {
            input,
            output,
            stdout,
            synthesis,
        }) => _generate(settings, input.as_deref(), output.as_deref(), *stdout, synthesis),
        Some(Commands::Tree { input }) => _tree(settings, input.as_deref()),
        Some(Commands::Audit { input, synthesis }) => _audit(settings, input.as_deref(), synthesis),
        Some(Commands::Config { command }) => _config(&settings, &project_dir, command),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => _generate(settings, None, None, false, &SynthesisArgs::default()),
    }
}

fn service_for(mut settings: Settings, synthesis: &SynthesisArgs) -> PatternService {
    synthesis.apply(&mut settings);
    PatternService::new(settings)
}

#[instrument(skip(settings))]
fn _generate(
    settings: Settings,
    input: Option<&Path>,
    output_path: Option<&Path>,
    stdout: bool,
    synthesis: &SynthesisArgs,
) -> CliResult<()> {
    let service = service_for(settings, synthesis);
    let input_path = input.unwrap_or(&service.settings().input).to_path_buf();

    if stdout {
        let problem = ProblemInput::load(&input_path)?;
        let derivation = service.derive(&problem);
        print!("{}", render_output(&derivation));
        return Ok(());
    }

    let output_path = output_path
        .unwrap_or(&service.settings().output)
        .to_path_buf();
    let derivation = service.generate(&input_path, &output_path)?;
    if let DerivationKind::Fallback { conflict } = &derivation.kind {
        output::warning(&format!(
            "rejected word '{}' collides with the accepted words, emitted exact alternation",
            conflict
        ));
    }
    output::action("Written", &output_path.display());
    Ok(())
}

#[instrument(skip(settings))]
fn _tree(settings: Settings, input: Option<&Path>) -> CliResult<()> {
    let service = PatternService::new(settings);
    let input_path = input.unwrap_or(&service.settings().input).to_path_buf();
    let problem = ProblemInput::load(&input_path)?;
    let trie = service.tree(&problem);
    output::header(&format!(
        "{} accepted words, {} nodes, depth {}",
        problem.accepted.len(),
        trie.node_count(),
        trie.depth()
    ));
    output::info(&trie.to_display_tree());
    Ok(())
}

#[instrument(skip(settings))]
fn _audit(settings: Settings, input: Option<&Path>, synthesis: &SynthesisArgs) -> CliResult<()> {
    let service = service_for(settings, synthesis);
    let input_path = input.unwrap_or(&service.settings().input).to_path_buf();
    let problem = ProblemInput::load(&input_path)?;
    let report = audit(&problem, service.derive(&problem))?;

    output::header(&report.derivation.pattern);
    let verdict = match &report.derivation.kind {
        DerivationKind::MatchNothing => "no accepted words".to_string(),
        DerivationKind::MatchEmpty => "only the empty word is accepted".to_string(),
        DerivationKind::Generalized => "generalized, no conflict".to_string(),
        DerivationKind::Fallback { conflict } => format!("fallback, conflict on '{}'", conflict),
    };
    output::detail(&verdict);

    if report.is_sound() {
        output::success("pattern rejects every rejected word and matches every accepted word");
        return Ok(());
    }
    for word in &report.rejected_matched {
        output::failure(&format!("matches rejected word '{}'", word));
    }
    for word in &report.accepted_missed {
        output::failure(&format!("misses accepted word '{}'", word));
    }
    Ok(())
}

fn _config(settings: &Settings, project_dir: &Path, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::warning("no global config directory on this platform"),
            }
            output::action("local", &local_config_path(project_dir).display());
        }
    }
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
