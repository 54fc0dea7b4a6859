use anyhow::{bail, Context};
use clap::{value_parser, Arg, Command};
use evo_catalog::ScenarioStore;
use evo_core::{logging, Dispatch, InteractionController, OutputFormat, ViewerConfig};
use evo_view::{html, text, Document, ViewEvent};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const BROWSE_HELP: &str = "commands:
  scenario <id>   switch scenario
  click <node>    select a node in the dependency map
  show            print the current page
  state           print the session state as JSON
  help            this text
  quit            leave";

/// One line of `browse` input
#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseCommand {
    Event(ViewEvent),
    Show,
    State,
    Help,
    Quit,
    Blank,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
enum CommandError {
    #[error("usage: {0}")]
    MissingArgument(&'static str),
    #[error("unknown command: {0} (try help)")]
    Unknown(String),
}

fn parse_command(line: &str) -> Result<BrowseCommand, CommandError> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(BrowseCommand::Blank);
    };
    let argument = words.next();
    match command {
        "scenario" | "s" => argument
            .map(|id| BrowseCommand::Event(ViewEvent::scenario(id)))
            .ok_or(CommandError::MissingArgument("scenario <id>")),
        "click" | "c" => argument
            .map(|id| BrowseCommand::Event(ViewEvent::node(id)))
            .ok_or(CommandError::MissingArgument("click <node>")),
        "show" => Ok(BrowseCommand::Show),
        "state" => Ok(BrowseCommand::State),
        "help" => Ok(BrowseCommand::Help),
        "quit" | "exit" | "q" => Ok(BrowseCommand::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn cli() -> Command {
    Command::new("evo-impact")
        .version(evo_core::VERSION)
        .about("Explore schema-evolution scenarios and their downstream consumer impact")
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .value_parser(value_parser!(PathBuf))
                .help("Scenario catalog (.json, .yaml); defaults to the built-in sample"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .help("Tracing filter, e.g. debug or evo_core=info"),
        )
        .subcommand(Command::new("list").about("List catalog scenarios"))
        .subcommand(
            Command::new("render")
                .about("Render one session state to HTML or text")
                .arg(
                    Arg::new("scenario")
                        .long("scenario")
                        .help("Scenario to select after startup"),
                )
                .arg(
                    Arg::new("select")
                        .long("select")
                        .help("Node to click after the scenario is shown"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Output format: html or text"),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Page title for HTML output"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_parser(value_parser!(PathBuf))
                        .help("Write to this file instead of stdout"),
                ),
        )
        .subcommand(Command::new("browse").about("Interactive text session on stdin/stdout"))
}

fn load_config(matches: &clap::ArgMatches) -> anyhow::Result<ViewerConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ViewerConfig::new(),
    };
    if let Some(catalog) = matches.get_one::<PathBuf>("catalog") {
        config = config.with_catalog(catalog.clone());
    }
    if let Some(filter) = matches.get_one::<String>("log") {
        config = config.with_log_filter(filter.as_str());
    }
    Ok(config)
}

fn render_document(doc: &Document, format: OutputFormat, title: &str) -> String {
    match format {
        OutputFormat::Html => html::render_page(doc, title),
        OutputFormat::Text => text::render(doc),
    }
}

/// Start a session and apply the requested scenario and node, failing on ids
/// the session would silently ignore
fn render_session(
    store: &ScenarioStore,
    scenario: Option<&str>,
    select: Option<&str>,
) -> anyhow::Result<Document> {
    let mut doc = Document::new();
    let mut controller = InteractionController::start(store, &mut doc);

    let events = scenario
        .map(ViewEvent::scenario)
        .into_iter()
        .chain(select.map(ViewEvent::node));
    for event in events {
        if let Dispatch::Ignored(reason) = controller.dispatch(&event, &mut doc) {
            bail!("{reason}");
        }
    }
    Ok(doc)
}

fn run_render(config: &ViewerConfig, args: &clap::ArgMatches) -> anyhow::Result<()> {
    let store = config.open_store().context("failed to open scenario catalog")?;
    let doc = render_session(
        &store,
        args.get_one::<String>("scenario").map(String::as_str),
        args.get_one::<String>("select").map(String::as_str),
    )?;

    let format = match args.get_one::<String>("format") {
        Some(name) => name.parse()?,
        None => config.format,
    };
    let title = args
        .get_one::<String>("title")
        .map_or(config.title.as_str(), String::as_str);
    let rendered = render_document(&doc, format, title);

    match args.get_one::<PathBuf>("output") {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout().write_all(rendered.as_bytes())?,
    }
    Ok(())
}

fn run_list(config: &ViewerConfig) -> anyhow::Result<()> {
    let store = config.open_store().context("failed to open scenario catalog")?;
    let mut out = io::stdout().lock();
    for scenario in store.all() {
        writeln!(out, "{}\t{}\t{}", scenario.id, scenario.risk_level, scenario.label)?;
    }
    Ok(())
}

fn run_browse(config: &ViewerConfig) -> anyhow::Result<()> {
    let store = config.open_store().context("failed to open scenario catalog")?;
    let mut doc = Document::new();
    let mut controller = InteractionController::start(&store, &mut doc);
    let mut out = io::stdout().lock();

    writeln!(out, "{}", text::render(&doc))?;
    writeln!(out, "{BROWSE_HELP}")?;

    for line in io::stdin().lock().lines() {
        let event = match parse_command(&line?) {
            Ok(BrowseCommand::Event(event)) => event,
            Ok(BrowseCommand::Blank) => continue,
            Ok(BrowseCommand::Show) => {
                writeln!(out, "{}", text::render(&doc))?;
                continue;
            }
            Ok(BrowseCommand::State) => {
                writeln!(out, "{}", serde_json::to_string_pretty(controller.state())?)?;
                continue;
            }
            Ok(BrowseCommand::Help) => {
                writeln!(out, "{BROWSE_HELP}")?;
                continue;
            }
            Ok(BrowseCommand::Quit) => break,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        match controller.dispatch(&event, &mut doc) {
            Dispatch::Applied => writeln!(out, "{}", text::render(&doc))?,
            Dispatch::Ignored(reason) => writeln!(out, "ignored: {reason}")?,
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    let config = load_config(&matches)?;
    logging::init(&config.log_filter);

    match matches.subcommand() {
        Some(("list", _)) => run_list(&config),
        Some(("render", args)) => run_render(&config, args),
        Some(("browse", _)) => run_browse(&config),
        _ => {
            cli().print_help()?;
            Ok(())
        }
    }
}
