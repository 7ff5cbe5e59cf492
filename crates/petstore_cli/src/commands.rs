//! Subcommand implementations.

use clap::Args;
use log::debug;
use petstore_core::db::open_db;
use petstore_core::{
    init_logging, ConfigError, EditorAction, EditorConfig, EditorOutcome, EditorSession,
    LoadState, PetRepository, PetService, PetUri, SaveOutcome, SqlitePetRepository,
};
use std::error::Error;
use std::path::PathBuf;

pub type CommandResult = Result<(), Box<dyn Error>>;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "")]
    pub breed: String,

    /// Gender label as shown in the editor (e.g. Male, Female)
    #[arg(long)]
    pub gender: Option<String>,

    /// Whole, non-negative weight
    #[arg(long)]
    pub weight: String,
}

#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Record address (content://pets/<id>) or bare id
    pub target: String,
}

/// Flag overrides applied on top of the environment.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub db: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Resolves config from the environment and flags, and starts file logging
/// when a log directory is configured.
pub fn load_config(overrides: ConfigOverrides) -> Result<EditorConfig, Box<dyn Error>> {
    let config = resolve_config(EditorConfig::from_env_unchecked(), overrides)?;

    if let Some(dir) = &config.log_dir {
        init_logging(&config.log_level, dir)?;
    }
    debug!(
        "event=cli_config module=cli status=ok db_path={}",
        config.db_path.display()
    );
    Ok(config)
}

/// Layers flag overrides on `base`, then validates once.
///
/// Environment values replaced by a flag are never validated.
fn resolve_config(
    mut base: EditorConfig,
    overrides: ConfigOverrides,
) -> Result<EditorConfig, ConfigError> {
    if let Some(db) = overrides.db {
        base.db_path = db;
    }
    if let Some(dir) = overrides.log_dir {
        base.log_dir = Some(dir);
    }
    if let Some(level) = overrides.log_level {
        base.log_level = level;
    }
    base.validate()?;
    Ok(base)
}

pub fn add(config: &EditorConfig, args: AddArgs) -> CommandResult {
    let conn = open_db(config.db_path())?;
    let service = PetService::new(SqlitePetRepository::try_new(&conn)?);
    let mut session = EditorSession::open(&service, &config.strings, None);

    let form = session.form_mut();
    form.name = args.name;
    form.breed = args.breed;
    form.weight = args.weight;
    form.gender_selection = args.gender;

    match session.handle(EditorAction::Save) {
        EditorOutcome::Save(SaveOutcome::Saved { uri, message }) => {
            println!("{message}");
            println!("{uri}");
            Ok(())
        }
        EditorOutcome::Save(SaveOutcome::Rejected { error, message }) => {
            Err(format!("{message} ({error})").into())
        }
        EditorOutcome::Save(SaveOutcome::Failed { error, message }) => {
            Err(format!("{message} ({error})").into())
        }
        other => Err(format!("unexpected editor outcome: {other:?}").into()),
    }
}

pub fn show(config: &EditorConfig, args: TargetArgs) -> CommandResult {
    let uri = parse_target(&args.target)?;
    let conn = open_db(config.db_path())?;
    let service = PetService::new(SqlitePetRepository::try_new(&conn)?);
    let session = EditorSession::open(&service, &config.strings, Some(uri));

    print!("{}", render_loaded(&session, uri)?);
    Ok(())
}

/// Renders the loaded form as `key=value` lines under the screen title.
fn render_loaded<R: PetRepository>(
    session: &EditorSession<'_, R>,
    uri: PetUri,
) -> Result<String, Box<dyn Error>> {
    match session.load_state() {
        LoadState::Loaded(_) => {
            let form = session.form();
            Ok(format!(
                "{}\nuri={uri}\nname={}\nbreed={}\ngender={}\nweight={}\n",
                session.title(),
                form.name,
                form.breed,
                form.gender_selection.as_deref().unwrap_or_default(),
                form.weight,
            ))
        }
        LoadState::Missing => Err(format!("pet not found: {uri}").into()),
        LoadState::Failed(message) => Err(message.clone().into()),
        LoadState::NoTarget => Err("no target record".into()),
    }
}

pub fn delete(config: &EditorConfig, args: TargetArgs) -> CommandResult {
    let uri = parse_target(&args.target)?;
    let conn = open_db(config.db_path())?;
    let service = PetService::new(SqlitePetRepository::try_new(&conn)?);
    let mut session = EditorSession::open(&service, &config.strings, Some(uri));

    match session.handle(EditorAction::Delete) {
        EditorOutcome::Delete(result) => {
            result?;
            println!("delete is not available; {uri} was kept");
            Ok(())
        }
        other => Err(format!("unexpected editor outcome: {other:?}").into()),
    }
}

/// Accepts `content://pets/<id>` or a bare positive id.
fn parse_target(target: &str) -> Result<PetUri, Box<dyn Error>> {
    match target.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(PetUri::for_id(id)),
        Ok(id) => Err(format!("pet id must be positive, got {id}").into()),
        Err(_) => Ok(target.parse::<PetUri>()?),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        add, parse_target, render_loaded, resolve_config, show, AddArgs, ConfigOverrides,
        TargetArgs,
    };
    use petstore_core::config::{LOG_DIR_ENV, LOG_LEVEL_ENV};
    use petstore_core::db::open_db;
    use petstore_core::{
        ConfigError, EditorConfig, EditorSession, PetService, PetUri, SqlitePetRepository,
    };
    use std::path::PathBuf;

    fn config_in(dir: &tempfile::TempDir) -> EditorConfig {
        EditorConfig {
            db_path: dir.path().join("pets.db"),
            ..EditorConfig::default()
        }
    }

    fn env_with(key: &'static str, value: &'static str) -> EditorConfig {
        EditorConfig::from_lookup_unchecked(move |name| (name == key).then(|| value.to_string()))
    }

    #[test]
    fn parse_target_accepts_uri_and_bare_id() {
        assert_eq!(parse_target("3").unwrap().id(), 3);
        assert_eq!(parse_target("content://pets/12").unwrap().id(), 12);
        assert!(parse_target("0").is_err());
        assert!(parse_target("content://cats/1").is_err());
    }

    #[test]
    fn flags_replace_invalid_environment_values() {
        let config = resolve_config(
            env_with(LOG_LEVEL_ENV, "verbose"),
            ConfigOverrides {
                log_level: Some("info".to_string()),
                ..ConfigOverrides::default()
            },
        )
        .unwrap();
        assert_eq!(config.log_level, "info");

        let config = resolve_config(
            env_with(LOG_DIR_ENV, "relative/logs"),
            ConfigOverrides {
                log_dir: Some(PathBuf::from("/tmp/petstore-logs")),
                ..ConfigOverrides::default()
            },
        )
        .unwrap();
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/petstore-logs")));
    }

    #[test]
    fn invalid_environment_without_flag_is_rejected() {
        let err = resolve_config(
            env_with(LOG_DIR_ENV, "relative/logs"),
            ConfigOverrides::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::RelativeLogDir(PathBuf::from("relative/logs"))
        );
    }

    #[test]
    fn add_then_show_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        add(
            &config,
            AddArgs {
                name: "Rex".to_string(),
                breed: "Labrador".to_string(),
                gender: Some("Male".to_string()),
                weight: "30".to_string(),
            },
        )
        .unwrap();

        let conn = open_db(config.db_path()).unwrap();
        let service = PetService::new(SqlitePetRepository::try_new(&conn).unwrap());
        let uri = PetUri::for_id(1);
        let session = EditorSession::open(&service, &config.strings, Some(uri));

        let rendered = render_loaded(&session, uri).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Edit Pet",
                "uri=content://pets/1",
                "name=Rex",
                "breed=Labrador",
                "gender=Male",
                "weight=30",
            ]
        );

        let missing = EditorSession::open(&service, &config.strings, Some(PetUri::for_id(999)));
        assert!(render_loaded(&missing, PetUri::for_id(999))
            .unwrap_err()
            .to_string()
            .contains("pet not found"));
        assert!(show(
            &config,
            TargetArgs {
                target: "999".to_string()
            }
        )
        .is_err());
    }

    #[test]
    fn add_rejects_non_numeric_weight() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        let err = add(
            &config,
            AddArgs {
                name: "Rex".to_string(),
                breed: String::new(),
                gender: None,
                weight: "heavy".to_string(),
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("Error with saving pet"));
    }
}
