use petstore_core::db::open_db_in_memory;
use petstore_core::{
    EditorAction, EditorMode, EditorOutcome, EditorSession, EditorStrings, Gender, LoadState,
    NewPet, PetRepository, PetService, PetUri, RepoError, SaveOutcome, SqlitePetRepository,
    ValidationError,
};

#[test]
fn new_session_saves_record_and_finishes() {
    let conn = open_db_in_memory().unwrap();
    let service = PetService::new(SqlitePetRepository::try_new(&conn).unwrap());
    let strings = EditorStrings::default();

    let mut session = EditorSession::open(&service, &strings, None);
    assert_eq!(session.mode(), EditorMode::Insert);
    assert_eq!(session.title(), "Add a Pet");

    let form = session.form_mut();
    form.name = " Rex ".to_string();
    form.breed = "Labrador".to_string();
    form.weight = "30".to_string();
    form.gender_selection = Some("Male".to_string());

    let outcome = session.save();
    let uri = match &outcome {
        SaveOutcome::Saved { uri, .. } => *uri,
        other => panic!("unexpected outcome: {other:?}"),
    };
    assert_eq!(uri.to_string(), "content://pets/1");
    assert_eq!(outcome.message(), "Pet saved");
    assert!(session.is_finished());

    let record = service.fetch_pet(uri.id()).unwrap();
    assert_eq!(record.name, "Rex");
    assert_eq!(record.breed, "Labrador");
    assert_eq!(record.gender, Gender::Male);
    assert_eq!(record.weight, 30);
}

#[test]
fn empty_name_is_rejected_before_the_store() {
    let conn = open_db_in_memory().unwrap();
    let service = PetService::new(SqlitePetRepository::try_new(&conn).unwrap());
    let strings = EditorStrings::default();

    let mut session = EditorSession::open(&service, &strings, None);
    session.form_mut().name = "   ".to_string();
    session.form_mut().weight = "3".to_string();

    match session.save() {
        SaveOutcome::Rejected { error, message } => {
            assert_eq!(error, ValidationError::EmptyName);
            assert_eq!(message, "Error with saving pet");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(!session.is_finished());
    assert_eq!(session.form().weight, "3");
    assert!(matches!(service.fetch_pet(1), Err(RepoError::NotFound(1))));
}

#[test]
fn storage_failure_keeps_session_open() {
    let conn = open_db_in_memory().unwrap();
    let service = PetService::new(SqlitePetRepository::try_new(&conn).unwrap());
    let strings = EditorStrings::default();

    let mut session = EditorSession::open(&service, &strings, None);
    session.form_mut().name = "Rex".to_string();
    conn.execute_batch("DROP TABLE pets;").unwrap();

    let outcome = session.handle(EditorAction::Save);
    assert!(!outcome.closes_editor());
    match outcome {
        EditorOutcome::Save(SaveOutcome::Failed { error, message }) => {
            assert!(matches!(error, RepoError::Db(_)));
            assert_eq!(message, "Error with saving pet");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(!session.is_finished());
    assert_eq!(session.form().name, "Rex");
}

#[test]
fn edit_session_populates_form_from_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePetRepository::try_new(&conn).unwrap();
    let id = repo
        .insert_pet(
            &NewPet::new("Luna", "Siamese")
                .with_gender(Gender::Female)
                .with_weight(4),
        )
        .unwrap();
    let service = PetService::new(repo);
    let strings = EditorStrings::default();

    let uri = PetUri::for_id(id);
    let session = EditorSession::open(&service, &strings, Some(uri));
    assert_eq!(session.mode(), EditorMode::Edit(uri));
    assert_eq!(session.title(), "Edit Pet");
    assert!(matches!(session.load_state(), LoadState::Loaded(record) if record.id == id));

    let form = session.form();
    assert_eq!(form.name, "Luna");
    assert_eq!(form.breed, "Siamese");
    assert_eq!(form.weight, "4");
    assert_eq!(form.gender_index(&strings), 2);

    let cleared = session.close();
    assert_eq!(cleared.name, "");
    assert_eq!(cleared.breed, "");
    assert_eq!(cleared.weight, "0");
    assert_eq!(cleared.gender_index(&strings), 0);
}

#[test]
fn missing_target_leaves_defaults() {
    let conn = open_db_in_memory().unwrap();
    let service = PetService::new(SqlitePetRepository::try_new(&conn).unwrap());
    let strings = EditorStrings::default();

    let session = EditorSession::open(&service, &strings, Some(PetUri::for_id(999)));
    assert_eq!(session.load_state(), &LoadState::Missing);
    assert_eq!(session.form().name, "");
    assert_eq!(session.form().weight, "0");
    assert_eq!(session.form().gender_index(&strings), 0);
}

#[test]
fn unrecognized_selection_saves_unknown_gender() {
    let conn = open_db_in_memory().unwrap();
    let service = PetService::new(SqlitePetRepository::try_new(&conn).unwrap());
    let strings = EditorStrings::default();

    let mut session = EditorSession::open(&service, &strings, None);
    session.form_mut().name = "Rex".to_string();
    session.form_mut().gender_selection = Some("male".to_string());

    let uri = match session.save() {
        SaveOutcome::Saved { uri, .. } => uri,
        other => panic!("unexpected outcome: {other:?}"),
    };
    assert_eq!(service.fetch_pet(uri.id()).unwrap().gender, Gender::Unknown);
}

#[test]
fn localized_labels_drive_gender_mapping() {
    let conn = open_db_in_memory().unwrap();
    let service = PetService::new(SqlitePetRepository::try_new(&conn).unwrap());
    let strings = EditorStrings {
        gender_unknown: "Inconnu".to_string(),
        gender_male: "Mâle".to_string(),
        gender_female: "Femelle".to_string(),
        ..EditorStrings::default()
    };

    let mut session = EditorSession::open(&service, &strings, None);
    session.form_mut().name = "Rex".to_string();
    session.form_mut().gender_selection = Some("Femelle".to_string());
    let uri = match session.save() {
        SaveOutcome::Saved { uri, .. } => uri,
        other => panic!("unexpected outcome: {other:?}"),
    };

    let reopened = EditorSession::open(&service, &strings, Some(uri));
    assert_eq!(reopened.form().gender_selection.as_deref(), Some("Femelle"));
}

#[test]
fn delete_and_navigate_actions() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePetRepository::try_new(&conn).unwrap();
    let id = repo.insert_pet(&NewPet::new("Rex", "")).unwrap();
    let service = PetService::new(repo);
    let strings = EditorStrings::default();

    let mut session = EditorSession::open(&service, &strings, Some(PetUri::for_id(id)));
    let deleted = session.handle(EditorAction::Delete);
    assert!(matches!(deleted, EditorOutcome::Delete(Ok(()))));
    assert!(!deleted.closes_editor());
    assert!(service.fetch_pet(id).is_ok());

    let up = session.handle(EditorAction::NavigateUp);
    assert!(up.closes_editor());
    assert!(session.is_finished());
}

#[test]
fn unrecognized_stored_gender_shows_first_option() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE pets (
            _id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            breed TEXT,
            gender INTEGER NOT NULL DEFAULT 0,
            weight INTEGER NOT NULL DEFAULT 0
        );
        INSERT INTO pets (name, gender, weight) VALUES ('Odd', 7, 3);",
    )
    .unwrap();
    conn.execute_batch(&format!(
        "PRAGMA user_version = {};",
        petstore_core::db::migrations::latest_version()
    ))
    .unwrap();
    let service = PetService::new(SqlitePetRepository::try_new(&conn).unwrap());
    let strings = EditorStrings::default();

    let session = EditorSession::open(&service, &strings, Some(PetUri::for_id(1)));
    assert!(matches!(session.load_state(), LoadState::Failed(_)));
    assert_eq!(session.form().gender_index(&strings), 0);
    assert_eq!(session.form().name, "");
}
