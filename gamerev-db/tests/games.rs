use gamerev_catalog::{GameUpdate, NewReview};
use gamerev_db::*;
use rusqlite::Connection;

fn hasher() -> Hasher {
    Hasher::new(HashConfig {
        memory_kib: 8,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap()
}

fn sample(conn: &Connection) -> i64 {
    add_new_game(conn, "Chrono Trigger", "Time travel", "A time travel adventure").unwrap()
}

#[test]
fn add_returns_id_and_title_is_unique() {
    let conn = open_memory().unwrap();
    let id = sample(&conn);
    assert_eq!(id, 1);

    let err = add_new_game(&conn, "Chrono Trigger", "Other", "Other").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Duplicate);
    assert_eq!(get_games(&conn).unwrap().len(), 1);
}

#[test]
fn fields_are_validated_in_order() {
    let conn = open_memory().unwrap();
    let err = add_new_game(&conn, "", "", "").unwrap_err();
    assert_eq!(err.to_string(), "Must supply title");
    let err = add_new_game(&conn, "Ok", "bad!", "").unwrap_err();
    assert_eq!(err.to_string(), "Must supply summary");
    let err = add_new_game(&conn, "Ok", "Fine", "no_underscores").unwrap_err();
    assert_eq!(err.to_string(), "Must supply description");
}

#[test]
fn get_by_title_assembles_view() {
    let conn = open_memory().unwrap();
    let id = sample(&conn);
    let cat = add_category(&conn, "RPG").unwrap();
    let publisher = add_publisher(&conn, "Square").unwrap();
    associate_category(&conn, id, cat).unwrap();
    associate_publisher(&conn, id, publisher).unwrap();
    add_game_picture(&conn, id, "game/1/picture_0.png").unwrap();

    let view = get_game_by_title(&conn, "Chrono Trigger").unwrap();
    assert_eq!(view.id, id);
    assert_eq!(view.summary, "Time travel");
    assert_eq!(view.pictures, ["game/1/picture_0.png"]);
    assert_eq!(view.categories[0].title, "RPG");
    assert_eq!(view.publishers[0].name, "Square");
    assert_eq!(view.avg_rating, 0);
}

#[test]
fn get_by_title_validates_and_reports_missing() {
    let conn = open_memory().unwrap();
    assert_eq!(
        get_game_by_title(&conn, "").unwrap_err().kind(),
        ErrorKind::Validation
    );
    assert_eq!(
        get_game_by_title(&conn, "Nothing Here").unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn average_rating_rounds_half_up() {
    let conn = open_memory().unwrap();
    let hasher = hasher();
    let id = sample(&conn);
    let alice = register(&conn, &hasher, "alice", "secret1").unwrap();
    let bob = register(&conn, &hasher, "bob", "secret2").unwrap();

    for (user, rating) in [(alice, 3), (bob, 4)] {
        let review = NewReview {
            full_text: "Worth it".to_string(),
            rating,
        };
        add_review(&conn, id, &review, user).unwrap();
    }

    assert_eq!(get_average_rating(&conn, id).unwrap(), 3.5);
    assert_eq!(get_game_by_id(&conn, id).unwrap().avg_rating, 4);
}

#[test]
fn games_of_category_in_link_order() {
    let conn = open_memory().unwrap();
    let a = add_new_game(&conn, "Alpha", "First", "First game").unwrap();
    let b = add_new_game(&conn, "Beta", "Second", "Second game").unwrap();
    let cat = add_category(&conn, "Arcade").unwrap();
    associate_category(&conn, b, cat).unwrap();
    associate_category(&conn, a, cat).unwrap();

    let ids: Vec<_> = get_games_of_category(&conn, cat)
        .unwrap()
        .into_iter()
        .map(|g| g.id)
        .collect();
    assert_eq!(ids, [b, a]);

    assert_eq!(
        get_games_of_category(&conn, 77).unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn update_writes_present_fields_only() {
    let conn = open_memory().unwrap();
    let id = sample(&conn);

    let update = GameUpdate {
        summary: Some("Saving the future".to_string()),
        ..Default::default()
    };
    update_game_by_id(&conn, id, &update).unwrap();

    let view = get_game_by_id(&conn, id).unwrap();
    assert_eq!(view.title, "Chrono Trigger");
    assert_eq!(view.summary, "Saving the future");
    assert_eq!(view.desc, "A time travel adventure");
}

#[test]
fn update_failures() {
    let conn = open_memory().unwrap();
    let id = sample(&conn);
    add_new_game(&conn, "Secret of Mana", "Mana", "Mana tree").unwrap();

    let err = update_game_by_id(&conn, 0, &GameUpdate::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = update_game_by_id(&conn, id, &GameUpdate::default()).unwrap_err();
    assert_eq!(err.to_string(), "Could not update field(s)");
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let bad = GameUpdate {
        title: Some("Bad?".to_string()),
        ..Default::default()
    };
    assert_eq!(
        update_game_by_id(&conn, id, &bad).unwrap_err().kind(),
        ErrorKind::NotFound
    );

    let rename = GameUpdate {
        title: Some("Renamed".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        update_game_by_id(&conn, 99, &rename),
        Err(OperationError::UpdateRejected(_))
    ));

    let taken = GameUpdate {
        title: Some("Secret of Mana".to_string()),
        ..Default::default()
    };
    assert_eq!(
        update_game_by_id(&conn, id, &taken).unwrap_err().kind(),
        ErrorKind::Duplicate
    );

    // Keeping its own title is not a conflict.
    let same = GameUpdate {
        title: Some("Chrono Trigger".to_string()),
        ..Default::default()
    };
    update_game_by_id(&conn, id, &same).unwrap();
}

#[test]
fn delete_cascades_everything() {
    let conn = open_memory().unwrap();
    let hasher = hasher();
    let id = sample(&conn);
    let other = add_new_game(&conn, "Secret of Mana", "Mana", "Mana tree").unwrap();
    let cat = add_category(&conn, "RPG").unwrap();
    let publisher = add_publisher(&conn, "Square").unwrap();
    let user = register(&conn, &hasher, "alice", "secret1").unwrap();

    associate_category(&conn, id, cat).unwrap();
    associate_category(&conn, other, cat).unwrap();
    associate_publisher(&conn, id, publisher).unwrap();
    add_game_picture(&conn, id, "game/1/picture_0.png").unwrap();
    let review = NewReview {
        full_text: "Classic".to_string(),
        rating: 5,
    };
    let review_id = add_review(&conn, id, &review, user).unwrap();
    add_comment(&conn, review_id, user, "Agreed").unwrap();

    delete_game_by_id(&conn, id).unwrap();

    assert_eq!(
        get_game_by_title(&conn, "Chrono Trigger").unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(category_game_ids(&conn, cat).unwrap(), vec![other]);
    assert!(publisher_game_ids(&conn, publisher).unwrap().is_empty());
    assert_eq!(
        get_review_by_id(&conn, review_id).unwrap_err().kind(),
        ErrorKind::NotFound
    );

    let stats = site_stats(&conn).unwrap();
    assert_eq!(stats.games, 1);
    assert_eq!(stats.pictures, 0);
    assert_eq!(stats.reviews, 0);
    assert_eq!(stats.comments, 0);

    assert_eq!(
        delete_game_by_id(&conn, id).unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn search_covers_all_text_fields() {
    let conn = open_memory().unwrap();
    add_new_game(&conn, "Star Fox", "Space", "Arwing pilots").unwrap();
    add_new_game(&conn, "Kirby", "Pink hero", "Dream Land stars").unwrap();
    add_new_game(&conn, "Tetris", "Blocks", "Falling blocks").unwrap();

    let titles: Vec<_> = search_game(&conn, "STAR")
        .unwrap()
        .into_iter()
        .map(|g| g.title)
        .collect();
    assert_eq!(titles, ["Star Fox", "Kirby"]);

    assert!(search_game(&conn, "zelda").unwrap().is_empty());
    assert_eq!(search_game(&conn, "").unwrap_err().kind(), ErrorKind::Validation);
}
