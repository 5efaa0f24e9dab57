use gamerev_db::*;

#[test]
fn add_and_get_round_trip() {
    let conn = open_memory().unwrap();
    let id = add_publisher(&conn, "Nintendo").unwrap();
    let publisher = get_publisher_by_id(&conn, id).unwrap();
    assert_eq!(publisher.name, "Nintendo");
    assert_eq!(find_publisher_by_name(&conn, "Nintendo").unwrap(), Some(id));
    assert_eq!(find_publisher_by_name(&conn, "nintendo").unwrap(), None);
}

#[test]
fn duplicate_name_is_rejected() {
    let conn = open_memory().unwrap();
    add_publisher(&conn, "Sega").unwrap();
    let err = add_publisher(&conn, "Sega").unwrap_err();
    assert_eq!(err.to_string(), "Publisher \"Sega\" already exists");
}

#[test]
fn search_is_case_insensitive() {
    let conn = open_memory().unwrap();
    add_publisher(&conn, "Rockstar Games").unwrap();
    add_publisher(&conn, "Pop Star Games").unwrap();
    add_publisher(&conn, "Capcom").unwrap();

    let names: Vec<_> = search_publishers(&conn, "star")
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["Rockstar Games", "Pop Star Games"]);
}

#[test]
fn associate_checks_game_before_publisher() {
    let conn = open_memory().unwrap();
    let p = add_publisher(&conn, "Capcom").unwrap();

    let err = associate_publisher(&conn, 99, 98).unwrap_err();
    assert_eq!(err.to_string(), "Game not found: 99");

    let err = associate_publisher(&conn, 99, p).unwrap_err();
    assert_eq!(err.to_string(), "Game not found: 99");

    let g = add_new_game(&conn, "Mega Man", "Robots", "Blue robot").unwrap();
    let err = associate_publisher(&conn, g, 98).unwrap_err();
    assert_eq!(err.to_string(), "Publisher not found: 98");
}

#[test]
fn associate_validates_ids_in_order() {
    let conn = open_memory().unwrap();
    let err = associate_publisher(&conn, 0, 0).unwrap_err();
    assert_eq!(err.to_string(), "Must supply gameID");
    let err = associate_publisher(&conn, 1, -3).unwrap_err();
    assert_eq!(err.to_string(), "Must supply publisherID");
}

#[test]
fn games_of_publisher() {
    let conn = open_memory().unwrap();
    let p = add_publisher(&conn, "Capcom").unwrap();
    let a = add_new_game(&conn, "Mega Man", "Robots", "Blue robot").unwrap();
    let b = add_new_game(&conn, "Street Fighter", "Fights", "Street fights").unwrap();
    add_new_game(&conn, "Tetris", "Blocks", "Falling blocks").unwrap();

    associate_publisher(&conn, a, p).unwrap();
    associate_publisher(&conn, b, p).unwrap();

    let titles: Vec<_> = get_games_of_publisher(&conn, p)
        .unwrap()
        .into_iter()
        .map(|g| g.title)
        .collect();
    assert_eq!(titles, ["Mega Man", "Street Fighter"]);

    unassociate_publisher(&conn, a, p).unwrap();
    assert_eq!(publisher_game_ids(&conn, p).unwrap(), vec![b]);
}

#[test]
fn delete_publisher() {
    let conn = open_memory().unwrap();
    let p = add_publisher(&conn, "Capcom").unwrap();
    let g = add_new_game(&conn, "Mega Man", "Robots", "Blue robot").unwrap();
    associate_publisher(&conn, g, p).unwrap();

    delete_publisher_by_id(&conn, p).unwrap();
    assert!(get_all_publishers(&conn).unwrap().is_empty());
    assert!(publishers_for_game(&conn, g).unwrap().is_empty());
}
