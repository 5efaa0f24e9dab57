use gamerev_db::*;

const SEED: &str = r#"
categories:
  - Platformer
  - Puzzle
publishers:
  - Nintendo
games:
  - title: Super Mario World
    summary: Dinosaur land
    desc: Mario rides Yoshi
    categories: [Platformer, Racing]
    publishers: [Nintendo]
  - title: Tetris
    summary: Blocks
    desc: Falling blocks
    categories: [Puzzle]
"#;

fn write_seed(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("seed.yaml");
    std::fs::write(&path, SEED).unwrap();
    path
}

#[test]
fn seed_from_file() {
    let conn = open_memory().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = write_seed(dir.path());

    let stats = seed_from_path(&conn, &path).unwrap();
    assert_eq!(
        stats,
        SeedStats {
            categories: 2,
            publishers: 1,
            games: 2,
            links: 3,
            skipped_links: 1,
        }
    );

    let mario = get_game_by_title(&conn, "Super Mario World").unwrap();
    assert_eq!(mario.categories.len(), 1);
    assert_eq!(mario.publishers[0].name, "Nintendo");
}

#[test]
fn seeding_twice_adds_nothing() {
    let conn = open_memory().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = write_seed(dir.path());

    seed_from_path(&conn, &path).unwrap();
    let again = seed_from_path(&conn, &path).unwrap();
    assert_eq!(again.games, 0);
    assert_eq!(again.categories, 0);

    let stats = site_stats(&conn).unwrap();
    assert_eq!(stats.games, 2);
    let links: i64 = conn
        .query_row("SELECT COUNT(*) FROM game_category", [], |row| row.get(0))
        .unwrap();
    assert_eq!(links, 2);
}

#[test]
fn seed_from_directory() {
    let conn = open_memory().unwrap();
    let dir = tempfile::tempdir().unwrap();
    write_seed(dir.path());
    std::fs::write(dir.path().join("more.yml"), "categories: [Racing]\n").unwrap();

    let stats = seed_from_path(&conn, dir.path()).unwrap();
    assert_eq!(stats.categories, 3);
    // Racing now exists by the time games are linked.
    assert_eq!(stats.skipped_links, 0);
}

#[test]
fn invalid_entry_rolls_back() {
    let conn = open_memory().unwrap();
    let data = gamerev_catalog::SeedData {
        categories: vec!["Good".to_string(), "Bad!".to_string()],
        ..Default::default()
    };

    let err = seed_from_data(&conn, &data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(get_all_categories(&conn).unwrap().is_empty());
}
