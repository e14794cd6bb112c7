//! Level loader tests - TOML files on disk and the bundled level set

use std::io::Write;
use std::path::{Path, PathBuf};

use cardinal_chains::core::{GameSession, SessionState};
use cardinal_chains::levels::{LevelLoadError, LevelLoader};
use cardinal_chains::types::{Direction, GameAction};

fn bundled_levels() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("levels/default.toml")
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[[level]]
number = 10
rows = ["-1 1 2", " 0 3 4", " 0 0 5"]
"#
    )
    .unwrap();

    let catalog = LevelLoader::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 1);
    let level = &catalog[0];
    assert_eq!(level.number(), 10);
    assert_eq!(
        level.rows(),
        &[vec![-1, 1, 2], vec![0, 3, 4], vec![0, 0, 5]]
    );
    assert_eq!(level.anchor_count(), 1);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    match LevelLoader::load(&path) {
        Err(LevelLoadError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected I/O error, got {:?}", other),
    }
}

#[test]
fn test_bad_cell_in_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[[level]]\nnumber = 1\nrows = [\"-1 one\"]\n").unwrap();
    let err = LevelLoader::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("`one` is not an integer"), "{}", err);
}

#[test]
fn test_bundled_levels_load() {
    let catalog = LevelLoader::load(&bundled_levels()).unwrap();
    assert_eq!(catalog.len(), 5);
    for (i, level) in catalog.iter().enumerate() {
        assert_eq!(level.number(), i as i32 + 1);
        assert!(level.anchor_count() >= 1);
    }
}

#[test]
fn test_bundled_levels_are_solvable() {
    use Direction::{East as E, South as S, West as W};

    let catalog = LevelLoader::load(&bundled_levels()).unwrap();
    // One entry per level: moves per chain, in chain order.
    let solutions: Vec<Vec<Vec<Direction>>> = vec![
        vec![vec![E, E, S]],
        vec![vec![E, E, S, S], vec![E]],
        vec![vec![E, E, E], vec![W, W, W]],
        vec![vec![E, E, E, S, S, W, W, W]],
        vec![vec![E, S, E, S, E], vec![E]],
    ];
    assert_eq!(solutions.len(), catalog.len());

    let mut session = GameSession::new(catalog).unwrap();
    for (index, chains) in solutions.iter().enumerate() {
        assert_eq!(session.state(), SessionState::Playing(index));
        for (chain, moves) in chains.iter().enumerate() {
            if chain > 0 {
                session.apply_action(GameAction::NextChain);
            }
            for &d in moves {
                assert!(
                    session.apply_action(GameAction::Move(d)).changed,
                    "level {} chain {} move {:?} rejected",
                    index + 1,
                    chain,
                    d
                );
            }
        }
        assert_eq!(session.state(), SessionState::LevelComplete(index));
        session.advance();
    }
    assert_eq!(session.state(), SessionState::AllLevelsComplete);
}
