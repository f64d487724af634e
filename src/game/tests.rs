use crate::game::{GameConfig, GameMode};

#[test]
fn test_element_counts() {
    assert_eq!(GameMode::Mini.element_count(), 6);
    assert_eq!(GameMode::Regular.element_count(), 8);
}

#[test]
fn test_equal_sign_positions_mini() {
    let positions: Vec<usize> = GameMode::Mini.equal_sign_positions().collect();
    assert_eq!(positions, vec![3, 4]);
}

#[test]
fn test_equal_sign_positions_regular() {
    let positions: Vec<usize> = GameMode::Regular.equal_sign_positions().collect();
    assert_eq!(positions, vec![4, 5, 6]);
}

#[test]
fn test_config_matches_mode() {
    let config = GameConfig::from(GameMode::Regular);
    assert_eq!(config.mode, GameMode::Regular);
    assert_eq!(config.element_count, 8);
    assert_eq!(config.attempts, 6);
    assert_eq!(config.equal_sign_positions, 4..7);
}

#[test]
fn test_mode_display() {
    assert_eq!(format!("{}", GameMode::Mini), "mini");
    assert_eq!(format!("{}", GameMode::Regular), "regular");
}
