use super::*;

#[test]
fn avatar_initial_uses_first_character_uppercased() {
    assert_eq!(avatar_initial("robin"), "R");
    assert_eq!(avatar_initial("Élodie"), "É");
}

#[test]
fn avatar_initial_falls_back_for_empty_name() {
    assert_eq!(avatar_initial(""), "U");
}
