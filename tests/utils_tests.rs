use moveup::cli::commands::config::editor_candidates;
use moveup::utils::path::expand_tilde;
use std::path::PathBuf;

#[test]
fn test_expand_tilde() {
    let home = dirs::home_dir().expect("home dir");

    assert_eq!(expand_tilde("~"), home);
    assert_eq!(expand_tilde("~/moveup/data"), home.join("moveup/data"));
    assert_eq!(expand_tilde("/srv/moveup"), PathBuf::from("/srv/moveup"));
    assert_eq!(expand_tilde("data"), PathBuf::from("data"));
    assert_eq!(expand_tilde("~other/data"), PathBuf::from("~other/data"));
}

#[test]
fn test_editor_candidates_order() {
    assert_eq!(
        editor_candidates(Some("vim"), Some("nano".into())),
        vec!["vim", "nano"]
    );
    assert_eq!(editor_candidates(None, Some("emacs".into())), vec!["emacs"]);
    assert_eq!(
        editor_candidates(Some("nano"), Some("nano".into())),
        vec!["nano"]
    );
    assert_eq!(editor_candidates(Some("vim"), None).len(), 2);
}
