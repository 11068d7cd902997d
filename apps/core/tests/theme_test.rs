use std::path::{Path, PathBuf};

use appsview_core::theme::{expand_search_paths, DataDirs, IconSearchPath};

fn mkdir(path: &Path) -> PathBuf {
    std::fs::create_dir_all(path).unwrap();
    path.to_path_buf()
}

#[test]
fn search_paths_order_theme_then_hicolor_then_pixmaps() {
    let tmp = tempfile::tempdir().unwrap();
    let user = tmp.path().join("home-share");
    let sys_a = tmp.path().join("usr-local-share");
    let sys_b = tmp.path().join("usr-share");

    let user_theme = mkdir(&user.join("icons/Papirus"));
    let sys_b_theme = mkdir(&sys_b.join("icons/Papirus"));
    let sys_a_hicolor = mkdir(&sys_a.join("icons/hicolor"));
    let sys_b_hicolor = mkdir(&sys_b.join("icons/hicolor"));
    let pixmaps = mkdir(&tmp.path().join("pixmaps"));

    let dirs = DataDirs {
        user,
        system: vec![sys_a, sys_b],
    };
    let paths = expand_search_paths("Papirus", &dirs, &pixmaps);

    assert_eq!(
        paths.roots(),
        &[user_theme, sys_b_theme, sys_a_hicolor, sys_b_hicolor, pixmaps]
    );
}

#[test]
fn search_paths_skip_missing_directories() {
    let tmp = tempfile::tempdir().unwrap();
    let sys = tmp.path().join("share");
    let hicolor = mkdir(&sys.join("icons/hicolor"));

    let dirs = DataDirs {
        user: tmp.path().join("does-not-exist"),
        system: vec![sys, tmp.path().join("also-missing")],
    };
    let paths = expand_search_paths("Adwaita", &dirs, &tmp.path().join("no-pixmaps"));

    assert_eq!(paths.roots(), &[hicolor]);
}

#[test]
fn hicolor_theme_is_listed_once() {
    let tmp = tempfile::tempdir().unwrap();
    let sys = tmp.path().join("share");
    let hicolor = mkdir(&sys.join("icons/hicolor"));

    let dirs = DataDirs {
        user: tmp.path().join("home"),
        system: vec![sys],
    };
    let paths = expand_search_paths("hicolor", &dirs, &tmp.path().join("none"));

    assert_eq!(paths.roots(), &[hicolor]);
}

#[test]
fn nothing_installed_gives_empty_search_path() {
    let tmp = tempfile::tempdir().unwrap();
    let dirs = DataDirs {
        user: tmp.path().join("a"),
        system: vec![tmp.path().join("b")],
    };
    let paths = expand_search_paths("Papirus", &dirs, &tmp.path().join("c"));
    assert!(paths.is_empty());
    assert_eq!(paths, IconSearchPath::default());
}
