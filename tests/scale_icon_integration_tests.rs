use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use image::{GenericImageView, Rgb, RgbImage};

fn binary() -> &'static str {
    env!("CARGO_BIN_EXE_scale_icon")
}

fn run_on(folder: &Path) -> Output {
    Command::new(binary())
        .arg(folder)
        .output()
        .expect("failed to launch scale_icon")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 128]))
}

#[test]
fn test_mixed_folder() {
    let folder = tempfile::tempdir().unwrap();
    gradient(300, 200).save(folder.path().join("a.png")).unwrap();
    fs::write(folder.path().join("b.txt"), "hello").unwrap();
    gradient(64, 64).save(folder.path().join("c.jpg")).unwrap();

    let result = run_on(folder.path());
    assert!(result.status.success());

    let mut lines = stdout_lines(&result);
    lines.sort();
    let mut expected = vec![
        "(300, 200)".to_owned(),
        "(64, 64)".to_owned(),
        format!(
            "can not process image {}",
            folder.path().join("b.txt").display()
        ),
    ];
    expected.sort();
    assert_eq!(lines, expected);

    for name in ["a.png", "c.jpg"] {
        let icon = image::open(folder.path().join(name)).unwrap();
        assert_eq!(icon.dimensions(), (128, 128), "{name}");
    }
    assert_eq!(fs::read(folder.path().join("b.txt")).unwrap(), b"hello");
}

#[test]
fn test_running_twice_keeps_icon_size() {
    let folder = tempfile::tempdir().unwrap();
    let path = folder.path().join("icon.png");
    gradient(128, 128).save(&path).unwrap();

    assert!(run_on(folder.path()).status.success());
    let second = run_on(folder.path());
    assert!(second.status.success());
    assert_eq!(stdout_lines(&second), vec!["(128, 128)".to_owned()]);

    let icon = image::open(&path).unwrap().to_rgb8();
    assert_eq!(icon, gradient(128, 128));
}

#[test]
fn test_wrong_argument_count_prints_usage() {
    let folder = tempfile::tempdir().unwrap();
    let path = folder.path().join("big.png");
    gradient(200, 200).save(&path).unwrap();

    let no_args = Command::new(binary()).output().unwrap();
    let two_args = Command::new(binary())
        .arg(folder.path())
        .arg(folder.path())
        .output()
        .unwrap();

    for result in [no_args, two_args] {
        assert!(result.status.success());
        assert_eq!(
            String::from_utf8(result.stdout).unwrap(),
            "Use scale_icon.py [folder]\n"
        );
    }
    // the folder was never touched
    assert_eq!(image::open(&path).unwrap().dimensions(), (200, 200));
}

#[test]
fn test_missing_folder_fails() {
    let folder = tempfile::tempdir().unwrap();
    let result = run_on(&folder.path().join("does-not-exist"));

    assert!(!result.status.success());
    assert!(result.stdout.is_empty());
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("list-directory"), "{stderr}");
}
