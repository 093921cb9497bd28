use image::{ColorType, Rgba};
use std::path::Path;
use std::process::{Command, Output};
use tank_gen::{detailed, render, simple};
use tempfile::TempDir;

const TANK_GEN: &str = env!("CARGO_BIN_EXE_tank-gen");
const TANK_GEN_SIMPLE: &str = env!("CARGO_BIN_EXE_tank-gen-simple");

const TIER_NAMES: [&str; 4] = ["100", "500", "1000", "2000"];

/// Runs a generator binary with `dir` as its working directory
fn run_generator(binary: &str, dir: &Path) -> Output {
    let output = Command::new(binary)
        .current_dir(dir)
        .output()
        .expect("Failed to run generator");

    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("{binary} failed");
    }

    output
}

fn assert_textures(dir: &Path) {
    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .expect("Failed to list output directory")
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    entries.sort();

    let mut expected: Vec<_> = TIER_NAMES
        .iter()
        .map(|name| format!("experience_tank_{name}.png"))
        .collect();
    expected.sort();
    assert_eq!(entries, expected);

    for name in TIER_NAMES {
        let path = dir.join(format!("experience_tank_{name}.png"));
        let texture = image::open(&path).expect("Failed to load texture");
        assert_eq!(texture.width(), 32, "{}", path.display());
        assert_eq!(texture.height(), 32, "{}", path.display());
        assert_eq!(texture.color(), ColorType::Rgba8, "{}", path.display());
    }
}

#[test]
fn test_detailed_generator_writes_all_tiers() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = run_generator(TANK_GEN, temp_dir.path());

    assert_textures(temp_dir.path());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 5, "stdout: {stdout}");
    for (line, name) in lines.iter().zip(TIER_NAMES) {
        assert!(line.contains(&format!("experience_tank_{name}.png")), "{line}");
    }

    let iron = image::open(temp_dir.path().join("experience_tank_100.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(*iron.get_pixel(12, 7), Rgba([180, 180, 180, 255]));
}

#[test]
fn test_simple_generator_writes_all_tiers() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = run_generator(TANK_GEN_SIMPLE, temp_dir.path());

    assert_textures(temp_dir.path());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 5);

    let diamond = image::open(temp_dir.path().join("experience_tank_2000.png"))
        .unwrap()
        .to_rgba8();
    for y in 14..=21 {
        for x in 9..=22 {
            let pixel = *diamond.get_pixel(x, y);
            // Glints cross the liquid column
            if pixel != simple::GLINT {
                assert_eq!(pixel, Rgba([40, 80, 160, 255]), "pixel ({x}, {y})");
            }
        }
    }
}

#[test]
fn test_variants_overwrite_each_other() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    run_generator(TANK_GEN, temp_dir.path());
    run_generator(TANK_GEN_SIMPLE, temp_dir.path());

    assert_textures(temp_dir.path());
    let texture = image::open(temp_dir.path().join("experience_tank_500.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(*texture.get_pixel(15, 4), simple::TIERS[1].color);
}

#[test]
fn test_rendering_is_deterministic() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    let a = render::render_all(&detailed::TIERS, first.path()).unwrap();
    let b = render::render_all(&detailed::TIERS, second.path()).unwrap();
    for (left, right) in a.iter().zip(&b) {
        assert_eq!(std::fs::read(left).unwrap(), std::fs::read(right).unwrap());
    }

    // Same directory twice in a row
    let before = std::fs::read(&a[0]).unwrap();
    render::render_tier(&detailed::TIERS[0], first.path()).unwrap();
    assert_eq!(std::fs::read(&a[0]).unwrap(), before);
}

#[test]
fn test_tiers_render_to_distinct_textures() {
    let temp_dir = TempDir::new().unwrap();
    let paths = render::render_all(&simple::TIERS, temp_dir.path()).unwrap();
    assert_eq!(paths.len(), 4);

    let contents: Vec<_> = paths.iter().map(|p| std::fs::read(p).unwrap()).collect();
    for i in 0..contents.len() {
        for j in i + 1..contents.len() {
            assert_ne!(contents[i], contents[j]);
        }
    }
}
