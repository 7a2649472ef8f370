// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end tests for the pagelift CLI, driving the real binary against
// synthetic photographs written to a temp directory.

use assert_cmd::Command;
use image::{DynamicImage, Rgb, RgbImage};
use predicates::prelude::*;
use tempfile::TempDir;

fn pagelift_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pagelift"))
}

/// Write a synthetic page photo (light page on a dark desk) as a PNG.
fn write_page_photo(dir: &TempDir) -> std::path::PathBuf {
    let mut img = RgbImage::from_pixel(400, 500, Rgb([28u8, 26, 24]));
    for y in 60..440 {
        for x in 50..350 {
            img.put_pixel(x, y, Rgb([235u8, 232, 228]));
        }
    }
    let path = dir.path().join("page.png");
    DynamicImage::ImageRgb8(img).save(&path).unwrap();
    path
}

#[test]
fn help_lists_subcommands() {
    pagelift_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bounds"))
        .stdout(predicate::str::contains("crop"));
}

#[test]
fn bounds_prints_json_rect() {
    let dir = TempDir::new().unwrap();
    let photo = write_page_photo(&dir);

    let assert = pagelift_cmd().arg("bounds").arg(&photo).assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let rect: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    for field in ["x", "y", "width", "height"] {
        assert!(rect.get(field).is_some(), "missing field {}", field);
    }
}

#[test]
fn crop_writes_decodable_output() {
    let dir = TempDir::new().unwrap();
    let photo = write_page_photo(&dir);
    let out = dir.path().join("cropped.jpg");

    pagelift_cmd()
        .arg("crop")
        .arg(&photo)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let cropped = image::open(&out).unwrap();
    assert!(cropped.width() > 0 && cropped.height() > 0);
}

#[test]
fn missing_input_fails_with_human_message() {
    pagelift_cmd()
        .args(["bounds", "/nonexistent/photo.png"])
        .assert()
        .failure()
        .stderr(predicate::str::is_empty().not());
}

#[test]
fn garbage_input_fails_with_decode_message() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garbage.png");
    std::fs::write(&path, b"not an image").unwrap();

    pagelift_cmd()
        .arg("bounds")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("couldn't read that image"));
}
