use std::fs;
use std::path::Path;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use tempfile::TempDir;

use photometry_fixtures::config::FixtureConfig;
use photometry_fixtures::fixture::{bandpass_file_name, generate, phi_file_name, FilterReport};
use photometry_fixtures::loader::load_fixture;
use photometry_fixtures::photometry::filter::FILTER_NAMES;

fn run_into(dir: &Path) -> (Vec<FilterReport>, String) {
    let config = FixtureConfig::in_dir(dir);
    let mut stdout = Vec::new();
    let reports = generate(&config, &mut stdout).unwrap();
    (reports, String::from_utf8(stdout).unwrap())
}

#[test]
fn writes_ten_files_and_five_norm_lines() {
    let dir = TempDir::new().unwrap();
    let (_, stdout) = run_into(dir.path());

    let mut written: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    written.sort();

    let mut expected: Vec<String> = FILTER_NAMES
        .iter()
        .flat_map(|n| [bandpass_file_name(n), phi_file_name(n)])
        .collect();
    expected.sort();
    assert_eq!(written, expected);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|l| l.starts_with("norm ")));
}

#[test]
fn bandpass_and_phi_have_matching_rows() {
    let dir = TempDir::new().unwrap();
    let (reports, _) = run_into(dir.path());

    for report in &reports {
        let bandpass = load_fixture(&report.bandpass_path).unwrap();
        let phi = load_fixture(&report.phi_path).unwrap();
        assert_eq!(bandpass.len(), phi.len());
        assert_eq!(bandpass.len(), 2991);
        assert_eq!(report.rows, 2991);

        for pair in bandpass.windows(2) {
            assert_abs_diff_eq!(pair[1].wavelength - pair[0].wavelength, 10.0, epsilon = 1e-9);
        }
        for (b, p) in bandpass.iter().zip(&phi) {
            assert_eq!(b.wavelength, p.wavelength);
        }
    }
}

#[test]
fn u_filter_layout() {
    let dir = TempDir::new().unwrap();
    run_into(dir.path());

    let text = fs::read_to_string(dir.path().join("test_bandpass_u.dat")).unwrap();
    let first = text.lines().next().unwrap();
    assert!(first.starts_with("1.000000000000000000e+02 "));
    assert!(text
        .lines()
        .any(|l| l == "2.100000000000000000e+03 1.000000000000000000e+00"));
    assert!(text
        .lines()
        .last()
        .unwrap()
        .starts_with("3.000000000000000000e+04 "));
}

#[test]
fn phi_times_wavelength_times_reported_norm_is_sensitivity() {
    let dir = TempDir::new().unwrap();
    let (reports, stdout) = run_into(dir.path());

    for (report, line) in reports.iter().zip(stdout.lines()) {
        // The printed norm only carries seven significant digits.
        let printed: f64 = line.strip_prefix("norm ").unwrap().parse().unwrap();
        assert_relative_eq!(printed, report.norm, max_relative = 1e-6);

        let bandpass = load_fixture(&report.bandpass_path).unwrap();
        let phi = load_fixture(&report.phi_path).unwrap();
        for (b, p) in bandpass.iter().zip(&phi) {
            if b.value > 0.0 {
                assert_relative_eq!(
                    p.value * p.wavelength * report.norm,
                    b.value,
                    max_relative = 1e-9
                );
            }
        }
    }
}

#[test]
fn reruns_are_byte_identical() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let (_, stdout_a) = run_into(first.path());
    let (_, stdout_b) = run_into(second.path());
    assert_eq!(stdout_a, stdout_b);

    for name in FILTER_NAMES {
        for file in [bandpass_file_name(name), phi_file_name(name)] {
            let a = fs::read(first.path().join(&file)).unwrap();
            let b = fs::read(second.path().join(&file)).unwrap();
            assert_eq!(a, b, "{file} differs between runs");
        }
    }
}

#[test]
fn rerun_overwrites_existing_fixtures() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("test_phi_r.dat"), "stale\n").unwrap();
    run_into(dir.path());

    let phi = load_fixture(&dir.path().join("test_phi_r.dat")).unwrap();
    assert_eq!(phi.len(), 2991);
}
