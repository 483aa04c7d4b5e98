//! End-to-end parsing of synthetic registry hives.

mod common;

use common::{build_hive, legacy_record, modern_record, userassist_hive, KeySpec};
use runtrail::hive::Hive;
use runtrail::knownfolders::OsGeneration;
use runtrail::userassist::{collect_entries, parse_hive, USERASSIST_KEY};
use runtrail::RuntrailError;

/// Provider GUID Explorer uses for executable launches.
const EXECUTABLE_PROVIDER: &str = "{CEBFF5CD-ACE2-4F4F-9178-9926F41749EA}";

#[test]
fn parses_modern_records_from_a_synthetic_hive() {
    let image = userassist_hive(
        EXECUTABLE_PROVIDER,
        &[
            (
                r"{1AC14E77-02E7-4E5D-B744-2EB1AE5198B7}\cmd.exe",
                modern_record(3, 14, 9, 2500, 128930364000000000),
            ),
            ("UEME_CTLSESSION", vec![0u8; 8]),
        ],
    );

    let hive = Hive::from_bytes(image).unwrap();
    let records = parse_hive(&hive, OsGeneration::Win7).unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.program, r"C:\Windows\System32\cmd.exe");
    assert_eq!(record.session_id, 3);
    assert_eq!(record.used_count, 14);
    assert_eq!(record.focus_count, Some(9));
    assert_eq!(record.focus_time_ms, Some(2500));
    assert_eq!(
        record.last_access.unwrap().to_rfc3339(),
        "2009-07-25T23:00:00+00:00"
    );
}

#[test]
fn parses_legacy_records_without_focus_fields() {
    let image = userassist_hive(
        EXECUTABLE_PROVIDER,
        &[(
            r"UEME_RUNPATH:C:\WINDOWS\system32\notepad.exe",
            legacy_record(1, 4, 0),
        )],
    );

    let hive = Hive::from_bytes(image).unwrap();
    let records = parse_hive(&hive, OsGeneration::WinXp).unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.program, r"UEME_RUNPATH:C:\WINDOWS\system32\notepad.exe");
    assert_eq!(record.used_count, 4);
    assert_eq!(record.focus_count, None);
    assert_eq!(record.focus_time_ms, None);
    assert_eq!(record.last_access, None);
}

#[test]
fn value_names_are_rot13_at_rest() {
    let image = userassist_hive(EXECUTABLE_PROVIDER, &[("UEME_RUNPIDL", vec![0u8; 16])]);

    // The stored form never appears decoded in the image
    assert!(image.windows(12).any(|w| w == b"HRZR_EHACVQY"));
    assert!(!image.windows(12).any(|w| w == b"UEME_RUNPIDL"));

    let hive = Hive::from_bytes(image).unwrap();
    let entries = collect_entries(&hive).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "UEME_RUNPIDL");
}

#[test]
fn generation_changes_placeholder_roots() {
    let name = r"{B4BFCC3A-DB2C-424C-B029-7FE99A87C641}\run.exe";
    let image = userassist_hive(EXECUTABLE_PROVIDER, &[(name, legacy_record(1, 1, 0))]);
    let hive = Hive::from_bytes(image).unwrap();

    let modern = parse_hive(&hive, OsGeneration::Win7).unwrap();
    assert_eq!(modern[0].program, r"C:\Users\[user]\Desktop\run.exe");

    let legacy = parse_hive(&hive, OsGeneration::WinXp).unwrap();
    assert_eq!(
        legacy[0].program,
        r"C:\Documents and Settings\[user]\Desktop\run.exe"
    );
}

#[test]
fn records_keep_hive_value_order() {
    let image = userassist_hive(
        EXECUTABLE_PROVIDER,
        &[
            ("zzz.exe", legacy_record(1, 1, 0)),
            ("aaa.exe", legacy_record(1, 2, 0)),
            ("mmm.exe", legacy_record(1, 3, 0)),
        ],
    );

    let hive = Hive::from_bytes(image).unwrap();
    let programs: Vec<String> = parse_hive(&hive, OsGeneration::Win7)
        .unwrap()
        .into_iter()
        .map(|r| r.program)
        .collect();

    assert_eq!(programs, ["zzz.exe", "aaa.exe", "mmm.exe"]);
}

#[test]
fn provider_without_count_subkey_is_skipped() {
    let mut node = KeySpec::new("{F4E57C4B-2036-45F0-A9AB-443BCFE33D9F}");
    for segment in USERASSIST_KEY.rsplit('\\') {
        node = KeySpec::new(segment).child(node);
    }
    let image = build_hive(KeySpec::new("ROOT").child(node));

    let hive = Hive::from_bytes(image).unwrap();
    let records = parse_hive(&hive, OsGeneration::Win7).unwrap();

    assert!(records.is_empty());
}

#[test]
fn hive_without_userassist_key_reports_the_path() {
    let image = build_hive(KeySpec::new("ROOT").child(KeySpec::new("SOFTWARE")));

    let hive = Hive::from_bytes(image).unwrap();
    let err = parse_hive(&hive, OsGeneration::Win7).unwrap_err();

    assert!(matches!(err, RuntrailError::KeyNotFound { .. }));
    assert!(err.to_string().contains("UserAssist"));
}

#[test]
fn key_path_walk_is_case_insensitive() {
    let image = userassist_hive(EXECUTABLE_PROVIDER, &[("x.exe", legacy_record(1, 1, 0))]);

    let hive = Hive::from_bytes(image).unwrap();
    let key = hive
        .open_key(r"software\MICROSOFT\windows\currentversion\explorer\userassist")
        .unwrap();

    assert_eq!(key.name(), "UserAssist");
}

#[test]
fn garbage_bytes_are_an_invalid_hive() {
    let err = Hive::from_bytes(vec![0x42; 8192]).unwrap_err();
    assert!(matches!(err, RuntrailError::InvalidHive { .. }));
}

#[test]
fn non_record_payload_lengths_are_skipped() {
    let image = userassist_hive(
        EXECUTABLE_PROVIDER,
        &[
            ("UEME_CTLSESSION", vec![0u8; 4]),
            ("odd.exe", vec![0u8; 17]),
            ("kept.exe", legacy_record(2, 5, 0)),
            ("huge.exe", vec![0u8; 128]),
        ],
    );

    let hive = Hive::from_bytes(image).unwrap();
    let records = parse_hive(&hive, OsGeneration::Win7).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].program, "kept.exe");
    assert_eq!(records[0].used_count, 5);
}
