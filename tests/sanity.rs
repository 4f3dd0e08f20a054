use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use tempfile::TempDir;

// Use the dev-dependency crate for helpers
use test_helpers::*;

const KEY_NEXTSONG: u16 = 163;

/// Fake MPD server accepting one client. Returns the port and a handle
/// yielding every command received until the client sends `close` or hangs up.
fn fake_mpd(status: &'static str) -> (u16, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake MPD");
    let port = listener.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept MPD client");
        let mut writer = stream.try_clone().unwrap();
        writer.write_all(b"OK MPD 0.23.5\n").unwrap();
        let mut commands = Vec::new();
        for line in BufReader::new(stream).lines() {
            let Ok(line) = line else { break };
            if line == "close" {
                break;
            }
            let reply = if line == "status" {
                format!("{status}OK\n")
            } else {
                "OK\n".to_string()
            };
            commands.push(line);
            if writer.write_all(reply.as_bytes()).is_err() {
                break;
            }
        }
        commands
    });
    (port, handle)
}

/// Port with nothing listening on it.
fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn write_config(dir: &TempDir, ir: &str, port: u16) -> PathBuf {
    let path = dir.path().join("raspi-ir-mpdc.toml");
    let content = format!(
        "[IR]\n{ir}\n\n[MPD]\nhost = \"127.0.0.1\"\nport = {port}\ntimeout = \"2s\"\nvolume_step = 5\n"
    );
    std::fs::write(&path, content).expect("write config");
    path
}

fn service(config: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("raspi-ir-mpdc").unwrap();
    cmd.arg("--config").arg(config).env_remove("RUST_LOG");
    cmd
}

#[test]
fn check_accepts_valid_config() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        "INPUTDEVICE = 0\nKEY_NEXTSONG = \"next_track,down\"\nKEY_VOLUMEUP = \"volume_up,dn_hold\"",
        closed_port(),
    );

    service(&config)
        .arg("--check")
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration OK"));
}

#[test]
fn unknown_action_is_reported_with_key() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "INPUTDEVICE = 0\nKEY_PLAY = \"dance\"", closed_port());

    service(&config)
        .arg("--check")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("'KEY_PLAY': unknown action 'dance'"));
}

#[test]
fn duplicate_input_device_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        "INPUTDEVICE = 0\nKEY_STOP = \"stop\"\ninputdevice = \"/dev/input/event1\"",
        closed_port(),
    );

    service(&config)
        .arg("--check")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("multiple input device definition"));
}

#[test]
fn missing_config_file_exits_with_2() {
    let dir = TempDir::new().unwrap();
    service(&dir.path().join("absent.toml"))
        .arg("--check")
        .assert()
        .code(2);
}

#[test]
fn missing_ir_section_exits_with_3() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("raspi-ir-mpdc.toml");
    std::fs::write(&path, "[MPD]\nport = 6600\n").unwrap();

    service(&path)
        .arg("--check")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("section [IR] missing"));
}

#[test]
fn unopenable_device_exits_with_3() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "INPUTDEVICE = 0", closed_port());

    service(&config)
        .arg("--device")
        .arg(dir.path().join("no-such-event-device"))
        .assert()
        .code(3);
}

#[test]
fn unreachable_mpd_exits_with_5() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "INPUTDEVICE = 0", closed_port());

    service(&config)
        .arg("--device")
        .arg("-")
        .write_stdin(Vec::new())
        .assert()
        .code(5);
}

#[test]
fn dispatches_key_presses_from_stdin() {
    let (port, server) = fake_mpd("state: play\nvolume: 40\n");
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        "INPUTDEVICE = 0\nKEY_NEXTSONG = \"next_track,down\"\nKEY_VOLUMEUP = \"volume_up,dn_hold\"",
        port,
    );

    let mut events = key_sequence(KEY_NEXTSONG, &[RELEASE, PRESS, REPEAT, RELEASE]);
    events.extend(key_sequence(KEY_VOLUMEUP, &[PRESS, REPEAT, RELEASE]));
    events.extend(key_sequence(KEY_A, &[PRESS, RELEASE]));

    service(&config)
        .arg("--device")
        .arg("-")
        .write_stdin(events_to_bytes(&events))
        .assert()
        .success();

    let commands = server.join().expect("fake MPD thread");
    assert_eq!(
        commands,
        vec!["next", "status", "setvol 45", "status", "setvol 45"],
        "MPD received unexpected commands"
    );
}

#[test]
fn stats_json_reports_counts() {
    let (port, server) = fake_mpd("state: stop\n");
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "INPUTDEVICE = 0\nKEY_PLAYPAUSE = \"play_pause,down\"", port);

    let mut events = key_sequence(KEY_PLAYPAUSE, &[PRESS, RELEASE]);
    events.push(scan_ev(300_000, 0x45));

    let output = service(&config)
        .arg("--device")
        .arg("-")
        .arg("--stats-json")
        .env("RUST_LOG", "off")
        .write_stdin(events_to_bytes(&events))
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "exit status: {:?}", output.status);

    let stats: Value = serde_json::from_slice(&output.stderr).expect("stderr should be JSON");
    assert_eq!(stats["events_read"], 5);
    assert_eq!(stats["key_events"], 2);
    assert_eq!(stats["not_triggered"], 1);
    assert_eq!(stats["actions_fired"], 1);
    assert_eq!(stats["actions_failed"], 0);

    assert_eq!(server.join().unwrap(), vec!["status", "play"]);
}
