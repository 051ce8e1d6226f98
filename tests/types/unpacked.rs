use error_trail::{CallFrame, Error, UnpackedError};

fn frame(function: &str, line: u32, message: Option<&str>) -> CallFrame {
    CallFrame {
        message: message.map(str::to_string),
        file: "/srv/app/src/jobs.rs".to_string(),
        function: function.to_string(),
        line,
    }
}

fn sample() -> UnpackedError {
    UnpackedError {
        message: "queue closed".to_string(),
        frames: vec![
            frame("jobs::dequeue", 40, Some("queue closed")),
            frame("jobs::worker", 12, None),
            frame("jobs::worker", 14, Some("worker stopped")),
            frame("app::main", 3, None),
        ],
    }
}

#[test]
fn round_trip_keeps_construct_message() {
    let unpacked = Error::new("m").unpack();
    assert_eq!(unpacked.message, "m");
    assert_eq!(unpacked.frames[0].message.as_deref(), Some("m"));
    assert!(unpacked.len() >= 1);
}

#[test]
fn annotated_yields_construct_and_wrap_sites_in_order() {
    let unpacked = sample();
    let lines: Vec<u32> = unpacked.annotated().map(|f| f.line).collect();
    assert_eq!(lines, [40, 14]);
}

#[test]
fn default_unpacked_is_empty() {
    let unpacked = UnpackedError::default();
    assert!(unpacked.is_empty());
    assert_eq!(unpacked.len(), 0);
    assert_eq!(unpacked.message, "");
    assert_eq!(unpacked.to_string(), "");
}

#[test]
fn display_numbers_every_frame() {
    let rendered = sample().to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "0) /srv/app/src/jobs.rs[40]: jobs::dequeue: queue closed");
    assert_eq!(lines[1], "1) /srv/app/src/jobs.rs[12]: jobs::worker");
    assert_eq!(lines[3], "3) /srv/app/src/jobs.rs[3]: app::main");
}

#[test]
fn snapshot_is_detached_from_later_wraps() {
    let err = Error::new("detached");
    let before = err.unpack();
    err.wrap("after snapshot");
    let after = err.unpack();

    assert_eq!(before.message, after.message);
    assert!(after.len() >= before.len());
    assert_eq!(before.annotated().count(), 1);
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;

    #[test]
    fn serializes_with_trace_keys() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(value["message"], "queue closed");
        assert_eq!(value["frames"][0]["function"], "jobs::dequeue");
        assert_eq!(value["frames"][0]["line"], 40);
        assert_eq!(value["frames"][0]["message"], "queue closed");
        assert!(value["frames"][1].get("message").is_none());
    }

    #[test]
    fn deserializes_frames_without_message() {
        let json = r#"{"message":"x","frames":[{"file":"a.rs","function":"a::f","line":1}]}"#;
        let unpacked: UnpackedError = serde_json::from_str(json).unwrap();

        assert_eq!(unpacked.frames[0].message, None);
        assert_eq!(unpacked.frames[0].function, "a::f");
    }
}
