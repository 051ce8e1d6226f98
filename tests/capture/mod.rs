use std::cell::Cell;

use error_trail::capture::{
    capture, BacktraceWalker, FrameId, FrameRef, SkipLevel, StackWalker, MAX_DEPTH,
};

struct FixedWalker {
    frames: Vec<FrameRef>,
    requested_skip: Cell<Option<usize>>,
}

impl FixedWalker {
    fn new(frames: Vec<FrameRef>) -> Self {
        Self { frames, requested_skip: Cell::new(None) }
    }
}

impl StackWalker for FixedWalker {
    fn capture(&self, skip_frames: usize) -> Vec<FrameRef> {
        self.requested_skip.set(Some(skip_frames));
        self.frames.clone()
    }
}

fn named(ip: usize, function: &str) -> FrameRef {
    FrameRef {
        id: FrameId::from_ip(ip),
        function: Some(function.to_string()),
        file: Some("/work/app/src/main.rs".to_string()),
        line: Some(ip as u32),
    }
}

#[inline(never)]
fn capture_here() -> Vec<error_trail::types::TracedFrame> {
    capture(&BacktraceWalker, SkipLevel::CaptureOnly)
}

#[inline(never)]
fn walk_here() -> Vec<FrameRef> {
    BacktraceWalker.capture(0)
}

#[inline(never)]
fn recurse_then_capture(depth: usize) -> Vec<error_trail::types::TracedFrame> {
    let frames = if depth == 0 {
        capture(&BacktraceWalker, SkipLevel::CaptureOnly)
    } else {
        recurse_then_capture(depth - 1)
    };
    // Keeps the recursive call out of tail position.
    std::hint::black_box(depth);
    frames
}

#[test]
fn walker_starts_at_its_caller() {
    let frames = walk_here();
    let first = frames[0].function.as_deref().unwrap_or_default();

    assert!(first.ends_with("walk_here"), "unexpected first frame: {first}");
    for frame in &frames {
        let function = frame.function.as_deref().unwrap_or_default();
        assert!(!function.starts_with("backtrace::"), "unwinder frame leaked: {function}");
        assert!(!function.contains("BacktraceWalker"), "walker leaked: {function}");
    }
}

#[test]
fn first_frame_is_the_caller_of_capture() {
    let frames = capture_here();

    assert!(!frames.is_empty());
    assert!(frames.len() <= MAX_DEPTH);
    assert!(
        frames[0].frame().function.ends_with("capture_here"),
        "unexpected first frame: {:?}",
        frames[0]
    );
    assert!(frames[1].frame().function.ends_with("first_frame_is_the_caller_of_capture"));
}

#[test]
fn captured_frames_carry_no_message() {
    let frames = capture_here();
    assert!(frames.iter().all(|traced| traced.frame().message.is_none()));
}

#[test]
fn capture_machinery_is_not_reported() {
    let frames = capture_here();
    for traced in &frames {
        let function = &traced.frame().function;
        assert!(!function.starts_with("backtrace::"), "runtime frame leaked: {function}");
        assert!(!function.ends_with("capture::capture"), "capturer leaked: {function}");
        assert!(!function.contains("BacktraceWalker"), "walker leaked: {function}");
    }
}

#[test]
fn repeated_captures_from_one_site_share_identities() {
    let mut runs = Vec::new();
    for _ in 0..2 {
        runs.push(capture_here());
    }

    let first: Vec<FrameId> = runs[0].iter().map(|f| f.id()).collect();
    let second: Vec<FrameId> = runs[1].iter().map(|f| f.id()).collect();
    assert_eq!(first, second);
}

#[test]
fn walker_is_asked_to_skip_the_level_frames() {
    let walker = FixedWalker::new(vec![named(1, "app::main")]);

    capture(&walker, SkipLevel::Wrap);
    assert_eq!(walker.requested_skip.get(), Some(SkipLevel::Wrap.frames()));

    capture(&walker, SkipLevel::NewError);
    assert_eq!(walker.requested_skip.get(), Some(SkipLevel::NewError.frames()));
}

#[test]
fn runtime_and_unresolved_frames_are_dropped() {
    let walker = FixedWalker::new(vec![
        named(1, "backtrace::backtrace::trace_unsynchronized"),
        named(2, "app::net::client::fetch"),
        FrameRef::new(FrameId::from_ip(3)),
        named(4, "STD::RT::lang_start_internal"),
        named(5, "app::main"),
        named(6, "__libc_start_main"),
    ]);

    let frames = capture(&walker, SkipLevel::CaptureOnly);
    let functions: Vec<&str> = frames.iter().map(|f| f.frame().function.as_str()).collect();
    let ips: Vec<usize> = frames.iter().map(|f| f.id().ip()).collect();

    assert_eq!(functions, ["client::fetch", "app::main"]);
    assert_eq!(ips, [2, 5]);
    assert_eq!(frames[0].frame().line, 2);
    assert_eq!(frames[0].frame().file, "/work/app/src/main.rs");
}

#[test]
fn unwalkable_stack_yields_an_empty_sequence() {
    let walker = FixedWalker::new(Vec::new());
    assert!(capture(&walker, SkipLevel::NewError).is_empty());
}

#[test]
fn missing_location_defaults_to_empty_file_and_line_zero() {
    let walker = FixedWalker::new(vec![FrameRef {
        id: FrameId::from_ip(9),
        function: Some("app::worker::run".to_string()),
        file: None,
        line: None,
    }]);

    let frames = capture(&walker, SkipLevel::CaptureOnly);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].frame().file, "");
    assert_eq!(frames[0].frame().line, 0);
}

#[test]
fn long_sequences_are_cut_at_the_root_end() {
    let frames: Vec<FrameRef> = (0..100).map(|ip| named(ip, "app::worker::step")).collect();
    let walker = FixedWalker::new(frames);

    let captured = capture(&walker, SkipLevel::CaptureOnly);
    let ips: Vec<usize> = captured.iter().map(|f| f.id().ip()).collect();

    assert_eq!(captured.len(), MAX_DEPTH);
    assert_eq!(ips, (0..MAX_DEPTH).collect::<Vec<_>>());
}

#[test]
fn depth_limit_applies_after_filtering() {
    let mut frames = vec![named(1000, "backtrace::backtrace::trace"); 10];
    frames.extend((0..MAX_DEPTH + 5).map(|ip| named(ip, "app::worker::step")));
    let walker = FixedWalker::new(frames);

    let captured = capture(&walker, SkipLevel::CaptureOnly);

    assert_eq!(captured.len(), MAX_DEPTH);
    assert_eq!(captured[0].id().ip(), 0);
    assert_eq!(captured[MAX_DEPTH - 1].id().ip(), MAX_DEPTH - 1);
}

#[test]
fn deep_recursion_keeps_the_deepest_frames() {
    let frames = recurse_then_capture(MAX_DEPTH + 36);

    assert_eq!(frames.len(), MAX_DEPTH);
    for traced in &frames {
        assert!(
            traced.frame().function.ends_with("recurse_then_capture"),
            "unexpected frame: {:?}",
            traced
        );
    }
    assert!(frames.iter().all(|traced| !traced.frame().function.contains("deep_recursion")));
}
