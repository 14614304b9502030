use std::io;
use std::sync::{Arc, Mutex};

use gridcalc_core::Grid;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn trace_logs(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn results_are_traced() {
    let logs = trace_logs(|| {
        let a = Grid::<i32>::filled(2, 2, 1);
        let _ = a.try_add(&a).unwrap();
        let _ = a.div_scalar(2.0).unwrap();
        let _ = a.mul_scalar(3);
        let _ = a.concat_horizontal(&a).unwrap();
        let _ = a.concat_vertical(&a).unwrap();
        let _ = a.crop(0, 0, 0, 1).unwrap();
        let _ = a.upscale::<2, 2>();
    });

    for message in [
        "element-wise result",
        "scalar result",
        "mapped cells",
        "horizontal concatenation",
        "vertical concatenation",
        "copied block",
        "upscaled",
    ] {
        assert!(logs.contains(message), "missing {message:?} in {logs}");
    }
    assert!(logs.contains("TRACE"));
}

#[test]
fn rejections_are_debug_events() {
    let logs = trace_logs(|| {
        let a = Grid::<i32>::filled(2, 2, 1);
        let _ = a.crop(1, 0, 0, 0);
        let _ = a.try_add(&Grid::<i32>::sized(1, 1));
    });

    assert!(logs.contains("rejected crop"));
    assert!(logs.contains("rejected element-wise operation"));
    assert!(!logs.contains("element-wise result"));
}
