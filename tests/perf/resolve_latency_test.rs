use std::path::Path;
use std::time::{Duration, Instant};

use crate::model::RunningWindow;
use crate::resolver::IconResolver;
use crate::theme::{expand_search_paths, DataDirs};

fn p95_ms(samples: &mut [f64]) -> f64 {
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let last = samples.len().saturating_sub(1);
    let idx = ((last as f64) * 0.95).round() as usize;
    samples[idx.min(last)]
}

fn touch(path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, b"icon").unwrap();
}

#[test]
fn batch_resolution_p95_under_250ms_and_stable() {
    let data = tempfile::tempdir().unwrap();
    let theme_root = data.path().join("icons").join("Synthetic");
    for size in ["16x16", "24x24", "32x32", "48x48", "64x64", "scalable"] {
        for i in 0..300 {
            touch(&theme_root.join(size).join("apps").join(format!("app{i:04}.png")));
        }
    }
    let apps = data.path().join("applications");
    for i in 0..200 {
        let entry = apps.join(format!("org.synthetic.App{i:04}.desktop"));
        std::fs::create_dir_all(&apps).unwrap();
        std::fs::write(&entry, format!("[Desktop Entry]\nIcon=app{i:04}\n")).unwrap();
    }

    let dirs = DataDirs {
        user: data.path().to_path_buf(),
        system: vec![],
    };
    let paths = expand_search_paths("Synthetic", &dirs, &data.path().join("pixmaps"));
    let resolver = IconResolver::new(paths, vec![apps]);

    let windows: Vec<RunningWindow> = (0..40)
        .map(|i| {
            RunningWindow::new(
                &format!("0x{i:08x}"),
                "synthetic",
                &format!("doc{i}.txt - App{:04}", i * 5),
            )
        })
        .collect();

    let mut samples = Vec::with_capacity(windows.len());
    let mut first_pass = Vec::with_capacity(windows.len());
    for window in &windows {
        let started = Instant::now();
        first_pass.push(resolver.resolve(window));
        samples.push(started.elapsed().as_secs_f64() * 1000.0);
    }

    assert!(first_pass.iter().all(|icon| !icon.is_placeholder()));
    assert_eq!(resolver.resolve_all(&windows), first_pass);

    let p95 = p95_ms(&mut samples);
    assert!(
        Duration::from_secs_f64(p95 / 1000.0) < Duration::from_millis(250),
        "p95 resolve latency was {p95:.2}ms"
    );
}
