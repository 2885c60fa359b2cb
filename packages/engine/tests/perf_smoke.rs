use lifegrid_engine::Life;

#[test]
fn perf_smoke_step() {
    let mut life = Life::with_seed(100, 7);
    life.enable_perf_metrics(true);
    life.random_fill(0.35);
    life.step_once();
    let stats = life.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.cells_processed(), 10_000);
    assert_eq!(stats.grid_size(), 100);
}

#[test]
fn perf_smoke_frame_renders_surface() {
    let mut life = Life::with_seed(50, 7);
    life.enable_perf_metrics(true);
    life.randomize();
    life.play();
    for i in 0..10 {
        life.frame(i as f64 * 120.0);
    }
    assert_eq!(life.generation(), 9);
    let layout = life.render_layout();
    assert_eq!(layout.cell_size(), 12);
    assert_eq!((layout.width(), layout.height()), (600, 600));
    assert_eq!(layout.pixels_len_elements(), 360_000);
    assert_eq!(layout.pixels_len_bytes(), 1_440_000);
    assert!(life.get_perf_stats().render_ms() >= 0.0);
}
