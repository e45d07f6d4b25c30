use super::*;

fn gradient(width: u32, height: u32) -> PixelGrid {
    let mut data = Vec::with_capacity((width * height) as usize);
    for row in 0..height {
        for x in 0..width {
            data.push(((x * 255) / width.max(1)).wrapping_add(row * 7) as u8);
        }
    }
    PixelGrid::new(width, height, data).unwrap()
}

#[test]
fn sequential_rows_are_in_order() {
    let g = PixelGrid::filled(4, 3, 255);
    let rows = generate_rows(&g, &ConversionConfig::default(), &RowThreading::default()).unwrap();
    assert_eq!(rows.len(), 3);
    for (row, path) in rows.iter().enumerate() {
        assert_eq!(path.points()[0].y, row as f64 * 2.0);
    }
}

#[test]
fn parallel_matches_sequential() {
    let g = gradient(97, 41);
    let cfg = ConversionConfig::default().with_organic_mode(true);
    let seq = generate_rows(&g, &cfg, &RowThreading::default()).unwrap();
    let par = generate_rows(
        &g,
        &cfg,
        &RowThreading {
            parallel: true,
            threads: Some(3),
        },
    )
    .unwrap();
    assert_eq!(seq, par);
}

#[test]
fn zero_threads_is_rejected() {
    let err = generate_rows(
        &PixelGrid::filled(1, 1, 0),
        &ConversionConfig::default(),
        &RowThreading {
            parallel: true,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(matches!(err, PolarwaveError::Validation(_)));
    assert!(err.to_string().contains("at least one worker thread"));
}

#[test]
fn row_pool_workers_are_named() {
    let pool = build_row_pool(Some(2)).unwrap();
    let name = pool.install(|| std::thread::current().name().map(str::to_owned));
    assert!(name.unwrap().starts_with("polarwave-row-"));
}

#[test]
fn convert_to_svg_shares_sequential_tracing() {
    let g = gradient(33, 9);
    let cfg = ConversionConfig::default().with_organic_mode(true);
    let rows = generate_rows(&g, &cfg, &RowThreading::default()).unwrap();
    assert_eq!(trace_rows_sequential(&g, &cfg), rows);
    assert_eq!(
        convert_to_svg(&g, &cfg),
        assemble_document(&rows, g.width(), g.height(), &cfg)
    );
}

#[test]
fn stats_count_rows_and_points() {
    // Row 0 all white (one flat point), row 1 black (three wave points).
    let g = PixelGrid::from_rows(&[[255u8, 255, 255], [0, 0, 0]]).unwrap();
    let (_, stats) =
        convert_with_stats(&g, &ConversionConfig::default(), &RowThreading::default()).unwrap();
    assert_eq!(
        stats,
        ConversionStats {
            width: 3,
            height: 2,
            rows_emitted: 2,
            rows_flat: 1,
            points_total: 4,
        }
    );
}

#[test]
fn stats_variant_produces_same_document() {
    let g = gradient(20, 6);
    let cfg = ConversionConfig::default();
    let (svg, _) = convert_with_stats(&g, &cfg, &RowThreading::default()).unwrap();
    assert_eq!(svg, convert_to_svg(&g, &cfg));
}

#[test]
fn zero_width_grid_emits_no_paths() {
    let g = PixelGrid::filled(0, 5, 0);
    let (svg, stats) =
        convert_with_stats(&g, &ConversionConfig::default(), &RowThreading::default()).unwrap();
    assert_eq!(stats.rows_emitted, 0);
    assert!(!svg.contains("<path"));
}
