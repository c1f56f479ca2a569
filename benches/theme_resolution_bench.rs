use criterion::{Criterion, criterion_group, criterion_main};
use ods_charts::api::{
    CategoricalColor, CategoricalColorsSet, LineStyle, PaletteColorRef, ThemeManager, ThemeMode,
    ThemeOptions,
};
use ods_charts::core::{deep_clone, merge_objects};
use serde_json::{Value, json};
use std::hint::black_box;

fn wide_chart_data(series_count: usize, points: usize) -> Value {
    let categories: Vec<String> = (0..points).map(|i| format!("c{i}")).collect();
    let series: Vec<Value> = (0..series_count)
        .map(|s| {
            json!({
                "name": format!("series-{s}"),
                "type": "line",
                "data": (0..points).map(|p| (p * (s + 1)) as f64).collect::<Vec<_>>()
            })
        })
        .collect();
    json!({ "xAxis": { "data": categories }, "yAxis": {}, "series": series })
}

fn bench_resolve_default_theme(c: &mut Criterion) {
    c.bench_function("resolve_default_theme", |b| {
        b.iter(|| ThemeManager::resolve(black_box(ThemeOptions::default())))
    });
}

fn bench_resolve_custom_colors_dark(c: &mut Criterion) {
    let options = ThemeOptions::new()
        .with_mode(ThemeMode::Dark)
        .with_line_style(LineStyle::WithPoints)
        .with_categorical_colors(vec![
            CategoricalColor::from(PaletteColorRef::new(CategoricalColorsSet::DarkerTints, 0)),
            CategoricalColor::from(PaletteColorRef::new(CategoricalColorsSet::Green, 3)),
            CategoricalColor::from("#FF7900"),
        ]);

    c.bench_function("resolve_custom_colors_dark", |b| {
        b.iter(|| ThemeManager::resolve(black_box(options.clone())))
    });
}

fn bench_chart_options_20x500(c: &mut Criterion) {
    let data = wide_chart_data(20, 500);
    let mut manager = ThemeManager::resolve(ThemeOptions::default());
    manager.set_data_options(data);

    c.bench_function("chart_options_20x500", |b| {
        b.iter(|| {
            let _ = manager
                .build_chart_options(None)
                .expect("data options are set");
        })
    });
}

fn bench_merge_wide_fragment(c: &mut Criterion) {
    let fragment = wide_chart_data(10, 1_000);

    c.bench_function("merge_wide_fragment", |b| {
        b.iter(|| {
            let mut target = json!({ "xAxis": { "axisLabel": { "fontSize": 14 } } });
            merge_objects(&mut target, deep_clone(black_box(&fragment)));
            target
        })
    });
}

criterion_group!(
    benches,
    bench_resolve_default_theme,
    bench_resolve_custom_colors_dark,
    bench_chart_options_20x500,
    bench_merge_wide_fragment
);
criterion_main!(benches);
